//! Quote provider implementations.
//!
//! Every provider implements [`cotacao_core::quotes::QuoteSource`]; the
//! pipeline only ever sees the trait.

pub mod awesome_api;
