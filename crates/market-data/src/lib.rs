//! Cotacao Market Data Crate
//!
//! Fetches the current USD-BRL quote from the remote provider and decodes it
//! into [`cotacao_core::quotes::Quote`].
//!
//! ```text
//! QuoteService ──▶ QuoteSource (cotacao-core trait)
//!                        │
//!                        ▼
//!                 AwesomeApiProvider ──HTTPS GET──▶ economia.awesomeapi.com.br
//! ```
//!
//! Providers do exactly one request per call, bounded by the caller's
//! [`cotacao_core::Deadline`]. Expiry is reported as
//! [`cotacao_core::FetchError::DeadlineExceeded`], every other network
//! failure as `Transport`, and unusable payloads as `Decode`.

pub mod provider;

// Re-export provider types
pub use provider::awesome_api::AwesomeApiProvider;
