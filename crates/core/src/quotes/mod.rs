//! Quote management module.
//!
//! - [`model`] - The [`Quote`] domain model
//! - [`source`] - Trait for the remote quote provider
//! - [`store`] - Trait for durable quote persistence
//! - [`mirror`] - Best-effort local file copy of the latest bid
//! - [`service`] - The fetch, persist and mirror pipeline
//!
//! ```text
//! QuoteService ──fetch──▶ QuoteSource (market-data crate)
//!      │
//!      ├──persist──▶ QuoteStore (storage-sqlite crate)
//!      │
//!      └──mirror───▶ QuoteMirror (file, best effort)
//! ```

pub mod mirror;
pub mod model;
pub mod service;
pub mod source;
pub mod store;


pub use mirror::{FileMirror, QuoteMirror};
pub use model::Quote;
pub use service::{QuoteService, QuoteServiceTrait};
pub use source::QuoteSource;
pub use store::QuoteStore;
