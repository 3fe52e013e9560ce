//! SQLite persistence for quotes.

mod model;
mod repository;

pub use model::{NewQuoteDB, QuoteDB};
pub use repository::QuoteRepository;
