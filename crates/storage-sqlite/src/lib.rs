//! SQLite storage implementation for cotacao.
//!
//! This crate is the only place in the workspace where Diesel dependencies
//! exist. It implements [`cotacao_core::quotes::QuoteStore`] and contains:
//! - Database initialization and connection pooling
//! - Embedded Diesel migrations
//! - A single-writer actor that runs inserts under the request deadline
//! - The quote repository and its Diesel row types
//!
//! ```text
//! QuoteService (core)
//!       │ persist(deadline, quote)
//!       ▼
//! QuoteRepository ──▶ WriteHandle ──▶ writer thread ──▶ SQLite
//! ```

pub mod db;
pub mod errors;
pub mod quotes;
pub mod schema;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, write_actor::spawn_writer, DbConnection,
    DbPool, WriteHandle,
};

// Re-export storage errors
pub use errors::StorageError;

pub use quotes::QuoteRepository;
