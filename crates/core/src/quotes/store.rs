//! Quote storage trait.
//!
//! Abstracts the relational store so the pipeline can run against SQLite in
//! production and against in-memory doubles in tests.

use async_trait::async_trait;

use super::model::Quote;
use crate::deadline::Deadline;
use crate::errors::PersistError;

/// Durable, append-only quote storage.
#[async_trait]
pub trait QuoteStore: Send + Sync {
    /// Inserts one row for `quote`.
    ///
    /// `deadline` is the request's shared deadline, already partly consumed by
    /// the fetch. An expired deadline fails with
    /// [`PersistError::DeadlineExceeded`] and leaves no row behind.
    async fn persist(&self, deadline: &Deadline, quote: &Quote) -> Result<(), PersistError>;
}
