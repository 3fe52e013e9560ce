//! Quote source trait.

use async_trait::async_trait;

use super::model::Quote;
use crate::deadline::Deadline;
use crate::errors::FetchError;

/// Remote provider of the current quote.
///
/// Implementations issue exactly one outbound request, bounded by `deadline`,
/// and never retry or cache.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    async fn fetch(&self, deadline: &Deadline) -> Result<Quote, FetchError>;
}
