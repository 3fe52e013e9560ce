//! Fetch-and-persist pipeline.
//!
//! Each call walks `Fetching → Persisting → Mirroring` under one [`Deadline`]
//! derived at the start of the request. The deadline is handed unchanged to
//! the source and then to the store, so a slow provider directly shortens
//! the time the store write gets. The mirror runs after a successful insert,
//! outside the deadline, and its failures never reach the caller.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, error, info, warn};

use super::mirror::QuoteMirror;
use super::model::Quote;
use super::source::QuoteSource;
use super::store::QuoteStore;
use crate::constants::DEFAULT_REQUEST_BUDGET;
use crate::deadline::Deadline;
use crate::errors::{Error, FetchError, PersistError, Result};

#[async_trait]
pub trait QuoteServiceTrait: Send + Sync {
    /// Runs one request with a fresh deadline of the configured budget.
    async fn fetch_and_store(&self) -> Result<Quote>;

    /// Runs one request against a caller-supplied deadline.
    async fn fetch_and_store_until(&self, deadline: Deadline) -> Result<Quote>;
}

pub struct QuoteService {
    source: Arc<dyn QuoteSource>,
    store: Arc<dyn QuoteStore>,
    mirror: Arc<dyn QuoteMirror>,
    budget: Duration,
}

impl QuoteService {
    pub fn new(
        source: Arc<dyn QuoteSource>,
        store: Arc<dyn QuoteStore>,
        mirror: Arc<dyn QuoteMirror>,
    ) -> Self {
        Self {
            source,
            store,
            mirror,
            budget: DEFAULT_REQUEST_BUDGET,
        }
    }

    pub fn with_budget(mut self, budget: Duration) -> Self {
        self.budget = budget;
        self
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    async fn fetch(&self, deadline: &Deadline) -> Result<Quote> {
        self.source.fetch(deadline).await.map_err(|e| {
            match &e {
                FetchError::DeadlineExceeded => warn!(
                    "Request budget of {:?} exhausted while fetching quote from provider",
                    self.budget
                ),
                other => error!("Failed to fetch quote from provider: {}", other),
            }
            Error::Fetch(e)
        })
    }

    async fn persist(&self, deadline: &Deadline, quote: &Quote) -> Result<()> {
        self.store.persist(deadline, quote).await.map_err(|e| {
            match &e {
                PersistError::DeadlineExceeded => warn!(
                    "Request budget of {:?} exhausted while persisting quote",
                    self.budget
                ),
                other => error!("Failed to persist quote: {}", other),
            }
            Error::Persist(e)
        })
    }

    async fn mirror(&self, quote: &Quote) {
        if let Err(e) = self.mirror.mirror(quote).await {
            warn!("Ignoring mirror failure: {}", e);
        }
    }
}

#[async_trait]
impl QuoteServiceTrait for QuoteService {
    async fn fetch_and_store(&self) -> Result<Quote> {
        self.fetch_and_store_until(Deadline::after(self.budget)).await
    }

    async fn fetch_and_store_until(&self, deadline: Deadline) -> Result<Quote> {
        let quote = self.fetch(&deadline).await?;
        debug!(
            "Fetched {}{} quote, {:?} of budget left",
            quote.code,
            quote.codein,
            deadline.remaining()
        );

        self.persist(&deadline, &quote).await?;

        self.mirror(&quote).await;

        info!("Quote {}{} stored with bid {}", quote.code, quote.codein, quote.bid);
        Ok(quote)
    }
}
