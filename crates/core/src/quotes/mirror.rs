//! Best-effort local copy of the latest bid.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::debug;
use rust_decimal::RoundingStrategy;

use super::model::Quote;
use crate::constants::{DEFAULT_MIRROR_FILE, MIRROR_DECIMAL_PRECISION};
use crate::errors::MirrorError;

/// Side channel written after a quote has been stored.
///
/// Failures are reported to the caller for logging only; the pipeline never
/// lets them change the response.
#[async_trait]
pub trait QuoteMirror: Send + Sync {
    async fn mirror(&self, quote: &Quote) -> Result<(), MirrorError>;
}

/// Overwrites a single file with one human-readable line per request.
///
/// Concurrent requests may interleave their writes; the file only ever holds
/// a recent bid, never a history.
pub struct FileMirror {
    path: PathBuf,
}

impl FileMirror {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileMirror {
    fn default() -> Self {
        Self::new(DEFAULT_MIRROR_FILE)
    }
}

/// Renders the mirror line, e.g. `Dólar: 5.05`.
pub fn mirror_line(quote: &Quote) -> String {
    let bid = quote
        .bid
        .round_dp_with_strategy(MIRROR_DECIMAL_PRECISION, RoundingStrategy::MidpointAwayFromZero);
    format!("Dólar: {:.2}\n", bid)
}

#[async_trait]
impl QuoteMirror for FileMirror {
    async fn mirror(&self, quote: &Quote) -> Result<(), MirrorError> {
        tokio::fs::write(&self.path, mirror_line(quote))
            .await
            .map_err(|source| MirrorError::Io {
                path: self.path.display().to_string(),
                source,
            })?;
        debug!("Quote mirrored to {}", self.path.display());
        Ok(())
    }
}
