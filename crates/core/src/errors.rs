//! Core error types for the cotacao service.
//!
//! Every stage of the request pipeline has its own error enum so callers can
//! tell deadline expiry apart from every other failure cause. Transport and
//! storage details are carried as strings to keep this crate independent of
//! `reqwest` and Diesel.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Returned when the shared request deadline elapses before an operation completes.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("request deadline exceeded")]
pub struct DeadlineExceeded;

/// Failures of the quote source (the outbound provider call).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The deadline elapsed before the provider's response was fully received.
    #[error("Deadline exceeded while fetching quote")]
    DeadlineExceeded,

    /// Connection refused, DNS failure, reset, or a non-success status.
    #[error("Transport failure: {0}")]
    Transport(String),

    /// The response could not be decoded into a complete quote.
    #[error("Decode failure: {0}")]
    Decode(String),
}

impl FetchError {
    pub fn is_deadline_exceeded(&self) -> bool {
        matches!(self, Self::DeadlineExceeded)
    }
}

impl From<DeadlineExceeded> for FetchError {
    fn from(_: DeadlineExceeded) -> Self {
        FetchError::DeadlineExceeded
    }
}

/// Failures of the quote store (the relational insert).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PersistError {
    /// The deadline elapsed while the insert was queued, prepared or executed.
    #[error("Deadline exceeded while persisting quote")]
    DeadlineExceeded,

    /// Connectivity, pool, constraint or statement failure.
    #[error("Store failure: {0}")]
    Store(String),
}

impl PersistError {
    pub fn is_deadline_exceeded(&self) -> bool {
        matches!(self, Self::DeadlineExceeded)
    }
}

impl From<DeadlineExceeded> for PersistError {
    fn from(_: DeadlineExceeded) -> Self {
        PersistError::DeadlineExceeded
    }
}

/// Terminal outcome of a failed request, attributed to the stage that failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Failed to obtain quote: {0}")]
    Fetch(#[from] FetchError),

    #[error("Failed to persist quote: {0}")]
    Persist(#[from] PersistError),
}

impl Error {
    pub fn is_deadline_exceeded(&self) -> bool {
        match self {
            Error::Fetch(e) => e.is_deadline_exceeded(),
            Error::Persist(e) => e.is_deadline_exceeded(),
        }
    }
}

/// Failure of the best-effort mirror write. Never escapes the pipeline.
#[derive(Error, Debug)]
pub enum MirrorError {
    #[error("Failed to write mirror file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
