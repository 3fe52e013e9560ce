//! Storage-specific error types for SQLite operations.
//!
//! These errors wrap Diesel and r2d2 types and stay inside this crate; at the
//! [`QuoteStore`](cotacao_core::quotes::QuoteStore) boundary they are
//! converted to [`PersistError`].

use cotacao_core::{DeadlineExceeded, PersistError};
use diesel::result::Error as DieselError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection failed: {0}")]
    ConnectionFailed(#[from] diesel::ConnectionError),

    #[error("Connection pool error: {0}")]
    PoolError(#[from] r2d2::Error),

    #[error("Query execution failed: {0}")]
    QueryFailed(#[from] DieselError),

    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    #[error("Database file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Stored value is invalid: {0}")]
    SerializationError(String),

    #[error("Database writer is not running")]
    WriterUnavailable,

    #[error("Deadline exceeded before the write completed")]
    DeadlineExceeded,
}

impl From<DeadlineExceeded> for StorageError {
    fn from(_: DeadlineExceeded) -> Self {
        StorageError::DeadlineExceeded
    }
}

impl From<StorageError> for PersistError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::DeadlineExceeded => PersistError::DeadlineExceeded,
            other => PersistError::Store(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deadline_maps_to_persist_deadline() {
        let err: PersistError = StorageError::DeadlineExceeded.into();
        assert_eq!(err, PersistError::DeadlineExceeded);
    }

    #[test]
    fn test_other_errors_map_to_store_failure() {
        let err: PersistError = StorageError::QueryFailed(DieselError::NotFound).into();
        assert_eq!(
            err,
            PersistError::Store("Query execution failed: Record not found".to_string())
        );

        let err: PersistError = StorageError::WriterUnavailable.into();
        assert!(matches!(err, PersistError::Store(_)));
    }
}
