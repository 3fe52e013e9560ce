//! Cotacao Core - Domain entities, services, and traits.
//!
//! This crate contains the quote domain model and the request pipeline that
//! fetches a quote, persists it and mirrors it to disk under one shared
//! [`Deadline`]. It is transport- and database-agnostic: the provider client
//! lives in `cotacao-market-data` and the relational store in
//! `cotacao-storage-sqlite`, both implementing traits defined here.

pub mod constants;
pub mod deadline;
pub mod errors;
pub mod quotes;

pub use deadline::Deadline;

// Re-export error types
pub use errors::{DeadlineExceeded, Error, FetchError, MirrorError, PersistError, Result};
