//! tallydb — an in-memory purchase-frequency database.
//!
//! Builds an item→count index from a whitespace-delimited token stream,
//! exposes case-tolerant lookup and lexicographic enumeration, persists a
//! flat textual backup, and scales counts into heatmap buckets for the
//! console layer.

pub mod backup;
pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod loader;

pub use db::FrequencyDb;
pub use error::Error;

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, Error>;
