//! Database module for tallydb.
//!
//! Contains the core frequency database, case-tolerant search, and
//! heatmap scaling.

pub mod core;
pub mod heatmap;
pub mod search;

pub use core::FrequencyDb;
pub use heatmap::{bucket, BUCKETS};
pub use search::resolve;
