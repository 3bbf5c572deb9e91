//! Error types for tallydb.

use std::path::PathBuf;
use thiserror::Error;

/// All failure conditions surfaced by the frequency database and its
/// collaborators. A lookup miss is never an error; it is `Ok(None)`.
#[derive(Debug, Error)]
pub enum Error {
    /// The input source cannot be opened. Fatal: the session cannot
    /// proceed without a database.
    #[error("cannot open input source {path}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input source yielded zero usable tokens.
    #[error("input source contains no usable tokens")]
    EmptySource,

    /// The backup destination cannot be created. Fatal to the backup
    /// step only; the in-memory database stays valid.
    #[error("cannot create backup destination {path}: {source}")]
    SinkUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Heatmap scaling requested with no observed maximum.
    #[error("heatmap scaling requested against an empty database")]
    NoData,

    /// A query was issued before ingestion completed.
    #[error("database queried before ingestion completed")]
    NotReady,

    /// `ingest` was called a second time on the same database.
    #[error("database has already been ingested")]
    AlreadyIngested,

    /// Configuration file could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
