//! Error types for the evflow pipeline
//!
//! Provides a unified error type for all evflow crates, split into the two
//! failure families the pipeline can actually hit: bad input data
//! ([`SourceError`]) and bad construction parameters ([`ConfigError`]).

use thiserror::Error;

/// Errors raised while opening or reading an event source.
///
/// All variants are fatal for the affected record or stream; the driver does
/// not retry internally.
#[derive(Error, Debug)]
pub enum SourceError {
    /// Store path or table name could not be resolved
    #[error("not found: {0}")]
    NotFound(String),

    /// A record's columns disagree in length; rejected rather than truncated
    #[error("malformed record at event {event}: {reason}")]
    Malformed { event: u64, reason: String },

    /// Underlying I/O failure while reading the store
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Store payload could not be decoded
    #[error("decode error: {0}")]
    Decode(String),
}

/// Errors raised at construction time, never mid-stream.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    /// Histogram bin count must be at least 1
    #[error("bin count must be positive")]
    NonPositiveBins,

    /// Histogram range must satisfy lo < hi with finite bounds
    #[error("invalid histogram range: [{lo}, {hi})")]
    InvalidRange { lo: f64, hi: f64 },

    /// Selection threshold must be a finite number
    #[error("threshold must be finite, got {0}")]
    NonFiniteThreshold(f64),

    /// Histograms with different binnings cannot be merged
    #[error("cannot merge histograms with incompatible binning")]
    IncompatibleBinning,
}

/// Top-level error type for evflow operations
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl SourceError {
    /// Create an error for a record whose columns disagree in length
    pub fn column_mismatch(event: u64, e: usize, px: usize, py: usize) -> Self {
        Self::Malformed {
            event,
            reason: format!("column lengths disagree (e={e}, px={px}, py={py})"),
        }
    }
}
