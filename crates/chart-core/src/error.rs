// File: crates/chart-core/src/error.rs
// Summary: Error types for series parsing and chart configuration.

use thiserror::Error;

/// Errors raised while turning raw input into a [`crate::Series`].
#[derive(Error, Debug)]
pub enum SeriesError {
    /// A token in a value list is not a number.
    #[error("value #{index} is not a number: {token:?}")]
    NotANumber { index: usize, token: String },

    /// The requested CSV column does not exist in the header row.
    #[error("CSV column not found: {0}")]
    MissingColumn(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Errors surfaced by the chart crate. Layout itself never fails; these come
/// from parsing user-facing names and loading configuration.
#[derive(Error, Debug)]
pub enum ChartError {
    /// Encoding name outside `bar`, `line`, `area`.
    #[error("unknown chart encoding: {0:?} (expected bar, line or area)")]
    UnknownEncoding(String),

    #[error(transparent)]
    Series(#[from] SeriesError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// Configuration parsed but holds unusable values.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

pub type ChartResult<T> = Result<T, ChartError>;
