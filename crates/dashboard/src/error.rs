// File: crates/dashboard/src/error.rs
// Summary: Errors returned by panel refreshes.

//! Refresh error types

use thiserror::Error;

/// Errors from fetching a panel's series.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeedError {
    /// The refresh was cancelled before the source answered.
    #[error("refresh cancelled")]
    Cancelled,

    /// The source did not answer within the refresh timeout.
    #[error("refresh timed out after {0} ms")]
    TimedOut(u64),

    /// The source answered with an error.
    #[error("source error: {0}")]
    Source(String),

    #[error("no data for panel: {0}")]
    UnknownPanel(String),
}
