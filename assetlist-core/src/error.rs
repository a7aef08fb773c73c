//! Structured error type for asset-list construction.

use crate::domain::Month;
use thiserror::Error;

/// Errors raised while building an asset list.
///
/// Construction is all-or-nothing: any error aborts the build before a
/// partially populated list is exposed, and nothing is retried.
#[derive(Debug, Error)]
pub enum ListError {
    /// A symbol could not be resolved by the asset, FX, or inflation
    /// provider.
    #[error("symbol not found: {symbol}")]
    NotFound { symbol: String },

    /// Malformed caller input: a bad period, or series data that violates
    /// the index invariants.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Date bounds resolved to an inverted range, usually from a
    /// caller-supplied override.
    #[error("invalid date range: first_date {first} is after last_date {last}")]
    InvalidRange { first: Month, last: Month },

    /// The asset set shares no common history at all.
    #[error("assets share no overlapping history")]
    NoOverlap,

    /// The local CSV/TOML store failed to read or parse its files.
    #[error("store error: {0}")]
    Store(String),
}
