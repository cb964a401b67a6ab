use thiserror::Error;

/// Result alias for series construction.
pub type SeriesResult<T> = Result<T, SeriesError>;

/// Error type surfaced when an input series violates its invariants.
///
/// The engine declines to compute over a malformed series rather than
/// producing silently misleading indicator values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeriesError {
    /// The `day` column must be strictly increasing and unique.
    #[error("bar days must be strictly increasing: violation at position {position}")]
    NonMonotonicDays {
        /// Position of the first bar whose day is not after its predecessor's.
        position: usize,
    },
}
