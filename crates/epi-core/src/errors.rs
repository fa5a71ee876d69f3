//! Error types for episurv.
//!
//! The period-arithmetic core surfaces every failure immediately and never
//! retries or guesses: an unparseable period string, a delta division across
//! incompatible granularities, or a gap in a supposedly contiguous range is
//! reported to the caller, who decides whether to degrade or abort. No
//! partial results are returned alongside an error.

use thiserror::Error;

/// The top-level error type used throughout episurv.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Input string does not match any recognized period/timestamp format.
    #[error("parse error: {0}")]
    Parse(String),

    /// Delta division or remainder across incompatible granularities
    /// (day-based versus month/year-based).
    #[error("incompatible units: {0}")]
    IncompatibleUnits(String),

    /// Operation mixes periods or period ranges of different resolutions.
    #[error("unequal resolution: {0}")]
    UnequalResolution(String),

    /// Range construction detected a gap between consecutive periods.
    #[error("periods must be consecutive: {0}")]
    NonConsecutive(String),

    /// Index out of range.
    #[error("index ({index}) out of range for length {len}")]
    IndexOutOfRange {
        /// The index that was requested.
        index: i64,
        /// The length of the range.
        len: usize,
    },

    /// Empty or inverted slice request, or a fractional range span.
    #[error("invalid range: {0}")]
    InvalidRange(String),

    /// Stepped slicing was requested; ranges are arithmetic, not list-backed.
    #[error("unsupported slice: {0}")]
    UnsupportedSlice(String),

    /// Invalid calendar fields (month out of 1–12, day past end of month, …).
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument (zero divisor, zero-length step, …).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout episurv.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return early with the given error if a condition does not hold.
///
/// # Example
/// ```
/// use epi_core::{ensure, errors::Error};
/// fn checked(len: usize) -> epi_core::errors::Result<usize> {
///     ensure!(len > 0, Error::InvalidRange("empty range".into()));
///     Ok(len)
/// }
/// assert!(checked(1).is_ok());
/// assert!(checked(0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
}
