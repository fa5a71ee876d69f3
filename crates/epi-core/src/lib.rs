//! # epi-core
//!
//! Shared building blocks for the episurv workspace: the error taxonomy,
//! the `ensure!` macro, and the generic time-indexed series container that
//! dataset collaborators fill and align against period ranges.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Generic time-indexed observation container.
pub mod time_series;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use time_series::TimeSeries;
