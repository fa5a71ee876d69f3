//! # episurv
//!
//! Building blocks for disease-surveillance data pipelines.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `epi-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use episurv::time::{PeriodRange, TimeDelta};
//!
//! let range = PeriodRange::from_strings(["202001", "202002", "202003"])?;
//! assert_eq!(range.len(), 3);
//! assert_eq!(range.delta(), TimeDelta::MONTH);
//! # Ok::<(), episurv::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error taxonomy and shared containers.
pub use epi_core as core;

/// Timestamps, deltas, periods, and period ranges.
pub use epi_time as time;
