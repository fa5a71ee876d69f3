//! # epi-time
//!
//! Calendar period arithmetic for disease-surveillance pipelines: a closed
//! algebra of calendar-aligned periods (day/week/month/year), absolute
//! timestamps, calendar-relative deltas, and compact contiguous period
//! ranges.
//!
//! Train/test splitting, forecasting horizons, multi-resolution
//! aggregation, and DHIS2-style period IDs are all built on these types, so
//! the invariants are strict: periods are half-open intervals, ranges are
//! gap-free and single-resolution, and every calendar irregularity (month
//! lengths, ISO week numbering, leap years) is handled here rather than by
//! callers.
//!
//! ## Period ID formats
//!
//! | Resolution | Format      | Example    |
//! |------------|-------------|------------|
//! | Day        | `YYYYMMDD`  | `20200115` |
//! | Week       | `YYYY"W"WW` | `2020W03`  |
//! | Month      | `YYYYMM`    | `202001`   |
//! | Year       | `YYYY`      | `2020`     |

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `TimeDelta` — calendar-relative signed offsets.
pub mod delta;

/// `TimePeriod` — half-open calendar-aligned intervals.
pub mod period;

/// `PeriodRange` — compact contiguous period sequences.
pub mod period_range;

/// `Resolution` — the day/week/month/year granularity tag.
pub mod resolution;

/// `Timestamp` — absolute calendar dates.
pub mod timestamp;

mod parse;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use delta::TimeDelta;
pub use period::{Day, Month, TimePeriod, Week, Year};
pub use period_range::{PeriodRange, Side};
pub use resolution::Resolution;
pub use timestamp::Timestamp;
