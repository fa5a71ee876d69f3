//! `Timestamp` — an absolute point in calendar time.
//!
//! A timestamp is a plain calendar date (no time-of-day, no timezone). It
//! is not aligned to any period grid: period boundaries, parsed user input,
//! and range endpoints are all timestamps. Subtracting two timestamps
//! yields the calendar-relative [`TimeDelta`] between them.

use chrono::{Datelike, NaiveDate};
use epi_core::errors::{Error, Result};

use crate::delta::{add_months, TimeDelta};
use crate::parse::parse_with_default;

/// An absolute calendar date.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(NaiveDate);

impl Timestamp {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a timestamp from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Timestamp)
            .ok_or_else(|| Error::Date(format!("invalid date {year}-{month:02}-{day:02}")))
    }

    /// Wrap an existing calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        Timestamp(date)
    }

    /// Parse a free-text date string.
    ///
    /// Components missing from the text default to 1900-01-01, so a bare
    /// month like `"March 1985"` anchors to the first of the month.
    ///
    /// # Errors
    /// [`Error::Parse`] if the text does not resemble a calendar date.
    pub fn parse(text: &str) -> Result<Self> {
        let default = NaiveDate::from_ymd_opt(1900, 1, 1).expect("valid constant date");
        parse_with_default(text, default).map(Timestamp)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// The underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The year.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// The month (1–12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// The day of the month (1–31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Shift by a delta, reporting overflow as an error.
    pub fn shifted_by(&self, delta: TimeDelta) -> Result<Self> {
        delta
            .apply_to_date(self.0)
            .map(Timestamp)
            .ok_or_else(|| Error::Date(format!("date arithmetic overflow: {self} + {delta}")))
    }

    /// Signed number of whole days from `other` to `self`.
    pub(crate) fn days_since(&self, other: Timestamp) -> i64 {
        self.0.signed_duration_since(other.0).num_days()
    }
}

/// Decompose the span from `from` to `to` into a signed (years, months,
/// days) triple such that `from + triple == to`, with the month component
/// maximised and the day remainder carrying the same sign as the span.
pub(crate) fn calendar_between(from: NaiveDate, to: NaiveDate) -> TimeDelta {
    let mut months =
        (to.year() as i64 - from.year() as i64) * 12 + to.month() as i64 - from.month() as i64;
    let mut anchor = add_months(from, months).expect("date arithmetic overflow");
    if to >= from {
        while anchor > to {
            months -= 1;
            anchor = add_months(from, months).expect("date arithmetic overflow");
        }
    } else {
        while anchor < to {
            months += 1;
            anchor = add_months(from, months).expect("date arithmetic overflow");
        }
    }
    let days = to.signed_duration_since(anchor).num_days();
    TimeDelta::Calendar {
        years: (months / 12) as i32,
        months: (months % 12) as i32,
        days: days as i32,
    }
}

/// Signed whole-month component of the span from `from` to `to` (the day
/// remainder is dropped).
pub(crate) fn whole_months_between(from: NaiveDate, to: NaiveDate) -> i64 {
    match calendar_between(from, to) {
        TimeDelta::Calendar { years, months, .. } => years as i64 * 12 + months as i64,
        TimeDelta::Days(_) => unreachable!("calendar_between always returns a triple"),
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Sub<Timestamp> for Timestamp {
    type Output = TimeDelta;
    fn sub(self, rhs: Timestamp) -> TimeDelta {
        calendar_between(rhs.0, self.0)
    }
}

impl std::ops::Add<TimeDelta> for Timestamp {
    type Output = Self;
    fn add(self, rhs: TimeDelta) -> Self {
        self.shifted_by(rhs).expect("date arithmetic overflow")
    }
}

impl std::ops::Sub<TimeDelta> for Timestamp {
    type Output = Self;
    fn sub(self, rhs: TimeDelta) -> Self {
        self.shifted_by(-rhs).expect("date arithmetic underflow")
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl std::fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Timestamp({self})")
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
