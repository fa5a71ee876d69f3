//! `TimePeriod` — a half-open, calendar-aligned time interval.
//!
//! Four resolutions exist: [`Day`], [`Week`], [`Month`], and [`Year`]. Each
//! period covers `[start, start + extension)` where the extension is one
//! resolution step, so a Month starting 2021-01-01 ends the instant
//! 2021-02-01 begins. Periods of different resolutions are never equal even
//! when they share a start date, and ordering is interval ordering: `a < b`
//! holds only when `a` ends before `b` begins, so overlapping periods are
//! unordered.

use chrono::{Datelike, NaiveDate};
use epi_core::ensure;
use epi_core::errors::{Error, Result};

use crate::delta::TimeDelta;
use crate::parse::parse_with_default;
use crate::resolution::Resolution;
use crate::timestamp::{calendar_between, Timestamp};

// ── Resolution variants ───────────────────────────────────────────────────────

/// A single calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Day {
    date: NaiveDate,
}

impl Day {
    /// Create from year, month (1–12), and day-of-month (1–31).
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        Ok(Self {
            date: valid_date(year, month, day)?,
        })
    }

    /// Create from an anchor date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self { date }
    }

    /// The year.
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// The month (1–12).
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    /// The day of the month (1–31).
    pub fn day(&self) -> u32 {
        self.date.day()
    }
}

/// A calendar week, anchored at a date and carrying an explicit ISO week
/// number.
///
/// The stored week number is load-bearing: two weeks are equal only when
/// both the anchor date and the week number match. Construction from a
/// `(year, week)` pair anchors at the Monday of that ISO week; construction
/// from a date keeps the date as-is and derives the week from the ISO
/// calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Week {
    date: NaiveDate,
    week: u32,
}

impl Week {
    /// Create from an ISO week-year and week number (1–53).
    pub fn from_year_week(year: i32, week: u32) -> Result<Self> {
        let date = NaiveDate::from_isoywd_opt(year, week, chrono::Weekday::Mon)
            .ok_or_else(|| Error::Date(format!("year {year} has no ISO week {week}")))?;
        Ok(Self { date, week })
    }

    /// Create from an anchor date, deriving the week number from the ISO
    /// calendar.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            date,
            week: date.iso_week().week(),
        }
    }

    /// The ISO week-year (may differ from the anchor's calendar year on
    /// year-boundary weeks).
    pub fn year(&self) -> i32 {
        self.date.iso_week().year()
    }

    /// The stored week number.
    pub fn week(&self) -> u32 {
        self.week
    }
}

/// A calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Month {
    date: NaiveDate,
}

impl Month {
    /// Create from year and month (1–12), anchored at day 1.
    pub fn new(year: i32, month: u32) -> Result<Self> {
        Ok(Self {
            date: valid_date(year, month, 1)?,
        })
    }

    /// Create from an anchor date (kept as-is, need not be day 1).
    pub fn from_date(date: NaiveDate) -> Self {
        Self { date }
    }

    /// The year.
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// The month (1–12).
    pub fn month(&self) -> u32 {
        self.date.month()
    }
}

/// A calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Year {
    date: NaiveDate,
}

impl Year {
    /// Create from a year number, anchored at January 1.
    pub fn new(year: i32) -> Result<Self> {
        Ok(Self {
            date: valid_date(year, 1, 1)?,
        })
    }

    /// Create from an anchor date (kept as-is, need not be January 1).
    pub fn from_date(date: NaiveDate) -> Self {
        Self { date }
    }

    /// The year.
    pub fn year(&self) -> i32 {
        self.date.year()
    }
}

fn valid_date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| Error::Date(format!("invalid date {year}-{month:02}-{day:02}")))
}

// ── The tagged union ──────────────────────────────────────────────────────────

/// A calendar-aligned period of one of the four resolutions.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimePeriod {
    /// Day resolution.
    Day(Day),
    /// Week resolution.
    Week(Week),
    /// Month resolution.
    Month(Month),
    /// Year resolution.
    Year(Year),
}

impl From<Day> for TimePeriod {
    fn from(p: Day) -> Self {
        TimePeriod::Day(p)
    }
}

impl From<Week> for TimePeriod {
    fn from(p: Week) -> Self {
        TimePeriod::Week(p)
    }
}

impl From<Month> for TimePeriod {
    fn from(p: Month) -> Self {
        TimePeriod::Month(p)
    }
}

impl From<Year> for TimePeriod {
    fn from(p: Year) -> Self {
        TimePeriod::Year(p)
    }
}

impl TimePeriod {
    // ── Parsing ───────────────────────────────────────────────────────────────

    /// Parse a strict period ID: `YYYYMMDD` → Day, `YYYY"W"WW` → Week,
    /// `YYYYMM` → Month, `YYYY` → Year.
    pub fn from_id(id: &str) -> Result<Self> {
        if let Some((year, week)) = id.split_once('W') {
            let y: i32 = int_field(year, id)?;
            let w: u32 = int_field(week, id)?;
            return Ok(Week::from_year_week(y, w)?.into());
        }
        if !id.is_empty() && id.chars().all(|c| c.is_ascii_digit()) {
            match id.len() {
                4 => return Ok(Year::new(int_field(id, id)?)?.into()),
                6 => {
                    return Ok(Month::new(int_field(&id[..4], id)?, int_field(&id[4..], id)?)?
                        .into())
                }
                8 => {
                    return Ok(Day::new(
                        int_field(&id[..4], id)?,
                        int_field(&id[4..6], id)?,
                        int_field(&id[6..], id)?,
                    )?
                    .into())
                }
                _ => {}
            }
        }
        Err(Error::Parse(format!("'{id}' is not a period id")))
    }

    /// Parse a period string with format auto-detection.
    ///
    /// ID forms are tried first (`2024W05`, `20240115`, `202401`, `2024`;
    /// all-digit strings of up to four digits read as a year). Anything
    /// else goes through the free-text heuristic of [`parse_generic`].
    ///
    /// [`parse_generic`]: TimePeriod::parse_generic
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        if text.contains('W') {
            return Self::from_id(text);
        }
        if !text.is_empty() && text.chars().all(|c| c.is_ascii_digit()) {
            return match text.len() {
                1..=4 => Ok(Year::new(int_field(text, text)?)?.into()),
                6 => Self::from_id(text),
                8 => Self::from_id(text),
                _ => Err(Error::Parse(format!("'{text}' is not a period id"))),
            };
        }
        Self::parse_generic(text)
    }

    /// Parse free-form date text, inferring resolution by parsing twice
    /// with two different default dates: a component that comes out the
    /// same under both defaults must have been present in the text.
    ///
    /// Best-effort by design; ambiguous free text from external systems can
    /// misclassify, and callers needing exact resolutions should use period
    /// IDs.
    pub fn parse_generic(text: &str) -> Result<Self> {
        let d1 = NaiveDate::from_ymd_opt(2010, 1, 1).expect("valid constant date");
        let d2 = NaiveDate::from_ymd_opt(2009, 11, 10).expect("valid constant date");
        let a = parse_with_default(text, d1)?;
        let b = parse_with_default(text, d2)?;
        if a.day() == b.day() {
            Ok(Day::from_date(a).into())
        } else if a.month() == b.month() {
            Ok(Month::from_date(a).into())
        } else {
            Ok(Year::from_date(a).into())
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// The resolution tag.
    pub fn resolution(&self) -> Resolution {
        match self {
            TimePeriod::Day(_) => Resolution::Day,
            TimePeriod::Week(_) => Resolution::Week,
            TimePeriod::Month(_) => Resolution::Month,
            TimePeriod::Year(_) => Resolution::Year,
        }
    }

    /// One resolution step.
    pub fn time_delta(&self) -> TimeDelta {
        self.resolution().time_delta()
    }

    pub(crate) fn anchor(&self) -> NaiveDate {
        match self {
            TimePeriod::Day(p) => p.date,
            TimePeriod::Week(p) => p.date,
            TimePeriod::Month(p) => p.date,
            TimePeriod::Year(p) => p.date,
        }
    }

    pub(crate) fn exclusive_end(&self) -> NaiveDate {
        self.time_delta()
            .apply_to_date(self.anchor())
            .expect("date arithmetic overflow")
    }

    /// The inclusive start of the interval.
    pub fn start_timestamp(&self) -> Timestamp {
        Timestamp::from_date(self.anchor())
    }

    /// The exclusive end of the interval (`start + one resolution step`).
    pub fn end_timestamp(&self) -> Timestamp {
        Timestamp::from_date(self.exclusive_end())
    }

    /// The stable, round-trippable string identifier (format table in the
    /// crate docs).
    pub fn id(&self) -> String {
        match self {
            TimePeriod::Day(p) => format!("{:04}{:02}{:02}", p.year(), p.month(), p.day()),
            TimePeriod::Week(p) => format!("{}W{:02}", p.year(), p.week()),
            TimePeriod::Month(p) => format!("{:04}{:02}", p.year(), p.month()),
            TimePeriod::Year(p) => format!("{:04}", p.year()),
        }
    }

    /// Rebuild a period of the given resolution around an anchor date.
    pub(crate) fn from_anchor(resolution: Resolution, date: NaiveDate) -> Self {
        match resolution {
            Resolution::Day => Day::from_date(date).into(),
            Resolution::Week => Week::from_date(date).into(),
            Resolution::Month => Month::from_date(date).into(),
            Resolution::Year => Year::from_date(date).into(),
        }
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Shift the anchor by a delta, preserving the resolution. Week periods
    /// re-derive their stored week number from the shifted date.
    pub fn shifted_by(&self, delta: TimeDelta) -> Result<Self> {
        let date = delta.apply_to_date(self.anchor()).ok_or_else(|| {
            Error::Date(format!("date arithmetic overflow: {self:?} + {delta}"))
        })?;
        Ok(Self::from_anchor(self.resolution(), date))
    }

    /// The next period at the same resolution.
    pub fn successor(&self) -> Self {
        *self + self.time_delta()
    }

    /// The delta between the anchors of two same-resolution periods:
    /// a raw day count for day/week resolution, a calendar triple for
    /// month/year resolution.
    ///
    /// # Errors
    /// [`Error::UnequalResolution`] on cross-resolution subtraction.
    pub fn sub(&self, other: &TimePeriod) -> Result<TimeDelta> {
        ensure!(
            self.resolution() == other.resolution(),
            Error::UnequalResolution(format!("cannot subtract {other:?} from {self:?}"))
        );
        Ok(match self.resolution() {
            Resolution::Day | Resolution::Week => TimeDelta::Days(
                self.start_timestamp().days_since(other.start_timestamp()),
            ),
            Resolution::Month | Resolution::Year => {
                calendar_between(other.anchor(), self.anchor())
            }
        })
    }

    // ── Interval relations against a bare timestamp ───────────────────────────

    /// Whether the timestamp falls inside the half-open interval.
    pub fn contains(&self, ts: Timestamp) -> bool {
        self.anchor() <= ts.date() && ts.date() < self.exclusive_end()
    }

    /// Whether the whole interval lies before the timestamp.
    pub fn is_before(&self, ts: Timestamp) -> bool {
        self.exclusive_end() <= ts.date()
    }

    /// Whether the whole interval lies after the timestamp.
    pub fn is_after(&self, ts: Timestamp) -> bool {
        self.anchor() > ts.date()
    }
}

// ── Interval ordering ─────────────────────────────────────────────────────────

impl PartialOrd for TimePeriod {
    /// Interval ordering: `Less` when `self` ends on or before `other`
    /// starts, `Greater` when `self` starts on or after `other` ends,
    /// `Equal` only for identical periods. Overlapping, non-identical
    /// periods are unordered.
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        if self == other {
            Some(std::cmp::Ordering::Equal)
        } else if self.exclusive_end() <= other.anchor() {
            Some(std::cmp::Ordering::Less)
        } else if self.anchor() >= other.exclusive_end() {
            Some(std::cmp::Ordering::Greater)
        } else {
            None
        }
    }
}

impl std::ops::Add<TimeDelta> for TimePeriod {
    type Output = Self;
    fn add(self, rhs: TimeDelta) -> Self {
        self.shifted_by(rhs).expect("date arithmetic overflow")
    }
}

impl std::ops::Sub<TimeDelta> for TimePeriod {
    type Output = Self;
    fn sub(self, rhs: TimeDelta) -> Self {
        self.shifted_by(-rhs).expect("date arithmetic underflow")
    }
}

fn int_field<T: std::str::FromStr>(raw: &str, id: &str) -> Result<T> {
    raw.parse()
        .map_err(|_| Error::Parse(format!("'{id}' is not a period id")))
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimePeriod::Day(p) => {
                write!(f, "{:04}-{:02}-{:02}", p.year(), p.month(), p.day())
            }
            TimePeriod::Week(p) => write!(f, "{}W{}", p.year(), p.week()),
            TimePeriod::Month(p) => write!(f, "{:04}-{:02}", p.year(), p.month()),
            TimePeriod::Year(p) => write!(f, "{:04}", p.year()),
        }
    }
}

impl std::fmt::Debug for TimePeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({self})", self.resolution())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
