//! `TimeDelta` — a calendar-relative signed offset.
//!
//! A delta is stored in one of two representations, and the representation
//! determines which operations are legal:
//!
//! * [`TimeDelta::Days`] — a raw signed day count (day and week granularity);
//! * [`TimeDelta::Calendar`] — a signed (years, months, days) triple
//!   (month and year granularity).
//!
//! Division and remainder between deltas require compatible granularities:
//! a day-based operand cannot be measured in months and vice versa, because
//! calendar months have no fixed day length.

use chrono::{Months, NaiveDate};
use epi_core::errors::{Error, Result};

/// A calendar-relative signed offset.
///
/// The four associated constants [`TimeDelta::DAY`], [`TimeDelta::WEEK`],
/// [`TimeDelta::MONTH`], and [`TimeDelta::YEAR`] double as resolution tags
/// throughout the crate.
///
/// Equality is semantic, not representational: `Days(7)` equals a calendar
/// triple of seven days, and one year equals twelve months, so timestamp
/// subtraction (which always yields a triple) compares equal to the
/// day-based singletons.
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimeDelta {
    /// A raw signed day count.
    Days(i64),
    /// A signed (years, months, days) triple.
    Calendar {
        /// Signed year component.
        years: i32,
        /// Signed month component, same sign as `years`.
        months: i32,
        /// Signed day remainder.
        days: i32,
    },
}

impl TimeDelta {
    /// One calendar day.
    pub const DAY: TimeDelta = TimeDelta::Days(1);

    /// One calendar week (seven days).
    pub const WEEK: TimeDelta = TimeDelta::Days(7);

    /// One calendar month.
    pub const MONTH: TimeDelta = TimeDelta::Calendar {
        years: 0,
        months: 1,
        days: 0,
    };

    /// One calendar year.
    pub const YEAR: TimeDelta = TimeDelta::Calendar {
        years: 1,
        months: 0,
        days: 0,
    };

    // ── Inspectors ───────────────────────────────────────────────────────────

    /// Total day component (`None` is never returned; month components are
    /// not converted).
    pub(crate) fn day_component(&self) -> i64 {
        match *self {
            TimeDelta::Days(n) => n,
            TimeDelta::Calendar { days, .. } => days as i64,
        }
    }

    /// Total month component (years folded in).
    pub(crate) fn month_component(&self) -> i64 {
        match *self {
            TimeDelta::Days(_) => 0,
            TimeDelta::Calendar { years, months, .. } => years as i64 * 12 + months as i64,
        }
    }

    /// The signed day count, if this delta is representable in whole days.
    pub fn num_days(&self) -> Option<i64> {
        match *self {
            TimeDelta::Days(n) => Some(n),
            TimeDelta::Calendar {
                years: 0,
                months: 0,
                days,
            } => Some(days as i64),
            TimeDelta::Calendar { .. } => None,
        }
    }

    /// The signed total month count, if this delta is representable in whole
    /// months.
    pub fn num_months(&self) -> Option<i64> {
        match *self {
            TimeDelta::Days(0) => Some(0),
            TimeDelta::Days(_) => None,
            TimeDelta::Calendar { days: 0, .. } => Some(self.month_component()),
            TimeDelta::Calendar { .. } => None,
        }
    }

    /// Whether every component is zero.
    pub fn is_zero(&self) -> bool {
        self.day_component() == 0 && self.month_component() == 0
    }

    // ── Arithmetic ───────────────────────────────────────────────────────────

    /// Floor-divide this delta by another of compatible granularity.
    ///
    /// Day/week deltas divide as day counts; month/year deltas divide in
    /// total-month units (a leftover day remainder on the dividend is
    /// ignored, as the whole-month count is what callers step by).
    ///
    /// # Errors
    /// [`Error::IncompatibleUnits`] when one operand is day-based and the
    /// other month/year-based, or when the divisor mixes both components;
    /// [`Error::InvalidArgument`] on a zero divisor.
    pub fn checked_div(&self, other: &TimeDelta) -> Result<i64> {
        if other.is_zero() {
            return Err(Error::InvalidArgument(
                "division by a zero-length delta".into(),
            ));
        }
        let (o_days, o_months) = (other.day_component(), other.month_component());
        if o_days != 0 && o_months != 0 {
            return Err(Error::IncompatibleUnits(format!(
                "cannot divide by {other}: divisor mixes day and month components"
            )));
        }
        if o_months == 0 {
            // Day-granularity division.
            if self.month_component() != 0 {
                return Err(Error::IncompatibleUnits(format!(
                    "cannot divide {self} by {other}"
                )));
            }
            Ok(self.day_component().div_euclid(o_days))
        } else {
            // Month-granularity division.
            if self.month_component() == 0 && self.day_component() != 0 {
                return Err(Error::IncompatibleUnits(format!(
                    "cannot divide {self} by {other}"
                )));
            }
            Ok(self.month_component().div_euclid(o_months))
        }
    }

    /// Month-unit remainder.
    ///
    /// # Errors
    /// [`Error::IncompatibleUnits`] unless `other` is day-component-free and
    /// `self` is representable in whole months;
    /// [`Error::InvalidArgument`] on a zero divisor.
    pub fn checked_rem(&self, other: &TimeDelta) -> Result<TimeDelta> {
        if other.is_zero() {
            return Err(Error::InvalidArgument(
                "remainder by a zero-length delta".into(),
            ));
        }
        if other.day_component() != 0 {
            return Err(Error::IncompatibleUnits(format!(
                "remainder divisor {other} must be day-component-free"
            )));
        }
        let lhs = self.num_months().ok_or_else(|| {
            Error::IncompatibleUnits(format!("cannot take month remainder of {self}"))
        })?;
        let rem = lhs.rem_euclid(other.month_component());
        Ok(TimeDelta::Calendar {
            years: 0,
            months: rem as i32,
            days: 0,
        })
    }

    /// Shift a calendar date by this delta. Month arithmetic clamps to the
    /// end of the target month (Jan 31 + 1 month = Feb 28/29).
    ///
    /// Returns `None` if the result falls outside the representable range.
    pub(crate) fn apply_to_date(&self, date: NaiveDate) -> Option<NaiveDate> {
        match *self {
            TimeDelta::Days(n) => date.checked_add_signed(chrono::Duration::days(n)),
            TimeDelta::Calendar {
                years,
                months,
                days,
            } => {
                let shifted = add_months(date, years as i64 * 12 + months as i64)?;
                shifted.checked_add_signed(chrono::Duration::days(days as i64))
            }
        }
    }
}

/// Shift a date by a signed number of whole months, clamping the day of
/// month when the target month is shorter.
pub(crate) fn add_months(date: NaiveDate, n: i64) -> Option<NaiveDate> {
    if n >= 0 {
        date.checked_add_months(Months::new(u32::try_from(n).ok()?))
    } else {
        date.checked_sub_months(Months::new(u32::try_from(-n).ok()?))
    }
}

// ── Equality ──────────────────────────────────────────────────────────────────

impl PartialEq for TimeDelta {
    fn eq(&self, other: &Self) -> bool {
        self.month_component() == other.month_component()
            && self.day_component() == other.day_component()
    }
}

impl Eq for TimeDelta {}

impl std::hash::Hash for TimeDelta {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.month_component().hash(state);
        self.day_component().hash(state);
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Neg for TimeDelta {
    type Output = Self;
    fn neg(self) -> Self {
        match self {
            TimeDelta::Days(n) => TimeDelta::Days(-n),
            TimeDelta::Calendar {
                years,
                months,
                days,
            } => TimeDelta::Calendar {
                years: -years,
                months: -months,
                days: -days,
            },
        }
    }
}

impl std::ops::Mul<i32> for TimeDelta {
    type Output = Self;
    fn mul(self, rhs: i32) -> Self {
        match self {
            TimeDelta::Days(n) => TimeDelta::Days(n * rhs as i64),
            TimeDelta::Calendar {
                years,
                months,
                days,
            } => TimeDelta::Calendar {
                years: years * rhs,
                months: months * rhs,
                days: days * rhs,
            },
        }
    }
}

impl std::ops::Mul<TimeDelta> for i32 {
    type Output = TimeDelta;
    fn mul(self, rhs: TimeDelta) -> TimeDelta {
        rhs * self
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for TimeDelta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            TimeDelta::Days(n) => write!(f, "{n}d"),
            TimeDelta::Calendar {
                years,
                months,
                days,
            } => {
                if years == 0 && months == 0 && days == 0 {
                    return write!(f, "0m");
                }
                if years != 0 {
                    write!(f, "{years}y")?;
                }
                if months != 0 {
                    write!(f, "{months}m")?;
                }
                if days != 0 {
                    write!(f, "{days}d")?;
                }
                Ok(())
            }
        }
    }
}

impl std::fmt::Debug for TimeDelta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TimeDelta({self})")
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singleton_tags_are_distinct() {
        let tags = [
            TimeDelta::DAY,
            TimeDelta::WEEK,
            TimeDelta::MONTH,
            TimeDelta::YEAR,
        ];
        for (i, a) in tags.iter().enumerate() {
            for (j, b) in tags.iter().enumerate() {
                assert_eq!(a == b, i == j);
            }
        }
    }

    #[test]
    fn day_division() {
        assert_eq!(TimeDelta::WEEK.checked_div(&TimeDelta::DAY).unwrap(), 7);
        assert_eq!(
            TimeDelta::Days(21).checked_div(&TimeDelta::WEEK).unwrap(),
            3
        );
        // floor semantics
        assert_eq!(
            TimeDelta::Days(-8).checked_div(&TimeDelta::WEEK).unwrap(),
            -2
        );
    }

    #[test]
    fn month_division() {
        assert_eq!(TimeDelta::YEAR.checked_div(&TimeDelta::MONTH).unwrap(), 12);
        let span = TimeDelta::Calendar {
            years: 2,
            months: 3,
            days: 0,
        };
        assert_eq!(span.checked_div(&TimeDelta::MONTH).unwrap(), 27);
        assert_eq!(span.checked_div(&TimeDelta::YEAR).unwrap(), 2);
    }

    #[test]
    fn mixed_units_are_rejected() {
        assert!(TimeDelta::MONTH.checked_div(&TimeDelta::DAY).is_err());
        assert!(TimeDelta::Days(30).checked_div(&TimeDelta::MONTH).is_err());
        assert!(TimeDelta::MONTH.checked_rem(&TimeDelta::WEEK).is_err());
    }

    #[test]
    fn zero_divisor_is_rejected() {
        assert!(TimeDelta::WEEK.checked_div(&TimeDelta::Days(0)).is_err());
    }

    #[test]
    fn month_remainder() {
        let span = TimeDelta::Calendar {
            years: 1,
            months: 2,
            days: 0,
        };
        assert_eq!(
            span.checked_rem(&TimeDelta::YEAR).unwrap(),
            TimeDelta::Calendar {
                years: 0,
                months: 2,
                days: 0
            }
        );
    }

    #[test]
    fn scalar_multiplication() {
        assert_eq!(TimeDelta::WEEK * 3, TimeDelta::Days(21));
        assert_eq!(
            TimeDelta::MONTH * -2,
            TimeDelta::Calendar {
                years: 0,
                months: -2,
                days: 0
            }
        );
        assert_eq!(2 * TimeDelta::DAY, TimeDelta::Days(2));
    }

    #[test]
    fn month_arithmetic_clamps() {
        let jan31 = NaiveDate::from_ymd_opt(2023, 1, 31).unwrap();
        let feb = TimeDelta::MONTH.apply_to_date(jan31).unwrap();
        assert_eq!(feb, NaiveDate::from_ymd_opt(2023, 2, 28).unwrap());
    }

    #[test]
    fn display() {
        assert_eq!(TimeDelta::WEEK.to_string(), "7d");
        assert_eq!(TimeDelta::YEAR.to_string(), "1y");
        assert_eq!(
            TimeDelta::Calendar {
                years: 0,
                months: 1,
                days: 15
            }
            .to_string(),
            "1m15d"
        );
    }
}
