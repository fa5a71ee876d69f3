//! `Resolution` — the granularity tag shared by periods and ranges.

use crate::delta::TimeDelta;

/// Granularity of a period: the discriminant used for equality, comparison,
/// and range-homogeneity checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Resolution {
    /// One calendar day.
    Day,
    /// One calendar week (seven days).
    Week,
    /// One calendar month.
    Month,
    /// One calendar year.
    Year,
}

impl Resolution {
    /// The delta singleton carrying one step at this resolution.
    pub fn time_delta(&self) -> TimeDelta {
        match self {
            Resolution::Day => TimeDelta::DAY,
            Resolution::Week => TimeDelta::WEEK,
            Resolution::Month => TimeDelta::MONTH,
            Resolution::Year => TimeDelta::YEAR,
        }
    }

    /// Recover the resolution from one of the four delta singletons.
    pub fn from_delta(delta: &TimeDelta) -> Option<Self> {
        match *delta {
            d if d == TimeDelta::DAY => Some(Resolution::Day),
            d if d == TimeDelta::WEEK => Some(Resolution::Week),
            d if d == TimeDelta::MONTH => Some(Resolution::Month),
            d if d == TimeDelta::YEAR => Some(Resolution::Year),
            _ => None,
        }
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Resolution::Day => "Day",
            Resolution::Week => "Week",
            Resolution::Month => "Month",
            Resolution::Year => "Year",
        };
        write!(f, "{name}")
    }
}
