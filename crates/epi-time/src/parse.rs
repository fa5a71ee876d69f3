//! Free-text calendar-date parsing.
//!
//! Upstream health-information systems deliver dates as loosely formatted
//! strings ("2020-03-15", "March 2020", "15 Jan 2020", "20200315"). This
//! module tokenizes such text and fills components missing from the text
//! from a caller-supplied default date, which is what lets
//! [`crate::TimePeriod::parse`] infer resolution by parsing twice with two
//! different defaults. Deliberately best-effort: no locale support, no
//! two-digit-year windowing, numeric day/month ambiguity resolves
//! month-first.

use chrono::{Datelike, NaiveDate};
use epi_core::errors::{Error, Result};

/// Parse `text` into a calendar date, taking unspecified components from
/// `default`.
pub(crate) fn parse_with_default(text: &str, default: NaiveDate) -> Result<NaiveDate> {
    let parts = extract_parts(text)?;
    let year = parts.year.unwrap_or_else(|| default.year());
    let month = parts.month.unwrap_or_else(|| default.month());
    let day = parts.day.unwrap_or_else(|| default.day());
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| Error::Parse(format!("'{text}' names an invalid calendar date")))
}

/// The date components recognized in a piece of text.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct DateParts {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

/// Tokenize `text` and classify each token as a year, month, or day.
pub(crate) fn extract_parts(text: &str) -> Result<DateParts> {
    let tokens = tokenize(text)?;
    if tokens.is_empty() {
        return Err(Error::Parse(format!("'{text}' contains no date tokens")));
    }

    // Compact all-digit forms: YYYYMMDD, YYYYMM, YYYY.
    if let [Token::Number(raw)] = tokens.as_slice() {
        match raw.len() {
            8 => {
                return Ok(DateParts {
                    year: Some(num(&raw[..4])?),
                    month: Some(num(&raw[4..6])?),
                    day: Some(num(&raw[6..])?),
                })
            }
            6 => {
                return Ok(DateParts {
                    year: Some(num(&raw[..4])?),
                    month: Some(num(&raw[4..])?),
                    day: None,
                })
            }
            _ => {}
        }
    }

    let mut parts = DateParts::default();
    for token in &tokens {
        match token {
            Token::Name(name) => {
                let m = month_from_name(name)
                    .ok_or_else(|| Error::Parse(format!("unrecognized month name '{name}'")))?;
                assign(&mut parts.month, m, text)?;
            }
            Token::Number(raw) => {
                let value: u32 = num(raw)?;
                if raw.len() == 4 || value > 31 {
                    assign(&mut parts.year, value as i32, text)?;
                } else if parts.month.is_none() && (1..=12).contains(&value) {
                    parts.month = Some(value);
                } else if parts.day.is_none() && (1..=31).contains(&value) {
                    parts.day = Some(value);
                } else {
                    return Err(Error::Parse(format!(
                        "cannot place token '{raw}' in '{text}'"
                    )));
                }
            }
        }
    }
    Ok(parts)
}

fn assign<T>(slot: &mut Option<T>, value: T, text: &str) -> Result<()> {
    if slot.is_some() {
        return Err(Error::Parse(format!("conflicting date fields in '{text}'")));
    }
    *slot = Some(value);
    Ok(())
}

fn num<T: std::str::FromStr>(raw: &str) -> Result<T> {
    raw.parse()
        .map_err(|_| Error::Parse(format!("'{raw}' is not a number")))
}

#[derive(Debug)]
enum Token {
    Number(String),
    Name(String),
}

fn tokenize(text: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = text.chars().peekable();
    while let Some(&c) = chars.peek() {
        if c.is_ascii_digit() {
            let mut run = String::new();
            while let Some(&d) = chars.peek() {
                if !d.is_ascii_digit() {
                    break;
                }
                run.push(d);
                chars.next();
            }
            tokens.push(Token::Number(run));
        } else if c.is_ascii_alphabetic() {
            let mut run = String::new();
            while let Some(&a) = chars.peek() {
                if !a.is_ascii_alphabetic() {
                    break;
                }
                run.push(a);
                chars.next();
            }
            tokens.push(Token::Name(run));
        } else if c.is_whitespace() || matches!(c, '-' | '/' | '.' | ',') {
            chars.next();
        } else {
            return Err(Error::Parse(format!(
                "unexpected character '{c}' in '{text}'"
            )));
        }
    }
    Ok(tokens)
}

const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Match a month name or an unambiguous prefix of at least three letters.
fn month_from_name(name: &str) -> Option<u32> {
    if name.len() < 3 {
        return None;
    }
    let lower = name.to_ascii_lowercase();
    let mut hit = None;
    for (i, full) in MONTH_NAMES.iter().enumerate() {
        if full.starts_with(&lower) {
            if hit.is_some() {
                return None;
            }
            hit = Some(i as u32 + 1);
        }
    }
    hit
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn default() -> NaiveDate {
        NaiveDate::from_ymd_opt(2010, 1, 1).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn iso_layouts() {
        assert_eq!(
            parse_with_default("2020-03-15", default()).unwrap(),
            date(2020, 3, 15)
        );
        assert_eq!(
            parse_with_default("2020/03/15", default()).unwrap(),
            date(2020, 3, 15)
        );
        assert_eq!(
            parse_with_default("2020-03", default()).unwrap(),
            date(2020, 3, 1)
        );
    }

    #[test]
    fn compact_layouts() {
        assert_eq!(
            parse_with_default("20200315", default()).unwrap(),
            date(2020, 3, 15)
        );
        assert_eq!(
            parse_with_default("202003", default()).unwrap(),
            date(2020, 3, 1)
        );
    }

    #[test]
    fn month_name_layouts() {
        assert_eq!(
            parse_with_default("March 2020", default()).unwrap(),
            date(2020, 3, 1)
        );
        assert_eq!(
            parse_with_default("15 Jan 2020", default()).unwrap(),
            date(2020, 1, 15)
        );
        assert_eq!(
            parse_with_default("Jan 15, 2020", default()).unwrap(),
            date(2020, 1, 15)
        );
        assert_eq!(
            parse_with_default("sept 2021", default()).unwrap(),
            date(2021, 9, 1)
        );
    }

    #[test]
    fn numeric_ambiguity_resolves_month_first() {
        // dateutil-style month-first reading of "05/07/2020"
        assert_eq!(
            parse_with_default("05/07/2020", default()).unwrap(),
            date(2020, 5, 7)
        );
    }

    #[test]
    fn defaults_fill_missing_fields() {
        let other = NaiveDate::from_ymd_opt(2009, 11, 10).unwrap();
        assert_eq!(
            parse_with_default("2020-03", other).unwrap(),
            date(2020, 3, 10)
        );
    }

    #[test]
    fn rejects_nonsense() {
        assert!(parse_with_default("", default()).is_err());
        assert!(parse_with_default("hello world", default()).is_err());
        assert!(parse_with_default("2020-13-40", default()).is_err());
        assert!(parse_with_default("2020#01", default()).is_err());
    }

    #[test]
    fn rejects_conflicting_fields() {
        assert!(parse_with_default("2020 2021", default()).is_err());
        assert!(parse_with_default("Jan Feb 2020", default()).is_err());
    }

    #[test]
    fn rejects_invalid_calendar_dates() {
        assert!(parse_with_default("Feb 30 2020", default()).is_err());
    }
}
