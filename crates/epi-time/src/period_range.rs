//! `PeriodRange` — a contiguous, single-resolution sequence of periods.
//!
//! A range is represented compactly as `(start, end, resolution)` and never
//! materializes its elements: length, indexing, and search are all O(1)
//! delta arithmetic, which keeps ranges spanning years of daily data cheap.
//! Elements are produced lazily on iteration.

use epi_core::ensure;
use epi_core::errors::{Error, Result};
use epi_core::time_series::TimeSeries;

use crate::delta::TimeDelta;
use crate::period::TimePeriod;
use crate::resolution::Resolution;
use crate::timestamp::{whole_months_between, Timestamp};

/// Insertion side for [`PeriodRange::searchsorted`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Index of the leftmost position keeping the range sorted.
    Left,
    /// Index one past the rightmost equal position.
    Right,
}

/// An ordered, gap-free sequence of same-resolution periods.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PeriodRange {
    start: Timestamp,
    end: Timestamp,
    resolution: Resolution,
}

impl PeriodRange {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Build a range from explicit boundary timestamps.
    ///
    /// # Errors
    /// [`Error::InvalidRange`] if `end` precedes `start` or the span is not
    /// a whole number of resolution steps.
    pub fn from_timestamps(
        start: Timestamp,
        end: Timestamp,
        resolution: Resolution,
    ) -> Result<Self> {
        exact_steps(start, end, resolution)?;
        Ok(Self {
            start,
            end,
            resolution,
        })
    }

    /// Build a range covering `first` through `last` inclusive.
    ///
    /// # Errors
    /// [`Error::UnequalResolution`] if the boundary periods differ in
    /// resolution; [`Error::InvalidRange`] if `last` precedes `first` or
    /// the anchors are misaligned.
    pub fn from_boundaries(first: &TimePeriod, last: &TimePeriod) -> Result<Self> {
        ensure!(
            first.resolution() == last.resolution(),
            Error::UnequalResolution(format!(
                "range boundaries {first:?} and {last:?} differ in resolution"
            ))
        );
        Self::from_timestamps(
            first.start_timestamp(),
            last.end_timestamp(),
            first.resolution(),
        )
    }

    /// Parse period IDs into a range, requiring them to be strictly
    /// increasing and gap-free.
    ///
    /// # Errors
    /// [`Error::Parse`] for a malformed ID, [`Error::UnequalResolution`]
    /// for mixed resolutions, [`Error::NonConsecutive`] for gaps,
    /// duplicates, or out-of-order input.
    pub fn from_strings<S: AsRef<str>>(ids: impl IntoIterator<Item = S>) -> Result<Self> {
        let periods = parse_uniform(ids)?;
        for pair in periods.windows(2) {
            if pair[0].successor() != pair[1] {
                log::warn!(
                    "periods not consecutive: {:?} is followed by {:?}",
                    pair[0],
                    pair[1]
                );
                return Err(Error::NonConsecutive(format!(
                    "{:?} is not followed by {:?}",
                    pair[0],
                    pair[1]
                )));
            }
        }
        Self::from_boundaries(&periods[0], periods.last().expect("non-empty by parse"))
    }

    /// Parse period IDs into a range spanning first through last, reporting
    /// the positions of missing periods as data instead of raising.
    ///
    /// The returned indices are positions in the *full* range where no
    /// input period was present.
    pub fn from_strings_fill_missing<S: AsRef<str>>(
        ids: impl IntoIterator<Item = S>,
    ) -> Result<(Self, Vec<usize>)> {
        let periods = parse_uniform(ids)?;
        let first = periods[0];
        let last = *periods.last().expect("non-empty by parse");
        let delta = first.time_delta();

        let total = last.sub(&first)?.checked_div(&delta)?;
        ensure!(
            total >= 0,
            Error::NonConsecutive("periods are not in increasing order".into())
        );
        let mut covered = vec![false; total as usize];
        let mut prev = -1i64;
        for p in &periods {
            let pos = p.sub(&first)?.checked_div(&delta)?;
            ensure!(
                pos > prev,
                Error::NonConsecutive(format!("period {p:?} is out of order or duplicated"))
            );
            prev = pos;
            if let Some(slot) = covered.get_mut(pos as usize) {
                *slot = true;
            }
        }
        let gaps = covered
            .iter()
            .enumerate()
            .filter_map(|(i, &hit)| (!hit).then_some(i))
            .collect();
        Ok((Self::from_boundaries(&first, &last)?, gaps))
    }

    // ── Inspectors ────────────────────────────────────────────────────────────

    /// Number of periods in the range. O(1).
    pub fn len(&self) -> usize {
        floor_steps(self.start, self.end, self.resolution) as usize
    }

    /// Whether the range holds no periods.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The inclusive start of the first period.
    pub fn start_timestamp(&self) -> Timestamp {
        self.start
    }

    /// The exclusive end of the last period.
    pub fn end_timestamp(&self) -> Timestamp {
        self.end
    }

    /// The common resolution of every element.
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// One resolution step.
    pub fn delta(&self) -> TimeDelta {
        self.resolution.time_delta()
    }

    // ── Element access ────────────────────────────────────────────────────────

    fn period_at(&self, i: usize) -> TimePeriod {
        let anchor = self.start + self.delta() * i as i32;
        TimePeriod::from_anchor(self.resolution, anchor.date())
    }

    /// Lazily iterate over the periods. Produces exactly `len()` elements;
    /// a fresh call re-iterates from the same immutable range.
    pub fn iter(&self) -> impl Iterator<Item = TimePeriod> {
        let range = *self;
        (0..range.len()).map(move |i| range.period_at(i))
    }

    /// The period at index `i`; negative indices count from the end.
    ///
    /// # Errors
    /// [`Error::IndexOutOfRange`] outside `[-len, len)`.
    pub fn get(&self, index: i64) -> Result<TimePeriod> {
        let len = self.len();
        let i = if index < 0 { index + len as i64 } else { index };
        if i < 0 || i >= len as i64 {
            return Err(Error::IndexOutOfRange { index, len });
        }
        Ok(self.period_at(i as usize))
    }

    /// Slice by element index.
    ///
    /// `stop` may be negative, meaning that many steps before the end.
    /// Stepped slicing is unsupported: ranges are arithmetic, not
    /// list-backed.
    ///
    /// # Errors
    /// [`Error::UnsupportedSlice`] for a step other than 1;
    /// [`Error::InvalidRange`] when the computed start is after the
    /// computed end; [`Error::InvalidArgument`] for an offset too large to
    /// scale a step by.
    pub fn slice(
        &self,
        start: Option<i64>,
        stop: Option<i64>,
        step: Option<i64>,
    ) -> Result<PeriodRange> {
        if let Some(s) = step {
            ensure!(
                s == 1,
                Error::UnsupportedSlice(format!("step {s} is not supported"))
            );
        }
        let delta = self.delta();
        let len = self.len() as i64;
        let end = match stop {
            None => self.end,
            Some(s) if s < 0 => self.end.shifted_by(delta * step_count(s)?)?,
            Some(s) => self.start.shifted_by(delta * step_count(s)?)?,
        };
        let new_start = match start {
            None => self.start,
            Some(s) => {
                let offset = if s < 0 { len + s } else { s };
                self.start.shifted_by(delta * step_count(offset)?)?
            }
        };
        ensure!(
            new_start <= end,
            Error::InvalidRange(format!(
                "slice ({start:?}, {stop:?}) is inverted for a range of length {len}"
            ))
        );
        Ok(PeriodRange {
            start: new_start,
            end,
            resolution: self.resolution,
        })
    }

    /// The index where `period` would be inserted to keep the range sorted,
    /// computed arithmetically rather than by comparison scan and clamped
    /// to `[0, len]`.
    ///
    /// # Errors
    /// [`Error::UnequalResolution`] if `period` has a different resolution.
    pub fn searchsorted(&self, period: &TimePeriod, side: Side) -> Result<usize> {
        ensure!(
            period.resolution() == self.resolution,
            Error::UnequalResolution(format!(
                "cannot search for {period:?} in a {} range",
                self.resolution
            ))
        );
        let mut steps = floor_steps(self.start, period.start_timestamp(), self.resolution);
        if side == Side::Right {
            steps += 1;
        }
        Ok(steps.clamp(0, self.len() as i64) as usize)
    }

    /// Join two ranges end-to-start.
    ///
    /// # Errors
    /// [`Error::UnequalResolution`] on mixed resolutions;
    /// [`Error::NonConsecutive`] unless `other` starts exactly where
    /// `self` ends.
    pub fn concatenate(&self, other: &PeriodRange) -> Result<PeriodRange> {
        ensure!(
            self.resolution == other.resolution,
            Error::UnequalResolution(format!(
                "cannot concatenate a {} range to a {} range",
                other.resolution, self.resolution
            ))
        );
        ensure!(
            other.start == self.end,
            Error::NonConsecutive(format!(
                "concatenated range must start at {}, starts at {}",
                self.end, other.start
            ))
        );
        Ok(PeriodRange {
            start: self.start,
            end: other.end,
            resolution: self.resolution,
        })
    }

    // ── Element-wise comparisons ──────────────────────────────────────────────

    fn broadcast(&self, pred: impl Fn(TimePeriod) -> bool) -> Vec<bool> {
        self.iter().map(pred).collect()
    }

    /// Per-element equality against one period.
    pub fn eq_elementwise(&self, other: &TimePeriod) -> Vec<bool> {
        self.broadcast(|p| p == *other)
    }

    /// Per-element inequality against one period.
    pub fn ne_elementwise(&self, other: &TimePeriod) -> Vec<bool> {
        self.broadcast(|p| p != *other)
    }

    /// Per-element "ends on or before `other` starts".
    pub fn lt_elementwise(&self, other: &TimePeriod) -> Vec<bool> {
        self.broadcast(|p| p < *other)
    }

    /// Per-element "is not after `other`".
    pub fn le_elementwise(&self, other: &TimePeriod) -> Vec<bool> {
        self.broadcast(|p| p <= *other)
    }

    /// Per-element "starts on or after `other` ends".
    pub fn gt_elementwise(&self, other: &TimePeriod) -> Vec<bool> {
        self.broadcast(|p| p > *other)
    }

    /// Per-element "is not before `other`".
    pub fn ge_elementwise(&self, other: &TimePeriod) -> Vec<bool> {
        self.broadcast(|p| p >= *other)
    }

    /// Pairwise equality against another range.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if lengths differ.
    pub fn eq_elementwise_range(&self, other: &PeriodRange) -> Result<Vec<bool>> {
        ensure!(
            self.len() == other.len(),
            Error::InvalidArgument(format!(
                "cannot compare ranges of length {} and {}",
                self.len(),
                other.len()
            ))
        );
        Ok(self
            .iter()
            .zip(other.iter())
            .map(|(a, b)| a == b)
            .collect())
    }

    // ── External representations ──────────────────────────────────────────────

    /// The period IDs of every element, in order (the DHIS2-style external
    /// series form).
    pub fn period_ids(&self) -> Vec<String> {
        self.iter().map(|p| p.id()).collect()
    }

    /// The calendar year of each element's start.
    pub fn years(&self) -> Vec<i32> {
        self.iter().map(|p| p.start_timestamp().year()).collect()
    }

    /// The calendar month of each element's start.
    pub fn months(&self) -> Vec<u32> {
        self.iter().map(|p| p.start_timestamp().month()).collect()
    }

    /// Pair the range with observations, producing a series keyed by each
    /// element's start timestamp.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `values` does not have one observation
    /// per period.
    pub fn to_series<V: Clone>(&self, values: &[V]) -> Result<TimeSeries<Timestamp, V>> {
        ensure!(
            values.len() == self.len(),
            Error::InvalidArgument(format!(
                "{} observations for a range of length {}",
                values.len(),
                self.len()
            ))
        );
        Ok(self
            .iter()
            .map(|p| p.start_timestamp())
            .zip(values.iter().cloned())
            .collect())
    }

    /// Align an existing series onto this range's timeline, yielding one
    /// slot per period (`None` where the series has no observation).
    pub fn align<V: Clone>(&self, series: &TimeSeries<Timestamp, V>) -> Vec<Option<V>> {
        self.iter()
            .map(|p| series.get(&p.start_timestamp()).cloned())
            .collect()
    }
}

// ── Step arithmetic ───────────────────────────────────────────────────────────

/// Narrow a step offset to the delta-scaling width, rejecting values that
/// would otherwise wrap.
fn step_count(n: i64) -> Result<i32> {
    i32::try_from(n)
        .map_err(|_| Error::InvalidArgument(format!("slice offset {n} is out of range")))
}

/// Whole steps from `from` to `to` at a resolution, flooring; may be
/// negative.
fn floor_steps(from: Timestamp, to: Timestamp, resolution: Resolution) -> i64 {
    match resolution {
        Resolution::Day => to.days_since(from),
        Resolution::Week => to.days_since(from).div_euclid(7),
        Resolution::Month => whole_months_between(from.date(), to.date()),
        Resolution::Year => whole_months_between(from.date(), to.date()).div_euclid(12),
    }
}

/// Whole steps from `start` to `end`, rejecting negative or fractional
/// spans.
fn exact_steps(start: Timestamp, end: Timestamp, resolution: Resolution) -> Result<usize> {
    let remainder_free = match resolution {
        Resolution::Day => true,
        Resolution::Week => end.days_since(start) % 7 == 0,
        Resolution::Month | Resolution::Year => {
            let aligned = (end - start).num_months().is_some();
            let months = whole_months_between(start.date(), end.date());
            aligned && (resolution == Resolution::Month || months % 12 == 0)
        }
    };
    let steps = floor_steps(start, end, resolution);
    ensure!(
        steps >= 0 && remainder_free,
        Error::InvalidRange(format!(
            "span from {start} to {end} is not a non-negative whole number of {resolution} steps"
        ))
    );
    Ok(steps as usize)
}

fn parse_uniform<S: AsRef<str>>(ids: impl IntoIterator<Item = S>) -> Result<Vec<TimePeriod>> {
    let periods = ids
        .into_iter()
        .map(|id| TimePeriod::parse(id.as_ref()))
        .collect::<Result<Vec<_>>>()?;
    let first = periods.first().ok_or_else(|| {
        Error::InvalidRange("cannot create a period range from an empty list".into())
    })?;
    for p in &periods {
        ensure!(
            p.resolution() == first.resolution(),
            Error::UnequalResolution(format!(
                "period {p:?} does not match the range resolution {}",
                first.resolution()
            ))
        );
    }
    Ok(periods)
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for PeriodRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "PeriodRange({}, {}, {})",
            self.start, self.end, self.resolution
        )
    }
}

impl std::fmt::Debug for PeriodRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self}")
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::period::{Day, Month, Week, Year};

    fn monthly(ids: &[&str]) -> PeriodRange {
        PeriodRange::from_strings(ids.iter().copied()).unwrap()
    }

    #[test]
    fn from_strings_scenario() {
        let r = monthly(&["202001", "202002", "202003"]);
        assert_eq!(r.len(), 3);
        assert_eq!(r.get(0).unwrap().id(), "202001");
        assert_eq!(r.get(-1).unwrap().id(), "202003");
        assert_eq!(
            r.end_timestamp(),
            Timestamp::from_ymd(2020, 4, 1).unwrap()
        );
    }

    #[test]
    fn from_strings_detects_gaps() {
        let err = PeriodRange::from_strings(["202001", "202003"]).unwrap_err();
        assert!(matches!(err, Error::NonConsecutive(_)));
    }

    #[test]
    fn from_strings_rejects_mixed_resolutions() {
        let err = PeriodRange::from_strings(["202001", "2020"]).unwrap_err();
        assert!(matches!(err, Error::UnequalResolution(_)));
    }

    #[test]
    fn fill_missing_reports_gap_indices() {
        let (r, gaps) =
            PeriodRange::from_strings_fill_missing(["202001", "202003"]).unwrap();
        assert_eq!(gaps, vec![1]);
        assert_eq!(r.len(), 3);

        let (r2, gaps2) =
            PeriodRange::from_strings_fill_missing(["202001", "202002", "202005", "202007"])
                .unwrap();
        assert_eq!(gaps2, vec![2, 3, 5]);
        assert_eq!(r2.len(), 7);
    }

    #[test]
    fn fill_missing_rejects_disorder() {
        assert!(PeriodRange::from_strings_fill_missing(["202003", "202001"]).is_err());
        assert!(PeriodRange::from_strings_fill_missing(["202001", "202001"]).is_err());
    }

    #[test]
    fn from_boundaries_and_length() {
        let first: TimePeriod = Day::new(2020, 1, 1).unwrap().into();
        let last: TimePeriod = Day::new(2020, 12, 31).unwrap().into();
        let r = PeriodRange::from_boundaries(&first, &last).unwrap();
        assert_eq!(r.len(), 366); // 2020 is a leap year
    }

    #[test]
    fn from_boundaries_rejects_mixed_resolutions() {
        let first: TimePeriod = Day::new(2020, 1, 1).unwrap().into();
        let last: TimePeriod = Month::new(2020, 12).unwrap().into();
        assert!(PeriodRange::from_boundaries(&first, &last).is_err());
    }

    #[test]
    fn from_timestamps_rejects_fractional_spans() {
        let start = Timestamp::from_ymd(2020, 1, 1).unwrap();
        let mid = Timestamp::from_ymd(2020, 1, 16).unwrap();
        let end = Timestamp::from_ymd(2020, 3, 1).unwrap();
        assert!(PeriodRange::from_timestamps(start, mid, Resolution::Month).is_err());
        assert!(PeriodRange::from_timestamps(start, mid, Resolution::Week).is_err());
        assert!(PeriodRange::from_timestamps(end, start, Resolution::Month).is_err());
        assert!(PeriodRange::from_timestamps(start, end, Resolution::Month).is_ok());
    }

    #[test]
    fn iteration_matches_length() {
        let cases = [
            PeriodRange::from_boundaries(
                &Day::new(2020, 2, 20).unwrap().into(),
                &Day::new(2020, 3, 10).unwrap().into(),
            )
            .unwrap(),
            PeriodRange::from_boundaries(
                &Week::from_year_week(2020, 50).unwrap().into(),
                &Week::from_year_week(2021, 3).unwrap().into(),
            )
            .unwrap(),
            monthly(&["201911", "201912", "202001"]),
            PeriodRange::from_boundaries(
                &Year::new(2018).unwrap().into(),
                &Year::new(2022).unwrap().into(),
            )
            .unwrap(),
        ];
        for r in cases {
            assert_eq!(r.iter().count(), r.len(), "{r}");
            // iteration is restartable
            assert_eq!(r.iter().count(), r.len());
            // elements are consecutive
            for pair in r.iter().collect::<Vec<_>>().windows(2) {
                assert_eq!(pair[0].successor(), pair[1]);
            }
        }
    }

    #[test]
    fn week_range_crosses_year_boundary() {
        let r = PeriodRange::from_strings(["2023W52", "2024W01", "2024W02"]).unwrap();
        assert_eq!(r.len(), 3);
        assert_eq!(r.period_ids(), vec!["2023W52", "2024W01", "2024W02"]);
    }

    #[test]
    fn indexing_is_bounds_checked() {
        let r = monthly(&["202001", "202002", "202003"]);
        assert!(r.get(3).is_err());
        assert!(r.get(-4).is_err());
        assert_eq!(r.get(-3).unwrap().id(), "202001");
    }

    #[test]
    fn slice_last_three_of_twelve() {
        let ids: Vec<String> = (1..=12).map(|m| format!("2020{m:02}")).collect();
        let r = PeriodRange::from_strings(&ids).unwrap();
        let tail = r.slice(Some(-3), None, None).unwrap();
        assert_eq!(tail.period_ids(), vec!["202010", "202011", "202012"]);
    }

    #[test]
    fn slice_with_negative_stop() {
        let r = monthly(&["202001", "202002", "202003", "202004"]);
        let head = r.slice(None, Some(-1), None).unwrap();
        assert_eq!(head.period_ids(), vec!["202001", "202002", "202003"]);
    }

    #[test]
    fn slice_rejects_steps_and_inversions() {
        let r = monthly(&["202001", "202002", "202003"]);
        assert!(matches!(
            r.slice(None, None, Some(2)).unwrap_err(),
            Error::UnsupportedSlice(_)
        ));
        assert!(matches!(
            r.slice(Some(2), Some(1), None).unwrap_err(),
            Error::InvalidRange(_)
        ));
        // step of 1 is the identity step and allowed
        assert!(r.slice(None, None, Some(1)).is_ok());
    }

    #[test]
    fn slice_rejects_offsets_beyond_scaling_width() {
        let r = monthly(&["202001", "202002", "202003"]);
        let huge = i64::from(i32::MAX) + 1;
        assert!(matches!(
            r.slice(Some(huge), None, None).unwrap_err(),
            Error::InvalidArgument(_)
        ));
        assert!(matches!(
            r.slice(None, Some(-huge), None).unwrap_err(),
            Error::InvalidArgument(_)
        ));
        assert!(matches!(
            r.slice(Some(-huge), None, None).unwrap_err(),
            Error::InvalidArgument(_)
        ));
    }

    #[test]
    fn searchsorted_left_and_right() {
        let r = monthly(&["202001", "202002", "202003"]);
        let feb: TimePeriod = Month::new(2020, 2).unwrap().into();
        assert_eq!(r.searchsorted(&feb, Side::Left).unwrap(), 1);
        assert_eq!(r.searchsorted(&feb, Side::Right).unwrap(), 2);
    }

    #[test]
    fn searchsorted_clamps_outside_periods() {
        let r = monthly(&["202001", "202002", "202003"]);
        let early: TimePeriod = Month::new(2019, 6).unwrap().into();
        let late: TimePeriod = Month::new(2021, 6).unwrap().into();
        assert_eq!(r.searchsorted(&early, Side::Left).unwrap(), 0);
        assert_eq!(r.searchsorted(&early, Side::Right).unwrap(), 0);
        assert_eq!(r.searchsorted(&late, Side::Left).unwrap(), 3);
        assert_eq!(r.searchsorted(&late, Side::Right).unwrap(), 3);
    }

    #[test]
    fn searchsorted_requires_matching_resolution() {
        let r = monthly(&["202001", "202002"]);
        let d: TimePeriod = Day::new(2020, 1, 15).unwrap().into();
        assert!(r.searchsorted(&d, Side::Left).is_err());
    }

    #[test]
    fn concatenation() {
        let a = monthly(&["202001", "202002"]);
        let b = monthly(&["202003", "202004"]);
        let joined = a.concatenate(&b).unwrap();
        assert_eq!(joined.len(), 4);
        assert_eq!(joined.get(-1).unwrap().id(), "202004");

        // gap between the ranges
        let c = monthly(&["202006"]);
        assert!(matches!(
            a.concatenate(&c).unwrap_err(),
            Error::NonConsecutive(_)
        ));
    }

    #[test]
    fn concatenation_is_associative() {
        let a = monthly(&["202001", "202002"]);
        let b = monthly(&["202003"]);
        let c = monthly(&["202004", "202005"]);
        let left = a.concatenate(&b).unwrap().concatenate(&c).unwrap();
        let right = a.concatenate(&b.concatenate(&c).unwrap()).unwrap();
        assert_eq!(left, right);
    }

    #[test]
    fn elementwise_comparisons() {
        let r = monthly(&["202001", "202002", "202003"]);
        let feb: TimePeriod = Month::new(2020, 2).unwrap().into();
        assert_eq!(r.eq_elementwise(&feb), vec![false, true, false]);
        assert_eq!(r.ne_elementwise(&feb), vec![true, false, true]);
        assert_eq!(r.lt_elementwise(&feb), vec![true, false, false]);
        assert_eq!(r.le_elementwise(&feb), vec![true, true, false]);
        assert_eq!(r.gt_elementwise(&feb), vec![false, false, true]);
        assert_eq!(r.ge_elementwise(&feb), vec![false, true, true]);
    }

    #[test]
    fn elementwise_range_comparison() {
        let a = monthly(&["202001", "202002"]);
        let b = monthly(&["202002", "202003"]);
        assert_eq!(a.eq_elementwise_range(&a).unwrap(), vec![true, true]);
        assert_eq!(a.eq_elementwise_range(&b).unwrap(), vec![false, false]);
        let short = monthly(&["202001"]);
        assert!(a.eq_elementwise_range(&short).is_err());
    }

    #[test]
    fn start_field_extraction() {
        let r = monthly(&["201912", "202001"]);
        assert_eq!(r.years(), vec![2019, 2020]);
        assert_eq!(r.months(), vec![12, 1]);
    }

    #[test]
    fn series_round_trip_and_alignment() {
        let r = monthly(&["202001", "202002", "202003"]);
        let series = r.to_series(&[10, 20, 30]).unwrap();
        assert_eq!(r.align(&series), vec![Some(10), Some(20), Some(30)]);
        assert!(r.to_series(&[1, 2]).is_err());

        // a sparse series leaves holes on alignment
        let sparse = TimeSeries::from_pairs([
            (Timestamp::from_ymd(2020, 1, 1).unwrap(), 1.5),
            (Timestamp::from_ymd(2020, 3, 1).unwrap(), 3.5),
        ]);
        assert_eq!(r.align(&sparse), vec![Some(1.5), None, Some(3.5)]);
    }
}
