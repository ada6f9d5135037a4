//! Inclusive ranges of plain dates.

use serde::{Deserialize, Serialize};

use crate::date::PlainDate;

/// An ordered pair of dates, both ends inclusive.
///
/// Nothing stops `from` from lying after `to`; call
/// [`PlainDateRange::normalize`] to get a range with `from <= to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlainDateRange {
    pub from: PlainDate,
    pub to: PlainDate,
}

impl PlainDateRange {
    #[must_use]
    pub fn new(from: PlainDate, to: PlainDate) -> Self {
        Self { from, to }
    }

    /// A range covering a single day.
    #[must_use]
    pub fn day(date: PlainDate) -> Self {
        Self::new(date, date)
    }

    #[must_use]
    pub fn is_normalized(self) -> bool {
        self.from <= self.to
    }

    /// Returns the range with its ends swapped if `from` is after `to`.
    #[must_use]
    pub fn normalize(self) -> Self {
        if self.is_normalized() {
            self
        } else {
            Self::new(self.to, self.from)
        }
    }

    /// ## Summary
    /// Whether `a` and `b` share more than a boundary point.
    ///
    /// True iff `max(a.from, b.from) < min(a.to, b.to)`. Ranges that only
    /// touch (one ends on the day the other starts) do not overlap. Both
    /// ranges are expected to be normalized.
    #[must_use]
    pub fn are_overlapping(a: Self, b: Self) -> bool {
        a.from.max(b.from) < a.to.min(b.to)
    }

    #[must_use]
    pub fn overlaps(self, other: Self) -> bool {
        Self::are_overlapping(self, other)
    }

    /// Whether `date` lies within the normalized range, ends included.
    #[must_use]
    pub fn contains(self, date: PlainDate) -> bool {
        let range = self.normalize();
        range.from <= date && date <= range.to
    }

    /// Number of days in the normalized range, ends included.
    #[must_use]
    pub fn len_days(self) -> u64 {
        let range = self.normalize();
        range.from.days_until(range.to).unsigned_abs() + 1
    }

    /// Every day of the normalized range in ascending order.
    pub fn days(self) -> impl Iterator<Item = PlainDate> {
        let range = self.normalize();
        range
            .from
            .naive()
            .iter_days()
            .map(PlainDate::from)
            .take_while(move |day| *day <= range.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> PlainDate {
        PlainDate::new(year, month, day).expect("valid test date")
    }

    fn range(from: PlainDate, to: PlainDate) -> PlainDateRange {
        PlainDateRange::new(from, to)
    }

    #[test]
    fn normalize_swaps_reversed_ends() {
        let reversed = range(date(2024, 3, 10), date(2024, 3, 1));

        assert!(!reversed.is_normalized());
        assert_eq!(reversed.normalize(), range(date(2024, 3, 1), date(2024, 3, 10)));
        assert_eq!(reversed.normalize().normalize(), reversed.normalize());
        assert_eq!(reversed.from, date(2024, 3, 10));
    }

    #[test]
    fn overlap_is_strict() {
        let march_first_half = range(date(2024, 3, 1), date(2024, 3, 15));
        let march_second_half = range(date(2024, 3, 15), date(2024, 3, 31));
        let mid_march = range(date(2024, 3, 10), date(2024, 3, 20));
        let april = range(date(2024, 4, 1), date(2024, 4, 30));

        assert!(!PlainDateRange::are_overlapping(march_first_half, march_second_half));
        assert!(PlainDateRange::are_overlapping(march_first_half, mid_march));
        assert!(mid_march.overlaps(march_second_half));
        assert!(!april.overlaps(mid_march));
    }

    #[test]
    fn single_days_never_overlap() {
        let day = PlainDateRange::day(date(2024, 3, 1));
        assert!(!day.overlaps(day));
    }

    #[test]
    fn contains_is_inclusive() {
        let week = range(date(2024, 3, 7), date(2024, 3, 1));

        assert!(week.contains(date(2024, 3, 1)));
        assert!(week.contains(date(2024, 3, 7)));
        assert!(!week.contains(date(2024, 2, 29)));
        assert!(!week.contains(date(2024, 3, 8)));
    }

    #[test]
    fn days_iterates_normalized_range() {
        let span = range(date(2024, 3, 2), date(2024, 2, 27));
        let days: Vec<_> = span.days().collect();

        assert_eq!(span.len_days(), 5);
        assert_eq!(
            days,
            vec![
                date(2024, 2, 27),
                date(2024, 2, 28),
                date(2024, 2, 29),
                date(2024, 3, 1),
                date(2024, 3, 2)
            ]
        );
    }

    #[test]
    fn serde_uses_iso_dates() {
        let span = range(date(2024, 3, 1), date(2024, 3, 2));
        let json = serde_json::to_string(&span).unwrap();

        assert_eq!(json, r#"{"from":"2024-03-01","to":"2024-03-02"}"#);
        assert_eq!(serde_json::from_str::<PlainDateRange>(&json).unwrap(), span);
    }
}
