//! Ordering helpers shared by dates and durations.
//!
//! `<`, `<=`, `>`, `>=` and `==` come straight from `Ord`. The helpers
//! below add inclusive containment, a clamp that never panics, and
//! variadic `min`/`max` folding from the left.

/// Whether `value` lies in `low..=high`.
pub fn is_between<T: PartialOrd>(value: &T, low: &T, high: &T) -> bool {
    low <= value && value <= high
}

/// ## Summary
/// Limits `value` to `low..=high`.
///
/// Unlike `Ord::clamp` this does not panic when `low > high`; `low` wins.
pub fn clamp<T: Ord>(value: T, low: T, high: T) -> T {
    if value < low {
        low
    } else if value > high {
        high
    } else {
        value
    }
}

/// Smallest of `first` and `rest`; the leftmost wins ties.
pub fn min_of<T: Ord>(first: T, rest: impl IntoIterator<Item = T>) -> T {
    rest.into_iter()
        .fold(first, |best, next| if next < best { next } else { best })
}

/// Largest of `first` and `rest`; the leftmost wins ties.
pub fn max_of<T: Ord>(first: T, rest: impl IntoIterator<Item = T>) -> T {
    rest.into_iter()
        .fold(first, |best, next| if next > best { next } else { best })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Duration, PlainDate};
    use chrono::TimeDelta;

    fn date(year: i32, month: u32, day: u32) -> PlainDate {
        PlainDate::new(year, month, day).expect("valid test date")
    }

    #[test]
    fn is_between_is_inclusive() {
        let low = date(2024, 3, 1);
        let high = date(2024, 3, 31);

        assert!(is_between(&low, &low, &high));
        assert!(is_between(&high, &low, &high));
        assert!(!is_between(&date(2024, 4, 1), &low, &high));
    }

    #[test]
    fn clamp_dates() {
        let low = date(2024, 3, 1);
        let high = date(2024, 3, 31);

        assert_eq!(clamp(date(2024, 2, 1), low, high), low);
        assert_eq!(clamp(date(2024, 5, 1), low, high), high);
        assert_eq!(clamp(date(2024, 3, 9), low, high), date(2024, 3, 9));
        assert_eq!(clamp(date(2024, 3, 9), high, low), high);
    }

    #[test]
    fn min_and_max_fold_left() {
        let dates = [date(2024, 3, 9), date(2023, 1, 1), date(2025, 6, 30)];

        assert_eq!(min_of(date(2024, 1, 1), dates), date(2023, 1, 1));
        assert_eq!(max_of(date(2024, 1, 1), dates), date(2025, 6, 30));
        assert_eq!(min_of(date(2024, 1, 1), []), date(2024, 1, 1));
    }

    #[test]
    fn min_and_max_over_durations() {
        let short = Duration::from(TimeDelta::minutes(5));
        let long = Duration::from(TimeDelta::hours(5));

        assert_eq!(min_of(long, [short, Duration::ZERO]), Duration::ZERO);
        assert_eq!(max_of(short, [long]), long);
        assert!(is_between(&short, &Duration::ZERO, &long));
    }
}
