//! Year-month values and the "days in month" producer.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use chrono_tz::Tz;
use std::str::FromStr;

use crate::date::PlainDate;
use crate::error::{DateError, DateResult};

/// A month of a specific year, independent of any day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlainYearMonth {
    /// Always the first day of the month.
    first: NaiveDate,
}

const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

const fn days_in(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}

impl PlainYearMonth {
    /// ## Errors
    /// Returns `DateError::InvalidMonth` if `month` is not in `1..=12` or the
    /// year is outside the supported calendar range.
    pub fn new(year: i32, month: u32) -> DateResult<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first| Self { first })
            .ok_or(DateError::InvalidMonth { year, month })
    }

    /// The month an instant falls in, in the time zone `tz`.
    #[must_use]
    pub fn from_instant(instant: DateTime<Utc>, tz: Tz) -> Self {
        PlainDate::from_instant(instant, tz).year_month()
    }

    #[must_use]
    pub fn year(self) -> i32 {
        self.first.year()
    }

    /// Month number, 1 through 12.
    #[must_use]
    pub fn month(self) -> u32 {
        self.first.month()
    }

    #[must_use]
    pub fn days_in_month(self) -> u32 {
        days_in(self.year(), self.month())
    }

    #[must_use]
    pub fn first_day(self) -> PlainDate {
        PlainDate::from(self.first)
    }

    #[must_use]
    pub fn last_day(self) -> PlainDate {
        // Every month has its own last day, so `with_day` cannot fail here.
        self.first
            .with_day(self.days_in_month())
            .map_or_else(|| self.first_day(), PlainDate::from)
    }

    /// ## Errors
    /// Returns `DateError::InvalidDate` if `day` is not a day of this month.
    pub fn to_plain_date(self, day: u32) -> DateResult<PlainDate> {
        PlainDate::new(self.year(), self.month(), day)
    }

    /// Moves by `months` whole months, forwards or backwards.
    #[must_use]
    pub fn checked_add_months(self, months: i32) -> Option<Self> {
        let index =
            i64::from(self.year()) * 12 + i64::from(self.first.month0()) + i64::from(months);
        let year = i32::try_from(index.div_euclid(12)).ok()?;
        let month = u32::try_from(index.rem_euclid(12)).ok()? + 1;
        Self::new(year, month).ok()
    }

    #[must_use]
    pub fn checked_sub_months(self, months: i32) -> Option<Self> {
        self.checked_add_months(months.checked_neg()?)
    }

    /// The following month.
    #[must_use]
    pub fn succ(self) -> Option<Self> {
        self.checked_add_months(1)
    }

    /// The preceding month.
    #[must_use]
    pub fn pred(self) -> Option<Self> {
        self.checked_sub_months(1)
    }

    /// Every day of the month in ascending order.
    #[must_use]
    pub fn days(self) -> DaysInMonth {
        DaysInMonth {
            next: self.first,
            remaining: self.days_in_month(),
        }
    }

    #[must_use]
    pub fn contains(self, date: PlainDate) -> bool {
        date.year_month() == self
    }
}

impl From<PlainDate> for PlainYearMonth {
    fn from(date: PlainDate) -> Self {
        let naive = date.naive();
        // Day 1 exists in every month.
        Self {
            first: naive.with_day(1).unwrap_or(naive),
        }
    }
}

impl std::fmt::Display for PlainYearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for PlainYearMonth {
    type Err = DateError;

    /// Parses `YYYY-MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_error = || DateError::ParseError(format!("expected YYYY-MM, got {s:?}"));
        let (year, month) = s.trim().rsplit_once('-').ok_or_else(parse_error)?;
        let year = year.parse::<i32>().map_err(|_e| parse_error())?;
        let month = month.parse::<u32>().map_err(|_e| parse_error())?;
        Self::new(year, month)
    }
}

/// Iterator over the days of one month, returned by [`PlainYearMonth::days`].
#[derive(Debug, Clone)]
pub struct DaysInMonth {
    next: NaiveDate,
    remaining: u32,
}

impl Iterator for DaysInMonth {
    type Item = PlainDate;

    fn next(&mut self) -> Option<PlainDate> {
        if self.remaining == 0 {
            return None;
        }
        let day = self.next;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.next = day.succ_opt()?;
        }
        Some(PlainDate::from(day))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DaysInMonth {}

impl std::iter::FusedIterator for DaysInMonth {}
