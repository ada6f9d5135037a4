//! Calendar dates without time of day or time zone.

use chrono::{DateTime, Datelike, Days, Months, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{DateError, DateResult};
use crate::month::PlainYearMonth;
use crate::weekday::DayOfWeek;

/// A proleptic Gregorian calendar date.
///
/// Totally ordered; serializes as an ISO 8601 date (`2024-03-01`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlainDate(NaiveDate);

impl PlainDate {
    /// ## Errors
    /// Returns `DateError::InvalidDate` if the triple does not name a day of
    /// the calendar (for example February 30th).
    pub fn new(year: i32, month: u32, day: u32) -> DateResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// ## Summary
    /// The calendar date an instant falls on in the time zone `tz`.
    ///
    /// Time-zone rules come from `chrono-tz`; nothing else in this crate
    /// knows about zones.
    #[must_use]
    pub fn from_instant(instant: DateTime<Utc>, tz: Tz) -> Self {
        Self::from_zoned(&instant.with_timezone(&tz))
    }

    /// The local calendar date of a zoned date-time.
    #[must_use]
    pub fn from_zoned<Z: TimeZone>(zoned: &DateTime<Z>) -> Self {
        Self(zoned.date_naive())
    }

    /// Today's date in the time zone `tz`.
    #[must_use]
    pub fn today_in(tz: Tz) -> Self {
        Self::from_instant(Utc::now(), tz)
    }

    #[must_use]
    pub fn naive(self) -> NaiveDate {
        self.0
    }

    #[must_use]
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Month number, 1 through 12.
    #[must_use]
    pub fn month(self) -> u32 {
        self.0.month()
    }

    /// Day of the month, starting at 1.
    #[must_use]
    pub fn day(self) -> u32 {
        self.0.day()
    }

    #[must_use]
    pub fn day_of_week(self) -> DayOfWeek {
        self.0.weekday().into()
    }

    #[must_use]
    pub fn year_month(self) -> PlainYearMonth {
        PlainYearMonth::from(self)
    }

    #[must_use]
    pub fn checked_add_days(self, days: u64) -> Option<Self> {
        self.0.checked_add_days(Days::new(days)).map(Self)
    }

    #[must_use]
    pub fn checked_sub_days(self, days: u64) -> Option<Self> {
        self.0.checked_sub_days(Days::new(days)).map(Self)
    }

    #[must_use]
    pub fn checked_add_weeks(self, weeks: u64) -> Option<Self> {
        self.checked_add_days(weeks.checked_mul(7)?)
    }

    #[must_use]
    pub fn checked_sub_weeks(self, weeks: u64) -> Option<Self> {
        self.checked_sub_days(weeks.checked_mul(7)?)
    }

    /// ## Summary
    /// Moves by whole months, clamping the day to the end of a shorter
    /// target month (`2024-01-31 + 1 month == 2024-02-29`).
    #[must_use]
    pub fn checked_add_months(self, months: u32) -> Option<Self> {
        self.0.checked_add_months(Months::new(months)).map(Self)
    }

    /// Month subtraction with the same clamping as [`PlainDate::checked_add_months`].
    #[must_use]
    pub fn checked_sub_months(self, months: u32) -> Option<Self> {
        self.0.checked_sub_months(Months::new(months)).map(Self)
    }

    /// The next calendar day.
    #[must_use]
    pub fn succ(self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }

    /// The previous calendar day.
    #[must_use]
    pub fn pred(self) -> Option<Self> {
        self.0.pred_opt().map(Self)
    }

    /// Signed number of days from `self` to `other`.
    #[must_use]
    pub fn days_until(self, other: Self) -> i64 {
        other.0.signed_duration_since(self.0).num_days()
    }

    /// ## Summary
    /// Position of this date within a week starting on `week_start`, from 1
    /// (the week's first day) to 7.
    ///
    /// Equals `((day_of_week - week_start + 7) mod 7) + 1`; it is 1 exactly
    /// when `self.day_of_week() == week_start`.
    #[must_use]
    pub fn ordinal_in_week(self, week_start: DayOfWeek) -> u8 {
        week_start.day_count_to(self.day_of_week()) + 1
    }

    /// First day of the week containing `self`, for weeks starting on `week_start`.
    #[must_use]
    pub fn start_of_week(self, week_start: DayOfWeek) -> Option<Self> {
        self.checked_sub_days(u64::from(self.ordinal_in_week(week_start) - 1))
    }

    /// Last day of the week containing `self`, for weeks starting on `week_start`.
    #[must_use]
    pub fn end_of_week(self, week_start: DayOfWeek) -> Option<Self> {
        self.start_of_week(week_start)?.checked_add_days(6)
    }

    #[must_use]
    pub fn start_of_month(self) -> Self {
        self.year_month().first_day()
    }

    #[must_use]
    pub fn end_of_month(self) -> Self {
        self.year_month().last_day()
    }
}

impl From<NaiveDate> for PlainDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<PlainDate> for NaiveDate {
    fn from(date: PlainDate) -> Self {
        date.0
    }
}

impl std::fmt::Display for PlainDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for PlainDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::from_str(s)
            .map(Self)
            .map_err(|err| DateError::ParseError(format!("{s}: {err}")))
    }
}
