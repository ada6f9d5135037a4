//! Month-view calendar pages.
//!
//! ## Summary
//! A page shows one month laid out in weeks. It starts with the tail of the
//! previous month so the first row begins on the configured week start, and
//! it ends with the head of the following months so the last row is
//! complete and the page has at least `min_weeks` rows.
//!
//! Days are produced lazily. The following months are only generated as far
//! as the page actually reaches into them.

use daygrid_core::error::{CoreError, SeqResult};
use daygrid_core::queue;
use daygrid_core::seq::{self, Build, Cursor, GroupByFirst};
use daygrid_date::{DayOfWeek, DaysInMonth, PlainDate, PlainDateRange, PlainYearMonth};

type MonthFactory = Box<dyn FnMut() -> Option<DaysInMonth>>;

/// Every day after the page's month, one month at a time.
type FutureDays = Build<MonthFactory, DaysInMonth>;

type WeekBoundary = Box<dyn FnMut(&PlainDate) -> bool>;

type FutureWeeks = GroupByFirst<Cursor<FutureDays>, WeekBoundary>;

fn starts_week(week_start: DayOfWeek) -> WeekBoundary {
    Box::new(move |day: &PlainDate| day.day_of_week() == week_start)
}

fn days_after(month: PlainYearMonth) -> FutureDays {
    let mut current = month;
    let factory: MonthFactory = Box::new(move || {
        current = current.succ()?;
        tracing::trace!(month = %current, "Calendar page reaching into next month");
        Some(current.days())
    });
    seq::build(factory)
}

enum Phase {
    /// Tail of the previous month, followed by the month's first day.
    LeadIn {
        lead_in: queue::IntoIter<PlainDate>,
        first_day: PlainDate,
        rest: DaysInMonth,
    },
    /// Remaining days of the month.
    Month { rest: DaysInMonth },
    /// Following days up to (not including) the next week start.
    FinishWeek { future: Cursor<FutureDays> },
    /// Whole weeks added until the page has `min_weeks` rows.
    ExtraWeeks {
        weeks: FutureWeeks,
        current: std::vec::IntoIter<PlainDate>,
    },
    Done,
}

/// The days of a calendar page in ascending order.
///
/// Returned by [`days_in_calendar_page`] and [`CalendarPage::days`].
pub struct CalendarDays {
    month: PlainYearMonth,
    week_start: DayOfWeek,
    min_weeks: usize,
    /// Rows started so far, counting from the month's first day.
    weeks: usize,
    phase: Phase,
}

impl CalendarDays {
    fn advance(&mut self, phase: Phase) -> (Phase, Option<PlainDate>) {
        match phase {
            Phase::LeadIn {
                mut lead_in,
                first_day,
                rest,
            } => match lead_in.next() {
                Some(day) => (
                    Phase::LeadIn {
                        lead_in,
                        first_day,
                        rest,
                    },
                    Some(day),
                ),
                None => (Phase::Month { rest }, Some(first_day)),
            },

            Phase::Month { mut rest } => match rest.next() {
                Some(day) => {
                    if day.day_of_week() == self.week_start {
                        self.weeks += 1;
                    }
                    (Phase::Month { rest }, Some(day))
                }
                None => {
                    let future = seq::wrap(days_after(self.month));
                    (Phase::FinishWeek { future }, None)
                }
            },

            Phase::FinishWeek { mut future } => match future.next() {
                Some(day) if day.day_of_week() == self.week_start => {
                    tracing::trace!(
                        boundary = %day,
                        weeks = self.weeks,
                        "Last week of the month completed"
                    );
                    let weeks =
                        GroupByFirst::seeded(day, future.view(), starts_week(self.week_start));
                    let current = Vec::new().into_iter();
                    (Phase::ExtraWeeks { weeks, current }, None)
                }
                Some(day) => (Phase::FinishWeek { future }, Some(day)),
                None => (Phase::Done, None),
            },

            Phase::ExtraWeeks {
                mut weeks,
                mut current,
            } => {
                if let Some(day) = current.next() {
                    return (Phase::ExtraWeeks { weeks, current }, Some(day));
                }
                if self.weeks >= self.min_weeks {
                    return (Phase::Done, None);
                }
                match weeks.next() {
                    Some(week) => {
                        self.weeks += 1;
                        tracing::trace!(weeks = self.weeks, "Adding week to reach minimum");
                        let current = week.into_iter();
                        (Phase::ExtraWeeks { weeks, current }, None)
                    }
                    None => (Phase::Done, None),
                }
            }

            Phase::Done => (Phase::Done, None),
        }
    }
}

impl Iterator for CalendarDays {
    type Item = PlainDate;

    fn next(&mut self) -> Option<PlainDate> {
        if matches!(self.phase, Phase::Done) {
            return None;
        }
        loop {
            let phase = std::mem::replace(&mut self.phase, Phase::Done);
            let (phase, day) = self.advance(phase);
            self.phase = phase;

            if day.is_some() {
                return day;
            }
            if matches!(self.phase, Phase::Done) {
                tracing::trace!(month = %self.month, weeks = self.weeks, "Calendar page complete");
                return None;
            }
        }
    }
}

impl std::iter::FusedIterator for CalendarDays {}

/// ## Summary
/// Lazily produces every day shown on the page for `month`.
///
/// The page opens on the last day starting a week (per `week_start`) at or
/// before the month's first day, shows the whole month, completes the final
/// week from the next month, and then adds whole weeks until it spans at
/// least `min_weeks` rows. `min_weeks` is a floor: a month is never cut
/// short, and 0 behaves like 1.
///
/// Rows are counted from the month's first day; the lead-in days share the
/// first row with it.
///
/// ## Errors
/// Returns `SeqError::Underflow` if the previous month is outside the
/// supported calendar range while lead-in days are needed from it.
pub fn days_in_calendar_page(
    month: PlainYearMonth,
    week_start: DayOfWeek,
    min_weeks: usize,
) -> SeqResult<CalendarDays> {
    let (first_day, rest) = seq::first_and_rest(month.days())?;

    let lead_in_len = week_start.day_count_to(first_day.day_of_week());
    let previous_days = month.pred().map(PlainYearMonth::days).into_iter().flatten();
    let lead_in = seq::take_last(previous_days, usize::from(lead_in_len))?;

    tracing::trace!(
        %month,
        %week_start,
        min_weeks,
        lead_in = lead_in_len,
        "Starting calendar page"
    );

    Ok(CalendarDays {
        month,
        week_start,
        min_weeks,
        weeks: 1,
        phase: Phase::LeadIn {
            lead_in,
            first_day,
            rest,
        },
    })
}

/// One row of a calendar page.
///
/// Never empty. Every week of a page starts on the page's week start.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CalendarWeek(Vec<PlainDate>);

impl CalendarWeek {
    #[must_use]
    pub fn days(&self) -> &[PlainDate] {
        &self.0
    }

    #[must_use]
    pub fn first(&self) -> Option<PlainDate> {
        self.0.first().copied()
    }

    #[must_use]
    pub fn last(&self) -> Option<PlainDate> {
        self.0.last().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn contains(&self, date: PlainDate) -> bool {
        self.0.contains(&date)
    }

    /// The span from the week's first to its last day.
    #[must_use]
    pub fn range(&self) -> Option<PlainDateRange> {
        Some(PlainDateRange::new(self.first()?, self.last()?))
    }
}

impl TryFrom<Vec<PlainDate>> for CalendarWeek {
    type Error = CoreError;

    fn try_from(days: Vec<PlainDate>) -> Result<Self, Self::Error> {
        if days.is_empty() {
            return Err(CoreError::InvalidInput(
                "a calendar week needs at least one day".to_string(),
            ));
        }
        Ok(Self(days))
    }
}

impl From<CalendarWeek> for Vec<PlainDate> {
    fn from(week: CalendarWeek) -> Self {
        week.0
    }
}

impl IntoIterator for CalendarWeek {
    type Item = PlainDate;
    type IntoIter = std::vec::IntoIter<PlainDate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a CalendarWeek {
    type Item = &'a PlainDate;
    type IntoIter = std::slice::Iter<'a, PlainDate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// The weeks of a calendar page, returned by [`weeks_in_calendar_page`].
pub struct CalendarWeeks {
    weeks: GroupByFirst<CalendarDays, WeekBoundary>,
}

impl Iterator for CalendarWeeks {
    type Item = CalendarWeek;

    fn next(&mut self) -> Option<CalendarWeek> {
        self.weeks.next().map(CalendarWeek)
    }
}

impl std::iter::FusedIterator for CalendarWeeks {}

/// ## Summary
/// The days of [`days_in_calendar_page`] grouped into rows, a new row
/// starting at every day falling on `week_start`.
///
/// ## Errors
/// Same as [`days_in_calendar_page`].
pub fn weeks_in_calendar_page(
    month: PlainYearMonth,
    week_start: DayOfWeek,
    min_weeks: usize,
) -> SeqResult<CalendarWeeks> {
    let days = days_in_calendar_page(month, week_start, min_weeks)?;
    Ok(CalendarWeeks {
        weeks: seq::group_by_first_element(days, starts_week(week_start))?,
    })
}

/// Everything needed to lay out one month view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarPage {
    pub month: PlainYearMonth,
    pub week_start: DayOfWeek,
    /// Minimum number of rows; the month itself is always shown in full.
    pub min_weeks: usize,
}

impl CalendarPage {
    pub const DEFAULT_MIN_WEEKS: usize = 1;

    #[must_use]
    pub fn new(month: PlainYearMonth, week_start: DayOfWeek) -> Self {
        Self {
            month,
            week_start,
            min_weeks: Self::DEFAULT_MIN_WEEKS,
        }
    }

    #[must_use]
    pub fn with_min_weeks(self, min_weeks: usize) -> Self {
        Self { min_weeks, ..self }
    }

    /// ## Errors
    /// See [`days_in_calendar_page`].
    pub fn days(&self) -> SeqResult<CalendarDays> {
        days_in_calendar_page(self.month, self.week_start, self.min_weeks)
    }

    /// ## Errors
    /// See [`weeks_in_calendar_page`].
    pub fn weeks(&self) -> SeqResult<CalendarWeeks> {
        weeks_in_calendar_page(self.month, self.week_start, self.min_weeks)
    }

    /// The same layout for the following month.
    #[must_use]
    pub fn succ(self) -> Option<Self> {
        Some(Self {
            month: self.month.succ()?,
            ..self
        })
    }

    /// The same layout for the preceding month.
    #[must_use]
    pub fn pred(self) -> Option<Self> {
        Some(Self {
            month: self.month.pred()?,
            ..self
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(year: i32, month: u32) -> PlainYearMonth {
        PlainYearMonth::new(year, month).expect("valid test month")
    }

    fn date(year: i32, month: u32, day: u32) -> PlainDate {
        PlainDate::new(year, month, day).expect("valid test date")
    }

    #[test_log::test]
    fn march_2024_starting_monday() {
        let days: Vec<_> = days_in_calendar_page(month(2024, 3), DayOfWeek::Monday, 1)
            .unwrap()
            .collect();

        assert_eq!(days.len(), 35);
        assert_eq!(days[..4], [
            date(2024, 2, 26),
            date(2024, 2, 27),
            date(2024, 2, 28),
            date(2024, 2, 29)
        ]);
        assert_eq!(days[4], date(2024, 3, 1));
        assert_eq!(days.last(), Some(&date(2024, 3, 31)));
    }

    #[test_log::test]
    fn month_starting_on_week_start_has_no_lead_in() {
        // April 2024 starts on a Monday.
        let days: Vec<_> = days_in_calendar_page(month(2024, 4), DayOfWeek::Monday, 1)
            .unwrap()
            .collect();

        assert_eq!(days.first(), Some(&date(2024, 4, 1)));
        assert_eq!(days.last(), Some(&date(2024, 5, 5)));
        assert_eq!(days.len(), 35);
    }

    #[test_log::test]
    fn lead_out_completes_the_last_week() {
        // January 2025 starts on a Wednesday and ends on a Friday.
        let days: Vec<_> = days_in_calendar_page(month(2025, 1), DayOfWeek::Sunday, 1)
            .unwrap()
            .collect();

        assert_eq!(days.first(), Some(&date(2024, 12, 29)));
        assert_eq!(days.last(), Some(&date(2025, 2, 1)));
    }

    #[test_log::test]
    fn min_weeks_adds_whole_weeks() {
        let days: Vec<_> = days_in_calendar_page(month(2024, 2), DayOfWeek::Monday, 6)
            .unwrap()
            .collect();

        assert_eq!(days.len(), 42);
        assert_eq!(days.first(), Some(&date(2024, 1, 29)));
        assert_eq!(days.last(), Some(&date(2024, 3, 10)));
    }

    #[test_log::test]
    fn min_weeks_never_truncates_the_month() {
        let one = days_in_calendar_page(month(2024, 3), DayOfWeek::Monday, 1)
            .unwrap()
            .count();
        let zero = days_in_calendar_page(month(2024, 3), DayOfWeek::Monday, 0)
            .unwrap()
            .count();

        assert_eq!(one, 35);
        assert_eq!(zero, 35);
    }

    #[test_log::test]
    fn weeks_follow_week_start() {
        let weeks: Vec<_> = weeks_in_calendar_page(month(2024, 3), DayOfWeek::Monday, 1)
            .unwrap()
            .collect();

        assert_eq!(weeks.len(), 5);
        assert_eq!(weeks[0].first(), Some(date(2024, 2, 26)));
        assert_eq!(weeks[4].last(), Some(date(2024, 3, 31)));
        assert!(weeks.iter().all(|week| week.len() == 7));
        assert!(weeks[1].contains(date(2024, 3, 4)));
    }

    #[test_log::test]
    fn page_far_past_min_weeks_crosses_years() {
        let page = CalendarPage::new(month(2024, 11), DayOfWeek::Monday).with_min_weeks(20);
        let weeks: Vec<_> = page.weeks().unwrap().collect();

        assert_eq!(weeks.len(), 20);
        let last = weeks.last().and_then(CalendarWeek::last).unwrap();
        assert_eq!(last.year(), 2025);
        assert_eq!(last.day_of_week(), DayOfWeek::Sunday);
    }

    #[test]
    fn stops_pulling_after_min_weeks() {
        let mut days = days_in_calendar_page(month(2024, 3), DayOfWeek::Monday, 1).unwrap();

        assert_eq!(days.by_ref().count(), 35);
        assert_eq!(days.next(), None);
    }

    #[test]
    fn earliest_month_without_lead_in_source_underflows() {
        let earliest = PlainYearMonth::from(PlainDate::from(chrono::NaiveDate::MIN));
        let week_start = earliest.first_day().day_of_week().succ();

        assert!(matches!(
            days_in_calendar_page(earliest, week_start, 1),
            Err(daygrid_core::SeqError::Underflow { .. })
        ));
        assert!(days_in_calendar_page(earliest, earliest.first_day().day_of_week(), 1).is_ok());
    }

    #[test]
    fn calendar_week_rejects_empty() {
        assert!(CalendarWeek::try_from(Vec::new()).is_err());

        let week = CalendarWeek::try_from(vec![date(2024, 3, 4), date(2024, 3, 5)]).unwrap();
        assert_eq!(
            week.range(),
            Some(PlainDateRange::new(date(2024, 3, 4), date(2024, 3, 5)))
        );
        assert_eq!((&week).into_iter().count(), 2);
        assert_eq!(Vec::from(week).len(), 2);
    }

    #[test]
    fn page_navigation_keeps_layout() {
        let page = CalendarPage::new(month(2024, 12), DayOfWeek::Sunday).with_min_weeks(6);

        let next = page.succ().unwrap();
        assert_eq!(next.month, month(2025, 1));
        assert_eq!(next.week_start, DayOfWeek::Sunday);
        assert_eq!(next.min_weeks, 6);
        assert_eq!(next.pred(), Some(page));
    }
}
