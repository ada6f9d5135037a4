//! Month-view calendar page generation.
//!
//! Turns a month, a first day of the week and a minimum number of rows into
//! the exact run of days a month grid shows, either flat
//! ([`days_in_calendar_page`]) or grouped into weeks
//! ([`weeks_in_calendar_page`]).

pub mod config;
pub mod error;
pub mod page;

pub use error::{PageError, PageResult};
pub use page::{
    CalendarDays, CalendarPage, CalendarWeek, CalendarWeeks, days_in_calendar_page,
    weeks_in_calendar_page,
};
