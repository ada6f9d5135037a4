//! Calendar date algebra.
//!
//! Plain dates and year-months without time of day or time zone, a
//! configurable day-of-week ordering for week boundaries, inclusive date
//! ranges and clock durations. Values are immutable and `Copy`; arithmetic
//! that could leave the representable calendar returns `Option`.

pub mod date;
pub mod duration;
pub mod error;
pub mod month;
pub mod order;
pub mod range;
pub mod weekday;

pub use date::PlainDate;
pub use duration::{Duration, Unit};
pub use error::{DateError, DateResult};
pub use month::{DaysInMonth, PlainYearMonth};
pub use order::{clamp, is_between, max_of, min_of};
pub use range::PlainDateRange;
pub use weekday::DayOfWeek;
