//! Days of the week with ISO numbering and cyclic distance.

use serde::{Deserialize, Serialize, Serializer};
use std::str::FromStr;

use crate::error::DateError;

/// A day of the week, numbered the ISO way (Monday = 1 ... Sunday = 7).
///
/// Ordering between days is cyclic for calendar purposes; see
/// [`DayOfWeek::day_count_to`]. The derived `Ord` only follows the ISO
/// numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "DayOfWeekRepr")]
#[repr(u8)]
pub enum DayOfWeek {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl DayOfWeek {
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
        }
    }

    /// ISO number, 1 for Monday through 7 for Sunday.
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::Monday),
            2 => Some(Self::Tuesday),
            3 => Some(Self::Wednesday),
            4 => Some(Self::Thursday),
            5 => Some(Self::Friday),
            6 => Some(Self::Saturday),
            7 => Some(Self::Sunday),
            _ => None,
        }
    }

    /// ## Summary
    /// Forward distance in days from `self` to `other`, in `0..=6`.
    ///
    /// `Monday.day_count_to(Friday) == 4`, `Friday.day_count_to(Monday) == 3`.
    #[must_use]
    pub const fn day_count_to(self, other: Self) -> u8 {
        (other.number() + 7 - self.number()) % 7
    }

    /// The following day, wrapping Sunday to Monday.
    #[must_use]
    pub const fn succ(self) -> Self {
        match self {
            Self::Monday => Self::Tuesday,
            Self::Tuesday => Self::Wednesday,
            Self::Wednesday => Self::Thursday,
            Self::Thursday => Self::Friday,
            Self::Friday => Self::Saturday,
            Self::Saturday => Self::Sunday,
            Self::Sunday => Self::Monday,
        }
    }

    /// The preceding day, wrapping Monday to Sunday.
    #[must_use]
    pub const fn pred(self) -> Self {
        match self {
            Self::Monday => Self::Sunday,
            Self::Tuesday => Self::Monday,
            Self::Wednesday => Self::Tuesday,
            Self::Thursday => Self::Wednesday,
            Self::Friday => Self::Thursday,
            Self::Saturday => Self::Friday,
            Self::Sunday => Self::Saturday,
        }
    }
}

impl std::fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayOfWeek {
    type Err = DateError;

    /// Accepts full English names and three-letter abbreviations in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|day| {
                let name = day.as_str();
                lowered == name || (lowered.len() == 3 && name.starts_with(lowered.as_str()))
            })
            .ok_or_else(|| DateError::UnknownDayOfWeek(s.to_string()))
    }
}

impl TryFrom<u8> for DayOfWeek {
    type Error = DateError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::from_number(number).ok_or_else(|| DateError::UnknownDayOfWeek(number.to_string()))
    }
}

impl From<chrono::Weekday> for DayOfWeek {
    fn from(weekday: chrono::Weekday) -> Self {
        match weekday {
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
            chrono::Weekday::Sat => Self::Saturday,
            chrono::Weekday::Sun => Self::Sunday,
        }
    }
}

impl From<DayOfWeek> for chrono::Weekday {
    fn from(day: DayOfWeek) -> Self {
        match day {
            DayOfWeek::Monday => Self::Mon,
            DayOfWeek::Tuesday => Self::Tue,
            DayOfWeek::Wednesday => Self::Wed,
            DayOfWeek::Thursday => Self::Thu,
            DayOfWeek::Friday => Self::Fri,
            DayOfWeek::Saturday => Self::Sat,
            DayOfWeek::Sunday => Self::Sun,
        }
    }
}

impl Serialize for DayOfWeek {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Accepted configuration spellings: a name or an ISO number.
#[derive(Deserialize)]
#[serde(untagged)]
enum DayOfWeekRepr {
    Number(u8),
    Name(String),
}

impl TryFrom<DayOfWeekRepr> for DayOfWeek {
    type Error = DateError;

    fn try_from(repr: DayOfWeekRepr) -> Result<Self, Self::Error> {
        match repr {
            DayOfWeekRepr::Number(number) => Self::try_from(number),
            DayOfWeekRepr::Name(name) => name.parse(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_round_trip() {
        for (index, day) in (1_u8..).zip(DayOfWeek::ALL) {
            assert_eq!(day.number(), index);
            assert_eq!(DayOfWeek::from_number(index), Some(day));
        }
        assert_eq!(DayOfWeek::from_number(0), None);
        assert_eq!(DayOfWeek::from_number(8), None);
    }

    #[test]
    fn day_count_to_is_forward_cyclic_distance() {
        assert_eq!(DayOfWeek::Monday.day_count_to(DayOfWeek::Friday), 4);
        assert_eq!(DayOfWeek::Friday.day_count_to(DayOfWeek::Monday), 3);
        assert_eq!(DayOfWeek::Sunday.day_count_to(DayOfWeek::Sunday), 0);
        assert_eq!(DayOfWeek::Sunday.day_count_to(DayOfWeek::Saturday), 6);

        for a in DayOfWeek::ALL {
            for b in DayOfWeek::ALL {
                let forward = a.day_count_to(b);
                assert!(forward < 7);
                assert_eq!((forward + b.day_count_to(a)) % 7, 0);
            }
        }
    }

    #[test]
    fn succ_and_pred_wrap() {
        assert_eq!(DayOfWeek::Sunday.succ(), DayOfWeek::Monday);
        assert_eq!(DayOfWeek::Monday.pred(), DayOfWeek::Sunday);
        for day in DayOfWeek::ALL {
            assert_eq!(day.succ().pred(), day);
            assert_eq!(day.day_count_to(day.succ()), 1);
        }
    }

    #[test]
    fn parses_names_and_abbreviations() {
        assert_eq!("Monday".parse::<DayOfWeek>(), Ok(DayOfWeek::Monday));
        assert_eq!("sun".parse::<DayOfWeek>(), Ok(DayOfWeek::Sunday));
        assert_eq!(" THU ".parse::<DayOfWeek>(), Ok(DayOfWeek::Thursday));
        assert!(matches!(
            "someday".parse::<DayOfWeek>(),
            Err(DateError::UnknownDayOfWeek(_))
        ));
    }

    #[test]
    fn chrono_conversion_agrees_on_numbering() {
        for day in DayOfWeek::ALL {
            let weekday = chrono::Weekday::from(day);
            assert_eq!(weekday.number_from_monday(), u32::from(day.number()));
            assert_eq!(DayOfWeek::from(weekday), day);
        }
    }

    #[test]
    fn serde_accepts_names_and_numbers() {
        let by_name: DayOfWeek = serde_json::from_str("\"wednesday\"").unwrap();
        let by_number: DayOfWeek = serde_json::from_str("3").unwrap();

        assert_eq!(by_name, DayOfWeek::Wednesday);
        assert_eq!(by_number, DayOfWeek::Wednesday);
        assert!(serde_json::from_str::<DayOfWeek>("9").is_err());
        assert_eq!(
            serde_json::to_string(&DayOfWeek::Saturday).unwrap(),
            "\"saturday\""
        );
    }
}
