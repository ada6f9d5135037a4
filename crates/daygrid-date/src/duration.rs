//! Clock durations with unit conversion, scaling and division.

use chrono::TimeDelta;

/// Units a [`Duration`] can be measured and rounded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Unit {
    Nanosecond,
    Microsecond,
    Millisecond,
    Second,
    Minute,
    Hour,
    /// 24 hours.
    Day,
    /// 7 days.
    Week,
}

impl Unit {
    /// Length of one unit in seconds.
    #[must_use]
    pub const fn seconds(self) -> f64 {
        match self {
            Self::Nanosecond => 1e-9,
            Self::Microsecond => 1e-6,
            Self::Millisecond => 1e-3,
            Self::Second => 1.0,
            Self::Minute => 60.0,
            Self::Hour => 3_600.0,
            Self::Day => 86_400.0,
            Self::Week => 604_800.0,
        }
    }

    fn delta(self, count: i64) -> Option<TimeDelta> {
        match self {
            Self::Nanosecond => Some(TimeDelta::nanoseconds(count)),
            Self::Microsecond => Some(TimeDelta::microseconds(count)),
            Self::Millisecond => TimeDelta::try_milliseconds(count),
            Self::Second => TimeDelta::try_seconds(count),
            Self::Minute => TimeDelta::try_minutes(count),
            Self::Hour => TimeDelta::try_hours(count),
            Self::Day => TimeDelta::try_days(count),
            Self::Week => TimeDelta::try_weeks(count),
        }
    }
}

/// A signed span of clock time.
///
/// Totally ordered, so `min`, `max` and `clamp` from `Ord` and from
/// [`crate::order`] apply. Days and weeks are fixed multiples of hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Duration(TimeDelta);

impl Duration {
    pub const ZERO: Self = Self(TimeDelta::zero());

    /// ## Summary
    /// Builds a duration of `total` units, rounded to the nearest whole unit.
    ///
    /// Returns `None` for non-finite totals or totals outside the
    /// representable range.
    #[must_use]
    pub fn from_total(total: f64, unit: Unit) -> Option<Self> {
        let rounded = total.round();
        // 2^63 is the first whole number past the i64 range.
        if !rounded.is_finite() || rounded.abs() >= 2_f64.powi(63) {
            return None;
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "rounded to a whole number inside the i64 range above"
        )]
        let count = rounded as i64;
        unit.delta(count).map(Self)
    }

    #[must_use]
    pub fn delta(self) -> TimeDelta {
        self.0
    }

    /// ## Summary
    /// The duration expressed in `unit`, including any fraction.
    #[must_use]
    pub fn total(self, unit: Unit) -> f64 {
        #[expect(clippy::cast_precision_loss, reason = "totals are fractional")]
        let seconds = self.0.num_seconds() as f64;
        let nanos = f64::from(self.0.subsec_nanos());
        (seconds + nanos * 1e-9) / unit.seconds()
    }

    /// ## Summary
    /// Multiplies the duration by `factor`, rounding the result to a whole
    /// number of `unit`.
    #[must_use]
    pub fn scale(self, factor: f64, unit: Unit) -> Option<Self> {
        Self::from_total(self.total(unit) * factor, unit)
    }

    /// ## Summary
    /// Divides the duration by a plain number, rounding the result to a
    /// whole number of `unit`.
    #[must_use]
    pub fn div_by(self, divisor: f64, unit: Unit) -> Option<Self> {
        Self::from_total(self.total(unit) / divisor, unit)
    }

    /// ## Summary
    /// The dimensionless ratio `self / other`, independent of units.
    ///
    /// Dividing by a zero duration yields an infinite or NaN ratio.
    #[must_use]
    pub fn ratio(self, other: Self) -> f64 {
        self.total(Unit::Second) / other.total(Unit::Second)
    }

    #[must_use]
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(&other.0).map(Self)
    }

    #[must_use]
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(&other.0).map(Self)
    }

    #[must_use]
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }
}

impl From<TimeDelta> for Duration {
    fn from(delta: TimeDelta) -> Self {
        Self(delta)
    }
}

impl From<Duration> for TimeDelta {
    fn from(duration: Duration) -> Self {
        duration.0
    }
}

impl std::ops::Div for Duration {
    type Output = f64;

    fn div(self, rhs: Self) -> f64 {
        self.ratio(rhs)
    }
}

impl std::ops::Neg for Duration {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}
