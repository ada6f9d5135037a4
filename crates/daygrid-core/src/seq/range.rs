//! Arithmetic progressions over `f64`.

/// Largest integer `f64` represents exactly, together with all its
/// predecessors.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Stepping {
    /// Integer start and step: repeated addition is exact.
    Accumulate { next: f64 },
    /// Each value is computed from `start` and its index so rounding errors
    /// do not pile up.
    Interpolate { index: f64 },
}

/// Iterator returned by [`range`] and [`range_to`].
#[derive(Debug, Clone, PartialEq)]
pub struct Range {
    start: f64,
    end: f64,
    step: f64,
    stepping: Stepping,
}

impl Range {
    fn in_bounds(&self, value: f64) -> bool {
        if self.step > 0.0 {
            value < self.end
        } else {
            value > self.end
        }
    }
}

impl Iterator for Range {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let value = match self.stepping {
            Stepping::Accumulate { next } => next,
            Stepping::Interpolate { index } => self.step.mul_add(index, self.start),
        };
        if !self.in_bounds(value) {
            return None;
        }

        self.stepping = match self.stepping {
            Stepping::Accumulate { next } => Stepping::Accumulate {
                next: next + self.step,
            },
            Stepping::Interpolate { index } => Stepping::Interpolate { index: index + 1.0 },
        };
        Some(value)
    }
}

fn is_integral(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}

/// ## Summary
/// Yields `start, start + step, start + 2 * step, ...` up to, but excluding,
/// `end`.
///
/// A negative `step` counts downwards to `end`. A zero, NaN or infinite
/// `step` yields nothing. When `start` or `step` is fractional, or `end` lies
/// outside the exactly representable integers, each value is computed as
/// `start + index * step` instead of by repeated addition.
#[must_use]
pub fn range(start: f64, end: f64, step: f64) -> Range {
    let stepping = if is_integral(start) && is_integral(step) && end.abs() <= MAX_SAFE_INTEGER {
        Stepping::Accumulate { next: start }
    } else {
        Stepping::Interpolate { index: 0.0 }
    };

    let usable = step.is_finite() && step != 0.0 && !start.is_nan() && !end.is_nan();
    Range {
        start,
        // An empty range: nothing lies strictly before `start`.
        end: if usable { end } else { start },
        step: if usable { step } else { 1.0 },
        stepping,
    }
}

/// Yields `0, 1, 2, ...` up to, but excluding, `end`.
#[must_use]
pub fn range_to(end: f64) -> Range {
    range(0.0, end, 1.0)
}
