use std::ops::{Add, Div, Mul, Sub};

use serde::{Deserialize, Serialize};

/// A closed numeric range with ordered bounds.
///
/// With `override_borders` unset (the default), `min <= max` holds after
/// every mutation: assigning one bound drags the other along when the two
/// would cross. With it set, the bounds move independently and may
/// temporarily hold `min > max`. Clearing the flag again via
/// [`set_override_borders`][`Self::set_override_borders`] re-enforces the
/// ordering, flooring `min` at zero when `clamp_to_zero` is also set.
#[derive(Debug, Copy, Clone, Default)]
#[derive(PartialEq)]
#[derive(Serialize, Deserialize)]
pub struct Interval {
    min: f32,
    max: f32,
    override_borders: bool,
    clamp_to_zero: bool,
}

impl Interval {
    /// New interval spanning `a..=b`. The bounds are sorted on entry, so
    /// `new(5.0, 2.0)` spans `2..=5`.
    pub fn new(a: f32, b: f32) -> Self {
        Interval { min: a.min(b), max: a.max(b), override_borders: false, clamp_to_zero: false }
    }

    /// New interval with explicit flags. The ordering invariant is applied on
    /// entry only when `override_borders` is false.
    pub fn with_flags(a: f32, b: f32, override_borders: bool, clamp_to_zero: bool) -> Self {
        let (min, max) = if override_borders { (a, b) } else { (a.min(b), b.max(a)) };
        Interval { min, max, override_borders, clamp_to_zero }
    }

    pub const fn min(self) -> f32 {
        self.min
    }

    pub const fn max(self) -> f32 {
        self.max
    }

    pub const fn override_borders(self) -> bool {
        self.override_borders
    }

    pub const fn clamp_to_zero(self) -> bool {
        self.clamp_to_zero
    }

    /// Assigns the lower bound.
    ///
    /// Without `override_borders`, `max` is dragged up to keep `min <= max`.
    /// With it, `max` is left untouched and `min` is floored at zero when
    /// `clamp_to_zero` is set.
    pub fn set_min(&mut self, value: f32) {
        if self.override_borders {
            self.min = if self.clamp_to_zero { value.max(0.0) } else { value };
        } else {
            self.min = value;
            self.max = self.max.max(value);
        }
    }

    /// Assigns the upper bound; the mirror of [`set_min`][`Self::set_min`].
    pub fn set_max(&mut self, value: f32) {
        if self.override_borders {
            self.max = value;
        } else {
            self.max = value;
            self.min = self.min.min(value);
        }
    }

    /// Toggles independent bound assignment. Clearing the flag re-enforces
    /// the ordering invariant on the current bounds.
    pub fn set_override_borders(&mut self, value: bool) {
        self.override_borders = value;
        if !value {
            if self.clamp_to_zero {
                self.min = self.min.max(0.0);
            }
            self.max = self.max.max(self.min);
        }
    }

    pub fn set_clamp_to_zero(&mut self, value: bool) {
        self.clamp_to_zero = value;
    }

    pub fn in_range(self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn in_range_int(self, value: i32) -> bool {
        self.in_range(value as f32)
    }

    /// Interpolates between the bounds, `t` clamped to `[0, 1]`.
    pub fn lerp(self, t: f32) -> f32 {
        self.lerp_unclamped(t.clamp(0.0, 1.0))
    }

    /// Interpolates without clamping `t`; values outside `[0, 1]` extrapolate
    /// past the bounds.
    pub fn lerp_unclamped(self, t: f32) -> f32 {
        self.min + (self.max - self.min) * t
    }

    /// The `t` for which `lerp(t) == value`, clamped to `[0, 1]`.
    ///
    /// A zero-width interval has no defined `t`; the sentinel `0.0` is
    /// returned instead of dividing by zero.
    pub fn inverse_lerp(self, value: f32) -> f32 {
        self.inverse_lerp_unclamped(value).clamp(0.0, 1.0)
    }

    /// Unclamped inverse interpolation, same zero-width sentinel as
    /// [`inverse_lerp`][`Self::inverse_lerp`].
    pub fn inverse_lerp_unclamped(self, value: f32) -> f32 {
        if self.max == self.min {
            return 0.0;
        }
        (value - self.min) / (self.max - self.min)
    }

    pub fn center(self) -> f32 {
        (self.min + self.max) * 0.5
    }

    pub fn length(self) -> f32 {
        self.max - self.min
    }
}

// Componentwise arithmetic. The bounds are intentionally NOT re-sorted after
// the operation, so scaling by a negative number yields `min > max` until the
// next bound assignment. Callers relying on ordered bounds after negative
// scaling must re-assign a bound or toggle `override_borders`.
macro_rules! interval_scalar_ops {
    ($ty:ident, $scalar:ty) => {
        impl Add<$scalar> for $ty {
            type Output = $ty;
            fn add(self, rhs: $scalar) -> $ty {
                $ty { min: self.min + rhs, max: self.max + rhs, ..self }
            }
        }

        impl Sub<$scalar> for $ty {
            type Output = $ty;
            fn sub(self, rhs: $scalar) -> $ty {
                $ty { min: self.min - rhs, max: self.max - rhs, ..self }
            }
        }

        impl Mul<$scalar> for $ty {
            type Output = $ty;
            fn mul(self, rhs: $scalar) -> $ty {
                $ty { min: self.min * rhs, max: self.max * rhs, ..self }
            }
        }

        impl Div<$scalar> for $ty {
            type Output = $ty;
            fn div(self, rhs: $scalar) -> $ty {
                $ty { min: self.min / rhs, max: self.max / rhs, ..self }
            }
        }

        impl Add for $ty {
            type Output = $ty;
            fn add(self, rhs: $ty) -> $ty {
                $ty { min: self.min + rhs.min, max: self.max + rhs.max, ..self }
            }
        }

        impl Sub for $ty {
            type Output = $ty;
            fn sub(self, rhs: $ty) -> $ty {
                $ty { min: self.min - rhs.min, max: self.max - rhs.max, ..self }
            }
        }

        impl Mul for $ty {
            type Output = $ty;
            fn mul(self, rhs: $ty) -> $ty {
                $ty { min: self.min * rhs.min, max: self.max * rhs.max, ..self }
            }
        }

        impl Div for $ty {
            type Output = $ty;
            fn div(self, rhs: $ty) -> $ty {
                $ty { min: self.min / rhs.min, max: self.max / rhs.max, ..self }
            }
        }
    };
}

interval_scalar_ops!(Interval, f32);
interval_scalar_ops!(IntervalInt, i32);

/// The integer twin of [`Interval`]: the same ordering invariant and flag
/// behavior over `i32` bounds. Interpolation queries are answered in `f32`.
#[derive(Debug, Copy, Clone, Default)]
#[derive(PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize)]
pub struct IntervalInt {
    min: i32,
    max: i32,
    override_borders: bool,
    clamp_to_zero: bool,
}

impl IntervalInt {
    pub fn new(a: i32, b: i32) -> Self {
        IntervalInt { min: a.min(b), max: a.max(b), override_borders: false, clamp_to_zero: false }
    }

    pub fn with_flags(a: i32, b: i32, override_borders: bool, clamp_to_zero: bool) -> Self {
        let (min, max) = if override_borders { (a, b) } else { (a.min(b), b.max(a)) };
        IntervalInt { min, max, override_borders, clamp_to_zero }
    }

    pub const fn min(self) -> i32 {
        self.min
    }

    pub const fn max(self) -> i32 {
        self.max
    }

    pub const fn override_borders(self) -> bool {
        self.override_borders
    }

    pub const fn clamp_to_zero(self) -> bool {
        self.clamp_to_zero
    }

    pub fn set_min(&mut self, value: i32) {
        if self.override_borders {
            self.min = if self.clamp_to_zero { value.max(0) } else { value };
        } else {
            self.min = value;
            self.max = self.max.max(value);
        }
    }

    pub fn set_max(&mut self, value: i32) {
        if self.override_borders {
            self.max = value;
        } else {
            self.max = value;
            self.min = self.min.min(value);
        }
    }

    pub fn set_override_borders(&mut self, value: bool) {
        self.override_borders = value;
        if !value {
            if self.clamp_to_zero {
                self.min = self.min.max(0);
            }
            self.max = self.max.max(self.min);
        }
    }

    pub fn set_clamp_to_zero(&mut self, value: bool) {
        self.clamp_to_zero = value;
    }

    pub fn in_range(self, value: i32) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn lerp(self, t: f32) -> f32 {
        self.lerp_unclamped(t.clamp(0.0, 1.0))
    }

    pub fn lerp_unclamped(self, t: f32) -> f32 {
        self.min as f32 + (self.max - self.min) as f32 * t
    }

    pub fn inverse_lerp(self, value: f32) -> f32 {
        self.inverse_lerp_unclamped(value).clamp(0.0, 1.0)
    }

    pub fn inverse_lerp_unclamped(self, value: f32) -> f32 {
        if self.max == self.min {
            return 0.0;
        }
        (value - self.min as f32) / (self.max - self.min) as f32
    }

    pub fn center(self) -> f32 {
        (self.min + self.max) as f32 * 0.5
    }

    pub const fn length(self) -> i32 {
        self.max - self.min
    }
}

impl From<IntervalInt> for Interval {
    fn from(value: IntervalInt) -> Self {
        Interval {
            min: value.min as f32,
            max: value.max as f32,
            override_borders: value.override_borders,
            clamp_to_zero: value.clamp_to_zero,
        }
    }
}

/// Truncating conversion; fractional bounds round toward zero.
impl From<Interval> for IntervalInt {
    fn from(value: Interval) -> Self {
        IntervalInt {
            min: value.min as i32,
            max: value.max as i32,
            override_borders: value.override_borders,
            clamp_to_zero: value.clamp_to_zero,
        }
    }
}
