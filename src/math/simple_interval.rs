use serde::{Deserialize, Serialize};

/// A freely-ordered range: two raw endpoints with no invariant between them.
///
/// Queries compute the effective `min`/`max` per call, so `a` and `b` may be
/// stored in either order. [`encapsulate`][`Self::encapsulate`] is the one
/// operation that normalizes the stored order.
#[derive(Debug, Copy, Clone, Default)]
#[derive(PartialEq)]
#[derive(Serialize, Deserialize)]
pub struct SimpleInterval {
    pub a: f32,
    pub b: f32,
}

impl SimpleInterval {
    pub const fn new(a: f32, b: f32) -> Self {
        SimpleInterval { a, b }
    }

    pub fn min(self) -> f32 {
        self.a.min(self.b)
    }

    pub fn max(self) -> f32 {
        self.a.max(self.b)
    }

    pub fn in_range(self, value: f32) -> bool {
        value >= self.min() && value <= self.max()
    }

    pub fn lerp(self, t: f32) -> f32 {
        self.lerp_unclamped(t.clamp(0.0, 1.0))
    }

    pub fn lerp_unclamped(self, t: f32) -> f32 {
        self.min() + (self.max() - self.min()) * t
    }

    /// Zero-width spans return the sentinel `0.0`, matching
    /// [`Interval::inverse_lerp`][`crate::math::Interval::inverse_lerp`].
    pub fn inverse_lerp(self, value: f32) -> f32 {
        self.inverse_lerp_unclamped(value).clamp(0.0, 1.0)
    }

    pub fn inverse_lerp_unclamped(self, value: f32) -> f32 {
        let (min, max) = (self.min(), self.max());
        if max == min {
            return 0.0;
        }
        (value - min) / (max - min)
    }

    /// Grows the span to include `value`.
    ///
    /// The endpoints are normalized first, so afterwards `a` always holds the
    /// smaller endpoint; `a` is pushed down or `b` pushed up depending on
    /// which side `value` falls outside of.
    pub fn encapsulate(&mut self, value: f32) {
        if self.a > self.b {
            std::mem::swap(&mut self.a, &mut self.b);
        }
        if value < self.a {
            self.a = value;
        } else if value > self.b {
            self.b = value;
        }
    }

    pub fn center(self) -> f32 {
        (self.a + self.b) * 0.5
    }

    pub fn length(self) -> f32 {
        self.max() - self.min()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use test_case::test_case;

    use super::*;

    #[test_case(3.0, true; "interior of reversed span")]
    #[test_case(2.0, true; "smaller endpoint")]
    #[test_case(5.0, true; "larger endpoint")]
    #[test_case(1.5, false; "below")]
    #[test_case(5.5, false; "above")]
    fn in_range_ignores_endpoint_order(probe: f32, expected: bool) {
        assert_eq!(SimpleInterval::new(5.0, 2.0).in_range(probe), expected);
    }

    #[test]
    fn lerp_against_effective_bounds() {
        let span = SimpleInterval::new(10.0, 0.0);
        assert_relative_eq!(span.lerp(0.25), 2.5);
        assert_relative_eq!(span.lerp_unclamped(1.5), 15.0);
        assert_relative_eq!(span.inverse_lerp(2.5), 0.25);
    }

    #[test]
    fn zero_width_sentinel() {
        assert_eq!(SimpleInterval::new(3.0, 3.0).inverse_lerp_unclamped(9.0), 0.0);
    }

    #[test]
    fn encapsulate_grows_upward() {
        let mut span = SimpleInterval::new(5.0, 2.0);
        span.encapsulate(10.0);
        assert_eq!(span.a, 2.0);
        assert_eq!(span.b, 10.0);
        assert!(span.in_range(7.0));
    }

    #[test]
    fn encapsulate_grows_downward() {
        let mut span = SimpleInterval::new(5.0, 2.0);
        span.encapsulate(-1.0);
        assert_eq!(span.a, -1.0);
        assert_eq!(span.b, 5.0);
    }

    #[test]
    fn encapsulate_inside_only_normalizes() {
        let mut span = SimpleInterval::new(5.0, 2.0);
        span.encapsulate(3.0);
        assert_eq!(span, SimpleInterval::new(2.0, 5.0));
    }
}
