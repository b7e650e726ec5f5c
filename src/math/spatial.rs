use serde::{Deserialize, Serialize};

use crate::math::{Interval, SimpleInterval};

/// Two independent axis ranges. Containment requires both axes in range.
#[derive(Debug, Copy, Clone, Default)]
#[derive(PartialEq)]
#[derive(Serialize, Deserialize)]
pub struct Interval2 {
    pub x: Interval,
    pub y: Interval,
}

impl Interval2 {
    pub const fn new(x: Interval, y: Interval) -> Self {
        Interval2 { x, y }
    }

    pub fn in_range(self, x: f32, y: f32) -> bool {
        self.x.in_range(x) && self.y.in_range(y)
    }

    pub fn lerp(self, t: f32) -> (f32, f32) {
        (self.x.lerp(t), self.y.lerp(t))
    }

    pub fn center(self) -> (f32, f32) {
        (self.x.center(), self.y.center())
    }
}

/// Three independent axis ranges.
#[derive(Debug, Copy, Clone, Default)]
#[derive(PartialEq)]
#[derive(Serialize, Deserialize)]
pub struct Interval3 {
    pub x: Interval,
    pub y: Interval,
    pub z: Interval,
}

impl Interval3 {
    pub const fn new(x: Interval, y: Interval, z: Interval) -> Self {
        Interval3 { x, y, z }
    }

    pub fn in_range(self, x: f32, y: f32, z: f32) -> bool {
        self.x.in_range(x) && self.y.in_range(y) && self.z.in_range(z)
    }

    pub fn lerp(self, t: f32) -> (f32, f32, f32) {
        (self.x.lerp(t), self.y.lerp(t), self.z.lerp(t))
    }

    pub fn center(self) -> (f32, f32, f32) {
        (self.x.center(), self.y.center(), self.z.center())
    }
}

/// The freely-ordered twin of [`Interval2`].
#[derive(Debug, Copy, Clone, Default)]
#[derive(PartialEq)]
#[derive(Serialize, Deserialize)]
pub struct SimpleInterval2 {
    pub x: SimpleInterval,
    pub y: SimpleInterval,
}

impl SimpleInterval2 {
    pub const fn new(x: SimpleInterval, y: SimpleInterval) -> Self {
        SimpleInterval2 { x, y }
    }

    pub fn in_range(self, x: f32, y: f32) -> bool {
        self.x.in_range(x) && self.y.in_range(y)
    }

    pub fn encapsulate(&mut self, x: f32, y: f32) {
        self.x.encapsulate(x);
        self.y.encapsulate(y);
    }

    pub fn center(self) -> (f32, f32) {
        (self.x.center(), self.y.center())
    }
}

/// The freely-ordered twin of [`Interval3`].
#[derive(Debug, Copy, Clone, Default)]
#[derive(PartialEq)]
#[derive(Serialize, Deserialize)]
pub struct SimpleInterval3 {
    pub x: SimpleInterval,
    pub y: SimpleInterval,
    pub z: SimpleInterval,
}

impl SimpleInterval3 {
    pub const fn new(x: SimpleInterval, y: SimpleInterval, z: SimpleInterval) -> Self {
        SimpleInterval3 { x, y, z }
    }

    pub fn in_range(self, x: f32, y: f32, z: f32) -> bool {
        self.x.in_range(x) && self.y.in_range(y) && self.z.in_range(z)
    }

    pub fn encapsulate(&mut self, x: f32, y: f32, z: f32) {
        self.x.encapsulate(x);
        self.y.encapsulate(y);
        self.z.encapsulate(z);
    }

    pub fn center(self) -> (f32, f32, f32) {
        (self.x.center(), self.y.center(), self.z.center())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn containment_needs_every_axis() {
        let area = Interval2::new(Interval::new(0.0, 10.0), Interval::new(-5.0, 5.0));
        assert!(area.in_range(5.0, 0.0));
        assert!(!area.in_range(5.0, 6.0));
        assert!(!area.in_range(11.0, 0.0));
    }

    #[test]
    fn center_is_per_axis_midpoint() {
        let volume = Interval3::new(
            Interval::new(0.0, 10.0),
            Interval::new(-4.0, 4.0),
            Interval::new(2.0, 3.0),
        );
        let (cx, cy, cz) = volume.center();
        assert_relative_eq!(cx, 5.0);
        assert_relative_eq!(cy, 0.0);
        assert_relative_eq!(cz, 2.5);
    }

    #[test]
    fn simple_encapsulate_spans_per_axis() {
        let mut area =
            SimpleInterval2::new(SimpleInterval::new(5.0, 2.0), SimpleInterval::new(1.0, 1.0));
        area.encapsulate(10.0, -3.0);
        assert!(area.in_range(8.0, 0.0));
        assert_eq!(area.x.b, 10.0);
        assert_eq!(area.y.a, -3.0);
    }

    #[test]
    fn simple3_containment_ignores_endpoint_order() {
        let volume = SimpleInterval3::new(
            SimpleInterval::new(10.0, 0.0),
            SimpleInterval::new(-1.0, 1.0),
            SimpleInterval::new(3.0, -3.0),
        );
        assert!(volume.in_range(5.0, 0.0, 0.0));
        assert!(!volume.in_range(5.0, 0.0, 4.0));
    }
}
