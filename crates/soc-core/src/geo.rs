//! Planar coordinate type.
//!
//! The world is a flat square measured in abstract "world units".  `Point`
//! uses `f64` so that repeated fixed-length steps stay well inside the
//! arrival epsilon over long journeys.

use std::ops::{Add, Mul, Sub};

/// A position in world units.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (other - self).length()
    }

    /// Squared Euclidean distance — cheaper when only comparing.
    #[inline]
    pub fn distance_2(self, other: Point) -> f64 {
        let d = other - self;
        d.x * d.x + d.y * d.y
    }

    /// Length of `self` treated as a vector from the origin.
    #[inline]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Move from `self` toward `target` by at most `max_step`.
    ///
    /// Never overshoots: when `target` is within `max_step` the result is
    /// exactly `target`.
    pub fn step_toward(self, target: Point, max_step: f64) -> Point {
        let delta = target - self;
        let dist = delta.length();
        if dist <= max_step {
            return target;
        }
        self + delta * (max_step / dist)
    }

    /// `[x, y]` array form, as used by the R-tree and render buffers.
    #[inline]
    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    #[inline]
    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl From<[f64; 2]> for Point {
    fn from(a: [f64; 2]) -> Self {
        Point::new(a[0], a[1])
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}
