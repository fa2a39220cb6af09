//! Resource footprints: axis-aligned rectangles and circles.
//!
//! All distance queries measure to the *edge* of a shape, clamped at zero,
//! so a point inside a resource is at distance 0 from it.

use soc_core::Point;

/// The footprint of one static resource zone.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape {
    /// Axis-aligned rectangle, stored as normalised corners (`min <= max`).
    Rect { min: Point, max: Point },
    /// Disc of `radius` around `center`.
    Circle { center: Point, radius: f64 },
}

impl Shape {
    /// Rectangle from its corner `(x, y)` and extents.  Negative extents are
    /// accepted and normalised, so the stored corners are always ordered.
    pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        let (x0, x1) = ordered(x, x + width);
        let (y0, y1) = ordered(y, y + height);
        Shape::Rect { min: Point::new(x0, y0), max: Point::new(x1, y1) }
    }

    /// Circle from its center and radius.
    pub fn circle(x: f64, y: f64, radius: f64) -> Self {
        Shape::Circle { center: Point::new(x, y), radius }
    }

    /// Distance from `p` to the nearest point of this shape.  Zero inside.
    pub fn edge_distance(&self, p: Point) -> f64 {
        match *self {
            Shape::Rect { min, max } => {
                let dx = (min.x - p.x).max(p.x - max.x).max(0.0);
                let dy = (min.y - p.y).max(p.y - max.y).max(0.0);
                dx.hypot(dy)
            }
            Shape::Circle { center, radius } => (p.distance(center) - radius).max(0.0),
        }
    }

    /// `true` if `p` lies inside or on the boundary.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.edge_distance(p) == 0.0
    }

    /// The point of this shape closest to `p`.
    ///
    /// For `p` outside the shape this is the boundary point nearest `p`, so
    /// travelling there covers exactly [`edge_distance`](Self::edge_distance).
    /// A point already inside is returned unchanged.
    pub fn nearest_boundary_point(&self, p: Point) -> Point {
        match *self {
            Shape::Rect { min, max } => {
                Point::new(p.x.clamp(min.x, max.x), p.y.clamp(min.y, max.y))
            }
            Shape::Circle { center, radius } => {
                let offset = p - center;
                let dist = offset.length();
                if dist <= radius {
                    p
                } else {
                    center + offset * (radius / dist)
                }
            }
        }
    }

    /// Bounding box as `(lower, upper)` corners.
    pub fn bounds(&self) -> ([f64; 2], [f64; 2]) {
        match *self {
            Shape::Rect { min, max } => (min.to_array(), max.to_array()),
            Shape::Circle { center, radius } => (
                [center.x - radius, center.y - radius],
                [center.x + radius, center.y + radius],
            ),
        }
    }

    /// `true` when every coordinate is finite and extents are non-negative.
    pub(crate) fn is_well_formed(&self) -> bool {
        match *self {
            Shape::Rect { min, max } => {
                [min.x, min.y, max.x, max.y].iter().all(|v| v.is_finite())
            }
            Shape::Circle { center, radius } => {
                center.x.is_finite() && center.y.is_finite() && radius.is_finite() && radius >= 0.0
            }
        }
    }
}

#[inline]
fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}
