//! World geography: the square map plus its forests and lakes.

use soc_core::Point;

use crate::{ResourceIndex, Shape, SpatialError, SpatialResult};

// ── ResourceKind ──────────────────────────────────────────────────────────────

/// The kinds of static resource zone an action can send an agent to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ResourceKind {
    /// Rectangular woodland: food and a discreet spot to relieve oneself.
    Forest,
    /// Circular body of fresh water.
    Lake,
}

impl ResourceKind {
    /// Lower-case label, as used in CSV files.
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::Forest => "forest",
            ResourceKind::Lake   => "lake",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Geography ─────────────────────────────────────────────────────────────────

/// Immutable static geometry of the world.
///
/// Do not construct directly; use [`GeographyBuilder`].
#[derive(Debug)]
pub struct Geography {
    size:    f64,
    forests: ResourceIndex,
    lakes:   ResourceIndex,
}

impl Geography {
    /// A world of side `size` with no resources.
    pub fn empty(size: f64) -> Self {
        Self {
            size,
            forests: ResourceIndex::empty(),
            lakes:   ResourceIndex::empty(),
        }
    }

    /// Side length of the square world (rendering only).
    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn forests(&self) -> &ResourceIndex {
        &self.forests
    }

    pub fn lakes(&self) -> &ResourceIndex {
        &self.lakes
    }

    /// The index holding resources of `kind`.
    pub fn resources(&self, kind: ResourceKind) -> &ResourceIndex {
        match kind {
            ResourceKind::Forest => &self.forests,
            ResourceKind::Lake   => &self.lakes,
        }
    }

    /// Where an agent at `from` should walk to use the nearest `kind`
    /// resource.  `None` if the world has no resource of that kind.
    pub fn approach_point(&self, kind: ResourceKind, from: Point) -> Option<Point> {
        self.resources(kind).nearest_boundary_point(from)
    }
}

// ── GeographyBuilder ──────────────────────────────────────────────────────────

/// Collect forests and lakes, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use soc_core::Point;
/// use soc_spatial::{GeographyBuilder, ResourceKind};
///
/// let mut b = GeographyBuilder::new(100.0);
/// b.add_forest(10.0, 10.0, 30.0, 40.0);
/// b.add_lake(40.0, 80.0, 5.0);
/// let geo = b.build().unwrap();
/// assert_eq!(geo.forests().len(), 1);
/// assert!(geo.approach_point(ResourceKind::Lake, Point::new(40.0, 70.0)).is_some());
/// ```
pub struct GeographyBuilder {
    size:    f64,
    forests: Vec<Shape>,
    lakes:   Vec<Shape>,
}

impl GeographyBuilder {
    pub fn new(size: f64) -> Self {
        Self { size, forests: Vec::new(), lakes: Vec::new() }
    }

    /// Add a forest rectangle with corner `(x, y)` and the given extents.
    pub fn add_forest(&mut self, x: f64, y: f64, width: f64, height: f64) -> &mut Self {
        self.forests.push(Shape::rect(x, y, width, height));
        self
    }

    /// Add a lake circle centred on `(x, y)`.
    pub fn add_lake(&mut self, x: f64, y: f64, radius: f64) -> &mut Self {
        self.lakes.push(Shape::circle(x, y, radius));
        self
    }

    /// Validate every shape and bulk-load the two indexes.
    pub fn build(self) -> SpatialResult<Geography> {
        if !(self.size.is_finite() && self.size > 0.0) {
            return Err(SpatialError::InvalidGeometry(format!(
                "world size must be positive and finite, got {}",
                self.size
            )));
        }
        check_all(ResourceKind::Forest, &self.forests)?;
        check_all(ResourceKind::Lake, &self.lakes)?;

        Ok(Geography {
            size:    self.size,
            forests: ResourceIndex::new(self.forests),
            lakes:   ResourceIndex::new(self.lakes),
        })
    }
}

fn check_all(kind: ResourceKind, shapes: &[Shape]) -> SpatialResult<()> {
    match shapes.iter().position(|s| !s.is_well_formed()) {
        None => Ok(()),
        Some(i) => Err(SpatialError::InvalidGeometry(format!(
            "{kind} #{i} has non-finite coordinates or a negative radius: {:?}",
            shapes[i]
        ))),
    }
}
