//! Nearest-resource spatial index.
//!
//! # Query semantics
//!
//! [`ResourceIndex::nearest`] returns the resource whose *edge* is closest
//! to the query point.  A resource containing the point has distance 0 and
//! always wins over anything further away.  Ties are broken by insertion
//! order: the resource added first wins.
//!
//! # Spatial index
//!
//! Shapes are bulk-loaded into an R-tree (via `rstar`) keyed by their
//! bounding boxes.  The per-entry distance is the clamped edge distance, which
//! never undercuts the bounding-box distance, so `rstar`'s best-first
//! traversal yields resources in ascending edge-distance order.

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use soc_core::Point;

use crate::Shape;

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a shape plus its position in the input list.
#[derive(Clone, Debug)]
struct ResourceEntry {
    index: usize,
    shape: Shape,
}

impl RTreeObject for ResourceEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        let (lower, upper) = self.shape.bounds();
        AABB::from_corners(lower, upper)
    }
}

impl PointDistance for ResourceEntry {
    /// Squared edge distance.  Zero anywhere inside the shape.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let d = self.shape.edge_distance(Point::from(*point));
        d * d
    }
}

// ── Nearest ───────────────────────────────────────────────────────────────────

/// Result of a nearest-resource query.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Nearest {
    /// Position of the resource in the list the index was built from.
    pub index: usize,
    /// The resource's footprint.
    pub shape: Shape,
    /// Clamped distance from the query point to the resource's edge.
    pub edge_distance: f64,
}

// ── ResourceIndex ─────────────────────────────────────────────────────────────

/// An immutable set of same-kind resources with a nearest-edge query.
///
/// Built once at world construction and shared read-only by every agent.
#[derive(Debug)]
pub struct ResourceIndex {
    shapes: Vec<Shape>,
    tree:   RTree<ResourceEntry>,
}

impl ResourceIndex {
    /// Bulk-load `shapes`.  List order is preserved for tie-breaking.
    pub fn new(shapes: Vec<Shape>) -> Self {
        let entries: Vec<ResourceEntry> = shapes
            .iter()
            .enumerate()
            .map(|(index, &shape)| ResourceEntry { index, shape })
            .collect();
        Self {
            shapes,
            tree: RTree::bulk_load(entries),
        }
    }

    /// An index with no resources.  Every query returns `None`.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// The shapes in insertion order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Shape at list position `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    /// The resource with the smallest edge distance to `p`.
    ///
    /// Returns `None` only when the index is empty.
    pub fn nearest(&self, p: Point) -> Option<Nearest> {
        let mut candidates = self.tree.nearest_neighbor_iter_with_distance_2(&p.to_array());
        let (first, best_d2) = candidates.next()?;

        // Equal-distance entries come out consecutively; keep the earliest.
        let mut best = first;
        for (entry, d2) in candidates {
            if d2 > best_d2 {
                break;
            }
            if entry.index < best.index {
                best = entry;
            }
        }

        Some(Nearest {
            index:         best.index,
            shape:         best.shape,
            edge_distance: best.shape.edge_distance(p),
        })
    }

    /// The point on the nearest resource closest to `p`.
    ///
    /// Returns `None` when the index is empty; callers fall back to `p`.
    pub fn nearest_boundary_point(&self, p: Point) -> Option<Point> {
        self.nearest(p).map(|n| n.shape.nearest_boundary_point(p))
    }
}
