//! Unit tests for soc-spatial.
//!
//! All tests use hand-placed shapes so they run without any scenario file.

#[cfg(test)]
mod helpers {
    use crate::{Geography, GeographyBuilder};

    /// The two-forest, two-lake layout of the default scenario.
    pub fn default_geography() -> Geography {
        let mut b = GeographyBuilder::new(100.0);
        b.add_forest(10.0, 10.0, 30.0, 40.0);
        b.add_forest(70.0, 40.0, 20.0, 20.0);
        b.add_lake(40.0, 80.0, 5.0);
        b.add_lake(60.0, 30.0, 10.0);
        b.build().expect("valid geography")
    }
}

// ── Shape ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod shape {
    use soc_core::Point;

    use crate::Shape;

    #[test]
    fn circle_edge_distance_outside() {
        let lake = Shape::circle(0.0, 0.0, 5.0);
        assert!((lake.edge_distance(Point::new(8.0, 0.0)) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn circle_edge_distance_inside_is_zero() {
        let lake = Shape::circle(0.0, 0.0, 5.0);
        assert_eq!(lake.edge_distance(Point::new(1.0, 1.0)), 0.0);
        assert!(lake.contains(Point::new(1.0, 1.0)));
    }

    #[test]
    fn rect_edge_distance_side_and_corner() {
        let forest = Shape::rect(10.0, 10.0, 30.0, 40.0);
        // Left of the rectangle, level with it.
        assert_eq!(forest.edge_distance(Point::new(5.0, 20.0)), 5.0);
        // Diagonal from the (40, 50) corner.
        assert!((forest.edge_distance(Point::new(43.0, 54.0)) - 5.0).abs() < 1e-12);
        // Inside.
        assert_eq!(forest.edge_distance(Point::new(20.0, 20.0)), 0.0);
    }

    #[test]
    fn negative_extents_are_normalised() {
        let a = Shape::rect(40.0, 50.0, -30.0, -40.0);
        let b = Shape::rect(10.0, 10.0, 30.0, 40.0);
        assert_eq!(a, b);
    }

    #[test]
    fn circle_boundary_point_lies_on_edge() {
        let lake = Shape::circle(40.0, 80.0, 5.0);
        let from = Point::new(30.0, 20.0);
        let p = lake.nearest_boundary_point(from);
        assert!((p.distance(Point::new(40.0, 80.0)) - 5.0).abs() < 1e-9);
        assert!((from.distance(p) - lake.edge_distance(from)).abs() < 1e-9);
    }

    #[test]
    fn rect_boundary_point_is_clamped() {
        let forest = Shape::rect(70.0, 40.0, 20.0, 20.0);
        assert_eq!(forest.nearest_boundary_point(Point::new(50.0, 40.0)), Point::new(70.0, 40.0));
        assert_eq!(forest.nearest_boundary_point(Point::new(95.0, 70.0)), Point::new(90.0, 60.0));
    }

    #[test]
    fn boundary_point_inside_is_unchanged() {
        let forest = Shape::rect(0.0, 0.0, 10.0, 10.0);
        let lake = Shape::circle(0.0, 0.0, 10.0);
        let p = Point::new(3.0, 4.0);
        assert_eq!(forest.nearest_boundary_point(p), p);
        assert_eq!(lake.nearest_boundary_point(p), p);
    }

    #[test]
    fn circle_bounds() {
        let lake = Shape::circle(60.0, 30.0, 10.0);
        assert_eq!(lake.bounds(), ([50.0, 20.0], [70.0, 40.0]));
    }
}

// ── ResourceIndex ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod index {
    use soc_core::Point;

    use crate::{ResourceIndex, Shape};

    #[test]
    fn empty_index_returns_none() {
        let idx = ResourceIndex::empty();
        assert!(idx.is_empty());
        assert!(idx.nearest(Point::new(1.0, 2.0)).is_none());
        assert!(idx.nearest_boundary_point(Point::new(1.0, 2.0)).is_none());
    }

    #[test]
    fn picks_lake_with_nearest_edge() {
        let idx = ResourceIndex::new(vec![
            Shape::circle(40.0, 80.0, 5.0),
            Shape::circle(60.0, 30.0, 10.0),
        ]);
        let hit = idx.nearest(Point::new(45.0, 78.0)).unwrap();
        assert_eq!(hit.index, 0);
        assert!(hit.edge_distance < 0.5, "got {}", hit.edge_distance);

        let far = idx.nearest(Point::new(60.0, 50.0)).unwrap();
        assert_eq!(far.index, 1);
        assert!((far.edge_distance - 10.0).abs() < 1e-12);
    }

    #[test]
    fn edge_distance_beats_center_distance() {
        // Big lake's centre is further away, but its shore is closer.
        let idx = ResourceIndex::new(vec![
            Shape::circle(10.0, 0.0, 1.0),  // centre 10 away, edge 9
            Shape::circle(30.0, 0.0, 25.0), // centre 30 away, edge 5
        ]);
        assert_eq!(idx.nearest(Point::ORIGIN).unwrap().index, 1);
    }

    #[test]
    fn containing_resource_always_wins() {
        let idx = ResourceIndex::new(vec![
            Shape::circle(48.0, 0.0, 1.0),
            Shape::circle(0.0, 0.0, 50.0),
        ]);
        let hit = idx.nearest(Point::new(45.0, 0.0)).unwrap();
        assert_eq!(hit.index, 1);
        assert_eq!(hit.edge_distance, 0.0);
    }

    #[test]
    fn ties_go_to_first_listed() {
        let idx = ResourceIndex::new(vec![
            Shape::circle(-10.0, 0.0, 1.0),
            Shape::circle(10.0, 0.0, 1.0),
            Shape::circle(0.0, 10.0, 1.0),
        ]);
        assert_eq!(idx.nearest(Point::ORIGIN).unwrap().index, 0);

        let reversed = ResourceIndex::new(vec![
            Shape::circle(0.0, 10.0, 1.0),
            Shape::circle(10.0, 0.0, 1.0),
            Shape::circle(-10.0, 0.0, 1.0),
        ]);
        assert_eq!(reversed.nearest(Point::ORIGIN).unwrap().index, 0);
    }

    #[test]
    fn overlapping_containers_tie_on_list_order() {
        let idx = ResourceIndex::new(vec![
            Shape::rect(0.0, 0.0, 10.0, 10.0),
            Shape::rect(5.0, 5.0, 10.0, 10.0),
        ]);
        assert_eq!(idx.nearest(Point::new(7.0, 7.0)).unwrap().index, 0);
    }

    #[test]
    fn mixed_shapes() {
        let idx = ResourceIndex::new(vec![
            Shape::rect(10.0, 10.0, 30.0, 40.0),
            Shape::rect(70.0, 40.0, 20.0, 20.0),
        ]);
        assert_eq!(idx.nearest(Point::new(65.0, 45.0)).unwrap().index, 1);
        assert_eq!(idx.nearest(Point::new(30.0, 20.0)).unwrap().edge_distance, 0.0);
        assert_eq!(idx.len(), 2);
        assert_eq!(idx.get(1), Some(&Shape::rect(70.0, 40.0, 20.0, 20.0)));
        assert!(idx.get(2).is_none());
    }
}

// ── Geography ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod geography {
    use soc_core::Point;

    use super::helpers::default_geography;
    use crate::{Geography, GeographyBuilder, ResourceKind, SpatialError};

    #[test]
    fn resources_by_kind() {
        let geo = default_geography();
        assert_eq!(geo.size(), 100.0);
        assert_eq!(geo.resources(ResourceKind::Forest).len(), 2);
        assert_eq!(geo.resources(ResourceKind::Lake).len(), 2);
    }

    #[test]
    fn approach_point_for_lake() {
        let geo = default_geography();
        let p = geo.approach_point(ResourceKind::Lake, Point::new(45.0, 78.0)).unwrap();
        assert!((p.distance(Point::new(40.0, 80.0)) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn approach_point_missing_kind() {
        let geo = Geography::empty(50.0);
        assert!(geo.approach_point(ResourceKind::Lake, Point::ORIGIN).is_none());
    }

    #[test]
    fn negative_radius_rejected() {
        let mut b = GeographyBuilder::new(100.0);
        b.add_lake(0.0, 0.0, -1.0);
        assert!(matches!(b.build(), Err(SpatialError::InvalidGeometry(_))));
    }

    #[test]
    fn non_finite_forest_rejected() {
        let mut b = GeographyBuilder::new(100.0);
        b.add_forest(f64::NAN, 0.0, 1.0, 1.0);
        assert!(b.build().is_err());
    }

    #[test]
    fn zero_size_rejected() {
        assert!(GeographyBuilder::new(0.0).build().is_err());
    }

    #[test]
    fn kind_labels() {
        assert_eq!(ResourceKind::Forest.to_string(), "forest");
        assert_eq!(ResourceKind::Lake.as_str(), "lake");
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use crate::{load_geography_reader, Shape, SpatialError};

    const SCENARIO: &str = "\
kind,x,y,width,height,radius
forest,10,10,30,40,
lake,40,80,,,5
forest,70,40,20,20,
lake,60,30,,,10
";

    #[test]
    fn loads_both_kinds_in_order() {
        let geo = load_geography_reader(Cursor::new(SCENARIO), 100.0).unwrap();
        assert_eq!(geo.forests().shapes(), &[
            Shape::rect(10.0, 10.0, 30.0, 40.0),
            Shape::rect(70.0, 40.0, 20.0, 20.0),
        ]);
        assert_eq!(geo.lakes().shapes(), &[
            Shape::circle(40.0, 80.0, 5.0),
            Shape::circle(60.0, 30.0, 10.0),
        ]);
    }

    #[test]
    fn header_only_gives_empty_world() {
        let geo = load_geography_reader(Cursor::new("kind,x,y,width,height,radius\n"), 10.0).unwrap();
        assert!(geo.forests().is_empty());
        assert!(geo.lakes().is_empty());
    }

    #[test]
    fn lake_without_radius_rejected() {
        let csv = "kind,x,y,width,height,radius\nlake,1,2,,,\n";
        let err = load_geography_reader(Cursor::new(csv), 10.0).unwrap_err();
        assert!(matches!(err, SpatialError::Parse(ref m) if m.contains("radius")), "{err}");
    }

    #[test]
    fn unknown_kind_rejected() {
        let csv = "kind,x,y,width,height,radius\nvolcano,1,2,,,3\n";
        assert!(matches!(
            load_geography_reader(Cursor::new(csv), 10.0),
            Err(SpatialError::Parse(_))
        ));
    }

    #[test]
    fn malformed_number_rejected() {
        let csv = "kind,x,y,width,height,radius\nlake,abc,2,,,3\n";
        assert!(load_geography_reader(Cursor::new(csv), 10.0).is_err());
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use proptest::prelude::*;
    use soc_core::Point;

    use crate::{ResourceIndex, Shape};

    fn lake() -> impl Strategy<Value = Shape> {
        (-100.0..100.0f64, -100.0..100.0f64, 0.0..20.0f64)
            .prop_map(|(x, y, r)| Shape::circle(x, y, r))
    }

    fn forest() -> impl Strategy<Value = Shape> {
        (-100.0..100.0f64, -100.0..100.0f64, 0.0..30.0f64, 0.0..30.0f64)
            .prop_map(|(x, y, w, h)| Shape::rect(x, y, w, h))
    }

    proptest! {
        #[test]
        fn index_agrees_with_linear_scan(
            shapes in prop::collection::vec(prop_oneof![lake(), forest()], 1..24),
            px in -120.0..120.0f64,
            py in -120.0..120.0f64,
        ) {
            let p = Point::new(px, py);
            let expected = shapes
                .iter()
                .enumerate()
                .fold(None::<(usize, f64)>, |best, (i, s)| {
                    let d = s.edge_distance(p);
                    match best {
                        Some((_, bd)) if bd <= d => best,
                        _ => Some((i, d)),
                    }
                })
                .map(|(i, _)| i);

            let idx = ResourceIndex::new(shapes);
            prop_assert_eq!(idx.nearest(p).map(|n| n.index), expected);
        }

        #[test]
        fn edge_distance_never_negative(s in prop_oneof![lake(), forest()], px in -200.0..200.0f64, py in -200.0..200.0f64) {
            prop_assert!(s.edge_distance(Point::new(px, py)) >= 0.0);
        }
    }
}
