//! The default two-human world: two forests and two lakes.

use soc_core::Point;
use soc_spatial::{Geography, GeographyBuilder, SpatialResult};

pub const HUMAN_STARTS: [Point; 2] = [Point { x: 30.0, y: 20.0 }, Point { x: 50.0, y: 40.0 }];

/// Zones are laid out for a side of 100; `size` only sets the bounds.
pub fn build_geography(size: f64) -> SpatialResult<Geography> {
    let mut b = GeographyBuilder::new(size);
    b.add_forest(10.0, 10.0, 30.0, 40.0)
        .add_forest(70.0, 40.0, 20.0, 20.0)
        .add_lake(40.0, 80.0, 5.0)
        .add_lake(60.0, 30.0, 10.0);
    b.build()
}
