//! CSV geography loader.
//!
//! # CSV format
//!
//! One row per resource zone.  Forests use `width`/`height`, lakes use
//! `radius`; the unused columns are left empty.
//!
//! ```csv
//! kind,x,y,width,height,radius
//! forest,10,10,30,40,
//! forest,70,40,20,20,
//! lake,40,80,,,5
//! lake,60,30,,,10
//! ```
//!
//! Row order is preserved within each kind, which fixes the tie-breaking
//! order of nearest-resource queries.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::{Geography, GeographyBuilder, SpatialError, SpatialResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ResourceRecord {
    kind:   String,
    x:      f64,
    y:      f64,
    width:  Option<f64>,
    height: Option<f64>,
    radius: Option<f64>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a world of side `size` from a resource CSV file.
pub fn load_geography_csv(path: &Path, size: f64) -> SpatialResult<Geography> {
    let file = std::fs::File::open(path)?;
    load_geography_reader(file, size)
}

/// Like [`load_geography_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded scenarios.
pub fn load_geography_reader<R: Read>(reader: R, size: f64) -> SpatialResult<Geography> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut builder = GeographyBuilder::new(size);

    for (row_no, result) in csv_reader.deserialize::<ResourceRecord>().enumerate() {
        let row = result.map_err(|e| SpatialError::Parse(e.to_string()))?;
        match row.kind.trim() {
            "forest" => {
                let (Some(w), Some(h)) = (row.width, row.height) else {
                    return Err(SpatialError::Parse(format!(
                        "row {row_no}: forest requires width and height"
                    )));
                };
                builder.add_forest(row.x, row.y, w, h);
            }
            "lake" => {
                let Some(r) = row.radius else {
                    return Err(SpatialError::Parse(format!(
                        "row {row_no}: lake requires radius"
                    )));
                };
                builder.add_lake(row.x, row.y, r);
            }
            other => {
                return Err(SpatialError::Parse(format!(
                    "row {row_no}: unknown resource kind {other:?}: expected \"forest\" or \"lake\""
                )));
            }
        }
    }

    builder.build()
}
