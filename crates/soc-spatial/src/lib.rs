//! `soc-spatial` — static resource geometry and nearest-resource queries.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`shape`]     | `Shape` (rectangle / circle), edge distance, boundary point |
//! | [`index`]     | `ResourceIndex` (R-tree), `Nearest`                        |
//! | [`geography`] | `Geography`, `GeographyBuilder`, `ResourceKind`            |
//! | [`loader`]    | `load_geography_csv`, `load_geography_reader`              |
//! | [`error`]     | `SpatialError`, `SpatialResult<T>`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod geography;
pub mod index;
pub mod loader;
pub mod shape;

#[cfg(test)]
mod tests;

pub use error::{SpatialError, SpatialResult};
pub use geography::{Geography, GeographyBuilder, ResourceKind};
pub use index::{Nearest, ResourceIndex};
pub use loader::{load_geography_csv, load_geography_reader};
pub use shape::Shape;
