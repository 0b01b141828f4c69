//! A library for converting coordinates into map tile indices
//!
//! ## Tile of a coordinate
//!
//! ```rust
//! use tile_coord::{Coordinate, ProjectionProfile, TileCoordinate};
//!
//! let profile = ProjectionProfile::web_mercator();
//! let tile = profile
//!     .index_at_geographic(&Coordinate::new(120.805664, 30.798474), 13)
//!     .unwrap();
//! assert_eq!(tile, TileCoordinate::new(6844, 3358, 13));
//! ```
//!
//! ## Tiles of a bounding box
//!
//! ```rust
//! use tile_coord::{Coordinate, ProjectionProfile};
//!
//! let profile = ProjectionProfile::web_mercator();
//! let bound = profile
//!     .tile_bound_geographic(
//!         13,
//!         &[
//!             Coordinate::new(120.805664, 30.798474),
//!             Coordinate::new(120.816650, 30.807911),
//!         ],
//!     )
//!     .unwrap();
//! bound.expand(|x, y, level| {
//!     println!("Tile {}/{}/{}", level, x, y);
//! });
//! ```
//!
//! ## Named profiles
//!
//! ```rust
//! use tile_coord::{ProjectionProfile, TileError, Unit};
//!
//! let profile = ProjectionProfile::from_name("tianditu").unwrap();
//! assert_eq!(profile.unit, Unit::Degrees);
//! assert_eq!(profile.resolution(2), Ok(0.3515625));
//!
//! assert_eq!(
//!     ProjectionProfile::from_name("osgb"),
//!     Err(TileError::UnsupportedProjection("osgb".to_string()))
//! );
//! ```

mod bound;
mod coordinate;
mod error;
mod profile;
mod tile_index;

#[cfg(test)]
mod profile_test;

pub use bound::{ScopeIterator, TileCoordinate, TileCoordinateBound, TileCoordinateScope};
pub use coordinate::{
    lonlat_to_merc, merc_to_lonlat, Coordinate, MAX_MERCATOR_LAT, MERCATOR_HALF_EXTENT,
};
pub use error::TileError;
pub use profile::{Extent, Projection, ProjectionProfile, Unit};
pub use tile_index::CoordSpace;
