//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Coordinate to tile index calculations

use crate::bound::{TileCoordinate, TileCoordinateBound};
use crate::coordinate::Coordinate;
use crate::error::TileError;
use crate::profile::ProjectionProfile;
use log::debug;
use rayon::prelude::*;
use std::fmt;
use std::str::FromStr;

/// Space of input coordinates
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum CoordSpace {
    /// Native projected space of the profile
    Native,
    /// WGS84 longitude/latitude, projected to Web Mercator before indexing
    Wgs84,
}

impl fmt::Display for CoordSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordSpace::Native => f.write_str("native"),
            CoordSpace::Wgs84 => f.write_str("wgs84"),
        }
    }
}

impl FromStr for CoordSpace {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match &s.trim().to_lowercase() as &str {
            "native" => Ok(CoordSpace::Native),
            "wgs84" => Ok(CoordSpace::Wgs84),
            _ => Err(format!("Unexpected coordinate space '{}'", s)),
        }
    }
}

impl ProjectionProfile {
    /// Tile containing `coord`, given in the native space of the profile.
    ///
    /// Rows are counted downwards from `ori_y`. Indices are truncated toward
    /// zero: a coordinate on a tile border belongs to the tile right of / below
    /// it, and coordinates less than a tile west of the origin fall into column 0.
    pub fn index_at(&self, coord: &Coordinate, level: u8) -> Result<TileCoordinate, TileError> {
        let res = self.resolution(level)?;
        let size = self.tile_size as f64;
        Ok(TileCoordinate {
            x: ((coord.x - self.ori_x) / res / size).trunc() as i64,
            y: ((self.ori_y - coord.y).abs() / res / size).trunc() as i64,
            level,
        })
    }
    /// Tile containing the WGS84 coordinate `coord` in Web Mercator space
    pub fn index_at_geographic(
        &self,
        coord: &Coordinate,
        level: u8,
    ) -> Result<TileCoordinate, TileError> {
        self.index_at(&coord.to_web_mercator(), level)
    }
    pub fn index_in(
        &self,
        coord: &Coordinate,
        level: u8,
        space: CoordSpace,
    ) -> Result<TileCoordinate, TileError> {
        match space {
            CoordSpace::Native => self.index_at(coord, level),
            CoordSpace::Wgs84 => self.index_at_geographic(coord, level),
        }
    }
    /// Tile indices of all `coords` at `level`.
    ///
    /// Coordinates are indexed in parallel. The result keeps the input order.
    pub fn tile_bound(
        &self,
        level: u8,
        coords: &[Coordinate],
        space: CoordSpace,
    ) -> Result<TileCoordinateBound, TileError> {
        debug!(
            "{}: indexing {} {} coordinates at level {}",
            self.projection,
            coords.len(),
            space,
            level
        );
        let tiles = coords
            .par_iter()
            .map(|coord| self.index_in(coord, level, space))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(TileCoordinateBound::from(tiles))
    }
    pub fn tile_bound_native(
        &self,
        level: u8,
        coords: &[Coordinate],
    ) -> Result<TileCoordinateBound, TileError> {
        self.tile_bound(level, coords, CoordSpace::Native)
    }
    pub fn tile_bound_geographic(
        &self,
        level: u8,
        coords: &[Coordinate],
    ) -> Result<TileCoordinateBound, TileError> {
        self.tile_bound(level, coords, CoordSpace::Wgs84)
    }
}
