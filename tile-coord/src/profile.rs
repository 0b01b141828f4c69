//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Projection profiles

use crate::bound::TileCoordinate;
use crate::error::TileError;
use std::fmt;
use std::str::FromStr;

/// Tile projection
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum Projection {
    /// EPSG:4326
    Wgs1984,
    /// EPSG:4490
    Cgcs2000,
    /// EPSG:3857
    WebMercator,
    /// EPSG:4490
    TianDiTu,
    /// EPSG:3857
    ArcGis,
    /// Clarke 1866 / NAD27 Mercator. No tile constants available.
    Baidu,
}

impl Projection {
    pub const ALL: [Projection; 6] = [
        Projection::Wgs1984,
        Projection::Cgcs2000,
        Projection::WebMercator,
        Projection::TianDiTu,
        Projection::ArcGis,
        Projection::Baidu,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Projection::Wgs1984 => "wgs1984",
            Projection::Cgcs2000 => "cgcs2000",
            Projection::WebMercator => "web_mercator",
            Projection::TianDiTu => "tianditu",
            Projection::ArcGis => "arcgis",
            Projection::Baidu => "baidu",
        }
    }

    /// EPSG code of the projection, if any
    pub fn srid(&self) -> Option<i32> {
        match self {
            Projection::Wgs1984 => Some(4326),
            Projection::Cgcs2000 | Projection::TianDiTu => Some(4490),
            Projection::WebMercator | Projection::ArcGis => Some(3857),
            Projection::Baidu => None,
        }
    }
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Projection {
    type Err = TileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        Projection::ALL
            .iter()
            .find(|proj| proj.name() == name)
            .copied()
            .ok_or_else(|| TileError::UnsupportedProjection(s.to_string()))
    }
}

/// Resolution units
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Unit {
    Meters,
    Degrees,
}

/// Ground extent
#[derive(PartialEq, Clone, Debug)]
pub struct Extent {
    pub minx: f64,
    pub miny: f64,
    pub maxx: f64,
    pub maxy: f64,
}

/// Tile pyramid parameters of a projection
#[derive(PartialEq, Clone, Debug)]
pub struct ProjectionProfile {
    pub projection: Projection,
    /// Width and height of a tile in pixels. Only 256x256 tiles are supported.
    pub tile_size: u16,
    /// Origin of the pyramid, in degrees or meters.
    /// `ori_y` is the top of the tiled space, tile row 0 starts there.
    pub ori_x: f64,
    pub ori_y: f64,
    /// Level of `initial_resolution`
    pub start_level: u8,
    /// Ground distance of one pixel at `start_level`, in `unit` per pixel.
    initial_resolution: f64,
    pub unit: Unit,
}

impl ProjectionProfile {
    pub fn new(projection: Projection) -> ProjectionProfile {
        let (ori_x, ori_y, start_level, initial_resolution, unit) = match projection {
            Projection::Wgs1984 | Projection::Cgcs2000 | Projection::TianDiTu => {
                (-180.0, 90.0, 1, 0.703125, Unit::Degrees)
            }
            Projection::WebMercator | Projection::ArcGis => (
                -20037508.342787,
                20037508.342787,
                0,
                156543.03392798,
                Unit::Meters,
            ),
            Projection::Baidu => (0.0, 0.0, 0, 0.0, Unit::Meters),
        };
        ProjectionProfile {
            projection,
            tile_size: 256,
            ori_x,
            ori_y,
            start_level,
            initial_resolution,
            unit,
        }
    }
    /// Profile from a projection identifier like `web_mercator`
    pub fn from_name(name: &str) -> Result<ProjectionProfile, TileError> {
        name.parse().map(ProjectionProfile::new)
    }
    pub fn wgs1984() -> ProjectionProfile {
        ProjectionProfile::new(Projection::Wgs1984)
    }
    pub fn web_mercator() -> ProjectionProfile {
        ProjectionProfile::new(Projection::WebMercator)
    }
    /// Whether the profile has resolution constants for tile calculations
    pub fn is_supported(&self) -> bool {
        self.initial_resolution > 0.0
    }
    pub fn initial_resolution(&self) -> f64 {
        self.initial_resolution
    }
    /// Ground distance of one pixel at `level`
    pub fn resolution(&self, level: u8) -> Result<f64, TileError> {
        if !self.is_supported() {
            return Err(TileError::UnsupportedProfile(self.projection));
        }
        if level < self.start_level {
            return Err(TileError::LevelBelowStart {
                level,
                start_level: self.start_level,
            });
        }
        let halvings = (level - self.start_level) as i32;
        Ok(self.initial_resolution / 2f64.powi(halvings))
    }
    /// Ground size of a tile at `level`
    pub fn tile_span(&self, level: u8) -> Result<f64, TileError> {
        Ok(self.resolution(level)? * self.tile_size as f64)
    }
    /// Extent of a given tile, counted from the top left origin
    pub fn tile_extent(&self, tile: &TileCoordinate) -> Result<Extent, TileError> {
        let span = self.tile_span(tile.level)?;
        Ok(Extent {
            minx: self.ori_x + span * tile.x as f64,
            miny: self.ori_y - span * (tile.y + 1) as f64,
            maxx: self.ori_x + span * (tile.x + 1) as f64,
            maxy: self.ori_y - span * tile.y as f64,
        })
    }
}
