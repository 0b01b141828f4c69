//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Coordinates and projection conversions

use std::f64::consts;

/// Half of the Web Mercator world extent used by the coordinate conversions.
///
/// Note that the Web Mercator profile origin uses the more precise
/// `20037508.342787`. Both values are kept where they are used.
pub const MERCATOR_HALF_EXTENT: f64 = 20037508.34;

/// Latitude limit of the square Web Mercator world
pub const MAX_MERCATOR_LAT: f64 = 85.05112878;

/// Geographic (degrees) or projected (meters) point
#[derive(PartialEq, Clone, Copy, Debug, Default)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
    /// Zoom level, only meaningful in tile operations
    pub level: u8,
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Coordinate {
        Coordinate { x, y, level: 0 }
    }
    pub fn with_level(x: f64, y: f64, level: u8) -> Coordinate {
        Coordinate { x, y, level }
    }
    /// WGS84 (lon, lat) to Web Mercator meters.
    ///
    /// Latitude is not clamped: values at the poles produce non-finite results.
    pub fn to_web_mercator(&self) -> Coordinate {
        let (x, y) = lonlat_to_merc(self.x, self.y);
        Coordinate {
            x,
            y,
            level: self.level,
        }
    }
    /// Web Mercator meters to WGS84 (lon, lat)
    pub fn to_wgs84(&self) -> Coordinate {
        let (x, y) = merc_to_lonlat(self.x, self.y);
        Coordinate {
            x,
            y,
            level: self.level,
        }
    }
    /// Copy with latitude limited to the Web Mercator range
    pub fn clamp_mercator_lat(&self) -> Coordinate {
        Coordinate {
            y: self.y.max(-MAX_MERCATOR_LAT).min(MAX_MERCATOR_LAT),
            ..*self
        }
    }
}

/// Returns the Spherical Mercator (x, y) in meters
pub fn lonlat_to_merc(lon: f64, lat: f64) -> (f64, f64) {
    let x = lon * MERCATOR_HALF_EXTENT / 180.0;
    let y = ((90.0 + lat) * consts::PI / 360.0).tan().ln() / (consts::PI / 180.0);
    (x, y * MERCATOR_HALF_EXTENT / 180.0)
}

/// Returns (lon, lat) in degrees of a Spherical Mercator position
pub fn merc_to_lonlat(x: f64, y: f64) -> (f64, f64) {
    let lon = x / MERCATOR_HALF_EXTENT * 180.0;
    let lat = y / MERCATOR_HALF_EXTENT * 180.0;
    let lat = 180.0 / consts::PI * (2.0 * (lat * consts::PI / 180.0).exp().atan() - consts::PI / 2.0);
    (lon, lat)
}
