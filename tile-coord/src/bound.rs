//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Tile indices and tile ranges

use crate::error::TileError;
use log::warn;
use std::fmt;
use std::ops::Deref;

/// Tile index `(x, y)` at a zoom level. Row 0 is the top row.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug, Default)]
pub struct TileCoordinate {
    pub x: i64,
    pub y: i64,
    pub level: u8,
}

impl TileCoordinate {
    pub fn new(x: i64, y: i64, level: u8) -> TileCoordinate {
        TileCoordinate { x, y, level }
    }
}

impl fmt::Display for TileCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.level, self.x, self.y)
    }
}

/// Min and max tile indices of a bound
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct TileCoordinateScope {
    pub min_x: i64,
    pub max_x: i64,
    pub min_y: i64,
    pub max_y: i64,
    pub level: u8,
}

impl TileCoordinateScope {
    fn from_corners(a: &TileCoordinate, b: &TileCoordinate) -> TileCoordinateScope {
        TileCoordinateScope {
            min_x: a.x.min(b.x),
            max_x: a.x.max(b.x),
            min_y: a.y.min(b.y),
            max_y: a.y.max(b.y),
            level: a.level,
        }
    }
    /// Number of columns
    pub fn width(&self) -> u128 {
        (self.max_x as i128 - self.min_x as i128 + 1) as u128
    }
    /// Number of rows
    pub fn height(&self) -> u128 {
        (self.max_y as i128 - self.min_y as i128 + 1) as u128
    }
    /// Number of tiles, saturating at `u128::MAX`
    pub fn len(&self) -> u128 {
        self.width().saturating_mul(self.height())
    }
    pub fn contains(&self, tile: &TileCoordinate) -> bool {
        tile.level == self.level
            && (self.min_x..=self.max_x).contains(&tile.x)
            && (self.min_y..=self.max_y).contains(&tile.y)
    }
    /// All tiles of the scope, row by row
    pub fn cells(&self) -> ScopeIterator {
        ScopeIterator {
            scope: *self,
            x: self.min_x,
            y: self.min_y,
            finished: false,
        }
    }
}

impl fmt::Display for TileCoordinateScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "level {}: x {}..{}, y {}..{}",
            self.level, self.min_x, self.max_x, self.min_y, self.max_y
        )
    }
}

/// Row-major iterator over the tiles of a scope
pub struct ScopeIterator {
    scope: TileCoordinateScope,
    x: i64,
    y: i64,
    finished: bool,
}

impl Iterator for ScopeIterator {
    type Item = TileCoordinate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let current = TileCoordinate::new(self.x, self.y, self.scope.level);
        if self.x < self.scope.max_x {
            self.x += 1;
        } else if self.y < self.scope.max_y {
            self.y += 1;
            self.x = self.scope.min_x;
        } else {
            self.finished = true;
        }
        Some(current)
    }
}

/// Tile indices of a bounding box, usually its two diagonal corners
#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct TileCoordinateBound(Vec<TileCoordinate>);

impl TileCoordinateBound {
    pub fn new(corners: Vec<TileCoordinate>) -> TileCoordinateBound {
        TileCoordinateBound(corners)
    }
    pub fn into_inner(self) -> Vec<TileCoordinate> {
        self.0
    }
    /// Tile range spanned by the first two entries
    pub fn try_scope(&self) -> Result<TileCoordinateScope, TileError> {
        match self.0.as_slice() {
            [a, b, ..] => Ok(TileCoordinateScope::from_corners(a, b)),
            corners => Err(TileError::DegenerateBound(corners.len())),
        }
    }
    /// Tile range spanned by the first two entries.
    ///
    /// Returns an all-zero scope if the bound has less than two entries.
    pub fn scope(&self) -> TileCoordinateScope {
        self.try_scope().unwrap_or_else(|e| {
            warn!("{}", e);
            TileCoordinateScope::default()
        })
    }
    /// Call `visit(x, y, level)` for every tile of the scope, row by row.
    ///
    /// Returns false without calling `visit` if the bound has less than two entries.
    pub fn expand<F>(&self, mut visit: F) -> bool
    where
        F: FnMut(i64, i64, u8),
    {
        match self.try_scope() {
            Ok(scope) => {
                for tile in scope.cells() {
                    visit(tile.x, tile.y, tile.level);
                }
                true
            }
            Err(e) => {
                warn!("{}", e);
                false
            }
        }
    }
}

impl From<Vec<TileCoordinate>> for TileCoordinateBound {
    fn from(corners: Vec<TileCoordinate>) -> TileCoordinateBound {
        TileCoordinateBound(corners)
    }
}

impl Deref for TileCoordinateBound {
    type Target = [TileCoordinate];

    fn deref(&self) -> &[TileCoordinate] {
        &self.0
    }
}
