//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::profile::Projection;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TileError {
    #[error("Unsupported projection '{0}'")]
    UnsupportedProjection(String),
    /// Profile without usable resolution constants
    #[error("Operation unsupported for projection {0}")]
    UnsupportedProfile(Projection),
    #[error("Level {level} is below start level {start_level}")]
    LevelBelowStart { level: u8, start_level: u8 },
    /// Fewer than two corners in a tile bound
    #[error("Tile bound needs two coordinates, got {0}")]
    DegenerateBound(usize),
}
