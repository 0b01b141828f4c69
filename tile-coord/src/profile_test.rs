//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::bound::TileCoordinate;
use crate::coordinate::Coordinate;
use crate::error::TileError;
use crate::profile::{Extent, Projection, ProjectionProfile, Unit};
use crate::tile_index::CoordSpace;

#[test]
fn test_profile_constants() {
    for proj in &[
        Projection::Wgs1984,
        Projection::Cgcs2000,
        Projection::TianDiTu,
    ] {
        let profile = ProjectionProfile::new(*proj);
        assert_eq!(profile.tile_size, 256);
        assert_eq!((profile.ori_x, profile.ori_y), (-180.0, 90.0));
        assert_eq!(profile.start_level, 1);
        assert_eq!(profile.initial_resolution(), 0.703125);
        assert_eq!(profile.unit, Unit::Degrees);
    }
    for proj in &[Projection::WebMercator, Projection::ArcGis] {
        let profile = ProjectionProfile::new(*proj);
        assert_eq!(profile.tile_size, 256);
        assert_eq!(
            (profile.ori_x, profile.ori_y),
            (-20037508.342787, 20037508.342787)
        );
        assert_eq!(profile.start_level, 0);
        assert_eq!(profile.initial_resolution(), 156543.03392798);
        assert_eq!(profile.unit, Unit::Meters);
        assert!(profile.is_supported());
    }
    let baidu = ProjectionProfile::new(Projection::Baidu);
    assert_eq!((baidu.ori_x, baidu.ori_y), (0.0, 0.0));
    assert_eq!(baidu.initial_resolution(), 0.0);
    assert!(!baidu.is_supported());
}

#[test]
fn test_projection_names() {
    for proj in Projection::ALL.iter() {
        assert_eq!(proj.to_string().parse::<Projection>(), Ok(*proj));
    }
    assert_eq!(" Web_Mercator ".parse(), Ok(Projection::WebMercator));
    assert_eq!(
        "epsg:2056".parse::<Projection>(),
        Err(TileError::UnsupportedProjection("epsg:2056".to_string()))
    );
    assert_eq!(
        ProjectionProfile::from_name("ArcGIS"),
        Ok(ProjectionProfile::new(Projection::ArcGis))
    );
    assert!(ProjectionProfile::from_name("").is_err());

    assert_eq!(Projection::Wgs1984.srid(), Some(4326));
    assert_eq!(Projection::TianDiTu.srid(), Some(4490));
    assert_eq!(Projection::ArcGis.srid(), Some(3857));
    assert_eq!(Projection::Baidu.srid(), None);
}

#[test]
fn test_resolutions() {
    let profile = ProjectionProfile::web_mercator();
    assert_eq!(profile.resolution(0), Ok(156543.03392798));
    assert_eq!(profile.resolution(10), Ok(156543.03392798 / 1024.0));
    for level in 0..24 {
        assert_eq!(
            profile.resolution(level + 1).unwrap(),
            profile.resolution(level).unwrap() / 2.0
        );
    }

    let profile = ProjectionProfile::wgs1984();
    assert_eq!(profile.resolution(1), Ok(0.703125));
    assert_eq!(profile.resolution(2), Ok(0.3515625));
    for level in 1..24 {
        assert_eq!(
            profile.resolution(level + 1).unwrap(),
            profile.resolution(level).unwrap() / 2.0
        );
    }
    assert_eq!(
        profile.resolution(0),
        Err(TileError::LevelBelowStart {
            level: 0,
            start_level: 1
        })
    );
}

#[test]
fn test_unsupported_profile() {
    let profile = ProjectionProfile::new(Projection::Baidu);
    let err = Err(TileError::UnsupportedProfile(Projection::Baidu));
    assert_eq!(profile.resolution(5), err);
    assert_eq!(
        profile.index_at(&Coordinate::new(1000.0, 1000.0), 5),
        Err(TileError::UnsupportedProfile(Projection::Baidu))
    );
    assert_eq!(
        profile.index_at_geographic(&Coordinate::new(116.4, 39.9), 5),
        Err(TileError::UnsupportedProfile(Projection::Baidu))
    );
    assert!(profile
        .tile_bound_geographic(5, &[Coordinate::new(116.4, 39.9)])
        .is_err());
    assert_eq!(
        TileError::UnsupportedProfile(Projection::Baidu).to_string(),
        "Operation unsupported for projection baidu"
    );
}

#[test]
fn test_index_at_geographic() {
    let profile = ProjectionProfile::web_mercator();
    let tile = profile
        .index_at_geographic(&Coordinate::new(120.805664, 30.798474), 13)
        .unwrap();
    assert_eq!(tile, TileCoordinate::new(6844, 3358, 13));

    let tile = profile
        .index_at_geographic(&Coordinate::new(120.816650, 30.807911), 13)
        .unwrap();
    assert_eq!(tile, TileCoordinate::new(6845, 3358, 13));

    let tile = profile
        .index_at_geographic(&Coordinate::new(120.81098556518555, 30.803634881295125), 15)
        .unwrap();
    assert_eq!(tile, TileCoordinate::new(27380, 13434, 15));

    let tile = profile
        .index_at_geographic(&Coordinate::new(120.8657455444336, 30.759538817987497), 15)
        .unwrap();
    assert_eq!(tile, TileCoordinate::new(27385, 13439, 15));

    // New York City
    let tile = profile
        .index_at_geographic(&Coordinate::new(-74.0060, 40.7128), 16)
        .unwrap();
    assert_eq!(tile, TileCoordinate::new(19295, 24640, 16));

    let tile = profile
        .index_at_geographic(&Coordinate::new(0.0, 0.0), 0)
        .unwrap();
    assert_eq!(tile, TileCoordinate::new(0, 0, 0));
}

#[test]
fn test_index_at_native() {
    let profile = ProjectionProfile::web_mercator();
    let merc = Coordinate::new(120.805664, 30.798474).to_web_mercator();
    assert_eq!(
        profile.index_at(&merc, 13),
        Ok(TileCoordinate::new(6844, 3358, 13))
    );
    assert_eq!(
        profile.index_in(&merc, 13, CoordSpace::Native),
        profile.index_in(&Coordinate::new(120.805664, 30.798474), 13, CoordSpace::Wgs84)
    );

    let profile = ProjectionProfile::wgs1984();
    assert_eq!(
        profile.index_at(&Coordinate::new(120.805664, 30.798474), 13),
        Ok(TileCoordinate::new(6844, 1347, 13))
    );
    assert_eq!(
        profile.index_at(&Coordinate::new(0.0, 0.0), 1),
        Ok(TileCoordinate::new(1, 0, 1))
    );
    assert_eq!(
        profile.index_at(&Coordinate::new(179.9, -89.9), 1),
        Ok(TileCoordinate::new(1, 0, 1))
    );
}

#[test]
fn test_tile_borders() {
    let profile = ProjectionProfile::wgs1984();
    // tile span at level 3: 45 degrees
    assert_eq!(profile.tile_span(3), Ok(45.0));
    assert_eq!(
        profile.index_at(&Coordinate::new(-45.0, 45.0), 3),
        Ok(TileCoordinate::new(3, 1, 3))
    );
    assert_eq!(
        profile.index_at(&Coordinate::new(-45.000001, 45.000001), 3),
        Ok(TileCoordinate::new(2, 0, 3))
    );
    // west of the origin, truncated toward zero
    assert_eq!(
        profile.index_at(&Coordinate::new(-190.0, 10.0), 1),
        Ok(TileCoordinate::new(0, 0, 1))
    );
    assert_eq!(
        profile.index_at(&Coordinate::new(-180.0 - 45.0 * 1.5, 10.0), 3),
        Ok(TileCoordinate::new(-1, 1, 3))
    );
    let profile = ProjectionProfile::web_mercator();
    assert_eq!(
        profile.index_at_geographic(&Coordinate::new(-180.5, 10.0), 3),
        Ok(TileCoordinate::new(0, 3, 3))
    );
    // rows grow with distance from the top
    assert_eq!(
        profile.index_at(&Coordinate::new(0.0, 100.0), 3),
        Ok(TileCoordinate::new(4, 0, 3))
    );
}

#[test]
fn test_index_steps() {
    for profile in &[
        ProjectionProfile::web_mercator(),
        ProjectionProfile::wgs1984(),
    ] {
        let level = 7;
        let span = profile.tile_span(level).unwrap();
        let y = profile.ori_y - span * 3.5;
        let first = profile
            .index_at(&Coordinate::new(profile.ori_x + span * 0.5, y), level)
            .unwrap();
        for step in 1..40 {
            let x = profile.ori_x + span * (step as f64 + 0.5);
            let tile = profile.index_at(&Coordinate::new(x, y), level).unwrap();
            assert_eq!(tile.x, first.x + step);
            assert_eq!(tile.y, 3);
        }
    }
}

#[test]
fn test_tile_extent() {
    let profile = ProjectionProfile::wgs1984();
    assert_eq!(
        profile.tile_extent(&TileCoordinate::new(1, 0, 1)),
        Ok(Extent {
            minx: 0.0,
            miny: -90.0,
            maxx: 180.0,
            maxy: 90.0,
        })
    );
    assert_eq!(
        profile.tile_extent(&TileCoordinate::new(3, 1, 3)),
        Ok(Extent {
            minx: -45.0,
            miny: 0.0,
            maxx: 0.0,
            maxy: 45.0,
        })
    );

    let profile = ProjectionProfile::web_mercator();
    for tile in &[
        TileCoordinate::new(6844, 3358, 13),
        TileCoordinate::new(19295, 24640, 16),
        TileCoordinate::new(0, 0, 0),
    ] {
        let extent = profile.tile_extent(tile).unwrap();
        let centre = Coordinate::new(
            (extent.minx + extent.maxx) / 2.0,
            (extent.miny + extent.maxy) / 2.0,
        );
        assert_eq!(profile.index_at(&centre, tile.level), Ok(*tile));
    }
    assert!(ProjectionProfile::new(Projection::Baidu)
        .tile_extent(&TileCoordinate::new(0, 0, 0))
        .is_err());
}

#[test]
fn test_tile_bound_keeps_order() {
    let profile = ProjectionProfile::web_mercator();
    let coords: Vec<Coordinate> = (0..200)
        .map(|i| Coordinate::new(-170.0 + i as f64 * 1.7, 80.0 - i as f64 * 0.8))
        .collect();
    let bound = profile.tile_bound_geographic(9, &coords).unwrap();
    assert_eq!(bound.len(), coords.len());
    for (coord, tile) in coords.iter().zip(bound.iter()) {
        assert_eq!(profile.index_at_geographic(coord, 9).as_ref(), Ok(tile));
        assert_eq!(tile.level, 9);
    }

    let merc: Vec<Coordinate> = coords.iter().map(|c| c.to_web_mercator()).collect();
    assert_eq!(profile.tile_bound_native(9, &merc), Ok(bound));

    assert!(profile.tile_bound_native(9, &[]).unwrap().is_empty());
}

#[test]
fn test_coord_space_names() {
    assert_eq!("wgs84".parse(), Ok(CoordSpace::Wgs84));
    assert_eq!("Native".parse(), Ok(CoordSpace::Native));
    assert!("epsg:4326".parse::<CoordSpace>().is_err());
    assert_eq!(CoordSpace::Wgs84.to_string(), "wgs84");
}
