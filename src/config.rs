//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::error::Error;
use std::fs;
use std::io;
use tera::{Context, Tera};
use tile_coord::{Coordinate, CoordSpace, ProjectionProfile, Unit};
use toml::Value;

pub trait Config<'a, C: Deserialize<'a>>
where
    Self: std::marker::Sized,
{
    /// Read configuration
    fn from_config(config: &C) -> Result<Self, String>;
    /// Generate configuration template
    fn gen_config() -> String;
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationCfg {
    pub profile: ProfileCfg,
    #[serde(default)]
    pub query: QueryCfg,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ProfileCfg {
    /// wgs1984, cgcs2000, web_mercator, tianditu, arcgis or baidu
    pub projection: String,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct QueryCfg {
    /// Default zoom level
    pub level: Option<u8>,
    /// Space of input coordinates (wgs84 or native)
    pub srs: Option<String>,
}

impl<'a> Config<'a, ProfileCfg> for ProjectionProfile {
    fn from_config(profile_cfg: &ProfileCfg) -> Result<Self, String> {
        ProjectionProfile::from_name(&profile_cfg.projection).map_err(|e| e.to_string())
    }
    fn gen_config() -> String {
        let toml = r#"
[profile]
# wgs1984, cgcs2000, web_mercator, tianditu, arcgis
projection = "web_mercator"
"#;
        toml.to_string()
    }
}

/// Settings of a tile query
#[derive(Clone, Debug, PartialEq)]
pub struct QuerySettings {
    pub profile: ProjectionProfile,
    /// Requested input space, see `input_space`
    pub srs: CoordSpace,
    pub level: Option<u8>,
}

impl Default for QuerySettings {
    fn default() -> Self {
        QuerySettings {
            profile: ProjectionProfile::web_mercator(),
            srs: CoordSpace::Wgs84,
            level: None,
        }
    }
}

impl<'a> Config<'a, ApplicationCfg> for QuerySettings {
    fn from_config(config: &ApplicationCfg) -> Result<Self, String> {
        let profile = ProjectionProfile::from_config(&config.profile)?;
        let srs = match config.query.srs {
            Some(ref srs) => srs.parse()?,
            None => CoordSpace::Wgs84,
        };
        Ok(QuerySettings {
            profile,
            srs,
            level: config.query.level,
        })
    }
    fn gen_config() -> String {
        let toml = r#"
[query]
# Input coordinates: wgs84 (lon/lat) or native (profile units)
srs = "wgs84"
#level = 13
"#;
        format!("{}{}", ProjectionProfile::gen_config(), toml)
    }
}

impl QuerySettings {
    /// Apply command line values
    pub fn with_overrides(
        self,
        projection: Option<&str>,
        srs: Option<&str>,
        level: Option<&str>,
    ) -> Result<Self, String> {
        let profile = match projection {
            Some(name) => ProjectionProfile::from_name(name).map_err(|e| e.to_string())?,
            None => self.profile,
        };
        let srs = match srs {
            Some(srs) => srs.parse()?,
            None => self.srs,
        };
        let level = match level {
            Some(level) => Some(
                level
                    .parse::<u8>()
                    .map_err(|_| format!("Error parsing 'level' as integer value: '{}'", level))?,
            ),
            None => self.level,
        };
        Ok(QuerySettings {
            profile,
            srs,
            level,
        })
    }
    /// Space the input coordinates are indexed in.
    ///
    /// lon/lat is the native space of degree profiles and is not projected.
    pub fn input_space(&self) -> CoordSpace {
        match (self.srs, self.profile.unit) {
            (CoordSpace::Wgs84, Unit::Degrees) => CoordSpace::Native,
            (srs, _) => srs,
        }
    }
    /// Input coordinates ready for indexing.
    ///
    /// Latitudes of projected lon/lat input are limited to the Web Mercator range.
    pub fn input_coordinates(&self, coords: Vec<Coordinate>) -> Vec<Coordinate> {
        if self.input_space() != CoordSpace::Wgs84 {
            return coords;
        }
        coords
            .into_iter()
            .map(|coord| {
                let clamped = coord.clamp_mercator_lat();
                if clamped != coord {
                    warn!(
                        "Latitude {} outside of Web Mercator range, using {}",
                        coord.y, clamped.y
                    );
                }
                clamped
            })
            .collect()
    }
    pub fn level(&self) -> Result<u8, String> {
        self.level
            .ok_or_else(|| "Missing zoom level (--level or [query] level)".to_string())
    }
}

/// Parse a list `x1,y1,x2,y2,..` into coordinates
pub fn parse_coordinates(numlist: &str) -> Result<Vec<Coordinate>, String> {
    let values = numlist
        .split(',')
        .map(|v| {
            v.trim()
                .parse::<f64>()
                .map_err(|_| format!("Error parsing '{}' as float value", v))
        })
        .collect::<Result<Vec<f64>, String>>()?;
    if values.len() % 2 != 0 {
        return Err(format!(
            "Expected pairs of coordinates, got {} values",
            values.len()
        ));
    }
    Ok(values
        .chunks(2)
        .map(|xy| Coordinate::new(xy[0], xy[1]))
        .collect())
}

/// Load and parse the config file into an config struct.
pub fn read_config<'a, T: Deserialize<'a>>(path: &str) -> Result<T, String> {
    let config_toml = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => format!("Could not find config file '{}'!", path),
        _ => format!("Error while reading config '{}': {}", path, err),
    })?;
    parse_config(config_toml, path)
}

/// Substitute `{{env.VARNAME}}` expressions with environment variables
fn render_env_template(template: &str, path: &str) -> Result<String, String> {
    let legacy_var = Regex::new(r"\$\{[[:alnum:]_]+\}").map_err(|e| e.to_string())?;
    if legacy_var.is_match(template) {
        return Err(
            "Replace old environment variable syntax ${VARNAME} with `{{env.VARNAME}}`".to_string(),
        );
    }
    let env_vars: HashMap<String, String> = env::vars().collect();
    let mut context = Context::new();
    context.insert("env", &env_vars);
    Tera::one_off(template, &context, false).map_err(|e| {
        let cause = e.source().map_or_else(|| e.to_string(), |c| c.to_string());
        format!("{} - Template error: {}", path, cause)
    })
}

/// Parse the configuration into an config struct.
pub fn parse_config<'a, T: Deserialize<'a>>(config_toml: String, path: &str) -> Result<T, String> {
    render_env_template(&config_toml, path)?
        .parse::<Value>()
        .and_then(|cfg| cfg.try_into::<T>())
        .map_err(|err| format!("{} - {}", path, err))
}
