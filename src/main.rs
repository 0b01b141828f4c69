//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

mod config;

use crate::config::{parse_coordinates, read_config, ApplicationCfg, Config, QuerySettings};
use clap::{App, AppSettings, ArgMatches, SubCommand};
use dotenv::dotenv;
use env_logger::Builder;
use log::Record;
use std::env;
use std::io::Write;
use std::process;

fn init_logger(args: &ArgMatches<'_>) {
    let mut builder = Builder::new();
    builder.format(|buf, record: &Record<'_>| {
        let t = time::now();
        let timestamp = time::strftime("%Y-%m-%d %H:%M:%S", &t).unwrap_or_default();
        writeln!(
            buf,
            "{}.{:03} {} {}",
            timestamp,
            t.tm_nsec / 1000_000,
            record.level(),
            record.args()
        )
    });

    let rust_log = match (args.value_of("loglevel"), env::var("RUST_LOG")) {
        (None, Ok(rust_log_env)) => rust_log_env,
        (loglevel, _) => loglevel.unwrap_or("info").to_string(),
    };
    builder.parse_filters(&rust_log);

    builder.init();
}

fn settings_from_args(args: &ArgMatches<'_>) -> Result<QuerySettings, String> {
    let settings = match args.value_of("config") {
        Some(path) => {
            info!("Reading configuration from '{}'", path);
            let config: ApplicationCfg = read_config(path)?;
            QuerySettings::from_config(&config)?
        }
        None => QuerySettings::default(),
    };
    let settings = settings.with_overrides(
        args.value_of("projection"),
        args.value_of("srs"),
        args.value_of("level"),
    )?;
    debug!("{:?}", settings);
    Ok(settings)
}

fn tile(args: &ArgMatches<'_>) -> Result<(), String> {
    let settings = settings_from_args(args)?;
    let level = settings.level()?;
    let coords = parse_coordinates(args.value_of("point").ok_or("Missing 'point'")?)?;
    let coords = settings.input_coordinates(coords);
    if coords.len() != 1 {
        return Err(format!("Expected one point, got {}", coords.len()));
    }
    let tile = settings
        .profile
        .index_in(&coords[0], level, settings.input_space())
        .map_err(|e| e.to_string())?;
    println!("{}", tile);
    Ok(())
}

fn bound(args: &ArgMatches<'_>) -> Result<(), String> {
    let settings = settings_from_args(args)?;
    let level = settings.level()?;
    let coords = parse_coordinates(args.value_of("points").ok_or("Missing 'points'")?)?;
    let coords = settings.input_coordinates(coords);
    let list = args.value_of("list").map_or(Ok(false), |s| {
        s.parse::<bool>()
            .map_err(|_| "Error parsing 'list' as boolean value".to_string())
    })?;
    let bound = settings
        .profile
        .tile_bound(level, &coords, settings.input_space())
        .map_err(|e| e.to_string())?;
    let scope = bound.try_scope().map_err(|e| e.to_string())?;
    info!("{} tiles in {}", scope.len(), scope);
    println!("{}", scope);
    if list {
        bound.expand(|x, y, level| println!("{}/{}/{}", level, x, y));
    }
    Ok(())
}

fn main() {
    dotenv().ok();
    let mut app = App::new("coordtile")
        .version(crate_version!())
        .author("Pirmin Kalberer <pka@sourcepole.ch>")
        .about("map tile index calculator")
        .subcommand(SubCommand::with_name("tile")
                        .setting(AppSettings::AllowLeadingHyphen)
                        .args_from_usage("-c, --config=[FILE] 'Load from custom config file'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'
                                              --projection=[NAME] 'wgs1984, cgcs2000, web_mercator, tianditu, arcgis (Default: web_mercator)'
                                              --srs=[wgs84|native] 'Space of input coordinates (Default: wgs84)'
                                              --level=[LEVEL] 'Zoom level'
                                              --point=<x,y> 'Coordinate'")
                        .about("Tile index of a coordinate"))
        .subcommand(SubCommand::with_name("bound")
                        .setting(AppSettings::AllowLeadingHyphen)
                        .args_from_usage("-c, --config=[FILE] 'Load from custom config file'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'
                                              --projection=[NAME] 'wgs1984, cgcs2000, web_mercator, tianditu, arcgis (Default: web_mercator)'
                                              --srs=[wgs84|native] 'Space of input coordinates (Default: wgs84)'
                                              --level=[LEVEL] 'Zoom level'
                                              --points=<x1,y1,x2,y2> 'Diagonal corners of bounding box'
                                              --list=[false|true] 'List all covered tiles'")
                        .about("Tile range of a bounding box"))
        .subcommand(SubCommand::with_name("genconfig")
                        .args_from_usage("--loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'")
                        .about("Generate configuration template"));

    let result = match app.get_matches_from_safe_borrow(env::args()) {
        //app.get_matches() prohibits later call of app.print_help()
        Result::Err(e) => {
            println!("{}", e);
            Ok(())
        }
        Result::Ok(matches) => match matches.subcommand() {
            ("tile", Some(sub_m)) => {
                init_logger(sub_m);
                tile(sub_m)
            }
            ("bound", Some(sub_m)) => {
                init_logger(sub_m);
                bound(sub_m)
            }
            ("genconfig", Some(sub_m)) => {
                init_logger(sub_m);
                println!("{}", QuerySettings::gen_config());
                Ok(())
            }
            _ => {
                let _ = app.print_help();
                println!("");
                Ok(())
            }
        },
    };
    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}
