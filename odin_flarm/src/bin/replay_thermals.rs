/*
 * Copyright © 2025, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

use std::{path::PathBuf, time::Duration};
use anyhow::Result;
use clap::Parser;
use tracing::info;
use odin_common::datetime::parse_duration_spec;
use odin_flarm::{FlarmComputer, FlarmData, ThermalDetectorConfig, load_config, replay::read_ticks_from_file};

#[derive(Parser,Debug)]
#[command(about="replay a recorded FLARM traffic log through the traffic thermal detector")]
struct CliOpts {
    /// CSV traffic log (time,id,lat,lon,turn_rate,climb_rate[,name])
    input: PathBuf,

    /// RON detector config (defaults to built-in values)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// how long thermals stay displayed after circling stopped (e.g. "2min"). Overrides the configured
    /// max_recently_stopped_age, which also determines when they are dropped
    #[arg(long, value_parser=parse_max_age)]
    max_age: Option<Duration>,

    /// print published thermals as JSON objects instead of text lines
    #[arg(long)]
    json: bool,
}

fn parse_max_age (spec: &str)->std::result::Result<Duration,String> {
    parse_duration_spec( spec).ok_or_else( || format!("invalid duration '{spec}'"))
}

fn main ()->Result<()> {
    tracing_subscriber::fmt::init();
    let opts = CliOpts::parse();

    let mut config = match &opts.config {
        Some(path) => load_config( path)?,
        None => ThermalDetectorConfig::default()
    };
    if let Some(max_age) = opts.max_age {
        config = config.with_max_recently_stopped_age( max_age)?;
    }
    info!("replaying {:?} with {:?}", opts.input, config);

    let ticks = read_ticks_from_file( &opts.input)?;
    let mut computer = FlarmComputer::new( config);
    let mut last_flarm = FlarmData::default();

    for tick in ticks {
        let mut flarm = FlarmData { traffic: tick.traffic, ..FlarmData::default() };
        computer.process( &mut flarm, &last_flarm, tick.time);

        for info in flarm.detected_thermals.values() {
            if opts.json {
                println!("{}", serde_json::to_string( info)?);
            } else {
                println!("{} {}", tick.time, info);
            }
        }
        last_flarm = flarm;
    }

    info!("{} thermal states at end of replay", computer.thermal_detector().len());
    Ok(())
}
