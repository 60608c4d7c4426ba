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
#![allow(unused)]

//! reading recorded FLARM traffic logs so that they can be fed tick by tick into a `FlarmComputer`.
//!
//! The CSV format has a header line and one record per received report:
//! ```text
//! time,id,lat,lon,turn_rate,climb_rate,name
//! 1720000000000,DD8F12,47.2501,8.5002,18.5,1.8,D-KXYZ
//! 1720000000000,3E1234,47.3001,8.6002,,,
//! ```
//! `time` is in epoch millis, `turn_rate` in deg/sec, `climb_rate` in m/s. Empty fields mean the value
//! was not available in this report, `name` is optional. Consecutive records with the same time form a tick

use std::{fs::File, io::Read, path::Path};
use serde::Deserialize;
use odin_common::{datetime::EpochMillis, geo::GeoPoint, uom::meters_per_second};

use crate::{errors::{Result, OdinFlarmError, parse_error}, traffic::{FlarmId, FlarmTraffic, TrafficList}};

#[derive(Deserialize,Debug)]
struct TrafficRecord {
    time: i64,
    id: String,
    lat: Option<f64>,
    lon: Option<f64>,
    turn_rate: Option<f64>,
    climb_rate: Option<f64>,
    #[serde(default)]
    name: Option<String>,
}

impl TrafficRecord {
    fn into_traffic (self)->Result<(EpochMillis,FlarmTraffic)> {
        let id: FlarmId = self.id.parse()?;
        let mut traffic = FlarmTraffic::new( id);

        traffic.location = match (self.lon, self.lat) {
            (Some(lon), Some(lat)) => {
                if !(lat.is_finite() && lat.abs() <= 90.0 && lon.is_finite() && lon.abs() <= 180.0) {
                    return Err( parse_error!("invalid position for {} at {}: lat={} lon={}", id, self.time, lat, lon))
                }
                Some( GeoPoint::from_lon_lat_degrees( lon, lat))
            }
            (None, None) => None,
            _ => return Err( parse_error!("incomplete position for {} at {}", id, self.time))
        };
        if self.turn_rate.is_some_and( |v| !v.is_finite()) || self.climb_rate.is_some_and( |v| !v.is_finite()) {
            return Err( parse_error!("non-finite rate for {} at {}", id, self.time))
        }
        traffic.turn_rate = self.turn_rate;
        traffic.climb_rate_avg30s = self.climb_rate.map( meters_per_second);
        traffic.name = self.name.filter( |s| !s.is_empty());

        Ok( (EpochMillis::new( self.time), traffic) )
    }
}

/// the reports received at the same time
#[derive(Debug,Clone)]
pub struct ReplayTick {
    pub time: EpochMillis,
    pub traffic: TrafficList,
}

/// read all ticks from a CSV source. Ticks have to be in non-decreasing time order
pub fn read_ticks<R: Read> (input: R)->Result<Vec<ReplayTick>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim( csv::Trim::All)
        .flexible( true)
        .comment( Some(b'#'))
        .from_reader( input);

    let mut ticks: Vec<ReplayTick> = Vec::new();
    for rec in reader.deserialize::<TrafficRecord>() {
        let (time, traffic) = rec?.into_traffic()?;

        match ticks.last_mut() {
            Some(tick) if tick.time == time => tick.traffic.insert( traffic),
            Some(tick) if tick.time > time => {
                return Err( parse_error!("out of order record for {} at {} (last tick {})", traffic.id, time.millis(), tick.time.millis()))
            }
            _ => {
                let mut list = TrafficList::new();
                list.insert( traffic);
                ticks.push( ReplayTick { time, traffic: list });
            }
        }
    }

    Ok(ticks)
}

pub fn read_ticks_from_file<P: AsRef<Path>> (path: P)->Result<Vec<ReplayTick>> {
    let file = File::open( path.as_ref())?;
    read_ticks( file)
}
