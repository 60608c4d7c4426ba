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

use std::{fs, path::Path, time::Duration};
use serde::{Serialize,Deserialize};
use uom::si::{f64::Length, length::meter};
use odin_common::{datetime::{deserialize_duration, serialize_duration}, uom::{meters, ser_length_as_meters, de_length_from_meters}};

use crate::errors::{Result, OdinFlarmError, config_error};

/// minimum absolute turn rate for a target to be considered circling
pub const MIN_TURN_RATE_DEG_S: f64 = 15.0;

/// maximum diagonal of the bounding box over the recent position history
pub const MAX_DIAMETER_M: f64 = 1000.0;

/// probation period a target has to keep circling before we confirm a thermal
pub const MIN_CIRCLING_DURATION: Duration = Duration::from_secs(45);

/// how long a thermal of a target that stopped circling stays displayable (and in the table)
pub const MAX_RECENTLY_STOPPED_AGE: Duration = Duration::from_secs(10 * 60);

/// capacity of the sliding position window used for the area check
pub const POSITION_HISTORY_SIZE: usize = 10;

/// tunables of the traffic thermal detector. The `Default` impl uses the constants above, file based configs
/// are RON (see `configs/thermal_detector.ron`) with humanized durations:
/// ```ron
/// ThermalDetectorConfig(
///     min_turn_rate: 15.0,
///     max_diameter: 1000.0,
///     min_circling_duration: "45s",
///     max_recently_stopped_age: "10min",
///     position_history_size: 10,
/// )
/// ```
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct ThermalDetectorConfig {
    pub min_turn_rate: f64, // deg/sec

    #[serde(serialize_with="ser_length_as_meters", deserialize_with="de_length_from_meters")]
    pub max_diameter: Length,

    #[serde(serialize_with="serialize_duration", deserialize_with="deserialize_duration")]
    pub min_circling_duration: Duration,

    #[serde(serialize_with="serialize_duration", deserialize_with="deserialize_duration")]
    pub max_recently_stopped_age: Duration,

    pub position_history_size: usize,
}

impl Default for ThermalDetectorConfig {
    fn default ()->Self {
        ThermalDetectorConfig {
            min_turn_rate: MIN_TURN_RATE_DEG_S,
            max_diameter: meters( MAX_DIAMETER_M),
            min_circling_duration: MIN_CIRCLING_DURATION,
            max_recently_stopped_age: MAX_RECENTLY_STOPPED_AGE,
            position_history_size: POSITION_HISTORY_SIZE,
        }
    }
}

impl ThermalDetectorConfig {
    /// safety net age after which entries of any state get evicted
    pub fn max_entry_age (&self)->Duration {
        self.max_recently_stopped_age.saturating_mul(2)
    }

    /// the same config with a different display/eviction window for recently stopped thermals
    pub fn with_max_recently_stopped_age (self, max_age: Duration)->Result<Self> {
        let config = ThermalDetectorConfig { max_recently_stopped_age: max_age, ..self };
        config.validate()?;
        Ok(config)
    }

    pub fn validate (&self)->Result<()> {
        if !(self.min_turn_rate.is_finite() && self.min_turn_rate >= 0.0) {
            return Err( config_error!("min_turn_rate has to be a non-negative number: {}", self.min_turn_rate))
        }
        let d = self.max_diameter.get::<meter>();
        if !(d.is_finite() && d > 0.0) {
            return Err( config_error!("max_diameter has to be positive: {}", d))
        }
        if self.position_history_size < 2 {
            return Err( config_error!("position_history_size needs at least 2 points for an area check: {}", self.position_history_size))
        }
        if self.max_recently_stopped_age.is_zero() {
            return Err( config_error!("max_recently_stopped_age can't be zero"))
        }
        Ok(())
    }

    pub fn from_ron_str (s: &str)->Result<Self> {
        let config: ThermalDetectorConfig = ron::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_ron_string (&self)->Result<String> {
        ron::ser::to_string_pretty( self, ron::ser::PrettyConfig::new().struct_names(true))
            .map_err( |e| config_error!("failed to serialize config: {}", e))
    }
}

/// load and validate a detector config from a RON file
pub fn load_config<P: AsRef<Path>> (path: P)->Result<ThermalDetectorConfig> {
    let s = fs::read_to_string( path.as_ref())?;
    ThermalDetectorConfig::from_ron_str( &s)
}
