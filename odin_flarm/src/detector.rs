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

use std::collections::HashMap;
use tracing::{debug,trace};
use odin_common::datetime::EpochMillis;

use crate::{
    circling::update_circling_state, config::ThermalDetectorConfig, table::ThermalStateTable,
    thermal::{CirclingState, TrafficThermalInfo}, traffic::{FlarmId, FlarmTraffic}
};

/// detects and tracks circling (thermaling) of FLARM traffic targets.
///
/// This is session scoped state that is driven by a single processing loop: per tick first `update(..)` for each
/// received target, then one `cleanup(..)`. Nothing in here blocks, sleeps or reads the clock.
/// Note that `update` is not idempotent - calling it twice for the same target within one tick counts its
/// climb sample twice. Making sure each id is reported once per tick is up to the caller (see `TrafficList`)
#[derive(Debug)]
pub struct TrafficThermalDetector {
    config: ThermalDetectorConfig,
    thermal_states: ThermalStateTable,
}

impl Default for TrafficThermalDetector {
    fn default ()->Self { TrafficThermalDetector::new( ThermalDetectorConfig::default()) }
}

impl TrafficThermalDetector {
    pub fn new (config: ThermalDetectorConfig)->Self {
        let thermal_states = ThermalStateTable::new( config.position_history_size);
        TrafficThermalDetector { config, thermal_states }
    }

    pub fn config (&self)->&ThermalDetectorConfig { &self.config }

    /// process the current report of a target. `last_traffic` is the report of the same target from the previous
    /// tick (if it was received) and does not affect detection
    pub fn update (&mut self, traffic: &FlarmTraffic, last_traffic: Option<&FlarmTraffic>, now: EpochMillis)->CirclingState {
        if last_traffic.is_none() {
            trace!("new traffic report for {}", traffic.id);
        }

        let info = self.thermal_states.upsert( traffic.id);
        info.id = traffic.id;
        update_circling_state( info, traffic, now, &self.config)
    }

    /// evict idle and expired entries, returning the number of removed ones
    pub fn cleanup (&mut self, now: EpochMillis)->usize {
        let n_removed = self.thermal_states.sweep( now, self.config.max_recently_stopped_age);
        if n_removed > 0 {
            debug!("removed {} thermal states, {} remaining", n_removed, self.thermal_states.len());
        }
        n_removed
    }

    /// all current entries. Callers filter with `TrafficThermalInfo::is_relevant_for_display(..)`. The
    /// reference is only valid until the next update/cleanup - copy what needs to be kept
    pub fn displayable_thermals (&self)->&HashMap<FlarmId,TrafficThermalInfo> {
        self.thermal_states.as_map()
    }

    /// the entries that should be rendered at `now`, using the configured recently-stopped age
    pub fn relevant_thermals (&self, now: EpochMillis)->impl Iterator<Item=&TrafficThermalInfo> {
        let max_age = self.config.max_recently_stopped_age;
        self.thermal_states.values().filter( move |info| info.is_relevant_for_display( now, max_age))
    }

    pub fn get (&self, id: FlarmId)->Option<&TrafficThermalInfo> { self.thermal_states.get(id) }

    #[inline] pub fn len (&self)->usize { self.thermal_states.len() }
    #[inline] pub fn is_empty (&self)->bool { self.thermal_states.is_empty() }
}
