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

use std::collections::{BTreeMap,HashMap};
use odin_common::datetime::EpochMillis;

use crate::{
    config::ThermalDetectorConfig, detector::TrafficThermalDetector,
    thermal::TrafficThermalInfo, traffic::{FlarmId, TrafficList}
};

/// a container for the FLARM data of one tick
#[derive(Debug,Clone,Default)]
pub struct FlarmData {
    pub traffic: TrafficList,

    /// thermals marked by traffic that should be displayed. These are copies, i.e. they stay valid
    /// regardless of what the detector does in subsequent ticks
    pub detected_thermals: BTreeMap<FlarmId,TrafficThermalInfo>,
}

impl FlarmData {
    pub fn is_detected (&self)->bool { !self.traffic.is_empty() }

    pub fn clear (&mut self) {
        self.traffic.clear();
        self.detected_thermals.clear();
    }
}

/// per tick computations on received FLARM data
#[derive(Debug,Default)]
pub struct FlarmComputer {
    thermal_detector: TrafficThermalDetector,
}

impl FlarmComputer {
    pub fn new (config: ThermalDetectorConfig)->Self {
        FlarmComputer { thermal_detector: TrafficThermalDetector::new( config) }
    }

    /// feed all targets of `flarm` (paired with their reports in `last_flarm`) through the thermal detector,
    /// clean up and publish the displayable thermals into `flarm.detected_thermals`
    pub fn process (&mut self, flarm: &mut FlarmData, last_flarm: &FlarmData, now: EpochMillis) {
        for traffic in flarm.traffic.iter() {
            let last_traffic = last_flarm.traffic.find( traffic.id);
            self.thermal_detector.update( traffic, last_traffic, now);
        }
        self.thermal_detector.cleanup( now);

        flarm.detected_thermals = self.thermal_detector.relevant_thermals( now)
            .map( |info| (info.id(), info.clone()))
            .collect();
    }

    pub fn detected_thermals (&self)->&HashMap<FlarmId,TrafficThermalInfo> {
        self.thermal_detector.displayable_thermals()
    }

    pub fn thermal_detector (&self)->&TrafficThermalDetector { &self.thermal_detector }
}
