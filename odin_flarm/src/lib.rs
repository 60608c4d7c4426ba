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

//! detection of thermals marked by circling FLARM traffic.
//!
//! Gliders that circle for a while within a small area are most likely climbing in a thermal. The
//! `TrafficThermalDetector` classifies each received target by means of a hysteretic state machine
//! (see `circling`), accumulates its average climb rate and keeps the last known thermal location
//! displayable for a grace period after the target stopped circling. `FlarmComputer` composes this
//! into the per-tick processing of received `FlarmData`

pub mod errors;
pub mod config;
pub mod traffic;
pub mod thermal;
pub mod circling;
pub mod table;
pub mod detector;
pub mod computer;
pub mod replay;

pub use config::{ThermalDetectorConfig, load_config};
pub use traffic::{FlarmId, FlarmTraffic, TrafficList};
pub use thermal::{CirclingState, ClimbAverage, TrafficThermalInfo};
pub use detector::TrafficThermalDetector;
pub use computer::{FlarmComputer, FlarmData};
