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

//! the circling state machine. Each report of a target moves its `TrafficThermalInfo` through
//! ```text
//!   Idle --turn--> PotentiallyCircling --turn & area for min_circling_duration--> Circling
//!    ^                    |                                                           |
//!    +----- any miss -----+                         RecentlyStopped <--- any miss ----+
//!                                                          |
//!   PotentiallyCircling <------------- turn ---------------+
//! ```
//! A single sample that fails the turn or area criteria during probation discards all progress, there is no partial credit.
//! Transitions only depend on their inputs - the caller supplies `now`, we never read the clock here

use tracing::{debug,trace};
use uom::si::f64::Length;
use odin_common::{collections::RingBuffer, datetime::EpochMillis, geo::{GeoPoint,GeoRect}};

use crate::{config::ThermalDetectorConfig, thermal::{CirclingState, TrafficThermalInfo}, traffic::FlarmTraffic};

/// does the recent position history fit into a bounding box with a diagonal of at most `max_diameter`?
/// This is trivially true for less than two points
pub fn check_area_constraint (history: &RingBuffer<GeoPoint>, max_diameter: Length)->bool {
    if history.len() < 2 {
        return true
    }

    match GeoRect::enclosing( history) {
        Some(bbox) => bbox.diagonal_distance() <= max_diameter,
        None => true
    }
}

/// apply one report to the state of its target and return the new state
pub fn update_circling_state (info: &mut TrafficThermalInfo, traffic: &FlarmTraffic, now: EpochMillis, config: &ThermalDetectorConfig)->CirclingState {
    let prev_state = info.state;

    if let (Some(location), Some(turn_rate)) = (traffic.location, traffic.turn_rate) {
        info.position_history.push( location);

        let meets_turn = turn_rate.abs() >= config.min_turn_rate;
        let meets_area = check_area_constraint( &info.position_history, config.max_diameter);
        trace!("{} turn: {:.1} ({}), area: {}, history: {}", info.id, turn_rate, meets_turn, meets_area, info.position_history.len());

        match info.state {
            CirclingState::Idle => {
                if meets_turn {
                    info.start_probation( location, now);
                }
            }
            CirclingState::PotentiallyCircling => {
                if meets_turn && meets_area {
                    info.last_update_time = now;
                    if now.elapsed_since( info.circling_start_time) >= config.min_circling_duration {
                        info.state = CirclingState::Circling;
                        accept_circling_sample( info, traffic, location);
                    }
                } else {
                    info.state = CirclingState::Idle;
                    info.reset_detection_state();
                }
            }
            CirclingState::Circling => {
                info.last_update_time = now;
                if meets_turn && meets_area {
                    accept_circling_sample( info, traffic, location);
                } else {
                    info.state = CirclingState::RecentlyStopped; // center and climb average are kept for display
                }
            }
            CirclingState::RecentlyStopped => {
                if meets_turn {
                    info.start_probation( location, now);
                }
                // otherwise we wait for cleanup to age us out
            }
        }

    } else {
        // lost signal - missing location or turn rate are never extrapolated
        match info.state {
            CirclingState::Circling => {
                info.state = CirclingState::RecentlyStopped;
                info.last_update_time = now;
            }
            CirclingState::PotentiallyCircling => {
                info.state = CirclingState::Idle;
                info.reset_detection_state();
            }
            _ => {}
        }
    }

    if info.state != prev_state {
        debug!("traffic {} changed from {} to {}", info.id, prev_state, info.state);
    }
    info.state
}

// we only get here for reports that have a location
fn accept_circling_sample (info: &mut TrafficThermalInfo, traffic: &FlarmTraffic, location: GeoPoint) {
    if let Some(climb_rate) = traffic.climb_rate_avg30s {
        info.climb.add( climb_rate);
    }
    // the center is the latest accepted position, not a centroid of the history
    info.center_location = Some(location);
}
