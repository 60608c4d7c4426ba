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

use std::{fmt, time::Duration};
use serde::{Serialize,Deserialize};
use uom::si::{f64::Velocity, velocity::meter_per_second};
use odin_common::{is_none, collections::RingBuffer, datetime::EpochMillis, geo::GeoPoint, uom::meters_per_second};

use crate::traffic::FlarmId;

/// the detection lifecycle of a single traffic target. The order of variants is the lifecycle order
#[derive(Debug,Clone,Copy,PartialEq,Eq,PartialOrd,Ord,Hash,Serialize,Deserialize,Default)]
pub enum CirclingState {
    #[default]
    Idle,                 // not considered circling
    PotentiallyCircling,  // meets turn and area criteria, waiting for the probation period to pass
    Circling,             // confirmed circling
    RecentlyStopped       // was circling, still displayed until it ages out
}

impl CirclingState {
    pub fn as_str (&self)->&'static str {
        match self {
            CirclingState::Idle => "idle",
            CirclingState::PotentiallyCircling => "potentially_circling",
            CirclingState::Circling => "circling",
            CirclingState::RecentlyStopped => "recently_stopped",
        }
    }
}

impl fmt::Display for CirclingState {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// unweighted running mean over all climb samples admitted since the last reset.
/// This is neither a sliding window nor exponentially decaying
#[derive(Debug,Clone,Copy,PartialEq,Default,Serialize)]
pub struct ClimbAverage {
    sum: f64,     // m/s
    samples: usize,
    average: f64, // m/s, 0 if there are no samples
}

impl ClimbAverage {
    pub fn add (&mut self, climb_rate: Velocity) {
        self.sum += climb_rate.get::<meter_per_second>();
        self.samples += 1;
        self.average = self.sum / self.samples as f64;
    }

    pub fn reset (&mut self) {
        *self = ClimbAverage::default();
    }

    pub fn average (&self)->Velocity { meters_per_second( self.average) }
    pub fn sum (&self)->Velocity { meters_per_second( self.sum) }
    pub fn samples (&self)->usize { self.samples }
}

/// what we know about a possible thermal marked by a traffic target.
///
/// Instances are created by the detector when a target is seen the first time and only mutated by the detector
/// (per tick update and cleanup), hence all fields are read-only for other crates. Note that `center_location`
/// and the climb average survive the transition into `RecentlyStopped` so that the last known thermal can still
/// be displayed
#[derive(Debug,Clone,Serialize)]
pub struct TrafficThermalInfo {
    pub(crate) id: FlarmId,
    pub(crate) state: CirclingState,

    #[serde(skip_serializing_if="is_none")]
    pub(crate) center_location: Option<GeoPoint>,

    pub(crate) climb: ClimbAverage,

    pub(crate) last_update_time: EpochMillis, // last state change or circling update
    pub(crate) circling_start_time: EpochMillis, // when the current probation period started

    #[serde(skip)]
    pub(crate) position_history: RingBuffer<GeoPoint>, // oldest first
}

impl TrafficThermalInfo {
    pub(crate) fn new (id: FlarmId, history_size: usize)->Self {
        TrafficThermalInfo {
            id,
            state: CirclingState::Idle,
            center_location: None,
            climb: ClimbAverage::default(),
            last_update_time: EpochMillis::default(),
            circling_start_time: EpochMillis::default(),
            position_history: RingBuffer::new( history_size),
        }
    }

    pub fn id (&self)->FlarmId { self.id }
    pub fn state (&self)->CirclingState { self.state }
    pub fn center_location (&self)->Option<GeoPoint> { self.center_location }
    pub fn average_climb_rate (&self)->Velocity { self.climb.average() }
    pub fn climb (&self)->&ClimbAverage { &self.climb }
    pub fn last_update_time (&self)->EpochMillis { self.last_update_time }
    pub fn circling_start_time (&self)->EpochMillis { self.circling_start_time }
    pub fn position_history (&self)->&RingBuffer<GeoPoint> { &self.position_history }

    /// time since the last state change or circling update (zero if `now` precedes it)
    pub fn age (&self, now: EpochMillis)->Duration {
        now.elapsed_since( self.last_update_time)
    }

    /// should this be rendered at `now`? Only confirmed thermals and the ones that stopped within `max_age`
    pub fn is_relevant_for_display (&self, now: EpochMillis, max_age: Duration)->bool {
        match self.state {
            CirclingState::Circling => true,
            CirclingState::RecentlyStopped => self.age(now) <= max_age,
            _ => false
        }
    }

    /// drop everything we accumulated for the current detection attempt
    pub(crate) fn reset_detection_state (&mut self) {
        self.position_history.clear();
        self.climb.reset();
        self.center_location = None;
    }

    /// start a fresh probation period, seeding the history with the current location
    pub(crate) fn start_probation (&mut self, location: GeoPoint, now: EpochMillis) {
        self.reset_detection_state();
        self.position_history.push( location);
        self.state = CirclingState::PotentiallyCircling;
        self.circling_start_time = now;
        self.last_update_time = now;
    }
}

impl fmt::Display for TrafficThermalInfo {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "TrafficThermal( id: {}, state: {}", self.id, self.state)?;
        if let Some(p) = &self.center_location { write!( f, ", center: {p}")?; }
        if self.climb.samples() > 0 {
            write!( f, ", climb: {:.2}m/s ({} samples)", self.climb.average().get::<meter_per_second>(), self.climb.samples())?;
        }
        write!( f, ", updated: {})", self.last_update_time)
    }
}
