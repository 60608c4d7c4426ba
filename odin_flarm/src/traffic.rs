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

use std::{fmt, str::FromStr};
use serde::{Serialize,Deserialize};
use uom::si::{f64::Velocity, velocity::meter_per_second};
use odin_common::geo::GeoPoint;

use crate::errors::{OdinFlarmError,parse_error};

/// the 24 bit radio id of a FLARM (or ICAO transponder) target. This is stable for the duration of a session
/// and serialized as a six digit hex string (e.g. "DD8F12")
#[derive(Debug,Clone,Copy,PartialEq,Eq,PartialOrd,Ord,Hash,Serialize,Deserialize)]
#[serde(try_from="String", into="String")]
pub struct FlarmId(u32);

impl FlarmId {
    pub const MAX: u32 = 0xff_ffff;

    pub fn new (id: u32)->Option<Self> {
        if id <= Self::MAX { Some(FlarmId(id)) } else { None }
    }

    pub fn value (&self)->u32 { self.0 }
}

impl FromStr for FlarmId {
    type Err = OdinFlarmError;

    fn from_str (s: &str)->Result<Self,Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.len() > 6 {
            return Err( parse_error!("not a 24bit FLARM id: '{}'", s))
        }
        if !s.bytes().all( |b| b.is_ascii_hexdigit()) { // from_str_radix would also accept a sign
            return Err( parse_error!("not a hex FLARM id: '{}'", s))
        }
        u32::from_str_radix( s, 16)
            .map( FlarmId)
            .map_err( |_| parse_error!("not a hex FLARM id: '{}'", s))
    }
}

impl TryFrom<String> for FlarmId {
    type Error = OdinFlarmError;
    fn try_from (s: String)->Result<Self,Self::Error> { s.parse() }
}

impl From<FlarmId> for String {
    fn from (id: FlarmId)->Self { id.to_string() }
}

impl fmt::Display for FlarmId {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:06X}", self.0)
    }
}

/// one tick's observation of another aircraft as relayed by the FLARM feed (already decoded).
/// Fields the feed did not provide in this tick are `None` - they are never defaulted or extrapolated
#[derive(Debug,Clone,PartialEq)]
pub struct FlarmTraffic {
    pub id: FlarmId,
    pub name: Option<String>, // callsign, only used for display/logging

    pub location: Option<GeoPoint>,
    pub turn_rate: Option<f64>, // signed degrees/sec
    pub climb_rate_avg30s: Option<Velocity>,
}

impl FlarmTraffic {
    pub fn new (id: FlarmId)->Self {
        FlarmTraffic { id, name: None, location: None, turn_rate: None, climb_rate_avg30s: None }
    }

    pub fn with_location (mut self, location: GeoPoint)->Self { self.location = Some(location); self }
    pub fn with_turn_rate (mut self, deg_per_sec: f64)->Self { self.turn_rate = Some(deg_per_sec); self }
    pub fn with_climb_rate (mut self, climb_rate: Velocity)->Self { self.climb_rate_avg30s = Some(climb_rate); self }
    pub fn with_name (mut self, name: impl ToString)->Self { self.name = Some(name.to_string()); self }
}

impl fmt::Display for FlarmTraffic {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "FlarmTraffic( id: {}", self.id)?;
        if let Some(name) = &self.name { write!( f, ", name: \"{name}\"")?; }
        if let Some(p) = &self.location { write!( f, ", pos: {p}")?; }
        if let Some(tr) = self.turn_rate { write!( f, ", turn: {tr:.1}")?; }
        if let Some(vs) = self.climb_rate_avg30s { write!( f, ", climb: {:.1}", vs.get::<meter_per_second>())?; }
        write!( f, ")")
    }
}

/// the reports received within one tick. Each id is contained at most once - a later report for the
/// same id replaces the earlier one, which is what the per-tick update contract of the detector requires
#[derive(Debug,Clone,Default)]
pub struct TrafficList {
    list: Vec<FlarmTraffic>
}

impl TrafficList {
    pub fn new ()->Self { TrafficList { list: Vec::new() } }

    pub fn insert (&mut self, traffic: FlarmTraffic) {
        if let Some(t) = self.list.iter_mut().find( |t| t.id == traffic.id) {
            *t = traffic;
        } else {
            self.list.push( traffic);
        }
    }

    pub fn find (&self, id: FlarmId)->Option<&FlarmTraffic> {
        self.list.iter().find( |t| t.id == id)
    }

    pub fn iter (&self)->impl Iterator<Item=&FlarmTraffic> { self.list.iter() }

    #[inline] pub fn len (&self)->usize { self.list.len() }
    #[inline] pub fn is_empty (&self)->bool { self.list.is_empty() }

    pub fn clear (&mut self) { self.list.clear() }
}

impl FromIterator<FlarmTraffic> for TrafficList {
    fn from_iter<I: IntoIterator<Item=FlarmTraffic>> (iter: I)->Self {
        let mut list = TrafficList::new();
        for t in iter { list.insert(t) }
        list
    }
}
