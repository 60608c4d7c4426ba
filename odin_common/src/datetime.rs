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

use std::{fmt, ops::{Add,Sub}, time::Duration};
use chrono::{DateTime, TimeZone, Utc};
use serde::{Serialize,Deserialize,Serializer,Deserializer};
use parse_duration::parse;

/// a timestamp in milliseconds since the unix epoch, used for feed and tick times.
/// Only `now()` reads the wall clock
#[derive(Serialize,Deserialize,Debug,Clone,Copy,PartialEq,Eq,PartialOrd,Ord,Hash,Default)]
pub struct EpochMillis(i64);

impl EpochMillis {
    pub fn now ()->Self { EpochMillis( Utc::now().timestamp_millis()) }

    pub fn new (millis:i64)->Self { EpochMillis(millis) }

    pub fn from_secs (secs: i64)->Self { EpochMillis( secs.saturating_mul(1000)) }

    pub fn millis (&self)->i64 { self.0 }

    /// time passed since `earlier`. This saturates at zero if `earlier` is actually later than self
    /// (out-of-order feed entries or clock adjustments)
    pub fn elapsed_since (&self, earlier: EpochMillis)->Duration {
        let dt = self.0.saturating_sub( earlier.0);
        if dt > 0 { Duration::from_millis( dt as u64) } else { Duration::ZERO }
    }
}

impl fmt::Display for EpochMillis {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match DateTime::<Utc>::from_timestamp_millis(self.0) {
            Some(date) => write!(f, "{}", date.format("%Y-%m-%dT%H:%M:%S%.3fZ")),
            None => write!(f, "{}ms", self.0)
        }
    }
}

impl<Tz> From<DateTime<Tz>> for EpochMillis where Tz: TimeZone {
    fn from (date: DateTime<Tz>)->Self { EpochMillis( date.timestamp_millis()) }
}

impl Add<Duration> for EpochMillis {
    type Output = EpochMillis;
    fn add (self, dur: Duration)->EpochMillis { EpochMillis( self.0.saturating_add( duration_millis(dur))) }
}

impl Sub<Duration> for EpochMillis {
    type Output = EpochMillis;
    fn sub (self, dur: Duration)->EpochMillis { EpochMillis( self.0.saturating_sub( duration_millis(dur))) }
}

// durations beyond the i64 range are clamped, timestamp arithmetic saturates at the i64 bounds
fn duration_millis (dur: Duration)->i64 {
    i64::try_from( dur.as_millis()).unwrap_or( i64::MAX)
}

// as of Rust 1.87 the min,hour Duration ctors are still experimental so we provide our own wrappers
#[inline] pub fn millis (n: u64)->Duration { Duration::from_millis(n) }
#[inline] pub fn secs (n: u64)->Duration { Duration::from_secs(n) }
#[inline] pub fn minutes (n: u64)->Duration { Duration::from_secs(n * 60) }
#[inline] pub fn hours (n: u64)->Duration { Duration::from_secs(n * 3600) }

//--- support for serde (humanized durations such as "45s" or "10min" in config files)

pub fn deserialize_duration <'a,D>(deserializer: D) -> Result<Duration,D::Error>
    where D: Deserializer<'a>
{
    String::deserialize(deserializer).and_then( |string| {
        parse(string.as_str())
            .map_err( |e| serde::de::Error::custom(format!("{:?}",e)))
    })
}

pub fn serialize_duration<S: Serializer> (dur: &Duration, s: S) -> Result<S::Ok, S::Error>  {
    let dfm = format!("{:?}", dur);
    s.serialize_str(&dfm)
}

/// parse a humanized duration spec (e.g. from the command line)
pub fn parse_duration_spec (spec: &str)->Option<Duration> {
    parse(spec).ok()
}
