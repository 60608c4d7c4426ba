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

use std::{collections::HashMap, collections::hash_map::Values, time::Duration};
use tracing::trace;
use odin_common::datetime::EpochMillis;

use crate::{thermal::{CirclingState, TrafficThermalInfo}, traffic::FlarmId};

/// the owned id -> thermal state map. Entries are created lazily on first sight of an id and only removed by `sweep`
#[derive(Debug)]
pub struct ThermalStateTable {
    states: HashMap<FlarmId,TrafficThermalInfo>,
    history_size: usize, // of new entries
}

impl ThermalStateTable {
    pub fn new (history_size: usize)->Self {
        ThermalStateTable { states: HashMap::new(), history_size }
    }

    /// the existing entry for `id` or a new `Idle` one
    pub fn upsert (&mut self, id: FlarmId)->&mut TrafficThermalInfo {
        let history_size = self.history_size;
        self.states.entry(id).or_insert_with( || TrafficThermalInfo::new( id, history_size))
    }

    /// remove all entries that don't carry information anymore. This has to run after all updates of a tick
    pub fn sweep (&mut self, now: EpochMillis, max_recently_stopped_age: Duration)->usize {
        let len = self.states.len();
        self.states.retain( |id,info| {
            let expired = is_expired( info, now, max_recently_stopped_age);
            if expired { trace!("dropping {} thermal state of {} (age {:?})", info.state, id, info.age(now)) }
            !expired
        });
        len - self.states.len()
    }

    pub fn get (&self, id: FlarmId)->Option<&TrafficThermalInfo> { self.states.get(&id) }
    pub fn values (&self)->Values<'_,FlarmId,TrafficThermalInfo> { self.states.values() }
    pub fn as_map (&self)->&HashMap<FlarmId,TrafficThermalInfo> { &self.states }

    #[inline] pub fn len (&self)->usize { self.states.len() }
    #[inline] pub fn is_empty (&self)->bool { self.states.is_empty() }
}

/// eviction rules:
///  - idle entries carry no information and must not accumulate
///  - recently stopped thermals age out after `max_recently_stopped_age`
///  - anything that wasn't updated for twice that long is dropped, which covers targets that vanished
///    from the feed without a clean transition
pub fn is_expired (info: &TrafficThermalInfo, now: EpochMillis, max_recently_stopped_age: Duration)->bool {
    let age = info.age(now);
    match info.state {
        CirclingState::Idle => true,
        CirclingState::RecentlyStopped => age > max_recently_stopped_age,
        _ => age > max_recently_stopped_age.saturating_mul(2)
    }
}
