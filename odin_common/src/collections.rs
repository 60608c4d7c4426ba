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

use std::collections::VecDeque;
use std::collections::vec_deque::Iter;
use serde::{Serialize,Serializer};

/// a bounded FIFO buffer that drops its oldest element when a new one is pushed at capacity.
/// The bound is `max_len`, not the (possibly larger) allocated capacity of the underlying `VecDeque`
#[derive(Debug,Clone,PartialEq)]
pub struct RingBuffer<T> {
    items: VecDeque<T>,
    max_len: usize
}

impl<T> RingBuffer<T> {
    /// note that a zero capacity is promoted to 1 so that `push` always retains the last element
    pub fn new (max_len: usize)->Self {
        let max_len = max_len.max(1);
        RingBuffer { items: VecDeque::with_capacity(max_len), max_len }
    }

    /// push to the back, returning the evicted front element if we were at capacity
    pub fn push (&mut self, t: T)->Option<T> {
        let evicted = if self.items.len() >= self.max_len { self.items.pop_front() } else { None };
        self.items.push_back(t);
        evicted
    }

    pub fn clear (&mut self) { self.items.clear() }

    #[inline] pub fn len (&self)->usize { self.items.len() }
    #[inline] pub fn is_empty (&self)->bool { self.items.is_empty() }
    #[inline] pub fn is_full (&self)->bool { self.items.len() == self.max_len }
    #[inline] pub fn max_len (&self)->usize { self.max_len }

    pub fn front (&self)->Option<&T> { self.items.front() }
    pub fn back (&self)->Option<&T> { self.items.back() }
    pub fn get (&self, idx: usize)->Option<&T> { self.items.get(idx) }

    /// oldest to newest
    pub fn iter (&self)->Iter<'_,T> { self.items.iter() }
}

impl<T: Clone> RingBuffer<T> {
    pub fn to_vec (&self)->Vec<T> { self.items.iter().cloned().collect() }
}

impl<'a,T> IntoIterator for &'a RingBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a,T>;

    fn into_iter (self)->Self::IntoIter { self.items.iter() }
}

// serialized as a plain sequence, oldest first
impl<T: Serialize> Serialize for RingBuffer<T> {
    fn serialize<S> (&self, serializer: S)->Result<S::Ok,S::Error> where S: Serializer {
        serializer.collect_seq( self.items.iter())
    }
}
