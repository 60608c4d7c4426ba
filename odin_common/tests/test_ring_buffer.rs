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

use odin_common::collections::RingBuffer;

// run with "cargo test --test test_ring_buffer -- --nocapture"

#[test]
fn test_push () {
    println!("--- testing ringbuffer push");
    let mut ring: RingBuffer<usize> = RingBuffer::new(5);
    for d in 0..5 {
        assert!( ring.push(d).is_none());
    }
    assert!( ring.is_full());

    assert_eq!( ring.push(5), Some(0));
    assert_eq!( ring.push(6), Some(1));
    println!("{:?}", ring.to_vec());

    assert_eq!( ring.len(), 5);
    assert_eq!( vec![2,3,4,5,6], ring.to_vec());
    assert_eq!( ring.front(), Some(&2));
    assert_eq!( ring.back(), Some(&6));
}

#[test]
fn test_clear () {
    let mut ring: RingBuffer<usize> = RingBuffer::new(3);
    for d in 0..10 { ring.push(d); }
    ring.clear();
    assert!( ring.is_empty());
    assert_eq!( ring.max_len(), 3);

    ring.push(42);
    assert_eq!( vec![42], ring.to_vec());
}

#[test]
fn test_zero_capacity () {
    let mut ring: RingBuffer<usize> = RingBuffer::new(0);
    ring.push(1);
    ring.push(2);
    assert_eq!( vec![2], ring.to_vec());
}

#[test]
fn test_serialize () {
    let mut ring: RingBuffer<usize> = RingBuffer::new(2);
    for d in 0..3 { ring.push(d); }
    let s = serde_json::to_string(&ring).unwrap();
    println!("serialized: {s}");
    assert_eq!( s, "[1,2]");
}
