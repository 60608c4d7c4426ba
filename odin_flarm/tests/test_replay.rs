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

use uom::si::velocity::meter_per_second;
use odin_common::datetime::EpochMillis;
use odin_flarm::{CirclingState, FlarmComputer, FlarmData, FlarmId, replay::{read_ticks, read_ticks_from_file}};

// run with "cargo test --test test_replay -- --nocapture"

const SAMPLE: &str = "resources/replay_sample.csv";

fn glider ()->FlarmId { "DD8F12".parse().unwrap() }

#[test]
fn test_read_sample () {
    let ticks = read_ticks_from_file( SAMPLE).unwrap();
    println!("read {} ticks from {}", ticks.len(), SAMPLE);
    assert_eq!( ticks.len(), 80);
    assert_eq!( ticks[0].time, EpochMillis::new( 1_720_000_000_000));
    assert_eq!( ticks[79].time, EpochMillis::new( 1_720_000_079_000));

    assert_eq!( ticks[0].traffic.len(), 3);
    assert_eq!( ticks[5].traffic.len(), 2); // 4B0A01 dropped out

    let t = ticks[0].traffic.find( glider()).unwrap();
    println!("{t}");
    assert_eq!( t.name.as_deref(), Some("D-KXYZ"));
    assert_eq!( t.turn_rate, Some(20.0));

    let tug = ticks[0].traffic.find( "3E1234".parse().unwrap()).unwrap();
    assert!( tug.name.is_none());

    let no_turn = ticks[0].traffic.find( "4B0A01".parse().unwrap()).unwrap();
    assert!( no_turn.turn_rate.is_none());
    assert!( no_turn.location.is_some());
}

#[test]
fn test_replay_sample () {
    let ticks = read_ticks_from_file( SAMPLE).unwrap();
    let mut computer = FlarmComputer::default();
    let mut last_flarm = FlarmData::default();

    for (i, tick) in ticks.iter().enumerate() {
        let mut flarm = FlarmData { traffic: tick.traffic.clone(), ..FlarmData::default() };
        computer.process( &mut flarm, &last_flarm, tick.time);

        let state = flarm.detected_thermals.get( &glider()).map( |info| info.state());
        match i {
            0..45 => assert_eq!( state, None, "tick {i}"),
            45..65 => assert_eq!( state, Some( CirclingState::Circling), "tick {i}"),
            _ => assert_eq!( state, Some( CirclingState::RecentlyStopped), "tick {i}"),
        }
        assert_eq!( flarm.detected_thermals.len(), if i < 45 { 0 } else { 1 });
        last_flarm = flarm;
    }

    let info = &last_flarm.detected_thermals[&glider()];
    println!("at end of replay: {info}");

    let last_circling = ticks[64].traffic.find( glider()).unwrap();
    assert_eq!( info.center_location(), last_circling.location);
    assert_eq!( info.last_update_time(), ticks[65].time);

    // climb samples 1.5,1.6,1.7,.. for ticks 45..=64
    assert_eq!( info.climb().samples(), 20);
    let avg = info.average_climb_rate().get::<meter_per_second>();
    assert!( (avg - 1.595).abs() < 1e-6, "average climb {avg}");
}

#[test]
fn test_empty_fields () {
    let input = "time,id,lat,lon,turn_rate,climb_rate,name
1000, 00a1b2, 47.1, 8.2, , ,
1000, 00A1B3, , , -18.5, 0.7, LX
";
    let ticks = read_ticks( input.as_bytes()).unwrap();
    assert_eq!( ticks.len(), 1);
    assert_eq!( ticks[0].traffic.len(), 2);

    let t1 = ticks[0].traffic.find( FlarmId::new( 0xa1b2).unwrap()).unwrap();
    assert!( t1.location.is_some());
    assert!( t1.turn_rate.is_none());
    assert!( t1.climb_rate_avg30s.is_none());
    assert!( t1.name.is_none());

    let t2 = ticks[0].traffic.find( FlarmId::new( 0xa1b3).unwrap()).unwrap();
    assert!( t2.location.is_none());
    assert_eq!( t2.turn_rate, Some(-18.5));
    assert_eq!( t2.name.as_deref(), Some("LX"));
}

#[test]
fn test_duplicate_records_in_tick () {
    let input = "time,id,lat,lon,turn_rate,climb_rate
1000,DD8F12,47.1,8.2,20,1.0
1000,DD8F12,47.1,8.2,21,1.1
2000,DD8F12,47.1,8.2,22,1.2
";
    let ticks = read_ticks( input.as_bytes()).unwrap();
    assert_eq!( ticks.len(), 2);
    assert_eq!( ticks[0].traffic.len(), 1);
    assert_eq!( ticks[0].traffic.find( glider()).unwrap().turn_rate, Some(21.0)); // last one wins
}

#[test]
fn test_invalid_input () {
    let out_of_order = "time,id,lat,lon,turn_rate,climb_rate
2000,DD8F12,47.1,8.2,20,1.0
1000,DD8F12,47.1,8.2,20,1.0
";
    let res = read_ticks( out_of_order.as_bytes());
    println!("out of order: {:?}", res.as_ref().err());
    assert!( res.is_err());

    let incomplete = "time,id,lat,lon,turn_rate,climb_rate
1000,DD8F12,47.1,,20,1.0
";
    assert!( read_ticks( incomplete.as_bytes()).is_err());

    let bad_id = "time,id,lat,lon,turn_rate,climb_rate
1000,XYZ123,47.1,8.2,20,1.0
";
    assert!( read_ticks( bad_id.as_bytes()).is_err());

    let bad_number = "time,id,lat,lon,turn_rate,climb_rate
1000,DD8F12,47.1,8.2,fast,1.0
";
    assert!( read_ticks( bad_number.as_bytes()).is_err());

    // out of range coordinates are not folded into valid ones
    for (lat,lon) in [("95.0","8.2"), ("-90.5","8.2"), ("47.1","180.5"), ("47.1","-200"), ("NaN","8.2"), ("47.1","inf")] {
        let input = format!("time,id,lat,lon,turn_rate,climb_rate\n1000,DD8F12,{lat},{lon},20,1.0\n");
        let res = read_ticks( input.as_bytes());
        println!("lat={lat} lon={lon}: {:?}", res.as_ref().err());
        assert!( res.is_err());
    }
    let edges = "time,id,lat,lon,turn_rate,climb_rate
1000,DD8F12,90.0,-180.0,20,1.0
";
    let ticks = read_ticks( edges.as_bytes()).unwrap();
    assert!( ticks[0].traffic.find( glider()).unwrap().location.is_some());

    let nan_rate = "time,id,lat,lon,turn_rate,climb_rate
1000,DD8F12,47.1,8.2,NaN,1.0
";
    assert!( read_ticks( nan_rate.as_bytes()).is_err());

    assert!( read_ticks_from_file( "resources/does_not_exist.csv").is_err());
}

#[test]
fn test_extreme_times () {
    let input = "time,id,lat,lon,turn_rate,climb_rate
-9000000000000000000,DD8F12,47.1,8.2,20,1.0
9000000000000000000,DD8F12,47.1,8.2,20,1.0
";
    let ticks = read_ticks( input.as_bytes()).unwrap();
    assert_eq!( ticks.len(), 2);

    let mut computer = FlarmComputer::default();
    let mut last_flarm = FlarmData::default();
    for tick in &ticks {
        let mut flarm = FlarmData { traffic: tick.traffic.clone(), ..FlarmData::default() };
        computer.process( &mut flarm, &last_flarm, tick.time);
        last_flarm = flarm;
    }
    assert_eq!( last_flarm.detected_thermals[&glider()].state(), CirclingState::Circling);
}
