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

//! geometries on the WGS84 surface. We use the [geo](https://docs.rs/geo/latest/geo/index.html) crate for
//! the algorithms and add units-of-measure ([uom](https://docs.rs/uom/latest/uom/)) and normalized geodetic
//! degree semantics through new types

use std::fmt;
use serde::{Serialize,Deserialize};
use geo::{BoundingRect, Coord, Distance, Haversine, MultiPoint, Point, Rect};
use uom::si::f64::Length;

use crate::uom::meters;

pub type GeoCoord = Coord<f64>;

#[inline]
pub fn normalize_90 (d:f64) -> f64 {
    let x = d % 360.0;

    if x < -90.0 { -180.0 - x }
    else if x > 90.0 { 180.0 - x }
    else { x }
}

#[inline]
pub fn normalize_180 (d: f64) -> f64 {
    let x = d % 360.0;

    if x < -180.0 { 360.0 + x }
    else if x > 180.0 { x - 360.0 }
    else { x }
}

/* #region GeoPoint ***********************************************************************************************/

/// a wrapper for geo::Point that uses geodetic degrees stored as f64 (x: longitude, y: latitude)
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
#[serde(from="LonLat", into="LonLat")]
pub struct GeoPoint(Point);

impl GeoPoint {
    pub fn from_lon_lat_degrees (lon: f64, lat: f64) -> Self {
        GeoPoint( Point::new( normalize_180(lon), normalize_90(lat)))
    }

    #[inline] pub fn longitude_degrees (&self)->f64 { self.0.x() }
    #[inline] pub fn latitude_degrees (&self)->f64 { self.0.y() }

    pub fn point (&self) -> &Point { &self.0 }
    pub fn coord (&self)->GeoCoord { self.0.0 }

    /// great circle distance on a mean earth radius sphere
    pub fn haversine_distance_to (&self, other: &GeoPoint)->Length {
        meters( Haversine.distance( self.0, other.0))
    }
}

impl fmt::Display for GeoPoint {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.6},{:.6}]", self.0.x(),self.0.y())
    }
}

// the serialized form. We accept "lon"|"longitude"|"x" and "lat"|"latitude"|"y" so that we can also read
// what `geo` types write
#[derive(Serialize,Deserialize)]
struct LonLat {
    #[serde(alias="longitude", alias="x")] lon: f64,
    #[serde(alias="latitude", alias="y")] lat: f64,
}

impl From<LonLat> for GeoPoint {
    fn from (ll: LonLat)->Self { GeoPoint::from_lon_lat_degrees( ll.lon, ll.lat) }
}

impl From<GeoPoint> for LonLat {
    fn from (p: GeoPoint)->Self { LonLat { lon: p.longitude_degrees(), lat: p.latitude_degrees() } }
}

/* #endregion GeoPoint */

/* #region GeoRect ***********************************************************************************************/

/// an axis aligned geodetic box. Note this does not handle boxes that span the antimeridian, which is
/// not an issue for the local extents (a few km) we use it for
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct GeoRect(Rect);

impl GeoRect {
    pub fn from_min_max (sw: GeoPoint, ne: GeoPoint) -> Self {
        GeoRect( Rect::new( sw.coord(), ne.coord()))
    }

    /// the smallest box that encloses all given points, or None if there are no points
    pub fn enclosing<'a,I> (points: I)->Option<Self> where I: IntoIterator<Item=&'a GeoPoint> {
        let mp: MultiPoint = points.into_iter().map( |p| p.0).collect();
        mp.bounding_rect().map( GeoRect)
    }

    #[inline] pub fn west (&self)->f64 { self.0.min().x }
    #[inline] pub fn east (&self)->f64 { self.0.max().x }
    #[inline] pub fn south (&self)->f64 { self.0.min().y }
    #[inline] pub fn north (&self)->f64 { self.0.max().y }

    pub fn south_west (&self)->GeoPoint { GeoPoint( Point::from( self.0.min())) }
    pub fn north_east (&self)->GeoPoint { GeoPoint( Point::from( self.0.max())) }

    /// great circle distance between the south-west and north-east corners
    pub fn diagonal_distance (&self)->Length {
        self.south_west().haversine_distance_to( &self.north_east())
    }
}

impl fmt::Display for GeoRect {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.6},{:.6},{:.6},{:.6}]", self.west(), self.south(), self.east(), self.north())
    }
}

/* #endregion GeoRect */
