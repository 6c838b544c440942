//! Projected route path.
//!
//! The planner stores coordinates as `[longitude, latitude]`; map surfaces
//! take `(latitude, longitude)`. [`Polyline::from_lon_lat`] is the one place
//! that reordering happens.

use serde::{Deserialize, Serialize};

use crate::haversine::path_length_miles;
use crate::trip::LonLat;

/// Reorders a `[longitude, latitude]` pair into `(latitude, longitude)`.
pub fn to_lat_lng(coord: LonLat) -> (f64, f64) {
    let [lon, lat] = coord;
    (lat, lon)
}

/// A route path as (latitude, longitude) points.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<(f64, f64)>,
}

impl Polyline {
    /// Creates a new Polyline from (latitude, longitude) points.
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// Projects stored route geometry, preserving order.
    pub fn from_lon_lat(geometry: &[LonLat]) -> Self {
        Self {
            points: geometry.iter().copied().map(to_lat_lng).collect(),
        }
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn into_points(self) -> Vec<(f64, f64)> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Smallest box enclosing every point; `None` for an empty path.
    pub fn bounds(&self) -> Option<Bounds> {
        let (&first, rest) = self.points.split_first()?;
        Some(rest.iter().fold(Bounds::around(first), |bounds, &point| bounds.extend(point)))
    }

    /// Great-circle length in miles.
    pub fn length_miles(&self) -> f64 {
        path_length_miles(&self.points)
    }
}

/// Latitude/longitude box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Bounds {
    /// Zero-size box at one point.
    pub fn around((lat, lng): (f64, f64)) -> Self {
        Self {
            south: lat,
            west: lng,
            north: lat,
            east: lng,
        }
    }

    pub fn extend(self, (lat, lng): (f64, f64)) -> Self {
        Self {
            south: self.south.min(lat),
            west: self.west.min(lng),
            north: self.north.max(lat),
            east: self.east.max(lng),
        }
    }

    pub fn contains(&self, (lat, lng): (f64, f64)) -> bool {
        lat >= self.south && lat <= self.north && lng >= self.west && lng <= self.east
    }

    pub fn center(&self) -> (f64, f64) {
        ((self.south + self.north) / 2.0, (self.west + self.east) / 2.0)
    }
}
