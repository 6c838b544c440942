//! Great-circle distances between (lat, lng) points.
//!
//! Used to measure the drawn route against the distance the planner reports.
//! Ignores roads and elevation.

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

const KM_PER_MILE: f64 = 1.609_344;

/// Haversine distance between two points in kilometers.
pub fn haversine_km(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lng1) = from;
    let (lat2, lng2) = to;

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().min(1.0).asin();

    EARTH_RADIUS_KM * c
}

pub fn haversine_miles(from: (f64, f64), to: (f64, f64)) -> f64 {
    haversine_km(from, to) / KM_PER_MILE
}

/// Sum of leg distances along an ordered path, in miles.
pub fn path_length_miles(points: &[(f64, f64)]) -> f64 {
    points
        .windows(2)
        .map(|leg| haversine_miles(leg[0], leg[1]))
        .sum()
}
