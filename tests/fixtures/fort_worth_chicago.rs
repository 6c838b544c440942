//! Fort Worth, TX → Chicago, IL trip via I-35 / I-44 / I-55.
//!
//! Route points are city centres along the corridor, coarse but in travel
//! order. The payload mirrors what the planning service returns.

use trip_viz::trip::TripResult;

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }

    /// Planner storage order.
    pub fn lon_lat(&self) -> [f64; 2] {
        [self.lng, self.lat]
    }
}

pub const ROUTE: &[Location] = &[
    Location::new("Fort Worth", 32.7555, -97.3308),
    Location::new("Dallas", 32.7767, -96.7970),
    Location::new("Denton", 33.2148, -97.1331),
    Location::new("Gainesville", 33.6259, -97.1334),
    Location::new("Ardmore", 34.1743, -97.1436),
    Location::new("Norman", 35.2226, -97.4395),
    Location::new("Oklahoma City", 35.4676, -97.5164),
    Location::new("Tulsa", 36.1540, -95.9928),
    Location::new("Joplin", 37.0842, -94.5133),
    Location::new("Springfield, MO", 37.2090, -93.2923),
    Location::new("Rolla", 37.9514, -91.7713),
    Location::new("St. Louis", 38.6270, -90.1994),
    Location::new("Springfield, IL", 39.7817, -89.6501),
    Location::new("Bloomington", 40.4842, -88.9937),
    Location::new("Joliet", 41.5250, -88.0817),
    Location::new("Chicago", 41.8781, -87.6298),
];

pub fn route_geometry() -> Vec<[f64; 2]> {
    ROUTE.iter().map(Location::lon_lat).collect()
}

/// Planner response for the trip, including one unrecognised duty status
/// and one unrecognised stop field.
pub const TRIP_JSON: &str = r#"{
  "distance_miles": 1012.4,
  "estimated_drive_hours": 25,
  "route": {
    "geometry": [
      [-97.3308, 32.7555], [-96.7970, 32.7767], [-97.1331, 33.2148],
      [-97.1334, 33.6259], [-97.1436, 34.1743], [-97.4395, 35.2226],
      [-97.5164, 35.4676], [-95.9928, 36.1540], [-94.5133, 37.0842],
      [-93.2923, 37.2090], [-91.7713, 37.9514], [-90.1994, 38.6270],
      [-89.6501, 39.7817], [-88.9937, 40.4842], [-88.0817, 41.5250],
      [-87.6298, 41.8781]
    ],
    "stops": [
      { "type": "pickup", "hour": 1, "mile": 32, "name": "Dallas, TX" },
      { "type": "fuel", "hour": 9.5, "mile": 520 },
      {
        "type": "rest", "hour": 17.5, "mile": 640, "name": "Joplin Rest Area",
        "lat": 37.0842, "lon": -94.5133,
        "google_maps_url": "https://www.google.com/maps/search/?api=1&query=37.0842,-94.5133"
      },
      { "type": "fuel", "hour": 30, "mile": 860, "amenities": ["diesel"] },
      { "type": "dropoff", "hour": 40, "mile": 1012.4, "name": "Chicago, IL" }
    ],
    "waypoint_coords": [[-97.3308, 32.7555], [-96.7970, 32.7767], [-87.6298, 41.8781]]
  },
  "eld_logs": [
    {
      "day": 1,
      "segments": [
        { "status": "off_duty", "hours": 6 },
        { "status": "on_duty", "hours": 1 },
        { "status": "driving", "hours": 8 },
        { "status": "on_duty", "hours": 0.5 },
        { "status": "driving", "hours": 2.5 },
        { "status": "sleeper", "hours": 6 }
      ]
    },
    {
      "day": 2,
      "segments": [
        { "status": "sleeper", "hours": 4 },
        { "status": "on_duty", "hours": 0.5 },
        { "status": "driving", "hours": 9 },
        { "status": "off_duty", "hours": 0.5 },
        { "status": "driving", "hours": 2 },
        { "status": "on_duty", "hours": 1 },
        { "status": "off_duty", "hours": 7 }
      ]
    },
    {
      "day": 3,
      "segments": [
        { "status": "off_duty", "hours": 3 },
        { "status": "driving", "hours": 3.5 },
        { "status": "on_duty", "hours": 1 },
        { "status": "personal_conveyance", "hours": 0.5 },
        { "status": "off_duty", "hours": 16 }
      ]
    }
  ]
}"#;

pub fn sample_trip() -> TripResult {
    serde_json::from_str(TRIP_JSON).expect("fixture trip decodes")
}
