//! Trip plan data model.
//!
//! These types mirror the JSON exchanged with the planning service. A
//! [`TripResult`] is treated as immutable once decoded: every chart, path and
//! marker in this crate is derived from it and recomputed when it is replaced.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

/// Geographic coordinate in storage order: `[longitude, latitude]`.
pub type LonLat = [f64; 2];

/// A coordinate as it arrives on the wire: a number array, or anything else.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawCoord {
    Numbers(Vec<f64>),
    Malformed(IgnoredAny),
}

impl RawCoord {
    fn into_lon_lat(self) -> Option<LonLat> {
        match self {
            RawCoord::Numbers(values) if values.len() >= 2 => Some([values[0], values[1]]),
            RawCoord::Numbers(_) | RawCoord::Malformed(_) => None,
        }
    }
}

/// Route geometry with malformed points dropped.
fn deserialize_geometry<'de, D>(deserializer: D) -> Result<Vec<LonLat>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<RawCoord>>::deserialize(deserializer)?.unwrap_or_default();
    let total = raw.len();
    let coords: Vec<LonLat> = raw.into_iter().filter_map(RawCoord::into_lon_lat).collect();
    if coords.len() < total {
        warn!(dropped = total - coords.len(), "skipping malformed route points");
    }
    Ok(coords)
}

/// Waypoints keep their positions; a malformed entry becomes `None`.
fn deserialize_waypoints<'de, D>(deserializer: D) -> Result<Vec<Option<LonLat>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<RawCoord>>::deserialize(deserializer)?.unwrap_or_default();
    let coords: Vec<Option<LonLat>> = raw.into_iter().map(RawCoord::into_lon_lat).collect();
    let missing = coords.iter().filter(|coord| coord.is_none()).count();
    if missing > 0 {
        warn!(missing, "skipping malformed waypoints");
    }
    Ok(coords)
}

/// Regulatory activity category for a span of time.
///
/// Unknown status strings decode to [`DutyStatus::OffDuty`] rather than
/// failing the whole payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum DutyStatus {
    #[default]
    OffDuty,
    Sleeper,
    Driving,
    OnDuty,
}

impl DutyStatus {
    /// Chart rows, top to bottom.
    pub const ROWS: [DutyStatus; 4] = [
        DutyStatus::OffDuty,
        DutyStatus::Sleeper,
        DutyStatus::Driving,
        DutyStatus::OnDuty,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "off_duty" => Some(DutyStatus::OffDuty),
            "sleeper" => Some(DutyStatus::Sleeper),
            "driving" => Some(DutyStatus::Driving),
            "on_duty" => Some(DutyStatus::OnDuty),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DutyStatus::OffDuty => "off_duty",
            DutyStatus::Sleeper => "sleeper",
            DutyStatus::Driving => "driving",
            DutyStatus::OnDuty => "on_duty",
        }
    }

    /// Row index on the duty chart (0 = top).
    pub fn row(self) -> usize {
        match self {
            DutyStatus::OffDuty => 0,
            DutyStatus::Sleeper => 1,
            DutyStatus::Driving => 2,
            DutyStatus::OnDuty => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DutyStatus::OffDuty => "Off Duty",
            DutyStatus::Sleeper => "Sleeper Berth",
            DutyStatus::Driving => "Driving",
            DutyStatus::OnDuty => "On Duty",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            DutyStatus::OffDuty => "#64748b",
            DutyStatus::Sleeper => "#818cf8",
            DutyStatus::Driving => "#06b6d4",
            DutyStatus::OnDuty => "#f59e0b",
        }
    }
}

impl From<String> for DutyStatus {
    fn from(value: String) -> Self {
        DutyStatus::parse(&value).unwrap_or_else(|| {
            warn!(status = %value, "unknown duty status, treating as off_duty");
            DutyStatus::OffDuty
        })
    }
}

/// A single span of one duty status, in hours.
///
/// A segment missing its status reads as off duty; one missing its hours
/// reads as zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DutySegment {
    #[serde(default)]
    pub status: DutyStatus,
    #[serde(default)]
    pub hours: f64,
}

impl DutySegment {
    pub fn new(status: DutyStatus, hours: f64) -> Self {
        Self { status, hours }
    }
}

/// Duty segments for one calendar day of the trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayLog {
    #[serde(default)]
    pub day: u32,
    #[serde(default)]
    pub segments: Vec<DutySegment>,
}

/// Kind of scheduled stop along the route.
///
/// Unknown stop types decode to [`StopKind::Fuel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum StopKind {
    Pickup,
    Dropoff,
    #[default]
    Fuel,
    Rest,
}

impl StopKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pickup" => Some(StopKind::Pickup),
            "dropoff" => Some(StopKind::Dropoff),
            "fuel" => Some(StopKind::Fuel),
            "rest" => Some(StopKind::Rest),
            _ => None,
        }
    }

    /// The waypoint a stop of this kind is anchored to, if any.
    pub fn waypoint_role(self) -> Option<WaypointRole> {
        match self {
            StopKind::Pickup => Some(WaypointRole::Pickup),
            StopKind::Dropoff => Some(WaypointRole::Dropoff),
            StopKind::Fuel | StopKind::Rest => None,
        }
    }
}

impl From<String> for StopKind {
    fn from(value: String) -> Self {
        StopKind::parse(&value).unwrap_or_else(|| {
            warn!(kind = %value, "unknown stop type, treating as fuel");
            StopKind::Fuel
        })
    }
}

/// A scheduled stop, positioned in elapsed trip hours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    #[serde(rename = "type", default)]
    pub kind: StopKind,
    #[serde(default)]
    pub hour: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mile: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        rename = "google_maps_url",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub map_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
}

impl Stop {
    pub fn new(kind: StopKind, hour: f64) -> Self {
        Self {
            kind,
            hour,
            mile: None,
            name: None,
            map_link: None,
            lat: None,
            lon: None,
        }
    }

    /// Explicit (lat, lng), only when both halves are present.
    pub fn coordinate(&self) -> Option<(f64, f64)> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }
}

/// The three named anchor points of a trip, in `waypoint_coords` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WaypointRole {
    Current,
    Pickup,
    Dropoff,
}

impl WaypointRole {
    pub const ALL: [WaypointRole; 3] = [
        WaypointRole::Current,
        WaypointRole::Pickup,
        WaypointRole::Dropoff,
    ];

    pub fn index(self) -> usize {
        match self {
            WaypointRole::Current => 0,
            WaypointRole::Pickup => 1,
            WaypointRole::Dropoff => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TripRoute {
    /// Travelled path, `[longitude, latitude]` pairs.
    #[serde(default, deserialize_with = "deserialize_geometry")]
    pub geometry: Vec<LonLat>,
    #[serde(default)]
    pub stops: Vec<Stop>,
    /// Current, pickup and dropoff coordinates, `[longitude, latitude]`.
    #[serde(default, deserialize_with = "deserialize_waypoints")]
    pub waypoint_coords: Vec<Option<LonLat>>,
}

impl TripRoute {
    /// Storage-order coordinate of a waypoint, if the service supplied it.
    pub fn waypoint(&self, role: WaypointRole) -> Option<LonLat> {
        self.waypoint_coords.get(role.index()).copied().flatten()
    }

    /// Elapsed hour of the final stop; the trip's hour span.
    pub fn hour_span(&self) -> f64 {
        self.stops.last().map(|stop| stop.hour).unwrap_or(0.0)
    }
}

/// A fully computed trip plan.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TripResult {
    #[serde(default)]
    pub distance_miles: f64,
    #[serde(default)]
    pub estimated_drive_hours: f64,
    #[serde(default)]
    pub route: TripRoute,
    #[serde(rename = "eld_logs", default)]
    pub day_logs: Vec<DayLog>,
}

impl TripResult {
    /// False when the plan carries no duty hours at all, which the service
    /// returns when the driver is out of hours for the cycle.
    pub fn has_duty_hours(&self) -> bool {
        self.day_logs
            .iter()
            .flat_map(|log| log.segments.iter())
            .any(|segment| segment.hours.is_finite() && segment.hours > 0.0)
    }
}

/// Body of a plan request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    pub current_location: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    /// Hours already used in the current cycle, 0 to 70.
    pub cycle_used_hours: f64,
}
