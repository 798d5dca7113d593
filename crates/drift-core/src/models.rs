//! Core data models for the drift simulator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::environment::EnvironmentSample;

/// A geographic point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

/// Whether a waypoint is an operator vertex or a synthesized drift point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaypointKind {
    /// User-supplied vertex, never drift-adjusted
    Initial,
    /// Drift-adjusted point between two vertices
    Interpolated,
}

/// A point of the generated (realistic) trajectory.
///
/// The serialized shape is what downstream consumers (map overlays,
/// summary panels, exported mission files) read, so field names are fixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Waypoint {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: WaypointKind,
    /// Cosmetic clock, never used in calculations
    pub timestamp: DateTime<Utc>,
    pub lat: f64,
    pub lng: f64,
    pub temperature: f64,
    pub wind_speed: f64,
    pub wind_direction: f64,
    /// Simulated flight time since mission start
    pub elapsed_time_hours: f64,
}

impl Waypoint {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }

    pub fn environment(&self) -> EnvironmentSample {
        EnvironmentSample {
            temperature: self.temperature,
            wind_speed: self.wind_speed,
            wind_direction: self.wind_direction,
        }
    }

    pub fn is_initial(&self) -> bool {
        self.kind == WaypointKind::Initial
    }
}

/// Output of one path generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathResult {
    pub waypoints: Vec<Waypoint>,
    /// Every vertex and interpolation point at its undrifted position
    pub ideal_coords: Vec<Coordinate>,
    pub battery_depleted: bool,
    pub final_waypoint_index: usize,
}

/// Aggregate statistics for a generated mission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionSummary {
    /// Kilometers along the undrifted route
    pub total_ideal_distance: f64,
    /// Kilometers along the drift-adjusted route
    pub total_realistic_distance: f64,
    pub total_flight_time_hours: f64,
    pub min_temperature: f64,
    pub max_temperature: f64,
    pub min_wind_speed: f64,
    pub max_wind_speed: f64,
}

impl MissionSummary {
    /// Extra distance flown because of drift, in kilometers.
    pub fn drift_overhead_km(&self) -> f64 {
        self.total_realistic_distance - self.total_ideal_distance
    }

    pub fn total_flight_time_minutes(&self) -> f64 {
        self.total_flight_time_hours * 60.0
    }
}
