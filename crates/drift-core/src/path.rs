//! Wind-drift path generation.
//!
//! Turns an ordered list of vertices into a dense, time-stamped trajectory.
//! Each step flies from wherever the wind left the drone to the next ideal
//! point, so drift compounds along a segment until the drone corrects back
//! onto the next vertex.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::environment::{EnvironmentSample, WindConfig};
use crate::models::{Coordinate, PathResult, Waypoint, WaypointKind};
use crate::spatial::{apply_drift, haversine_distance, interpolate_point};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    #[error("at least 2 vertices are required, got {count}")]
    TooFewVertices { count: usize },
    #[error("vertex {index} has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },
    #[error("custom wind speed and direction must be finite")]
    NonFiniteWind,
    #[error("max flight time must be finite, got {minutes}")]
    NonFiniteFlightTime { minutes: f64 },
    #[error("timestamp of waypoint {id} is out of range")]
    TimestampOutOfRange { id: u32 },
    #[error("invalid path config: {0}")]
    InvalidConfig(&'static str),
}

/// Largest accepted `timestamp_step_secs`: one waypoint per day.
pub const MAX_TIMESTAMP_STEP_SECS: i64 = 86_400;

/// Tunables for path generation. Defaults give 60 km/h cruise and one
/// interpolated point per 500 m.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathConfig {
    /// Nominal cruise speed used to turn distance into flight time
    pub cruise_speed_kmh: f64,
    /// One interpolated point is inserted per this many km of segment
    pub sample_spacing_km: f64,
    /// Custom wind slows the drone by `1 + speed / divisor`
    pub wind_penalty_divisor_kmh: f64,
    /// Cosmetic clock increment per emitted waypoint
    pub timestamp_step_secs: i64,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            cruise_speed_kmh: 60.0,
            sample_spacing_km: 0.5,
            wind_penalty_divisor_kmh: 100.0,
            timestamp_step_secs: 1,
        }
    }
}

impl PathConfig {
    pub fn validate(&self) -> Result<(), PathError> {
        if !(self.cruise_speed_kmh.is_finite() && self.cruise_speed_kmh > 0.0) {
            return Err(PathError::InvalidConfig("cruise speed must be positive"));
        }
        if !(self.sample_spacing_km.is_finite() && self.sample_spacing_km > 0.0) {
            return Err(PathError::InvalidConfig("sample spacing must be positive"));
        }
        if !(self.wind_penalty_divisor_kmh.is_finite() && self.wind_penalty_divisor_kmh > 0.0) {
            return Err(PathError::InvalidConfig("wind penalty divisor must be positive"));
        }
        if !(0..=MAX_TIMESTAMP_STEP_SECS).contains(&self.timestamp_step_secs) {
            return Err(PathError::InvalidConfig(
                "timestamp step must be between 0 and 86400 seconds",
            ));
        }
        Ok(())
    }
}

/// Generate a trajectory with default tunables and the current wall clock.
///
/// # Arguments
/// * `vertices` - Operator vertices, at least 2
/// * `wind` - Sampled or custom wind
/// * `max_flight_time_minutes` - Battery budget; `None` flies the whole route
pub fn generate_path(
    vertices: &[Coordinate],
    wind: &WindConfig,
    max_flight_time_minutes: Option<f64>,
) -> Result<PathResult, PathError> {
    PathGenerator::default().generate(vertices, wind, max_flight_time_minutes)
}

/// Path generator with configurable tunables and clock origin.
#[derive(Debug, Clone, Default)]
pub struct PathGenerator {
    config: PathConfig,
    start_time: Option<DateTime<Utc>>,
}

impl PathGenerator {
    pub fn new(config: PathConfig) -> Self {
        Self {
            config,
            start_time: None,
        }
    }

    /// Pin the timestamp of the first waypoint instead of reading the clock.
    pub fn with_start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = Some(start_time);
        self
    }

    pub fn config(&self) -> &PathConfig {
        &self.config
    }

    pub fn generate(
        &self,
        vertices: &[Coordinate],
        wind: &WindConfig,
        max_flight_time_minutes: Option<f64>,
    ) -> Result<PathResult, PathError> {
        self.config.validate()?;
        if vertices.len() < 2 {
            return Err(PathError::TooFewVertices {
                count: vertices.len(),
            });
        }
        if let Some(index) = vertices.iter().position(|v| !v.is_finite()) {
            return Err(PathError::NonFiniteCoordinate { index });
        }
        let wind_is_finite = wind.wind_speed.is_finite() && wind.wind_direction.is_finite();
        if wind.use_custom_wind && !wind_is_finite {
            return Err(PathError::NonFiniteWind);
        }
        if let Some(minutes) = max_flight_time_minutes.filter(|m| !m.is_finite()) {
            return Err(PathError::NonFiniteFlightTime { minutes });
        }

        let start_time = self.start_time.unwrap_or_else(Utc::now);
        let limit_hours = max_flight_time_minutes.map(|minutes| minutes / 60.0);
        let mut flight = FlightAccumulator::start(
            vertices[0],
            &self.config,
            wind,
            limit_hours,
            start_time,
        )?;

        'segments: for (segment, pair) in vertices.windows(2).enumerate() {
            let (from, to) = (&pair[0], &pair[1]);
            let segment_km = haversine_distance(from, to);
            let count = (segment_km / self.config.sample_spacing_km).floor() as usize;
            debug!(segment, segment_km, interpolated = count, "generating segment");

            for j in 1..=count {
                let t = j as f64 / (count + 1) as f64;
                let ideal = interpolate_point(from, to, t);
                if flight.advance(ideal, WaypointKind::Interpolated)? == StepOutcome::Depleted {
                    break 'segments;
                }
            }

            if flight.advance(*to, WaypointKind::Initial)? == StepOutcome::Depleted {
                break;
            }
        }

        let result = flight.finish();
        info!(
            waypoints = result.waypoints.len(),
            ideal_points = result.ideal_coords.len(),
            battery_depleted = result.battery_depleted,
            "path generated"
        );
        Ok(result)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FlightState {
    Airborne,
    Depleted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StepOutcome {
    Appended,
    Depleted,
}

/// Running state of one generation: id counter, clock, elapsed time and the
/// last realistic position.
struct FlightAccumulator<'a> {
    config: &'a PathConfig,
    wind: &'a WindConfig,
    limit_hours: Option<f64>,
    start_time: DateTime<Utc>,
    elapsed_hours: f64,
    last_realistic: Coordinate,
    state: FlightState,
    waypoints: Vec<Waypoint>,
    ideal_coords: Vec<Coordinate>,
}

impl<'a> FlightAccumulator<'a> {
    fn start(
        origin: Coordinate,
        config: &'a PathConfig,
        wind: &'a WindConfig,
        limit_hours: Option<f64>,
        start_time: DateTime<Utc>,
    ) -> Result<Self, PathError> {
        let mut flight = Self {
            config,
            wind,
            limit_hours,
            start_time,
            elapsed_hours: 0.0,
            last_realistic: origin,
            state: FlightState::Airborne,
            waypoints: Vec::new(),
            ideal_coords: vec![origin],
        };
        let env = wind.resolve(&origin);
        flight.push(origin, WaypointKind::Initial, env)?;
        Ok(flight)
    }

    /// Fly from the last realistic point toward `ideal`.
    ///
    /// Interpolated points are drifted by the wind over the step; vertices
    /// are emitted exactly. Nothing is appended once the budget is exceeded.
    fn advance(
        &mut self,
        ideal: Coordinate,
        kind: WaypointKind,
    ) -> Result<StepOutcome, PathError> {
        if self.state == FlightState::Depleted {
            return Ok(StepOutcome::Depleted);
        }
        self.ideal_coords.push(ideal);

        let env = self.wind.resolve(&ideal);
        let step_km = haversine_distance(&self.last_realistic, &ideal);
        let penalty = self
            .wind
            .time_penalty_factor(env.wind_speed, self.config.wind_penalty_divisor_kmh);
        let step_hours = step_km / self.config.cruise_speed_kmh * penalty;
        let elapsed_hours = self.elapsed_hours + step_hours;

        if let Some(limit_hours) = self.limit_hours {
            if elapsed_hours > limit_hours {
                debug!(
                    elapsed_hours,
                    limit_hours,
                    last_waypoint = self.waypoints.len() - 1,
                    "battery depleted"
                );
                self.state = FlightState::Depleted;
                return Ok(StepOutcome::Depleted);
            }
        }
        self.elapsed_hours = elapsed_hours;

        let point = match kind {
            WaypointKind::Interpolated => {
                apply_drift(&ideal, env.wind_speed, env.wind_direction, step_hours)
            }
            WaypointKind::Initial => ideal,
        };
        self.last_realistic = point;
        self.push(point, kind, env)?;
        Ok(StepOutcome::Appended)
    }

    fn push(
        &mut self,
        point: Coordinate,
        kind: WaypointKind,
        env: EnvironmentSample,
    ) -> Result<(), PathError> {
        let id = self.waypoints.len() as u32;
        let timestamp = i64::from(id)
            .checked_mul(self.config.timestamp_step_secs)
            .and_then(TimeDelta::try_seconds)
            .and_then(|offset| self.start_time.checked_add_signed(offset))
            .ok_or(PathError::TimestampOutOfRange { id })?;
        self.waypoints.push(Waypoint {
            id,
            kind,
            timestamp,
            lat: point.lat,
            lng: point.lng,
            temperature: env.temperature,
            wind_speed: env.wind_speed,
            wind_direction: env.wind_direction,
            elapsed_time_hours: self.elapsed_hours,
        });
        Ok(())
    }

    fn finish(self) -> PathResult {
        // The origin is pushed in `start`, so there is always a last index.
        let final_waypoint_index = self.waypoints.len() - 1;
        PathResult {
            waypoints: self.waypoints,
            ideal_coords: self.ideal_coords,
            battery_depleted: self.state == FlightState::Depleted,
            final_waypoint_index,
        }
    }
}
