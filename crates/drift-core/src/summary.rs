//! Mission accounting over a generated trajectory.

use crate::models::{Coordinate, MissionSummary, Waypoint};
use crate::spatial::path_length;

/// Reduce a trajectory and its ideal path to distance, time and extremes.
///
/// Fewer than 2 waypoints is tolerated and yields an all-zero summary.
/// Temperature and wind extremes include the first waypoint.
pub fn calculate_mission_summary(
    waypoints: &[Waypoint],
    ideal_coords: &[Coordinate],
) -> MissionSummary {
    let [first, .., last] = waypoints else {
        return MissionSummary::default();
    };

    let realistic: Vec<Coordinate> = waypoints.iter().map(Waypoint::coordinate).collect();

    let mut summary = MissionSummary {
        total_ideal_distance: path_length(ideal_coords),
        total_realistic_distance: path_length(&realistic),
        total_flight_time_hours: last.elapsed_time_hours,
        min_temperature: first.temperature,
        max_temperature: first.temperature,
        min_wind_speed: first.wind_speed,
        max_wind_speed: first.wind_speed,
    };

    for wp in &waypoints[1..] {
        summary.min_temperature = summary.min_temperature.min(wp.temperature);
        summary.max_temperature = summary.max_temperature.max(wp.temperature);
        summary.min_wind_speed = summary.min_wind_speed.min(wp.wind_speed);
        summary.max_wind_speed = summary.max_wind_speed.max(wp.wind_speed);
    }

    summary
}
