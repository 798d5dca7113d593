//! Position sampling over a generated trajectory, for animated replay.

use serde::{Deserialize, Serialize};

use crate::models::{Coordinate, Waypoint};

/// One replay frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackFrame {
    pub elapsed_hours: f64,
    pub position: Coordinate,
    /// Index of the last waypoint reached at this time
    pub waypoint_index: usize,
}

/// Position of the drone at `elapsed_hours` into the mission.
///
/// Returns `None` for an empty trajectory or a time outside the flown range.
pub fn position_at(waypoints: &[Waypoint], elapsed_hours: f64) -> Option<Coordinate> {
    let mut index = 0;
    sample(waypoints, elapsed_hours, &mut index).map(|frame| frame.position)
}

fn sample(waypoints: &[Waypoint], t: f64, index: &mut usize) -> Option<PlaybackFrame> {
    let first = waypoints.first()?;
    let last = waypoints.last()?;
    if !t.is_finite() || t < first.elapsed_time_hours || t > last.elapsed_time_hours {
        return None;
    }

    while *index + 1 < waypoints.len() && waypoints[*index + 1].elapsed_time_hours <= t {
        *index += 1;
    }

    let current = &waypoints[*index];
    let Some(next) = waypoints.get(*index + 1) else {
        return Some(PlaybackFrame {
            elapsed_hours: t,
            position: current.coordinate(),
            waypoint_index: *index,
        });
    };

    let span = next.elapsed_time_hours - current.elapsed_time_hours;
    let position = if span <= 0.0 {
        current.coordinate()
    } else {
        let ratio = ((t - current.elapsed_time_hours) / span).clamp(0.0, 1.0);
        Coordinate {
            lat: current.lat + (next.lat - current.lat) * ratio,
            lng: current.lng + (next.lng - current.lng) * ratio,
        }
    };

    Some(PlaybackFrame {
        elapsed_hours: t,
        position,
        waypoint_index: *index,
    })
}

/// Fixed-step replay of a trajectory. The last frame always lands on the
/// final waypoint.
pub struct Playback<'a> {
    waypoints: &'a [Waypoint],
    step_hours: f64,
    frame: usize,
    cursor: usize,
    finished: bool,
}

impl<'a> Playback<'a> {
    /// A non-positive or non-finite step replays only the endpoints.
    pub fn new(waypoints: &'a [Waypoint], step_hours: f64) -> Self {
        Self {
            waypoints,
            step_hours,
            frame: 0,
            cursor: 0,
            finished: waypoints.is_empty(),
        }
    }

    pub fn duration_hours(&self) -> f64 {
        match (self.waypoints.first(), self.waypoints.last()) {
            (Some(first), Some(last)) => last.elapsed_time_hours - first.elapsed_time_hours,
            _ => 0.0,
        }
    }
}

impl Iterator for Playback<'_> {
    type Item = PlaybackFrame;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let start = self.waypoints.first()?.elapsed_time_hours;
        let end = self.waypoints.last()?.elapsed_time_hours;

        let step = if self.step_hours.is_finite() && self.step_hours > 0.0 {
            self.step_hours
        } else {
            f64::INFINITY
        };
        let mut t = if self.frame == 0 {
            start
        } else {
            start + step * self.frame as f64
        };
        if t >= end {
            t = end;
            self.finished = true;
        }
        self.frame += 1;

        sample(self.waypoints, t, &mut self.cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WaypointKind;
    use chrono::Utc;

    fn track() -> Vec<Waypoint> {
        [(0.0, 0.0, 0.0), (0.0, 1.0, 1.0), (1.0, 1.0, 3.0)]
            .iter()
            .enumerate()
            .map(|(i, &(lat, lng, hours))| Waypoint {
                id: i as u32,
                kind: WaypointKind::Initial,
                timestamp: Utc::now(),
                lat,
                lng,
                temperature: 20.0,
                wind_speed: 10.0,
                wind_direction: 0.0,
                elapsed_time_hours: hours,
            })
            .collect()
    }

    #[test]
    fn position_at_waypoint_times_is_exact() {
        let track = track();
        for wp in &track {
            assert_eq!(position_at(&track, wp.elapsed_time_hours), Some(wp.coordinate()));
        }
    }

    #[test]
    fn position_interpolates_by_time() {
        let track = track();
        let mid = position_at(&track, 2.0).unwrap();
        assert!((mid.lat - 0.5).abs() < 1e-12);
        assert!((mid.lng - 1.0).abs() < 1e-12);
    }

    #[test]
    fn position_outside_range_is_none() {
        let track = track();
        assert_eq!(position_at(&track, -0.1), None);
        assert_eq!(position_at(&track, 3.5), None);
        assert_eq!(position_at(&[], 0.0), None);
    }

    #[test]
    fn playback_ends_on_final_waypoint() {
        let track = track();
        let frames: Vec<_> = Playback::new(&track, 0.7).collect();
        // 0.0, 0.7, 1.4, 2.1, 2.8, then clamped to 3.0
        assert_eq!(frames.len(), 6);
        assert_eq!(frames[0].position, track[0].coordinate());
        let last = frames.last().unwrap();
        assert_eq!(last.elapsed_hours, 3.0);
        assert_eq!(last.position, track[2].coordinate());
        assert_eq!(last.waypoint_index, 2);
    }

    #[test]
    fn invalid_step_replays_endpoints() {
        let track = track();
        let frames: Vec<_> = Playback::new(&track, 0.0).collect();
        assert_eq!(frames.len(), 2);
        assert_eq!(Playback::new(&track, 1.0).duration_hours(), 3.0);
        assert_eq!(Playback::new(&[], 1.0).count(), 0);
    }
}
