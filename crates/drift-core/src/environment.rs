//! Deterministic stand-in for a weather feed, plus operator wind overrides.

use serde::{Deserialize, Serialize};

use crate::models::Coordinate;

/// Temperature and wind reading at one point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentSample {
    /// Degrees Celsius
    pub temperature: f64,
    /// km/h
    pub wind_speed: f64,
    /// Degrees, 0 = north, clockwise
    pub wind_direction: f64,
}

/// Position-derived pseudo environment.
///
/// Pure function of the coordinate. Uses `%` on `f64`, which truncates
/// toward zero and keeps the sign of the dividend, so negative coordinates
/// produce negative remainders.
pub fn simulated_environment(lat: f64, lng: f64) -> EnvironmentSample {
    EnvironmentSample {
        temperature: 20.0 + (lat % 5.0) - (lng % 3.0),
        wind_speed: 10.0 + (lat % 3.0) + (lng % 2.0),
        wind_direction: ((lng + lat) % 360.0).floor(),
    }
}

/// Wind settings for a generation run.
///
/// With `use_custom_wind` set, the "playground" speed and direction replace
/// the sampled wind everywhere and the travel-time penalty applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindConfig {
    pub use_custom_wind: bool,
    /// km/h, expected 0-100
    pub wind_speed: f64,
    /// Degrees 0-360, 0 = north, clockwise
    pub wind_direction: f64,
}

impl WindConfig {
    /// Position-derived wind everywhere.
    pub fn sampled() -> Self {
        Self::default()
    }

    /// Constant operator wind.
    pub fn custom(wind_speed: f64, wind_direction: f64) -> Self {
        Self {
            use_custom_wind: true,
            wind_speed,
            wind_direction,
        }
    }

    /// Environment at a point after applying any override.
    /// Temperature always stays position-derived.
    pub fn resolve(&self, point: &Coordinate) -> EnvironmentSample {
        let sample = simulated_environment(point.lat, point.lng);
        if self.use_custom_wind {
            EnvironmentSample {
                wind_speed: self.wind_speed,
                wind_direction: self.wind_direction,
                ..sample
            }
        } else {
            sample
        }
    }

    /// Multiplier applied to travel time at the given wind speed.
    pub fn time_penalty_factor(&self, wind_speed: f64, penalty_divisor_kmh: f64) -> f64 {
        if self.use_custom_wind {
            1.0 + wind_speed / penalty_divisor_kmh
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_for_positive_coordinates() {
        let s = simulated_environment(25.5, 82.25);
        // 25.5 % 5 = 0.5, 82.25 % 3 = 1.25
        assert!((s.temperature - 19.25).abs() < 1e-9);
        // 25.5 % 3 = 1.5, 82.25 % 2 = 0.25
        assert!((s.wind_speed - 11.75).abs() < 1e-9);
        assert_eq!(s.wind_direction, 107.0);
    }

    #[test]
    fn remainder_keeps_sign_of_negative_coordinates() {
        let s = simulated_environment(-7.0, -4.0);
        // -7 % 5 = -2, -4 % 3 = -1 -> 20 - 2 + 1
        assert_eq!(s.temperature, 19.0);
        // -7 % 3 = -1, -4 % 2 = -0 -> 10 - 1 + 0
        assert_eq!(s.wind_speed, 9.0);
        // (-11) % 360 = -11
        assert_eq!(s.wind_direction, -11.0);
    }

    #[test]
    fn wind_direction_floors_fractional_negative_sums() {
        let s = simulated_environment(-0.25, -0.5);
        assert_eq!(s.wind_direction, -1.0);
    }

    #[test]
    fn wind_direction_wraps_large_sums() {
        let s = simulated_environment(80.0, 300.5);
        assert_eq!(s.wind_direction, 20.0);
    }

    #[test]
    fn sampling_is_deterministic() {
        let a = simulated_environment(25.2847, 83.0066);
        let b = simulated_environment(25.2847, 83.0066);
        assert_eq!(a, b);
    }

    #[test]
    fn custom_wind_keeps_position_temperature() {
        let point = Coordinate::new(25.5, 82.25);
        let resolved = WindConfig::custom(35.0, 270.0).resolve(&point);
        assert_eq!(resolved.wind_speed, 35.0);
        assert_eq!(resolved.wind_direction, 270.0);
        assert_eq!(
            resolved.temperature,
            simulated_environment(point.lat, point.lng).temperature
        );
    }

    #[test]
    fn penalty_only_applies_to_custom_wind() {
        assert_eq!(WindConfig::sampled().time_penalty_factor(40.0, 100.0), 1.0);
        let factor = WindConfig::custom(40.0, 0.0).time_penalty_factor(40.0, 100.0);
        assert!((factor - 1.4).abs() < 1e-12);
    }
}
