//! CLI configuration from environment.

use drift_core::PathConfig;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub path: PathConfig,
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = PathConfig::default();
        Self {
            path: PathConfig {
                cruise_speed_kmh: env::var("DRIFT_CRUISE_SPEED_KMH")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(defaults.cruise_speed_kmh),
                sample_spacing_km: env::var("DRIFT_SAMPLE_SPACING_KM")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(defaults.sample_spacing_km),
                timestamp_step_secs: env::var("DRIFT_TIMESTAMP_STEP_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(defaults.timestamp_step_secs),
                ..defaults
            },
        }
    }
}
