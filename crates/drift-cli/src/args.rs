//! Route and wind flags shared by the CLI binaries.

use anyhow::{anyhow, bail, Context, Result};
use drift_core::{Coordinate, WindConfig};

use crate::sim::{scenario_by_name, SCENARIO_NAMES};

const DEFAULT_SCENARIO: &str = "varanasi-loop";

#[derive(clap::Args, Debug, Clone)]
pub struct RouteArgs {
    /// Named route (varanasi-loop, equator-dash, short-hop, random)
    #[arg(long, conflicts_with = "points")]
    pub scenario: Option<String>,

    /// Route vertex as LAT,LNG; repeat once per vertex
    #[arg(long = "point", value_parser = parse_point, allow_hyphen_values = true)]
    pub points: Vec<Coordinate>,

    /// Constant wind speed in km/h (enables custom wind)
    #[arg(long)]
    pub wind_speed: Option<f64>,

    /// Constant wind direction in degrees, 0 = north (enables custom wind)
    #[arg(long)]
    pub wind_direction: Option<f64>,

    /// Battery budget in minutes
    #[arg(long)]
    pub max_flight_minutes: Option<f64>,
}

impl RouteArgs {
    /// Vertices from `--point` flags, else the named or default scenario.
    pub fn vertices(&self) -> Result<Vec<Coordinate>> {
        if !self.points.is_empty() {
            return Ok(self.points.clone());
        }
        let name = self.scenario.as_deref().unwrap_or(DEFAULT_SCENARIO);
        let scenario = scenario_by_name(name).ok_or_else(|| {
            anyhow!(
                "unknown scenario '{}', expected one of: {}",
                name,
                SCENARIO_NAMES.join(", ")
            )
        })?;
        Ok(scenario.vertices)
    }

    pub fn wind(&self) -> WindConfig {
        if self.wind_speed.is_some() || self.wind_direction.is_some() {
            WindConfig::custom(
                self.wind_speed.unwrap_or(0.0),
                self.wind_direction.unwrap_or(0.0),
            )
        } else {
            WindConfig::sampled()
        }
    }
}

/// Parse a `LAT,LNG` pair in decimal degrees.
pub fn parse_point(raw: &str) -> Result<Coordinate> {
    let (lat, lng) = raw
        .split_once(',')
        .with_context(|| format!("expected LAT,LNG but got '{raw}'"))?;
    let lat: f64 = lat
        .trim()
        .parse()
        .with_context(|| format!("invalid latitude in '{raw}'"))?;
    let lng: f64 = lng
        .trim()
        .parse()
        .with_context(|| format!("invalid longitude in '{raw}'"))?;
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
        bail!("coordinate out of range: '{raw}'");
    }
    Ok(Coordinate::new(lat, lng))
}
