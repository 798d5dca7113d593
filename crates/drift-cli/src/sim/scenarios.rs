//! Pre-defined vertex sets for mission planning.

use drift_core::Coordinate;
use rand::Rng;

const RANDOM_CENTER_LAT: f64 = 25.2900;
const RANDOM_CENTER_LNG: f64 = 82.9900;
const RANDOM_RADIUS_DEG: f64 = 0.03; // approx 3km
const RANDOM_VERTEX_COUNT: usize = 4;

pub const SCENARIO_NAMES: [&str; 4] = ["varanasi-loop", "equator-dash", "short-hop", "random"];

/// A named route of operator vertices.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: String,
    pub vertices: Vec<Coordinate>,
}

/// Closed triangle over Varanasi, back to the starting ghat.
pub fn create_varanasi_loop() -> Scenario {
    Scenario {
        name: "varanasi-loop".to_string(),
        vertices: vec![
            Coordinate::new(25.2630, 82.9922),
            Coordinate::new(25.3176, 82.9739),
            Coordinate::new(25.2847, 83.0066),
            Coordinate::new(25.2630, 82.9922),
        ],
    }
}

/// ~1112 km along the equator; exhausts any minute-scale battery.
pub fn create_equator_dash() -> Scenario {
    Scenario {
        name: "equator-dash".to_string(),
        vertices: vec![Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 10.0)],
    }
}

/// ~300 m hop, shorter than the interpolation spacing.
pub fn create_short_hop() -> Scenario {
    Scenario {
        name: "short-hop".to_string(),
        vertices: vec![Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 0.0027)],
    }
}

/// Random vertices scattered around a centre point.
pub fn create_random_route<R: Rng>(
    rng: &mut R,
    center: Coordinate,
    radius_deg: f64,
    count: usize,
) -> Scenario {
    let vertices = (0..count.max(2))
        .map(|_| Coordinate {
            lat: center.lat + rng.random_range(-radius_deg..radius_deg),
            lng: center.lng + rng.random_range(-radius_deg..radius_deg),
        })
        .collect();

    Scenario {
        name: "random".to_string(),
        vertices,
    }
}

/// Look up a scenario by its CLI name.
pub fn scenario_by_name(name: &str) -> Option<Scenario> {
    match name {
        "varanasi-loop" => Some(create_varanasi_loop()),
        "equator-dash" => Some(create_equator_dash()),
        "short-hop" => Some(create_short_hop()),
        "random" => Some(create_random_route(
            &mut rand::rng(),
            Coordinate::new(RANDOM_CENTER_LAT, RANDOM_CENTER_LNG),
            RANDOM_RADIUS_DEG,
            RANDOM_VERTEX_COUNT,
        )),
        _ => None,
    }
}
