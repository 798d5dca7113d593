//! Simulation helpers for the CLI binaries.
//!
//! Provides named vertex sets to feed the path generator.

mod scenarios;

pub use scenarios::{
    create_equator_dash, create_random_route, create_short_hop, create_varanasi_loop,
    scenario_by_name, Scenario, SCENARIO_NAMES,
};
