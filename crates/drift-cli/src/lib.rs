//! Drift CLI - Command line tools for the drone drift simulator.
//!
//! This crate provides the simulator binaries:
//! - plan_mission: generate a trajectory and print it or its summary as JSON
//! - replay_mission: replay a generated trajectory on a timer

pub mod args;
pub mod config;
pub mod replay;
pub mod sim;

pub use args::{parse_point, RouteArgs};
pub use config::Config;
pub use replay::frame_period;
