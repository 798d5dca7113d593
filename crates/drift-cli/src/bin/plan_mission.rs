//! CLI tool to generate a drift-adjusted mission and print it as JSON.
//!
//! Prints the mission summary by default; `--output waypoints` prints the
//! exportable waypoint array and `--output full` prints everything.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use drift_cli::{Config, RouteArgs};
use drift_core::{calculate_mission_summary, PathGenerator};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Output {
    /// Distance, time and environment extremes
    Summary,
    /// Waypoint array in export format
    Waypoints,
    /// Generation result plus summary
    Full,
}

/// Generate a wind-drift flight path for a route
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    #[command(flatten)]
    route: RouteArgs,

    /// What to print
    #[arg(long, value_enum, default_value_t = Output::Summary)]
    output: Output,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env()
            .add_directive("drift_core=info".parse()?))
        .init();

    let args = Args::parse();
    let config = Config::from_env();
    let vertices = args.route.vertices()?;
    let wind = args.route.wind();
    tracing::debug!(?config, ?wind, vertices = vertices.len(), "planning mission");

    let result = PathGenerator::new(config.path).generate(
        &vertices,
        &wind,
        args.route.max_flight_minutes,
    )?;
    if result.battery_depleted {
        tracing::warn!(
            final_waypoint = result.final_waypoint_index,
            "battery depleted before the route was completed"
        );
    }

    let summary = calculate_mission_summary(&result.waypoints, &result.ideal_coords);
    let json = match args.output {
        Output::Summary => serde_json::to_string_pretty(&summary)?,
        Output::Waypoints => serde_json::to_string_pretty(&result.waypoints)?,
        Output::Full => serde_json::to_string_pretty(&serde_json::json!({
            "result": result,
            "summary": summary,
        }))?,
    };
    println!("{json}");
    Ok(())
}
