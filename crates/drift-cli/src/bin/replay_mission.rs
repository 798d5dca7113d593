//! CLI tool to replay a generated mission on a timer.
//!
//! Generates the whole trajectory up front, then prints one position per
//! tick. Interrupting the replay just drops the trajectory.

use anyhow::Result;
use clap::Parser;
use drift_cli::{frame_period, Config, RouteArgs};
use drift_core::{calculate_mission_summary, PathGenerator, Playback};
use tokio::time;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Replay a wind-drift flight path frame by frame
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    #[command(flatten)]
    route: RouteArgs,

    /// Simulated flight minutes between frames
    #[arg(long, default_value_t = 1.0)]
    frame_minutes: f64,

    /// Frames per second
    #[arg(long, default_value_t = 4.0)]
    rate: f64,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env()
            .add_directive("drift_core=info".parse()?))
        .init();

    let args = Args::parse();
    let period = frame_period(args.rate)?;

    let config = Config::from_env();
    let vertices = args.route.vertices()?;
    let result = PathGenerator::new(config.path).generate(
        &vertices,
        &args.route.wind(),
        args.route.max_flight_minutes,
    )?;
    let summary = calculate_mission_summary(&result.waypoints, &result.ideal_coords);

    println!("Replaying mission with {} waypoints", result.waypoints.len());
    println!(
        "  Ideal: {:.3} km, Realistic: {:.3} km, Flight time: {:.1} min",
        summary.total_ideal_distance,
        summary.total_realistic_distance,
        summary.total_flight_time_minutes()
    );
    println!();

    let mut interval = time::interval(period);
    let mut frames = 0u32;
    for frame in Playback::new(&result.waypoints, args.frame_minutes / 60.0) {
        interval.tick().await;
        frames += 1;
        println!(
            "[{:4}] t={:7.2} min  ({:.6}, {:.6})  wp #{}",
            frames,
            frame.elapsed_hours * 60.0,
            frame.position.lat,
            frame.position.lng,
            frame.waypoint_index
        );
    }

    if result.battery_depleted {
        println!("\nBattery depleted at waypoint #{}.", result.final_waypoint_index);
    } else {
        println!("\nReplay complete. {} frames.", frames);
    }
    Ok(())
}
