pub mod environment;
pub mod models;
pub mod path;
pub mod playback;
pub mod spatial;
pub mod summary;

pub use environment::{simulated_environment, EnvironmentSample, WindConfig};
pub use models::{Coordinate, MissionSummary, PathResult, Waypoint, WaypointKind};
pub use path::{
    generate_path, PathConfig, PathError, PathGenerator, MAX_TIMESTAMP_STEP_SECS,
};
pub use playback::{position_at, Playback, PlaybackFrame};
pub use spatial::{apply_drift, haversine_distance, interpolate_point, path_length};
pub use summary::calculate_mission_summary;
