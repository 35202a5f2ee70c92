pub mod trajectory;
pub mod tween;

pub use trajectory::{generate_trajectories, zone_band, Trajectory, OFFSCREEN_MARGIN, ZONE_COUNT};
pub use tween::{EasingType, PositionTween};
