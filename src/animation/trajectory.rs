// src/animation/trajectory.rs
//
// The fixed pool of candidate drift paths.
// Coordinates are window-centered (nannou convention, y up).

use nannou::prelude::*;
use rand::Rng;

/// How far beyond the horizontal window bounds a path begins and ends.
pub const OFFSCREEN_MARGIN: f32 = 250.0;

/// Number of equal-height vertical bands the window is partitioned into.
pub const ZONE_COUNT: u32 = 3;

/// A straight drift path. Immutable once generated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trajectory {
    pub start: Point2,
    pub end: Point2,
}

impl Trajectory {
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Position at `progress` in [0,1], linearly interpolated start -> end.
    pub fn point_at(&self, progress: f32) -> Point2 {
        self.start + (self.end - self.start) * progress
    }
}

/// The [min_y, max_y] band of one zone for the given window height.
pub fn zone_band(zone: u32, window_height: f32) -> (f32, f32) {
    let zone_height = window_height / ZONE_COUNT as f32;
    let min_y = zone as f32 * zone_height - window_height / 2.0;
    (min_y, min_y + zone_height)
}

fn random_y_in_zone(zone: u32, window_height: f32, rng: &mut impl Rng) -> f32 {
    let (min_y, max_y) = zone_band(zone, window_height);
    rng.gen_range(min_y..max_y)
}

/// Generate the candidate path pool for a window of the given dimensions.
///
/// Always yields twelve paths: per zone a left-to-right and a
/// right-to-left horizontal, four diagonals joining the outer zones to
/// the middle one, and two near-vertical paths through a narrow
/// central band.
pub fn generate_trajectories(window: Vec2, rng: &mut impl Rng) -> Vec<Trajectory> {
    let mut trajectories = Vec::with_capacity(12);
    let start_x = -(window.x / 2.0 + OFFSCREEN_MARGIN);
    let end_x = window.x / 2.0 + OFFSCREEN_MARGIN;

    // Horizontal paths, both directions per zone
    for zone in 0..ZONE_COUNT {
        trajectories.push(Trajectory::new(
            pt2(start_x, random_y_in_zone(zone, window.y, rng)),
            pt2(end_x, random_y_in_zone(zone, window.y, rng)),
        ));
        trajectories.push(Trajectory::new(
            pt2(end_x, random_y_in_zone(zone, window.y, rng)),
            pt2(start_x, random_y_in_zone(zone, window.y, rng)),
        ));
    }

    // Diagonals from the outer zones into the middle zone
    for outer_zone in [0u32, 2] {
        trajectories.push(Trajectory::new(
            pt2(start_x, random_y_in_zone(outer_zone, window.y, rng)),
            pt2(end_x, random_y_in_zone(1, window.y, rng)),
        ));
        trajectories.push(Trajectory::new(
            pt2(end_x, random_y_in_zone(outer_zone, window.y, rng)),
            pt2(start_x, random_y_in_zone(1, window.y, rng)),
        ));
    }

    // Near-vertical paths through the central band
    let top = window.y / 2.0;
    let bottom = -window.y / 2.0;
    trajectories.push(Trajectory::new(
        pt2(rng.gen_range(-100.0..100.0), top),
        pt2(rng.gen_range(-50.0..50.0), bottom),
    ));
    trajectories.push(Trajectory::new(
        pt2(rng.gen_range(-100.0..100.0), bottom),
        pt2(rng.gen_range(-50.0..50.0), top),
    ));

    trajectories
}
