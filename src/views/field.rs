// src/views/field.rs
//
// The drifting mesh instances and their scroll choreography.

use crate::animation::{EasingType, PositionTween, Trajectory};
use crate::models::{MeshData, ModelBundle};
use nannou::prelude::*;
use rand::Rng;
use std::sync::Arc;

/// Named variants expected in a bundle: potato1..potato12.
pub const VARIANT_COUNT: usize = 12;

/// Multiplier converting scroll percent into per-object path progress.
pub const PROGRESS_RATE: f32 = 1.5;

/// Per-frame rotation rate bound, each axis drawn uniformly in +/- this.
const ROTATION_RATE: f32 = 0.01;

pub struct Drifter {
    pub name: String,
    pub mesh: Arc<MeshData>,
    pub tween: PositionTween,
    pub position: Point2,
    pub rotation: Vec3,
    pub rotation_rate: Vec3,
    pub trajectory: Trajectory,
    pub scroll_offset: f32,
}

impl Drifter {
    /// Progress along the trajectory for a given scroll percent,
    /// staggered by this drifter's offset.
    pub fn path_progress(&self, scroll_percent: f32) -> f32 {
        ((scroll_percent - self.scroll_offset) * PROGRESS_RATE).clamp(0.0, 1.0)
    }
}

pub struct DrifterField {
    drifters: Vec<Drifter>,
    mesh_scale: f32,
    color: Rgb,
}

impl DrifterField {
    pub fn empty(mesh_scale: f32, color: Rgb) -> Self {
        Self {
            drifters: Vec::new(),
            mesh_scale,
            color,
        }
    }

    /// Build the field from a loaded bundle. Missing variant names are
    /// skipped; offsets keep their name-index spacing regardless.
    pub fn populate(
        bundle: &ModelBundle,
        trajectories: &[Trajectory],
        mesh_scale: f32,
        color: Rgb,
        rng: &mut impl Rng,
    ) -> Self {
        let mut drifters = Vec::new();
        for i in 1..=VARIANT_COUNT {
            let name = format!("potato{}", i);
            let mesh = match bundle.mesh(&name) {
                Some(mesh) => mesh,
                None => {
                    log::debug!("bundle has no mesh named '{}', skipping", name);
                    continue;
                }
            };

            // with replacement: several drifters may share a path
            let trajectory = trajectories[rng.gen_range(0..trajectories.len())];
            let rotation_rate = vec3(
                rng.gen_range(-ROTATION_RATE..ROTATION_RATE),
                rng.gen_range(-ROTATION_RATE..ROTATION_RATE),
                rng.gen_range(-ROTATION_RATE..ROTATION_RATE),
            );

            drifters.push(Drifter {
                name,
                mesh,
                tween: PositionTween::settled(trajectory.start),
                position: trajectory.start,
                rotation: Vec3::ZERO,
                rotation_rate,
                trajectory,
                scroll_offset: (i - 1) as f32 / (VARIANT_COUNT - 1) as f32,
            });
        }

        log::info!("populated field with {} drifter(s)", drifters.len());
        Self {
            drifters,
            mesh_scale,
            color,
        }
    }

    /// Object pass of the scroll mapper: retarget every drifter's tween
    /// at its interpolated trajectory position for the new percent.
    pub fn apply_scroll(&mut self, scroll_percent: f32, tween_duration: f32, now: f32) {
        for drifter in &mut self.drifters {
            let progress = drifter.path_progress(scroll_percent);
            let target = drifter.trajectory.point_at(progress);
            drifter
                .tween
                .retarget(target, tween_duration, EasingType::EaseOut, now);
        }
    }

    /// Per-frame tick: fixed rotation advance and tween sampling.
    pub fn update(&mut self, now: f32) {
        for drifter in &mut self.drifters {
            drifter.rotation += drifter.rotation_rate;
            drifter.position = drifter.tween.sample(now);
        }
    }

    pub fn draw(&self, draw: &Draw) {
        for drifter in &self.drifters {
            draw.mesh()
                .tris(drifter.mesh.tris(self.mesh_scale))
                .x_y(drifter.position.x, drifter.position.y)
                .x_radians(drifter.rotation.x)
                .y_radians(drifter.rotation.y)
                .z_radians(drifter.rotation.z)
                .color(self.color);
        }
    }

    pub fn drifters(&self) -> &[Drifter] {
        &self.drifters
    }

    pub fn len(&self) -> usize {
        self.drifters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drifters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::generate_trajectories;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn bundle_json(names: &[String]) -> String {
        let meshes: Vec<String> = names
            .iter()
            .map(|name| {
                format!(
                    r#"{{"name":"{}","vertices":[[0.0,0.1,0.0],[0.1,-0.1,0.0],[-0.1,-0.1,0.1]],"triangles":[[0,1,2]]}}"#,
                    name
                )
            })
            .collect();
        format!(r#"{{"meshes":[{}]}}"#, meshes.join(","))
    }

    fn full_bundle() -> ModelBundle {
        let names: Vec<String> = (1..=12).map(|i| format!("potato{}", i)).collect();
        ModelBundle::from_json(&bundle_json(&names)).unwrap()
    }

    fn test_field(bundle: &ModelBundle) -> DrifterField {
        let mut rng = StdRng::seed_from_u64(5);
        let trajectories = generate_trajectories(vec2(1280.0, 900.0), &mut rng);
        DrifterField::populate(bundle, &trajectories, 1000.0, rgb(0.7, 0.6, 0.5), &mut rng)
    }

    #[test]
    fn test_populate_finds_all_twelve() {
        let field = test_field(&full_bundle());
        assert_eq!(field.len(), 12);
    }

    #[test]
    fn test_missing_variant_is_skipped() {
        let names: Vec<String> = (1..=12)
            .filter(|&i| i != 5)
            .map(|i| format!("potato{}", i))
            .collect();
        let bundle = ModelBundle::from_json(&bundle_json(&names)).unwrap();
        let field = test_field(&bundle);

        assert_eq!(field.len(), 11);
        // offsets keep name-index spacing: potato6 is still 5/11
        let sixth = field
            .drifters()
            .iter()
            .find(|d| d.name == "potato6")
            .unwrap();
        assert!((sixth.scroll_offset - 5.0 / 11.0).abs() < 1e-6);
    }

    #[test]
    fn test_offsets_are_monotone_in_creation_order() {
        let field = test_field(&full_bundle());
        let offsets: Vec<f32> = field.drifters().iter().map(|d| d.scroll_offset).collect();
        assert_eq!(offsets[0], 0.0);
        assert_eq!(offsets[11], 1.0);
        for pair in offsets.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_drifters_start_on_their_trajectory() {
        let field = test_field(&full_bundle());
        for drifter in field.drifters() {
            assert_eq!(drifter.position, drifter.trajectory.start);
        }
    }

    #[test]
    fn test_scroll_zero_targets_every_start() {
        let mut field = test_field(&full_bundle());
        field.apply_scroll(0.0, 0.75, 1.0);
        for drifter in field.drifters() {
            assert_eq!(drifter.tween.target(), drifter.trajectory.start);
        }
    }

    #[test]
    fn test_scroll_one_sends_offset_zero_to_the_end() {
        let mut field = test_field(&full_bundle());
        field.apply_scroll(1.0, 0.75, 1.0);

        let first = &field.drifters()[0];
        assert_eq!(first.path_progress(1.0), 1.0); // 1.5 clamped
        assert_eq!(first.tween.target(), first.trajectory.end);

        // the last drifter (offset 1.0) has not started moving
        let last = &field.drifters()[11];
        assert_eq!(last.path_progress(1.0), 0.0);
        assert_eq!(last.tween.target(), last.trajectory.start);
    }

    #[test]
    fn test_update_advances_rotation_per_frame() {
        let mut field = test_field(&full_bundle());
        let rates: Vec<Vec3> = field.drifters().iter().map(|d| d.rotation_rate).collect();

        field.update(0.0);
        field.update(0.0);
        for (drifter, rate) in field.drifters().iter().zip(rates) {
            let expected = rate * 2.0;
            assert!((drifter.rotation - expected).length() < 1e-6);
        }
    }
}
