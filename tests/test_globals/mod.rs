#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use specs::Entity;

use scene_rigs::components::transform::Transform;
use scene_rigs::game_loop::Stage;

pub const EPSILON: f32 = 1e-3;
pub const TEST_SEED: u64 = 0x5eed;

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(TEST_SEED)
}

pub fn assert_vec_close(actual: Vec3, expected: Vec3) {
    assert!(actual.abs_diff_eq(expected, EPSILON), "expected {:?}, got {:?}", expected, actual);
}

pub fn assert_close(actual: f32, expected: f32) {
    assert!((actual - expected).abs() < EPSILON, "expected {}, got {}", expected, actual);
}

pub fn transform_with_yaw(yaw: f32) -> Transform {
    let mut transform = Transform::default();
    transform.rotate_y(yaw);
    transform
}

/// Stage holding `count` cameras named `cam0..` and one rig that owns them all.
pub struct RigFixture {
    pub stage: Stage,
    pub cameras: Vec<Entity>,
    pub rig: Entity,
}

impl RigFixture {
    pub fn new(count: usize, orbit_velocity: f32) -> Self {
        let mut stage = Stage::new();
        let cameras: Vec<Entity> = (0..count)
            .map(|i| stage.spawn_camera(&format!("cam{}", i)))
            .collect();
        let rig = stage.spawn_orbit_rig(Transform::default(), cameras.clone(), orbit_velocity)
            .expect("rig with cameras should spawn");

        Self { stage, cameras, rig }
    }

    pub fn set_yaw(&mut self, yaw: f32) {
        assert!(self.stage.set_transform(self.rig, transform_with_yaw(yaw)));
    }

    /// Indices of enabled cameras within this rig.
    pub fn enabled_indices(&self) -> Vec<usize> {
        self.cameras.iter()
            .enumerate()
            .filter(|(_, camera)| self.stage.camera(**camera).map(|c| c.enabled).unwrap_or(false))
            .map(|(index, _)| index)
            .collect()
    }
}

/// Writes `contents` to a uniquely named file in the temp directory.
pub fn write_temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("scene_rigs_{}_{}", std::process::id(), name));
    fs::write(&path, contents).expect("temp file should be writable");
    path
}
