pub mod camera;
pub mod orbit_camera_switcher;
pub mod random_drifter;
pub mod transform;

use specs::{World, WorldExt};

/// Registers every component storage the stage's systems touch.
pub fn register_components(ecs: &mut World) {
    ecs.register::<transform::Transform>();
    ecs.register::<camera::Camera>();
    ecs.register::<random_drifter::RandomDrifter>();
    ecs.register::<orbit_camera_switcher::OrbitCameraSwitcher>();
}
