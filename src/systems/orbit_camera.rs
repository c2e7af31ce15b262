use crate::components::{camera::Camera, orbit_camera_switcher::OrbitCameraSwitcher, transform::Transform};
use crate::globals::DeltaTime;

use specs::prelude::*;

#[cfg(feature = "trace")]
use tracing::{debug, warn};

/// One tick of every camera rig: advance the orbit, then enable the camera covering the new yaw
/// and disable the rest of the rig's cameras.
pub struct OrbitCameraSystem;

impl<'a> System<'a> for OrbitCameraSystem {
    type SystemData = (
        Read<'a, DeltaTime>,
        WriteStorage<'a, OrbitCameraSwitcher>,
        WriteStorage<'a, Transform>,
        WriteStorage<'a, Camera>,
    );

    fn run(&mut self, (delta, mut rigs, mut transforms, mut cameras): Self::SystemData) {
        let delta = delta.seconds();

        for (rig, transform) in (&mut rigs, &mut transforms).join() {
            transform.rotate_y(rig.orbit_velocity() * delta);
            let index = rig.index_for_yaw(transform.yaw_degrees());

            for (i, handle) in rig.cameras().iter().enumerate() {
                match cameras.get_mut(*handle) {
                    Some(camera) => camera.enabled = i == index,
                    None => {
                        #[cfg(feature = "trace")]
                        warn!("Camera handle {:?} has no camera component. Skipping it.", handle);
                    }
                }
            }

            #[cfg(feature = "trace")]
            {
                if rig.active_index() != Some(index) {
                    debug!("Switched to camera {} at yaw {}", index, transform.yaw_degrees());
                }
            }

            rig.set_active(index);
        }
    }
}
