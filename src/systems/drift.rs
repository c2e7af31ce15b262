use crate::components::{random_drifter::RandomDrifter, transform::Transform};
use crate::globals::DeltaTime;

use specs::prelude::*;
use glam::Vec3;

#[cfg(feature = "trace")]
use tracing::trace;

/// One tick of every drifter: slide along its direction, then orbit the world origin.
pub struct DriftSystem;

impl<'a> System<'a> for DriftSystem {
    type SystemData = (
        Read<'a, DeltaTime>,
        ReadStorage<'a, RandomDrifter>,
        WriteStorage<'a, Transform>,
    );

    fn run(&mut self, (delta, drifters, mut transforms): Self::SystemData) {
        let delta = delta.seconds();

        for (drifter, transform) in (&drifters, &mut transforms).join() {
            transform.translate(drifter.step(delta));
            transform.rotate_around(Vec3::ZERO, Vec3::Y, drifter.spin_degrees());

            #[cfg(feature = "trace")]
            trace!("Drifter moved to: {:?}", transform.position);
        }
    }
}
