use specs::{Component, VecStorage};
use glam::Vec3;
use rand::Rng;

#[cfg(feature = "trace")]
use tracing::{instrument, debug};

/// Degrees the drifter orbits the world origin on every tick.
pub const DEFAULT_SPIN_DEGREES: f32 = 3.0;

/// Moves its entity along a fixed random direction and orbits it around the world up axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RandomDrifter {
    direction: Vec3,
    spin_degrees: f32,
}

impl Component for RandomDrifter {
    type Storage = VecStorage<Self>;
}

impl RandomDrifter {
    /// Samples each axis of the drift direction independently from `[0, 1)`.
    #[cfg_attr(feature = "trace", instrument(skip(rng)))]
    pub fn initialize<R: Rng>(rng: &mut R) -> Self {
        let direction = Vec3::new(rng.random::<f32>(), rng.random::<f32>(), rng.random::<f32>());

        #[cfg(feature = "trace")]
        debug!("Sampled drift direction: {:?}", direction);

        Self {
            direction,
            spin_degrees: DEFAULT_SPIN_DEGREES,
        }
    }

    pub fn with_spin(mut self, spin_degrees: f32) -> Self {
        self.spin_degrees = spin_degrees;
        self
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    pub fn spin_degrees(&self) -> f32 {
        self.spin_degrees
    }

    /// Local-frame offset for one frame of `delta` seconds.
    pub fn step(&self, delta: f32) -> Vec3 {
        self.direction * delta
    }
}
