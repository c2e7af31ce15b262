#[cfg(feature = "trace")]
use tracing::{instrument, debug, error, trace};

use specs::{Builder, Dispatcher, DispatcherBuilder, Entity, World, WorldExt};
use rand::Rng;
use thiserror::Error;

use crate::components::{register_components, camera::Camera, random_drifter::RandomDrifter, transform::Transform};
use crate::components::orbit_camera_switcher::{OrbitCameraSwitcher, RigError};
use crate::globals::DeltaTime;
use crate::systems::{DRIFT_SYSTEM, ORBIT_CAMERA_SYSTEM, drift::DriftSystem, orbit_camera::OrbitCameraSystem};
use crate::game_loop::StageError::{InvalidDeltaError, RigCreationError};

/// Host side of the per-frame behaviours. Owns the world and calls every system once per tick.
pub struct Stage {
    ecs: World,
    dispatcher: Dispatcher<'static, 'static>,
    frame_count: u64,
}

impl Default for Stage {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage {
    #[cfg_attr(feature = "trace", instrument)]
    pub fn new() -> Self {
        #[cfg(feature = "trace")]
        trace!("ENTER: Stage::new");

        let mut ecs = World::new();
        register_components(&mut ecs);
        ecs.insert(DeltaTime::default());

        let mut dispatcher = DispatcherBuilder::new()
            .with(DriftSystem, DRIFT_SYSTEM, &[])
            .with(OrbitCameraSystem, ORBIT_CAMERA_SYSTEM, &[])
            .build();
        dispatcher.setup(&mut ecs);

        #[cfg(feature = "trace")]
        trace!("EXIT: Stage::new");

        Self {
            ecs,
            dispatcher,
            frame_count: 0,
        }
    }

    pub fn world(&self) -> &World {
        &self.ecs
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    #[cfg_attr(feature = "trace", instrument(skip(self)))]
    pub fn spawn_camera(&mut self, name: &str) -> Entity {
        let entity = self.ecs.create_entity()
            .with(Camera::new(name))
            .build();

        #[cfg(feature = "trace")]
        debug!("Spawned camera {} as {:?}", name, entity);

        entity
    }

    #[cfg_attr(feature = "trace", instrument(skip(self, rng)))]
    pub fn spawn_drifter<R: Rng>(&mut self, transform: Transform, rng: &mut R) -> Entity {
        self.spawn_with_drifter(transform, RandomDrifter::initialize(rng))
    }

    /// Spawns a drifter whose direction has already been sampled.
    #[cfg_attr(feature = "trace", instrument(skip(self)))]
    pub fn spawn_with_drifter(&mut self, transform: Transform, drifter: RandomDrifter) -> Entity {
        let entity = self.ecs.create_entity()
            .with(transform)
            .with(drifter)
            .build();

        #[cfg(feature = "trace")]
        debug!("Spawned drifter {:?} heading {:?}", entity, drifter.direction());

        entity
    }

    #[cfg_attr(feature = "trace", instrument(skip(self)))]
    pub fn spawn_orbit_rig(&mut self, transform: Transform, cameras: Vec<Entity>, orbit_velocity: f32) -> Result<Entity, StageError> {
        let rig = OrbitCameraSwitcher::initialize(cameras, orbit_velocity)
            .map_err(|e| {
                #[cfg(feature = "trace")]
                error!("Failed to initialize camera rig: {}", e);

                RigCreationError { source: e }
            })?;

        let entity = self.ecs.create_entity()
            .with(transform)
            .with(rig)
            .build();

        #[cfg(feature = "trace")]
        debug!("Spawned camera rig {:?}", entity);

        Ok(entity)
    }

    /// Runs one frame with `delta` seconds elapsed since the previous one.
    #[cfg_attr(feature = "trace", instrument(skip(self)))]
    pub fn tick(&mut self, delta: f32) -> Result<(), StageError> {
        if !delta.is_finite() || delta < 0.0 {
            #[cfg(feature = "trace")]
            error!("Refusing to tick with delta: {}", delta);

            return Err(InvalidDeltaError { delta })
        }

        *self.ecs.write_resource::<DeltaTime>() = DeltaTime(delta);
        self.dispatcher.dispatch(&self.ecs);
        self.ecs.maintain();
        self.frame_count += 1;

        #[cfg(feature = "trace")]
        trace!("Finished frame {}", self.frame_count);

        Ok(())
    }

    /// Runs `frames` ticks of a fixed `delta`.
    #[cfg_attr(feature = "trace", instrument(skip(self)))]
    pub fn run(&mut self, frames: u32, delta: f32) -> Result<(), StageError> {
        for _ in 0..frames {
            self.tick(delta)?;
        }

        Ok(())
    }

    pub fn transform(&self, entity: Entity) -> Option<Transform> {
        self.ecs.read_storage::<Transform>().get(entity).copied()
    }

    /// Replaces an entity's transform. Returns false if the entity has none.
    pub fn set_transform(&mut self, entity: Entity, transform: Transform) -> bool {
        match self.ecs.write_storage::<Transform>().get_mut(entity) {
            Some(current) => {
                *current = transform;
                true
            },
            None => false
        }
    }

    pub fn camera(&self, entity: Entity) -> Option<Camera> {
        self.ecs.read_storage::<Camera>().get(entity).cloned()
    }

    pub fn drifter(&self, entity: Entity) -> Option<RandomDrifter> {
        self.ecs.read_storage::<RandomDrifter>().get(entity).copied()
    }

    pub fn rig(&self, entity: Entity) -> Option<OrbitCameraSwitcher> {
        self.ecs.read_storage::<OrbitCameraSwitcher>().get(entity).cloned()
    }

    /// Cameras currently enabled, in no particular order.
    pub fn enabled_cameras(&self) -> Vec<Entity> {
        use specs::Join;

        let entities = self.ecs.entities();
        let cameras = self.ecs.read_storage::<Camera>();
        let enabled = (&*entities, &cameras).join()
            .filter(|(_, camera)| camera.enabled)
            .map(|(entity, _)| entity)
            .collect();

        return enabled
    }
}

#[derive(Error, Debug)]
pub enum StageError {
    #[error("Frame delta must be finite and non-negative, got: {delta}")]
    InvalidDeltaError {
        delta: f32
    },
    #[error("Failed to create camera rig")]
    RigCreationError {
        source: RigError
    },
    #[error("Camera rig refers to unknown camera: {name}")]
    UnknownCameraError {
        name: String
    },
    #[error("Scene declares camera more than once: {name}")]
    DuplicateCameraError {
        name: String
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn tick_rejects_negative_and_nan_deltas() {
        let mut stage = Stage::new();
        assert!(matches!(stage.tick(-0.1), Err(InvalidDeltaError { .. })));
        assert!(matches!(stage.tick(f32::NAN), Err(InvalidDeltaError { .. })));
        assert!(matches!(stage.tick(f32::INFINITY), Err(InvalidDeltaError { .. })));
        assert_eq!(stage.frame_count(), 0);
    }

    #[test]
    fn tick_publishes_delta_to_world() {
        let mut stage = Stage::new();
        assert_eq!(*stage.world().read_resource::<DeltaTime>(), DeltaTime(0.0));

        stage.tick(0.25).unwrap();
        assert_eq!(*stage.world().read_resource::<DeltaTime>(), DeltaTime(0.25));
        assert_eq!(stage.frame_count(), 1);
    }

    #[test]
    fn run_counts_frames() {
        let mut stage = Stage::new();
        stage.spawn_drifter(Transform::default(), &mut StdRng::seed_from_u64(3));
        stage.run(5, 0.016).unwrap();
        assert_eq!(stage.frame_count(), 5);
    }

    #[test]
    fn rig_without_cameras_fails_at_spawn() {
        let mut stage = Stage::new();
        let result = stage.spawn_orbit_rig(Transform::default(), Vec::new(), 30.0);
        assert!(matches!(result, Err(RigCreationError { source: RigError::NoCameras })));
    }

    #[test]
    fn set_transform_requires_existing_transform() {
        let mut stage = Stage::new();
        let camera = stage.spawn_camera("front");
        assert!(!stage.set_transform(camera, Transform::default()));
        assert_eq!(stage.camera(camera), Some(Camera::new("front")));
    }
}
