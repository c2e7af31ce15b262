use std::collections::HashMap;

use serde::Deserialize;
use specs::Entity;
use rand::rngs::StdRng;
use rand::SeedableRng;
use anyhow::Result;

#[cfg(feature = "trace")]
use tracing::{instrument, debug, error, trace};

use crate::components::orbit_camera_switcher::DEFAULT_ORBIT_VELOCITY;
use crate::components::random_drifter::{RandomDrifter, DEFAULT_SPIN_DEGREES};
use crate::components::transform::{Transform, TransformJSON};
use crate::game_loop::{Stage, StageError::{DuplicateCameraError, UnknownCameraError}};
use crate::load::{load_deserializable_from_file, load_deserializable_from_json, JSONLoad};

pub const SCENE_LOAD_ID: &str = "scene";

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct SceneConfig {
    /// Seeds drift directions. Unseeded scenes draw from the OS.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub cameras: Vec<String>,
    #[serde(default)]
    pub drifters: Vec<DrifterConfig>,
    #[serde(default)]
    pub camera_rigs: Vec<CameraRigConfig>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct DrifterConfig {
    #[serde(default)]
    pub transform: TransformJSON,
    #[serde(default = "default_spin")]
    pub spin_degrees: f32,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct CameraRigConfig {
    #[serde(default)]
    pub transform: TransformJSON,
    #[serde(default = "default_orbit_velocity")]
    pub orbit_velocity: f32,
    pub cameras: Vec<String>,
}

fn default_spin() -> f32 { DEFAULT_SPIN_DEGREES }
fn default_orbit_velocity() -> f32 { DEFAULT_ORBIT_VELOCITY }

/// A stage built from a scene file, with the entities it spawned by role.
pub struct LoadedScene {
    pub stage: Stage,
    pub cameras: HashMap<String, Entity>,
    pub drifters: Vec<Entity>,
    pub camera_rigs: Vec<Entity>,
}

impl LoadedScene {
    /// Name of the camera each rig currently has enabled, in rig order.
    pub fn active_camera_names(&self) -> Vec<Option<String>> {
        self.camera_rigs.iter()
            .map(|rig| {
                self.stage.rig(*rig)
                    .and_then(|rig| rig.active_camera())
                    .and_then(|camera| self.stage.camera(camera))
                    .map(|camera| camera.name)
            })
            .collect()
    }
}

impl SceneConfig {
    #[cfg_attr(feature = "trace", instrument)]
    pub fn from_file(file_path: &str) -> Result<Self> {
        let config = load_deserializable_from_file(file_path, SCENE_LOAD_ID)?;
        Ok(config)
    }

    #[cfg_attr(feature = "trace", instrument)]
    pub fn from_json(json: JSONLoad) -> Result<Self> {
        let config = load_deserializable_from_json(json, SCENE_LOAD_ID)?;
        Ok(config)
    }

    /// Spawns cameras first so rigs can resolve names, then drifters, then rigs.
    #[cfg_attr(feature = "trace", instrument(skip(self)))]
    pub fn build(&self) -> Result<LoadedScene> {
        #[cfg(feature = "trace")]
        trace!("ENTER: SceneConfig::build");

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let mut stage = Stage::new();

        let mut cameras = HashMap::new();
        for name in &self.cameras {
            if cameras.insert(name.clone(), stage.spawn_camera(name)).is_some() {
                #[cfg(feature = "trace")]
                error!("Scene declares camera {} more than once", name);

                return Err(DuplicateCameraError { name: name.clone() }.into())
            }
        }

        let drifters = self.drifters.iter()
            .map(|config| {
                let drifter = RandomDrifter::initialize(&mut rng).with_spin(config.spin_degrees);
                stage.spawn_with_drifter(Transform::from(&config.transform), drifter)
            })
            .collect::<Vec<_>>();

        let mut camera_rigs = Vec::new();
        for config in &self.camera_rigs {
            let handles = config.cameras.iter()
                .map(|name| {
                    cameras.get(name).copied().ok_or_else(|| {
                        #[cfg(feature = "trace")]
                        error!("Rig refers to camera {} which the scene does not declare", name);

                        UnknownCameraError { name: name.clone() }
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;

            camera_rigs.push(stage.spawn_orbit_rig(Transform::from(&config.transform), handles, config.orbit_velocity)?);
        }

        #[cfg(feature = "trace")]
        debug!("Built scene with {} cameras, {} drifters and {} rigs", cameras.len(), drifters.len(), camera_rigs.len());

        #[cfg(feature = "trace")]
        trace!("EXIT: SceneConfig::build");

        Ok(LoadedScene {
            stage,
            cameras,
            drifters,
            camera_rigs,
        })
    }
}
