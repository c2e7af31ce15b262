use specs::{Component, Entity, HashMapStorage};
use thiserror::Error;

#[cfg(feature = "trace")]
use tracing::{instrument, debug, error};

use crate::components::orbit_camera_switcher::RigError::{NoCameras, TooManyCameras};

/// Degrees per second the rig orbits when no velocity is configured.
pub const DEFAULT_ORBIT_VELOCITY: f32 = 30.0;
pub const FULL_TURN_DEGREES: u32 = 360;

/// Orbits its entity around the vertical axis and keeps exactly one camera of `cameras` enabled:
/// the one whose slice of the circle contains the current yaw.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCameraSwitcher {
    cameras: Vec<Entity>,
    orbit_velocity: f32,
    camera_step: u32,
    active: Option<usize>,
}

impl Component for OrbitCameraSwitcher {
    type Storage = HashMapStorage<Self>;
}

impl OrbitCameraSwitcher {
    /// Splits the full turn evenly (integer division) across `cameras`.
    #[cfg_attr(feature = "trace", instrument)]
    pub fn initialize(cameras: Vec<Entity>, orbit_velocity: f32) -> Result<Self, RigError> {
        let count = cameras.len();
        let camera_step = camera_step(count)?;

        #[cfg(feature = "trace")]
        debug!("Rig covers {} degrees per camera across {} cameras", camera_step, count);

        Ok(Self {
            cameras,
            orbit_velocity,
            camera_step,
            active: None,
        })
    }

    pub fn cameras(&self) -> &[Entity] {
        &self.cameras
    }

    pub fn orbit_velocity(&self) -> f32 {
        self.orbit_velocity
    }

    pub fn camera_step(&self) -> u32 {
        self.camera_step
    }

    /// Index of the camera enabled on the last tick, `None` before the first one.
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active_camera(&self) -> Option<Entity> {
        self.active.map(|index| self.cameras[index])
    }

    pub(crate) fn set_active(&mut self, index: usize) {
        self.active = Some(index);
    }

    /// Camera slot for `yaw` degrees. Slots past the end, which appear when the count does not
    /// divide 360, fold into the last camera.
    pub fn index_for_yaw(&self, yaw: f32) -> usize {
        // initialize guarantees a non-zero step and at least one camera
        camera_index(yaw, self.camera_step, self.cameras.len()).unwrap_or(0)
    }
}

#[cfg_attr(feature = "trace", instrument)]
pub fn camera_step(count: usize) -> Result<u32, RigError> {
    if count == 0 {
        #[cfg(feature = "trace")]
        error!("Camera rig initialized without cameras");

        return Err(NoCameras)
    }
    if count > FULL_TURN_DEGREES as usize {
        #[cfg(feature = "trace")]
        error!("Camera rig initialized with {} cameras, step would be zero", count);

        return Err(TooManyCameras { count })
    }

    Ok(FULL_TURN_DEGREES / count as u32)
}

/// `floor(yaw) / step`, clamped to `count - 1`. `None` when `step` or `count` is zero.
pub fn camera_index(yaw: f32, step: u32, count: usize) -> Option<usize> {
    if step == 0 || count == 0 {
        return None
    }

    let whole_degrees = if yaw.is_finite() && yaw > 0.0 { yaw as u32 } else { 0 };
    let index = (whole_degrees / step) as usize;

    Some(index.min(count - 1))
}

#[derive(Error, Debug, PartialEq)]
pub enum RigError {
    #[error("Camera rig needs at least one camera")]
    NoCameras,
    #[error("Camera rig has {count} cameras, at most 360 can share a full turn")]
    TooManyCameras {
        count: usize
    }
}
