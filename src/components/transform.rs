use specs::{Component, VecStorage};
use glam::{Quat, Vec3};
use serde::Deserialize;

#[cfg(feature = "trace")]
use tracing::{instrument, trace};

/// Placement of a scene object in world space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Component for Transform { type Storage = VecStorage<Self>; }

impl Transform {
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Moves by `offset` expressed in the object's own frame.
    #[cfg_attr(feature = "trace", instrument)]
    pub fn translate(&mut self, offset: Vec3) {
        self.position += self.rotation * offset;

        #[cfg(feature = "trace")]
        trace!("Translated transform to: {:?}", self.position);
    }

    /// Orbits the object `degrees` around the world-space `axis` passing through `point`.
    /// Both position and orientation are rotated.
    #[cfg_attr(feature = "trace", instrument)]
    pub fn rotate_around(&mut self, point: Vec3, axis: Vec3, degrees: f32) {
        let rotation = Quat::from_axis_angle(axis.normalize(), degrees.to_radians());
        self.position = point + rotation * (self.position - point);
        self.rotation = (rotation * self.rotation).normalize();

        #[cfg(feature = "trace")]
        trace!("Rotated transform around {:?} to position: {:?}", point, self.position);
    }

    /// Spins the object in place around its own vertical axis.
    #[cfg_attr(feature = "trace", instrument)]
    pub fn rotate_y(&mut self, degrees: f32) {
        self.rotation = (self.rotation * Quat::from_rotation_y(degrees.to_radians())).normalize();
    }

    /// Yaw in degrees, wrapped to `[0, 360)`.
    pub fn yaw_degrees(&self) -> f32 {
        // Y component of a YXZ euler decomposition.
        let forward = self.rotation * Vec3::Z;
        let yaw = forward.x.atan2(forward.z).to_degrees();

        return wrap_degrees(yaw)
    }
}

pub fn wrap_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TransformJSON {
    #[serde(default)]
    pub position: [f32; 3],
    /// Initial yaw in degrees.
    #[serde(default)]
    pub yaw: f32,
}

impl From<&TransformJSON> for Transform {
    fn from(json: &TransformJSON) -> Self {
        let mut transform = Transform::from_position(Vec3::from(json.position));
        transform.rotate_y(json.yaw);
        transform
    }
}
