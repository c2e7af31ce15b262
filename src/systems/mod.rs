pub mod drift;
pub mod orbit_camera;

pub const DRIFT_SYSTEM: &str = "drift";
pub const ORBIT_CAMERA_SYSTEM: &str = "orbit_camera";
