/// Seconds elapsed since the previous frame. Written by the stage before every dispatch and
/// read by each per-frame system.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct DeltaTime(pub f32);

impl DeltaTime {
    pub fn seconds(&self) -> f32 {
        self.0
    }
}
