use specs::{Component, VecStorage};

/// A viewpoint owned by the stage. Rigs refer to cameras through their `Entity` handle and only
/// ever flip `enabled`.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub name: String,
    pub enabled: bool,
}

impl Component for Camera {
    type Storage = VecStorage<Self>;
}

impl Camera {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            enabled: false,
        }
    }
}
