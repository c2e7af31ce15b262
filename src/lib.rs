pub mod load;
pub mod globals;
pub mod components;
pub mod systems;
pub mod game_loop;
pub mod scenes;
pub mod mesh;

#[cfg(feature="trace")]
pub mod log;
