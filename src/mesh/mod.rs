pub mod morph;
pub mod obj;

pub use obj::{Face, ObjMesh, Vertex};
