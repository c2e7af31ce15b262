use std::f64::consts::PI;

#[cfg(feature = "trace")]
use tracing::{instrument, debug};

use crate::mesh::obj::{ObjMesh, Vertex};

/// Mesh extent along each axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bounds {
    pub min: Vertex,
    pub max: Vertex,
}

impl Bounds {
    /// `None` for a mesh without vertices.
    pub fn of(vertices: &[Vertex]) -> Option<Self> {
        let first = *vertices.first()?;
        let bounds = vertices.iter().fold(Bounds { min: first, max: first }, |bounds, v| {
            Bounds {
                min: Vertex::new(bounds.min.x.min(v.x), bounds.min.y.min(v.y), bounds.min.z.min(v.z)),
                max: Vertex::new(bounds.max.x.max(v.x), bounds.max.y.max(v.y), bounds.max.z.max(v.z)),
            }
        });

        Some(bounds)
    }

    fn scaled(&self, factor: f64) -> Self {
        Bounds {
            min: Vertex::new(self.min.x * factor, self.min.y * factor, self.min.z * factor),
            max: Vertex::new(self.max.x * factor, self.max.y * factor, self.max.z * factor),
        }
    }
}

impl ObjMesh {
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::of(&self.vertices)
    }

    /// Pushes every vertex onto the face of the bounding cube its dominant axis points at,
    /// moving the two remaining coordinates by the inverse cube-to-sphere mapping. The dominant
    /// coordinate snaps to the nearer side of the mesh bounds; the mapping assumes a unit sphere.
    #[cfg_attr(feature = "trace", instrument(skip(self)))]
    pub fn morph_to_cube(&mut self) {
        let bounds = match self.bounds() {
            Some(bounds) => bounds,
            None => return,
        };

        for vertex in self.vertices.iter_mut() {
            *vertex = project_to_cube_face(*vertex, &bounds);
        }
        self.label = "Output Polyhedron".to_string();

        #[cfg(feature = "trace")]
        debug!("Morphed {} onto cube bounds {:?}", self, bounds);
    }

    /// Snaps every coordinate to the nearer side of a cube with the sphere's surface area. The
    /// result is a perfect cube, but vertices travel further than with `morph_to_cube`.
    #[cfg_attr(feature = "trace", instrument(skip(self)))]
    pub fn snap_to_corners(&mut self) {
        let bounds = match self.bounds() {
            Some(bounds) => bounds.scaled(equal_area_factor()),
            None => return,
        };

        for vertex in self.vertices.iter_mut() {
            *vertex = Vertex::new(
                nearer_bound(vertex.x, bounds.min.x, bounds.max.x),
                nearer_bound(vertex.y, bounds.min.y, bounds.max.y),
                nearer_bound(vertex.z, bounds.min.z, bounds.max.z),
            );
        }
        self.label = "Output Cube".to_string();

        #[cfg(feature = "trace")]
        debug!("Snapped {} to corners of {:?}", self, bounds);
    }
}

/// Side-length scale that gives a cube the surface area of the sphere spanning the same bounds.
pub fn equal_area_factor() -> f64 {
    (PI / 6.0).sqrt()
}

fn nearer_bound(value: f64, min: f64, max: f64) -> f64 {
    if (value - max).abs() <= (value - min).abs() { max } else { min }
}

pub fn project_to_cube_face(vertex: Vertex, bounds: &Bounds) -> Vertex {
    let Vertex { x, y, z } = vertex;
    let (ax, ay, az) = (x.abs(), y.abs(), z.abs());

    if ax >= ay && ax >= az {
        let (y, z) = solve_face_coordinates(y, z);
        Vertex::new(nearer_bound(x, bounds.min.x, bounds.max.x), y, z)
    } else if ay >= az {
        let (x, z) = solve_face_coordinates(x, z);
        Vertex::new(x, nearer_bound(y, bounds.min.y, bounds.max.y), z)
    } else {
        let (x, y) = solve_face_coordinates(x, y);
        Vertex::new(x, y, nearer_bound(z, bounds.min.z, bounds.max.z))
    }
}

/// Inverse of the cube-to-sphere mapping for the two coordinates lying in the target face.
fn solve_face_coordinates(u: f64, v: f64) -> (f64, f64) {
    let a = 2.0 * u * u;
    let b = 2.0 * v * v;
    let c = -a + b - 3.0;
    let d = -(c * c - 12.0 * a).max(0.0).sqrt();

    let half = 0.5f64.sqrt();
    let u = signed_root(u, d + a - b + 3.0) * half;
    let v = signed_root(v, d - a + b + 3.0) * half;

    (u, v)
}

fn signed_root(sign_of: f64, radicand: f64) -> f64 {
    if sign_of == 0.0 {
        return 0.0
    }
    radicand.max(0.0).sqrt().copysign(sign_of)
}
