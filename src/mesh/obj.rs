use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

#[cfg(feature = "trace")]
use tracing::{instrument, debug, trace};

use crate::mesh::obj::ObjError::{ReadError, ParseFloatError, ParseIndexError, WriteError};

pub const DEFAULT_SMOOTHING: &str = "s 0";

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vertex {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v {} {} {}", self.x, self.y, self.z)
    }
}

/// Triangle given as 1-based vertex indices.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Face(pub u32, pub u32, pub u32);

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "f {} {} {}", self.0, self.1, self.2)
    }
}

/// Triangle mesh read from, and written back to, Wavefront OBJ.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjMesh {
    pub label: String,
    pub smoothing: String,
    pub vertices: Vec<Vertex>,
    pub faces: Vec<Face>,
}

impl fmt::Display for ObjMesh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, Vertex count: {}, Face count: {}", self.label, self.vertices.len(), self.faces.len())
    }
}

impl ObjMesh {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            smoothing: DEFAULT_SMOOTHING.to_string(),
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    #[cfg_attr(feature = "trace", instrument)]
    pub fn from_file(path: &Path) -> Result<Self, ObjError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| {
                ReadError {
                    path: path.display().to_string(),
                    source: e
                }
            })?;

        let label = path.file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_else(|| "mesh".to_string());

        return Self::parse(&label, &text)
    }

    /// Reads `v`, `f` and `s` lines. Anything else (normals, texture coordinates, groups,
    /// comments) is skipped.
    #[cfg_attr(feature = "trace", instrument(skip(text)))]
    pub fn parse(label: &str, text: &str) -> Result<Self, ObjError> {
        let mut mesh = Self::new(label);

        for (number, line) in text.lines().enumerate() {
            let line_number = number + 1;
            let tokens: Vec<&str> = line.split_whitespace().collect();

            match tokens.as_slice() {
                ["v", x, y, z, ..] => mesh.vertices.push(Vertex::new(
                    parse_float(x, line_number)?,
                    parse_float(y, line_number)?,
                    parse_float(z, line_number)?,
                )),
                ["f", a, b, c, ..] => mesh.faces.push(Face(
                    parse_index(a, line_number)?,
                    parse_index(b, line_number)?,
                    parse_index(c, line_number)?,
                )),
                ["s", value, ..] => mesh.smoothing = format!("s {}", value),
                _ => {
                    #[cfg(feature = "trace")]
                    trace!("Skipping line {}: {}", line_number, line);
                }
            }
        }

        #[cfg(feature = "trace")]
        debug!("Parsed {}", mesh);

        Ok(mesh)
    }

    pub fn write<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "{}", self.smoothing)?;
        for vertex in &self.vertices {
            writeln!(out, "{}", vertex)?;
        }
        for face in &self.faces {
            writeln!(out, "{}", face)?;
        }

        Ok(())
    }

    #[cfg_attr(feature = "trace", instrument(skip(self)))]
    pub fn write_to_file(&self, path: &Path) -> Result<(), ObjError> {
        let write_error = |e| {
            WriteError {
                path: path.display().to_string(),
                source: e
            }
        };

        let file = File::create(path).map_err(write_error)?;
        let mut writer = BufWriter::new(file);
        self.write(&mut writer).map_err(write_error)?;
        writer.flush().map_err(write_error)?;

        #[cfg(feature = "trace")]
        debug!("Wrote {} to {}", self, path.display());

        Ok(())
    }

    pub fn to_obj_string(&self) -> String {
        let mut buffer = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.write(&mut buffer);
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

fn parse_float(token: &str, line: usize) -> Result<f64, ObjError> {
    token.parse::<f64>()
        .map_err(|e| {
            ParseFloatError {
                line,
                token: token.to_string(),
                source: e
            }
        })
}

/// Accepts `7`, `7/2` and `7/2/3`, keeping only the vertex index.
fn parse_index(token: &str, line: usize) -> Result<u32, ObjError> {
    let vertex_index = token.split('/').next().unwrap_or(token);
    vertex_index.parse::<u32>()
        .map_err(|e| {
            ParseIndexError {
                line,
                token: token.to_string(),
                source: e
            }
        })
}

#[derive(Error, Debug)]
pub enum ObjError {
    #[error("Error reading mesh file at path: {path}")]
    ReadError {
        path: String,
        source: std::io::Error
    },
    #[error("Error writing mesh file at path: {path}")]
    WriteError {
        path: String,
        source: std::io::Error
    },
    #[error("Invalid coordinate: {token} on line {line}")]
    ParseFloatError {
        line: usize,
        token: String,
        source: std::num::ParseFloatError
    },
    #[error("Invalid vertex index: {token} on line {line}")]
    ParseIndexError {
        line: usize,
        token: String,
        source: std::num::ParseIntError
    }
}
