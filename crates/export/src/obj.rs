//! Wavefront OBJ writer.
//!
//! Each instance becomes one cube: 8 vertices and 6 quad faces, transformed
//! by the instance's scale, rotation and position.
//!
//! ```text
//! # paintspace stroke export
//! o paint_stroke
//! v x y z        (8 per instance)
//! f a b c d      (6 per instance, 1-based)
//! ```

use glam::Vec3;
use paintspace_common::Transform;
use sha2::{Digest, Sha256};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Errors from mesh export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("nothing to export: the painting has no instances")]
    Empty,
}

/// What a successful export wrote.
#[derive(Debug, Clone)]
pub struct ExportReport {
    pub path: PathBuf,
    pub vertex_count: usize,
    pub face_count: usize,
    /// SHA-256 of the written file, hex encoded.
    pub sha256: String,
}

/// Consumes a finished instance list and writes it somewhere.
pub trait MeshExporter {
    fn export(&mut self, instances: &[Transform]) -> Result<ExportReport, ExportError>;
}

/// Cube corners, ordered so faces below wind counter-clockwise from outside.
const CORNERS: [Vec3; 8] = [
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(-1.0, -1.0, 1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(-1.0, 1.0, 1.0),
];

const FACES: [[usize; 4]; 6] = [
    [0, 3, 2, 1], // -z
    [4, 5, 6, 7], // +z
    [0, 1, 5, 4], // -y
    [2, 3, 7, 6], // +y
    [1, 2, 6, 5], // +x
    [0, 4, 7, 3], // -x
];

/// Writes instances as cubes into a single OBJ file.
#[derive(Debug, Clone)]
pub struct ObjExporter {
    path: PathBuf,
    object_name: String,
    half_extent: f32,
}

impl ObjExporter {
    /// Export to `path` using a unit cube (half extent 0.5) per instance.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            object_name: "paint_stroke".into(),
            half_extent: 0.5,
        }
    }

    /// Half the edge length of the cube before instance scaling, so the
    /// export matches the size of the mesh the host instances.
    pub fn with_half_extent(mut self, half_extent: f32) -> Self {
        self.half_extent = half_extent;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Render the OBJ text for `instances`.
    pub fn encode(&self, instances: &[Transform]) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = writeln!(out, "# paintspace stroke export");
        let _ = writeln!(out, "# instances: {}", instances.len());
        let _ = writeln!(out, "o {}", self.object_name);

        for t in instances {
            for corner in CORNERS {
                let v = t.transform_point(corner * self.half_extent);
                let _ = writeln!(out, "v {:.6} {:.6} {:.6}", v.x, v.y, v.z);
            }
        }
        for i in 0..instances.len() {
            let base = i * CORNERS.len() + 1;
            for [a, b, c, d] in FACES {
                let _ = writeln!(
                    out,
                    "f {} {} {} {}",
                    base + a,
                    base + b,
                    base + c,
                    base + d
                );
            }
        }
        out
    }
}

impl MeshExporter for ObjExporter {
    fn export(&mut self, instances: &[Transform]) -> Result<ExportReport, ExportError> {
        if instances.is_empty() {
            return Err(ExportError::Empty);
        }
        let text = self.encode(instances);

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, text.as_bytes())?;

        let report = ExportReport {
            path: self.path.clone(),
            vertex_count: instances.len() * CORNERS.len(),
            face_count: instances.len() * FACES.len(),
            sha256: sha256_hex(text.as_bytes()),
        };
        tracing::debug!(
            path = %report.path.display(),
            vertices = report.vertex_count,
            faces = report.face_count,
            "wrote obj"
        );
        Ok(report)
    }
}

fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}
