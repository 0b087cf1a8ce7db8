//! Mesh export: writes the full instance list of a painting to a mesh file.
//!
//! # Invariants
//! - Export reads instances; it never modifies them.
//! - A failed export leaves no partial success report; the caller decides how
//!   to surface it.

mod obj;

pub use obj::{ExportError, ExportReport, MeshExporter, ObjExporter};

pub fn crate_info() -> &'static str {
    "paintspace-export v0.1.0"
}
