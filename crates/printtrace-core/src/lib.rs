//! # Printtrace Core
//!
//! Toolpath parsing and mesh reconstruction for Printtrace.
//!
//! The pipeline is a chain of pure, synchronous transformations:
//! command lines are parsed into an ordered movement trace
//! ([`parser::ToolpathParser`]), the trace becomes a polyline mesh with
//! per-layer faces ([`mesh`]), and the mesh serializes to an OBJ document
//! ([`obj`]). Layer-by-layer animation lives in the companion
//! `printtrace-render` crate, which derives its own view over the same
//! movement trace.

pub mod error;
pub mod mesh;
pub mod obj;
pub mod parser;
pub mod types;

pub use error::{Error, Result};
pub use mesh::{create_faces, generate_mesh, Mesh, DEFAULT_LAYER_HEIGHT};
pub use obj::{parse_vertex_records, write_obj};
pub use parser::ToolpathParser;
pub use types::{Movement, PartialPosition, Position};

/// Convert a toolpath source into an OBJ mesh document.
///
/// Parses the source into movements, reconstructs the polyline mesh, groups
/// faces at the default layer height and serializes the result. An empty or
/// move-free source yields an empty document.
pub fn mesh_document(source: &str) -> Result<String> {
    let movements = ToolpathParser::new().parse(source)?;
    let mut mesh = generate_mesh(&movements);
    create_faces(&mut mesh, DEFAULT_LAYER_HEIGHT);
    Ok(write_obj(&mesh))
}
