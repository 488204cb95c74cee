//! Wavefront OBJ document emitter.
//!
//! Serializes a [`Mesh`] into the plain-text OBJ form consumed by viewers:
//! `v` position records, `f` face records and `l` polyline records. The OBJ
//! convention is Y-up while the toolpath convention is Z-up, so vertex
//! records are written with the Y and Z components swapped. Output is
//! byte-reproducible for identical mesh data.

use std::fmt::Write as _;

use crate::error::{Error, Result};
use crate::mesh::Mesh;
use crate::types::Position;

/// Serialize a mesh to OBJ text
///
/// Record order is all vertices, then all faces, then all line elements.
/// Face and line indices are 1-based per the OBJ format.
pub fn write_obj(mesh: &Mesh) -> String {
    let mut out = String::new();
    for vertex in &mesh.vertices {
        // Swap Y and Z to account for the 90-degree rotation from toolpath
        // coordinates to OBJ coordinates.
        let _ = writeln!(out, "v {} {} {}", vertex.x, vertex.z, vertex.y);
    }
    for face in &mesh.faces {
        let _ = writeln!(out, "f {} {} {}", face[0] + 1, face[1] + 1, face[2] + 1);
    }
    for edge in &mesh.edges {
        let _ = writeln!(out, "l {} {}", edge.0 + 1, edge.1 + 1);
    }
    out
}

/// Re-parse the `v` records of an OBJ document back into toolpath positions
///
/// Undoes the Y/Z swap applied by [`write_obj`], so a round trip through the
/// document reproduces the original coordinates.
pub fn parse_vertex_records(document: &str) -> Result<Vec<Position>> {
    let mut vertices = Vec::new();
    for (i, line) in document.lines().enumerate() {
        let mut words = line.split_whitespace();
        if words.next() != Some("v") {
            continue;
        }
        let mut component = |name: &str| -> Result<f64> {
            let raw = words.next().ok_or_else(|| Error::InvalidParameter {
                line_number: (i + 1) as u32,
                word: name.to_string(),
                reason: "missing vertex component".to_string(),
            })?;
            raw.parse::<f64>().map_err(|e| Error::InvalidParameter {
                line_number: (i + 1) as u32,
                word: format!("{}{}", name, raw),
                reason: e.to_string(),
            })
        };
        let x = component("x")?;
        let obj_y = component("y")?;
        let obj_z = component("z")?;
        vertices.push(Position::new(x, obj_z, obj_y));
    }
    Ok(vertices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::{create_faces, generate_mesh};

    #[test]
    fn vertex_records_swap_y_and_z() {
        let mesh = generate_mesh(&[Position::new(1.0, 2.0, 3.0)]);
        assert_eq!(write_obj(&mesh), "v 1 3 2\n");
    }

    #[test]
    fn documented_three_movement_example() {
        let movements = vec![
            Position::new(0.0, 0.0, 0.0),
            Position::new(10.0, 0.0, 0.0),
            Position::new(10.0, 10.0, 0.0),
        ];
        let mut mesh = generate_mesh(&movements);
        create_faces(&mut mesh, 0.2);
        let expected = "\
v 0 0 0
v 10 0 0
v 10 0 10
f 1 2 2
f 2 3 1
l 1 2
l 2 3
";
        assert_eq!(write_obj(&mesh), expected);
    }

    #[test]
    fn vertex_round_trip_restores_coordinates() {
        let movements = vec![
            Position::new(1.5, -2.25, 0.4),
            Position::new(0.0, 7.0, 12.125),
        ];
        let mesh = generate_mesh(&movements);
        let parsed = parse_vertex_records(&write_obj(&mesh)).unwrap();
        assert_eq!(parsed, movements);
    }
}
