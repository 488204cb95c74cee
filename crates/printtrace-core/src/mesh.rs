//! Mesh reconstruction from a movement sequence.
//!
//! Vertices mirror the movement sequence one-to-one, edges form a single open
//! polyline walking the entire toolpath, and faces are synthesized per
//! Z-layer by connecting consecutive layer members.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::{Movement, Position};

/// Default mesh layer height in toolpath units
pub const DEFAULT_LAYER_HEIGHT: f64 = 0.2;

/// A toolpath mesh: positional vertices, polyline edges and per-layer faces
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    /// One vertex per movement, same index, same coordinates
    pub vertices: Vec<Position>,
    /// Pairs of vertex indices connecting temporally consecutive movements
    pub edges: Vec<(usize, usize)>,
    /// Vertex-index triples synthesized within each Z-layer
    pub faces: Vec<[usize; 3]>,
}

/// Build vertices and edges from the movement sequence
///
/// Vertices are the movements verbatim, in order. Edges connect consecutive
/// indices, so N vertices yield N-1 edges. Faces are left empty; call
/// [`create_faces`] to synthesize them.
pub fn generate_mesh(movements: &[Movement]) -> Mesh {
    let mut mesh = Mesh {
        vertices: movements.to_vec(),
        ..Default::default()
    };
    for i in 1..mesh.vertices.len() {
        mesh.edges.push((i - 1, i));
    }
    debug!(
        vertices = mesh.vertices.len(),
        edges = mesh.edges.len(),
        "generated mesh polyline"
    );
    mesh
}

/// Synthesize faces by grouping vertices into Z-layers of `layer_height`
///
/// Layers are keyed by `floor(z / layer_height)` and visited in order of
/// first appearance, not sorted by key. Layers with a single vertex produce
/// no faces.
pub fn create_faces(mesh: &mut Mesh, layer_height: f64) {
    let mut order: Vec<i64> = Vec::new();
    let mut layers: HashMap<i64, Vec<usize>> = HashMap::new();
    for (i, vertex) in mesh.vertices.iter().enumerate() {
        let key = (vertex.z / layer_height).floor() as i64;
        layers
            .entry(key)
            .or_insert_with(|| {
                order.push(key);
                Vec::new()
            })
            .push(i);
    }

    mesh.faces.clear();
    for key in &order {
        mesh.faces.extend(wraparound_fan(&layers[key]));
    }
    debug!(
        layers = order.len(),
        faces = mesh.faces.len(),
        "synthesized layer faces"
    );
}

/// Connect consecutive members of one layer's vertex-index list into faces.
///
/// For a list L of length m this emits m-1 triples
/// `(L[k], L[k+1], L[(k+1) mod m])`: the third index wraps back to the
/// layer's first member on the final face, which can produce a degenerate
/// triple such as `(0, 1, 1)` for a two-member layer. The wrap is preserved
/// deliberately; swap this function to change the triangulation strategy.
fn wraparound_fan(layer: &[usize]) -> Vec<[usize; 3]> {
    let m = layer.len();
    let mut faces = Vec::new();
    for k in 0..m.saturating_sub(1) {
        faces.push([layer[k], layer[k + 1], layer[(k + 1) % m]]);
    }
    faces
}
