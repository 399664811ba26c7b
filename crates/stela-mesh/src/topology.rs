//! Edge derivation from corner topology.
//!
//! The importer populates only polygons and corners; edges are deduced
//! afterwards from consecutive corner pairs. Derivation must happen
//! before custom normals are attached (see [`Mesh::set_custom_normals`]).

use std::collections::HashSet;

use crate::mesh::Mesh;

/// Derives the unique edge list from the corner-vertex array.
///
/// Walks each polygon's corner ring, canonicalizes every consecutive
/// corner pair as `(v_min, v_max)`, and stores each edge once in
/// discovery order. Overwrites any previously derived edges.
pub fn calc_edges(mesh: &mut Mesh) {
    let mut seen: HashSet<(u32, u32)> = HashSet::with_capacity(mesh.corner_count());
    let mut edges: Vec<[u32; 2]> = Vec::with_capacity(mesh.corner_count());

    for p in 0..mesh.poly_count() {
        let corners = mesh.poly_corners(p);
        for k in 0..corners.len() {
            let v0 = corners[k];
            let v1 = corners[(k + 1) % corners.len()];
            let key = if v0 < v1 { (v0, v1) } else { (v1, v0) };
            if seen.insert(key) {
                edges.push([key.0, key.1]);
            }
        }
    }

    mesh.edges = Some(edges);
}
