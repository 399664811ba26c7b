//! Shading normal computation.
//!
//! Meshes carry no stored vertex normals; shading normals are computed
//! on demand from the geometry, area-weighted. Per-corner custom
//! normals, when attached, override the auto-computed result.

use glam::Vec3;

use crate::mesh::Mesh;

/// Computes area-weighted vertex normals.
///
/// Each polygon's face normal (cross product of its first two edge
/// vectors, magnitude = 2× area — exact for the triangle meshes the
/// importer produces) is accumulated at every corner vertex, then
/// normalized. Vertices referenced by no polygon keep a zero normal.
pub fn vertex_normals(mesh: &Mesh) -> Vec<Vec3> {
    let mut accum = vec![Vec3::ZERO; mesh.vertex_count()];

    for p in 0..mesh.poly_count() {
        let corners = mesh.poly_corners(p);
        if corners.len() < 3 {
            continue;
        }
        let a = mesh.positions[corners[0] as usize];
        let b = mesh.positions[corners[1] as usize];
        let c = mesh.positions[corners[2] as usize];
        let weighted = (b - a).cross(c - a);

        for &v in corners {
            accum[v as usize] += weighted;
        }
    }

    for n in &mut accum {
        let len = n.length();
        if len > 1e-10 {
            *n /= len;
        }
    }

    accum
}

/// Returns the effective shading normal of every corner.
///
/// Custom normals win when the mesh carries them; otherwise the
/// auto-computed vertex normals are fanned out per corner.
pub fn corner_shading_normals(mesh: &Mesh) -> Vec<Vec3> {
    if mesh.custom_shading {
        if let Some(ref custom) = mesh.corner_normals {
            return custom.clone();
        }
    }

    let auto = vertex_normals(mesh);
    mesh.corner_verts
        .iter()
        .map(|&v| auto[v as usize])
        .collect()
}
