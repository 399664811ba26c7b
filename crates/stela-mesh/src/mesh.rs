//! Core indexed mesh type with offsets-plus-corners topology layout.
//!
//! Topology is stored CSR-style:
//! - `poly_offsets: [0, 3, 6, ...]` — polygon i's corners start at
//!   `poly_offsets[i]`; the final entry is the total corner count.
//! - `corner_verts: [v, v, v, ...]` — one vertex index per corner.
//!
//! For the triangle-only meshes produced by the importer every offset
//! is `3 * i`, but consumers go through the offset array rather than
//! assuming that.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use stela_types::{StelaError, StelaResult};

/// An indexed polygon mesh.
///
/// Vertex positions are shared; each polygon stores corner slots that
/// reference into the position array. Edges are absent until derived
/// from the corner array (see [`crate::topology::calc_edges`]), and
/// per-corner custom normals are absent unless explicitly attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mesh {
    /// Mesh name (typically the source file stem).
    pub name: String,

    /// Vertex positions, indexed by the corner array.
    pub positions: Vec<Vec3>,

    /// CSR polygon offsets. Length = polygon count + 1; the final
    /// entry equals `corner_verts.len()`. `[0]` for an empty mesh.
    pub poly_offsets: Vec<u32>,

    /// Vertex index of each corner, all polygons back to back.
    pub corner_verts: Vec<u32>,

    /// Unique edges as `[v_min, v_max]` pairs. `None` until derived.
    pub edges: Option<Vec<[u32; 2]>>,

    /// Per-corner custom normals. `None` unless attached.
    pub corner_normals: Option<Vec<Vec3>>,

    /// True when `corner_normals` override the auto-computed shading.
    pub custom_shading: bool,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            positions: Vec::new(),
            poly_offsets: vec![0],
            corner_verts: Vec::new(),
            edges: None,
            corner_normals: None,
            custom_shading: false,
        }
    }

    /// Creates an empty mesh with pre-allocated capacity.
    pub fn with_capacity(name: &str, vertex_capacity: usize, poly_capacity: usize) -> Self {
        let mut poly_offsets = Vec::with_capacity(poly_capacity + 1);
        poly_offsets.push(0);
        Self {
            name: name.to_string(),
            positions: Vec::with_capacity(vertex_capacity),
            poly_offsets,
            corner_verts: Vec::with_capacity(poly_capacity * 3),
            edges: None,
            corner_normals: None,
            custom_shading: false,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of polygons.
    #[inline]
    pub fn poly_count(&self) -> usize {
        self.poly_offsets.len() - 1
    }

    /// Returns the number of corners across all polygons.
    #[inline]
    pub fn corner_count(&self) -> usize {
        self.corner_verts.len()
    }

    /// Returns the number of derived edges, or 0 if not yet derived.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.as_ref().map_or(0, Vec::len)
    }

    /// Returns the position of vertex `i`.
    #[inline]
    pub fn position(&self, i: usize) -> Vec3 {
        self.positions[i]
    }

    /// Returns the corner-vertex slice of polygon `p`.
    #[inline]
    pub fn poly_corners(&self, p: usize) -> &[u32] {
        let start = self.poly_offsets[p] as usize;
        let end = self.poly_offsets[p + 1] as usize;
        &self.corner_verts[start..end]
    }

    /// Returns the three vertex indices of triangle `t`.
    ///
    /// Panics if polygon `t` is not a triangle.
    #[inline]
    pub fn triangle(&self, t: usize) -> [u32; 3] {
        let c = self.poly_corners(t);
        [c[0], c[1], c[2]]
    }

    /// Attaches per-corner custom normals and marks the mesh as using
    /// non-auto shading.
    ///
    /// Edges must already be derived: downstream consumers resolve
    /// corner normals against edge/loop topology, so attaching them to
    /// an edge-less mesh would leave the two out of sync.
    pub fn set_custom_normals(&mut self, normals: Vec<Vec3>) {
        debug_assert!(self.edges.is_some(), "derive edges before attaching custom normals");
        debug_assert_eq!(normals.len(), self.corner_count());
        self.corner_normals = Some(normals);
        self.custom_shading = true;
    }

    /// Validates mesh integrity.
    ///
    /// Checks:
    /// - Offset array is well-formed CSR (starts at 0, monotone, final
    ///   entry equals the corner count)
    /// - Corner and edge indices are within bounds
    /// - Custom-normal length matches the corner count
    /// - No degenerate polygons (repeated vertex within one polygon)
    pub fn validate(&self) -> StelaResult<()> {
        let n = self.vertex_count();

        if self.poly_offsets.is_empty() {
            return Err(StelaError::InvalidMesh(
                "Offset array is empty (expected at least [0])".into(),
            ));
        }
        if self.poly_offsets[0] != 0 {
            return Err(StelaError::InvalidMesh(format!(
                "Offset array starts at {} (expected 0)",
                self.poly_offsets[0]
            )));
        }
        for w in self.poly_offsets.windows(2) {
            if w[1] < w[0] {
                return Err(StelaError::InvalidMesh(format!(
                    "Offset array decreases from {} to {}",
                    w[0], w[1]
                )));
            }
        }
        let last = self.poly_offsets[self.poly_offsets.len() - 1] as usize;
        if last != self.corner_verts.len() {
            return Err(StelaError::InvalidMesh(format!(
                "Final offset ({}) != corner count ({})",
                last,
                self.corner_verts.len()
            )));
        }

        for (i, &v) in self.corner_verts.iter().enumerate() {
            if v as usize >= n {
                return Err(StelaError::InvalidMesh(format!(
                    "Corner {} references vertex {} (vertex count: {})",
                    i, v, n
                )));
            }
        }

        if let Some(ref edges) = self.edges {
            for (i, e) in edges.iter().enumerate() {
                if e[0] as usize >= n || e[1] as usize >= n {
                    return Err(StelaError::InvalidMesh(format!(
                        "Edge {} references vertex out of range: [{}, {}]",
                        i, e[0], e[1]
                    )));
                }
            }
        }

        if let Some(ref normals) = self.corner_normals {
            if normals.len() != self.corner_count() {
                return Err(StelaError::InvalidMesh(format!(
                    "Corner-normal count ({}) != corner count ({})",
                    normals.len(),
                    self.corner_count()
                )));
            }
        } else if self.custom_shading && self.corner_count() > 0 {
            return Err(StelaError::InvalidMesh(
                "Custom shading flagged but no corner normals attached".into(),
            ));
        }

        // Check for degenerate polygons
        for p in 0..self.poly_count() {
            let corners = self.poly_corners(p);
            for i in 0..corners.len() {
                for j in (i + 1)..corners.len() {
                    if corners[i] == corners[j] {
                        return Err(StelaError::InvalidMesh(format!(
                            "Polygon {} has repeated vertex index {}",
                            p, corners[i]
                        )));
                    }
                }
            }
        }

        Ok(())
    }
}
