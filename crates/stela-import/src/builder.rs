//! Streaming triangle ingestion and mesh materialization.
//!
//! Ingestion is strictly sequential: every triangle's fate depends on
//! the vertices and triangles accepted before it. Materialization
//! walks the accumulated lists once, filling the two purely positional
//! output arrays (polygon offsets, corner vertices) in parallel over
//! disjoint chunks.

use std::collections::hash_map::Entry;

use glam::Vec3;
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use stela_mesh::{topology, Mesh, MeshFactory};
use tracing::info;

/// Chunk size for the parallel polygon-offset fill.
const OFFSET_FILL_CHUNK: usize = 4096;

/// Triangles per chunk for the parallel corner-vertex fill.
const CORNER_FILL_CHUNK: usize = 2048;

/// Exact-identity key for a vertex position.
///
/// Equality and hashing act on the raw f32 bit patterns: no epsilon,
/// `-0.0` and `0.0` are distinct, and NaNs compare equal only to the
/// same NaN bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct VertexKey([u32; 3]);

impl VertexKey {
    #[inline]
    fn of(point: Vec3) -> Self {
        Self([point.x.to_bits(), point.y.to_bits(), point.z.to_bits()])
    }
}

/// Counters for triangles rejected during ingestion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildStats {
    /// Triangles dropped because two of their points coincided.
    pub degenerate_tris: u64,
    /// Triangles dropped as exact ordered-triple repeats.
    pub duplicate_tris: u64,
}

/// Accumulates an indexed mesh from a stream of raw triangles.
///
/// Vertices are interned by exact bit pattern, so each distinct point
/// is stored once and keeps its index forever. Triangles are rejected
/// when degenerate (any two corners interned to the same index) or
/// when the exact ordered index triple was already accepted; a
/// triangle re-specified with rotated or reflected corner order is a
/// distinct triple and is kept.
///
/// The builder is consumed by [`MeshBuilder::to_mesh`]; it is not
/// reusable afterwards.
pub struct MeshBuilder {
    verts: Vec<Vec3>,
    vert_ids: FxHashMap<VertexKey, u32>,
    tris: Vec<[u32; 3]>,
    seen_tris: FxHashSet<[u32; 3]>,
    corner_normals: Vec<Vec3>,
    use_custom_normals: bool,
    stats: BuildStats,
}

impl MeshBuilder {
    /// Creates a builder expecting roughly `tris_hint` triangles.
    ///
    /// The hint sizes the internal tables only (upper bound: every
    /// corner point unique, so 3x the hint for vertices); it is not a
    /// limit. `use_custom_normals` enables per-corner normal tracking.
    pub fn new(tris_hint: usize, use_custom_normals: bool) -> Self {
        Self {
            verts: Vec::with_capacity(tris_hint * 3),
            vert_ids: FxHashMap::with_capacity_and_hasher(tris_hint * 3, Default::default()),
            tris: Vec::with_capacity(tris_hint),
            seen_tris: FxHashSet::with_capacity_and_hasher(tris_hint, Default::default()),
            corner_normals: if use_custom_normals {
                Vec::with_capacity(tris_hint * 3)
            } else {
                Vec::new()
            },
            use_custom_normals,
            stats: BuildStats::default(),
        }
    }

    /// Returns the index of `point`, interning it on first sight.
    fn intern(&mut self, point: Vec3) -> u32 {
        let next_id = self.verts.len() as u32;
        match self.vert_ids.entry(VertexKey::of(point)) {
            Entry::Occupied(e) => *e.get(),
            Entry::Vacant(e) => {
                e.insert(next_id);
                self.verts.push(point);
                next_id
            }
        }
    }

    /// Ingests one triangle. Returns whether it was accepted.
    ///
    /// All three points are interned before any check runs, so the
    /// distinct points of a rejected triangle still enter the vertex
    /// table.
    pub fn add_triangle(&mut self, a: Vec3, b: Vec3, c: Vec3) -> bool {
        let v1 = self.intern(a);
        let v2 = self.intern(b);
        let v3 = self.intern(c);
        if v1 == v2 || v1 == v3 || v2 == v3 {
            self.stats.degenerate_tris += 1;
            return false;
        }
        if !self.seen_tris.insert([v1, v2, v3]) {
            self.stats.duplicate_tris += 1;
            return false;
        }
        self.tris.push([v1, v2, v3]);
        true
    }

    /// Ingests one triangle carrying a facet normal.
    ///
    /// On acceptance the normal is recorded three times, one copy per
    /// corner slot, keeping slot range `3i..3i+3` aligned with
    /// triangle `i`. Rejected triangles record nothing.
    pub fn add_triangle_with_normal(&mut self, a: Vec3, b: Vec3, c: Vec3, normal: Vec3) -> bool {
        let accepted = self.add_triangle(a, b, c);
        if accepted {
            self.corner_normals.extend_from_slice(&[normal; 3]);
        }
        accepted
    }

    /// Number of distinct vertices interned so far.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.verts.len()
    }

    /// Number of triangles accepted so far.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.tris.len()
    }

    /// Rejection counters accumulated so far.
    #[inline]
    pub fn stats(&self) -> BuildStats {
        self.stats
    }

    /// Materializes the indexed mesh, consuming the builder.
    ///
    /// Steps, in order: report rejection counts, obtain a fresh mesh
    /// from `factory`, move the vertex table in, fill polygon offsets
    /// and corner vertices (parallel, disjoint chunks), derive edges,
    /// then attach custom normals. Edges must exist before the normals
    /// are attached. A builder with zero accepted triangles still
    /// produces a well-formed empty mesh.
    pub fn to_mesh(self, factory: &mut dyn MeshFactory, name: &str) -> Mesh {
        if self.stats.degenerate_tris > 0 {
            info!(
                "{} degenerate triangles were removed",
                self.stats.degenerate_tris
            );
        }
        if self.stats.duplicate_tris > 0 {
            info!(
                "{} duplicate triangles were removed",
                self.stats.duplicate_tris
            );
        }

        let mut mesh = factory.allocate(name);
        mesh.positions = self.verts;

        let poly_count = self.tris.len();
        let corner_count = poly_count * 3;

        // Every offset is a pure function of its position, including
        // the trailing sentinel (3 * poly_count = corner count).
        let mut poly_offsets = vec![0u32; poly_count + 1];
        poly_offsets
            .par_chunks_mut(OFFSET_FILL_CHUNK)
            .enumerate()
            .for_each(|(chunk_idx, chunk)| {
                let base = chunk_idx * OFFSET_FILL_CHUNK;
                for (k, slot) in chunk.iter_mut().enumerate() {
                    *slot = ((base + k) * 3) as u32;
                }
            });
        mesh.poly_offsets = poly_offsets;

        let mut corner_verts = vec![0u32; corner_count];
        corner_verts
            .par_chunks_mut(3 * CORNER_FILL_CHUNK)
            .zip(self.tris.par_chunks(CORNER_FILL_CHUNK))
            .for_each(|(corner_chunk, tri_chunk)| {
                for (corners, tri) in corner_chunk.chunks_exact_mut(3).zip(tri_chunk) {
                    corners[0] = tri[0];
                    corners[1] = tri[1];
                    corners[2] = tri[2];
                }
            });
        mesh.corner_verts = corner_verts;

        topology::calc_edges(&mut mesh);

        if self.use_custom_normals && self.corner_normals.len() == corner_count {
            mesh.set_custom_normals(self.corner_normals);
        }

        mesh
    }
}
