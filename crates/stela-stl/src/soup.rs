//! Procedural triangle-soup generators for tests and benchmarks.
//!
//! These emit unindexed soups the way an exporter would: shared corner
//! points are repeated per facet, bit-identically, so downstream
//! interning has real deduplication work to do. Counts are exact and
//! deterministic.

use glam::Vec3;

use crate::triangle::RawTriangle;

/// Generates an axis-aligned cube of the given edge length, centered
/// at the origin, as 12 triangles with outward facet normals.
///
/// The soup repeats the 8 corner points 36 times in total; interning
/// collapses them back to 8.
pub fn cube_soup(edge: f32) -> Vec<RawTriangle> {
    let h = edge / 2.0;
    let corners = [
        Vec3::new(-h, -h, -h),
        Vec3::new(h, -h, -h),
        Vec3::new(h, h, -h),
        Vec3::new(-h, h, -h),
        Vec3::new(-h, -h, h),
        Vec3::new(h, -h, h),
        Vec3::new(h, h, h),
        Vec3::new(-h, h, h),
    ];

    // Quads wound counter-clockwise as seen from outside.
    let faces: [([usize; 4], Vec3); 6] = [
        ([0, 3, 2, 1], Vec3::NEG_Z),
        ([4, 5, 6, 7], Vec3::Z),
        ([0, 1, 5, 4], Vec3::NEG_Y),
        ([2, 3, 7, 6], Vec3::Y),
        ([0, 4, 7, 3], Vec3::NEG_X),
        ([1, 2, 6, 5], Vec3::X),
    ];

    let mut tris = Vec::with_capacity(12);
    for (quad, normal) in faces {
        tris.push(RawTriangle::new(
            normal,
            [corners[quad[0]], corners[quad[1]], corners[quad[2]]],
        ));
        tris.push(RawTriangle::new(
            normal,
            [corners[quad[0]], corners[quad[2]], corners[quad[3]]],
        ));
    }
    tris
}

/// Generates a UV sphere as an unindexed soup.
///
/// Yields `2 * slices * (stacks - 1)` triangles covering a closed
/// surface. Shared points are emitted bit-identically (the seam
/// column and the poles are computed once per position, not per
/// facet), so interning welds the sphere closed:
/// `slices * (stacks - 1) + 2` distinct points.
pub fn uv_sphere_soup(radius: f32, stacks: usize, slices: usize) -> Vec<RawTriangle> {
    assert!(stacks >= 2 && slices >= 3);

    // Poles and the wrapped seam column must reproduce identical bit
    // patterns, so positions are a pure function of (ring, slice mod slices).
    let point = |i: usize, j: usize| -> Vec3 {
        if i == 0 {
            return Vec3::new(0.0, radius, 0.0);
        }
        if i == stacks {
            return Vec3::new(0.0, -radius, 0.0);
        }
        let phi = std::f32::consts::PI * i as f32 / stacks as f32;
        let theta = std::f32::consts::TAU * (j % slices) as f32 / slices as f32;
        Vec3::new(
            radius * phi.sin() * theta.cos(),
            radius * phi.cos(),
            radius * phi.sin() * theta.sin(),
        )
    };

    let mut tris = Vec::with_capacity(2 * slices * (stacks - 1));
    for i in 0..stacks {
        for j in 0..slices {
            let a = point(i, j);
            let b = point(i + 1, j);
            let a1 = point(i, j + 1);
            let b1 = point(i + 1, j + 1);

            // Skip the degenerate cap triangles at the poles.
            if i != 0 {
                tris.push(RawTriangle::from_verts([a, b, a1]));
            }
            if i != stacks - 1 {
                tris.push(RawTriangle::from_verts([a1, b, b1]));
            }
        }
    }
    tris
}
