//! Raw triangle value type.

use glam::Vec3;

/// One STL facet: a per-facet normal and three independent corner
/// points, exactly as stored on the wire. No indexing, no sharing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawTriangle {
    /// Facet normal as recorded in the file. Not trusted to be unit
    /// length or even consistent with the winding.
    pub normal: Vec3,
    /// The three corner points, winding order preserved.
    pub verts: [Vec3; 3],
}

impl RawTriangle {
    /// Creates a triangle from an explicit normal and corner points.
    #[inline]
    pub const fn new(normal: Vec3, verts: [Vec3; 3]) -> Self {
        Self { normal, verts }
    }

    /// Creates a triangle whose normal is computed from the winding.
    pub fn from_verts(verts: [Vec3; 3]) -> Self {
        let mut tri = Self::new(Vec3::ZERO, verts);
        tri.normal = tri.computed_normal();
        tri
    }

    /// Geometric normal from the corner winding, normalized.
    /// Zero for triangles with no area.
    pub fn computed_normal(&self) -> Vec3 {
        let e1 = self.verts[1] - self.verts[0];
        let e2 = self.verts[2] - self.verts[0];
        e1.cross(e2).normalize_or_zero()
    }
}
