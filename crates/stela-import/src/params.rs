//! Import configuration.

use serde::{Deserialize, Serialize};

/// Options controlling how an STL stream becomes a mesh.
///
/// Defaults are conservative: auto-computed shading normals and no
/// validation pass.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ImportParams {
    /// Attach each facet's stored normal to all three of its corners
    /// as custom normals, overriding auto-computed shading.
    pub use_facet_normal: bool,

    /// Validate the finished mesh before returning it.
    pub validate_mesh: bool,
}
