//! # stela-import
//!
//! The indexed mesh builder. Converts an unordered stream of raw
//! triangles into a compact indexed mesh — deduplicated vertex table,
//! corner-vertex topology, derived edges, optional per-corner custom
//! normals — discarding degenerate and exactly duplicated triangles
//! along the way.
//!
//! ## Key Types
//!
//! - [`MeshBuilder`] — streaming ingestion plus one-shot
//!   materialization into a [`stela_mesh::Mesh`].
//! - [`BuildStats`] — rejection counters.
//! - [`import_stl`] / [`ImportParams`] — the file-level driver.

pub mod builder;
pub mod importer;
pub mod params;

pub use builder::{BuildStats, MeshBuilder};
pub use importer::{import_stl, import_triangles};
pub use params::ImportParams;
