//! # stela-mesh
//!
//! Indexed triangle mesh container in the offsets-plus-corners layout
//! used by the import pipeline.
//!
//! ## Key Types
//!
//! - [`Mesh`] — The core mesh type. Stores vertex positions, CSR polygon
//!   offsets, a flat corner-vertex array, derived edges, and optional
//!   per-corner custom normals.
//! - [`MeshFactory`] — The narrow allocation contract through which the
//!   importer obtains a fresh mesh to populate.
//! - [`topology::calc_edges`] — Edge derivation from corner pairs.
//! - [`normals`] — Auto-computed shading normals (overridden by custom
//!   per-corner normals when attached).

pub mod factory;
pub mod mesh;
pub mod normals;
pub mod topology;

pub use factory::{MeshFactory, StandaloneFactory};
pub use mesh::Mesh;
