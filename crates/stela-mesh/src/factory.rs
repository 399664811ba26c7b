//! Mesh allocation contract.
//!
//! The importer never allocates meshes directly: it asks a factory for
//! a fresh, writable mesh and populates that. Hosts with their own
//! datablock lifetime rules (naming, ownership bookkeeping) implement
//! the trait; standalone use goes through [`StandaloneFactory`].

use crate::mesh::Mesh;

/// Trait for mesh allocators.
pub trait MeshFactory {
    /// Allocates a fresh, empty mesh registered under `name`.
    fn allocate(&mut self, name: &str) -> Mesh;
}

/// Allocates detached meshes with no host bookkeeping.
#[derive(Debug, Default)]
pub struct StandaloneFactory;

impl StandaloneFactory {
    /// Creates a standalone factory.
    pub fn new() -> Self {
        Self
    }
}

impl MeshFactory for StandaloneFactory {
    fn allocate(&mut self, name: &str) -> Mesh {
        Mesh::new(name)
    }
}
