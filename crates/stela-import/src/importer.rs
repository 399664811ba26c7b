//! Import driver: STL file to finished mesh.

use std::path::Path;

use stela_mesh::{Mesh, MeshFactory};
use stela_stl::{open_stl, RawTriangle};
use stela_types::StelaResult;
use tracing::debug;

use crate::builder::MeshBuilder;
use crate::params::ImportParams;

/// Imports the STL file at `path` into an indexed mesh.
///
/// Detects the wire format, names the mesh after the file stem
/// (falling back to `"mesh"`), streams every triangle through the
/// builder, and materializes. Reader errors (I/O, malformed STL)
/// propagate; rejected triangles do not.
pub fn import_stl(
    path: &Path,
    params: &ImportParams,
    factory: &mut dyn MeshFactory,
) -> StelaResult<Mesh> {
    let reader = open_stl(path)?;
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("mesh")
        .to_string();
    let hint = reader.triangle_hint();
    debug!(
        file = %path.display(),
        format = ?reader.format(),
        tris_hint = hint,
        "importing STL"
    );

    import_triangles(reader, hint, params, factory, &name)
}

/// Imports an already-tokenized triangle stream.
///
/// The shared core behind [`import_stl`], usable directly with
/// in-memory sources. `tris_hint` sizes the builder's tables.
pub fn import_triangles<I>(
    tris: I,
    tris_hint: usize,
    params: &ImportParams,
    factory: &mut dyn MeshFactory,
    name: &str,
) -> StelaResult<Mesh>
where
    I: IntoIterator<Item = StelaResult<RawTriangle>>,
{
    let mut builder = MeshBuilder::new(tris_hint, params.use_facet_normal);

    for tri in tris {
        let tri = tri?;
        let [a, b, c] = tri.verts;
        if params.use_facet_normal {
            builder.add_triangle_with_normal(a, b, c, tri.normal);
        } else {
            builder.add_triangle(a, b, c);
        }
    }

    let mesh = builder.to_mesh(factory, name);
    debug!(
        mesh = %mesh.name,
        verts = mesh.vertex_count(),
        polys = mesh.poly_count(),
        edges = mesh.edge_count(),
        "mesh built"
    );

    if params.validate_mesh {
        mesh.validate()?;
    }
    Ok(mesh)
}
