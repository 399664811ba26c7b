//! Integration tests for stela-stl.

use std::collections::HashSet;
use std::io::Cursor;

use glam::Vec3;
use stela_stl::soup::{cube_soup, uv_sphere_soup};
use stela_stl::{detect_format, open_stl, AsciiReader, BinaryReader, RawTriangle, StlFormat};
use stela_types::StelaError;

// ─── Fixtures ─────────────────────────────────────────────────

const TWO_FACET_ASCII: &str = r#"solid fixture
  facet normal 0 0 1
    outer loop
      vertex 0 0 0
      vertex 1 0 0
      vertex 0 1 0
    endloop
  endfacet
  facet normal 0 0 -1
    outer loop
      vertex 1 0 0
      vertex 1 1 0
      vertex 0 1 0
    endloop
  endfacet
endsolid fixture"#;

/// Assembles a binary STL byte stream from facet tuples.
fn encode_binary(header: &[u8], tris: &[(Vec3, [Vec3; 3])]) -> Vec<u8> {
    let mut bytes = vec![0u8; 80];
    let n = header.len().min(80);
    bytes[..n].copy_from_slice(&header[..n]);
    bytes.extend_from_slice(&(tris.len() as u32).to_le_bytes());
    for (normal, verts) in tris {
        for v in [normal, &verts[0], &verts[1], &verts[2]] {
            bytes.extend_from_slice(&v.x.to_le_bytes());
            bytes.extend_from_slice(&v.y.to_le_bytes());
            bytes.extend_from_slice(&v.z.to_le_bytes());
        }
        bytes.extend_from_slice(&0u16.to_le_bytes());
    }
    bytes
}

fn sample_facets() -> Vec<(Vec3, [Vec3; 3])> {
    vec![
        (
            Vec3::Z,
            [
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
        ),
        (
            Vec3::Z,
            [
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
        ),
    ]
}

fn distinct_points(tris: &[RawTriangle]) -> usize {
    let mut seen: HashSet<[u32; 3]> = HashSet::new();
    for tri in tris {
        for v in tri.verts {
            seen.insert([v.x.to_bits(), v.y.to_bits(), v.z.to_bits()]);
        }
    }
    seen.len()
}

// ─── ASCII Reader Tests ───────────────────────────────────────

#[test]
fn ascii_two_facets() {
    let tris: Vec<_> = AsciiReader::new(Cursor::new(TWO_FACET_ASCII))
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(tris.len(), 2);
    assert_eq!(tris[0].normal, Vec3::new(0.0, 0.0, 1.0));
    assert_eq!(tris[0].verts[1], Vec3::new(1.0, 0.0, 0.0));
    assert_eq!(tris[1].normal, Vec3::new(0.0, 0.0, -1.0));
}

#[test]
fn ascii_extra_vertices_ignored() {
    let text = "solid s\nfacet normal 0 0 1\nvertex 0 0 0\nvertex 1 0 0\nvertex 0 1 0\nvertex 9 9 9\nendfacet\nendsolid s";
    let tris: Vec<_> = AsciiReader::new(Cursor::new(text))
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(tris.len(), 1);
    assert_eq!(tris[0].verts[2], Vec3::new(0.0, 1.0, 0.0));
}

#[test]
fn ascii_incomplete_facet_dropped() {
    let text = "solid s\nfacet normal 0 0 1\nvertex 0 0 0\nvertex 1 0 0\nendfacet\nendsolid s";
    let tris: Vec<_> = AsciiReader::new(Cursor::new(text))
        .collect::<Result<_, _>>()
        .unwrap();
    assert!(tris.is_empty());
}

#[test]
fn ascii_malformed_float() {
    let text = "solid s\nfacet normal 0 0 1\nvertex 0 zero 0\nvertex 1 0 0\nvertex 0 1 0\nendfacet";
    let result: Result<Vec<_>, _> = AsciiReader::new(Cursor::new(text)).collect();
    assert!(matches!(result, Err(StelaError::InvalidStl(_))));
}

#[test]
fn ascii_missing_coordinate() {
    let text = "solid s\nfacet normal 0 0\nvertex 0 0 0\nvertex 1 0 0\nvertex 0 1 0\nendfacet";
    let result: Result<Vec<_>, _> = AsciiReader::new(Cursor::new(text)).collect();
    assert!(matches!(result, Err(StelaError::InvalidStl(_))));
}

#[test]
fn ascii_stops_after_error() {
    let text = "solid s\nfacet normal 0 0 1\nvertex x 0 0\nvertex 1 0 0\nvertex 0 1 0\nendfacet\nfacet normal 0 0 1\nvertex 0 0 0\nvertex 1 0 0\nvertex 0 1 0\nendfacet";
    let mut reader = AsciiReader::new(Cursor::new(text));
    assert!(reader.next().unwrap().is_err());
    assert!(reader.next().is_none());
}

#[test]
fn ascii_scientific_notation() {
    let text = "solid s\nfacet normal 0 0 1\nvertex 1.5e-3 -2E2 0.25\nvertex 1 0 0\nvertex 0 1 0\nendfacet";
    let tris: Vec<_> = AsciiReader::new(Cursor::new(text))
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(tris[0].verts[0], Vec3::new(1.5e-3, -200.0, 0.25));
}

// ─── Binary Reader Tests ──────────────────────────────────────

#[test]
fn binary_roundtrip_values() {
    let facets = sample_facets();
    let bytes = encode_binary(b"fixture", &facets);
    let reader = BinaryReader::new(Cursor::new(bytes)).unwrap();
    assert_eq!(reader.triangle_hint(), 2);

    let tris: Vec<_> = reader.collect::<Result<_, _>>().unwrap();
    assert_eq!(tris.len(), 2);
    assert_eq!(tris[0].normal, facets[0].0);
    assert_eq!(tris[0].verts, facets[0].1);
    assert_eq!(tris[1].verts, facets[1].1);
}

#[test]
fn binary_empty_file() {
    let bytes = encode_binary(b"empty", &[]);
    let reader = BinaryReader::new(Cursor::new(bytes)).unwrap();
    assert_eq!(reader.triangle_hint(), 0);
    assert_eq!(reader.count(), 0);
}

#[test]
fn binary_truncated_record() {
    let mut bytes = encode_binary(b"fixture", &sample_facets());
    bytes.truncate(bytes.len() - 10);
    let reader = BinaryReader::new(Cursor::new(bytes)).unwrap();
    let results: Vec<_> = reader.collect();
    assert_eq!(results.len(), 2);
    assert!(results[0].is_ok());
    assert!(matches!(results[1], Err(StelaError::InvalidStl(_))));
}

#[test]
fn binary_truncated_header() {
    let bytes = vec![0u8; 40];
    assert!(matches!(
        BinaryReader::new(Cursor::new(bytes)),
        Err(StelaError::InvalidStl(_))
    ));
}

#[test]
fn binary_attribute_bytes_ignored() {
    let facets = sample_facets();
    let mut bytes = encode_binary(b"fixture", &facets[..1]);
    let len = bytes.len();
    bytes[len - 2] = 0xFF;
    bytes[len - 1] = 0xFF;
    let tris: Vec<_> = BinaryReader::new(Cursor::new(bytes))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(tris.len(), 1);
}

// ─── Detection Tests ──────────────────────────────────────────

#[test]
fn detects_binary_by_size() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cube.stl");
    std::fs::write(&path, encode_binary(b"made by stela", &sample_facets())).unwrap();
    assert_eq!(detect_format(&path).unwrap(), StlFormat::Binary);
}

#[test]
fn binary_starting_with_solid_is_still_binary() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tricky.stl");
    std::fs::write(&path, encode_binary(b"solid tricky", &sample_facets())).unwrap();
    assert_eq!(detect_format(&path).unwrap(), StlFormat::Binary);
}

#[test]
fn detects_ascii() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plate.stl");
    std::fs::write(&path, TWO_FACET_ASCII).unwrap();
    assert_eq!(detect_format(&path).unwrap(), StlFormat::Ascii);
}

#[test]
fn junk_without_solid_prefix_is_binary() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("junk.stl");
    std::fs::write(&path, b"not an stl file at all").unwrap();
    assert_eq!(detect_format(&path).unwrap(), StlFormat::Binary);
}

#[test]
fn open_stl_ascii_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plate.stl");
    std::fs::write(&path, TWO_FACET_ASCII).unwrap();

    let reader = open_stl(&path).unwrap();
    assert_eq!(reader.format(), StlFormat::Ascii);
    let expected_hint = TWO_FACET_ASCII.len() / 250;
    assert_eq!(reader.triangle_hint(), expected_hint);

    let tris: Vec<_> = reader.collect::<Result<_, _>>().unwrap();
    assert_eq!(tris.len(), 2);
}

#[test]
fn open_stl_binary_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cube.stl");
    std::fs::write(&path, encode_binary(b"made by stela", &sample_facets())).unwrap();

    let reader = open_stl(&path).unwrap();
    assert_eq!(reader.format(), StlFormat::Binary);
    assert_eq!(reader.triangle_hint(), 2);

    let tris: Vec<_> = reader.collect::<Result<_, _>>().unwrap();
    assert_eq!(tris.len(), 2);
}

// ─── Soup Generator Tests ─────────────────────────────────────

#[test]
fn cube_soup_shape() {
    let tris = cube_soup(2.0);
    assert_eq!(tris.len(), 12);
    assert_eq!(distinct_points(&tris), 8);
}

#[test]
fn cube_soup_windings_match_normals() {
    for tri in cube_soup(1.0) {
        let geometric = tri.computed_normal();
        assert!(
            geometric.dot(tri.normal) > 0.99,
            "winding disagrees with facet normal {:?}",
            tri.normal
        );
    }
}

#[test]
fn sphere_soup_counts() {
    let stacks = 4;
    let slices = 8;
    let tris = uv_sphere_soup(1.0, stacks, slices);
    assert_eq!(tris.len(), 2 * slices * (stacks - 1));
    assert_eq!(distinct_points(&tris), slices * (stacks - 1) + 2);
}

#[test]
fn sphere_soup_points_on_radius() {
    for tri in uv_sphere_soup(2.5, 6, 12) {
        for v in tri.verts {
            assert!((v.length() - 2.5).abs() < 1e-4);
        }
    }
}

#[test]
fn sphere_soup_has_no_degenerate_facets() {
    for tri in uv_sphere_soup(1.0, 5, 9) {
        let [a, b, c] = tri.verts;
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }
}
