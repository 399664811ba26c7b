//! Binary STL reader.
//!
//! Layout: 80-byte header, little-endian `u32` triangle count, then
//! one 50-byte record per triangle:
//! - Normal: 3 × f32 (12 bytes)
//! - Vertices: 3 × 3 × f32 (36 bytes)
//! - Attribute byte count: u16 (2 bytes, ignored)

use std::io::Read;

use glam::Vec3;
use stela_types::{StelaError, StelaResult};

use crate::triangle::RawTriangle;

/// Header length in bytes, before the triangle count.
pub const BINARY_HEADER_LEN: usize = 80;

/// Size of one facet record in bytes.
pub const BINARY_TRI_LEN: usize = 50;

/// Streaming reader over a binary STL byte stream.
///
/// Construction consumes the header and triangle count; iteration
/// yields one facet record at a time. A stream that ends before the
/// promised count is delivered surfaces `InvalidStl`.
pub struct BinaryReader<R: Read> {
    reader: R,
    tris_total: u32,
    tris_read: u32,
}

impl<R: Read> BinaryReader<R> {
    /// Reads the header and triangle count, leaving the stream
    /// positioned at the first facet record.
    pub fn new(mut reader: R) -> StelaResult<Self> {
        let mut header = [0u8; BINARY_HEADER_LEN];
        read_exact_or_invalid(&mut reader, &mut header, "header")?;

        let mut count_bytes = [0u8; 4];
        read_exact_or_invalid(&mut reader, &mut count_bytes, "triangle count")?;

        Ok(Self {
            reader,
            tris_total: u32::from_le_bytes(count_bytes),
            tris_read: 0,
        })
    }

    /// Triangle count promised by the header; used as the builder's
    /// capacity hint.
    #[inline]
    pub fn triangle_hint(&self) -> usize {
        self.tris_total as usize
    }
}

impl<R: Read> Iterator for BinaryReader<R> {
    type Item = StelaResult<RawTriangle>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.tris_read >= self.tris_total {
            return None;
        }

        let mut record = [0u8; BINARY_TRI_LEN];
        if let Err(e) = read_exact_or_invalid(&mut self.reader, &mut record, "facet record") {
            self.tris_read = self.tris_total;
            return Some(Err(e));
        }
        self.tris_read += 1;

        Some(Ok(decode_record(&record)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.tris_total - self.tris_read) as usize;
        (0, Some(remaining))
    }
}

/// Decodes one 50-byte facet record. Bytes 48..50 are the attribute
/// byte count, ignored.
fn decode_record(record: &[u8; BINARY_TRI_LEN]) -> RawTriangle {
    RawTriangle {
        normal: read_vec3(&record[0..12]),
        verts: [
            read_vec3(&record[12..24]),
            read_vec3(&record[24..36]),
            read_vec3(&record[36..48]),
        ],
    }
}

/// Reads three little-endian f32s.
fn read_vec3(data: &[u8]) -> Vec3 {
    let x = f32::from_le_bytes([data[0], data[1], data[2], data[3]]);
    let y = f32::from_le_bytes([data[4], data[5], data[6], data[7]]);
    let z = f32::from_le_bytes([data[8], data[9], data[10], data[11]]);
    Vec3::new(x, y, z)
}

/// `read_exact` with EOF reported as a malformed-file error rather
/// than a bare I/O error.
fn read_exact_or_invalid<R: Read>(reader: &mut R, buf: &mut [u8], what: &str) -> StelaResult<()> {
    reader.read_exact(buf).map_err(|e| match e.kind() {
        std::io::ErrorKind::UnexpectedEof => {
            StelaError::InvalidStl(format!("truncated {what}"))
        }
        _ => StelaError::Io(e),
    })
}
