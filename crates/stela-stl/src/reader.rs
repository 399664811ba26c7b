//! Format detection and file-level reading.
//!
//! Binary detection is by file size: a file whose length matches
//! `84 + 50 × header count` exactly is binary, full stop — real
//! binary files often begin with the bytes `solid`, so the keyword
//! alone proves nothing. Only when the size test fails does the
//! header get inspected for ASCII-ness.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use stela_types::StelaResult;

use crate::ascii::AsciiReader;
use crate::binary::{BinaryReader, BINARY_HEADER_LEN, BINARY_TRI_LEN};
use crate::triangle::RawTriangle;

/// Rough bytes-per-facet estimate used to size ASCII capacity hints.
const ASCII_BYTES_PER_TRI: u64 = 250;

/// Wire format of an STL file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StlFormat {
    /// Text `solid`/`facet`/`vertex` grammar.
    Ascii,
    /// 80-byte header + count + 50-byte records.
    Binary,
}

/// A detected, opened STL file yielding raw triangles.
pub struct StlReader {
    format: StlFormat,
    triangle_hint: usize,
    inner: ReaderKind,
}

enum ReaderKind {
    Ascii(AsciiReader<BufReader<File>>),
    Binary(BinaryReader<BufReader<File>>),
}

impl StlReader {
    /// The detected wire format.
    #[inline]
    pub fn format(&self) -> StlFormat {
        self.format
    }

    /// Expected triangle count: the header count for binary files, a
    /// file-size estimate for ASCII. Capacity hint only, not a limit.
    #[inline]
    pub fn triangle_hint(&self) -> usize {
        self.triangle_hint
    }
}

impl Iterator for StlReader {
    type Item = StelaResult<RawTriangle>;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            ReaderKind::Ascii(r) => r.next(),
            ReaderKind::Binary(r) => r.next(),
        }
    }
}

/// Detects the wire format of the STL file at `path`.
pub fn detect_format(path: &Path) -> StelaResult<StlFormat> {
    let mut file = File::open(path)?;
    let file_len = file.metadata()?.len();

    let mut head = Vec::with_capacity(BINARY_HEADER_LEN + 4);
    file.by_ref()
        .take((BINARY_HEADER_LEN + 4) as u64)
        .read_to_end(&mut head)?;

    // Size check first: it is authoritative for well-formed binary files.
    if head.len() == BINARY_HEADER_LEN + 4 {
        let count = u32::from_le_bytes([head[80], head[81], head[82], head[83]]);
        let expected = (BINARY_HEADER_LEN + 4) as u64 + count as u64 * BINARY_TRI_LEN as u64;
        if file_len == expected {
            return Ok(StlFormat::Binary);
        }
    }

    let header = &head[..head.len().min(BINARY_HEADER_LEN)];
    if is_likely_ascii(header) {
        Ok(StlFormat::Ascii)
    } else {
        Ok(StlFormat::Binary)
    }
}

/// True when the header starts with `solid` and contains no bytes a
/// text file would not.
fn is_likely_ascii(header: &[u8]) -> bool {
    let text = String::from_utf8_lossy(header);
    if !text.trim_start().starts_with("solid") {
        return false;
    }
    header
        .iter()
        .all(|&b| b != 0 && (b >= 32 || b == b'\n' || b == b'\r' || b == b'\t'))
}

/// Opens the STL file at `path`, detecting its format.
pub fn open_stl(path: &Path) -> StelaResult<StlReader> {
    let format = detect_format(path)?;
    let file_len = std::fs::metadata(path)?.len();
    let file = File::open(path)?;

    match format {
        StlFormat::Binary => {
            let reader = BinaryReader::new(BufReader::new(file))?;
            // The header count can promise more than the remaining
            // bytes hold; cap the hint at the deliverable record count.
            let record_capacity =
                (file_len.saturating_sub((BINARY_HEADER_LEN + 4) as u64) / BINARY_TRI_LEN as u64) as usize;
            let triangle_hint = reader.triangle_hint().min(record_capacity);
            Ok(StlReader {
                format,
                triangle_hint,
                inner: ReaderKind::Binary(reader),
            })
        }
        StlFormat::Ascii => Ok(StlReader {
            format,
            triangle_hint: (file_len / ASCII_BYTES_PER_TRI) as usize,
            inner: ReaderKind::Ascii(AsciiReader::new(BufReader::new(file))),
        }),
    }
}
