//! ASCII STL reader.
//!
//! Line-oriented scan over the `solid`/`facet normal`/`outer loop`/
//! `vertex`/`endfacet` grammar. Only three keywords matter: a facet's
//! normal, its vertices (first three; extras are ignored), and the
//! `endfacet` that closes it. Everything else is skipped.

use std::io::{BufRead, Lines};

use glam::Vec3;
use stela_types::{StelaError, StelaResult};

use crate::triangle::RawTriangle;

/// Streaming reader over an ASCII STL byte stream.
///
/// Yields one triangle per complete facet block. Facets with fewer
/// than three vertices are dropped silently; unparseable coordinates
/// surface `InvalidStl` and end the stream.
pub struct AsciiReader<R: BufRead> {
    lines: Lines<R>,
    normal: Vec3,
    verts: Vec<Vec3>,
    done: bool,
}

impl<R: BufRead> AsciiReader<R> {
    /// Creates a reader over a buffered byte stream.
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            normal: Vec3::ZERO,
            verts: Vec::with_capacity(3),
            done: false,
        }
    }

    fn parse_line(&mut self, line: &str) -> StelaResult<Option<RawTriangle>> {
        let line = line.trim();

        if line.starts_with("vertex") {
            if self.verts.len() < 3 {
                let v = parse_floats(line, 1, "vertex")?;
                self.verts.push(v);
            }
        } else if line.starts_with("facet normal") {
            self.normal = parse_floats(line, 2, "facet normal")?;
            self.verts.clear();
        } else if line.starts_with("endfacet") {
            if self.verts.len() == 3 {
                let tri = RawTriangle::new(self.normal, [self.verts[0], self.verts[1], self.verts[2]]);
                self.verts.clear();
                return Ok(Some(tri));
            }
            self.verts.clear();
        }

        Ok(None)
    }
}

impl<R: BufRead> Iterator for AsciiReader<R> {
    type Item = StelaResult<RawTriangle>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            let line = match self.lines.next() {
                None => {
                    self.done = true;
                    return None;
                }
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(e.into()));
                }
                Some(Ok(line)) => line,
            };

            match self.parse_line(&line) {
                Ok(Some(tri)) => return Some(Ok(tri)),
                Ok(None) => continue,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

/// Parses the three floats following `skip_words` keywords.
fn parse_floats(line: &str, skip_words: usize, what: &str) -> StelaResult<Vec3> {
    let mut parts = line.split_whitespace().skip(skip_words);
    let mut out = [0.0f32; 3];
    for slot in &mut out {
        let token = parts.next().ok_or_else(|| {
            StelaError::InvalidStl(format!("'{what}' line with missing coordinates: {line}"))
        })?;
        *slot = token.parse().map_err(|_| {
            StelaError::InvalidStl(format!("malformed float '{token}' in '{what}' line"))
        })?;
    }
    Ok(Vec3::from_array(out))
}
