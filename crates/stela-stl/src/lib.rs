//! # stela-stl
//!
//! STL byte-stream parsing: format detection plus ASCII and binary
//! readers that tokenize a file into raw, unindexed triangles.
//!
//! Readers yield `StelaResult<RawTriangle>` one facet at a time and
//! know nothing about the indexed mesh built downstream.
//!
//! ## Key Types
//!
//! - [`RawTriangle`] — One facet as read from the wire: a normal plus
//!   three independent corner points.
//! - [`StlReader`] — File-level reader; [`open_stl`] detects the
//!   format and picks the right inner parser.
//! - [`soup`] — Procedural triangle-soup generators for tests and
//!   benchmarks.

pub mod ascii;
pub mod binary;
pub mod reader;
pub mod soup;
pub mod triangle;

pub use ascii::AsciiReader;
pub use binary::BinaryReader;
pub use reader::{detect_format, open_stl, StlFormat, StlReader};
pub use triangle::RawTriangle;
