//! Scalar type alias for the import pipeline.
//!
//! STL stores all coordinates as 32-bit floats, so the importer never
//! needs more precision than the file format itself carries.

/// The floating-point type used throughout the importer.
///
/// Set to `f32` to match the STL wire format. Interning compares
/// values by bit pattern, so precision here is exactly the precision
/// of the input data.
pub type Scalar = f32;
