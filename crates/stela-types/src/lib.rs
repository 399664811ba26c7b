//! # stela-types
//!
//! Shared types and error definitions for the stela STL import
//! pipeline.
//!
//! This crate has zero domain logic — it defines the vocabulary
//! that all other stela crates share.

pub mod error;
pub mod scalar;

pub use error::{StelaError, StelaResult};
pub use scalar::Scalar;
