//! Core data structures for CoreView3D
//!
//! This crate provides the fundamental types for drillhole visualization:
//! trajectory points, collar/survey/assay records, axis-aligned bounds,
//! and the shared error type.

pub mod bounds;
pub mod error;
pub mod point;
pub mod records;

pub use bounds::*;
pub use error::*;
pub use point::*;
pub use records::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point3, Vector2, Vector3};
