//! # CoreView3D Geometry
//!
//! The geometric data pipeline for drillhole visualization: computing 3D
//! trajectories from collar and survey rows, interpolating positions at
//! arbitrary depths, normalizing assay intervals, and projecting
//! trajectories onto vertical cross-section planes.

pub mod cross_section;
pub mod desurvey;
pub mod interpolate;
pub mod intervals;

// Re-export commonly used items
pub use cross_section::*;
pub use desurvey::*;
pub use interpolate::*;
pub use intervals::*;
