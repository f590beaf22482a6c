//! # CoreView3D Scene
//!
//! Turns normalized drillhole data into renderable geometry (colored line
//! segments, point markers, grid/axes helpers) and manages the lifecycle of
//! the scene objects built from it through a type-keyed registry with a
//! deterministic create/dispose contract.

pub mod builder;
pub mod compose;
pub mod lithology;
pub mod registry;

// Re-export commonly used items
pub use builder::*;
pub use compose::*;
pub use lithology::*;
pub use registry::*;
