//! # CoreView3D
//!
//! Geometry pipeline for interactive 3D mining drillhole visualization.
//!
//! This is the umbrella crate that provides convenient access to the
//! CoreView3D workspace. Use it to get everything in one place, or depend
//! on the individual crates for more granular control:
//!
//! - **Core**: data records, trajectory points, bounds, errors
//! - **Geometry**: desurveying, depth interpolation, interval
//!   normalization, cross-section projection
//! - **Scene**: colored segment building and the scene object registry
//!
//! ## Quick Start
//!
//! ```rust
//! use coreview3d::{CollarRecord, geometry::desurvey_all};
//!
//! let collars = vec![CollarRecord {
//!     hole_id: "DH-001".to_string(),
//!     east: 1000.0,
//!     north: 5000.0,
//!     elevation: 400.0,
//!     max_depth: 120.0,
//!     azimuth: 90.0,
//!     dip: -60.0,
//!     date: None,
//!     project: None,
//! }];
//!
//! let trajectories = desurvey_all(&collars, &[]);
//! assert_eq!(trajectories[0].end_depth(), 120.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `default`: enables `geometry` and `scene`
//! - `geometry`: the geometric data pipeline
//! - `scene`: renderable geometry and the scene object registry

// Re-export core functionality
pub use coreview3d_core::*;

// Re-export sub-crates
#[cfg(feature = "geometry")]
pub use coreview3d_geometry as geometry;

#[cfg(feature = "scene")]
pub use coreview3d_scene as scene;
