//! Point types and related functionality

use nalgebra::{Point3, Vector2, Vector3};
use serde::{Deserialize, Serialize};

/// A 3D point with double precision coordinates
pub type Point3d = Point3<f64>;

/// A 3D vector with double precision components
pub type Vector3d = Vector3<f64>;

/// A 2D vector with double precision components (horizontal-plane math)
pub type Vector2d = Vector2<f64>;

/// A single sample along a drillhole trajectory.
///
/// `depth` is the measured depth down the hole path, a monotonic proxy for
/// arc length rather than a spatial coordinate. Within one trajectory,
/// points are ordered by non-decreasing depth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    pub depth: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl TrajectoryPoint {
    /// Create a new trajectory point
    pub fn new(depth: f64, x: f64, y: f64, z: f64) -> Self {
        Self { depth, x, y, z }
    }

    /// The spatial position of this sample
    pub fn position(&self) -> Point3d {
        Point3d::new(self.x, self.y, self.z)
    }

    /// The horizontal (easting, northing) coordinates of this sample
    pub fn horizontal(&self) -> Vector2d {
        Vector2d::new(self.x, self.y)
    }
}
