//! Axis-aligned bounds over heterogeneous point sets

use crate::point::Point3d;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box.
///
/// The empty box is represented by the degenerate convention
/// `min = +INF, max = -INF` on every axis; callers must check
/// [`Bounds::is_degenerate`] before deriving camera distances or grid
/// extents from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub min_z: f64,
    pub max_z: f64,
}

impl Bounds {
    /// The degenerate "no geometry" box
    pub fn empty() -> Self {
        Self {
            min_x: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            min_y: f64::INFINITY,
            max_y: f64::NEG_INFINITY,
            min_z: f64::INFINITY,
            max_z: f64::NEG_INFINITY,
        }
    }

    /// True if no point has been folded into this box
    pub fn is_degenerate(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y || self.min_z > self.max_z
    }

    /// Grow the box to include a point
    pub fn expand(&mut self, p: &Point3d) {
        self.min_x = self.min_x.min(p.x);
        self.max_x = self.max_x.max(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_y = self.max_y.max(p.y);
        self.min_z = self.min_z.min(p.z);
        self.max_z = self.max_z.max(p.z);
    }

    /// Fold another box into this one
    pub fn merge(&mut self, other: &Bounds) {
        self.min_x = self.min_x.min(other.min_x);
        self.max_x = self.max_x.max(other.max_x);
        self.min_y = self.min_y.min(other.min_y);
        self.max_y = self.max_y.max(other.max_y);
        self.min_z = self.min_z.min(other.min_z);
        self.max_z = self.max_z.max(other.max_z);
    }

    /// Midpoint of the box.
    ///
    /// Callers recenter a dataset to the origin by subtracting this from
    /// every point; the box itself performs no implicit centering.
    pub fn center(&self) -> Point3d {
        Point3d::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
            (self.min_z + self.max_z) / 2.0,
        )
    }

    /// Extent of the box along each axis
    pub fn size(&self) -> (f64, f64, f64) {
        (
            self.max_x - self.min_x,
            self.max_y - self.min_y,
            self.max_z - self.min_z,
        )
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::empty()
    }
}

/// Compute the bounding box of a point set in a single pass.
///
/// Pure and side-effect free; an empty input yields the degenerate box
/// rather than an error.
pub fn compute_bounds<I>(points: I) -> Bounds
where
    I: IntoIterator<Item = Point3d>,
{
    let mut bounds = Bounds::empty();
    for p in points {
        bounds.expand(&p);
    }
    bounds
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_bounds_are_degenerate() {
        let bounds = compute_bounds(std::iter::empty());
        assert!(bounds.is_degenerate());
        assert_eq!(bounds.min_x, f64::INFINITY);
        assert_eq!(bounds.max_x, f64::NEG_INFINITY);
        assert_eq!(bounds.min_z, f64::INFINITY);
        assert_eq!(bounds.max_z, f64::NEG_INFINITY);
    }

    #[test]
    fn test_single_point_bounds() {
        let bounds = compute_bounds(vec![Point3d::new(1.0, 2.0, 3.0)]);
        assert!(!bounds.is_degenerate());
        assert_eq!(bounds.min_x, 1.0);
        assert_eq!(bounds.max_x, 1.0);
        assert_eq!(bounds.min_y, 2.0);
        assert_eq!(bounds.max_y, 2.0);
        assert_eq!(bounds.min_z, 3.0);
        assert_eq!(bounds.max_z, 3.0);
    }

    #[test]
    fn test_bounds_ordering_invariant() {
        let points = vec![
            Point3d::new(5.0, -2.0, 10.0),
            Point3d::new(-3.0, 8.0, 0.5),
            Point3d::new(0.0, 0.0, -7.0),
        ];
        let bounds = compute_bounds(points);
        assert!(bounds.min_x <= bounds.max_x);
        assert!(bounds.min_y <= bounds.max_y);
        assert!(bounds.min_z <= bounds.max_z);
        assert_eq!(bounds.min_x, -3.0);
        assert_eq!(bounds.max_x, 5.0);
        assert_eq!(bounds.min_z, -7.0);
        assert_eq!(bounds.max_z, 10.0);
    }

    #[test]
    fn test_center_and_size() {
        let bounds = compute_bounds(vec![
            Point3d::new(0.0, 0.0, 0.0),
            Point3d::new(10.0, 20.0, 30.0),
        ]);
        let center = bounds.center();
        assert_eq!(center, Point3d::new(5.0, 10.0, 15.0));
        assert_eq!(bounds.size(), (10.0, 20.0, 30.0));
    }

    #[test]
    fn test_merge_with_empty_is_identity() {
        let mut bounds = compute_bounds(vec![Point3d::new(1.0, 1.0, 1.0)]);
        let before = bounds;
        bounds.merge(&Bounds::empty());
        assert_eq!(bounds, before);
    }
}
