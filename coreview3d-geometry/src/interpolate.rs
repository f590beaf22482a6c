//! Depth-to-position interpolation along a drillhole trajectory

use coreview3d_core::{Error, Point3d, Result, TrajectoryPoint};

/// Interpolate the 3D position at a measured depth.
///
/// The target depth is clamped into the stored depth range, so out-of-range
/// queries return the nearest endpoint rather than extrapolating. The
/// bracketing pair is found by linear scan; trajectories are short and the
/// O(n) scan keeps the algorithm auditable.
///
/// # Errors
/// Returns [`Error::InvalidTrajectory`] for an empty point list — there is
/// no position to guess.
pub fn position_at_depth(points: &[TrajectoryPoint], target_depth: f64) -> Result<Point3d> {
    let first = points
        .first()
        .ok_or_else(|| Error::InvalidTrajectory("empty point list".to_string()))?;
    let last = points[points.len() - 1];

    let depth = target_depth.clamp(first.depth, last.depth);

    for pair in points.windows(2) {
        let (p1, p2) = (pair[0], pair[1]);
        if p1.depth <= depth && depth <= p2.depth {
            return Ok(lerp(&p1, &p2, depth));
        }
    }

    // No bracketing pair: unsorted input (precondition violation) or a
    // single-point trajectory. Snap to the nearest end.
    if depth <= first.depth {
        Ok(first.position())
    } else {
        Ok(last.position())
    }
}

fn lerp(p1: &TrajectoryPoint, p2: &TrajectoryPoint, depth: f64) -> Point3d {
    let span = p2.depth - p1.depth;
    // Duplicate-depth runs that survived sanitation must not divide by zero
    let t = if span == 0.0 { 0.0 } else { (depth - p1.depth) / span };
    Point3d::new(
        p1.x + (p2.x - p1.x) * t,
        p1.y + (p2.y - p1.y) * t,
        p1.z + (p2.z - p1.z) * t,
    )
}

/// Points with `from < depth < to` (open interval).
///
/// The interpolated endpoint positions are added separately by the caller
/// to close a segment exactly at `from`/`to`.
pub fn points_strictly_within(points: &[TrajectoryPoint], from: f64, to: f64) -> Vec<TrajectoryPoint> {
    points
        .iter()
        .filter(|p| from < p.depth && p.depth < to)
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn straight_points() -> Vec<TrajectoryPoint> {
        vec![
            TrajectoryPoint::new(0.0, 0.0, 0.0, 100.0),
            TrajectoryPoint::new(10.0, 5.0, 0.0, 91.0),
            TrajectoryPoint::new(30.0, 15.0, 0.0, 73.0),
            TrajectoryPoint::new(60.0, 30.0, 0.0, 46.0),
        ]
    }

    #[test]
    fn test_empty_point_list_is_an_error() {
        let result = position_at_depth(&[], 10.0);
        assert!(matches!(result, Err(Error::InvalidTrajectory(_))));
    }

    #[test]
    fn test_stored_depths_return_exact_points() {
        let points = straight_points();
        for p in &points {
            let pos = position_at_depth(&points, p.depth).unwrap();
            assert_relative_eq!(pos.x, p.x, epsilon = 1e-12);
            assert_relative_eq!(pos.y, p.y, epsilon = 1e-12);
            assert_relative_eq!(pos.z, p.z, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_midpoint_interpolation() {
        let points = straight_points();
        let pos = position_at_depth(&points, 5.0).unwrap();
        assert_relative_eq!(pos.x, 2.5, epsilon = 1e-12);
        assert_relative_eq!(pos.z, 95.5, epsilon = 1e-12);
    }

    #[test]
    fn test_out_of_range_clamps_to_endpoints() {
        let points = straight_points();
        let below = position_at_depth(&points, -50.0).unwrap();
        assert_eq!(below, points[0].position());
        let beyond = position_at_depth(&points, 1000.0).unwrap();
        assert_eq!(beyond, points[3].position());
    }

    #[test]
    fn test_duplicate_depth_pair_does_not_divide_by_zero() {
        // Unsorted/duplicate depths can only reach interpolation through a
        // precondition violation; the guard must still hold.
        let points = vec![
            TrajectoryPoint::new(10.0, 1.0, 0.0, 0.0),
            TrajectoryPoint::new(10.0, 2.0, 0.0, 0.0),
        ];
        let pos = position_at_depth(&points, 10.0).unwrap();
        assert_eq!(pos.x, 1.0);
    }

    #[test]
    fn test_continuity_at_segment_boundaries() {
        let points = straight_points();
        let eps = 1e-9;
        for boundary in [10.0, 30.0] {
            let before = position_at_depth(&points, boundary - eps).unwrap();
            let at = position_at_depth(&points, boundary).unwrap();
            let after = position_at_depth(&points, boundary + eps).unwrap();
            assert_relative_eq!(before.x, at.x, epsilon = 1e-6);
            assert_relative_eq!(after.x, at.x, epsilon = 1e-6);
            assert_relative_eq!(before.z, at.z, epsilon = 1e-6);
            assert_relative_eq!(after.z, at.z, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_points_strictly_within_is_open() {
        let points = straight_points();
        let inside = points_strictly_within(&points, 10.0, 60.0);
        assert_eq!(inside.len(), 1);
        assert_eq!(inside[0].depth, 30.0);

        let none = points_strictly_within(&points, 30.0, 30.0);
        assert!(none.is_empty());
    }
}
