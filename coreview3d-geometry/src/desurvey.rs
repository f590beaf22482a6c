//! Trajectory computation from collar and survey measurements
//!
//! Converts depth/azimuth/dip survey rows into 3D points using the tangent
//! method with interval-averaged orientation. Holes without survey rows get
//! a straight two-point projection from the collar orientation.

use coreview3d_core::{CollarRecord, DrillholeTrajectory, SurveyRecord, TrajectoryPoint};
use itertools::Itertools;

/// Displacement over a course of length `d` at the given orientation.
///
/// Azimuth is degrees clockwise from north; dip is degrees from horizontal
/// with negative pointing down (-90 is vertical). Returns (east, north,
/// vertical) deltas, vertical negative for a descending hole.
fn displacement(d: f64, azimuth: f64, dip: f64) -> (f64, f64, f64) {
    let az = azimuth.to_radians();
    // Inclination from vertical: -90 dip -> 0, horizontal -> 90
    let incl = (90.0 + dip).to_radians();
    let dx = d * incl.sin() * az.sin();
    let dy = d * incl.sin() * az.cos();
    let dz = -d * incl.cos();
    (dx, dy, dz)
}

/// Compute the 3D trajectory of a single hole.
///
/// With survey rows, each interval uses the average of the bracketing
/// orientations (the collar orientation seeds the first interval). Without
/// survey rows, the hole is projected straight to the collar's `max_depth`.
///
/// Survey rows are sorted by depth before use; rows are assumed to belong
/// to this hole.
pub fn desurvey_hole(collar: &CollarRecord, surveys: &[SurveyRecord]) -> DrillholeTrajectory {
    let mut x = collar.east;
    let mut y = collar.north;
    let mut z = collar.elevation;

    let mut points = vec![TrajectoryPoint::new(0.0, x, y, z)];
    let has_survey = !surveys.is_empty();

    if has_survey {
        let mut sorted: Vec<&SurveyRecord> = surveys.iter().collect();
        sorted.sort_by(|a, b| a.depth.total_cmp(&b.depth));

        let mut prev_depth = 0.0;
        let mut prev_az = collar.azimuth;
        let mut prev_dip = collar.dip;

        for row in sorted {
            let d = row.depth - prev_depth;
            let avg_az = (prev_az + row.azimuth) / 2.0;
            let avg_dip = (prev_dip + row.dip) / 2.0;

            let (dx, dy, dz) = displacement(d, avg_az, avg_dip);
            x += dx;
            y += dy;
            z += dz;
            points.push(TrajectoryPoint::new(row.depth, x, y, z));

            prev_depth = row.depth;
            prev_az = row.azimuth;
            prev_dip = row.dip;
        }
    } else {
        let (dx, dy, dz) = displacement(collar.max_depth, collar.azimuth, collar.dip);
        points.push(TrajectoryPoint::new(collar.max_depth, x + dx, y + dy, z + dz));
    }

    DrillholeTrajectory::new(collar.clone(), points, has_survey)
}

/// Compute trajectories for every collar, matching survey rows by hole id
pub fn desurvey_all(collars: &[CollarRecord], surveys: &[SurveyRecord]) -> Vec<DrillholeTrajectory> {
    let by_hole = surveys
        .iter()
        .map(|s| (s.hole_id.as_str(), s.clone()))
        .into_group_map();

    collars
        .iter()
        .map(|collar| {
            let rows = by_hole
                .get(collar.hole_id.as_str())
                .map(|v| v.as_slice())
                .unwrap_or(&[]);
            desurvey_hole(collar, rows)
        })
        .collect()
}
