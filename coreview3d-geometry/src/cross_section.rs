//! Cross-section projection
//!
//! Projects selected drillhole trajectories onto a vertical plane defined by
//! two horizontal-plane points, producing per-hole 2D polylines in
//! (distance-along-line, elevation) coordinates for the section chart view.

use coreview3d_core::{DrillholeTrajectory, Error, Result, Vector2d};
use serde::{Deserialize, Serialize};

/// A user-defined vertical cutting plane through two surface points.
///
/// `tolerance` is the maximum perpendicular horizontal distance a
/// trajectory point may lie from the plane and still be included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossSectionDefinition {
    pub id: String,
    pub name: String,
    pub xy_start: (f64, f64),
    pub xy_stop: (f64, f64),
    pub hole_ids: Vec<String>,
    pub tolerance: f64,
}

/// A single projected sample: position along the section line and elevation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionPoint {
    pub distance: f64,
    pub elevation: f64,
}

/// One hole's 2D polyline within a cross-section.
///
/// Ephemeral: recomputed whenever the definition or the underlying
/// trajectories change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectedTrace {
    pub hole_id: String,
    pub trace: Vec<SectionPoint>,
}

/// Cross-section request as received at the network boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossSectionRequest {
    pub session_id: String,
    pub xy_start: (f64, f64),
    pub xy_stop: (f64, f64),
    pub hole_ids: Vec<String>,
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

fn default_tolerance() -> f64 {
    100.0
}

/// Cross-section response: section length plus one trace per retained hole
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossSectionResponse {
    pub length: f64,
    pub drillholes: Vec<ProjectedTrace>,
}

/// Project trajectories onto a cross-section plane.
///
/// Each point of each selected hole is tested against the perpendicular
/// tolerance individually; retained points keep their scalar projection `s`
/// even when it falls outside `[0, length]`, since deviated holes
/// legitimately wander past the nominal section ends. Elevation passes
/// through untouched. Holes with no retained point are omitted from the
/// result. Points keep their original depth order, so a rendered polyline
/// never folds back even where `s` is non-monotonic.
///
/// # Errors
/// [`Error::InvalidSection`] for a zero-length line or negative tolerance.
pub fn project_cross_section(
    trajectories: &[DrillholeTrajectory],
    definition: &CrossSectionDefinition,
) -> Result<Vec<ProjectedTrace>> {
    let start = Vector2d::new(definition.xy_start.0, definition.xy_start.1);
    let stop = Vector2d::new(definition.xy_stop.0, definition.xy_stop.1);

    let section_vec = stop - start;
    let length = section_vec.norm();
    if length == 0.0 {
        return Err(Error::InvalidSection(
            "section line has zero length".to_string(),
        ));
    }
    if definition.tolerance < 0.0 {
        return Err(Error::InvalidSection(format!(
            "tolerance must be non-negative, got {}",
            definition.tolerance
        )));
    }

    let direction = section_vec / length;
    let perpendicular = Vector2d::new(-direction.y, direction.x);

    let mut result = Vec::new();
    for trajectory in trajectories {
        if !definition.hole_ids.iter().any(|id| *id == trajectory.hole_id) {
            continue;
        }

        let trace: Vec<SectionPoint> = trajectory
            .points()
            .iter()
            .filter_map(|point| {
                let to_point = point.horizontal() - start;
                if to_point.dot(&perpendicular).abs() > definition.tolerance {
                    return None;
                }
                Some(SectionPoint {
                    distance: to_point.dot(&direction),
                    elevation: point.z,
                })
            })
            .collect();

        if !trace.is_empty() {
            result.push(ProjectedTrace {
                hole_id: trajectory.hole_id.clone(),
                trace,
            });
        }
    }

    Ok(result)
}

/// Length of the section line, shared by the projection and the response
pub fn section_length(xy_start: (f64, f64), xy_stop: (f64, f64)) -> f64 {
    (Vector2d::new(xy_stop.0, xy_stop.1) - Vector2d::new(xy_start.0, xy_start.1)).norm()
}

/// Serve a boundary request against an already-loaded trajectory set
pub fn compute_section_response(
    trajectories: &[DrillholeTrajectory],
    request: &CrossSectionRequest,
) -> Result<CrossSectionResponse> {
    let definition = CrossSectionDefinition {
        id: request.session_id.clone(),
        name: String::new(),
        xy_start: request.xy_start,
        xy_stop: request.xy_stop,
        hole_ids: request.hole_ids.clone(),
        tolerance: request.tolerance,
    };
    let drillholes = project_cross_section(trajectories, &definition)?;
    Ok(CrossSectionResponse {
        length: section_length(request.xy_start, request.xy_stop),
        drillholes,
    })
}
