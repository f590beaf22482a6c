//! Drillhole geometry building
//!
//! Composes depth interpolation with normalized intervals to emit one
//! colored polyline segment per interval plus collar and end-of-hole
//! markers.

use crate::lithology::{hole_color, lithology_lookup};
use coreview3d_core::{AssayInterval, DrillholeTrajectory, Error, Point3d, Result};
use coreview3d_geometry::{points_strictly_within, position_at_depth};
use std::collections::BTreeSet;

/// An ordered polyline with a display color
#[derive(Debug, Clone, PartialEq)]
pub struct ColoredSegment {
    pub hole_id: String,
    pub lithology: Option<String>,
    pub color: [u8; 3],
    pub points: Vec<Point3d>,
}

/// What a point marker denotes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    Collar,
    EndOfHole,
}

/// A point glyph at a hole's start or bottom
#[derive(Debug, Clone, PartialEq)]
pub struct PointMarker {
    pub hole_id: String,
    pub kind: MarkerKind,
    pub position: Point3d,
}

/// Read-only visualization state passed in by the host.
///
/// `vertical_exaggeration` is applied uniformly to z at render time, never
/// inside the geometry builder.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayOptions {
    pub show_collars: bool,
    pub show_labels: bool,
    pub show_end_markers: bool,
    pub show_grid: bool,
    pub show_bounding_box: bool,
    pub show_axes: bool,
    /// `None` means every hole is visible
    pub visible_holes: Option<BTreeSet<String>>,
    pub vertical_exaggeration: f64,
}

impl DisplayOptions {
    pub fn is_visible(&self, hole_id: &str) -> bool {
        self.visible_holes
            .as_ref()
            .map_or(true, |set| set.contains(hole_id))
    }
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_collars: true,
            show_labels: false,
            show_end_markers: true,
            show_grid: true,
            show_bounding_box: false,
            show_axes: true,
            visible_holes: None,
            vertical_exaggeration: 1.0,
        }
    }
}

/// Build one colored segment per normalized interval.
///
/// Each segment runs from the interpolated position at `from`, through the
/// trajectory points strictly inside the interval, to the interpolated
/// position at `to`, so adjacent segments share their boundary point
/// exactly. Segment color comes from the lithology table; unrecognized or
/// absent lithologies (including synthetic "Unassigned" intervals) fall
/// back to the hole's stable default color. With no intervals at all, the
/// whole trajectory becomes a single default-colored segment.
///
/// # Errors
/// Returns [`Error::InvalidTrajectory`] if the trajectory has no points.
pub fn build_segments(
    trajectory: &DrillholeTrajectory,
    intervals: &[AssayInterval],
) -> Result<Vec<ColoredSegment>> {
    let points = trajectory.points();
    if points.is_empty() {
        return Err(Error::InvalidTrajectory(format!(
            "hole {} has no trajectory points",
            trajectory.hole_id
        )));
    }

    let default_color = hole_color(&trajectory.hole_id);

    if intervals.is_empty() {
        return Ok(vec![ColoredSegment {
            hole_id: trajectory.hole_id.clone(),
            lithology: None,
            color: default_color,
            points: trajectory.positions().collect(),
        }]);
    }

    let mut segments = Vec::with_capacity(intervals.len());
    for interval in intervals {
        let mut path = Vec::new();
        path.push(position_at_depth(points, interval.from)?);
        path.extend(
            points_strictly_within(points, interval.from, interval.to)
                .iter()
                .map(|p| p.position()),
        );
        path.push(position_at_depth(points, interval.to)?);

        let color = interval
            .lithology
            .as_deref()
            .and_then(lithology_lookup)
            .unwrap_or(default_color);

        segments.push(ColoredSegment {
            hole_id: trajectory.hole_id.clone(),
            lithology: interval.lithology.clone(),
            color,
            points: path,
        });
    }
    Ok(segments)
}

/// Build the collar and end-of-hole markers.
///
/// The end marker sits at the interpolated position of the hole's maximum
/// depth, taking the larger of the deepest stored point and the collar's
/// advisory `max_depth` (interpolation clamps, so a noisy `max_depth` never
/// extrapolates past the stored path).
pub fn build_markers(trajectory: &DrillholeTrajectory) -> Result<Vec<PointMarker>> {
    let points = trajectory.points();
    let first = points.first().ok_or_else(|| {
        Error::InvalidTrajectory(format!(
            "hole {} has no trajectory points",
            trajectory.hole_id
        ))
    })?;

    let bottom_depth = trajectory.end_depth().max(trajectory.collar.max_depth);
    let bottom = position_at_depth(points, bottom_depth)?;

    Ok(vec![
        PointMarker {
            hole_id: trajectory.hole_id.clone(),
            kind: MarkerKind::Collar,
            position: first.position(),
        },
        PointMarker {
            hole_id: trajectory.hole_id.clone(),
            kind: MarkerKind::EndOfHole,
            position: bottom,
        },
    ])
}
