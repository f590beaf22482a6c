//! Scene composition
//!
//! Translates a dataset plus display options into the declarative scene
//! object list the registry diffs against. Pure: the host's update loop
//! calls [`desired_objects`] whenever upstream state changes and feeds the
//! result to [`SceneObjectRegistry::sync`].

use crate::builder::{build_markers, build_segments, DisplayOptions, MarkerKind};
use crate::registry::{SceneGeometry, SceneObjectRegistry, SceneObjectSpec, SceneProps};
use coreview3d_core::{compute_bounds, AssayInterval, Bounds, DrillholeTrajectory, Error, Point3d, Result};
use coreview3d_geometry::fill_gaps;
use std::collections::HashMap;

/// Type tag for per-hole interval polylines
pub const TYPE_DRILLHOLE_LINES: &str = "drillhole_lines";
/// Type tag for collar/end-of-hole markers
pub const TYPE_MARKERS: &str = "markers";
/// Type tag for the ground grid
pub const TYPE_GRID: &str = "grid";
/// Type tag for the dataset bounding box
pub const TYPE_BOUNDING_BOX: &str = "bounding_box";
/// Type tag for the orientation axes
pub const TYPE_AXES: &str = "axes";

fn props_bounds(props: &SceneProps) -> Result<Bounds> {
    let bounds = props
        .bounds
        .ok_or_else(|| Error::InvalidData("props carry no bounds".to_string()))?;
    if bounds.is_degenerate() {
        return Err(Error::InvalidData(
            "degenerate bounds cannot size scene helpers".to_string(),
        ));
    }
    Ok(bounds)
}

/// Register the builders for every standard scene object type
pub fn register_default_builders(registry: &mut SceneObjectRegistry) {
    registry.register_type(
        TYPE_DRILLHOLE_LINES,
        Box::new(|props: &SceneProps| Ok(SceneGeometry::LineSet(props.segments.clone()))),
    );
    registry.register_type(
        TYPE_MARKERS,
        Box::new(|props: &SceneProps| Ok(SceneGeometry::MarkerSet(props.markers.clone()))),
    );
    registry.register_type(
        TYPE_GRID,
        Box::new(|props: &SceneProps| {
            let bounds = props_bounds(props)?;
            let (sx, sy, _) = bounds.size();
            // One cell per tenth of the widest horizontal extent
            let spacing = (sx.max(sy) / 10.0).max(1.0);
            Ok(SceneGeometry::Grid { bounds, spacing })
        }),
    );
    registry.register_type(
        TYPE_BOUNDING_BOX,
        Box::new(|props: &SceneProps| Ok(SceneGeometry::BoundingBox(props_bounds(props)?))),
    );
    registry.register_type(
        TYPE_AXES,
        Box::new(|props: &SceneProps| {
            let bounds = props_bounds(props)?;
            let (sx, sy, sz) = bounds.size();
            Ok(SceneGeometry::Axes {
                origin: Point3d::new(bounds.min_x, bounds.min_y, bounds.min_z),
                length: sx.max(sy).max(sz) * 0.25,
            })
        }),
    );
}

/// Build the declarative scene object list for the current state.
///
/// One lines object per visible hole (intervals normalized against the
/// hole's own depth range), one marker object per visible hole when collar
/// or end markers are enabled, and grid/bounding-box/axes helpers sized
/// from the visible dataset's bounds. With no visible geometry the helper
/// objects are simply absent, so the registry's diff disposes them.
pub fn desired_objects(
    trajectories: &[DrillholeTrajectory],
    assays: &[AssayInterval],
    options: &DisplayOptions,
) -> Result<Vec<SceneObjectSpec>> {
    let mut assays_by_hole: HashMap<&str, Vec<AssayInterval>> = HashMap::new();
    for assay in assays {
        assays_by_hole
            .entry(assay.hole_id.as_str())
            .or_default()
            .push(assay.clone());
    }

    let mut specs = Vec::new();
    let mut dataset_bounds = Bounds::empty();

    for trajectory in trajectories {
        if !options.is_visible(&trajectory.hole_id) {
            continue;
        }

        dataset_bounds.merge(&compute_bounds(trajectory.positions()));

        let hole_assays = assays_by_hole
            .get(trajectory.hole_id.as_str())
            .map(|v| v.as_slice())
            .unwrap_or(&[]);
        let normalized = fill_gaps(&trajectory.hole_id, hole_assays, trajectory.end_depth());

        specs.push(SceneObjectSpec {
            key: format!("drillhole:{}", trajectory.hole_id),
            type_name: TYPE_DRILLHOLE_LINES.to_string(),
            props: SceneProps {
                segments: build_segments(trajectory, &normalized)?,
                ..SceneProps::default()
            },
        });

        if options.show_collars || options.show_end_markers {
            let markers = build_markers(trajectory)?
                .into_iter()
                .filter(|marker| match marker.kind {
                    MarkerKind::Collar => options.show_collars,
                    MarkerKind::EndOfHole => options.show_end_markers,
                })
                .collect();
            specs.push(SceneObjectSpec {
                key: format!("markers:{}", trajectory.hole_id),
                type_name: TYPE_MARKERS.to_string(),
                props: SceneProps {
                    markers,
                    ..SceneProps::default()
                },
            });
        }
    }

    if !dataset_bounds.is_degenerate() {
        let helper_props = SceneProps {
            bounds: Some(dataset_bounds),
            ..SceneProps::default()
        };
        if options.show_grid {
            specs.push(SceneObjectSpec {
                key: "grid".to_string(),
                type_name: TYPE_GRID.to_string(),
                props: helper_props.clone(),
            });
        }
        if options.show_bounding_box {
            specs.push(SceneObjectSpec {
                key: "bounding_box".to_string(),
                type_name: TYPE_BOUNDING_BOX.to_string(),
                props: helper_props.clone(),
            });
        }
        if options.show_axes {
            specs.push(SceneObjectSpec {
                key: "axes".to_string(),
                type_name: TYPE_AXES.to_string(),
                props: helper_props,
            });
        }
    }

    Ok(specs)
}
