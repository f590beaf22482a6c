//! Drillhole data records
//!
//! Typed records for collar, survey and assay rows plus the computed
//! trajectory. Serde field aliases accept the column-cased keys used by
//! upstream ingestion (`Hole_ID`, `East`, ...) so round-tripped session
//! snapshots deserialize unchanged.

use crate::point::{Point3d, TrajectoryPoint};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Drillhole collar (surface location and orientation) record.
///
/// `max_depth` is the stated total depth and is advisory only; real data
/// frequently disagrees with the deepest survey sample, and consumers must
/// tolerate the mismatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollarRecord {
    #[serde(alias = "Hole_ID")]
    pub hole_id: String,
    #[serde(alias = "East")]
    pub east: f64,
    #[serde(alias = "North")]
    pub north: f64,
    #[serde(alias = "Elevation")]
    pub elevation: f64,
    #[serde(alias = "Max_Depth")]
    pub max_depth: f64,
    #[serde(alias = "Azimuth")]
    pub azimuth: f64,
    #[serde(alias = "Dip")]
    pub dip: f64,
    #[serde(default, alias = "Date", skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, alias = "Project", skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
}

impl CollarRecord {
    /// The collar's spatial position
    pub fn position(&self) -> Point3d {
        Point3d::new(self.east, self.north, self.elevation)
    }
}

/// Drillhole survey (deviation) measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyRecord {
    #[serde(alias = "Hole_ID")]
    pub hole_id: String,
    #[serde(alias = "Depth")]
    pub depth: f64,
    #[serde(alias = "Azimuth")]
    pub azimuth: f64,
    #[serde(alias = "Dip")]
    pub dip: f64,
}

/// Geochemical assay or geological interval.
///
/// Arbitrary grade columns (`Au_ppm`, `Cu_pct`, ...) are captured in
/// `grades` and flattened on (de)serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssayInterval {
    #[serde(alias = "Hole_ID")]
    pub hole_id: String,
    #[serde(alias = "From")]
    pub from: f64,
    #[serde(alias = "To")]
    pub to: f64,
    #[serde(default, alias = "Lithology", skip_serializing_if = "Option::is_none")]
    pub lithology: Option<String>,
    #[serde(flatten)]
    pub grades: BTreeMap<String, f64>,
}

impl AssayInterval {
    /// Create an interval with a lithology and no grade columns
    pub fn new(hole_id: impl Into<String>, from: f64, to: f64, lithology: Option<String>) -> Self {
        Self {
            hole_id: hole_id.into(),
            from,
            to,
            lithology,
            grades: BTreeMap::new(),
        }
    }

    /// A well-formed interval has `from < to`
    pub fn is_well_formed(&self) -> bool {
        self.from < self.to
    }

    /// Check the `from < to` invariant
    pub fn validate(&self) -> crate::Result<()> {
        if self.is_well_formed() {
            Ok(())
        } else {
            Err(crate::Error::MalformedInterval(format!(
                "hole {} interval [{}, {}] has from >= to",
                self.hole_id, self.from, self.to
            )))
        }
    }
}

/// Complete 3D trajectory of a drillhole.
///
/// Constructed once per load and immutable afterwards; construction runs a
/// sanitation pass that collapses consecutive duplicate-depth points, which
/// would otherwise degenerate interpolation into zero-length segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrillholeTrajectory {
    pub hole_id: String,
    pub collar: CollarRecord,
    points: Vec<TrajectoryPoint>,
    pub has_survey: bool,
}

impl DrillholeTrajectory {
    /// Create a trajectory, sanitizing the point list
    pub fn new(collar: CollarRecord, points: Vec<TrajectoryPoint>, has_survey: bool) -> Self {
        Self {
            hole_id: collar.hole_id.clone(),
            collar,
            points: sanitize_points(points),
            has_survey,
        }
    }

    /// The depth-ordered trajectory samples
    pub fn points(&self) -> &[TrajectoryPoint] {
        &self.points
    }

    /// Depth of the deepest stored sample, or 0 for an empty trajectory.
    ///
    /// This is the depth used for interval normalization; it can disagree
    /// with the collar's advisory `max_depth`.
    pub fn end_depth(&self) -> f64 {
        self.points.last().map(|p| p.depth).unwrap_or(0.0)
    }

    /// Iterator over the spatial positions of the samples
    pub fn positions(&self) -> impl Iterator<Item = Point3d> + '_ {
        self.points.iter().map(|p| p.position())
    }
}

/// Drop consecutive points sharing the same depth, keeping the first
fn sanitize_points(points: Vec<TrajectoryPoint>) -> Vec<TrajectoryPoint> {
    let mut out: Vec<TrajectoryPoint> = Vec::with_capacity(points.len());
    for p in points {
        if out.last().map(|last| last.depth == p.depth).unwrap_or(false) {
            continue;
        }
        out.push(p);
    }
    out
}

/// Complete drillhole dataset as produced by ingestion or a restored session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrillholeData {
    pub collars: Vec<CollarRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surveys: Option<Vec<SurveyRecord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assays: Option<Vec<AssayInterval>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trajectories: Option<Vec<DrillholeTrajectory>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collar(hole_id: &str) -> CollarRecord {
        CollarRecord {
            hole_id: hole_id.to_string(),
            east: 500_000.0,
            north: 7_000_000.0,
            elevation: 350.0,
            max_depth: 100.0,
            azimuth: 90.0,
            dip: -60.0,
            date: None,
            project: None,
        }
    }

    #[test]
    fn test_sanitize_removes_consecutive_duplicate_depths() {
        let points = vec![
            TrajectoryPoint::new(0.0, 0.0, 0.0, 0.0),
            TrajectoryPoint::new(10.0, 1.0, 0.0, -9.0),
            TrajectoryPoint::new(10.0, 1.1, 0.0, -9.1),
            TrajectoryPoint::new(20.0, 2.0, 0.0, -18.0),
        ];
        let traj = DrillholeTrajectory::new(collar("DH-001"), points, true);
        assert_eq!(traj.points().len(), 3);
        assert_eq!(traj.points()[1].x, 1.0);
        assert_eq!(traj.end_depth(), 20.0);
    }

    #[test]
    fn test_sanitize_keeps_nonconsecutive_duplicates() {
        // Only consecutive runs collapse; a depth repeated later in the
        // list is a precondition violation handled downstream.
        let points = vec![
            TrajectoryPoint::new(0.0, 0.0, 0.0, 0.0),
            TrajectoryPoint::new(10.0, 1.0, 0.0, -9.0),
            TrajectoryPoint::new(5.0, 0.5, 0.0, -4.5),
        ];
        let traj = DrillholeTrajectory::new(collar("DH-001"), points, true);
        assert_eq!(traj.points().len(), 3);
    }

    #[test]
    fn test_interval_validate_rejects_inverted_ranges() {
        let bad = AssayInterval::new("DH-001", 20.0, 10.0, None);
        assert!(matches!(
            bad.validate(),
            Err(crate::Error::MalformedInterval(_))
        ));
        let zero = AssayInterval::new("DH-001", 10.0, 10.0, None);
        assert!(zero.validate().is_err());
        let good = AssayInterval::new("DH-001", 10.0, 20.0, None);
        assert!(good.validate().is_ok());
    }

    #[test]
    fn test_collar_deserializes_column_cased_keys() {
        let json = r#"{
            "Hole_ID": "DH-042",
            "East": 451200.5,
            "North": 6752100.0,
            "Elevation": 412.0,
            "Max_Depth": 250.0,
            "Azimuth": 45.0,
            "Dip": -55.0
        }"#;
        let collar: CollarRecord = serde_json::from_str(json).unwrap();
        assert_eq!(collar.hole_id, "DH-042");
        assert_eq!(collar.max_depth, 250.0);
        assert!(collar.project.is_none());
    }

    #[test]
    fn test_assay_captures_grade_columns() {
        let json = r#"{
            "Hole_ID": "DH-042",
            "From": 10.0,
            "To": 12.5,
            "Lithology": "Granite",
            "Au_ppm": 1.3,
            "Cu_pct": 0.4
        }"#;
        let assay: AssayInterval = serde_json::from_str(json).unwrap();
        assert!(assay.is_well_formed());
        assert_eq!(assay.grades.get("Au_ppm"), Some(&1.3));
        assert_eq!(assay.grades.get("Cu_pct"), Some(&0.4));
    }

    #[test]
    fn test_trajectory_round_trips_through_json() {
        let traj = DrillholeTrajectory::new(
            collar("DH-001"),
            vec![
                TrajectoryPoint::new(0.0, 500_000.0, 7_000_000.0, 350.0),
                TrajectoryPoint::new(100.0, 500_050.0, 7_000_000.0, 263.4),
            ],
            false,
        );
        let json = serde_json::to_string(&traj).unwrap();
        let back: DrillholeTrajectory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, traj);
    }
}
