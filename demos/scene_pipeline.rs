//! Runs the full scene pipeline on a small synthetic dataset:
//! desurvey -> interval normalization -> segment building -> registry sync,
//! then toggles visibility to show the diff-driven lifecycle.

use anyhow::Result;
use coreview3d_core::{AssayInterval, CollarRecord, SurveyRecord};
use coreview3d_geometry::desurvey_all;
use coreview3d_scene::{
    desired_objects, lithology_color, register_default_builders, DisplayOptions,
    SceneObjectRegistry,
};

fn main() -> Result<()> {
    let collars: Vec<CollarRecord> = (0..4)
        .map(|i| CollarRecord {
            hole_id: format!("DH-{:03}", i + 1),
            east: 1000.0 + i as f64 * 60.0,
            north: 5000.0,
            elevation: 400.0,
            max_depth: 150.0,
            azimuth: 90.0,
            dip: -65.0,
            date: None,
            project: Some("Demo Pit".to_string()),
        })
        .collect();

    let surveys = vec![
        SurveyRecord {
            hole_id: "DH-001".to_string(),
            depth: 75.0,
            azimuth: 92.0,
            dip: -64.0,
        },
        SurveyRecord {
            hole_id: "DH-001".to_string(),
            depth: 150.0,
            azimuth: 95.0,
            dip: -62.0,
        },
    ];

    let assays = vec![
        AssayInterval::new("DH-001", 30.0, 90.0, Some("Granite".to_string())),
        AssayInterval::new("DH-002", 0.0, 150.0, Some("Shale".to_string())),
        AssayInterval::new("DH-003", 60.0, 110.0, Some("Ore".to_string())),
    ];

    println!("legend:");
    for assay in &assays {
        if let Some(name) = &assay.lithology {
            let [r, g, b] = lithology_color(name);
            println!("  {name}: #{r:02X}{g:02X}{b:02X}");
        }
    }

    let trajectories = desurvey_all(&collars, &surveys);
    for traj in &trajectories {
        println!(
            "{}: {} points, end depth {:.1} m, survey: {}",
            traj.hole_id,
            traj.points().len(),
            traj.end_depth(),
            traj.has_survey
        );
    }

    let mut registry = SceneObjectRegistry::new();
    register_default_builders(&mut registry);

    let options = DisplayOptions::default();
    let specs = desired_objects(&trajectories, &assays, &options)?;
    let report = registry.sync(&specs)?;
    println!(
        "initial sync: {} created, {} live objects",
        report.created.len(),
        registry.len()
    );

    // Hide two holes and re-sync
    let options = DisplayOptions {
        visible_holes: Some(
            ["DH-001".to_string(), "DH-004".to_string()]
                .into_iter()
                .collect(),
        ),
        ..DisplayOptions::default()
    };
    let specs = desired_objects(&trajectories, &assays, &options)?;
    let report = registry.sync(&specs)?;
    println!(
        "after hiding DH-002/DH-003: {} disposed, {} unchanged, {} live",
        report.disposed.len(),
        report.unchanged,
        registry.len()
    );

    Ok(())
}
