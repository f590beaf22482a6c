//! Projects a fan of drillholes onto a west-east cross-section line and
//! prints the resulting 2D traces.

use anyhow::Result;
use coreview3d_core::CollarRecord;
use coreview3d_geometry::{compute_section_response, desurvey_all, CrossSectionRequest};

fn main() -> Result<()> {
    let collars: Vec<CollarRecord> = (0..6)
        .map(|i| CollarRecord {
            hole_id: format!("DH-{:03}", i + 1),
            east: 500.0 + i as f64 * 100.0,
            north: 2000.0 + (i as f64 - 2.5) * 15.0,
            elevation: 350.0,
            max_depth: 200.0,
            azimuth: 0.0,
            dip: -90.0,
            date: None,
            project: None,
        })
        .collect();

    let trajectories = desurvey_all(&collars, &[]);

    let request = CrossSectionRequest {
        session_id: "demo".to_string(),
        xy_start: (400.0, 2000.0),
        xy_stop: (1100.0, 2000.0),
        hole_ids: collars.iter().map(|c| c.hole_id.clone()).collect(),
        tolerance: 25.0,
    };

    let response = compute_section_response(&trajectories, &request)?;
    println!(
        "section length {:.0} m, {} of {} holes within tolerance",
        response.length,
        response.drillholes.len(),
        collars.len()
    );

    for hole in &response.drillholes {
        let top = hole.trace.first().expect("non-empty trace");
        let bottom = hole.trace.last().expect("non-empty trace");
        println!(
            "{}: s = {:.1} m, elevation {:.1} -> {:.1} m",
            hole.hole_id, top.distance, top.elevation, bottom.elevation
        );
    }

    Ok(())
}
