//! Assay interval normalization
//!
//! Real assay tables are sparse: holes have unsampled stretches, intervals
//! arrive unsorted, and `from >= to` rows slip through ingestion. The
//! normalizer turns one hole's intervals into a contiguous sequence covering
//! `[0, max_depth]`, padding gaps with synthetic "Unassigned" intervals.

use coreview3d_core::AssayInterval;

/// Lithology name assigned to synthetic gap-filling intervals
pub const UNASSIGNED_LITHOLOGY: &str = "Unassigned";

/// Normalize one hole's intervals against its trajectory depth range.
///
/// `max_depth` is the trajectory's own deepest sample, not the collar's
/// advisory `Max_Depth` (the two can disagree on noisy data).
///
/// Malformed intervals (`from >= to`) are dropped one at a time with a
/// warning rather than aborting the hole. Overlapping intervals are
/// consumed in sort order and preserved as-is; overlap is a data-quality
/// artifact the renderer tolerates, not something this pass corrects.
pub fn fill_gaps(hole_id: &str, intervals: &[AssayInterval], max_depth: f64) -> Vec<AssayInterval> {
    let unassigned = |from: f64, to: f64| {
        AssayInterval::new(hole_id, from, to, Some(UNASSIGNED_LITHOLOGY.to_string()))
    };

    let mut sorted: Vec<&AssayInterval> = intervals
        .iter()
        .filter(|interval| match interval.validate() {
            Ok(()) => true,
            Err(err) => {
                log::warn!("dropping interval: {err}");
                false
            }
        })
        .collect();

    if sorted.is_empty() {
        return vec![unassigned(0.0, max_depth)];
    }

    sorted.sort_by(|a, b| a.from.total_cmp(&b.from));

    let mut out: Vec<AssayInterval> = Vec::with_capacity(sorted.len() + 2);
    let mut last_to = 0.0_f64;

    for interval in sorted {
        if interval.from > last_to {
            out.push(unassigned(last_to, interval.from));
        }
        out.push(interval.clone());
        last_to = interval.to;
    }

    if last_to < max_depth {
        out.push(unassigned(last_to, max_depth));
    }

    out
}
