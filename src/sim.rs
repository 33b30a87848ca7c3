//! Display-less frame simulation.
//!
//! The engine is deterministic: a row stepped N times against a given
//! measurer always lands on the same offset. `simulate` drives that loop
//! for tests and the CLI, the same way a host's animation-frame callback
//! would, one strictly sequential step per frame.

use crate::{measure::MeasureTrack, row::ScrollerRow};

/// Result of driving a row for a fixed number of frames.
#[derive(Clone, Debug, serde::Serialize)]
pub struct SimReport {
    /// Frames requested.
    pub frames: u64,
    /// Offset after the final frame.
    pub final_offset: f64,
    /// Wraps performed across the run.
    pub wraps: u64,
    /// Segment width derived from the last measurement (`0.0` when the
    /// track was empty or unmeasured).
    pub segment_width: f64,
    /// Per-frame offsets, recorded only on request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offsets: Option<Vec<f64>>,
}

/// Step `row` once per frame for `frames` frames, re-reading `measure`
/// each frame exactly like a live host would.
#[tracing::instrument(skip(row, measure))]
pub fn simulate(
    row: &mut ScrollerRow,
    measure: &impl MeasureTrack,
    frames: u64,
    record_offsets: bool,
) -> SimReport {
    let wraps_before = row.driver().wraps();
    let mut offsets = record_offsets.then(|| Vec::with_capacity(frames as usize));

    for _ in 0..frames {
        let offset = row.on_frame(measure);
        if let Some(v) = offsets.as_mut() {
            v.push(offset);
        }
    }

    SimReport {
        frames,
        final_offset: row.offset(),
        wraps: row.driver().wraps() - wraps_before,
        segment_width: crate::driver::segment_width(measure.track_width()),
        offsets,
    }
}

#[cfg(test)]
#[path = "../tests/unit/sim.rs"]
mod tests;
