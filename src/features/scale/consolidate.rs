//! Pitch object construction and octave consolidation
//!
//! Converts smoothed frequencies into [`Pitch`] objects, then rewrites each
//! run of identical pitch-class names with the run's rounded mean octave.
//!
//! The consolidation indexing is a pinned characterization of the reference
//! behavior, including its off-by-one at run starts: averages are written at
//! `run_start + j - 1`, and a run starting at index 0 writes its first value
//! into the last element of the sequence (negative-index wraparound). The
//! final element is also never included in any average. Tests pin this
//! behavior; do not "correct" it without revisiting the downstream stages.

use crate::error::TranscriptionError;
use crate::features::scale::normalizer::normalize_frequency;
use crate::features::scale::{Pitch, ScaleDegree};

/// Convert smoothed frequencies into pitch objects
///
/// Each frequency is normalized against the scale thresholds; the resulting
/// pitches carry canonical frequencies at their detected octaves.
pub fn pitch_objects(
    frequencies: &[f64],
    thresholds: &[f64],
    pitches: &[ScaleDegree],
) -> Result<Vec<Pitch>, TranscriptionError> {
    frequencies
        .iter()
        .map(|&f| normalize_frequency(f, Some(thresholds), Some(pitches)).map(|(_, p)| p))
        .collect()
}

/// Average octaves within runs of identical pitch-class names
///
/// Scans maximal runs of equal names and writes the rounded mean octave of
/// each run back using the pinned shifted indexing described in the module
/// docs. Frequencies are rescaled alongside the octave changes.
pub fn consolidate_octaves(objects: &mut [Pitch]) {
    let len = objects.len();
    if len == 0 {
        return;
    }

    let mut i = 0;
    while i < len - 1 {
        let name = objects[i].name.clone();
        let hold = i;
        let mut total_octave = 0i64;
        while i < len - 1 && objects[i].name == name {
            total_octave += objects[i].octave as i64;
            i += 1;
        }

        let count = i - hold;
        let average = (total_octave as f64 / count as f64).round() as i32;
        for j in 0..count {
            let index = if hold + j == 0 { len - 1 } else { hold + j - 1 };
            objects[index].set_octave(average);
        }
    }
}
