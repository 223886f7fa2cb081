//! Quarter-note length estimation from run-length statistics
//!
//! The modal run length is taken as the duration of the most common note
//! value. An 8-bin histogram of the run lengths (with a trailing zero
//! appended) is scanned from the last bin backward for the first bin holding
//! the global maximum count, so ties break toward the longest durations. The
//! estimate is that bin's midpoint, rescaled against the caller's reference
//! duration.

use super::histogram::histogram;

const HISTOGRAM_BINS: usize = 8;

/// Estimate how many frames one quarter note spans
///
/// `reference_quarter_length` is the duration (in quarter notes) the modal
/// run length is assumed to represent; the default pipeline uses 1.0. A zero
/// reference is treated as 1.0.
///
/// Returns 0.0 for an empty run-length list (a degenerate part with no
/// events to scale).
pub fn quarter_length_estimate(durations: &[usize], reference_quarter_length: f64) -> f64 {
    let mut data = durations.to_vec();
    data.push(0);

    let (counts, limits) = histogram(&data, HISTOGRAM_BINS);

    let max_count = *counts.iter().max().unwrap();
    let mut i = counts.len() - 1;
    while counts[i] != max_count {
        i -= 1;
    }

    let mut estimate = (limits[i] + limits[i + 1]) / 2.0;

    let reference = if reference_quarter_length == 0.0 {
        1.0
    } else {
        reference_quarter_length
    };

    // Rescale so the modal bin maps to the reference duration
    estimate * 2f64.powf(-reference.log2())
}
