//! Temporal frequency smoothing
//!
//! A centered moving average over the normalized-frequency sequence, used to
//! suppress isolated misdetections before segmentation. The pass mutates the
//! working copy in order, so interior windows read already-smoothed values on
//! their left half; head and tail positions take the plain average of the
//! first/last `smooth_levels` input values. Both details are part of the
//! established behavior.

use crate::error::TranscriptionError;

/// Smooth a frequency sequence with a centered moving average
///
/// `smooth_levels` is the window size and must be odd. The head
/// `floor(smooth_levels / 2)` positions are set to the average of the first
/// `smooth_levels` values, the tail `ceil(smooth_levels / 2)` positions to
/// the average of the last `smooth_levels` values. Every output value is
/// rounded to the nearest integer Hz.
///
/// # Errors
///
/// Returns `TranscriptionError::InvalidInput` if `smooth_levels` is zero or
/// the sequence is shorter than the window.
pub fn smooth_frequencies(
    frequencies: &[f64],
    smooth_levels: usize,
) -> Result<Vec<f64>, TranscriptionError> {
    if smooth_levels == 0 {
        return Err(TranscriptionError::InvalidInput(
            "Smoothing window must be > 0".to_string(),
        ));
    }

    if frequencies.len() < smooth_levels {
        return Err(TranscriptionError::InvalidInput(format!(
            "Sequence of {} frequencies is shorter than smoothing window {}",
            frequencies.len(),
            smooth_levels
        )));
    }

    let mut smoothed = frequencies.to_vec();
    let n = smoothed.len();

    let mut beginning = 0.0;
    let mut ends = 0.0;
    for i in 0..smooth_levels {
        beginning += smoothed[i];
        ends += smoothed[n - 1 - i];
    }
    beginning /= smooth_levels as f64;
    ends /= smooth_levels as f64;

    let half_floor = smooth_levels / 2;
    let half_ceil = smooth_levels.div_ceil(2);

    for i in 0..n {
        if i < half_floor {
            smoothed[i] = beginning;
        } else if i + half_ceil >= n {
            smoothed[i] = ends;
        } else {
            let mut total = 0.0;
            for j in 0..smooth_levels {
                total += smoothed[i + j - half_floor];
            }
            smoothed[i] = total / smooth_levels as f64;
        }
    }

    Ok(smoothed.iter().map(|f| f.round()).collect())
}
