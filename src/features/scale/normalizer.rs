//! Frequency-to-scale-pitch normalization
//!
//! Maps a raw frequency estimate onto the nearest pitch of a scale using the
//! precomputed log2-space thresholds. The octave conventions are part of the
//! established behavior and are preserved exactly: a threshold match places
//! the pitch at `octave - 4`, the wrap-around branch at `octave - 3`. The
//! threshold scan uses strict `<`, so the upper boundary pitch is reachable
//! only through the wrap-around branch.

use crate::error::TranscriptionError;
use crate::features::scale::{Pitch, Scale, ScaleDegree};

/// Map a raw frequency to the nearest scale pitch
///
/// Returns the canonical frequency of the matched scale degree (at the
/// degree's own octave, not the input's) together with the octave-adjusted
/// [`Pitch`]. Thresholds and pitches must be supplied together; with neither,
/// the chromatic scale on C4 is used.
///
/// # Errors
///
/// - `InvalidInput` if exactly one of `thresholds`/`pitches` is given
/// - `NumericalError` if the frequency is non-positive or non-finite
pub fn normalize_frequency(
    frequency: f64,
    thresholds: Option<&[f64]>,
    pitches: Option<&[ScaleDegree]>,
) -> Result<(f64, Pitch), TranscriptionError> {
    match (thresholds, pitches) {
        (Some(thresholds), Some(pitches)) => normalize(frequency, thresholds, pitches),
        (None, None) => {
            let scale = Scale::chromatic();
            normalize(frequency, &scale.thresholds(), scale.degrees())
        }
        _ => Err(TranscriptionError::InvalidInput(
            "Thresholds and pitches must be supplied together".to_string(),
        )),
    }
}

fn normalize(
    frequency: f64,
    thresholds: &[f64],
    pitches: &[ScaleDegree],
) -> Result<(f64, Pitch), TranscriptionError> {
    if pitches.is_empty() {
        return Err(TranscriptionError::InvalidInput(
            "Pitch list is empty".to_string(),
        ));
    }

    if !frequency.is_finite() || frequency <= 0.0 {
        return Err(TranscriptionError::NumericalError(format!(
            "Cannot normalize frequency {}",
            frequency
        )));
    }

    let log2 = frequency.log2();
    let octave = log2.trunc() as i32;
    let remainder = log2.fract();

    for (i, &threshold) in thresholds.iter().enumerate() {
        if remainder < threshold {
            let degree = &pitches[i];
            return Ok((degree.frequency, Pitch::from_degree(degree, octave - 4)));
        }
    }

    // Wrap-around: the remainder sits past every threshold, in the region of
    // the octave-up tonic. The asymmetric offset is intentional.
    let degree = pitches.last().unwrap();
    Ok((degree.frequency, Pitch::from_degree(degree, octave - 3)))
}

/// Normalize a sequence of raw frequency estimates
///
/// Each frequency is replaced by the canonical frequency of its matched
/// pitch at the detected octave, ready for smoothing.
pub fn detect_pitch_frequencies(
    frequencies: &[f64],
    thresholds: &[f64],
    pitches: &[ScaleDegree],
) -> Result<Vec<f64>, TranscriptionError> {
    frequencies
        .iter()
        .map(|&f| normalize_frequency(f, Some(thresholds), Some(pitches)).map(|(_, p)| p.frequency))
        .collect()
}
