//! # pitchscribe
//!
//! A pitch-and-rhythm transcription engine: converts a monophonic recorded
//! audio signal into a sequence of discrete pitched note/rest events with
//! quantized musical durations.
//!
//! ## Quick start
//!
//! ```no_run
//! use pitchscribe::{transcribe_file, SampleBuffer, TranscriptionConfig};
//!
//! // Mono PCM samples (signed 16-bit) with a known sample rate
//! let samples: Vec<i16> = vec![];
//! let buffer = SampleBuffer::new(samples, 44100);
//!
//! let part = transcribe_file(&buffer, &TranscriptionConfig::default())?;
//! for event in &part.events {
//!     println!("{:?}", event);
//! }
//! # Ok::<(), pitchscribe::TranscriptionError>(())
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! PCM blocks → pitch estimation → scale normalization → smoothing
//!            → octave consolidation → segmentation → duration quantization → Part
//! ```
//!
//! Each input file yields one monophonic [`Part`]; a batch yields a
//! [`Score`] with one part per file, in input order. Files in a batch are
//! independent and processed in parallel.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod features;
pub mod io;

// Re-export main types
pub use analysis::progress::{CancellationToken, Progress, ProgressStage, TranscriptionJob};
pub use analysis::result::{NoteEvent, Part, PartFailure, Pitch, Score, ScoreMetadata};
pub use config::TranscriptionConfig;
pub use error::TranscriptionError;
pub use features::pitch::interpolation::InterpolationMethod;
pub use features::pitch::{AutocorrelationDetector, PitchDetector, REST_FREQUENCY};
pub use features::scale::Scale;
pub use io::{decode_wav_file, SampleBuffer};

use rayon::prelude::*;

/// Transcribe one monophonic sample buffer into a part
///
/// Runs the full pipeline with the default autocorrelation detector built
/// from the configuration's interpolation strategy. An empty buffer (or one
/// shorter than a single block) yields an empty zero-note part.
///
/// # Errors
///
/// Returns `TranscriptionError` if the configuration is invalid, the buffer
/// produces fewer blocks than the smoothing window, or a numerical failure
/// occurs during normalization.
pub fn transcribe_file(
    buffer: &SampleBuffer,
    config: &TranscriptionConfig,
) -> Result<Part, TranscriptionError> {
    let detector = AutocorrelationDetector::new(config.interpolation);
    transcribe_file_with_detector(buffer, config, &detector)
}

/// Transcribe one buffer using an injected pitch detection backend
///
/// Identical to [`transcribe_file`] but with the per-block detector supplied
/// by the caller.
pub fn transcribe_file_with_detector(
    buffer: &SampleBuffer,
    config: &TranscriptionConfig,
    detector: &dyn PitchDetector,
) -> Result<Part, TranscriptionError> {
    config.validate()?;

    log::debug!(
        "Transcribing buffer: {} samples at {} Hz, block size {}",
        buffer.len(),
        buffer.sample_rate(),
        config.block_size
    );

    let frequencies = features::pitch::estimate_frequencies(buffer, config.block_size, detector)?;

    if frequencies.is_empty() {
        log::debug!("Buffer yields zero blocks; returning empty part");
        return Ok(Part::default());
    }

    let thresholds = config.scale.thresholds();
    let degrees = config.scale.degrees();

    let detected =
        features::scale::normalizer::detect_pitch_frequencies(&frequencies, &thresholds, degrees)?;
    let smoothed = features::scale::smoothing::smooth_frequencies(&detected, config.smooth_levels)?;

    let mut objects =
        features::scale::consolidate::pitch_objects(&smoothed, &thresholds, degrees)?;
    features::scale::consolidate::consolidate_octaves(&mut objects);

    let (segments, durations) = features::segment::join_consecutive_identical_pitches(objects);

    let part = analysis::assemble_part(
        &segments,
        &durations,
        config.remove_leading_rests,
        config.reference_quarter_length,
    );

    log::debug!(
        "Transcription produced {} events over {} blocks",
        part.len(),
        frequencies.len()
    );

    Ok(part)
}

/// Transcribe a batch of buffers into a multi-part score
///
/// The configuration is validated once up front; each buffer is then
/// transcribed independently (in parallel) and the parts are collected in
/// input order. One file's failure does not abort the others: the failed
/// slot becomes an empty part and the failure is recorded in
/// [`ScoreMetadata::failures`] for the caller to act on.
///
/// # Errors
///
/// Returns `TranscriptionError::InvalidInput` only for an invalid
/// configuration; per-file errors are reported through the metadata.
pub fn transcribe_files(
    buffers: &[SampleBuffer],
    config: &TranscriptionConfig,
) -> Result<Score, TranscriptionError> {
    config.validate()?;

    log::debug!("Transcribing {} buffers", buffers.len());

    let results: Vec<Result<Part, TranscriptionError>> = buffers
        .par_iter()
        .map(|buffer| transcribe_file(buffer, config))
        .collect();

    let mut parts = Vec::with_capacity(results.len());
    let mut failures = Vec::new();
    for (index, result) in results.into_iter().enumerate() {
        match result {
            Ok(part) => parts.push(part),
            Err(e) => {
                log::warn!("Input {} failed to transcribe: {}", index, e);
                parts.push(Part::default());
                failures.push(PartFailure {
                    index,
                    reason: e.to_string(),
                });
            }
        }
    }

    Ok(Score {
        parts,
        metadata: ScoreMetadata {
            title: None,
            composer: None,
            failures,
        },
    })
}
