//! Per-block fundamental frequency estimation

pub mod autocorrelation;
pub mod interpolation;

use crate::error::TranscriptionError;
use crate::io::sample_buffer::SampleBuffer;

use interpolation::InterpolationMethod;

/// Sentinel frequency marking a block with no measurable periodicity
///
/// Chosen below any musical pitch the estimator can produce; it never
/// collides with a canonical scale-pitch frequency.
pub const REST_FREQUENCY: f64 = 10.0;

/// Pitch detection backend for a single analysis block
///
/// Implementations are injected at pipeline construction time; the default is
/// [`AutocorrelationDetector`]. Degenerate blocks resolve to
/// [`REST_FREQUENCY`] rather than an error.
pub trait PitchDetector: Send + Sync {
    /// Estimate the fundamental frequency of one block, in Hz
    fn detect(&self, block: &[i16], sample_rate: u32) -> f64;
}

/// FFT-accelerated autocorrelation detector
#[derive(Debug, Clone, Copy)]
pub struct AutocorrelationDetector {
    interpolation: InterpolationMethod,
}

impl AutocorrelationDetector {
    /// Create a detector with the given peak interpolation strategy
    pub fn new(interpolation: InterpolationMethod) -> Self {
        Self { interpolation }
    }
}

impl PitchDetector for AutocorrelationDetector {
    fn detect(&self, block: &[i16], sample_rate: u32) -> f64 {
        autocorrelation::autocorrelation_frequency(
            block,
            sample_rate,
            self.interpolation.interpolator(),
        )
    }
}

/// Estimate one frequency per analysis block
///
/// Slices the buffer into `block_size` blocks (trailing remainder discarded)
/// and runs the detector on each. An empty buffer yields an empty sequence.
///
/// # Errors
///
/// Returns `TranscriptionError::InvalidInput` if `block_size` is zero or the
/// buffer's sample rate is zero.
pub fn estimate_frequencies(
    buffer: &SampleBuffer,
    block_size: usize,
    detector: &dyn PitchDetector,
) -> Result<Vec<f64>, TranscriptionError> {
    if block_size == 0 {
        return Err(TranscriptionError::InvalidInput(
            "Block size must be > 0".to_string(),
        ));
    }

    if buffer.sample_rate() == 0 {
        return Err(TranscriptionError::InvalidInput(
            "Sample rate must be > 0".to_string(),
        ));
    }

    let frequencies: Vec<f64> = buffer
        .blocks(block_size)
        .map(|block| detector.detect(block, buffer.sample_rate()))
        .collect();

    log::debug!(
        "Estimated {} block frequencies ({} samples, block size {})",
        frequencies.len(),
        buffer.len(),
        block_size
    );

    Ok(frequencies)
}
