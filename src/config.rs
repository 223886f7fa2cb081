//! Configuration parameters for transcription

use crate::error::TranscriptionError;
use crate::features::pitch::interpolation::InterpolationMethod;
use crate::features::scale::Scale;

/// Transcription configuration parameters
///
/// One canonical configuration drives the whole pipeline; there are no
/// per-stage defaults hidden at call sites.
#[derive(Debug, Clone)]
pub struct TranscriptionConfig {
    /// Analysis block size in samples (default: 256)
    ///
    /// The sample buffer is sliced into non-overlapping blocks of this size;
    /// a trailing partial block is discarded.
    pub block_size: usize,

    /// Moving-average window for frequency smoothing (default: 7)
    ///
    /// Must be odd. The pipeline needs at least this many blocks of audio;
    /// shorter input is rejected.
    pub smooth_levels: usize,

    /// Scale used to quantize raw frequencies to discrete pitches
    /// (default: chromatic scale on C4)
    pub scale: Scale,

    /// Sub-sample peak interpolation strategy (default: parabolic)
    pub interpolation: InterpolationMethod,

    /// Reference duration the modal run length maps to, in quarter notes
    /// (default: 1.0). A value of 0 is treated as 1.0.
    pub reference_quarter_length: f64,

    /// Drop rest events before the first confirmed note (default: true)
    pub remove_leading_rests: bool,
}

impl Default for TranscriptionConfig {
    fn default() -> Self {
        Self {
            block_size: 256,
            smooth_levels: 7,
            scale: Scale::chromatic(),
            interpolation: InterpolationMethod::Parabolic,
            reference_quarter_length: 1.0,
            remove_leading_rests: true,
        }
    }
}

impl TranscriptionConfig {
    /// Validate configuration parameters
    ///
    /// # Errors
    ///
    /// Returns `TranscriptionError::InvalidInput` if the block size is zero,
    /// the smoothing window is zero or even, the scale has fewer than two
    /// degrees, or the reference quarter length is negative or non-finite.
    pub fn validate(&self) -> Result<(), TranscriptionError> {
        if self.block_size == 0 {
            return Err(TranscriptionError::InvalidInput(
                "Block size must be > 0".to_string(),
            ));
        }

        if self.smooth_levels == 0 || self.smooth_levels % 2 == 0 {
            return Err(TranscriptionError::InvalidInput(format!(
                "Smoothing window must be odd and > 0, got {}",
                self.smooth_levels
            )));
        }

        if self.scale.degrees().len() < 2 {
            return Err(TranscriptionError::InvalidInput(
                "Scale must contain at least two degrees".to_string(),
            ));
        }

        if !self.reference_quarter_length.is_finite() || self.reference_quarter_length < 0.0 {
            return Err(TranscriptionError::InvalidInput(format!(
                "Reference quarter length must be finite and >= 0, got {}",
                self.reference_quarter_length
            )));
        }

        Ok(())
    }
}
