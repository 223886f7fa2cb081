//! Immutable PCM sample buffer and block slicing

/// A complete, finite buffer of mono PCM audio
///
/// Holds signed 16-bit samples plus the sample rate. Immutable once built;
/// every downstream structure is derived from it in a single pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleBuffer {
    samples: Vec<i16>,
    sample_rate: u32,
}

impl SampleBuffer {
    /// Create a buffer from mono PCM samples and a sample rate in Hz
    pub fn new(samples: Vec<i16>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// Raw samples
    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    /// Sample rate in Hz
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True if the buffer holds no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Buffer duration in seconds
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Slice the buffer into fixed-size analysis blocks
    ///
    /// Yields `floor(len / block_size)` contiguous blocks of exactly
    /// `block_size` samples; a trailing partial block is discarded. An empty
    /// buffer yields no blocks.
    pub fn blocks(&self, block_size: usize) -> impl Iterator<Item = &[i16]> {
        self.samples.chunks_exact(block_size)
    }
}
