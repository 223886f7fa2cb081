//! Feature extraction modules
//!
//! This module contains the signal-to-symbol stages of the pipeline:
//! - Pitch estimation (per-block autocorrelation)
//! - Scale normalization, smoothing, octave consolidation
//! - Note/rest segmentation
//! - Duration estimation and quantization

pub mod duration;
pub mod pitch;
pub mod scale;
pub mod segment;
