//! Duration estimation and quantization

pub mod estimator;
pub mod histogram;
pub mod quantizer;

pub use estimator::quarter_length_estimate;
pub use histogram::histogram;
pub use quantizer::quantize_duration;
