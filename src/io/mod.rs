//! Audio input: PCM sample buffers and WAV decoding

pub mod decoder;
pub mod sample_buffer;

pub use decoder::decode_wav_file;
pub use sample_buffer::SampleBuffer;
