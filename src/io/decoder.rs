//! WAV decoding to a mono [`SampleBuffer`]
//!
//! The core pipeline only consumes raw PCM; this module is the thin
//! collaborator that turns a WAV file into one. Multi-channel files are
//! downmixed to mono by averaging channels.

use std::path::Path;

use crate::error::TranscriptionError;
use crate::io::sample_buffer::SampleBuffer;

/// Decode a WAV file into a mono 16-bit sample buffer
///
/// Integer samples wider or narrower than 16 bits are rescaled; float
/// samples are clamped to [-1.0, 1.0] and converted. Multi-channel audio is
/// averaged down to a single channel.
///
/// # Errors
///
/// Returns `TranscriptionError::DecodingError` if the file cannot be opened
/// or its samples cannot be read.
pub fn decode_wav_file<P: AsRef<Path>>(path: P) -> Result<SampleBuffer, TranscriptionError> {
    let path = path.as_ref();
    log::debug!("Decoding WAV file: {}", path.display());

    let mut reader = hound::WavReader::open(path)
        .map_err(|e| TranscriptionError::DecodingError(format!("{}: {}", path.display(), e)))?;
    let spec = reader.spec();

    if spec.channels == 0 {
        return Err(TranscriptionError::DecodingError(
            "WAV file reports zero channels".to_string(),
        ));
    }

    let interleaved: Vec<i16> = match spec.sample_format {
        hound::SampleFormat::Int => {
            let shift = spec.bits_per_sample as i32 - 16;
            reader
                .samples::<i32>()
                .map(|s| {
                    s.map(|v| {
                        if shift >= 0 {
                            (v >> shift) as i16
                        } else {
                            (v << -shift) as i16
                        }
                    })
                })
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| TranscriptionError::DecodingError(e.to_string()))?
        }
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .map(|s| s.map(|v| (v.clamp(-1.0, 1.0) * i16::MAX as f32) as i16))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| TranscriptionError::DecodingError(e.to_string()))?,
    };

    let channels = spec.channels as usize;
    let mono: Vec<i16> = if channels == 1 {
        interleaved
    } else {
        interleaved
            .chunks(channels)
            .map(|frame| {
                let sum: i64 = frame.iter().map(|&s| s as i64).sum();
                (sum / frame.len() as i64) as i16
            })
            .collect()
    };

    log::debug!(
        "Decoded {} mono samples at {} Hz ({} channel(s) in source)",
        mono.len(),
        spec.sample_rate,
        channels
    );

    Ok(SampleBuffer::new(mono, spec.sample_rate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_wav_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("pitchscribe_{}_{}.wav", name, std::process::id()))
    }

    #[test]
    fn test_missing_file_is_decoding_error() {
        let result = decode_wav_file("/nonexistent/missing.wav");
        assert!(matches!(
            result,
            Err(TranscriptionError::DecodingError(_))
        ));
    }

    #[test]
    fn test_mono_int16_roundtrip() {
        let path = temp_wav_path("mono");
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 44100,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let samples: Vec<i16> = vec![0, 100, -100, 32000, -32000];
        {
            let mut writer = hound::WavWriter::create(&path, spec).unwrap();
            for &s in &samples {
                writer.write_sample(s).unwrap();
            }
            writer.finalize().unwrap();
        }

        let buffer = decode_wav_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(buffer.sample_rate(), 44100);
        assert_eq!(buffer.samples(), samples.as_slice());
    }

    #[test]
    fn test_stereo_is_averaged_to_mono() {
        let path = temp_wav_path("stereo");
        let spec = hound::WavSpec {
            channels: 2,
            sample_rate: 22050,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        {
            let mut writer = hound::WavWriter::create(&path, spec).unwrap();
            // Frames: (100, 300), (-200, 200)
            for &s in &[100i16, 300, -200, 200] {
                writer.write_sample(s).unwrap();
            }
            writer.finalize().unwrap();
        }

        let buffer = decode_wav_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(buffer.sample_rate(), 22050);
        assert_eq!(buffer.samples(), &[200i16, 0]);
    }
}
