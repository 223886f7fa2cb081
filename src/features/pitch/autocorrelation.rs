//! Autocorrelation pitch estimation
//!
//! Estimates the fundamental frequency of one analysis block.
//!
//! # Algorithm
//!
//! 1. Compute the full autocorrelation of the block using FFT acceleration:
//!    `ACF = IFFT(FFT(signal) * conj(FFT(signal)))`, keeping lags >= 0
//! 2. Take the discrete difference of the ACF and find the first strictly
//!    positive entry; this skips the zero-lag peak and its monotonic decay
//! 3. The period is the (sub-sample refined) index of the ACF maximum at or
//!    after that point; frequency = sample_rate / period
//!
//! A block with no positive difference has no measurable periodicity and
//! resolves to the rest sentinel. This is not an error.

use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

use super::interpolation::PeakInterpolator;
use super::REST_FREQUENCY;

/// Estimate the fundamental frequency of one block, in Hz
///
/// Returns [`REST_FREQUENCY`] for blocks without measurable periodicity, or
/// when peak refinement produces a non-positive or non-finite period.
pub fn autocorrelation_frequency(
    block: &[i16],
    sample_rate: u32,
    interpolator: &dyn PeakInterpolator,
) -> f64 {
    if block.is_empty() {
        return REST_FREQUENCY;
    }

    let signal: Vec<f64> = block.iter().map(|&s| s as f64).collect();
    let correlation = half_autocorrelation(&signal);

    // First lag where the ACF starts rising again
    let mut beginning = None;
    for i in 0..correlation.len().saturating_sub(1) {
        if correlation[i + 1] - correlation[i] > 0.0 {
            beginning = Some(i);
            break;
        }
    }

    let beginning = match beginning {
        Some(b) => b,
        None => return REST_FREQUENCY,
    };

    // First maximum at or after the rise (ties keep the earliest index)
    let mut peak = beginning;
    for i in beginning..correlation.len() {
        if correlation[i] > correlation[peak] {
            peak = i;
        }
    }

    let vertex = interpolator.refine(&correlation, peak);
    if !vertex.is_finite() || vertex <= 0.0 {
        return REST_FREQUENCY;
    }

    sample_rate as f64 / vertex
}

/// Full autocorrelation for lags `0..n` via FFT
///
/// Zero-pads to at least `2n` so the circular autocorrelation equals the
/// linear one over the returned range.
fn half_autocorrelation(signal: &[f64]) -> Vec<f64> {
    let n = signal.len();
    let fft_size = (2 * n).next_power_of_two();

    let mut buffer: Vec<Complex<f64>> = signal.iter().map(|&x| Complex::new(x, 0.0)).collect();
    buffer.resize(fft_size, Complex::new(0.0, 0.0));

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(fft_size);
    fft.process(&mut buffer);

    for x in &mut buffer {
        *x = *x * x.conj();
    }

    let ifft = planner.plan_fft_inverse(fft_size);
    ifft.process(&mut buffer);

    let scale = 1.0 / fft_size as f64;
    buffer[..n].iter().map(|x| x.re * scale).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::pitch::interpolation::ParabolicInterpolator;

    fn sine_block(frequency: f64, sample_rate: u32, len: usize) -> Vec<i16> {
        (0..len)
            .map(|i| {
                let phase = 2.0 * std::f64::consts::PI * frequency * i as f64 / sample_rate as f64;
                (phase.sin() * 0.5 * i16::MAX as f64) as i16
            })
            .collect()
    }

    #[test]
    fn test_pure_tone_440hz() {
        let block = sine_block(440.0, 44100, 1024);
        let freq = autocorrelation_frequency(&block, 44100, &ParabolicInterpolator);
        assert!(
            (freq - 440.0).abs() / 440.0 < 0.01,
            "Expected ~440 Hz, got {:.2}",
            freq
        );
    }

    #[test]
    fn test_pure_tone_261hz_small_block() {
        // Middle C at the default pipeline block size
        let block = sine_block(261.63, 44100, 256);
        let freq = autocorrelation_frequency(&block, 44100, &ParabolicInterpolator);
        assert!(
            (freq - 261.63).abs() / 261.63 < 0.01,
            "Expected ~261.63 Hz, got {:.2}",
            freq
        );
    }

    #[test]
    fn test_silence_is_rest() {
        let block = vec![0i16; 512];
        let freq = autocorrelation_frequency(&block, 44100, &ParabolicInterpolator);
        assert_eq!(freq, REST_FREQUENCY);
    }

    #[test]
    fn test_empty_block_is_rest() {
        let freq = autocorrelation_frequency(&[], 44100, &ParabolicInterpolator);
        assert_eq!(freq, REST_FREQUENCY);
    }

    #[test]
    fn test_half_autocorrelation_zero_lag_is_energy() {
        let signal = vec![1.0, -1.0, 1.0, -1.0];
        let acf = half_autocorrelation(&signal);
        assert_eq!(acf.len(), 4);
        assert!((acf[0] - 4.0).abs() < 1e-9, "ACF[0] = {}", acf[0]);
        // Alternating signal anticorrelates at lag 1
        assert!(acf[1] < 0.0);
    }
}
