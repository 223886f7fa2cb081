//! Sub-sample peak interpolation strategies
//!
//! The autocorrelation peak lands on an integer lag; the true period usually
//! lies between samples. The interpolator refines the peak position, and is a
//! swappable strategy selected at configuration time.

/// Refines an integer peak index into a fractional lag
pub trait PeakInterpolator: Send + Sync {
    /// Estimate the true position of an inter-sample maximum
    ///
    /// `peak` is an index into `correlation`. At the array ends the missing
    /// neighbor is replaced by the value at `peak` itself.
    fn refine(&self, correlation: &[f64], peak: usize) -> f64;
}

/// Parabolic (three-point quadratic) interpolation
///
/// Fits a parabola through `(peak-1, peak, peak+1)` and returns the vertex:
/// `(prev - next) / (prev - 2*curr + next) * 0.5 + peak`.
#[derive(Debug, Clone, Copy)]
pub struct ParabolicInterpolator;

impl PeakInterpolator for ParabolicInterpolator {
    fn refine(&self, correlation: &[f64], peak: usize) -> f64 {
        let curr = correlation[peak];
        let prev = if peak >= 1 { correlation[peak - 1] } else { curr };
        let next = if peak + 1 < correlation.len() {
            correlation[peak + 1]
        } else {
            curr
        };

        let vertex = (prev - next) / (prev - 2.0 * curr + next);
        vertex * 0.5 + peak as f64
    }
}

/// No interpolation: the integer peak index is used as-is
#[derive(Debug, Clone, Copy)]
pub struct RawPeakInterpolator;

impl PeakInterpolator for RawPeakInterpolator {
    fn refine(&self, _correlation: &[f64], peak: usize) -> f64 {
        peak as f64
    }
}

/// Named interpolation strategy, resolvable to an implementation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpolationMethod {
    /// Three-point parabolic vertex refinement (default)
    Parabolic,
    /// Integer peak index, no refinement
    RawPeak,
}

static PARABOLIC: ParabolicInterpolator = ParabolicInterpolator;
static RAW_PEAK: RawPeakInterpolator = RawPeakInterpolator;

impl InterpolationMethod {
    /// Resolve the named strategy to its implementation
    pub fn interpolator(&self) -> &'static dyn PeakInterpolator {
        match self {
            InterpolationMethod::Parabolic => &PARABOLIC,
            InterpolationMethod::RawPeak => &RAW_PEAK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parabolic_symmetric_peak_stays_centered() {
        let correlation = vec![0.0, 1.0, 0.0];
        let vertex = ParabolicInterpolator.refine(&correlation, 1);
        assert!((vertex - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_parabolic_skewed_peak_shifts_toward_larger_neighbor() {
        // Larger right neighbor pulls the vertex right of the integer peak
        let correlation = vec![0.0, 1.0, 0.5];
        let vertex = ParabolicInterpolator.refine(&correlation, 1);
        assert!(vertex > 1.0 && vertex < 2.0, "vertex = {}", vertex);
    }

    #[test]
    fn test_parabolic_boundary_repeats_edge_value() {
        // peak at index 0: prev is replaced by curr
        let correlation = vec![2.0, 1.0, 0.0];
        let vertex = ParabolicInterpolator.refine(&correlation, 0);
        assert!(vertex.is_finite());
    }

    #[test]
    fn test_raw_peak_returns_index() {
        let correlation = vec![0.0, 1.0, 0.5];
        assert_eq!(RawPeakInterpolator.refine(&correlation, 1), 1.0);
    }

    #[test]
    fn test_method_resolution() {
        let correlation = vec![0.0, 1.0, 0.5];
        assert_eq!(
            InterpolationMethod::RawPeak
                .interpolator()
                .refine(&correlation, 1),
            1.0
        );
    }
}
