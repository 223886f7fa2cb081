//! Duration quantization to musically typical lengths

/// Typical note lengths in hundredths of a quarter note:
/// sixteenth, eighth, quarter, dotted quarter, half, whole
const TYPICAL_LENGTHS: [f64; 6] = [25.0, 50.0, 100.0, 150.0, 200.0, 400.0];

/// Snap a duration ratio to the nearest typical length
///
/// `length` is a run length divided by the quarter-length estimate. The
/// value is compared (scaled by 100) against the midpoints between
/// consecutive typical lengths; the greatest length whose preceding midpoint
/// is exceeded wins, defaulting to the shortest. Returns quarter-note units
/// from {0.25, 0.5, 1.0, 1.5, 2.0, 4.0}.
pub fn quantize_duration(length: f64) -> f64 {
    let length = length * 100.0;

    let mut result = TYPICAL_LENGTHS[0];
    for i in 0..TYPICAL_LENGTHS.len() - 1 {
        let threshold = (TYPICAL_LENGTHS[i] + TYPICAL_LENGTHS[i + 1]) / 2.0;
        if length > threshold {
            result = TYPICAL_LENGTHS[i + 1];
        }
    }

    result / 100.0
}
