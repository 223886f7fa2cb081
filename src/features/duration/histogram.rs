//! Equal-width histogram with linear bin search

/// Partition values into `bins` equal-width bins
///
/// Returns the per-bin counts and the `bins + 1` bin limits, from the data
/// minimum to the maximum. Membership uses a strict `>` linear search, so a
/// value exactly on a limit falls into the lower bin. When all values are
/// equal every value lands in the first bin and all limits collapse onto it.
///
/// # Panics
///
/// Panics if `data` is empty or `bins` is zero; callers always supply the
/// run-length list with its appended trailing zero.
pub fn histogram(data: &[usize], bins: usize) -> (Vec<usize>, Vec<f64>) {
    let max = *data.iter().max().expect("histogram data must be non-empty") as f64;
    let min = *data.iter().min().expect("histogram data must be non-empty") as f64;
    let bin_width = (max - min) / bins as f64;

    let mut counts = vec![0usize; bins];
    for &value in data {
        let mut count = 1;
        while value as f64 > min + count as f64 * bin_width {
            count += 1;
        }
        counts[count - 1] += 1;
    }

    let mut limits = Vec::with_capacity(bins + 1);
    limits.push(min);
    for i in 1..=bins {
        limits.push(min + i as f64 * bin_width);
    }

    (counts, limits)
}
