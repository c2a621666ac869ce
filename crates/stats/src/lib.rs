//! Small numeric helpers shared by the knnlab crates.

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Sample variance with N-1 denominator.
/// Returns 0.0 if fewer than 2 elements.
pub fn variance(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 2 {
        return 0.0;
    }
    let nf = n as f64;
    let mean = data.iter().sum::<f64>() / nf;
    data.iter().map(|&x| (x - mean) * (x - mean)).sum::<f64>() / (nf - 1.0)
}

/// `n` evenly spaced values over `[low, high]`, endpoints included.
///
/// Matches numpy's `linspace`: `n = 0` gives an empty vector, `n = 1` gives
/// `[low]`. The last element is written as `high` exactly so that rounding
/// in the step never moves the upper endpoint.
pub fn linspace(low: f64, high: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![low],
        _ => {
            let step = (high - low) / (n - 1) as f64;
            let mut out: Vec<f64> = (0..n).map(|i| low + step * i as f64).collect();
            out[n - 1] = high;
            out
        }
    }
}

/// Index of the smallest value, first occurrence on ties.
///
/// NaN entries are never selected unless every entry is NaN, in which case
/// index 0 is returned. Returns `None` for an empty slice.
pub fn argmin_first(values: &[f64]) -> Option<usize> {
    if values.is_empty() {
        return None;
    }
    let mut best = 0;
    for (i, &v) in values.iter().enumerate().skip(1) {
        let current = values[best];
        if v < current || (current.is_nan() && !v.is_nan()) {
            best = i;
        }
    }
    Some(best)
}
