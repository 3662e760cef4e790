/// Trailing means over `window` consecutive entries, one per full window.
/// Empty when `window` is zero or longer than `values`.
pub fn moving_average(values: &[f64], window: usize) -> Vec<f64> {
    if window == 0 {
        return vec![];
    }

    values
        .windows(window)
        .map(|w| w.iter().sum::<f64>() / window as f64)
        .collect()
}
