//! Rolling-window kernels shared by the moving-average and Bollinger
//! engines.
//!
//! Both kernels use an expanding window during warm-up: the value at index
//! `i` is computed over the `min(i + 1, window)` observations ending at `i`.
//! The window never includes future observations, and the output always has
//! the input length. This warm-up rule is a numerical contract, not an
//! implementation detail; do not swap it for NaN-until-full semantics.

/// Rolling arithmetic mean with expanding warm-up.
///
/// `window` must be at least 1.
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<f64> {
    debug_assert!(window >= 1, "rolling window must be at least 1");

    values
        .iter()
        .enumerate()
        .map(|(i, _)| {
            let width = (i + 1).min(window);
            let slice = &values[i + 1 - width..=i];
            slice.iter().sum::<f64>() / width as f64
        })
        .collect()
}

/// Rolling sample standard deviation with expanding warm-up.
///
/// Uses the n − 1 denominator; a single-observation window yields 0.0, so
/// the output is defined at every index. `window` must be at least 1.
pub fn rolling_std(values: &[f64], window: usize) -> Vec<f64> {
    debug_assert!(window >= 1, "rolling window must be at least 1");

    values
        .iter()
        .enumerate()
        .map(|(i, _)| {
            let width = (i + 1).min(window);
            sample_std(&values[i + 1 - width..=i])
        })
        .collect()
}

/// Sample standard deviation of a slice; 0.0 for fewer than two values.
pub(crate) fn sample_std(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / n as f64;
    let variance = values
        .iter()
        .map(|v| {
            let diff = v - mean;
            diff * diff
        })
        .sum::<f64>()
        / (n - 1) as f64;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    #[test]
    fn mean_expanding_warm_up() {
        let values = [10.0, 11.0, 12.0, 11.0, 10.0];
        let mean = rolling_mean(&values, 3);
        let expected = [10.0, 10.5, 11.0, 34.0 / 3.0, 11.0];
        assert_eq!(mean.len(), values.len());
        for (got, want) in mean.iter().zip(expected.iter()) {
            assert!((got - want).abs() < TOL, "got {got}, want {want}");
        }
    }

    #[test]
    fn mean_window_one_is_identity() {
        let values = [4.0, 5.0, 6.0];
        assert_eq!(rolling_mean(&values, 1), values.to_vec());
    }

    #[test]
    fn mean_window_larger_than_series_is_expanding() {
        let values = [2.0, 4.0, 6.0];
        let mean = rolling_mean(&values, 50);
        let expected = [2.0, 3.0, 4.0];
        for (got, want) in mean.iter().zip(expected.iter()) {
            assert!((got - want).abs() < TOL);
        }
    }

    #[test]
    fn mean_empty_input() {
        assert!(rolling_mean(&[], 20).is_empty());
    }

    #[test]
    fn std_single_observation_is_zero() {
        let std = rolling_std(&[42.0, 43.0], 20);
        assert_eq!(std[0], 0.0);
        assert!(std[1] > 0.0);
    }

    #[test]
    fn std_constant_series_is_zero_everywhere() {
        let values = [7.0; 10];
        for v in rolling_std(&values, 4) {
            assert_eq!(v, 0.0);
        }
    }

    #[test]
    fn std_known_window() {
        // Sample std of [1, 2, 3, 4] = sqrt(5/3).
        let values = [1.0, 2.0, 3.0, 4.0];
        let std = rolling_std(&values, 4);
        assert!((std[3] - (5.0f64 / 3.0).sqrt()).abs() < TOL);
    }
}
