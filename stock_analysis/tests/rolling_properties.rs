//! Property tests for the rolling-window kernels.

use proptest::prelude::*;
use stock_analysis::indicators::rolling::{rolling_mean, rolling_std};

proptest! {
    /// The output always has the input length, for every window size.
    #[test]
    fn mean_preserves_length(
        values in prop::collection::vec(1.0f64..1000.0, 0..200),
        window in 1usize..100,
    ) {
        prop_assert_eq!(rolling_mean(&values, window).len(), values.len());
        prop_assert_eq!(rolling_std(&values, window).len(), values.len());
    }

    /// During warm-up the value is the mean of everything seen so far.
    #[test]
    fn warm_up_is_expanding(
        values in prop::collection::vec(1.0f64..1000.0, 1..60),
        window in 1usize..60,
    ) {
        let mean = rolling_mean(&values, window);
        let warm_up = window.min(values.len());
        for i in 0..warm_up {
            let expanding = values[..=i].iter().sum::<f64>() / (i + 1) as f64;
            prop_assert!((mean[i] - expanding).abs() < 1e-9);
        }
    }

    /// Past warm-up, each value is the mean of exactly `window` observations.
    #[test]
    fn steady_state_uses_full_window(
        values in prop::collection::vec(1.0f64..1000.0, 10..120),
        window in 1usize..10,
    ) {
        let mean = rolling_mean(&values, window);
        for i in window..values.len() {
            let direct = values[i + 1 - window..=i].iter().sum::<f64>() / window as f64;
            prop_assert!((mean[i] - direct).abs() < 1e-9);
        }
    }

    /// The deviation is zero on constant input, at every window size.
    #[test]
    fn std_is_zero_on_constant_input(
        value in 1.0f64..1000.0,
        len in 1usize..80,
        window in 1usize..40,
    ) {
        let constant = vec![value; len];
        for s in rolling_std(&constant, window) {
            prop_assert!(s.abs() < 1e-12);
        }
    }
}
