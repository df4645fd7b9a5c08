//! Period-over-period percentage change of closing price.

/// Daily returns, aligned 1:1 with the input.
///
/// Element `i` (for `i ≥ 1`) is `close[i] / close[i − 1] − 1`. The first
/// element has no prior bar and is `None`; it is never a computed number.
pub fn daily_returns(closes: &[f64]) -> Vec<Option<f64>> {
    closes
        .iter()
        .enumerate()
        .map(|(i, close)| {
            if i == 0 {
                None
            } else {
                Some(close / closes[i - 1] - 1.0)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    #[test]
    fn first_return_is_none() {
        let returns = daily_returns(&[10.0, 11.0]);
        assert_eq!(returns[0], None);
    }

    #[test]
    fn exact_ratios() {
        let closes = [10.0, 11.0, 12.0, 11.0, 10.0];
        let returns = daily_returns(&closes);
        let expected = [0.1, 1.0 / 11.0, -1.0 / 12.0, -1.0 / 11.0];
        assert_eq!(returns.len(), closes.len());
        for (got, want) in returns[1..].iter().zip(expected.iter()) {
            let got = got.expect("returns after index 0 are defined");
            assert!((got - want).abs() < TOL, "got {got}, want {want}");
        }
    }

    #[test]
    fn empty_and_single_element() {
        assert!(daily_returns(&[]).is_empty());
        assert_eq!(daily_returns(&[42.0]), vec![None]);
    }
}
