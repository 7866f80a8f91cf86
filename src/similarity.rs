//! Measures of similarity between two paired samples.

use crate::central::mean;
use crate::error::{Result, StatError};
use crate::spread::stdev;
use crate::summation::compensated_sum;
use crate::validate::{ensure_min_len, ensure_same_len};

/// Computes the sample covariance between two datasets.
///
/// # Formula
/// ```text
/// Cov(X, Y) = Σ(xᵢ − x̄)(yᵢ − ȳ) / (n − 1)
/// ```
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Returns
/// - `Err(LengthMismatch)` if `x.len() != y.len()`.
/// - `Err(TooFewElements)` if `n < 2`.
/// - `Err` if either input is empty or contains NaN/Inf.
///
/// # Examples
/// ```
/// use stat_methods::covariance;
/// let x = [5.0, 12.0, 18.0, 23.0, 45.0];
/// let y = [2.0, 8.0, 18.0, 20.0, 28.0];
/// assert!((covariance(&x, &y).unwrap() - 146.1).abs() < 1e-10);
/// ```
pub fn covariance(x: &[f64], y: &[f64]) -> Result<f64> {
    let mean_x = mean(x)?;
    let mean_y = mean(y)?;
    ensure_same_len(x, y)?;
    ensure_min_len(x, 2)?;
    let total = compensated_sum(
        x.iter()
            .zip(y)
            .map(|(&xi, &yi)| (xi - mean_x) * (yi - mean_y)),
    )?;
    Ok(total / (x.len() - 1) as f64)
}

/// Pearson correlation coefficient, `Cov(X, Y) / (s_X · s_Y)`.
///
/// The result lies in `[-1, 1]`.
///
/// # Returns
/// - `Err` whenever [`covariance`] fails.
/// - `Err(ZeroVariance)` if either sample is constant.
///
/// # Examples
/// ```
/// use stat_methods::correlation;
/// let r = correlation(&[1.0, 2.0, 3.0, 5.0], &[1.0, 3.0, 8.0, 10.0]).unwrap();
/// assert!((r - 0.9519450934357727).abs() < 1e-12);
/// ```
pub fn correlation(x: &[f64], y: &[f64]) -> Result<f64> {
    let cov = covariance(x, y)?;
    let scale = stdev(x, None)? * stdev(y, None)?;
    if scale == 0.0 {
        return Err(StatError::ZeroVariance);
    }
    Ok(cov / scale)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn paired(max_len: usize) -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
        (2..=max_len).prop_flat_map(|n| {
            (
                proptest::collection::vec(-1e3_f64..1e3, n),
                proptest::collection::vec(-1e3_f64..1e3, n),
            )
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn covariance_is_symmetric((x, y) in paired(60)) {
            let a = covariance(&x, &y).unwrap();
            let b = covariance(&y, &x).unwrap();
            prop_assert!((a - b).abs() <= 1e-9 * a.abs().max(1.0));
        }

        #[test]
        fn correlation_bounded((x, y) in paired(60)) {
            if let Ok(r) = correlation(&x, &y) {
                prop_assert!(r.abs() <= 1.0 + 1e-9, "correlation {} out of bounds", r);
            }
        }
    }
}
