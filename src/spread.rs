//! Measures of spread: variance, standard deviation, range and MAD.
//!
//! The variance family accepts an optional precomputed mean. A supplied
//! mean is trusted as-is and never checked against the data: passing a
//! wrong value silently produces a wrong result. It must still be finite.

use crate::central::{mean, median};
use crate::descriptive::{max, min};
use crate::error::Result;
use crate::summation::compensated_sum;
use crate::validate::{ensure_finite_param, ensure_min_len, ensure_numeric};

/// Sum of squared deviations, `Σ(xᵢ − μ)²`.
///
/// `mu = None` computes the mean of `data`.
///
/// # Returns
/// - `Err(InvalidParameter)` if a supplied `mu` is NaN/Inf.
/// - `Err(Overflow)` if a squared deviation or their sum overflows.
/// - `Err` if `data` is empty or contains any NaN/Inf.
pub fn square_deviation_sum(data: &[f64], mu: Option<f64>) -> Result<f64> {
    ensure_numeric(data)?;
    let m = match mu {
        Some(m) => ensure_finite_param("mu", m)?,
        None => mean(data)?,
    };
    compensated_sum(data.iter().map(|&x| (x - m) * (x - m)))
}

/// Population variance (denominator `n`).
///
/// # Examples
/// ```
/// use stat_methods::p_variance;
/// assert_eq!(p_variance(&[1.0, 2.0, 3.0, 4.0, 5.0], Some(3.0)), Ok(2.0));
/// assert_eq!(p_variance(&[3.0], None), Ok(0.0));
/// ```
pub fn p_variance(data: &[f64], mu: Option<f64>) -> Result<f64> {
    Ok(square_deviation_sum(data, mu)? / data.len() as f64)
}

/// Population standard deviation, `√p_variance`.
pub fn p_stdev(data: &[f64], mu: Option<f64>) -> Result<f64> {
    p_variance(data, mu).map(f64::sqrt)
}

/// Sample variance with Bessel's correction (denominator `n − 1`).
///
/// # Returns
/// - `Err(TooFewElements)` if `data.len() < 2`.
/// - `Err` if `data` is empty or contains any NaN/Inf.
///
/// # Examples
/// ```
/// use stat_methods::variance;
/// assert_eq!(variance(&[1.0, 2.0, 3.0, 4.0, 5.0], Some(3.0)), Ok(2.5));
/// assert!(variance(&[3.0], None).is_err());
/// ```
pub fn variance(data: &[f64], mu: Option<f64>) -> Result<f64> {
    ensure_min_len(data, 2)?;
    Ok(square_deviation_sum(data, mu)? / (data.len() - 1) as f64)
}

/// Sample standard deviation, `√variance`.
pub fn stdev(data: &[f64], mu: Option<f64>) -> Result<f64> {
    variance(data, mu).map(f64::sqrt)
}

/// Difference between the largest and smallest value.
pub fn range(data: &[f64]) -> Result<f64> {
    Ok(max(data)? - min(data)?)
}

/// Median absolute deviation from the median.
///
/// # Examples
/// ```
/// use stat_methods::mad;
/// assert_eq!(mad(&[1.0, 1.0, 2.0, 2.0, 4.0, 6.0, 9.0]), Ok(1.0));
/// ```
pub fn mad(data: &[f64]) -> Result<f64> {
    let m = median(data)?;
    let deviations: Vec<f64> = data.iter().map(|&x| (x - m).abs()).collect();
    median(&deviations)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn finite_vec(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
        proptest::collection::vec(-1e6_f64..1e6, min_len..=max_len)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn variance_non_negative(data in finite_vec(2, 100)) {
            prop_assert!(variance(&data, None).unwrap() >= 0.0);
            prop_assert!(p_variance(&data, None).unwrap() >= 0.0);
        }

        #[test]
        fn sample_and_population_variance_relate(data in finite_vec(2, 100)) {
            let n = data.len() as f64;
            let pop = p_variance(&data, None).unwrap();
            let sample = variance(&data, None).unwrap();
            let diff = (pop * n - sample * (n - 1.0)).abs();
            prop_assert!(diff <= 1e-9 * (pop * n).max(1.0));
        }

        #[test]
        fn stdev_is_sqrt_of_variance(data in finite_vec(2, 100)) {
            let var = variance(&data, None).unwrap();
            let sd = stdev(&data, None).unwrap();
            prop_assert!((sd * sd - var).abs() <= 1e-10 * var.max(1.0));
        }

        #[test]
        fn variance_shift_invariant(data in finite_vec(2, 50), shift in -1e3_f64..1e3) {
            let shifted: Vec<f64> = data.iter().map(|&x| x + shift).collect();
            let a = variance(&data, None).unwrap();
            let b = variance(&shifted, None).unwrap();
            prop_assert!((a - b).abs() <= 1e-6 * a.max(1.0));
        }

        #[test]
        fn mad_bounded_by_range(data in finite_vec(1, 100)) {
            prop_assert!(mad(&data).unwrap() <= range(&data).unwrap());
        }
    }
}
