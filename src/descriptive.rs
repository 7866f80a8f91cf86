//! Single-pass descriptive primitives: extremes, product and sums.

use crate::error::{Result, StatError};
use crate::summation::{compensated_sum, kahan_sum};
use crate::validate::{ensure_finite, ensure_non_empty, ensure_numeric};

/// Returns the minimum value in the slice.
///
/// # Returns
/// - `Err` if `data` is empty or contains NaN/Inf.
///
/// # Examples
/// ```
/// use stat_methods::min;
/// assert_eq!(min(&[3.0, 1.0, 4.0, 1.0, 5.0]), Ok(1.0));
/// ```
pub fn min(data: &[f64]) -> Result<f64> {
    ensure_numeric(data)?;
    Ok(data.iter().copied().fold(f64::INFINITY, f64::min))
}

/// Returns the maximum value in the slice.
///
/// # Returns
/// - `Err` if `data` is empty or contains NaN/Inf.
///
/// # Examples
/// ```
/// use stat_methods::max;
/// assert_eq!(max(&[3.0, 1.0, 4.0, 1.0, 5.0]), Ok(5.0));
/// ```
pub fn max(data: &[f64]) -> Result<f64> {
    ensure_numeric(data)?;
    Ok(data.iter().copied().fold(f64::NEG_INFINITY, f64::max))
}

/// Multiplies every element together.
///
/// A zero element is valid and makes the product `0.0`.
///
/// # Returns
/// - `Err(Overflow)` if the product leaves the finite range.
/// - `Err` if `data` is empty or contains NaN/Inf.
pub fn product(data: &[f64]) -> Result<f64> {
    ensure_numeric(data)?;
    let p: f64 = data.iter().product();
    if p.is_finite() {
        Ok(p)
    } else {
        Err(StatError::Overflow)
    }
}

/// Compensated sum of a non-empty slice.
///
/// Unlike [`kahan_sum`], an empty slice is an error here.
///
/// # Examples
/// ```
/// use stat_methods::sum;
/// assert_eq!(sum(&[1.0, 2.0, 3.0, 4.0]), Ok(10.0));
/// assert!(sum(&[]).is_err());
/// ```
pub fn sum(data: &[f64]) -> Result<f64> {
    ensure_non_empty(data)?;
    kahan_sum(data)
}

/// Compensated sum of squares, `Σ xᵢ²`.
pub fn sum_of_squares(data: &[f64]) -> Result<f64> {
    ensure_non_empty(data)?;
    ensure_finite(data)?;
    compensated_sum(data.iter().map(|&x| x * x))
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- min / max ---

    #[test]
    fn test_min_max() {
        assert_eq!(min(&[1.0, 1.0, 2.0, 3.0, 4.0, 4.0]), Ok(1.0));
        assert_eq!(min(&[2.5, 3.25, -2.0, 5.75]), Ok(-2.0));
        assert_eq!(max(&[1.0, 2.0, 3.0, 4.0, 4.0]), Ok(4.0));
        assert_eq!(max(&[3.0, 2.5, 200.0, 5.75]), Ok(200.0));
    }

    #[test]
    fn test_min_max_single() {
        assert_eq!(min(&[3.0]), Ok(3.0));
        assert_eq!(max(&[3.0]), Ok(3.0));
    }

    #[test]
    fn test_min_max_invalid() {
        assert_eq!(min(&[]), Err(StatError::Empty));
        assert_eq!(max(&[]), Err(StatError::Empty));
        assert_eq!(
            min(&[f64::NAN, 2.5, 3.0]),
            Err(StatError::NonFinite { index: 0 })
        );
        assert_eq!(
            max(&[1.0, f64::INFINITY]),
            Err(StatError::NonFinite { index: 1 })
        );
    }

    // --- product ---

    #[test]
    fn test_product() {
        assert_eq!(product(&[1.0, 2.0, 3.0, 4.0, 5.0]), Ok(120.0));
        assert_eq!(product(&[2.5, 3.25, 2.0, 5.75]), Ok(93.4375));
        assert_eq!(product(&[3.0]), Ok(3.0));
    }

    #[test]
    fn test_product_with_zero() {
        assert_eq!(product(&[5.0, 8.0, 1.2, 0.0]), Ok(0.0));
    }

    #[test]
    fn test_product_invalid() {
        assert_eq!(product(&[]), Err(StatError::Empty));
        assert!(product(&[f64::NAN, 2.0, 3.0, 4.0]).is_err());
    }

    #[test]
    fn test_product_overflow() {
        assert_eq!(product(&[1e200, 1e200]), Err(StatError::Overflow));
        assert_eq!(product(&[1e200, 1e200, 0.0]), Err(StatError::Overflow));
        assert_eq!(product(&[1e200, 1e-200]), Ok(1.0));
    }

    // --- sum ---

    #[test]
    fn test_sum() {
        assert_eq!(sum(&[3.0]), Ok(3.0));
        let tenths: Vec<f64> = (1..=17).map(|i| i as f64 / 10.0).collect();
        assert!((sum(&tenths).unwrap() - 15.3).abs() < 1e-12);
    }

    #[test]
    fn test_sum_invalid() {
        assert_eq!(sum(&[]), Err(StatError::Empty));
        assert!(sum(&[f64::NAN, 2.0, 3.0, 4.0]).is_err());
        assert_eq!(sum(&[f64::MAX, f64::MAX, 1.0]), Err(StatError::Overflow));
        assert_eq!(sum_of_squares(&[1e200]), Err(StatError::Overflow));
    }

    #[test]
    fn test_sum_of_squares() {
        assert_eq!(sum_of_squares(&[1.0, 2.0, 3.0]), Ok(14.0));
        assert_eq!(sum_of_squares(&[]), Err(StatError::Empty));
    }
}
