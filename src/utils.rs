//! Helpers shared by the central-tendency and shape statistics.

use crate::central::mean;
use crate::error::{Result, StatError};
use crate::summation::compensated_sum;
use crate::validate::ensure_finite_param;

/// Returns every index at which `target` occurs in `data`.
///
/// # Examples
/// ```
/// use stat_methods::all_indexes;
/// assert_eq!(all_indexes(&[1, 1, 2, 3, 4, 4], &1), vec![0, 1]);
/// assert!(all_indexes(&["a", "b"], &"z").is_empty());
/// ```
pub fn all_indexes<T: PartialEq>(data: &[T], target: &T) -> Vec<usize> {
    data.iter()
        .enumerate()
        .filter(|(_, x)| *x == target)
        .map(|(i, _)| i)
        .collect()
}

/// Real `order`-th root of `value`, keeping the sign for odd orders.
///
/// Returns `sign(value) · |value|^(1/order)`. The order may be fractional or
/// negative: `nth_root(2.0, 0.5) == 4.0` and `nth_root(0.25, -2.0) == 2.0`.
///
/// # Returns
/// - `Err(InvalidParameter)` if `value` or `order` is NaN/Inf, or `order == 0`.
/// - `Err(NoRealRoot)` if `value < 0` and `order` is even.
///
/// # Examples
/// ```
/// use stat_methods::nth_root;
/// assert!((nth_root(-8.0, 3.0).unwrap() + 2.0).abs() < 1e-15);
/// assert!(nth_root(-16.0, 4.0).is_err());
/// ```
pub fn nth_root(value: f64, order: f64) -> Result<f64> {
    let value = ensure_finite_param("value", value)?;
    let order = ensure_finite_param("order", order)?;
    if order == 0.0 {
        return Err(StatError::InvalidParameter {
            name: "order",
            value: order,
        });
    }
    if value < 0.0 && order % 2.0 == 0.0 {
        return Err(StatError::NoRealRoot { order });
    }
    Ok(value.signum() * value.abs().powf(1.0 / order))
}

/// Population central moment `(1/n) Σ (xᵢ − x̄)^order`.
///
/// The mean and the moment sum both use compensated summation. A power that
/// overflows is reported as `Err(Overflow)`.
pub fn nth_moment_about_mean(data: &[f64], order: i32) -> Result<f64> {
    let m = mean(data)?;
    let total = compensated_sum(data.iter().map(|&x| (x - m).powi(order)))?;
    Ok(total / data.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // --- all_indexes ---

    #[test]
    fn test_all_indexes() {
        assert_eq!(all_indexes(&[1, 1, 2, 3, 4, 4], &5), Vec::<usize>::new());
        assert_eq!(all_indexes(&[2.5, -2.5, 2.5, 5.75], &2.5), vec![0, 2]);
        assert_eq!(all_indexes(&["a", "2.5", "b"], &"b"), vec![2]);
        assert_eq!(all_indexes::<i32>(&[], &2), Vec::<usize>::new());
    }

    #[test]
    fn test_all_indexes_option_elements() {
        let data = [Some(6.0), None, Some(3.0)];
        assert_eq!(all_indexes(&data, &None), vec![1]);
    }

    // --- nth_root ---

    #[test]
    fn test_nth_root() {
        assert_relative_eq!(nth_root(4.0, 2.0).unwrap(), 2.0);
        assert_relative_eq!(nth_root(8.0, 3.0).unwrap(), 2.0);
        assert_relative_eq!(nth_root(2.0, 0.5).unwrap(), 4.0);
        assert_relative_eq!(nth_root(0.25, -2.0).unwrap(), 2.0);
        assert_relative_eq!(nth_root(-8.0, 3.0).unwrap(), -2.0);
        assert_eq!(nth_root(0.0, 3.0), Ok(0.0));
    }

    #[test]
    fn test_nth_root_undefined() {
        assert_eq!(
            nth_root(-16.0, 4.0),
            Err(StatError::NoRealRoot { order: 4.0 })
        );
        assert!(nth_root(f64::INFINITY, 2.0).is_err());
        assert!(nth_root(2.0, f64::INFINITY).is_err());
        assert!(nth_root(f64::NAN, 2.0).is_err());
        assert!(nth_root(2.0, 0.0).is_err());
    }

    // --- nth_moment_about_mean ---

    #[test]
    fn test_second_moment() {
        let data = [
            0.0, 3.0, 4.0, 1.0, 2.0, 3.0, 0.0, 2.0, 1.0, 3.0, 2.0, 0.0, 2.0, 2.0, 3.0, 2.0, 5.0,
            2.0, 3.0, 999.0,
        ];
        assert_relative_eq!(
            nth_moment_about_mean(&data, 2).unwrap(),
            47207.0475,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_moment_single_element() {
        assert_eq!(nth_moment_about_mean(&[3.0], 2), Ok(0.0));
    }

    #[test]
    fn test_moment_invalid() {
        assert!(nth_moment_about_mean(&[f64::NAN, 2.0, 3.0, 4.0], 2).is_err());
        assert_eq!(nth_moment_about_mean(&[], 2), Err(StatError::Empty));
        assert_eq!(
            nth_moment_about_mean(&[1e100, -1e100], 4),
            Err(StatError::Overflow)
        );
    }
}
