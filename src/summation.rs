//! Kahan compensated summation.
//!
//! Naive left-to-right addition loses low-order bits at every step, so the
//! error grows with `n`. Kahan's algorithm keeps the lost bits in a running
//! compensation term and feeds them back into the next addend.
//!
//! Reference: Kahan (1965), "Further remarks on reducing truncation errors",
//! *Communications of the ACM* 8(1), p. 40.

use crate::error::{Result, StatError};
use crate::validate::ensure_finite;

/// Sums `data` with Kahan compensated summation.
///
/// # Algorithm
/// For each element `x`:
/// ```text
/// y = x - c
/// t = sum + y
/// c = (t - sum) - y
/// sum = t
/// ```
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Returns
/// - `Err(NonFinite)` if any element is NaN/Inf.
/// - `Err(Overflow)` if a partial sum leaves the finite range.
/// - `Ok(0.0)` for an empty slice; callers that need data check the length.
///
/// # Examples
/// ```
/// use stat_methods::kahan_sum;
/// let tenths: Vec<f64> = (1..=17).map(|i| i as f64 / 10.0).collect();
/// assert!((kahan_sum(&tenths).unwrap() - 15.3).abs() < 1e-12);
/// ```
pub fn kahan_sum(data: &[f64]) -> Result<f64> {
    ensure_finite(data)?;
    compensated_sum(data.iter().copied())
}

/// Kahan recurrence over terms the caller has already validated.
///
/// An infinite term or partial sum poisons the compensation with
/// `inf - inf`, so any non-finite total is reported as `Overflow`.
pub(crate) fn compensated_sum<I>(terms: I) -> Result<f64>
where
    I: IntoIterator<Item = f64>,
{
    let mut sum = 0.0_f64;
    let mut c = 0.0_f64;
    for x in terms {
        let y = x - c;
        let t = sum + y;
        c = (t - sum) - y;
        sum = t;
    }
    if sum.is_finite() {
        Ok(sum)
    } else {
        Err(StatError::Overflow)
    }
}
