//! Averages and measures of central location and shape.
//!
//! All numeric functions in this module reject empty input and any NaN/Inf
//! element. The rank-based functions ([`median_low`], [`median_high`],
//! [`mode`]) work on any element type and have `*_by` variants taking a
//! caller-supplied comparator or equality.
//!
//! # Algorithms
//!
//! - **Means**: Kahan compensated summation.
//! - **Grouped median**: linear interpolation inside the bin holding the
//!   `n/2`-th observation, for data rounded to a fixed bin width.
//! - **Percentile**: nearest-rank method, `rank = ⌈p·n⌉` clamped to `1`.
//! - **Quartiles**: median of each half, excluding the overall median
//!   element from both halves when `n` is odd.

use std::cmp::Ordering;

use crate::descriptive::{max, min, product, sum_of_squares};
use crate::error::{Result, StatError};
use crate::summation::{compensated_sum, kahan_sum};
use crate::utils::{nth_moment_about_mean, nth_root};
use crate::validate::{
    ensure_finite, ensure_min_len, ensure_non_empty, ensure_numeric, sorted_copy,
};

/// Default bin width for [`median_grouped`]: data rounded to integers.
pub const DEFAULT_BIN_WIDTH: f64 = 1.0;

/// Computes the arithmetic mean using Kahan compensated summation.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Returns
/// - `Err` if `data` is empty or contains any NaN/Inf.
///
/// # Examples
/// ```
/// use stat_methods::mean;
/// assert!((mean(&[1.0, 2.0, 3.0, 4.0, 4.0]).unwrap() - 2.8).abs() < 1e-15);
/// ```
pub fn mean(data: &[f64]) -> Result<f64> {
    ensure_non_empty(data)?;
    Ok(kahan_sum(data)? / data.len() as f64)
}

/// Computes the harmonic mean, `n / Σ(1/xᵢ)`.
///
/// # Returns
/// - `Err(ZeroElement)` if any element is exactly zero.
/// - `Err` if `data` is empty or contains any NaN/Inf.
///
/// # Examples
/// ```
/// use stat_methods::harmonic_mean;
/// let h = harmonic_mean(&[2.5, 3.0, 10.0]).unwrap();
/// assert!((h - 3.6).abs() < 1e-12);
/// ```
pub fn harmonic_mean(data: &[f64]) -> Result<f64> {
    ensure_numeric(data)?;
    if let Some(index) = data.iter().position(|&x| x == 0.0) {
        return Err(StatError::ZeroElement { index });
    }
    let reciprocal_sum = compensated_sum(data.iter().map(|&x| 1.0 / x))?;
    Ok(data.len() as f64 / reciprocal_sum)
}

/// Computes the geometric mean, the `n`-th root of the product.
///
/// Negative products keep their sign for odd `n`, so the geometric mean of
/// `[-1, 2, 4]` is `-2`. A zero element gives `0`.
///
/// # Returns
/// - `Err(NoRealRoot)` if the product is negative and `n` is even.
/// - `Err` if `data` is empty, contains any NaN/Inf, or the product overflows.
///
/// # Examples
/// ```
/// use stat_methods::geometric_mean;
/// assert!((geometric_mean(&[1.0, 2.0, 4.0]).unwrap() - 2.0).abs() < 1e-15);
/// assert!((geometric_mean(&[-1.0, 2.0, 4.0]).unwrap() + 2.0).abs() < 1e-15);
/// assert!(geometric_mean(&[-1.0, 2.0, 4.0, 2.0]).is_err());
/// ```
pub fn geometric_mean(data: &[f64]) -> Result<f64> {
    let p = product(data)?;
    nth_root(p, data.len() as f64)
}

/// Computes the median of `data` without mutating the input.
///
/// Sorts a copy, then returns the middle element (or the mean of the two
/// middle elements for even-length data).
///
/// # Complexity
/// Time: O(n log n), Space: O(n)
///
/// # Examples
/// ```
/// use stat_methods::median;
/// assert_eq!(median(&[3.0, 1.0, 2.0]), Ok(2.0));
/// assert_eq!(median(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]), Ok(3.5));
/// ```
pub fn median(data: &[f64]) -> Result<f64> {
    ensure_numeric(data)?;
    Ok(median_sorted(&sorted_copy(data)))
}

/// Median of non-empty, sorted, finite data.
pub(crate) fn median_sorted(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}

/// Low median: the smaller of the two middle values for even-length data.
///
/// The result is always a member of `data`. Works for any `PartialOrd`
/// element type.
///
/// # Returns
/// - `Err(Empty)` if `data` is empty.
/// - `Err(Incomparable)` if two elements have no ordering (e.g. NaN).
///
/// # Examples
/// ```
/// use stat_methods::median_low;
/// assert_eq!(median_low(&[1, 2, 3, 4, 5, 6]), Ok(3));
/// assert_eq!(median_low(&['a', 'c', 'b', 'd']), Ok('b'));
/// ```
pub fn median_low<T: PartialOrd + Clone>(data: &[T]) -> Result<T> {
    let sorted = sort_partial(data)?;
    Ok(sorted[(sorted.len() - 1) / 2].clone())
}

/// High median: the larger of the two middle values for even-length data.
///
/// # Examples
/// ```
/// use stat_methods::median_high;
/// assert_eq!(median_high(&[1, 2, 3, 4, 5, 6]), Ok(4));
/// ```
pub fn median_high<T: PartialOrd + Clone>(data: &[T]) -> Result<T> {
    let sorted = sort_partial(data)?;
    Ok(sorted[sorted.len() / 2].clone())
}

/// [`median_low`] with a caller-supplied ordering.
pub fn median_low_by<T, F>(data: &[T], compare: F) -> Result<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    ensure_non_empty(data)?;
    let mut sorted = data.to_vec();
    sorted.sort_by(compare);
    Ok(sorted[(sorted.len() - 1) / 2].clone())
}

/// [`median_high`] with a caller-supplied ordering.
pub fn median_high_by<T, F>(data: &[T], compare: F) -> Result<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    ensure_non_empty(data)?;
    let mut sorted = data.to_vec();
    sorted.sort_by(compare);
    Ok(sorted[sorted.len() / 2].clone())
}

fn sort_partial<T: PartialOrd + Clone>(data: &[T]) -> Result<Vec<T>> {
    ensure_non_empty(data)?;
    let first = &data[0];
    if data
        .iter()
        .any(|x| x.partial_cmp(x).is_none() || first.partial_cmp(x).is_none())
    {
        return Err(StatError::Incomparable);
    }
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    Ok(sorted)
}

/// Median of continuous data grouped into bins of size `width`.
///
/// Each observation is taken to be the midpoint of a half-open bin
/// `[x − width/2, x + width/2)`. Bins are laid out contiguously from the
/// smallest value; the median is interpolated inside the bin holding the
/// `n/2`-th observation:
///
/// ```text
/// median = L + ((n/2 − cf) / f) · width
/// ```
///
/// where `L` is that bin's lower edge, `cf` the count of observations in
/// earlier bins and `f` the bin's frequency.
///
/// Only occupied bins are stored, so cost does not depend on the value range.
///
/// # Complexity
/// Time: O(n log n), Space: O(n)
///
/// # Returns
/// - `Err(InvalidParameter)` if `width` is not finite and positive.
/// - `Err(Overflow)` if the distance from the smallest value does not fit in f64.
/// - `Err` if `data` is empty or contains any NaN/Inf.
///
/// # Examples
/// ```
/// use stat_methods::{median_grouped, DEFAULT_BIN_WIDTH};
/// assert_eq!(median_grouped(&[52.0, 52.0, 53.0, 54.0], DEFAULT_BIN_WIDTH), Ok(52.5));
/// assert_eq!(median_grouped(&[1.0, 3.0, 3.0, 5.0, 7.0], 2.0), Ok(3.5));
/// ```
pub fn median_grouped(data: &[f64], width: f64) -> Result<f64> {
    ensure_numeric(data)?;
    if !width.is_finite() || width <= 0.0 {
        return Err(StatError::InvalidParameter {
            name: "width",
            value: width,
        });
    }
    let sorted = sorted_copy(data);
    let start = sorted[0] - width / 2.0;
    let lower_edge = |bin: f64| start + bin * width;
    let bin_of = |x: f64| -> Result<f64> {
        let bin = ((x - start) / width).floor();
        if !bin.is_finite() {
            return Err(StatError::Overflow);
        }
        // Snap to the edges used for interpolation when the division rounds.
        Ok(if x >= lower_edge(bin + 1.0) {
            bin + 1.0
        } else if x < lower_edge(bin) {
            bin - 1.0
        } else {
            bin
        })
    };

    // (bin index, frequency) for occupied bins, ascending.
    let mut bins: Vec<(f64, usize)> = Vec::new();
    for &x in &sorted {
        let bin = bin_of(x)?;
        match bins.last_mut() {
            Some((last, f)) if *last >= bin => *f += 1,
            _ => bins.push((bin, 1)),
        }
    }

    // An empty bin never completes the walk, so skipping them is exact.
    let half = sorted.len() as f64 / 2.0;
    let mut before = 0usize;
    for &(bin, f) in &bins {
        if (before + f) as f64 >= half {
            let offset = (half - before as f64) / f as f64;
            return Ok(lower_edge(bin) + offset * width);
        }
        before += f;
    }
    // The last bin always brings the cumulative count to n.
    Ok(bins.last().map_or(start, |&(bin, _)| lower_edge(bin) + width))
}

/// Returns every most-frequent value, in order of first appearance.
///
/// Equality is by value. An all-distinct input returns every element. A
/// value that is not equal to itself (NaN) is never counted.
///
/// # Returns
/// - `Err(Empty)` if `data` is empty.
/// - `Err(Incomparable)` if no element is equal to itself.
///
/// # Complexity
/// Time: O(n·d) for `d` distinct values, Space: O(d)
///
/// # Examples
/// ```
/// use stat_methods::mode;
/// assert_eq!(mode(&[1, 2, 3, 3, 4, 4]), Ok(vec![3, 4]));
/// assert_eq!(mode(&["a", "c", "b", "d", "c"]), Ok(vec!["c"]));
/// ```
pub fn mode<T: PartialEq + Clone>(data: &[T]) -> Result<Vec<T>> {
    mode_by(data, |a, b| a == b)
}

/// [`mode`] with a caller-supplied equality.
pub fn mode_by<T, F>(data: &[T], mut eq: F) -> Result<Vec<T>>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    ensure_non_empty(data)?;
    // (first occurrence, count) per distinct value.
    let mut counts: Vec<(&T, usize)> = Vec::new();
    for x in data {
        if !eq(x, x) {
            continue;
        }
        match counts.iter_mut().find(|entry| eq(entry.0, x)) {
            Some((_, count)) => *count += 1,
            None => counts.push((x, 1)),
        }
    }
    if counts.is_empty() {
        return Err(StatError::Incomparable);
    }
    let best = counts.iter().map(|&(_, c)| c).max().unwrap_or(0);
    Ok(counts
        .into_iter()
        .filter(|&(_, c)| c == best)
        .map(|(x, _)| x.clone())
        .collect())
}

/// Mean of the smallest and largest values.
///
/// # Examples
/// ```
/// use stat_methods::mid_range;
/// assert_eq!(mid_range(&[1.0, -2.0, 3.0, 4.0, 8.0, 6.0, 5.0, 9.0]), Ok(3.5));
/// ```
pub fn mid_range(data: &[f64]) -> Result<f64> {
    mean(&[min(data)?, max(data)?])
}

/// Root mean square, `√(Σxᵢ² / n)`.
///
/// # Returns
/// - `Err(Overflow)` if a square or their sum overflows.
/// - `Err` if `data` is empty or contains any NaN/Inf.
pub fn rms(data: &[f64]) -> Result<f64> {
    Ok((sum_of_squares(data)? / data.len() as f64).sqrt())
}

/// Computes the `p`-th percentile with the nearest-rank method.
///
/// # Algorithm
/// For sorted data `x[1..=n]` and `p ∈ [0, 1]`, returns `x[k]` with
/// `k = max(1, ⌈p·n⌉)`. The result is always an observed value; `p = 0`
/// is the minimum and `p = 1` the maximum.
///
/// The product `p·n` is taken in floating point with no tolerance, so a
/// product that rounds just above an integer moves up one rank:
/// `0.14 · 50` evaluates to `7.000000000000001` and selects rank 8.
///
/// # Returns
/// - `Err(InvalidParameter)` if `p` is outside `[0, 1]` or NaN.
/// - `Err` if `data` is empty or contains any NaN/Inf.
///
/// # Examples
/// ```
/// use stat_methods::percentile;
/// let data = [13.0, 20.0, 8.0, 8.0, 7.0, 10.0, 3.0, 15.0, 16.0, 6.0];
/// assert_eq!(percentile(&data, 0.25), Ok(7.0));
/// assert_eq!(percentile(&data, 0.75), Ok(15.0));
/// assert!(percentile(&data, 1.2).is_err());
/// ```
pub fn percentile(data: &[f64], p: f64) -> Result<f64> {
    ensure_numeric(data)?;
    if !(0.0..=1.0).contains(&p) {
        return Err(StatError::InvalidParameter { name: "p", value: p });
    }
    let sorted = sorted_copy(data);
    let n = sorted.len();
    let rank = ((p * n as f64).ceil() as usize).clamp(1, n);
    Ok(sorted[rank - 1])
}

/// First, second and third quartiles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quartiles {
    /// Median of the lower half.
    pub q1: f64,
    /// Median of the whole data.
    pub q2: f64,
    /// Median of the upper half.
    pub q3: f64,
}

impl Quartiles {
    /// Returns `[q1, q2, q3]`.
    pub fn to_array(self) -> [f64; 3] {
        [self.q1, self.q2, self.q3]
    }

    /// Interquartile range, `q3 − q1`.
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// Computes the quartiles as medians of the lower and upper halves.
///
/// For even `n` the data is split exactly in half; for odd `n` the middle
/// element belongs to neither half.
///
/// # Returns
/// - `Err(TooFewElements)` if `data` has fewer than 4 elements.
/// - `Err` if `data` is empty or contains any NaN/Inf.
///
/// # Examples
/// ```
/// use stat_methods::quartiles;
/// let data = [6.0, 7.0, 15.0, 36.0, 39.0, 40.0, 41.0, 42.0, 43.0, 47.0, 49.0];
/// assert_eq!(quartiles(&data).unwrap().to_array(), [15.0, 40.0, 43.0]);
/// ```
pub fn quartiles(data: &[f64]) -> Result<Quartiles> {
    ensure_min_len(data, 4)?;
    ensure_finite(data)?;
    let sorted = sorted_copy(data);
    let n = sorted.len();
    let half = n / 2;
    let lower = &sorted[..half];
    let upper = &sorted[n - half..];
    Ok(Quartiles {
        q1: median_sorted(lower),
        q2: median_sorted(&sorted),
        q3: median_sorted(upper),
    })
}

/// Population skewness, `m₃ / m₂^{3/2}`.
///
/// `m₂`, `m₃` are the biased (population) central moments. Constant data,
/// including a single element, gives `Ok(NaN)`.
pub fn skewness(data: &[f64]) -> Result<f64> {
    let m2 = nth_moment_about_mean(data, 2)?;
    let m3 = nth_moment_about_mean(data, 3)?;
    Ok(m3 / m2.powf(1.5))
}

/// Population excess kurtosis, `m₄ / m₂² − 3`.
///
/// `m₂`, `m₄` are the biased (population) central moments computed with
/// compensated summation. Returns 0 for a normal distribution, positive for
/// heavy tails.
///
/// Constant data, including a single element, gives `Ok(NaN)` (the ratio
/// is `0/0`) rather than an error.
///
/// # Examples
/// ```
/// use stat_methods::kurtosis;
/// let data = [0.0, 3.0, 4.0, 1.0, 2.0, 3.0, 0.0, 2.0, 1.0, 3.0,
///             2.0, 0.0, 2.0, 2.0, 3.0, 2.0, 5.0, 2.0, 3.0, 999.0];
/// assert!((kurtosis(&data).unwrap() - 15.05).abs() < 0.005);
/// assert!(kurtosis(&[3.0]).unwrap().is_nan());
/// ```
pub fn kurtosis(data: &[f64]) -> Result<f64> {
    let m2 = nth_moment_about_mean(data, 2)?;
    let m4 = nth_moment_about_mean(data, 4)?;
    Ok(m4 / (m2 * m2) - 3.0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
