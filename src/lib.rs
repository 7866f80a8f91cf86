//! # stat-methods
//!
//! Elementary descriptive and inferential statistics on `f64` slices.
//!
//! This crate provides the classic one- and two-sample statistics: averages,
//! medians, spread, shape, covariance, correlation and simple linear
//! regression. Every function is pure: inputs are borrowed immutably and
//! sorting works on a copy.
//!
//! ## Modules
//!
//! - [`summation`]: Kahan compensated summation
//! - [`descriptive`]: min, max, product, sums
//! - [`central`]: means, medians, mode, percentiles, quartiles, moments
//! - [`spread`]: variance, standard deviation, range, MAD
//! - [`similarity`]: covariance and correlation
//! - [`regression`]: ordinary least squares on one predictor
//! - [`utils`]: roots, central moments, index lookup
//!
//! ## Undefined results
//!
//! A statistic that is undefined for its input (empty data, a NaN element,
//! too few points, mismatched lengths, ...) is reported as
//! `Err(`[`StatError`]`)`, never as a panic or a silent NaN. The one
//! deliberate exception is the moment ratios ([`kurtosis`], [`skewness`]) of
//! constant data, which evaluate to `Ok(NaN)`.
//!
//! ## Design Philosophy
//!
//! - **Numerical stability first**: every sum goes through Kahan summation
//! - **Explicit options**: a precomputed mean, a bin width or a comparator
//!   is a visible parameter, never an implicit overload
//! - **Property-based testing**: mathematical invariants verified via proptest

pub mod central;
pub mod descriptive;
pub mod error;
pub mod regression;
pub mod similarity;
pub mod spread;
pub mod summation;
pub mod utils;

mod validate;

pub use central::{
    geometric_mean, harmonic_mean, kurtosis, mean, median, median_grouped, median_high,
    median_high_by, median_low, median_low_by, mid_range, mode, mode_by, percentile, quartiles,
    rms, skewness, Quartiles, DEFAULT_BIN_WIDTH,
};
pub use descriptive::{max, min, product, sum, sum_of_squares};
pub use error::{Result, StatError};
pub use regression::{lin_reg, LinearRegression};
pub use similarity::{correlation, covariance};
pub use spread::{mad, p_stdev, p_variance, range, square_deviation_sum, stdev, variance};
pub use summation::kahan_sum;
pub use utils::{all_indexes, nth_moment_about_mean, nth_root};
