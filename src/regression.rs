//! Simple linear regression by ordinary least squares.

use crate::central::mean;
use crate::descriptive::sum_of_squares;
use crate::error::{Result, StatError};
use crate::similarity::covariance;
use crate::spread::{square_deviation_sum, variance};
use crate::summation::compensated_sum;
use crate::validate::ensure_min_len;

/// Fitted line `y = intercept + slope · x` with coefficient standard errors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRegression {
    /// Slope of the fitted line.
    pub slope: f64,
    /// Value of the fitted line at `x = 0`.
    pub intercept: f64,
    /// Standard error of the slope.
    pub delta_slope: f64,
    /// Standard error of the intercept.
    pub delta_intercept: f64,
}

impl LinearRegression {
    /// Evaluates the fitted line at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// Fits `y` against the independent variable `x` by least squares.
///
/// # Formula
/// ```text
/// slope     = Cov(x, y) / Var(x)
/// intercept = ȳ − slope · x̄
/// SSR       = Σ(yᵢ − (slope · xᵢ + intercept))²
/// δslope     = √(SSR / ((n − 2) · Σ(xᵢ − x̄)²))
/// δintercept = δslope · √(Σxᵢ² / n)
/// ```
///
/// # Returns
/// - `Err(TooFewElements)` if `n < 3`; the standard errors need `n − 2 > 0`.
/// - `Err(ZeroVariance)` if `x` is constant.
/// - `Err` whenever [`covariance`] or [`variance`] fails.
///
/// # Examples
/// ```
/// use stat_methods::lin_reg;
/// let fit = lin_reg(&[5.0, 12.0, 18.0, 23.0, 45.0], &[2.0, 8.0, 18.0, 20.0, 28.0]).unwrap();
/// assert!((fit.slope - 0.6316472114137484).abs() < 1e-12);
/// assert!((fit.intercept - 2.1880674448767827).abs() < 1e-12);
/// ```
pub fn lin_reg(x: &[f64], y: &[f64]) -> Result<LinearRegression> {
    let cov = covariance(x, y)?;
    let x_variance = variance(x, None)?;
    ensure_min_len(x, 3)?;
    if x_variance == 0.0 {
        return Err(StatError::ZeroVariance);
    }

    let x_bar = mean(x)?;
    let y_bar = mean(y)?;
    let slope = cov / x_variance;
    let intercept = y_bar - slope * x_bar;

    let n = x.len() as f64;
    let ssr = compensated_sum(x.iter().zip(y).map(|(&xi, &yi)| {
        let residual = yi - (slope * xi + intercept);
        residual * residual
    }))?;
    let delta_slope = (ssr / ((n - 2.0) * square_deviation_sum(x, Some(x_bar))?)).sqrt();
    let delta_intercept = delta_slope * (sum_of_squares(x)? / n).sqrt();

    Ok(LinearRegression {
        slope,
        intercept,
        delta_slope,
        delta_intercept,
    })
}
