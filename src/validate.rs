//! Argument checks shared by the public operations.

use crate::error::{Result, StatError};

/// Fails with [`StatError::NonFinite`] at the first `NaN` or infinite value.
pub(crate) fn ensure_finite(data: &[f64]) -> Result<()> {
    match data.iter().position(|x| !x.is_finite()) {
        Some(index) => Err(StatError::NonFinite { index }),
        None => Ok(()),
    }
}

pub(crate) fn ensure_non_empty<T>(data: &[T]) -> Result<()> {
    if data.is_empty() {
        Err(StatError::Empty)
    } else {
        Ok(())
    }
}

/// Non-empty and all finite: the precondition of every numeric operation.
pub(crate) fn ensure_numeric(data: &[f64]) -> Result<()> {
    ensure_non_empty(data)?;
    ensure_finite(data)
}

/// Empty input still reports [`StatError::Empty`] so that the uniform
/// invalid-input behaviour holds for operations with a larger minimum.
pub(crate) fn ensure_min_len<T>(data: &[T], needed: usize) -> Result<()> {
    ensure_non_empty(data)?;
    if data.len() < needed {
        return Err(StatError::TooFewElements {
            needed,
            got: data.len(),
        });
    }
    Ok(())
}

pub(crate) fn ensure_same_len<T, U>(x: &[T], y: &[U]) -> Result<()> {
    if x.len() != y.len() {
        return Err(StatError::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }
    Ok(())
}

pub(crate) fn ensure_finite_param(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(StatError::InvalidParameter { name, value })
    }
}

/// Sorted copy of already-validated finite data.
pub(crate) fn sorted_copy(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);
    sorted
}
