//! The "undefined result" taxonomy shared by every operation.
//!
//! No function in this crate panics on user input. Whenever a statistic is
//! not defined for the given data, the function returns `Err(StatError)`
//! naming the reason, and composite functions forward it with `?`.

use thiserror::Error;

/// Why a statistic is undefined for the given input.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum StatError {
    #[error("input is empty")]
    Empty,

    #[error("element at index {index} is not finite")]
    NonFinite { index: usize },

    #[error("insufficient data: need at least {needed} elements, got {got}")]
    TooFewElements { needed: usize, got: usize },

    #[error("length mismatch: {left} elements vs {right} elements")]
    LengthMismatch { left: usize, right: usize },

    #[error("element at index {index} is zero, its reciprocal is undefined")]
    ZeroElement { index: usize },

    #[error("negative value has no real root of even order {order}")]
    NoRealRoot { order: f64 },

    #[error("invalid parameter `{name}`: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("elements cannot be ordered")]
    Incomparable,

    #[error("input has zero variance")]
    ZeroVariance,

    #[error("intermediate result overflowed f64")]
    Overflow,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StatError>;
