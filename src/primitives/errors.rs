//! Error types for N/U algebra operations.
//!
//! ## Purpose
//!
//! This module defines the single error enum returned by every fallible
//! entry point of the crate. The algebraic operators themselves are total;
//! only integer exponentiation, the aggregate folds, and the reconciliation
//! builder can fail.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Callers receive the first violation; no partial values are returned.
//! * **Context-Rich**: Variants carry the offending lengths or values.
//! * **no_std**: `std::error::Error` is only implemented with the `std` feature.
//!
//! ## Non-goals
//!
//! * Negative uncertainties are not an error; construction clamps them to zero.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

use core::fmt;

/// Errors raised by N/U algebra operations.
#[derive(Debug, Clone, PartialEq)]
pub enum NuError {
    /// `pow` was called with an exponent below 1.
    InvalidExponent(i32),

    /// Two paired sequences differ in length.
    LengthMismatch {
        /// Length of the primary sequence (values).
        left: usize,
        /// Length of the paired sequence (uncertainties or weights).
        right: usize,
    },

    /// An aggregate requiring at least one element received none.
    EmptyInput,

    /// Weighted mean weights sum to exactly zero.
    ZeroTotalWeight,

    /// Input contains NaN or infinite values.
    InvalidNumericValue(String),

    /// Tension threshold must be finite and positive.
    InvalidThreshold(f64),

    /// A builder parameter was configured more than once.
    DuplicateParameter {
        /// Name of the repeated parameter.
        parameter: &'static str,
    },
}

impl fmt::Display for NuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NuError::InvalidExponent(k) => write!(
                f,
                "Invalid exponent: {} (only positive integer exponents are supported)",
                k
            ),
            NuError::LengthMismatch { left, right } => write!(
                f,
                "Length mismatch: values have {} entries, paired sequence has {}",
                left, right
            ),
            NuError::EmptyInput => write!(f, "Input is empty"),
            NuError::ZeroTotalWeight => write!(f, "Total weight cannot be zero"),
            NuError::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {}", s),
            NuError::InvalidThreshold(t) => write!(
                f,
                "Invalid tension threshold: {} (must be > 0 and finite)",
                t
            ),
            NuError::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                parameter
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for NuError {}

/// Fail with [`NuError::LengthMismatch`] unless `left == right`.
#[inline]
pub(crate) fn check_paired(left: usize, right: usize) -> Result<(), NuError> {
    if left != right {
        return Err(NuError::LengthMismatch { left, right });
    }
    Ok(())
}
