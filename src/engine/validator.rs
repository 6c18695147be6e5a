//! Input validation for reconciliation configuration and data.
//!
//! ## Purpose
//!
//! This module provides the validation functions used by the reconciliation
//! builder and processor. It checks input lengths, finite values, and
//! parameter bounds before any computation runs.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not clamp or otherwise correct invalid inputs.
//!   (Clamping of negative uncertainties belongs to `Nu::new`.)
//! * The pure algebra does not go through the validator; its operators are total.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::{check_paired, NuError};

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for reconciliation configuration and input data.
///
/// All methods return `Result<(), NuError>` and fail fast upon identifying
/// the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate paired measurement arrays.
    pub fn validate_inputs<T: Float>(values: &[T], uncertainties: &[T]) -> Result<(), NuError> {
        // Check 1: Non-empty
        if values.is_empty() {
            return Err(NuError::EmptyInput);
        }

        // Check 2: Matching lengths
        Self::validate_paired(values.len(), uncertainties.len())?;

        // Check 3: All values finite
        for (i, &val) in values.iter().enumerate() {
            Self::validate_scalar(val, "values", i)?;
        }
        for (i, &val) in uncertainties.iter().enumerate() {
            Self::validate_scalar(val, "uncertainties", i)?;
        }

        Ok(())
    }

    /// Validate that two paired sequences have the same length.
    #[inline]
    pub fn validate_paired(left: usize, right: usize) -> Result<(), NuError> {
        check_paired(left, right)
    }

    fn validate_scalar<T: Float>(val: T, name: &str, index: usize) -> Result<(), NuError> {
        if !val.is_finite() {
            return Err(NuError::InvalidNumericValue(format!(
                "{}[{}]={}",
                name,
                index,
                val.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the high-tension reporting threshold.
    pub fn validate_threshold<T: Float>(threshold: T) -> Result<(), NuError> {
        if !threshold.is_finite() || threshold <= T::zero() {
            return Err(NuError::InvalidThreshold(
                threshold.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), NuError> {
        if let Some(param) = duplicate_param {
            return Err(NuError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
