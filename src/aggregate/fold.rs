//! Cumulative folds and the weighted mean over N/U values.
//!
//! ## Purpose
//!
//! This module folds sequences of *distinct additive quantities* using the
//! algebra's operators: cumulative sum (`⊕`), cumulative product (`⊗`), and a
//! weighted mean built from scaling and summation.
//!
//! ## Design notes
//!
//! * **Left folds**: Folds start from the first element and apply the operator
//!   in sequence order. Empty input yields the operator's identity.
//! * **Conservative mean**: The weighted mean scales uncertainties by the
//!   normalised weights but never divides them down by the count, so the mean
//!   of equal-uncertainty inputs keeps that uncertainty.
//! * **Iterator integration**: `Sum` and `Product` are implemented for `Nu<T>`
//!   with the same semantics as the slice functions.
//!
//! ## Invariants
//!
//! * `cumulative_sum(&[]) == Nu::zero()` and `cumulative_product(&[]) == Nu::one()`.
//! * Weighted mean fails fast; no partial value is returned on error.
//!
//! ## Non-goals
//!
//! * Reconciling repeated measurements of one quantity (see `sequential`).

use core::iter::{Product, Sum};
use num_traits::Float;

use crate::primitives::errors::{check_paired, NuError};
use crate::primitives::value::Nu;

// ============================================================================
// Folds
// ============================================================================

fn fold_with<T, I, F>(mut iter: I, identity: Nu<T>, op: F) -> Nu<T>
where
    T: Float,
    I: Iterator<Item = Nu<T>>,
    F: Fn(Nu<T>, Nu<T>) -> Nu<T>,
{
    match iter.next() {
        Some(first) => iter.fold(first, op),
        None => identity,
    }
}

/// Sum of all values: `⊕(x₁, …, xₙ)`. Empty input yields `(0, 0)`.
///
/// ```
/// use nu_algebra::prelude::*;
/// let total = cumulative_sum(&[Nu::new(1.0_f64, 0.1), Nu::new(2.0, 0.2), Nu::new(3.0, 0.3)]);
/// assert_eq!(total.n(), 6.0);
/// assert!((total.u() - 0.6).abs() < 1e-12);
/// ```
pub fn cumulative_sum<T: Float>(values: &[Nu<T>]) -> Nu<T> {
    fold_with(values.iter().copied(), Nu::zero(), Nu::add)
}

/// Product of all values: `⊗(x₁, …, xₙ)`. Empty input yields `(1, 0)`.
pub fn cumulative_product<T: Float>(values: &[Nu<T>]) -> Nu<T> {
    fold_with(values.iter().copied(), Nu::one(), Nu::mul)
}

/// Weighted mean `(1/Σw) ⊙ ⊕(wᵢ ⊙ xᵢ)`.
///
/// `weights` defaults to all ones when `None`.
///
/// # Errors
///
/// Checked in this order:
/// * [`NuError::EmptyInput`] if `values` is empty.
/// * [`NuError::LengthMismatch`] if `weights` is given with a different length.
/// * [`NuError::ZeroTotalWeight`] if the weights sum to exactly zero.
///
/// ```
/// use nu_algebra::prelude::*;
/// let data = [Nu::new(10.0_f64, 1.0), Nu::new(12.0, 1.5), Nu::new(11.0, 0.8)];
/// let mean = weighted_mean(&data, None)?;
/// assert!((mean.n() - 11.0).abs() < 1e-12);
/// assert!((mean.u() - 1.1).abs() < 1e-12);
/// # Ok::<(), NuError>(())
/// ```
pub fn weighted_mean<T: Float>(values: &[Nu<T>], weights: Option<&[T]>) -> Result<Nu<T>, NuError> {
    if values.is_empty() {
        return Err(NuError::EmptyInput);
    }

    let (sum, total) = match weights {
        Some(w) => {
            check_paired(values.len(), w.len())?;
            let total = w.iter().fold(T::zero(), |acc, &wi| acc + wi);
            if total == T::zero() {
                return Err(NuError::ZeroTotalWeight);
            }
            let scaled = values.iter().zip(w).map(|(x, &wi)| x.scalar(wi));
            (fold_with(scaled, Nu::zero(), Nu::add), total)
        }
        // Unit weights: scaling by one is exact, so the plain sum is used.
        None => (
            cumulative_sum(values),
            values.iter().fold(T::zero(), |acc, _| acc + T::one()),
        ),
    };

    Ok(sum.scalar(T::one() / total))
}

// ============================================================================
// Iterator Traits
// ============================================================================

impl<T: Float> Sum for Nu<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        fold_with(iter, Nu::zero(), Nu::add)
    }
}

impl<'a, T: Float> Sum<&'a Nu<T>> for Nu<T> {
    fn sum<I: Iterator<Item = &'a Nu<T>>>(iter: I) -> Self {
        fold_with(iter.copied(), Nu::zero(), Nu::add)
    }
}

impl<T: Float> Product for Nu<T> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        fold_with(iter, Nu::one(), Nu::mul)
    }
}

impl<'a, T: Float> Product<&'a Nu<T>> for Nu<T> {
    fn product<I: Iterator<Item = &'a Nu<T>>>(iter: I) -> Self {
        fold_with(iter.copied(), Nu::one(), Nu::mul)
    }
}
