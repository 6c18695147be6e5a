//! Sequential conservative aggregation of repeated measurements.
//!
//! ## Purpose
//!
//! This module reconciles independent measurements *of the same quantity*
//! by folding them pairwise in input order. Each step averages the two
//! nominal values and inflates the averaged uncertainty by half their
//! disagreement, so conflicting sources widen the result instead of being
//! averaged away.
//!
//! ## Design notes
//!
//! * **Raw pairs**: Operates on `(value, uncertainty)` scalar pairs rather than
//!   [`Nu`](crate::primitives::value::Nu) values. Uncertainties are not clamped.
//! * **Order-sensitive**: The pairwise combinator is commutative but the fold is
//!   not associative, so permuting three or more inputs can change the result.
//!   The fold is always applied in the caller's order and is never reordered.
//! * **Empty input**: Returns `(0, 0)` by convention. It is not a meaningful
//!   aggregate.
//!
//! ## Key concepts
//!
//! ```text
//! combine((v₁, e₁), (v₂, e₂)) = ((v₁ + v₂)/2, (e₁ + e₂)/2 + |v₁ − v₂|/2)
//! ```
//!
//! ## Non-goals
//!
//! * Summing distinct additive quantities (see `fold`).
//! * Statistical (inverse-variance) weighting.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::primitives::errors::{check_paired, NuError};

// ============================================================================
// Pairwise Combinator
// ============================================================================

/// Combine two measurements conservatively.
///
/// ```
/// use nu_algebra::prelude::*;
/// let (v, e) = aggregate_pair(67.4_f64, 0.5, 73.04, 1.04);
/// assert!((v - 70.22).abs() < 1e-9);
/// assert!((e - 3.59).abs() < 1e-9);
/// ```
#[inline]
pub fn aggregate_pair<T: Float>(v1: T, e1: T, v2: T, e2: T) -> (T, T) {
    let half = half::<T>();
    let value = (v1 + v2) * half;
    let error = (e1 + e2) * half + (v1 - v2).abs() * half;
    (value, error)
}

#[inline]
fn half<T: Float>() -> T {
    T::one() / (T::one() + T::one())
}

// ============================================================================
// Sequential Fold
// ============================================================================

/// Fold all measurements into one `(value, uncertainty)` pair, in input order.
///
/// # Errors
///
/// [`NuError::LengthMismatch`] if the slices differ in length.
pub fn aggregate_sequential<T: Float>(values: &[T], uncertainties: &[T]) -> Result<(T, T), NuError> {
    check_paired(values.len(), uncertainties.len())?;

    let mut pairs = values.iter().copied().zip(uncertainties.iter().copied());
    let Some(first) = pairs.next() else {
        return Ok((T::zero(), T::zero()));
    };

    Ok(pairs.fold(first, |(v, e), (vi, ei)| aggregate_pair(v, e, vi, ei)))
}

/// One row of the sequential aggregation trace.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AggregationStep<T> {
    /// Index of the measurement folded in at this step; step 0 is the first
    /// measurement on its own.
    pub step: usize,

    /// Running aggregated value.
    pub value: T,

    /// Running aggregated uncertainty.
    pub uncertainty: T,

    /// `value − uncertainty`.
    pub interval_low: T,

    /// `value + uncertainty`.
    pub interval_high: T,
}

impl<T: Float> AggregationStep<T> {
    fn new(step: usize, value: T, uncertainty: T) -> Self {
        Self {
            step,
            value,
            uncertainty,
            interval_low: value - uncertainty,
            interval_high: value + uncertainty,
        }
    }
}

/// Run the sequential fold and record the accumulator after every step.
///
/// The last step, if any, equals [`aggregate_sequential`]. Empty input yields
/// an empty trace.
///
/// # Errors
///
/// [`NuError::LengthMismatch`] if the slices differ in length.
pub fn aggregation_steps<T: Float>(
    values: &[T],
    uncertainties: &[T],
) -> Result<Vec<AggregationStep<T>>, NuError> {
    check_paired(values.len(), uncertainties.len())?;

    let mut steps = Vec::with_capacity(values.len());
    let mut pairs = values.iter().copied().zip(uncertainties.iter().copied());
    let Some((mut value, mut error)) = pairs.next() else {
        return Ok(steps);
    };
    steps.push(AggregationStep::new(0, value, error));

    for (i, (vi, ei)) in pairs.enumerate() {
        (value, error) = aggregate_pair(value, error, vi, ei);
        steps.push(AggregationStep::new(i + 1, value, error));
    }

    Ok(steps)
}
