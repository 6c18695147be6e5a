//! Pairwise tension between measurements.
//!
//! ## Purpose
//!
//! This module measures how strongly two measurements of the same quantity
//! disagree. It is a diagnostic that sits next to the algebra rather than
//! inside it: it consumes raw `(value, uncertainty)` pairs.
//!
//! ## Key concepts
//!
//! * **Tension**: `σ = |n₁ − n₂| / sqrt(u₁² + u₂²)`, the discrepancy in units of
//!   the quadrature-combined uncertainty.
//! * **Overlap**: whether the conservative intervals `[n − u, n + u]` intersect.
//!   Touching endpoints count as overlapping.
//!
//! ## Design notes
//!
//! * **IEEE semantics**: With both uncertainties zero the tension is `+∞` for
//!   distinct nominals and NaN for equal ones. No error is raised.
//!
//! ## Non-goals
//!
//! * This module does not turn tensions into probabilities or p-values.

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
// Metrics
// ============================================================================

/// Tension `|n₁ − n₂| / sqrt(u₁² + u₂²)`.
///
/// ```
/// use nu_algebra::prelude::*;
/// let sigma = tension_sigma(67.4_f64, 0.5, 73.04, 1.04);
/// assert!((sigma - 4.8876).abs() < 1e-4);
/// ```
#[inline]
pub fn tension_sigma<T: Float>(n1: T, u1: T, n2: T, u2: T) -> T {
    (n1 - n2).abs() / (u1 * u1 + u2 * u2).sqrt()
}

/// Whether `[n₁ − u₁, n₁ + u₁]` and `[n₂ − u₂, n₂ + u₂]` intersect.
#[inline]
pub fn intervals_overlap<T: Float>(n1: T, u1: T, n2: T, u2: T) -> bool {
    !((n1 + u1).min(n2 + u2) < (n1 - u1).max(n2 - u2))
}

// ============================================================================
// Pairwise Table
// ============================================================================

/// Tension between measurements `first` and `second` (`first < second`).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PairwiseTension<T> {
    /// Index of the first measurement.
    pub first: usize,

    /// Index of the second measurement.
    pub second: usize,

    /// Absolute difference of the nominal values.
    pub delta: T,

    /// Tension in sigma units.
    pub sigma: T,

    /// Whether the two conservative intervals intersect.
    pub overlaps: bool,
}

impl<T: Float> PairwiseTension<T> {
    /// Compute the tension record for one pair.
    pub fn between(first: usize, n1: T, u1: T, second: usize, n2: T, u2: T) -> Self {
        Self {
            first,
            second,
            delta: (n1 - n2).abs(),
            sigma: tension_sigma(n1, u1, n2, u2),
            overlaps: intervals_overlap(n1, u1, n2, u2),
        }
    }

    /// Whether the tension is strictly above `threshold` sigma.
    #[inline]
    pub fn exceeds(&self, threshold: T) -> bool {
        self.sigma > threshold
    }
}

/// Tensions for every pair `i < j`, ordered by `i` then `j`.
///
/// # Errors
///
/// [`NuError::LengthMismatch`] if the slices differ in length.
pub fn pairwise_tensions<T: Float>(
    values: &[T],
    uncertainties: &[T],
) -> Result<Vec<PairwiseTension<T>>, NuError> {
    check_paired(values.len(), uncertainties.len())?;

    let n = values.len();
    let mut out = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            out.push(PairwiseTension::between(
                i,
                values[i],
                uncertainties[i],
                j,
                values[j],
                uncertainties[j],
            ));
        }
    }

    Ok(out)
}
