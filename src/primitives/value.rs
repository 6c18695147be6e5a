//! The N/U value: a nominal estimate paired with a conservative bound.
//!
//! ## Purpose
//!
//! This module defines [`Nu`], the ordered pair `(n, u)` at the heart of the
//! algebra. `n` is the nominal (central) value and `u` is a non-negative,
//! worst-case bound on the deviation from `n`. It is not a standard deviation.
//!
//! ## Design notes
//!
//! * **Clamping**: Construction replaces a negative (or NaN) uncertainty with zero.
//!   This never fails and never warns; downstream code relies on construction
//!   always succeeding.
//! * **Immutable**: Fields are private and every operator returns a new value.
//! * **Generics**: Generic over `Float` types (`f32`, `f64`).
//!
//! ## Invariants
//!
//! * `u() >= 0` for every value reachable through the public API.
//! * Equality is exact on both components; there is no tolerance.
//!
//! ## Non-goals
//!
//! * This module does not implement the operators (see `algebra`).

use core::fmt;
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Nu
// ============================================================================

/// An N/U pair `(n, u)` with `u >= 0`.
///
/// # Examples
///
/// ```
/// use nu_algebra::prelude::*;
///
/// let voltage = Nu::new(2.00, 0.05);
/// assert_eq!(voltage.n(), 2.00);
/// assert_eq!(voltage.u(), 0.05);
///
/// // Negative uncertainties are clamped, never rejected.
/// assert_eq!(Nu::new(5.0, -3.0).u(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawNu<T>"))]
pub struct Nu<T: Float> {
    n: T,
    u: T,
}

impl<T: Float> Nu<T> {
    /// Create a new pair, clamping the uncertainty to `max(0, u)`.
    #[inline]
    pub fn new(n: T, u: T) -> Self {
        Self {
            n,
            u: u.max(T::zero()),
        }
    }

    /// A pair with no uncertainty.
    #[inline]
    pub fn exact(n: T) -> Self {
        Self { n, u: T::zero() }
    }

    /// The additive identity `(0, 0)`.
    #[inline]
    pub fn zero() -> Self {
        Self::exact(T::zero())
    }

    /// The multiplicative identity `(1, 0)`.
    #[inline]
    pub fn one() -> Self {
        Self::exact(T::one())
    }

    /// Nominal value.
    #[inline]
    pub fn n(&self) -> T {
        self.n
    }

    /// Uncertainty bound (always non-negative).
    #[inline]
    pub fn u(&self) -> T {
        self.u
    }

    /// Decompose into `(n, u)`.
    #[inline]
    pub fn into_parts(self) -> (T, T) {
        (self.n, self.u)
    }
}

impl<T: Float> Default for Nu<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Float> From<(T, T)> for Nu<T> {
    fn from((n, u): (T, T)) -> Self {
        Self::new(n, u)
    }
}

impl<T: Float + fmt::Display> fmt::Display for Nu<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "({:.*}, {:.*})", p, self.n, p, self.u),
            None => write!(f, "({}, {})", self.n, self.u),
        }
    }
}

// ============================================================================
// Serde support
// ============================================================================

/// Unchecked wire form; converted through [`Nu::new`] so external data is clamped.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawNu<T> {
    n: T,
    u: T,
}

#[cfg(feature = "serde")]
impl<T: Float> From<RawNu<T>> for Nu<T> {
    fn from(raw: RawNu<T>) -> Self {
        Self::new(raw.n, raw.u)
    }
}
