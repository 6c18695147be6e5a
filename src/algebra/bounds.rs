//! Interval bounds and derived predicates.
//!
//! ## Purpose
//!
//! Read-only views of an N/U value as the conservative interval
//! `[n − u, n + u]`, together with relative uncertainty and sign stability.
//!
//! ## Design notes
//!
//! * **Total**: None of these accessors can fail.
//! * **Relative uncertainty at zero**: `u / |n|` is defined as `+∞` when `n == 0`,
//!   including the `(0, 0)` case.

use num_traits::Float;

use crate::primitives::value::Nu;

impl<T: Float> Nu<T> {
    /// Conservative lower bound `n − u`.
    #[inline]
    pub fn lower_bound(&self) -> T {
        self.n() - self.u()
    }

    /// Conservative upper bound `n + u`.
    #[inline]
    pub fn upper_bound(&self) -> T {
        self.n() + self.u()
    }

    /// The interval `(n − u, n + u)`.
    #[inline]
    pub fn interval(&self) -> (T, T) {
        (self.lower_bound(), self.upper_bound())
    }

    /// Relative uncertainty `u / |n|`, or `+∞` when `n == 0`.
    ///
    /// ```
    /// use nu_algebra::prelude::*;
    /// assert_eq!(Nu::new(-4.0, 1.0).relative_uncertainty(), 0.25);
    /// assert!(Nu::new(0.0_f64, 1.0).relative_uncertainty().is_infinite());
    /// ```
    #[inline]
    pub fn relative_uncertainty(&self) -> T {
        if self.n() == T::zero() {
            return T::infinity();
        }
        self.u() / self.n().abs()
    }

    /// Whether the interval excludes zero (`|n| > u`, strict).
    #[inline]
    pub fn is_sign_stable(&self) -> bool {
        self.n().abs() > self.u()
    }

    /// Whether `value` lies inside the closed interval.
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        self.lower_bound() <= value && value <= self.upper_bound()
    }
}

/// Convert a raw `(value, uncertainty)` pair to its interval `(v − e, v + e)`.
///
/// Unlike [`Nu::interval`], no clamping is applied to `e`.
#[inline]
pub fn compute_interval<T: Float>(value: T, uncertainty: T) -> (T, T) {
    (value - uncertainty, value + uncertainty)
}
