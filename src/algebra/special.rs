//! Invariant-preserving special operators.
//!
//! ## Purpose
//!
//! This module provides the two operators that move magnitude between the
//! nominal and uncertainty components without changing the total budget
//! `M(n, u) = |n| + u`.
//!
//! ## Key concepts
//!
//! * **Catch**: `C(n, u) = (0, |n| + u)`. Collapses the nominal into the bound;
//!   useful when a magnitude is known but its sign is not.
//! * **Flip**: `B(n, u) = (u, |n|)`. Swaps the roles of the two components.
//!
//! ## Invariants
//!
//! * `x.catch().invariant() == x.invariant()`
//! * `x.flip().invariant() == x.invariant()`
//!
//! Addition, subtraction, multiplication and scaling transform `M` differently
//! and are not expected to preserve it.

use num_traits::Float;

use crate::primitives::value::Nu;

impl<T: Float> Nu<T> {
    /// The invariant `M(n, u) = |n| + u`.
    ///
    /// ```
    /// use nu_algebra::prelude::*;
    /// let x = Nu::new(5.0, 2.0);
    /// assert_eq!(x.invariant(), 7.0);
    /// assert_eq!(x.catch().invariant(), 7.0);
    /// ```
    #[inline]
    pub fn invariant(&self) -> T {
        self.n().abs() + self.u()
    }

    /// Catch operator `C(n, u) = (0, |n| + u)`.
    #[inline]
    pub fn catch(self) -> Self {
        Self::new(T::zero(), self.invariant())
    }

    /// Flip operator `B(n, u) = (u, |n|)`.
    #[inline]
    pub fn flip(self) -> Self {
        Self::new(self.u(), self.n().abs())
    }
}
