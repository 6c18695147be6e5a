//! Core N/U operators.
//!
//! ## Purpose
//!
//! This module implements the closed operator set over [`Nu`] values:
//! addition, subtraction, multiplication, scalar and affine transforms,
//! negation, absolute value, and positive integer powers.
//!
//! ## Design notes
//!
//! * **Conservative**: Uncertainties always add. Subtraction does not cancel them
//!   and nothing is combined in quadrature.
//! * **First-order products**: `u(a·b) = |a.n|·b.u + |b.n|·a.u`; the absolute
//!   values keep the result non-negative for any sign combination.
//! * **Named first**: The named methods are the contract. The `core::ops` impls
//!   are static sugar: `Nu + Nu` is [`Nu::add`], `Nu + T` is [`Nu::affine`],
//!   `Nu * T` and `T * Nu` are [`Nu::scalar`].
//!
//! ## Invariants
//!
//! * Every result satisfies `u >= 0`.
//! * Offsets never affect uncertainty.
//!
//! ## Non-goals
//!
//! * Division, zero or negative exponents, and correlated propagation.

use core::ops::{Add, Mul, Neg, Sub};
use num_traits::Float;

use crate::primitives::errors::NuError;
use crate::primitives::value::Nu;

// ============================================================================
// Named Operators
// ============================================================================

impl<T: Float> Nu<T> {
    /// `(n₁, u₁) ⊕ (n₂, u₂) = (n₁ + n₂, u₁ + u₂)`
    ///
    /// ```
    /// use nu_algebra::prelude::*;
    /// assert_eq!(Nu::new(10.0, 1.0).add(Nu::new(5.0, 0.5)), Nu::new(15.0, 1.5));
    /// ```
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, other: Self) -> Self {
        Self::new(self.n() + other.n(), self.u() + other.u())
    }

    /// `(n₁, u₁) ⊖ (n₂, u₂) = (n₁ − n₂, u₁ + u₂)`
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn sub(self, other: Self) -> Self {
        Self::new(self.n() - other.n(), self.u() + other.u())
    }

    /// `(n₁, u₁) ⊗ (n₂, u₂) = (n₁n₂, |n₁|u₂ + |n₂|u₁)`
    ///
    /// ```
    /// use nu_algebra::prelude::*;
    /// let p = Nu::new(4.0_f64, 0.1).mul(Nu::new(3.0, 0.2));
    /// assert_eq!(p.n(), 12.0);
    /// assert!((p.u() - 1.1).abs() < 1e-12);
    /// ```
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn mul(self, other: Self) -> Self {
        Self::new(
            self.n() * other.n(),
            self.n().abs() * other.u() + other.n().abs() * self.u(),
        )
    }

    /// `a ⊙ (n, u) = (an, |a|u)`
    #[inline]
    pub fn scalar(self, a: T) -> Self {
        Self::new(a * self.n(), a.abs() * self.u())
    }

    /// `a ⊙ (n, u) + b = (an + b, |a|u)`
    #[inline]
    pub fn affine(self, a: T, b: T) -> Self {
        Self::new(a * self.n() + b, a.abs() * self.u())
    }

    /// `−(n, u) = (−n, u)`, expressed as `scalar(−1)`.
    #[inline]
    pub fn negate(self) -> Self {
        self.scalar(-T::one())
    }

    /// `|(n, u)| = (|n|, u)`
    #[inline]
    pub fn absolute(self) -> Self {
        Self::new(self.n().abs(), self.u())
    }

    /// Integer power by repeated [`Nu::mul`].
    ///
    /// # Errors
    ///
    /// [`NuError::InvalidExponent`] if `exponent < 1`.
    ///
    /// ```
    /// use nu_algebra::prelude::*;
    /// let sq = Nu::new(3.0_f64, 0.1).pow(2)?;
    /// assert_eq!(sq.n(), 9.0);
    /// assert!((sq.u() - 0.6).abs() < 1e-12);
    /// assert!(Nu::new(3.0, 0.1).pow(0).is_err());
    /// # Ok::<(), NuError>(())
    /// ```
    pub fn pow(self, exponent: i32) -> Result<Self, NuError> {
        if exponent < 1 {
            return Err(NuError::InvalidExponent(exponent));
        }
        Ok((1..exponent).fold(self, |acc, _| acc.mul(self)))
    }
}

// ============================================================================
// Operator Sugar
// ============================================================================

impl<T: Float> Add for Nu<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Nu::add(self, rhs)
    }
}

impl<T: Float> Sub for Nu<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Nu::sub(self, rhs)
    }
}

impl<T: Float> Mul for Nu<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Nu::mul(self, rhs)
    }
}

impl<T: Float> Neg for Nu<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.negate()
    }
}

/// Adding a bare scalar shifts the nominal value only.
impl<T: Float> Add<T> for Nu<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: T) -> Self {
        self.affine(T::one(), rhs)
    }
}

impl<T: Float> Sub<T> for Nu<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: T) -> Self {
        self.affine(T::one(), -rhs)
    }
}

impl<T: Float> Mul<T> for Nu<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        self.scalar(rhs)
    }
}

macro_rules! impl_scalar_lhs {
    ($($t:ty),*) => {
        $(
            impl Mul<Nu<$t>> for $t {
                type Output = Nu<$t>;

                #[inline]
                fn mul(self, rhs: Nu<$t>) -> Nu<$t> {
                    rhs.scalar(self)
                }
            }
        )*
    };
}

impl_scalar_lhs!(f32, f64);
