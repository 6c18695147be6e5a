//! # N/U Algebra: Conservative Uncertainty Propagation for Rust
//!
//! An implementation of the N/U (Nominal/Uncertainty) algebra: every quantity
//! is an ordered pair `(n, u)` where `n` is the nominal value and `u ≥ 0` is a
//! conservative, worst-case bound on the deviation from `n`.
//!
//! ## What is the N/U algebra?
//!
//! Classical error propagation combines independent uncertainties in
//! quadrature. That is only valid when the inputs really are independent.
//! When measurements share systematics or their correlation is simply
//! unknown, the N/U algebra instead **adds** uncertainties, producing a bound
//! that is wider but never relies on an independence assumption.
//!
//! **Common applications:**
//! - Aggregating heterogeneous estimates of a physical constant
//! - Budgeting tolerances in engineering calculations
//! - Reporting guaranteed bounds rather than confidence levels
//!
//! ## Quick Start
//!
//! ```rust
//! use nu_algebra::prelude::*;
//!
//! let voltage = Nu::new(2.00_f64, 0.05);
//! let current = Nu::new(1.20_f64, 0.02);
//!
//! let total = voltage + current;
//! assert!((total.n() - 3.20).abs() < 1e-12);
//! assert!((total.u() - 0.07).abs() < 1e-12);
//!
//! let power = voltage * current;
//! assert!((power.u() - (2.00 * 0.02 + 1.20 * 0.05)).abs() < 1e-12);
//! ```
//!
//! ## Operators
//!
//! | Operation        | Method                 | Sugar            | Result                           |
//! |------------------|------------------------|------------------|----------------------------------|
//! | Addition         | `a.add(b)`             | `a + b`          | `(a.n + b.n, a.u + b.u)`         |
//! | Subtraction      | `a.sub(b)`             | `a - b`          | `(a.n − b.n, a.u + b.u)`         |
//! | Multiplication   | `a.mul(b)`             | `a * b`          | `(a.n·b.n, |a.n|·b.u + |b.n|·a.u)` |
//! | Scaling          | `x.scalar(a)`          | `x * a`, `a * x` | `(a·n, |a|·u)`                   |
//! | Affine           | `x.affine(a, b)`       | `x + b`, `x - b` | `(a·n + b, |a|·u)`               |
//! | Negation         | `x.negate()`           | `-x`             | `(−n, u)`                        |
//! | Absolute value   | `x.absolute()`         |                  | `(|n|, u)`                       |
//! | Integer power    | `x.pow(k)?`            |                  | repeated `mul`, `k ≥ 1`          |
//! | Catch            | `x.catch()`            |                  | `(0, |n| + u)`                   |
//! | Flip             | `x.flip()`             |                  | `(u, |n|)`                       |
//!
//! Negative uncertainties passed to `Nu::new` are silently clamped to zero.
//! Catch and flip preserve the invariant `M(n, u) = |n| + u`.
//!
//! ## Aggregation
//!
//! ```rust
//! use nu_algebra::prelude::*;
//!
//! let data = [Nu::new(10.0_f64, 1.0), Nu::new(12.0, 1.5), Nu::new(11.0, 0.8)];
//!
//! let total = cumulative_sum(&data);
//! assert_eq!(total.n(), 33.0);
//! let mean = weighted_mean(&data, Some(&[1.0, 2.0, 1.0]))?;
//! assert!(mean.u() > 0.0);
//! # Result::<(), NuError>::Ok(())
//! ```
//!
//! ## Reconciling Measurements
//!
//! Repeated measurements of one quantity are reconciled with an
//! order-sensitive pairwise fold. Any disagreement between sources inflates
//! the combined uncertainty.
//!
//! ```rust
//! use nu_algebra::prelude::*;
//!
//! let h0: [f64; 6] = [67.4, 73.04, 73.3, 73.9, 67.19, 69.6];
//! let unc = [0.5, 1.04, 1.8, 3.0, 0.65, 2.5];
//!
//! let result = Reconcile::new()
//!     .tension_threshold(3.0)
//!     .record_steps()
//!     .build()?
//!     .fit(&h0, &unc)?;
//!
//! println!("{}", result);
//! assert_eq!(result.tensions.len(), 15);
//! # Result::<(), NuError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! nu-algebra = { version = "0.1", default-features = false }
//! ```
//!
//! ## Features
//!
//! - `std` (default): `std::error::Error` for `NuError`, std-backed float math.
//! - `serde`: `Serialize`/`Deserialize` for values and results.
//! - `dev`: exposes [`internals`] for integration tests.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - the N/U value type and errors.
mod primitives;

// Layer 2: Algebra - operators, catch/flip, bounds.
mod algebra;

// Layer 3: Aggregate - cumulative folds, weighted mean, sequential fold.
mod aggregate;

// Layer 4: Evaluation - pairwise tension diagnostics.
mod evaluation;

// Layer 5: Engine - validation, orchestration and result assembly.
mod engine;

// High-level fluent API for reconciliation.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard N/U algebra prelude.
///
/// ```
/// use nu_algebra::prelude::*;
/// ```
pub mod prelude {
    pub use crate::aggregate::fold::{cumulative_product, cumulative_sum, weighted_mean};
    pub use crate::aggregate::sequential::{aggregate_pair, aggregate_sequential, aggregation_steps};
    pub use crate::algebra::bounds::compute_interval;
    pub use crate::api::{
        AggregationStep, Nu, NuError, PairwiseTension, ReconcileBuilder as Reconcile,
        ReconcileResult, Reconciler,
    };
    pub use crate::evaluation::tension::{intervals_overlap, pairwise_tensions, tension_sigma};
}

pub use crate::api::{Nu, NuError};

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal operators.
    pub mod algebra {
        pub use crate::algebra::*;
    }
    /// Internal aggregation.
    pub mod aggregate {
        pub use crate::aggregate::*;
    }
    /// Internal diagnostics.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
