//! Layer 2: Algebra
//!
//! # Purpose
//!
//! This layer implements the operator set over N/U values:
//! - Core binary and unary operators (`ops`)
//! - The invariant-preserving catch and flip operators (`special`)
//! - Interval bounds and derived predicates (`bounds`)
//!
//! All operators are pure and total, except integer powers which reject
//! exponents below 1.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Aggregate
//!   ↓
//! Layer 2: Algebra ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Core arithmetic operators.
pub mod ops;

/// Catch, flip and the `M(n, u)` invariant.
pub mod special;

/// Interval bounds, relative uncertainty and sign stability.
pub mod bounds;
