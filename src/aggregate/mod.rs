//! Layer 3: Aggregate
//!
//! # Purpose
//!
//! This layer folds sequences of measurements using the algebra:
//! - Cumulative sum/product and weighted mean of N/U values (`fold`)
//! - Order-sensitive pairwise averaging of repeated measurements (`sequential`)
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
//! Layer 3: Aggregate ← You are here
//!   ↓
//! Layer 2: Algebra
//!   ↓
//! Layer 1: Primitives
//! ```

/// Folds over N/U values.
pub mod fold;

/// Sequential conservative aggregation.
pub mod sequential;
