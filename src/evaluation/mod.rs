//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer provides diagnostics over raw measurements:
//! - Pairwise tension and interval overlap
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Aggregate
//!   ↓
//! Layer 2: Algebra
//!   ↓
//! Layer 1: Primitives
//! ```

/// Pairwise tension metric.
pub mod tension;
