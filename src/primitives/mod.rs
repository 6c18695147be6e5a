//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the data types every other layer builds on:
//! - The N/U value type and its construction rules
//! - The crate-wide error enum
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
//! Layer 2: Algebra
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// The N/U value type.
pub mod value;

/// Error types.
pub mod errors;
