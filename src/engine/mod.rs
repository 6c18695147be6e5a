//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the reconciliation procedure:
//! - Input and parameter validation (`validator`)
//! - Running the fold and tension passes (`executor`)
//! - Result assembly and display (`output`)
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Aggregate
//!   ↓
//! Layer 2: Algebra
//!   ↓
//! Layer 1: Primitives
//! ```

/// Input validation.
pub mod validator;

/// Reconciliation executor.
pub mod executor;

/// Result types.
pub mod output;
