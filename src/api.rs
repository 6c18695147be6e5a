//! High-level API for reconciling measurements.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry point for reconciling several
//! measurements of one quantity: a fluent builder that configures the
//! procedure and a processor that validates inputs and runs it.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called; data is
//!   validated when `.fit()` is called.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`ReconcileBuilder`] via `Reconcile::new()`.
//! 2. Chain configuration methods (`.tension_threshold()`, `.record_steps()`).
//! 3. Call `.build()` to get a [`Reconciler`], then `.fit(&values, &uncertainties)`.

use core::fmt::Debug;
use num_traits::Float;

use crate::engine::executor::{ReconcileConfig, ReconcileExecutor};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::aggregate::sequential::AggregationStep;
pub use crate::engine::output::ReconcileResult;
pub use crate::evaluation::tension::PairwiseTension;
pub use crate::primitives::errors::NuError;
pub use crate::primitives::value::Nu;

/// Default sigma threshold for reporting high tensions.
pub const DEFAULT_TENSION_THRESHOLD: f64 = 3.0;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for the reconciliation procedure.
#[derive(Debug, Clone)]
pub struct ReconcileBuilder<T: Float> {
    /// Sigma threshold above which a pair counts as high tension.
    pub tension_threshold: Option<T>,

    /// Keep the per-step aggregation trace.
    pub record_steps: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: Float + Debug> Default for ReconcileBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float + Debug> ReconcileBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tension_threshold: None,
            record_steps: None,
            duplicate_param: None,
        }
    }

    /// Set the sigma threshold for the high-tension subset (default 3.0).
    pub fn tension_threshold(mut self, threshold: T) -> Self {
        if self.tension_threshold.is_some() {
            self.duplicate_param = Some("tension_threshold");
        }
        self.tension_threshold = Some(threshold);
        self
    }

    /// Keep the accumulator after every fold step in the result.
    pub fn record_steps(mut self) -> Self {
        if self.record_steps.is_some() {
            self.duplicate_param = Some("record_steps");
        }
        self.record_steps = Some(true);
        self
    }

    /// Validate the configuration and build the processor.
    pub fn build(self) -> Result<Reconciler<T>, NuError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let tension_threshold = match self.tension_threshold {
            Some(t) => t,
            None => T::from(DEFAULT_TENSION_THRESHOLD)
                .ok_or(NuError::InvalidThreshold(DEFAULT_TENSION_THRESHOLD))?,
        };
        Validator::validate_threshold(tension_threshold)?;

        Ok(Reconciler {
            config: ReconcileConfig {
                tension_threshold,
                record_steps: self.record_steps.unwrap_or(false),
            },
        })
    }
}

// ============================================================================
// Processor
// ============================================================================

/// Configured reconciliation processor.
#[derive(Debug, Clone, Copy)]
pub struct Reconciler<T> {
    config: ReconcileConfig<T>,
}

impl<T: Float + Debug> Reconciler<T> {
    /// Reconcile `values[i] ± uncertainties[i]` in input order.
    ///
    /// # Errors
    ///
    /// * [`NuError::EmptyInput`] if no measurements are given.
    /// * [`NuError::LengthMismatch`] if the slices differ in length.
    /// * [`NuError::InvalidNumericValue`] if any input is NaN or infinite.
    pub fn fit(&self, values: &[T], uncertainties: &[T]) -> Result<ReconcileResult<T>, NuError> {
        Validator::validate_inputs(values, uncertainties)?;
        ReconcileExecutor::run(values, uncertainties, self.config)
    }

    /// The configured high-tension threshold.
    pub fn tension_threshold(&self) -> T {
        self.config.tension_threshold
    }
}
