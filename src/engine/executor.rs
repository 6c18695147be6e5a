//! Execution engine for measurement reconciliation.
//!
//! ## Purpose
//!
//! This module orchestrates the reconciliation procedure: it runs the
//! sequential conservative fold, lifts the outcome into an N/U value,
//! computes the pairwise tension table, and assembles the result.
//!
//! ## Design notes
//!
//! * **Single pass**: The trace, when requested, comes from the same fold that
//!   produces the aggregate, so the two can never disagree.
//! * **Logging**: Emits `tracing` events at `debug` (start/finish) and `trace`
//!   (per fold step) levels. The algebra layers below do not log.
//!
//! ## Invariants
//!
//! * Measurements are folded strictly in input order.
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `validator`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::fmt::Debug;
use num_traits::Float;
use tracing::{debug, trace};

use crate::aggregate::sequential::{aggregate_sequential, aggregation_steps};
use crate::engine::output::ReconcileResult;
use crate::evaluation::tension::pairwise_tensions;
use crate::primitives::errors::NuError;
use crate::primitives::value::Nu;

/// Configuration consumed by [`ReconcileExecutor`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReconcileConfig<T> {
    /// Sigma threshold for the high-tension subset.
    pub tension_threshold: T,

    /// Keep the per-step aggregation trace.
    pub record_steps: bool,
}

/// Stateless reconciliation runner.
pub struct ReconcileExecutor;

impl ReconcileExecutor {
    /// Run the full procedure on validated inputs.
    pub fn run<T>(
        values: &[T],
        uncertainties: &[T],
        config: ReconcileConfig<T>,
    ) -> Result<ReconcileResult<T>, NuError>
    where
        T: Float + Debug,
    {
        debug!(
            measurements = values.len(),
            record_steps = config.record_steps,
            "reconciling measurements"
        );

        let (value, error, steps) = if config.record_steps {
            let steps = aggregation_steps(values, uncertainties)?;
            for s in &steps {
                trace!(step = s.step, value = ?s.value, uncertainty = ?s.uncertainty, "fold step");
            }
            let (value, error) = steps
                .last()
                .map(|s| (s.value, s.uncertainty))
                .unwrap_or((T::zero(), T::zero()));
            (value, error, Some(steps))
        } else {
            let (value, error) = aggregate_sequential(values, uncertainties)?;
            (value, error, None::<Vec<_>>)
        };

        let aggregate = Nu::new(value, error);
        let tensions = pairwise_tensions(values, uncertainties)?;

        debug!(
            value = ?aggregate.n(),
            uncertainty = ?aggregate.u(),
            pairs = tensions.len(),
            "reconciliation finished"
        );

        Ok(ReconcileResult {
            n_measurements: values.len(),
            aggregate,
            interval: aggregate.interval(),
            relative_uncertainty: aggregate.relative_uncertainty(),
            tensions,
            tension_threshold: config.tension_threshold,
            steps,
        })
    }
}
