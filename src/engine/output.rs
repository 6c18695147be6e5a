//! Output types for the reconciliation procedure.
//!
//! ## Purpose
//!
//! This module defines [`ReconcileResult`], the value returned by
//! `Reconciler::fit`, and its human-readable summary.
//!
//! ## Design notes
//!
//! * **Opaque numbers**: Every figure is computed by the engine; the `Display`
//!   impl only formats, it never re-derives.
//! * **Optional trace**: The aggregation trace is only kept when requested.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::fmt::{Display, Formatter, Result as FmtResult};
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::aggregate::sequential::AggregationStep;
use crate::evaluation::tension::PairwiseTension;
use crate::primitives::value::Nu;

/// Result of reconciling a set of measurements.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReconcileResult<T: Float> {
    /// Number of measurements reconciled.
    pub n_measurements: usize,

    /// Sequentially aggregated value.
    pub aggregate: Nu<T>,

    /// Conservative interval of the aggregate.
    pub interval: (T, T),

    /// `u / |n|` of the aggregate.
    pub relative_uncertainty: T,

    /// Tension for every pair of measurements.
    pub tensions: Vec<PairwiseTension<T>>,

    /// Threshold (in sigma) above which a pair counts as high tension.
    pub tension_threshold: T,

    /// Accumulator after each fold step (only if requested).
    pub steps: Option<Vec<AggregationStep<T>>>,
}

impl<T: Float> ReconcileResult<T> {
    /// Pairs whose tension exceeds the configured threshold.
    pub fn high_tensions(&self) -> impl Iterator<Item = &PairwiseTension<T>> + '_ {
        let threshold = self.tension_threshold;
        self.tensions.iter().filter(move |t| t.exceeds(threshold))
    }

    /// Whether every pair of conservative intervals intersects.
    pub fn all_overlap(&self) -> bool {
        self.tensions.iter().all(|t| t.overlaps)
    }
}

impl<T: Float + Display> Display for ReconcileResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Measurements: {}", self.n_measurements)?;
        writeln!(
            f,
            "  Aggregate:    {:.3} ± {:.3}",
            self.aggregate.n(),
            self.aggregate.u()
        )?;
        writeln!(
            f,
            "  Interval:     [{:.3}, {:.3}]",
            self.interval.0, self.interval.1
        )?;
        writeln!(f, "  Rel. unc.:    {:.4}", self.relative_uncertainty)?;

        if let Some(steps) = &self.steps {
            writeln!(f)?;
            writeln!(f, "Aggregation Steps:")?;
            writeln!(
                f,
                "  {:>4} {:>12} {:>12} {:>12} {:>12}",
                "Step", "Value", "Unc", "Low", "High"
            )?;
            writeln!(f, "  {}", "-".repeat(56))?;
            for s in steps {
                writeln!(
                    f,
                    "  {:>4} {:>12.5} {:>12.5} {:>12.5} {:>12.5}",
                    s.step, s.value, s.uncertainty, s.interval_low, s.interval_high
                )?;
            }
        }

        writeln!(f)?;
        writeln!(f, "High Tensions (sigma > {}):", self.tension_threshold)?;
        let mut any = false;
        for t in self.high_tensions() {
            any = true;
            writeln!(
                f,
                "  {} vs {}: {:.3} sigma, overlaps: {}",
                t.first, t.second, t.sigma, t.overlaps
            )?;
        }
        if !any {
            writeln!(f, "  none")?;
        }

        Ok(())
    }
}
