//! The savings calculation.
//!
//! Every output is a pure function of the inputs and the assumption set.
//! Nothing here validates or fails: out-of-range inputs give mathematically
//! consistent (if meaningless) results, and arithmetic saturates at the
//! `Decimal` limits instead of panicking.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::assumptions::Assumptions;
use crate::labels::{handle_time_label, PaybackPeriod};
use crate::split::SavingsSplit;
use crate::types::{EstimatorInputs, EstimatorOutputs};

/// Computes the outputs for `inputs` using the default assumptions.
///
/// # Example
///
/// ```rust
/// use roi_core::{compute, EstimatorInputs};
/// use rust_decimal_macros::dec;
///
/// let outputs = compute(&EstimatorInputs::default());
/// assert_eq!(outputs.total_calls_per_year, dec!(375000));
/// assert_eq!(outputs.collection_savings, dec!(403200));
/// ```
pub fn compute(inputs: &EstimatorInputs) -> EstimatorOutputs {
    Estimator::default().compute(inputs)
}

/// Runs the savings model against a fixed set of [`Assumptions`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Estimator {
    assumptions: Assumptions,
}

impl Estimator {
    /// Creates an estimator with the default assumptions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an estimator with custom assumptions.
    #[must_use]
    pub fn with_assumptions(assumptions: Assumptions) -> Self {
        Self { assumptions }
    }

    /// Returns the assumptions in use.
    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    /// Derives every output metric from `inputs`.
    pub fn compute(&self, inputs: &EstimatorInputs) -> EstimatorOutputs {
        let a = &self.assumptions;

        let total_calls_per_year = inputs
            .portfolio_size
            .saturating_mul(inputs.calls_per_loan_per_year);
        let current_annual_cost = total_calls_per_year.saturating_mul(inputs.cost_per_call);
        let automated_annual_cost = current_annual_cost.saturating_mul(a.automation_cost_factor);
        let servicing_savings = current_annual_cost.saturating_sub(automated_annual_cost);

        let delinquent_loan_count = inputs
            .portfolio_size
            .saturating_mul(inputs.delinquency_rate_percent / Decimal::ONE_HUNDRED);
        let collection_calls_per_year =
            delinquent_loan_count.saturating_mul(a.collection_calls_per_delinquent_loan);
        let collection_savings = collection_calls_per_year
            .saturating_mul(inputs.cost_per_call)
            .saturating_mul(a.collection_savings_factor);

        let total_savings = servicing_savings.saturating_add(collection_savings);
        let calls_automated_per_year =
            total_calls_per_year.saturating_add(collection_calls_per_year);

        log::debug!(
            "estimate: portfolio={} calls/loan={} cost/call={} delinquency={}% -> total savings {}",
            inputs.portfolio_size,
            inputs.calls_per_loan_per_year,
            inputs.cost_per_call,
            inputs.delinquency_rate_percent,
            total_savings
        );

        EstimatorOutputs {
            total_calls_per_year,
            current_annual_cost,
            automated_annual_cost,
            servicing_savings,
            delinquent_loan_count,
            collection_calls_per_year,
            collection_savings,
            total_savings,
            calls_automated_per_year,
        }
    }

    /// Computes the outputs and bundles them with the derived labels.
    pub fn report(&self, inputs: &EstimatorInputs) -> RoiReport {
        let outputs = self.compute(inputs);
        RoiReport {
            inputs: *inputs,
            payback_period: PaybackPeriod::from_savings(
                outputs.total_savings,
                self.assumptions.fast_payback_threshold,
            ),
            handle_time_saved: handle_time_label(self.assumptions.handle_time_reduction),
            split: SavingsSplit::from_outputs(&outputs),
            outputs,
        }
    }
}

/// Everything the view layer renders for one set of inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoiReport {
    /// The inputs the report was computed from.
    pub inputs: EstimatorInputs,
    /// Derived metrics.
    pub outputs: EstimatorOutputs,
    /// Payback period label.
    pub payback_period: PaybackPeriod,
    /// Handle time label, e.g. `"~40% per call"`.
    pub handle_time_saved: String,
    /// Servicing/collection share of total savings.
    pub split: SavingsSplit,
}
