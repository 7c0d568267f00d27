//! Business assumptions behind the savings model.
//!
//! The multipliers are asserted benchmarks rather than derived figures, so
//! they are kept in one configurable struct. The defaults are the published
//! values and should not change without new benchmark data.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Automated handling costs 30% of manual handling.
pub const AUTOMATION_COST_FACTOR: Decimal = dec!(0.30);

/// Collection calls placed per delinquent loan per year.
pub const COLLECTION_CALLS_PER_DELINQUENT_LOAN: Decimal = dec!(8);

/// Share of collection call cost saved by automation.
pub const COLLECTION_SAVINGS_FACTOR: Decimal = dec!(0.70);

/// Reduction in average handle time per call.
pub const HANDLE_TIME_REDUCTION: Decimal = dec!(0.40);

/// Total annual savings above which payback is quoted as under 30 days.
pub const FAST_PAYBACK_THRESHOLD: Decimal = dec!(200000);

/// The constants the estimator multiplies by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Assumptions {
    /// Automated cost as a fraction of manual cost.
    pub automation_cost_factor: Decimal,
    /// Collection calls per delinquent loan per year.
    pub collection_calls_per_delinquent_loan: Decimal,
    /// Fraction of collection call cost saved.
    pub collection_savings_factor: Decimal,
    /// Fractional reduction in handle time per call.
    pub handle_time_reduction: Decimal,
    /// Savings threshold (USD) for the fast payback label.
    pub fast_payback_threshold: Decimal,
}

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            automation_cost_factor: AUTOMATION_COST_FACTOR,
            collection_calls_per_delinquent_loan: COLLECTION_CALLS_PER_DELINQUENT_LOAN,
            collection_savings_factor: COLLECTION_SAVINGS_FACTOR,
            handle_time_reduction: HANDLE_TIME_REDUCTION,
            fast_payback_threshold: FAST_PAYBACK_THRESHOLD,
        }
    }
}

impl Assumptions {
    /// Sets the automation cost factor.
    pub fn with_automation_cost_factor(mut self, factor: Decimal) -> Self {
        self.automation_cost_factor = factor;
        self
    }

    /// Sets the number of collection calls per delinquent loan.
    pub fn with_collection_calls_per_delinquent_loan(mut self, calls: Decimal) -> Self {
        self.collection_calls_per_delinquent_loan = calls;
        self
    }

    /// Sets the collection savings factor.
    pub fn with_collection_savings_factor(mut self, factor: Decimal) -> Self {
        self.collection_savings_factor = factor;
        self
    }

    /// Sets the handle time reduction.
    pub fn with_handle_time_reduction(mut self, reduction: Decimal) -> Self {
        self.handle_time_reduction = reduction;
        self
    }

    /// Sets the fast payback threshold.
    pub fn with_fast_payback_threshold(mut self, threshold: Decimal) -> Self {
        self.fast_payback_threshold = threshold;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let a = Assumptions::default();
        assert_eq!(a.automation_cost_factor, dec!(0.3));
        assert_eq!(a.collection_calls_per_delinquent_loan, dec!(8));
        assert_eq!(a.collection_savings_factor, dec!(0.7));
        assert_eq!(a.handle_time_reduction, dec!(0.4));
        assert_eq!(a.fast_payback_threshold, dec!(200000));
    }

    #[test]
    fn test_partial_deserialize_keeps_defaults() {
        let a: Assumptions =
            serde_json::from_str(r#"{"collection_calls_per_delinquent_loan": 6}"#).unwrap();
        assert_eq!(a.collection_calls_per_delinquent_loan, dec!(6));
        assert_eq!(a.automation_cost_factor, AUTOMATION_COST_FACTOR);
    }
}
