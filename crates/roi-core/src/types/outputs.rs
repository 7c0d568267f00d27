//! Estimator outputs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Metrics derived from [`EstimatorInputs`](super::EstimatorInputs).
///
/// Outputs are never stored; they are recomputed from the inputs whenever an
/// input changes. Monetary fields are annual USD amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimatorOutputs {
    /// Servicing calls handled per year across the portfolio.
    pub total_calls_per_year: Decimal,
    /// Annual cost of handling servicing calls manually.
    pub current_annual_cost: Decimal,
    /// Annual cost of the same call volume once automated.
    pub automated_annual_cost: Decimal,
    /// Savings on servicing calls.
    pub servicing_savings: Decimal,
    /// Number of delinquent loans in the portfolio.
    pub delinquent_loan_count: Decimal,
    /// Collection calls placed per year to delinquent borrowers.
    pub collection_calls_per_year: Decimal,
    /// Savings on collection calls.
    pub collection_savings: Decimal,
    /// Servicing plus collection savings.
    pub total_savings: Decimal,
    /// Servicing and collection calls taken over by automation per year.
    pub calls_automated_per_year: Decimal,
}
