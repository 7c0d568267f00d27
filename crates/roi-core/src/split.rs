//! Servicing versus collection share of total savings.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::EstimatorOutputs;

/// Percentages of total savings coming from servicing and collections.
///
/// When total savings are zero both shares are reported as 0%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsSplit {
    /// Servicing savings as a percentage of total savings.
    pub servicing_percent: Decimal,
    /// Collection savings as a percentage of total savings.
    pub collection_percent: Decimal,
}

impl SavingsSplit {
    /// Computes the split from its parts.
    pub fn new(servicing: Decimal, collection: Decimal, total: Decimal) -> Self {
        Self {
            servicing_percent: share(servicing, total),
            collection_percent: share(collection, total),
        }
    }

    /// Computes the split for a set of estimator outputs.
    pub fn from_outputs(outputs: &EstimatorOutputs) -> Self {
        Self::new(
            outputs.servicing_savings,
            outputs.collection_savings,
            outputs.total_savings,
        )
    }
}

fn share(part: Decimal, total: Decimal) -> Decimal {
    part.checked_div(total)
        .map_or(Decimal::ZERO, |ratio| ratio.saturating_mul(Decimal::ONE_HUNDRED))
}
