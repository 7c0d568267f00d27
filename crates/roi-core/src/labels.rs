//! Qualitative labels shown beside the savings figures.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::assumptions::{FAST_PAYBACK_THRESHOLD, HANDLE_TIME_REDUCTION};

/// Illustrative payback period. Not an NPV calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaybackPeriod {
    /// Savings clear the fast payback threshold.
    #[serde(rename = "<30 days")]
    WithinThirtyDays,
    /// Everything else.
    #[serde(rename = "<60 days")]
    WithinSixtyDays,
}

impl PaybackPeriod {
    /// Picks the period for `total_savings` against `threshold`.
    ///
    /// The threshold itself falls into the slower bucket.
    pub fn from_savings(total_savings: Decimal, threshold: Decimal) -> Self {
        if total_savings > threshold {
            Self::WithinThirtyDays
        } else {
            Self::WithinSixtyDays
        }
    }

    /// Picks the period using the default threshold.
    pub fn for_savings(total_savings: Decimal) -> Self {
        Self::from_savings(total_savings, FAST_PAYBACK_THRESHOLD)
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::WithinThirtyDays => "<30 days",
            Self::WithinSixtyDays => "<60 days",
        }
    }
}

impl fmt::Display for PaybackPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Renders a handle time reduction such as `0.40` as `"~40% per call"`.
///
/// The figure is a fixed claim and does not depend on the inputs.
pub fn handle_time_label(reduction: Decimal) -> String {
    format!("~{}% per call", (reduction * Decimal::ONE_HUNDRED).normalize())
}

/// Handle time label for the default reduction.
pub fn default_handle_time_label() -> String {
    handle_time_label(HANDLE_TIME_REDUCTION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_payback_threshold() {
        assert_eq!(
            PaybackPeriod::for_savings(dec!(3553200)),
            PaybackPeriod::WithinThirtyDays
        );
        assert_eq!(
            PaybackPeriod::for_savings(dec!(200000)),
            PaybackPeriod::WithinSixtyDays
        );
        assert_eq!(
            PaybackPeriod::for_savings(dec!(200000.01)),
            PaybackPeriod::WithinThirtyDays
        );
        assert_eq!(PaybackPeriod::for_savings(dec!(0)).label(), "<60 days");
    }

    #[test]
    fn test_payback_custom_threshold() {
        assert_eq!(
            PaybackPeriod::from_savings(dec!(150000), dec!(100000)),
            PaybackPeriod::WithinThirtyDays
        );
    }

    #[test]
    fn test_payback_serializes_as_label() {
        let json = serde_json::to_string(&PaybackPeriod::WithinThirtyDays).unwrap();
        assert_eq!(json, "\"<30 days\"");
    }

    #[test]
    fn test_handle_time_label() {
        assert_eq!(default_handle_time_label(), "~40% per call");
        assert_eq!(handle_time_label(dec!(0.355)), "~35.5% per call");
    }
}
