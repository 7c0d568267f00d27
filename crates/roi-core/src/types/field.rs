//! Input field identifiers.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RoiError;
use crate::range::FieldRange;

/// One of the four estimator inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    /// Number of loans in the servicing portfolio.
    PortfolioSize,
    /// Servicing calls per loan per year.
    CallsPerLoan,
    /// Fully loaded cost of one manually handled call, in USD.
    CostPerCall,
    /// Share of loans that are delinquent, as a percentage.
    DelinquencyRate,
}

impl InputField {
    /// All fields in display order.
    pub const ALL: [InputField; 4] = [
        InputField::PortfolioSize,
        InputField::CallsPerLoan,
        InputField::CostPerCall,
        InputField::DelinquencyRate,
    ];

    /// Returns the string identifier for this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PortfolioSize => "portfolio_size",
            Self::CallsPerLoan => "calls_per_loan",
            Self::CostPerCall => "cost_per_call",
            Self::DelinquencyRate => "delinquency_rate",
        }
    }

    /// Parses a field from its identifier. Accepts `snake_case` and `kebab-case`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "portfolio_size" | "portfolio" | "loans" => Some(Self::PortfolioSize),
            "calls_per_loan" | "calls_per_loan_per_year" | "calls" => Some(Self::CallsPerLoan),
            "cost_per_call" | "cost" => Some(Self::CostPerCall),
            "delinquency_rate" | "delinquency_rate_percent" | "delinquency" => {
                Some(Self::DelinquencyRate)
            }
            _ => None,
        }
    }

    /// Human-readable label shown next to the input control.
    pub fn label(&self) -> &'static str {
        match self {
            Self::PortfolioSize => "Portfolio size (loans)",
            Self::CallsPerLoan => "Servicing calls / loan / year",
            Self::CostPerCall => "Current cost per call",
            Self::DelinquencyRate => "Delinquency rate",
        }
    }

    /// Returns the slider range for this field.
    pub fn range(&self) -> FieldRange {
        match self {
            Self::PortfolioSize => FieldRange::new(dec!(10000), dec!(2000000), dec!(10000)),
            Self::CallsPerLoan => FieldRange::new(dec!(0.5), dec!(6), dec!(0.5)),
            Self::CostPerCall => FieldRange::new(dec!(4), dec!(25), dec!(1)),
            Self::DelinquencyRate => FieldRange::new(dec!(1), dec!(12), dec!(0.5)),
        }
    }

    /// Value the field takes when the estimator is first loaded.
    pub fn default_value(&self) -> Decimal {
        match self {
            Self::PortfolioSize => dec!(150000),
            Self::CallsPerLoan => dec!(2.5),
            Self::CostPerCall => dec!(12),
            Self::DelinquencyRate => dec!(4),
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputField {
    type Err = RoiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| RoiError::unknown_field(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_identifier() {
        for field in InputField::ALL {
            assert_eq!(InputField::parse(field.as_str()), Some(field));
        }
    }

    #[test]
    fn test_parse_accepts_kebab_case_and_aliases() {
        assert_eq!(
            InputField::parse("portfolio-size"),
            Some(InputField::PortfolioSize)
        );
        assert_eq!(
            InputField::parse("Delinquency-Rate-Percent"),
            Some(InputField::DelinquencyRate)
        );
        assert_eq!(InputField::parse("cost"), Some(InputField::CostPerCall));
        assert_eq!(InputField::parse("interest"), None);
    }

    #[test]
    fn test_from_str_reports_unknown_field() {
        let err = "interest".parse::<InputField>().unwrap_err();
        assert_eq!(err, RoiError::unknown_field("interest"));
    }

    #[test]
    fn test_defaults_lie_within_range() {
        for field in InputField::ALL {
            assert!(field.range().contains(field.default_value()), "{field}");
        }
    }
}
