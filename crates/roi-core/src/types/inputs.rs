//! Estimator inputs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::InputField;
use crate::error::{RoiError, RoiResult};

/// The four scalar inputs of the estimator.
///
/// Inputs start at their defaults and are changed one field at a time,
/// mirroring a user dragging a single slider. Range enforcement is the
/// caller's job: [`compute`](crate::compute) accepts any value, so callers
/// should run [`clamped`](Self::clamped) or [`validate`](Self::validate) first.
///
/// # Example
///
/// ```rust
/// use roi_core::{EstimatorInputs, InputField};
/// use rust_decimal_macros::dec;
///
/// let inputs = EstimatorInputs::default()
///     .with_value(InputField::CostPerCall, dec!(40))
///     .clamped();
/// assert_eq!(inputs.cost_per_call, dec!(25));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorInputs {
    /// Number of loans in the portfolio.
    pub portfolio_size: Decimal,
    /// Servicing calls per loan per year.
    pub calls_per_loan_per_year: Decimal,
    /// Cost of one manually handled call, in USD.
    pub cost_per_call: Decimal,
    /// Delinquent share of the portfolio, in percent (4 = 4%).
    pub delinquency_rate_percent: Decimal,
}

impl Default for EstimatorInputs {
    fn default() -> Self {
        Self {
            portfolio_size: InputField::PortfolioSize.default_value(),
            calls_per_loan_per_year: InputField::CallsPerLoan.default_value(),
            cost_per_call: InputField::CostPerCall.default_value(),
            delinquency_rate_percent: InputField::DelinquencyRate.default_value(),
        }
    }
}

impl EstimatorInputs {
    /// Creates a new set of inputs.
    #[must_use]
    pub fn new(
        portfolio_size: Decimal,
        calls_per_loan_per_year: Decimal,
        cost_per_call: Decimal,
        delinquency_rate_percent: Decimal,
    ) -> Self {
        Self {
            portfolio_size,
            calls_per_loan_per_year,
            cost_per_call,
            delinquency_rate_percent,
        }
    }

    /// Returns the value of a single field.
    pub fn get(&self, field: InputField) -> Decimal {
        match field {
            InputField::PortfolioSize => self.portfolio_size,
            InputField::CallsPerLoan => self.calls_per_loan_per_year,
            InputField::CostPerCall => self.cost_per_call,
            InputField::DelinquencyRate => self.delinquency_rate_percent,
        }
    }

    /// Replaces the value of a single field.
    pub fn set(&mut self, field: InputField, value: Decimal) {
        let slot = match field {
            InputField::PortfolioSize => &mut self.portfolio_size,
            InputField::CallsPerLoan => &mut self.calls_per_loan_per_year,
            InputField::CostPerCall => &mut self.cost_per_call,
            InputField::DelinquencyRate => &mut self.delinquency_rate_percent,
        };
        *slot = value;
    }

    /// Returns a copy with one field replaced.
    pub fn with_value(mut self, field: InputField, value: Decimal) -> Self {
        self.set(field, value);
        self
    }

    /// Returns a copy with every field clamped into its range.
    pub fn clamped(&self) -> Self {
        self.map_fields(|field, value| field.range().clamp(value))
    }

    /// Returns a copy with every field clamped and snapped to its slider step.
    pub fn snapped(&self) -> Self {
        self.map_fields(|field, value| field.range().snap(value))
    }

    /// Lists the fields whose current value lies outside the field's range.
    pub fn out_of_range_fields(&self) -> Vec<InputField> {
        InputField::ALL
            .into_iter()
            .filter(|field| !field.range().contains(self.get(*field)))
            .collect()
    }

    /// Checks every field against its range.
    ///
    /// # Errors
    ///
    /// Returns `RoiError::OutOfRange` for the first field outside its range.
    pub fn validate(&self) -> RoiResult<()> {
        match self.out_of_range_fields().first() {
            Some(&field) => {
                let range = field.range();
                Err(RoiError::OutOfRange {
                    field,
                    value: self.get(field),
                    min: range.min,
                    max: range.max,
                })
            }
            None => Ok(()),
        }
    }

    fn map_fields(&self, f: impl Fn(InputField, Decimal) -> Decimal) -> Self {
        let mut out = *self;
        for field in InputField::ALL {
            out.set(field, f(field, self.get(field)));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults() {
        let inputs = EstimatorInputs::default();
        assert_eq!(inputs.portfolio_size, dec!(150000));
        assert_eq!(inputs.calls_per_loan_per_year, dec!(2.5));
        assert_eq!(inputs.cost_per_call, dec!(12));
        assert_eq!(inputs.delinquency_rate_percent, dec!(4));
    }

    #[test]
    fn test_set_changes_only_one_field() {
        let base = EstimatorInputs::default();
        let changed = base.with_value(InputField::CallsPerLoan, dec!(3.5));
        assert_eq!(changed.calls_per_loan_per_year, dec!(3.5));
        assert_eq!(changed.portfolio_size, base.portfolio_size);
        assert_eq!(changed.cost_per_call, base.cost_per_call);
        assert_eq!(changed.delinquency_rate_percent, base.delinquency_rate_percent);
    }

    #[test]
    fn test_mutation_order_is_irrelevant() {
        let a = EstimatorInputs::default()
            .with_value(InputField::PortfolioSize, dec!(500000))
            .with_value(InputField::CostPerCall, dec!(9));
        let b = EstimatorInputs::default()
            .with_value(InputField::CostPerCall, dec!(9))
            .with_value(InputField::PortfolioSize, dec!(500000));
        assert_eq!(a, b);
    }

    #[test]
    fn test_clamped() {
        let inputs = EstimatorInputs::new(dec!(5), dec!(10), dec!(-3), dec!(4)).clamped();
        assert_eq!(inputs.portfolio_size, dec!(10000));
        assert_eq!(inputs.calls_per_loan_per_year, dec!(6));
        assert_eq!(inputs.cost_per_call, dec!(4));
        assert_eq!(inputs.delinquency_rate_percent, dec!(4));
    }

    #[test]
    fn test_snapped() {
        let inputs = EstimatorInputs::new(dec!(154999), dec!(2.74), dec!(12.5), dec!(13)).snapped();
        assert_eq!(inputs.portfolio_size, dec!(150000));
        assert_eq!(inputs.calls_per_loan_per_year, dec!(2.5));
        assert_eq!(inputs.cost_per_call, dec!(13));
        assert_eq!(inputs.delinquency_rate_percent, dec!(12));
    }

    #[test]
    fn test_validate() {
        assert!(EstimatorInputs::default().validate().is_ok());

        let err = EstimatorInputs::default()
            .with_value(InputField::DelinquencyRate, dec!(0))
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            RoiError::OutOfRange {
                field: InputField::DelinquencyRate,
                value: dec!(0),
                min: dec!(1),
                max: dec!(12),
            }
        );
    }

    #[test]
    fn test_out_of_range_fields() {
        let inputs = EstimatorInputs::new(dec!(0), dec!(2.5), dec!(100), dec!(4));
        assert_eq!(
            inputs.out_of_range_fields(),
            vec![InputField::PortfolioSize, InputField::CostPerCall]
        );
    }

    #[test]
    fn test_partial_deserialize_fills_defaults() {
        let inputs: EstimatorInputs = serde_json::from_str(r#"{"cost_per_call": 9}"#).unwrap();
        assert_eq!(inputs.cost_per_call, dec!(9));
        assert_eq!(inputs.portfolio_size, dec!(150000));
    }
}
