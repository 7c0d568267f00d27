//! Estimator profile types.
//!
//! A profile is a named preset: a starting set of inputs plus the business
//! assumptions the estimator runs with.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use roi_core::{Assumptions, Estimator, EstimatorInputs, InputField};

use crate::error::{Validate, ValidationError};

// =============================================================================
// ESTIMATOR PROFILE
// =============================================================================

/// Named estimator preset.
///
/// Missing sections in a profile file fall back to the defaults, so a file
/// only needs to list what differs.
///
/// # Example
///
/// ```rust
/// use roi_config::EstimatorProfile;
/// use roi_core::InputField;
/// use rust_decimal_macros::dec;
///
/// let profile = EstimatorProfile::new("REGIONAL")
///     .with_description("Regional servicer")
///     .with_input(InputField::PortfolioSize, dec!(400000));
/// assert_eq!(profile.inputs.portfolio_size, dec!(400000));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatorProfile {
    /// Profile name/identifier.
    pub name: String,

    /// Description of this profile.
    #[serde(default)]
    pub description: Option<String>,

    /// Starting inputs.
    #[serde(default)]
    pub inputs: EstimatorInputs,

    /// Business assumptions.
    #[serde(default)]
    pub assumptions: Assumptions,

    /// Whether this profile is read-only.
    #[serde(default)]
    pub read_only: bool,

    /// Free-form metadata.
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

impl Default for EstimatorProfile {
    fn default() -> Self {
        Self::standard()
    }
}

impl EstimatorProfile {
    /// Name of the built-in profile.
    pub const DEFAULT_NAME: &'static str = "DEFAULT";

    /// Creates a profile with default inputs and assumptions.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            inputs: EstimatorInputs::default(),
            assumptions: Assumptions::default(),
            read_only: false,
            metadata: HashMap::new(),
        }
    }

    /// The built-in profile: published defaults, read-only.
    pub fn standard() -> Self {
        Self::new(Self::DEFAULT_NAME)
            .with_description("Published benchmark defaults")
            .read_only()
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replaces all inputs.
    pub fn with_inputs(mut self, inputs: EstimatorInputs) -> Self {
        self.inputs = inputs;
        self
    }

    /// Sets a single input.
    pub fn with_input(mut self, field: InputField, value: Decimal) -> Self {
        self.inputs.set(field, value);
        self
    }

    /// Replaces the assumptions.
    pub fn with_assumptions(mut self, assumptions: Assumptions) -> Self {
        self.assumptions = assumptions;
        self
    }

    /// Adds a metadata entry.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Marks the profile as read-only.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Builds an estimator using this profile's assumptions.
    pub fn estimator(&self) -> Estimator {
        Estimator::with_assumptions(self.assumptions)
    }
}

impl Validate for EstimatorProfile {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(ValidationError::new("name", "Name cannot be empty"));
        }

        for field in InputField::ALL {
            let range = field.range();
            let value = self.inputs.get(field);
            if !range.contains(value) {
                errors.push(ValidationError::with_rule(
                    format!("inputs.{}", field.as_str()),
                    format!(
                        "{} must be between {} and {}, got {}",
                        field.label(),
                        range.min,
                        range.max,
                        value
                    ),
                    "input_range",
                ));
            }
        }

        let a = &self.assumptions;
        for (name, factor) in [
            ("automation_cost_factor", a.automation_cost_factor),
            ("collection_savings_factor", a.collection_savings_factor),
            ("handle_time_reduction", a.handle_time_reduction),
        ] {
            if factor < Decimal::ZERO || factor > Decimal::ONE {
                errors.push(ValidationError::with_rule(
                    format!("assumptions.{name}"),
                    format!("Factor must be between 0 and 1, got {factor}"),
                    "unit_interval",
                ));
            }
        }

        if a.collection_calls_per_delinquent_loan < Decimal::ZERO {
            errors.push(ValidationError::with_rule(
                "assumptions.collection_calls_per_delinquent_loan",
                "Collection calls cannot be negative",
                "non_negative",
            ));
        }

        if a.fast_payback_threshold < Decimal::ZERO {
            errors.push(ValidationError::with_rule(
                "assumptions.fast_payback_threshold",
                "Payback threshold cannot be negative",
                "non_negative",
            ));
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_standard_profile() {
        let profile = EstimatorProfile::standard();
        assert_eq!(profile.name, "DEFAULT");
        assert!(profile.read_only);
        assert_eq!(profile.inputs, EstimatorInputs::default());
        assert_eq!(profile.assumptions, Assumptions::default());
        assert!(profile.is_valid());
    }

    #[test]
    fn test_builder() {
        let profile = EstimatorProfile::new("LARGE")
            .with_input(InputField::PortfolioSize, dec!(1200000))
            .with_input(InputField::CostPerCall, dec!(9))
            .with_metadata("source", "MBA 2024");
        assert_eq!(profile.inputs.portfolio_size, dec!(1200000));
        assert_eq!(profile.inputs.cost_per_call, dec!(9));
        assert_eq!(profile.inputs.calls_per_loan_per_year, dec!(2.5));
        assert_eq!(profile.metadata.get("source").map(String::as_str), Some("MBA 2024"));
        assert!(!profile.read_only);
    }

    #[test]
    fn test_validate_rejects_out_of_range_inputs() {
        let profile = EstimatorProfile::new("BAD")
            .with_input(InputField::PortfolioSize, dec!(5))
            .with_input(InputField::DelinquencyRate, dec!(20));
        let errors = profile.validate();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "inputs.portfolio_size");
        assert_eq!(errors[1].field, "inputs.delinquency_rate");
    }

    #[test]
    fn test_validate_rejects_bad_assumptions() {
        let profile = EstimatorProfile::new("").with_assumptions(
            Assumptions::default()
                .with_automation_cost_factor(dec!(1.2))
                .with_collection_calls_per_delinquent_loan(dec!(-1)),
        );
        let fields: Vec<_> = profile.validate().into_iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                "name",
                "assumptions.automation_cost_factor",
                "assumptions.collection_calls_per_delinquent_loan",
            ]
        );
    }

    #[test]
    fn test_estimator_uses_profile_assumptions() {
        let profile = EstimatorProfile::new("HALF")
            .with_assumptions(Assumptions::default().with_automation_cost_factor(dec!(0.5)));
        let outputs = profile.estimator().compute(&profile.inputs);
        assert_eq!(outputs.automated_annual_cost, dec!(2250000));
    }
}
