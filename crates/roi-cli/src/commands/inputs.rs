//! Inputs command implementation.
//!
//! Lists the estimator inputs with their slider ranges.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use roi_core::format::{format_input, format_share};
use roi_core::InputField;

use crate::cli::OutputFormat;
use crate::commands::RunContext;
use crate::output::{print_header, print_output};

/// Arguments for the inputs command.
#[derive(Args, Debug)]
pub struct InputsArgs {}

/// One row of the inputs listing.
#[derive(Debug, Serialize, Tabled)]
pub struct InputRow {
    #[tabled(rename = "Field")]
    pub field: String,
    #[tabled(rename = "Label")]
    pub label: String,
    #[tabled(rename = "Min")]
    pub min: String,
    #[tabled(rename = "Max")]
    pub max: String,
    #[tabled(rename = "Step")]
    pub step: String,
    #[tabled(rename = "Default")]
    pub default: String,
    #[tabled(rename = "Slider position")]
    pub position: String,
}

impl InputRow {
    fn for_field(field: InputField) -> Self {
        let range = field.range();
        Self {
            field: field.as_str().to_string(),
            label: field.label().to_string(),
            min: format_input(field, range.min),
            max: format_input(field, range.max),
            step: range.step.normalize().to_string(),
            default: format_input(field, field.default_value()),
            position: format_share(range.fill_percent(field.default_value())),
        }
    }
}

/// Execute the inputs command.
pub fn execute(_args: InputsArgs, ctx: &RunContext) -> Result<()> {
    let rows: Vec<InputRow> = InputField::ALL.into_iter().map(InputRow::for_field).collect();

    match ctx.format {
        OutputFormat::Minimal => {
            for row in &rows {
                println!("{}", row.field);
            }
        }
        OutputFormat::Table if !ctx.quiet => {
            print_header("Estimator Inputs");
            print_output(&rows, ctx.format)?;
        }
        _ => print_output(&rows, ctx.format)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_for_portfolio() {
        let row = InputRow::for_field(InputField::PortfolioSize);
        assert_eq!(row.min, "10,000");
        assert_eq!(row.max, "2,000,000");
        assert_eq!(row.step, "10000");
        assert_eq!(row.default, "150,000");
        assert_eq!(row.position, "7.0%");
    }

    #[test]
    fn test_row_for_delinquency() {
        let row = InputRow::for_field(InputField::DelinquencyRate);
        assert_eq!(row.label, "Delinquency rate");
        assert_eq!(row.min, "1%");
        assert_eq!(row.max, "12%");
        assert_eq!(row.step, "0.5");
        assert_eq!(row.position, "27.3%");
    }
}
