//! Estimate command implementation.
//!
//! Computes the annual impact of automating servicing and collection calls.

use anyhow::Result;
use clap::Args;

use roi_core::format::{format_count, format_currency, format_input, format_share};
use roi_core::{InputField, RoiReport};

use crate::cli::OutputFormat;
use crate::commands::{resolve_inputs, InputArgs, RunContext};
use crate::output::{print_header, print_json, print_output, KeyValue};

/// Arguments for the estimate command.
#[derive(Args, Debug)]
pub struct EstimateArgs {
    #[command(flatten)]
    pub inputs: InputArgs,

    /// Include intermediate call volumes in the table
    #[arg(long)]
    pub detail: bool,
}

/// Execute the estimate command.
pub fn execute(args: EstimateArgs, ctx: &RunContext) -> Result<()> {
    let resolved = resolve_inputs(&args.inputs, ctx)?;
    let report = resolved.profile.estimator().report(&resolved.inputs);

    match ctx.format {
        OutputFormat::Table => {
            if !ctx.quiet {
                print_header(&format!("Estimated Annual Impact ({})", resolved.profile.name));
            }
            print_output(&report_rows(&report, args.detail), ctx.format)?;
        }
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Csv => {
            let rows: Vec<_> = report_rows(&report, true)
                .into_iter()
                .filter(|r| !r.is_separator())
                .collect();
            print_output(&rows, ctx.format)?;
        }
        OutputFormat::Minimal => {
            println!("{}", report.outputs.total_savings.normalize());
        }
    }

    Ok(())
}

/// Rows shown for a report: inputs, headline figures, then the stat strip.
pub fn report_rows(report: &RoiReport, detail: bool) -> Vec<KeyValue> {
    let out = &report.outputs;
    let mut rows: Vec<KeyValue> = InputField::ALL
        .iter()
        .map(|field| KeyValue::new(field.label(), format_input(*field, report.inputs.get(*field))))
        .collect();

    rows.push(KeyValue::separator());
    rows.push(KeyValue::new("Current spend", format_currency(out.current_annual_cost)));
    rows.push(KeyValue::new("With automation", format_currency(out.automated_annual_cost)));
    rows.push(KeyValue::new("Total savings", format_currency(out.total_savings)));
    rows.push(KeyValue::new("Servicing savings", format_currency(out.servicing_savings)));
    rows.push(KeyValue::new("Collection savings", format_currency(out.collection_savings)));
    rows.push(KeyValue::new(
        "Savings split",
        format!(
            "{} servicing / {} collections",
            format_share(report.split.servicing_percent),
            format_share(report.split.collection_percent)
        ),
    ));

    if detail {
        rows.push(KeyValue::separator());
        rows.push(KeyValue::new("Servicing calls / year", format_count(out.total_calls_per_year)));
        rows.push(KeyValue::new("Delinquent loans", format_count(out.delinquent_loan_count)));
        rows.push(KeyValue::new(
            "Collection calls / year",
            format_count(out.collection_calls_per_year),
        ));
    }

    rows.push(KeyValue::separator());
    rows.push(KeyValue::new(
        "Calls automated / year",
        format_count(out.calls_automated_per_year),
    ));
    rows.push(KeyValue::new("Handle time saved", report.handle_time_saved.clone()));
    rows.push(KeyValue::new("Est. payback period", report.payback_period.label()));
    rows
}
