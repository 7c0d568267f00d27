//! Sweep command implementation.
//!
//! Moves one input across its slider positions while the others stay fixed,
//! recomputing the estimate at each position.

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::Tabled;

use roi_core::format::{format_currency, format_input};
use roi_core::labels::PaybackPeriod;
use roi_core::{Estimator, EstimatorInputs, EstimatorOutputs, InputField};

use crate::cli::OutputFormat;
use crate::commands::{resolve_inputs, InputArgs, RunContext};
use crate::output::{print_header, print_json, print_output};

/// Arguments for the sweep command.
#[derive(Args, Debug)]
pub struct SweepArgs {
    /// Input to sweep (portfolio-size, calls-per-loan, cost-per-call, delinquency-rate)
    #[arg(long)]
    pub field: InputField,

    /// Number of evenly spaced positions to show (0 shows every step)
    #[arg(long, default_value = "11")]
    pub points: usize,

    #[command(flatten)]
    pub inputs: InputArgs,
}

/// One recomputation in a sweep.
#[derive(Debug, Clone, Serialize)]
pub struct SweepPoint {
    pub value: Decimal,
    pub outputs: EstimatorOutputs,
    pub payback_period: PaybackPeriod,
}

/// Display row for a sweep point.
#[derive(Debug, Serialize, Tabled)]
pub struct SweepRow {
    #[tabled(rename = "Value")]
    pub value: String,
    #[tabled(rename = "Current spend")]
    pub current_spend: String,
    #[tabled(rename = "Total savings")]
    pub total_savings: String,
    #[tabled(rename = "Payback")]
    pub payback: String,
}

/// Execute the sweep command.
pub fn execute(args: SweepArgs, ctx: &RunContext) -> Result<()> {
    let resolved = resolve_inputs(&args.inputs, ctx)?;
    let estimator = resolved.profile.estimator();
    let values = sample(&args.field.range().ticks(), args.points);
    let points = sweep(&estimator, &resolved.inputs, args.field, &values);
    tracing::debug!(field = %args.field, points = points.len(), "sweep complete");

    match ctx.format {
        OutputFormat::Json => print_json(&points)?,
        OutputFormat::Minimal => {
            for point in &points {
                println!(
                    "{} {}",
                    point.value.normalize(),
                    point.outputs.total_savings.normalize()
                );
            }
        }
        OutputFormat::Table | OutputFormat::Csv => {
            let rows: Vec<SweepRow> = points
                .iter()
                .map(|p| SweepRow {
                    value: format_input(args.field, p.value),
                    current_spend: format_currency(p.outputs.current_annual_cost),
                    total_savings: format_currency(p.outputs.total_savings),
                    payback: p.payback_period.label().to_string(),
                })
                .collect();
            if ctx.format == OutputFormat::Table && !ctx.quiet {
                print_header(&format!("Sweep: {}", args.field.label()));
            }
            print_output(&rows, ctx.format)?;
        }
    }

    Ok(())
}

/// Recomputes the estimate with `field` set to each of `values`.
pub fn sweep(
    estimator: &Estimator,
    base: &EstimatorInputs,
    field: InputField,
    values: &[Decimal],
) -> Vec<SweepPoint> {
    values
        .iter()
        .map(|&value| {
            let outputs = estimator.compute(&base.with_value(field, value));
            SweepPoint {
                value,
                payback_period: PaybackPeriod::from_savings(
                    outputs.total_savings,
                    estimator.assumptions().fast_payback_threshold,
                ),
                outputs,
            }
        })
        .collect()
}

/// Picks `points` evenly spaced ticks, always keeping both ends.
pub fn sample(ticks: &[Decimal], points: usize) -> Vec<Decimal> {
    if points == 0 || points >= ticks.len() {
        return ticks.to_vec();
    }
    if points == 1 {
        return ticks[..1].to_vec();
    }
    let last = ticks.len() - 1;
    (0..points).map(|i| ticks[i * last / (points - 1)]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_sample_keeps_ends() {
        let ticks = InputField::PortfolioSize.range().ticks();
        let picked = sample(&ticks, 5);
        assert_eq!(picked.len(), 5);
        assert_eq!(picked[0], dec!(10000));
        assert_eq!(picked[4], dec!(2000000));
    }

    #[test]
    fn test_sample_all() {
        let ticks = InputField::CostPerCall.range().ticks();
        assert_eq!(sample(&ticks, 0).len(), 22);
        assert_eq!(sample(&ticks, 100).len(), 22);
    }

    #[test]
    fn test_sweep_is_monotone_in_portfolio() {
        let ticks = InputField::PortfolioSize.range().ticks();
        let points = sweep(
            &Estimator::new(),
            &EstimatorInputs::default(),
            InputField::PortfolioSize,
            &ticks,
        );
        assert!(points
            .windows(2)
            .all(|w| w[1].outputs.total_savings >= w[0].outputs.total_savings));
    }

    #[test]
    fn test_sweep_holds_other_inputs() {
        let points = sweep(
            &Estimator::new(),
            &EstimatorInputs::default(),
            InputField::DelinquencyRate,
            &[dec!(1), dec!(12)],
        );
        assert_eq!(points[0].outputs.servicing_savings, dec!(3150000));
        assert_eq!(points[1].outputs.servicing_savings, dec!(3150000));
        assert!(points[1].outputs.collection_savings > points[0].outputs.collection_savings);
    }
}
