//! Profile command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::Tabled;

use roi_config::{EstimatorProfile, ProfileManager};
use roi_core::format::{format_currency, format_input};
use roi_core::{Assumptions, InputField};

use crate::cli::OutputFormat;
use crate::commands::{load_profile_file, open_profiles, resolve_inputs, InputArgs, RunContext};
use crate::output::{print_header, print_json, print_output, print_success, KeyValue};
use crate::settings::profiles_dir;

/// Arguments for the profile command.
#[derive(Args, Debug)]
pub struct ProfileArgs {
    /// Profile files to load before running the subcommand
    #[arg(long = "file", value_name = "PATH")]
    pub files: Vec<PathBuf>,

    #[command(subcommand)]
    pub command: ProfileCommand,
}

/// Profile subcommands.
#[derive(Subcommand, Debug)]
pub enum ProfileCommand {
    /// List registered profiles
    List,

    /// Show a profile's inputs and assumptions
    Show {
        /// Profile name
        name: String,
    },

    /// Write a profile to a TOML or JSON file
    Export {
        /// Profile name
        name: String,

        /// Destination file (.toml or .json)
        path: PathBuf,
    },

    /// Copy a TOML or JSON profile file into the saved profiles
    Import {
        /// Source file (.toml or .json)
        path: PathBuf,
    },

    /// Save the resolved inputs, and any assumption overrides, as a profile
    Save(SaveArgs),

    /// Delete a saved profile
    Remove {
        /// Profile name
        name: String,
    },
}

/// Arguments for the save subcommand.
#[derive(Args, Debug)]
pub struct SaveArgs {
    /// Name of the new profile
    pub name: String,

    /// Free-text description
    #[arg(long)]
    pub description: Option<String>,

    #[command(flatten)]
    pub inputs: InputArgs,

    /// Automated cost as a share of current cost [0 - 1]
    #[arg(long)]
    pub automation_cost_factor: Option<Decimal>,

    /// Collection calls per delinquent loan per year
    #[arg(long)]
    pub collection_calls: Option<Decimal>,

    /// Share of collection call cost saved [0 - 1]
    #[arg(long)]
    pub collection_savings_factor: Option<Decimal>,

    /// Handle time reduction per call [0 - 1]
    #[arg(long)]
    pub handle_time_reduction: Option<Decimal>,

    /// Total savings above which payback is under 30 days
    #[arg(long)]
    pub payback_threshold: Option<Decimal>,
}

impl SaveArgs {
    fn apply(&self, mut assumptions: Assumptions) -> Assumptions {
        if let Some(v) = self.automation_cost_factor {
            assumptions = assumptions.with_automation_cost_factor(v);
        }
        if let Some(v) = self.collection_calls {
            assumptions = assumptions.with_collection_calls_per_delinquent_loan(v);
        }
        if let Some(v) = self.collection_savings_factor {
            assumptions = assumptions.with_collection_savings_factor(v);
        }
        if let Some(v) = self.handle_time_reduction {
            assumptions = assumptions.with_handle_time_reduction(v);
        }
        if let Some(v) = self.payback_threshold {
            assumptions = assumptions.with_fast_payback_threshold(v);
        }
        assumptions
    }
}

/// Row in the profile listing.
#[derive(Debug, Serialize, Tabled)]
pub struct ProfileRow {
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Description")]
    pub description: String,
    #[tabled(rename = "Read-only")]
    pub read_only: bool,
}

/// Execute the profile command.
pub fn execute(args: ProfileArgs, ctx: &RunContext) -> Result<()> {
    let manager = open_profiles(ctx)?;
    for path in &args.files {
        load_profile_file(&manager, path)?;
    }

    match args.command {
        ProfileCommand::List => execute_list(&manager, ctx),
        ProfileCommand::Show { name } => execute_show(&manager, &name, ctx),
        ProfileCommand::Export { name, path } => {
            manager
                .save_file(&name, &path)
                .with_context(|| format!("Failed to export profile {name}"))?;
            if !ctx.quiet {
                print_success(&format!("Wrote {} to {}", name, path.display()));
            }
            Ok(())
        }
        ProfileCommand::Import { path } => {
            let name = load_profile_file(&manager, &path)?;
            persist(&manager, &name, ctx)
        }
        ProfileCommand::Save(save_args) => {
            let profile = build_profile(&save_args, ctx)?;
            let name = profile.name.clone();
            manager.register(profile)?;
            persist(&manager, &name, ctx)
        }
        ProfileCommand::Remove { name } => execute_remove(&manager, &name, ctx),
    }
}

/// Builds a profile from the resolved inputs of `args`, starting from the
/// assumptions of the base profile.
fn build_profile(args: &SaveArgs, ctx: &RunContext) -> Result<EstimatorProfile> {
    let resolved = resolve_inputs(&args.inputs, ctx)?;
    let mut profile = EstimatorProfile::new(args.name.clone())
        .with_inputs(resolved.inputs)
        .with_assumptions(args.apply(resolved.profile.assumptions));
    if let Some(description) = &args.description {
        profile = profile.with_description(description.clone());
    }
    Ok(profile)
}

/// Where a saved profile lives.
pub fn saved_profile_path(ctx: &RunContext, name: &str) -> PathBuf {
    let stem: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();
    profiles_dir(&ctx.config_dir).join(format!("{stem}.toml"))
}

fn persist(manager: &ProfileManager, name: &str, ctx: &RunContext) -> Result<()> {
    let path = saved_profile_path(ctx, name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    manager
        .save_file(name, &path)
        .with_context(|| format!("Failed to save profile {name}"))?;
    tracing::info!(profile = name, path = %path.display(), "profile saved");
    if !ctx.quiet {
        print_success(&format!("Saved profile {} to {}", name, path.display()));
    }
    Ok(())
}

fn execute_remove(manager: &ProfileManager, name: &str, ctx: &RunContext) -> Result<()> {
    manager.remove(name)?;
    let path = saved_profile_path(ctx, name);
    if path.exists() {
        std::fs::remove_file(&path)?;
    }
    if !ctx.quiet {
        print_success(&format!("Removed profile {name}"));
    }
    Ok(())
}

fn execute_list(manager: &ProfileManager, ctx: &RunContext) -> Result<()> {
    if ctx.format == OutputFormat::Minimal {
        for name in manager.list() {
            println!("{name}");
        }
        return Ok(());
    }

    let mut rows = Vec::new();
    for name in manager.list() {
        let profile = manager.get(&name)?;
        rows.push(ProfileRow {
            name: profile.name,
            description: profile.description.unwrap_or_default(),
            read_only: profile.read_only,
        });
    }

    if ctx.format == OutputFormat::Table && !ctx.quiet {
        print_header("Profiles");
    }
    print_output(&rows, ctx.format)
}

fn execute_show(manager: &ProfileManager, name: &str, ctx: &RunContext) -> Result<()> {
    let profile = manager.get(name)?;

    match ctx.format {
        OutputFormat::Json => print_json(&profile),
        OutputFormat::Minimal => {
            for field in InputField::ALL {
                println!("{}={}", field.as_str(), profile.inputs.get(field).normalize());
            }
            Ok(())
        }
        OutputFormat::Table | OutputFormat::Csv => {
            if ctx.format == OutputFormat::Table && !ctx.quiet {
                print_header(&format!("Profile {}", profile.name));
            }
            print_output(&profile_rows(&profile), ctx.format)
        }
    }
}

/// Rows describing a profile: inputs first, then assumptions.
pub fn profile_rows(profile: &EstimatorProfile) -> Vec<KeyValue> {
    let a = &profile.assumptions;
    let mut rows: Vec<KeyValue> = InputField::ALL
        .iter()
        .map(|field| KeyValue::new(field.label(), format_input(*field, profile.inputs.get(*field))))
        .collect();
    rows.push(KeyValue::new(
        "Automation cost factor",
        a.automation_cost_factor.normalize().to_string(),
    ));
    rows.push(KeyValue::new(
        "Collection calls / delinquent loan",
        a.collection_calls_per_delinquent_loan.normalize().to_string(),
    ));
    rows.push(KeyValue::new(
        "Collection savings factor",
        a.collection_savings_factor.normalize().to_string(),
    ));
    rows.push(KeyValue::new(
        "Handle time reduction",
        a.handle_time_reduction.normalize().to_string(),
    ));
    rows.push(KeyValue::new(
        "Fast payback threshold",
        format_currency(a.fast_payback_threshold),
    ));
    rows
}
