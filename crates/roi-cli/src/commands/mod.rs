//! CLI command implementations.

pub mod config;
pub mod estimate;
pub mod inputs;
pub mod profile;
pub mod sweep;

// Re-export submodules for convenience
pub use config::ConfigArgs;
pub use estimate::EstimateArgs;
pub use inputs::InputsArgs;
pub use profile::ProfileArgs;
pub use sweep::SweepArgs;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use rust_decimal::Decimal;

use roi_config::{EstimatorProfile, ProfileManager};
use roi_core::{EstimatorInputs, InputField};

use crate::cli::OutputFormat;
use crate::settings::{profiles_dir, OutOfRangePolicy, Settings};

/// State shared by every command.
pub struct RunContext {
    /// Resolved output format.
    pub format: OutputFormat,
    /// Suppress headers and hints.
    pub quiet: bool,
    /// Directory holding the settings file.
    pub config_dir: PathBuf,
    /// Loaded user settings.
    pub settings: Settings,
}

/// Estimator inputs accepted by commands that run the model.
#[derive(Args, Debug, Default)]
pub struct InputArgs {
    /// Portfolio size in loans [10,000 - 2,000,000]
    #[arg(short = 'p', long, allow_negative_numbers = true)]
    pub portfolio_size: Option<Decimal>,

    /// Servicing calls per loan per year [0.5 - 6]
    #[arg(short = 'c', long, allow_negative_numbers = true)]
    pub calls_per_loan: Option<Decimal>,

    /// Current cost per call in USD [4 - 25]
    #[arg(short = 'k', long, allow_negative_numbers = true)]
    pub cost_per_call: Option<Decimal>,

    /// Delinquency rate in percent [1 - 12]
    #[arg(short = 'd', long, allow_negative_numbers = true)]
    pub delinquency_rate: Option<Decimal>,

    /// Start from a named profile
    #[arg(long)]
    pub profile: Option<String>,

    /// Load a profile from a TOML or JSON file and start from it
    #[arg(long, value_name = "PATH")]
    pub profile_file: Option<PathBuf>,

    /// Reject out-of-range inputs instead of clamping them
    #[arg(long)]
    pub strict: bool,

    /// Snap inputs to the nearest slider step
    #[arg(long)]
    pub snap: bool,
}

impl InputArgs {
    fn overrides(&self) -> [(InputField, Option<Decimal>); 4] {
        [
            (InputField::PortfolioSize, self.portfolio_size),
            (InputField::CallsPerLoan, self.calls_per_loan),
            (InputField::CostPerCall, self.cost_per_call),
            (InputField::DelinquencyRate, self.delinquency_rate),
        ]
    }
}

/// Profile and final inputs after flags, range policy and snapping are applied.
pub struct ResolvedInputs {
    pub profile: EstimatorProfile,
    pub inputs: EstimatorInputs,
}

/// Builds the inputs for a run.
///
/// Order: profile inputs, then each flag given on the command line, then
/// the range policy, then snapping.
pub fn resolve_inputs(args: &InputArgs, ctx: &RunContext) -> Result<ResolvedInputs> {
    let manager = open_profiles(ctx)?;
    let loaded = match &args.profile_file {
        Some(path) => Some(load_profile_file(&manager, path)?),
        None => None,
    };

    let name = args
        .profile
        .clone()
        .or(loaded)
        .unwrap_or_else(|| ctx.settings.default_profile().to_string());
    let profile = manager.get(&name)?;
    tracing::debug!(profile = %profile.name, "using profile");

    let mut inputs = profile.inputs;
    for (field, value) in args.overrides() {
        if let Some(value) = value {
            inputs.set(field, value);
        }
    }

    let strict = args.strict || ctx.settings.out_of_range() == OutOfRangePolicy::Reject;
    let mut inputs = constrain(inputs, strict)?;
    if args.snap {
        inputs = inputs.snapped();
    }

    Ok(ResolvedInputs { profile, inputs })
}

/// Applies the range policy: reject the first out-of-range field, or clamp
/// every field and log what moved.
pub fn constrain(inputs: EstimatorInputs, strict: bool) -> Result<EstimatorInputs> {
    if strict {
        inputs.validate()?;
        return Ok(inputs);
    }

    let clamped = inputs.clamped();
    for field in inputs.out_of_range_fields() {
        tracing::warn!(
            field = field.as_str(),
            requested = %inputs.get(field),
            clamped = %clamped.get(field),
            "input outside range, clamped"
        );
    }
    Ok(clamped)
}

/// Opens the profile registry: the built-in profile plus every profile saved
/// in the config directory.
pub fn open_profiles(ctx: &RunContext) -> Result<ProfileManager> {
    let manager = ProfileManager::new();
    let dir = profiles_dir(&ctx.config_dir);
    let loaded = manager
        .load_dir(&dir)
        .with_context(|| format!("Failed to read profiles from {}", dir.display()))?;
    tracing::debug!(count = loaded.len(), "loaded saved profiles");
    Ok(manager)
}

/// Loads a profile file into `manager`, returning the profile name.
pub fn load_profile_file(manager: &ProfileManager, path: &Path) -> Result<String> {
    manager
        .load_file(path)
        .with_context(|| format!("Failed to load profile file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::SettingKey;
    use rust_decimal_macros::dec;

    fn context() -> RunContext {
        RunContext {
            format: OutputFormat::Table,
            quiet: true,
            config_dir: PathBuf::from("."),
            settings: Settings::default(),
        }
    }

    #[test]
    fn test_resolve_defaults() {
        let resolved = resolve_inputs(&InputArgs::default(), &context()).unwrap();
        assert_eq!(resolved.profile.name, "DEFAULT");
        assert_eq!(resolved.inputs, EstimatorInputs::default());
    }

    #[test]
    fn test_resolve_applies_flags_then_clamps() {
        let args = InputArgs {
            portfolio_size: Some(dec!(5000000)),
            cost_per_call: Some(dec!(9)),
            ..InputArgs::default()
        };
        let resolved = resolve_inputs(&args, &context()).unwrap();
        assert_eq!(resolved.inputs.portfolio_size, dec!(2000000));
        assert_eq!(resolved.inputs.cost_per_call, dec!(9));
    }

    #[test]
    fn test_resolve_strict_rejects() {
        let args = InputArgs {
            delinquency_rate: Some(dec!(0)),
            strict: true,
            ..InputArgs::default()
        };
        assert!(resolve_inputs(&args, &context()).is_err());
    }

    #[test]
    fn test_resolve_snaps() {
        let args = InputArgs {
            calls_per_loan: Some(dec!(2.7)),
            snap: true,
            ..InputArgs::default()
        };
        let resolved = resolve_inputs(&args, &context()).unwrap();
        assert_eq!(resolved.inputs.calls_per_loan_per_year, dec!(2.5));
    }

    #[test]
    fn test_resolve_uses_saved_default_profile() {
        let dir = tempfile::tempdir().unwrap();
        let profiles = profiles_dir(dir.path());
        std::fs::create_dir_all(&profiles).unwrap();
        std::fs::write(
            profiles.join("REGIONAL.toml"),
            "name = \"REGIONAL\"\n[inputs]\nportfolio_size = 400000\n",
        )
        .unwrap();

        let mut settings = Settings::default();
        settings.set(SettingKey::DefaultProfile, "REGIONAL".into());
        let ctx = RunContext {
            config_dir: dir.path().to_path_buf(),
            settings,
            ..context()
        };

        let resolved = resolve_inputs(&InputArgs::default(), &ctx).unwrap();
        assert_eq!(resolved.profile.name, "REGIONAL");
        assert_eq!(resolved.inputs.portfolio_size, dec!(400000));
    }

    #[test]
    fn test_resolve_unknown_profile() {
        let args = InputArgs {
            profile: Some("MISSING".into()),
            ..InputArgs::default()
        };
        assert!(resolve_inputs(&args, &context()).is_err());
    }
}
