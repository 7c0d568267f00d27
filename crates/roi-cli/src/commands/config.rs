//! Config command implementation.
//!
//! Manages CLI settings.

use std::collections::BTreeMap;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::cli::OutputFormat;
use crate::commands::{open_profiles, RunContext};
use crate::error::CliError;
use crate::output::{
    print_header, print_info, print_json, print_output, print_success, print_warning, KeyValue,
};
use crate::settings::{settings_path, SettingKey, Settings};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Get a configuration value
    Get(GetArgs),

    /// Set a configuration value
    Set(SetArgs),

    /// List available configuration keys
    List,

    /// Reset configuration to defaults
    Reset(ResetArgs),

    /// Show configuration file location
    Path,
}

/// Arguments for get subcommand.
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Configuration key
    pub key: String,
}

/// Arguments for set subcommand.
#[derive(Args, Debug)]
pub struct SetArgs {
    /// Configuration key
    pub key: String,

    /// Configuration value
    pub value: String,
}

/// Arguments for reset subcommand.
#[derive(Args, Debug)]
pub struct ResetArgs {
    /// Reset all settings (not just one)
    #[arg(long)]
    pub all: bool,

    /// Specific key to reset (optional)
    pub key: Option<String>,
}

fn parse_key(s: &str) -> Result<SettingKey, CliError> {
    SettingKey::parse(s).ok_or_else(|| CliError::UnknownSetting(s.to_string()))
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, ctx: &RunContext) -> Result<()> {
    match args.command {
        ConfigCommand::Show => execute_show(ctx),
        ConfigCommand::Get(get_args) => execute_get(get_args, ctx),
        ConfigCommand::Set(set_args) => execute_set(set_args, ctx),
        ConfigCommand::List => execute_list(ctx),
        ConfigCommand::Reset(reset_args) => execute_reset(reset_args, ctx),
        ConfigCommand::Path => execute_path(ctx),
    }
}

/// Show current configuration.
fn execute_show(ctx: &RunContext) -> Result<()> {
    let settings = &ctx.settings;
    let results: Vec<KeyValue> = SettingKey::all()
        .iter()
        .map(|key| {
            let value = settings.value(*key);
            if settings.is_set(*key) {
                KeyValue::new(key.as_str(), value)
            } else {
                KeyValue::new(key.as_str(), format!("{value} (default)"))
            }
        })
        .collect();

    match ctx.format {
        OutputFormat::Table => {
            if !ctx.quiet {
                print_header("Current Configuration");
            }
            print_output(&results, ctx.format)?;
        }
        OutputFormat::Json => {
            let output: BTreeMap<&str, &str> = SettingKey::all()
                .iter()
                .map(|key| (key.as_str(), settings.value(*key)))
                .collect();
            print_json(&output)?;
        }
        OutputFormat::Csv => print_output(&results, ctx.format)?,
        OutputFormat::Minimal => {
            for key in SettingKey::all() {
                println!("{}={}", key.as_str(), settings.value(*key));
            }
        }
    }

    Ok(())
}

/// Get a configuration value.
fn execute_get(args: GetArgs, ctx: &RunContext) -> Result<()> {
    let key = parse_key(&args.key)?;
    let value = ctx.settings.value(key);

    match ctx.format {
        OutputFormat::Table | OutputFormat::Csv => println!("{}: {}", key.as_str(), value),
        OutputFormat::Json => {
            print_json(&serde_json::json!({
                "key": key.as_str(),
                "value": value
            }))?;
        }
        OutputFormat::Minimal => println!("{value}"),
    }

    Ok(())
}

/// Set a configuration value.
fn execute_set(args: SetArgs, ctx: &RunContext) -> Result<()> {
    let key = parse_key(&args.key)?;
    key.validate(&args.value)?;
    if key == SettingKey::DefaultProfile && !open_profiles(ctx)?.contains(&args.value) {
        return Err(CliError::UnknownProfile(args.value).into());
    }

    let mut settings = Settings::load(&ctx.config_dir)?;
    settings.set(key, args.value.clone());
    settings.save(&ctx.config_dir)?;
    tracing::info!(key = key.as_str(), value = %args.value, "setting stored");

    if !ctx.quiet {
        print_success(&format!("Set {} = {}", key.as_str(), args.value));
    }
    Ok(())
}

/// List available configuration keys.
fn execute_list(ctx: &RunContext) -> Result<()> {
    match ctx.format {
        OutputFormat::Table | OutputFormat::Csv => {
            let results: Vec<KeyValue> = SettingKey::all()
                .iter()
                .map(|key| {
                    KeyValue::new(
                        key.as_str(),
                        format!("{} (default: {})", key.description(), key.default_value()),
                    )
                })
                .collect();
            if ctx.format == OutputFormat::Table && !ctx.quiet {
                print_header("Available Configuration Keys");
            }
            print_output(&results, ctx.format)?;
        }
        OutputFormat::Json => {
            let output: Vec<_> = SettingKey::all()
                .iter()
                .map(|key| {
                    serde_json::json!({
                        "key": key.as_str(),
                        "description": key.description(),
                        "default": key.default_value()
                    })
                })
                .collect();
            print_json(&output)?;
        }
        OutputFormat::Minimal => {
            for key in SettingKey::all() {
                println!("{}", key.as_str());
            }
        }
    }

    Ok(())
}

/// Reset configuration.
fn execute_reset(args: ResetArgs, ctx: &RunContext) -> Result<()> {
    let mut settings = Settings::load(&ctx.config_dir)?;

    if args.all {
        settings.clear();
        settings.save(&ctx.config_dir)?;
        if !ctx.quiet {
            print_success("Reset all configuration to defaults");
        }
    } else if let Some(key_str) = args.key {
        let key = parse_key(&key_str)?;
        settings.remove(key);
        settings.save(&ctx.config_dir)?;
        if !ctx.quiet {
            print_success(&format!(
                "Reset {} to default ({})",
                key.as_str(),
                key.default_value()
            ));
        }
    } else {
        print_warning("Use --all to reset all settings, or specify a key to reset");
    }

    Ok(())
}

/// Show configuration file path.
fn execute_path(ctx: &RunContext) -> Result<()> {
    let path = settings_path(&ctx.config_dir);
    if ctx.format == OutputFormat::Minimal {
        println!("{}", path.display());
        return Ok(());
    }
    print_info(&format!("Config file: {}", path.display()));
    if path.exists() {
        print_info("Status: exists");
    } else {
        print_info("Status: not created yet (using defaults)");
    }
    Ok(())
}
