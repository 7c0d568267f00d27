//! ROI CLI - contact center savings estimates for mortgage servicers.
//!
//! # Usage
//!
//! ```bash
//! # Estimate with the default inputs
//! roi estimate
//!
//! # Override inputs
//! roi estimate --portfolio-size 400000 --cost-per-call 9 --delinquency-rate 6
//!
//! # See how savings move with one input
//! roi sweep --field cost-per-call --points 6
//!
//! # Start from a profile file and print only the total
//! roi --format minimal estimate --profile-file regional.toml
//!
//! # Keep a profile and make it the default
//! roi profile import regional.toml
//! roi config set default_profile REGIONAL
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;
mod settings;

use cli::{Cli, Commands};
use commands::RunContext;
use settings::Settings;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let config_dir = settings::config_dir(cli.config_dir)?;
    let settings = Settings::load(&config_dir)?;
    let ctx = RunContext {
        format: cli.format.unwrap_or_else(|| settings.format()),
        quiet: cli.quiet,
        config_dir,
        settings,
    };
    tracing::debug!(format = ?ctx.format, dir = %ctx.config_dir.display(), "starting");

    // Execute command
    match cli.command {
        Commands::Estimate(args) => commands::estimate::execute(args, &ctx)?,
        Commands::Inputs(args) => commands::inputs::execute(args, &ctx)?,
        Commands::Sweep(args) => commands::sweep::execute(args, &ctx)?,
        Commands::Profile(args) => commands::profile::execute(args, &ctx)?,
        Commands::Config(args) => commands::config::execute(args, &ctx)?,
    }

    Ok(())
}

/// Logs go to stderr so stdout stays machine-readable. `RUST_LOG` wins over
/// the verbosity flags.
fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
