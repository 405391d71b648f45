use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tlf_cli::commands::{classify, show, window};
use tlf_cli::{Cli, Commands, Config};

/// Load config from default locations, the optional file, and `TLF_*` variables.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let mut stdout = io::stdout().lock();

    match &cli.command {
        Some(Commands::Show { filter, json }) => {
            let config = load_config(cli.config.as_deref())?;
            show::run(&mut stdout, &config, filter, *json)?;
        }
        Some(Commands::Classify { filter, json }) => {
            let config = load_config(cli.config.as_deref())?;
            classify::run(&mut stdout, &config, filter, *json)?;
        }
        Some(Commands::Window { range, json }) => {
            let config = load_config(cli.config.as_deref())?;
            window::run(&mut stdout, &config, range, *json)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            writeln!(stdout)?;
        }
    }

    Ok(())
}
