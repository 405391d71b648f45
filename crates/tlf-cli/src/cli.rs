//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tlf_core::Algorithm;

/// Timeline filter demo.
///
/// Lays a fixed set of items out on a timeline and classifies each one
/// against a filter range whose bounds can be opened independently.
#[derive(Debug, Parser)]
#[command(name = "tlf", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render the timeline with every item classified against the filter.
    Show {
        #[command(flatten)]
        filter: FilterArgs,

        /// Output the view model as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print both algorithm verdicts for every item.
    Classify {
        #[command(flatten)]
        filter: FilterArgs,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the derived display window.
    Window {
        #[command(flatten)]
        range: RangeArgs,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
}

/// Filter range bound overrides.
#[derive(Debug, Clone, Default, Args)]
pub struct RangeArgs {
    /// Filter range start (ISO 8601). Defaults to 09:00 on the demo day.
    #[arg(long)]
    pub from: Option<String>,

    /// Filter range end (ISO 8601). Defaults to 17:00 on the demo day.
    #[arg(long)]
    pub to: Option<String>,
}

/// Filter controls shared by `show` and `classify`.
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    #[command(flatten)]
    pub range: RangeArgs,

    /// Matching algorithm: inclusive or contained. Overrides the config.
    #[arg(short, long)]
    pub algorithm: Option<Algorithm>,

    /// Ignore the range's start bound.
    #[arg(long)]
    pub open_start: bool,

    /// Ignore the range's end bound.
    #[arg(long)]
    pub open_end: bool,
}
