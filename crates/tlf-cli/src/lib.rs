//! Timeline filter CLI library.
//!
//! This crate provides the CLI interface for the timeline filter.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Commands, FilterArgs, RangeArgs};
pub use config::Config;
