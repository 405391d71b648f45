//! CLI subcommand implementations.

pub mod classify;
pub mod show;
pub mod util;
pub mod window;
