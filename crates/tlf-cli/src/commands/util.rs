//! Shared utilities for CLI commands.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tlf_core::{Controls, Range, Timeline, dataset};

use crate::Config;
use crate::cli::{FilterArgs, RangeArgs};

/// Parse an ISO 8601 / RFC 3339 datetime string.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .with_context(|| format!("Invalid datetime: {s}. Use ISO 8601 (e.g., 2026-01-15T09:00:00Z)"))
}

/// Builds the configured filter range, replacing demo bounds with overrides.
pub fn resolve_range(args: &RangeArgs) -> Result<Range> {
    let mut range = dataset::demo_range();
    if let Some(from) = &args.from {
        range.start = Some(parse_datetime(from).context("invalid --from")?);
    }
    if let Some(to) = &args.to {
        range.end = Some(parse_datetime(to).context("invalid --to")?);
    }
    if let (Some(start), Some(end)) = (range.start, range.end) {
        if start > end {
            tracing::warn!(%start, %end, "filter range starts after it ends");
        }
    }
    Ok(range)
}

/// Builds the demo timeline against `range` with the configured margin.
pub fn build_timeline(config: &Config, range: Range) -> Result<Timeline> {
    let margin = config
        .margin()
        .with_context(|| format!("margin_ms out of range: {}", config.margin_ms))?;
    let items = dataset::demo_items().context("invalid demo dataset")?;
    Timeline::new(items, range, margin).context("failed to derive display window")
}

/// Merges command-line flags with configured defaults.
pub fn controls(config: &Config, filter: &FilterArgs) -> Controls {
    Controls {
        algorithm: filter.algorithm.unwrap_or(config.algorithm),
        open_start: filter.open_start,
        open_end: filter.open_end,
    }
}

/// Formats a timestamp for display, e.g. "Jan 15, 09:00".
pub fn format_timestamp(dt: DateTime<Utc>) -> String {
    dt.format("%b %-d, %H:%M").to_string()
}

/// Formats an optional range bound, showing "Open" when absent.
pub fn format_bound(bound: Option<DateTime<Utc>>) -> String {
    bound.map_or_else(|| "Open".to_string(), format_timestamp)
}

/// Formats a duration in milliseconds as "Xh Ym", or "Xm" below an hour.
pub fn format_duration(ms: i64) -> String {
    if ms < 0 {
        return "0m".to_string();
    }
    let total_minutes = ms / 60_000;
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    if hours >= 1 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}
