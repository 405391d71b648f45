//! Window command: prints the derived display window.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;
use tlf_core::DisplayWindow;

use super::util::{build_timeline, format_duration, format_timestamp, resolve_range};
use crate::Config;
use crate::cli::RangeArgs;

/// JSON window structure.
#[derive(Debug, Serialize)]
pub struct JsonWindow {
    pub start: String,
    pub end: String,
    pub span_ms: i64,
    pub margin_ms: i64,
}

/// Formats the window as a single human-readable line.
pub fn format_window(window: &DisplayWindow) -> String {
    format!(
        "Window: {} - {} ({})",
        format_timestamp(window.start()),
        format_timestamp(window.end()),
        format_duration(window.span().num_milliseconds())
    )
}

/// Runs the window command.
pub fn run<W: Write>(writer: &mut W, config: &Config, range: &RangeArgs, json: bool) -> Result<()> {
    let range = resolve_range(range)?;
    let timeline = build_timeline(config, range)?;
    let window = timeline.window();

    if json {
        let report = JsonWindow {
            start: window.start().to_rfc3339(),
            end: window.end().to_rfc3339(),
            span_ms: window.span().num_milliseconds(),
            margin_ms: config.margin_ms,
        };
        writeln!(writer, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        writeln!(writer, "{}", format_window(window))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_for_demo_dataset() {
        let mut output = Vec::new();
        run(&mut output, &Config::default(), &RangeArgs::default(), false).unwrap();
        let output = String::from_utf8(output).unwrap();
        assert_eq!(output, "Window: Jan 14, 04:00 - Jan 16, 22:00 (66h 0m)\n");
    }

    #[test]
    fn test_window_grows_with_range_override() {
        let range = RangeArgs {
            from: Some("2026-01-13T00:00:00Z".to_string()),
            to: None,
        };
        let config = Config {
            margin_ms: 3_600_000,
            ..Config::default()
        };
        let mut output = Vec::new();
        run(&mut output, &config, &range, true).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value["start"], "2026-01-12T23:00:00+00:00");
        assert_eq!(value["end"], "2026-01-15T23:00:00+00:00");
        assert_eq!(value["margin_ms"], 3_600_000);
    }

    #[test]
    fn test_window_zero_margin_still_valid_for_demo() {
        let config = Config {
            margin_ms: 0,
            ..Config::default()
        };
        let mut output = Vec::new();
        run(&mut output, &config, &RangeArgs::default(), false).unwrap();
        let output = String::from_utf8(output).unwrap();
        assert_eq!(output, "Window: Jan 15, 04:00 - Jan 15, 22:00 (18h 0m)\n");
    }
}
