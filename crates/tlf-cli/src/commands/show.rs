//! Show command: renders the classified timeline as text lanes.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::Result;
use tlf_core::layout::Bar;
use tlf_core::TimelineView;

use super::util::{build_timeline, controls, format_bound, format_timestamp, resolve_range};
use crate::Config;
use crate::cli::FilterArgs;

const LABEL_WIDTH: usize = 14;
const BACKGROUND: char = '·';
const FILTER_FILL: char = '═';
const INSIDE_FILL: char = '█';
const OUTSIDE_FILL: char = '░';

/// Maps a window percentage to a cell boundary in `0..=width`.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn cell(percent: f64, width: usize) -> usize {
    let scaled = (percent / 100.0 * width as f64).round();
    if scaled <= 0.0 {
        0
    } else if scaled >= width as f64 {
        width
    } else {
        scaled as usize
    }
}

/// Draws `bar` into a lane of `width` cells.
///
/// Bars narrower than a cell still get one cell when they start inside the
/// window. Parts outside the window are clipped.
pub fn render_lane(bar: &Bar, width: usize, fill: char) -> String {
    let start = cell(bar.left, width);
    let mut end = cell(bar.right(), width);
    if end <= start && start < width && bar.width >= 0.0 && bar.left >= 0.0 {
        end = start + 1;
    }

    (0..width)
        .map(|i| if (start..end).contains(&i) { fill } else { BACKGROUND })
        .collect()
}

fn verdict_word(matched: bool) -> &'static str {
    if matched { "in" } else { "out" }
}

/// Formats the human-readable timeline.
pub fn format_timeline(view: &TimelineView, width: usize) -> String {
    let mut output = String::new();

    writeln!(
        output,
        "TIMELINE: {} - {}",
        format_timestamp(view.window.start()),
        format_timestamp(view.window.end())
    )
    .unwrap();
    writeln!(output, "Algorithm: {}", view.controls.algorithm.description()).unwrap();
    writeln!(output).unwrap();

    let filter_lane = render_lane(&view.filter.bar, width, FILTER_FILL);
    writeln!(
        output,
        "{:<LABEL_WIDTH$}{filter_lane}  {} - {}",
        "Filter range",
        format_bound(view.filter.effective.start),
        format_bound(view.filter.effective.end)
    )
    .unwrap();

    for row in &view.rows {
        let fill = if row.inside { INSIDE_FILL } else { OUTSIDE_FILL };
        let lane = render_lane(&row.bar, width, fill);
        writeln!(
            output,
            "{:<LABEL_WIDTH$}{lane}  A1:{} | A2:{}",
            row.label,
            verdict_word(row.verdict.inclusive),
            verdict_word(row.verdict.contained)
        )
        .unwrap();
    }

    writeln!(output).unwrap();
    writeln!(
        output,
        "Legend: {INSIDE_FILL} inside  {OUTSIDE_FILL} outside  {FILTER_FILL} filter range"
    )
    .unwrap();

    output
}

/// Runs the show command.
pub fn run<W: Write>(writer: &mut W, config: &Config, filter: &FilterArgs, json: bool) -> Result<()> {
    let range = resolve_range(&filter.range)?;
    let timeline = build_timeline(config, range)?;
    let view = timeline.view(controls(config, filter));

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&view)?)?;
    } else {
        write!(writer, "{}", format_timeline(&view, config.lane_width()))?;
    }

    Ok(())
}
