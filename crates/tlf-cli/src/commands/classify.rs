//! Classify command: tabulates both algorithm verdicts per item.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::Result;
use serde::Serialize;
use tlf_core::TimelineView;

use super::util::{build_timeline, controls, format_bound, resolve_range};
use crate::Config;
use crate::cli::FilterArgs;

/// One row of JSON output.
#[derive(Debug, Serialize)]
pub struct JsonClassification {
    pub id: u32,
    pub label: String,
    pub inclusive: bool,
    pub contained: bool,
    pub inside: bool,
}

fn in_out(matched: bool) -> &'static str {
    if matched { "in" } else { "out" }
}

/// Formats the classification table.
pub fn format_table(view: &TimelineView) -> String {
    let mut output = String::new();

    writeln!(
        output,
        "Range: {} - {}",
        format_bound(view.filter.effective.start),
        format_bound(view.filter.effective.end)
    )
    .unwrap();
    writeln!(output, "Algorithm: {}", view.controls.algorithm.description()).unwrap();
    writeln!(output).unwrap();
    writeln!(
        output,
        "{:<4}{:<10}{:<11}{:<11}SELECTED",
        "ID", "LABEL", "INCLUSIVE", "CONTAINED"
    )
    .unwrap();

    for row in &view.rows {
        writeln!(
            output,
            "{:<4}{:<10}{:<11}{:<11}{}",
            row.id.get(),
            row.label,
            in_out(row.verdict.inclusive),
            in_out(row.verdict.contained),
            in_out(row.inside)
        )
        .unwrap();
    }

    let inside = view.rows.iter().filter(|row| row.inside).count();
    writeln!(output).unwrap();
    writeln!(output, "{inside} of {} items inside", view.rows.len()).unwrap();

    output
}

/// Formats the classification as JSON.
pub fn format_json(view: &TimelineView) -> Result<String> {
    let rows: Vec<_> = view
        .rows
        .iter()
        .map(|row| JsonClassification {
            id: row.id.get(),
            label: row.label.clone(),
            inclusive: row.verdict.inclusive,
            contained: row.verdict.contained,
            inside: row.inside,
        })
        .collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}

/// Runs the classify command.
pub fn run<W: Write>(writer: &mut W, config: &Config, filter: &FilterArgs, json: bool) -> Result<()> {
    let range = resolve_range(&filter.range)?;
    let timeline = build_timeline(config, range)?;
    let view = timeline.view(controls(config, filter));

    if json {
        writeln!(writer, "{}", format_json(&view)?)?;
    } else {
        write!(writer, "{}", format_table(&view))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use tlf_core::Algorithm;

    fn run_to_string(filter: &FilterArgs, json: bool) -> String {
        let mut output = Vec::new();
        run(&mut output, &Config::default(), filter, json).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_classify_closed_range_table() {
        let output = run_to_string(&FilterArgs::default(), false);
        assert_snapshot!(output, @r"
        Range: Jan 15, 09:00 - Jan 15, 17:00
        Algorithm: inclusive overlap

        ID  LABEL     INCLUSIVE  CONTAINED  SELECTED
        1   Case 1    in         out        in
        2   Case 2    out        out        out
        3   Case 3    in         out        in
        4   Case 4    in         out        in
        5   Case 5    out        out        out
        6   Case 6    in         in         in

        4 of 6 items inside
        ");
    }

    #[test]
    fn test_classify_unbounded_range_matches_nothing() {
        let filter = FilterArgs {
            open_start: true,
            open_end: true,
            ..FilterArgs::default()
        };
        let output = run_to_string(&filter, false);
        assert!(output.starts_with("Range: Open - Open\n"));
        assert!(output.contains("0 of 6 items inside"));
    }

    #[test]
    fn test_classify_json_open_start() {
        let filter = FilterArgs {
            algorithm: Some(Algorithm::FullyContained),
            open_start: true,
            ..FilterArgs::default()
        };
        let output = run_to_string(&filter, true);
        let rows: Vec<serde_json::Value> = serde_json::from_str(&output).unwrap();

        // Without a start bound only Case 2, starting after 17:00, fails overlap.
        let inclusive: Vec<bool> = rows
            .iter()
            .map(|row| row["inclusive"].as_bool().unwrap())
            .collect();
        assert_eq!(inclusive, vec![true, false, true, true, true, true]);

        let inside: Vec<bool> = rows
            .iter()
            .map(|row| row["inside"].as_bool().unwrap())
            .collect();
        assert_eq!(inside, vec![false, false, true, false, true, true]);
    }
}
