//! Markdown rendering of parsed benchmark timings.

use std::fmt::Write as _;

use anyhow::{Context, Result};

use crate::parse::{DayTimings, PartTimings, TimingTable};

const TABLE_HEADER: &str = "\
| Day Number | Part 1 Time (µs) | Part 2 Time (µs) | Total Time (µs) |
|------------|------------------|------------------|-----------------|";

const MISSING: &str = "N/A";

// Fixed trailing pad carried over from the historical table layout. Cells
// are not numerically aligned.
const CELL_PAD: &str = "          ";

/// Render one run's timings as a Markdown table, one row per day in
/// ascending string order of the day key.
pub fn render_day_table(days: &DayTimings) -> Result<String> {
    let mut out = String::from(TABLE_HEADER);
    for (day, parts) in days {
        out.push('\n');
        out.push_str(&render_row(day, parts)?);
    }
    Ok(out)
}

/// Render the whole suite: a `### Year <year>` heading and table per
/// year, each table followed by a blank line.
pub fn render_year_tables(table: &TimingTable) -> Result<String> {
    let mut out = String::new();
    for (year, days) in table.years() {
        let _ = writeln!(out, "### Year {year}");
        out.push_str(&render_day_table(days)?);
        out.push_str("\n\n");
    }
    Ok(out)
}

fn render_row(day: &str, parts: &PartTimings) -> Result<String> {
    let part1 = parts.get("part1").map(String::as_str);
    let part2 = parts.get("part2").map(String::as_str);
    let total = total_cell(day, part1, part2)?;
    let day_label = day.strip_prefix("day").unwrap_or(day);
    Ok(format!(
        "| {day_label}{CELL_PAD}| {}{CELL_PAD}| {}{CELL_PAD}| {total}{CELL_PAD}|",
        part1.unwrap_or(MISSING),
        part2.unwrap_or(MISSING),
    ))
}

/// Sum of the two mid estimates, two decimals. `N/A` unless both parts
/// were recorded; no total is derived from a single part.
fn total_cell(day: &str, part1: Option<&str>, part2: Option<&str>) -> Result<String> {
    match (part1, part2) {
        (Some(p1), Some(p2)) => {
            let sum = parse_micros(day, p1)? + parse_micros(day, p2)?;
            Ok(format!("{sum:.2}"))
        }
        _ => Ok(MISSING.to_string()),
    }
}

fn parse_micros(day: &str, time: &str) -> Result<f64> {
    time.parse::<f64>()
        .with_context(|| format!("malformed time `{time}` recorded for {day}"))
}
