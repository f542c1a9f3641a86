//! Parsing of Criterion timing output into a year/day/part table.
//!
//! Only lines of the shape `dayN part P  time: [low µs mid µs high µs]`
//! carry data; everything else the runner prints (warm-up notices, outlier
//! summaries, compiler output) is skipped without comment.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

/// Mid estimates for one day, keyed by part label (`part1`, `part2`).
pub type PartTimings = BTreeMap<String, String>;

/// Per-day timings for one benchmark run.
pub type DayTimings = BTreeMap<String, PartTimings>;

/// Timing line emitted by the Criterion harness, e.g.
/// `day7 part 2  time:   [12.345 µs 12.401 µs 12.900 µs]`.
/// The number token is digits-and-dots only: no thousands separators, no
/// scientific notation, and a trailing bare dot is accepted.
static TIMING_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(day\d+) part (\d+)\s+time:\s+\[\s*([\d.]+)\s*µs\s+([\d.]+)\s*µs\s+([\d.]+)\s*µs\s*\]",
    )
    .expect("timing line pattern")
});

/// Scan raw runner output and collect the mid estimate of every timing
/// line, grouped by day. Low and high bounds are discarded.
pub fn parse_run_output(raw: &str) -> DayTimings {
    let mut days = DayTimings::new();
    for line in raw.lines() {
        if let Some(caps) = TIMING_LINE.captures(line) {
            let day = caps[1].to_string();
            let part = format!("part{}", &caps[2]);
            let mid = caps[4].to_string();
            days.entry(day).or_default().insert(part, mid);
        }
    }
    days
}

/// Timings for a whole suite, grouped by year then day. `BTreeMap` keys
/// are plain strings, so iteration order is ascending string order — the
/// order the rendered tables use.
#[derive(Debug, Default)]
pub struct TimingTable {
    years: BTreeMap<String, DayTimings>,
}

impl TimingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse one run's output and file its records under `year`. Returns
    /// the number of timing entries recorded from this run.
    pub fn record_run(&mut self, year: &str, raw: &str) -> usize {
        let days = parse_run_output(raw);
        let recorded = days.values().map(|parts| parts.len()).sum();
        let slot = self.years.entry(year.to_string()).or_default();
        for (day, parts) in days {
            slot.entry(day).or_default().extend(parts);
        }
        tracing::debug!(year, recorded, "recorded benchmark run");
        recorded
    }

    /// Years and their day timings, in ascending string order.
    pub fn years(&self) -> impl Iterator<Item = (&str, &DayTimings)> {
        self.years.iter().map(|(year, days)| (year.as_str(), days))
    }
}
