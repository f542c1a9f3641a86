//! Year discovery and external benchmark invocation.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result, bail};

/// Year identifier from a `year<digits>.<ext>` filename, if it matches.
pub(crate) fn year_from_filename(name: &str) -> Option<&str> {
    let path = Path::new(name);
    path.extension()?;
    let stem = path.file_stem()?.to_str()?;
    let digits = stem.strip_prefix("year")?;
    (!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())).then_some(digits)
}

/// Scan `dir` (non-recursively) for `year<digits>.<ext>` benchmark
/// definitions and return the deduplicated set of years, ascending.
pub(crate) fn discover_years(dir: &Path) -> Result<BTreeSet<String>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("read benchmark directory {}", dir.display()))?;

    let mut years = BTreeSet::new();
    for entry in entries.filter_map(|entry| entry.ok()) {
        if !entry.path().is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str()
            && let Some(year) = year_from_filename(name)
        {
            years.insert(year.to_string());
        }
    }
    Ok(years)
}

/// Run the benchmark suite for one year and return its combined
/// stdout/stderr text. A failing run is fatal: the captured output is
/// echoed for diagnosis and the error carries the exit status.
pub(crate) fn run_benchmark(runner: &str, year: &str) -> Result<String> {
    let bench_target = format!("year{year}");
    let output = Command::new(runner)
        .args(["bench", "--bench", &bench_target])
        .output()
        .with_context(|| format!("failed to spawn `{runner} bench --bench {bench_target}`"))?;

    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));

    if !output.status.success() {
        eprintln!("benchmark run for year {year} failed:\n{combined}");
        bail!(
            "`{runner} bench --bench {bench_target}` exited with {}",
            output.status
        );
    }
    tracing::debug!(year, bytes = combined.len(), "captured benchmark output");
    Ok(combined)
}
