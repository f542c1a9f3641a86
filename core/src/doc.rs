//! Splicing rendered tables into a marker-delimited document region.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};

pub const START_MARKER: &str = "<!-- BENCHMARK_RESULTS -->";
pub const END_MARKER: &str = "<!-- END_BENCHMARK_RESULTS -->";

/// Replace the first marker-delimited region of `doc` (both markers
/// inclusive) with the markers wrapping `markdown`. A newline is appended
/// to `markdown` when it does not already end with one, so single tables
/// and multi-year bodies (which end with a blank line) both land flush
/// against the end marker. Later marker pairs are left untouched, which
/// keeps reruns idempotent.
///
/// A document without both markers is a configuration error, not a no-op.
pub fn splice_results(doc: &str, markdown: &str) -> Result<String> {
    let start = doc
        .find(START_MARKER)
        .ok_or_else(|| anyhow!("document has no `{START_MARKER}` marker"))?;
    let region = start + START_MARKER.len();
    let end = doc[region..]
        .find(END_MARKER)
        .map(|offset| region + offset + END_MARKER.len())
        .ok_or_else(|| anyhow!("document has no `{END_MARKER}` marker after `{START_MARKER}`"))?;

    let mut out = String::with_capacity(doc.len() + markdown.len());
    out.push_str(&doc[..start]);
    out.push_str(START_MARKER);
    out.push('\n');
    out.push_str(markdown);
    if !markdown.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(END_MARKER);
    out.push_str(&doc[end..]);
    Ok(out)
}

/// Read `path`, splice `markdown` into its marker region, and write the
/// document back in place.
pub fn update_document(path: &Path, markdown: &str) -> Result<()> {
    let doc = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let updated = splice_results(&doc, markdown)
        .with_context(|| format!("update benchmark results in {}", path.display()))?;
    fs::write(path, updated).with_context(|| format!("write {}", path.display()))?;
    tracing::debug!(path = %path.display(), "updated benchmark results");
    Ok(())
}
