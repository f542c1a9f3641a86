use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use benchtab_core::{doc, parse, report};
use clap::{Parser, Subcommand};

mod runner;


#[derive(Debug, Parser)]
#[command(
    name = "benchtab",
    author,
    version,
    about = "Keeps benchmark result tables in project docs up to date",
    long_about = None
)]
struct CliArgs {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse an existing benchmark log and refresh the table in a document.
    Inject {
        /// Raw benchmark runner output to parse
        #[arg(value_name = "BENCH_OUTPUT")]
        bench_output: PathBuf,
        /// Document carrying the results marker block
        #[arg(value_name = "DOC")]
        doc: PathBuf,
    },
    /// Benchmark every discovered year and refresh the document.
    Update {
        /// Directory scanned for `year<N>` benchmark definitions
        #[arg(long, value_name = "DIR", default_value = "benches")]
        bench_dir: PathBuf,
        /// Document to update
        #[arg(long, value_name = "FILE", default_value = "README.md")]
        doc: PathBuf,
        /// Benchmark runner executable
        #[arg(long, value_name = "CMD", default_value = "cargo")]
        runner: String,
    },
}

fn main() -> Result<()> {
    init_tracing();

    match CliArgs::parse().command {
        Commands::Inject { bench_output, doc } => inject(&bench_output, &doc),
        Commands::Update { bench_dir, doc, runner } => update(&bench_dir, &doc, &runner),
    }
}

/// Single-run variant: the benchmark log already exists on disk.
fn inject(bench_output: &Path, doc_path: &Path) -> Result<()> {
    let raw = fs::read_to_string(bench_output)
        .with_context(|| format!("read benchmark output {}", bench_output.display()))?;
    let days = parse::parse_run_output(&raw);
    let table = report::render_day_table(&days)?;
    doc::update_document(doc_path, &table)
}

/// Multi-year variant: discover years, benchmark each in turn, splice the
/// aggregated tables into the document.
fn update(bench_dir: &Path, doc_path: &Path, runner_cmd: &str) -> Result<()> {
    let years = runner::discover_years(bench_dir)?;
    if years.is_empty() {
        bail!("no year benchmarks found under {}", bench_dir.display());
    }

    let mut table = parse::TimingTable::new();
    for year in &years {
        println!("Benchmarking year {year}...");
        let raw = runner::run_benchmark(runner_cmd, year)?;
        table.record_run(year, &raw);
    }

    let body = report::render_year_tables(&table)?;
    doc::update_document(doc_path, &body)
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
