use crate::conf::Settings;
use crate::input::{collect_sources, read_sources};
use crate::report::ReportKind;
use anyhow::{Context, Result};
use clap::Args;
use std::io::{self, Write};
use std::num::NonZeroUsize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Report to produce: useragent, toptalkers, topuploaders, topdownloaders or topfiles
    #[arg(value_name = "REPORT", value_parser = str::parse::<ReportKind>)]
    pub report: ReportKind,

    /// Log files or directories to read; `-` reads standard input
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,

    /// Print at most N entries
    #[arg(long, value_name = "N")]
    pub limit: Option<NonZeroUsize>,

    /// Print skipped line counts to stderr after the report
    #[arg(long)]
    pub skipped: bool,

    /// Glob used to find log files inside directories
    #[arg(long, value_name = "GLOB")]
    pub pattern: Option<String>,

    /// Settings file (TOML)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Settings file values with command-line flags applied on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    pub limit: Option<usize>,
    pub skipped_summary: bool,
    pub pattern: String,
}

impl ReportOptions {
    pub fn resolve(args: &ReportArgs, settings: Settings) -> Self {
        Self {
            limit: args.limit.map(NonZeroUsize::get).or(settings.report.limit),
            skipped_summary: args.skipped || settings.report.skipped_summary,
            pattern: args.pattern.clone().unwrap_or(settings.input.pattern),
        }
    }
}

pub fn run_report(args: ReportArgs) -> Result<()> {
    let stdout = io::stdout();
    let stderr = io::stderr();
    run_report_to(args, &mut stdout.lock(), &mut stderr.lock())
}

/// Reads every input, runs the report and writes it to `out`. The skipped
/// line summary, when enabled, goes to `diag`.
pub fn run_report_to<W: Write, E: Write>(args: ReportArgs, out: &mut W, diag: &mut E) -> Result<()> {
    let settings = match &args.config {
        Some(path) => Settings::from_file(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };
    let options = ReportOptions::resolve(&args, settings);

    let sources = collect_sources(&args.paths, &options.pattern)?;
    let input = read_sources(&sources);

    let report = args.report.run(&input.lines);

    match report.write_to(out, options.limit) {
        Ok(()) => {}
        // `s3logparse ... | head` closing the pipe early is not a failure.
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => return Ok(()),
        Err(e) => return Err(e).context("failed to write report"),
    }

    if options.skipped_summary {
        writeln!(diag, "{}: {}", report.kind, report.skipped)
            .context("failed to write skipped line summary")?;
    }

    Ok(())
}
