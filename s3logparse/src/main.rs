use clap::Parser;
use s3logparse_core::cli::report::{ReportArgs, run_report};
use s3logparse_core::logging::{LogFormat, default_log_format, init_logging};

#[derive(Parser, Debug)]
#[command(
    name = "s3logparse",
    version,
    about = "s3logparse: extract useful information from S3 server access logs"
)]
struct Cli {
    /// Diagnostic log format on stderr (pretty on a terminal, JSON otherwise)
    #[arg(long, value_enum)]
    log_format: Option<LogFormat>,

    #[command(flatten)]
    report: ReportArgs,
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.log_format.unwrap_or_else(default_log_format));

    tracing::debug!(report = %cli.report.report, paths = cli.report.paths.len(), "starting");

    if let Err(e) = run_report(cli.report) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
