use crate::report::pipeline;
use crate::report::types::Report;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The reports this tool can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    UserAgent,
    TopTalkers,
    TopUploaders,
    TopDownloaders,
    TopFiles,
}

/// What the ranked value of a report measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measure {
    Count,
    Bytes,
}

type ReportFn = fn(&[String]) -> Report;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "unsupported report '{input}' (expected one of: {expected})",
    expected = ReportKind::names().join(", ")
)]
pub struct ParseReportKindError {
    pub input: String,
}

impl ReportKind {
    pub const ALL: [ReportKind; 5] = [
        ReportKind::UserAgent,
        ReportKind::TopTalkers,
        ReportKind::TopUploaders,
        ReportKind::TopDownloaders,
        ReportKind::TopFiles,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ReportKind::UserAgent => "useragent",
            ReportKind::TopTalkers => "toptalkers",
            ReportKind::TopUploaders => "topuploaders",
            ReportKind::TopDownloaders => "topdownloaders",
            ReportKind::TopFiles => "topfiles",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|k| k.as_str()).collect()
    }

    pub fn measure(self) -> Measure {
        match self {
            ReportKind::UserAgent | ReportKind::TopFiles => Measure::Count,
            ReportKind::TopTalkers | ReportKind::TopUploaders | ReportKind::TopDownloaders => {
                Measure::Bytes
            }
        }
    }

    fn handler(self) -> ReportFn {
        match self {
            ReportKind::UserAgent => pipeline::user_agents,
            ReportKind::TopTalkers => pipeline::top_talkers,
            ReportKind::TopUploaders => pipeline::top_uploaders,
            ReportKind::TopDownloaders => pipeline::top_downloaders,
            ReportKind::TopFiles => pipeline::top_files,
        }
    }

    /// Runs this report over the full set of lines.
    pub fn run(self, lines: &[String]) -> Report {
        let report = (self.handler())(lines);

        tracing::debug!(
            report = self.as_str(),
            lines = lines.len(),
            entries = report.entries.len(),
            skipped = report.skipped.total(),
            "report computed"
        );

        report
    }
}

impl FromStr for ReportKind {
    type Err = ParseReportKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| ParseReportKindError {
                input: s.to_string(),
            })
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
