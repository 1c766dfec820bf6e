use crate::report::kind::{Measure, ReportKind};
use crate::report::rank::RankedEntry;
use crate::report::render::render_entry;
use crate::report::skip::SkipSummary;
use std::io::{self, Write};

/// A finished report: ranked entries plus what was left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub kind: ReportKind,
    pub entries: Vec<RankedEntry>,
    pub skipped: SkipSummary,
}

impl Report {
    pub fn measure(&self) -> Measure {
        self.kind.measure()
    }

    /// Rendered output lines, best first, without trailing newlines.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        let measure = self.measure();
        self.entries.iter().map(move |e| render_entry(measure, e))
    }

    /// Writes up to `limit` rendered lines (all of them when `None`).
    pub fn write_to<W: Write>(&self, out: &mut W, limit: Option<usize>) -> io::Result<()> {
        for line in self.lines().take(limit.unwrap_or(usize::MAX)) {
            writeln!(out, "{line}")?;
        }
        out.flush()
    }
}
