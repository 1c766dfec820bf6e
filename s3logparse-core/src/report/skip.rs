use std::fmt;

/// Why a line did not contribute to a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Unbalanced quotes or a dangling escape.
    Unparseable,
    /// Too few tokens for a field the report reads.
    MissingField,
    /// The key field holds `-`.
    Placeholder,
    /// The bytes column is not a plain integer.
    NonNumeric,
    /// The request verb does not match the report.
    VerbMismatch,
}

impl SkipReason {
    pub const ALL: [SkipReason; 5] = [
        SkipReason::Unparseable,
        SkipReason::MissingField,
        SkipReason::Placeholder,
        SkipReason::NonNumeric,
        SkipReason::VerbMismatch,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SkipReason::Unparseable => "unparseable",
            SkipReason::MissingField => "missing_field",
            SkipReason::Placeholder => "placeholder",
            SkipReason::NonNumeric => "non_numeric",
            SkipReason::VerbMismatch => "verb_mismatch",
        }
    }

    const fn slot(self) -> usize {
        match self {
            SkipReason::Unparseable => 0,
            SkipReason::MissingField => 1,
            SkipReason::Placeholder => 2,
            SkipReason::NonNumeric => 3,
            SkipReason::VerbMismatch => 4,
        }
    }
}

/// Per-reason count of lines left out of a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkipSummary {
    counts: [u64; 5],
}

impl SkipSummary {
    pub fn record(&mut self, reason: SkipReason) {
        self.counts[reason.slot()] += 1;
    }

    pub fn count(&self, reason: SkipReason) -> u64 {
        self.counts[reason.slot()]
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Non-zero counts only.
    pub fn iter(&self) -> impl Iterator<Item = (SkipReason, u64)> + '_ {
        SkipReason::ALL
            .into_iter()
            .map(|r| (r, self.count(r)))
            .filter(|(_, c)| *c > 0)
    }
}

impl fmt::Display for SkipSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "skipped {} line(s)", self.total())?;
        let mut first = true;
        for (reason, count) in self.iter() {
            f.write_str(if first { ": " } else { ", " })?;
            write!(f, "{}={}", reason.as_str(), count)?;
            first = false;
        }
        Ok(())
    }
}
