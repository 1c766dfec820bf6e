//! The report functions.
//!
//! Each one makes a single pass over every line:
//!
//! raw line
//! LogRecord (tokenized)
//! Aggregation (count or byte sum)
//! rank
//! Report
//!
//! Lines that cannot contribute are counted in the report's `SkipSummary`
//! and otherwise ignored.

use crate::report::aggregation::Aggregation;
use crate::report::kind::ReportKind;
use crate::report::rank::rank;
use crate::report::record::{Field, LogRecord, PLACEHOLDER, parse_bytes};
use crate::report::skip::{SkipReason, SkipSummary};
use crate::report::tokenize::Tokenization;
use crate::report::types::Report;

/// Requests per user agent.
pub fn user_agents(lines: &[String]) -> Report {
    count_by_field(ReportKind::UserAgent, lines, Field::UserAgent)
}

/// Requests per object key.
pub fn top_files(lines: &[String]) -> Report {
    count_by_field(ReportKind::TopFiles, lines, Field::ObjectKey)
}

/// Bytes sent per source IP.
pub fn top_talkers(lines: &[String]) -> Report {
    sum_bytes_by_source(ReportKind::TopTalkers, lines, None)
}

/// Bytes sent per source IP, `GET` requests only.
pub fn top_downloaders(lines: &[String]) -> Report {
    sum_bytes_by_source(ReportKind::TopDownloaders, lines, Some("GET"))
}

/// Bytes sent per source IP, `POST` requests only.
pub fn top_uploaders(lines: &[String]) -> Report {
    sum_bytes_by_source(ReportKind::TopUploaders, lines, Some("POST"))
}

//-----------------------------------------------------------------------------
// Shared passes
//-----------------------------------------------------------------------------

fn count_by_field(kind: ReportKind, lines: &[String], field: Field) -> Report {
    let mut aggregation = Aggregation::new();
    let mut skipped = SkipSummary::default();

    for line in lines {
        let outcome = LogRecord::parse(line, field.tokenization())
            .map_err(|_| SkipReason::Unparseable)
            .and_then(|record| {
                let value = record.field(field).ok_or(SkipReason::MissingField)?;
                if value == PLACEHOLDER {
                    return Err(SkipReason::Placeholder);
                }
                aggregation.increment(value);
                Ok(())
            });

        if let Err(reason) = outcome {
            skipped.record(reason);
        }
    }

    finish(kind, aggregation, skipped)
}

/// `verb` is matched as a prefix of the request column, case-sensitive.
fn sum_bytes_by_source(kind: ReportKind, lines: &[String], verb: Option<&str>) -> Report {
    let mut aggregation = Aggregation::new();
    let mut skipped = SkipSummary::default();

    for line in lines {
        let outcome = LogRecord::parse(line, Tokenization::Quoted)
            .map_err(|_| SkipReason::Unparseable)
            .and_then(|record| {
                let (Some(source_ip), Some(bytes_sent)) = (record.source_ip(), record.bytes_sent())
                else {
                    return Err(SkipReason::MissingField);
                };
                let bytes = parse_bytes(bytes_sent).ok_or(SkipReason::NonNumeric)?;

                if let Some(verb) = verb {
                    let request = record.request().ok_or(SkipReason::MissingField)?;
                    if !request.starts_with(verb) {
                        return Err(SkipReason::VerbMismatch);
                    }
                }

                aggregation.accumulate(source_ip, bytes);
                Ok(())
            });

        if let Err(reason) = outcome {
            skipped.record(reason);
        }
    }

    finish(kind, aggregation, skipped)
}

fn finish(kind: ReportKind, aggregation: Aggregation, skipped: SkipSummary) -> Report {
    Report {
        kind,
        entries: rank(aggregation),
        skipped,
    }
}
