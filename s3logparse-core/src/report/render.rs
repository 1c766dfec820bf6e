use crate::report::kind::Measure;
use crate::report::rank::RankedEntry;
use crate::report::size::format_size;

pub fn render_entry(measure: Measure, entry: &RankedEntry) -> String {
    match measure {
        Measure::Count => format!("{} - {}", entry.value, entry.key),
        Measure::Bytes => format!("{} - {}", format_size(entry.value), entry.key),
    }
}
