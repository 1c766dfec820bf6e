use crate::report::aggregation::Aggregation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub key: String,
    pub value: u64,
}

/// Orders entries by value, largest first. `sort_by` is stable, so equal
/// values stay in the order their keys were first aggregated.
pub fn rank(aggregation: Aggregation) -> Vec<RankedEntry> {
    let mut ranked: Vec<RankedEntry> = aggregation
        .into_entries()
        .into_iter()
        .map(|(key, value)| RankedEntry { key, value })
        .collect();

    ranked.sort_by(|a, b| b.value.cmp(&a.value));
    ranked
}
