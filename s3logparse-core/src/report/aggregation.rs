use ahash::RandomState;
use std::collections::HashMap;

/// Running totals keyed by a field value.
///
/// Entries are kept in first-insertion order so that ranking can break ties
/// deterministically.
#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    positions: HashMap<String, usize, RandomState>,
    entries: Vec<(String, u64)>,
}

impl Aggregation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `amount` to the running value for `key`, starting it at `amount`
    /// the first time the key is seen.
    pub fn accumulate(&mut self, key: &str, amount: u64) {
        match self.positions.get(key) {
            Some(&i) => {
                let value = &mut self.entries[i].1;
                *value = value.saturating_add(amount);
            }
            None => {
                self.positions.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), amount));
            }
        }
    }

    /// Count mode.
    pub fn increment(&mut self, key: &str) {
        self.accumulate(key, 1);
    }

    /// Entries in first-insertion order.
    pub(crate) fn into_entries(self) -> Vec<(String, u64)> {
        self.entries
    }
}
