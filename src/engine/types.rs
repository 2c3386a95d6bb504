use std::collections::HashMap;

use derive_more::{From, Into};

/// In-memory fruit stock, keyed by fruit name. Quantities are unsigned, so the
/// table can never hold a negative amount.
#[derive(Debug, Clone, PartialEq, Eq, From, Into)]
pub struct Storage(HashMap<String, u64>);

impl Default for Storage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage {
    pub fn new() -> Self {
        Self(HashMap::new())
    }
    pub fn fruits(&self) -> &HashMap<String, u64> {
        &self.0
    }
    /// Replaces the whole table.
    pub fn set_fruits(&mut self, fruits: HashMap<String, u64>) {
        self.0 = fruits;
    }
    pub fn quantity(&self, fruit: &str) -> Option<u64> {
        self.0.get(fruit).copied()
    }
    pub fn set_quantity(&mut self, fruit: impl Into<String>, quantity: u64) {
        self.0.insert(fruit.into(), quantity);
    }
    /// Rows sorted by fruit name, for stable reporting.
    pub fn sorted(&self) -> Vec<(&str, u64)> {
        let mut rows: Vec<_> = self.0.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        rows.sort_unstable_by(|a, b| a.0.cmp(b.0));
        rows
    }
}

impl FromIterator<(String, u64)> for Storage {
    /// Later entries for the same fruit overwrite earlier ones.
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
