//! Search history. Kept in memory only; nothing here touches the store.

use crate::model::SearchEntry;

#[derive(Debug, Clone, Default)]
pub struct SearchHistory {
    entries: Vec<SearchEntry>,
}

impl SearchHistory {
    pub fn new(entries: Vec<SearchEntry>) -> Self {
        let mut history = Self { entries };
        history.sort();
        history
    }

    /// Newest first.
    pub fn entries(&self) -> &[SearchEntry] {
        &self.entries
    }

    pub fn record(&mut self, entry: SearchEntry) {
        self.entries.push(entry);
        self.sort();
    }

    /// Distinct categories in the order they first appear.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if !seen.contains(&entry.category.as_str()) {
                seen.push(&entry.category);
            }
        }
        seen
    }

    /// All entries when `category` is `None`.
    pub fn filter(&self, category: Option<&str>) -> Vec<&SearchEntry> {
        self.entries
            .iter()
            .filter(|e| category.map_or(true, |c| e.category == c))
            .collect()
    }

    /// Removes every entry equal to `entry`. Returns whether anything was removed.
    pub fn remove(&mut self, entry: &SearchEntry) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e != entry);
        self.entries.len() != before
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    fn sort(&mut self) {
        self.entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    }
}
