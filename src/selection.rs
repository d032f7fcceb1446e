//! Records chosen for partial (Markdown) export.
//!
//! The tracker only holds ids. Ids that no longer exist in the store are
//! treated as deselected when the selection is resolved.

use std::collections::BTreeSet;

use crate::domain::SolutionRecord;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection with the given live id set.
    pub fn select_all<I, T>(&mut self, ids: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.ids = ids.into_iter().map(Into::into).collect();
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn toggle(&mut self, id: &str) {
        if !self.ids.remove(id) {
            self.ids.insert(id.to_string());
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Forget ids that are not in `live`.
    pub fn prune(&mut self, live: &BTreeSet<String>) {
        self.ids.retain(|id| live.contains(id));
    }

    /// Selected records in collection order.
    pub fn resolve<'a>(&self, records: &'a [SolutionRecord]) -> Vec<&'a SolutionRecord> {
        records.iter().filter(|r| self.ids.contains(&r.id)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed_records;

    #[test]
    fn toggle_adds_then_removes() {
        let mut selection = Selection::new();
        selection.toggle("a");
        assert!(selection.contains("a"));
        selection.toggle("a");
        assert!(selection.is_empty());
    }

    #[test]
    fn select_all_discards_stale_ids() {
        let records = seed_records();
        let mut selection = Selection::new();
        selection.toggle("sol-gone");
        selection.select_all(records.iter().map(|r| r.id.clone()));

        let expected: BTreeSet<&str> = records.iter().map(|r| r.id.as_str()).collect();
        let actual: BTreeSet<&str> = selection.ids().collect();
        assert_eq!(actual, expected);
        assert!(!selection.contains("sol-gone"));
    }

    #[test]
    fn resolve_keeps_collection_order_and_ignores_unknown_ids() {
        let records = seed_records();
        let mut selection = Selection::new();
        for record in records.iter().rev() {
            selection.toggle(&record.id);
        }
        selection.toggle("sol-gone");

        let resolved: Vec<&str> = selection.resolve(&records).iter().map(|r| r.id.as_str()).collect();
        let expected: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(resolved, expected);
    }

    #[test]
    fn prune_drops_missing_ids() {
        let mut selection = Selection::new();
        selection.select_all(["a", "b"]);
        let live: BTreeSet<String> = ["b".to_string()].into_iter().collect();
        selection.prune(&live);
        assert_eq!(selection.ids().collect::<Vec<_>>(), vec!["b"]);
    }

    #[test]
    fn clear_empties_selection() {
        let mut selection = Selection::new();
        selection.select_all(["a", "b"]);
        selection.clear();
        assert_eq!(selection.len(), 0);
        assert!(selection.resolve(&seed_records()).is_empty());
    }
}
