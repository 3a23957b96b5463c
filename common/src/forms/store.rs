use serde::{Deserialize, Serialize};

use crate::model::record::SubmittedRecord;

/// Accepted records in submission order.
///
/// The position of a record is its only identity: removing a record shifts
/// every later record down by one. Out of range positions are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionStore {
    records: Vec<SubmittedRecord>,
}

impl SubmissionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `record` at the end. Duplicates are kept.
    pub fn append(&mut self, record: SubmittedRecord) {
        self.records.push(record);
    }

    /// Removes and returns the record at `index`, or `None` when out of range.
    pub fn delete_at(&mut self, index: usize) -> Option<SubmittedRecord> {
        (index < self.records.len()).then(|| self.records.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&SubmittedRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SubmittedRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::record::DraftRecord;

    fn record(name: &str) -> SubmittedRecord {
        SubmittedRecord::from([("firstName", name)].into_iter().collect::<DraftRecord>())
    }

    #[test]
    fn delete_shifts_later_records() {
        let mut store = SubmissionStore::new();
        for name in ["a", "b", "c"] {
            store.append(record(name));
        }

        let removed = store.delete_at(1).unwrap();
        assert_eq!(removed.get("firstName"), Some("b"));
        let left: Vec<_> = store.iter().filter_map(|r| r.get("firstName")).collect();
        assert_eq!(left, vec!["a", "c"]);
    }

    #[test]
    fn out_of_range_delete_is_ignored() {
        let mut store = SubmissionStore::new();
        assert!(store.delete_at(0).is_none());
        store.append(record("a"));
        assert!(store.delete_at(1).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn duplicates_are_kept() {
        let mut store = SubmissionStore::new();
        store.append(record("a"));
        store.append(record("a"));
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(0), store.get(1));
    }
}
