//! Field values entered by the user.
//!
//! A `DraftRecord` holds the values of the form currently being filled. Only
//! fields the user touched are present, and a touched field may hold an empty
//! string (the user cleared it). A `SubmittedRecord` is a frozen draft kept in
//! the `SubmissionStore`; it can only become editable again by turning it back
//! into a draft.
//!
//! Neither type remembers which schema it was filled under.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DraftRecord {
    values: BTreeMap<String, String>,
}

impl DraftRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: &str, value: impl Into<String>) {
        self.values.insert(field.to_string(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    /// `true` when the field was touched and holds a non-empty value.
    pub fn is_filled(&self, field: &str) -> bool {
        self.get(field).is_some_and(|value| !value.is_empty())
    }

    /// `true` when no field holds a non-empty value.
    pub fn is_blank(&self) -> bool {
        self.values.values().all(String::is_empty)
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for DraftRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmittedRecord(DraftRecord);

impl SubmittedRecord {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field)
    }

    pub fn values(&self) -> &DraftRecord {
        &self.0
    }

    pub fn into_draft(self) -> DraftRecord {
        self.0
    }
}

impl From<DraftRecord> for SubmittedRecord {
    fn from(draft: DraftRecord) -> Self {
        Self(draft)
    }
}
