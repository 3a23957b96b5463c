//! Progress and required-field checks derived from a draft.
//!
//! Nothing here is stored: the form manager recomputes both values from the
//! active schema and the current draft whenever the view asks for them.

use crate::model::record::DraftRecord;
use crate::model::schema::FormSchema;

/// Percentage of the schema's fields holding a non-empty value, rounded half
/// away from zero. Every field counts, required or not.
///
/// Draft entries that are not fields of `schema` are ignored, so the result
/// stays within `0..=100` even when a record from another schema was loaded
/// for editing. A schema without fields reports 0.
pub fn progress(schema: &FormSchema, draft: &DraftRecord) -> u8 {
    let total = schema.fields.len();
    if total == 0 {
        return 0;
    }
    let filled = schema
        .fields
        .iter()
        .filter(|field| draft.is_filled(&field.name))
        .count();
    (filled as f64 * 100.0 / total as f64).round() as u8
}

/// Names of the required fields that have no non-empty value, in schema order.
pub fn missing_required(schema: &FormSchema, draft: &DraftRecord) -> Vec<String> {
    schema
        .required_fields()
        .filter(|field| !draft.is_filled(&field.name))
        .map(|field| field.name.clone())
        .collect()
}
