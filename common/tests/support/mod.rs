//! Shared helpers for the form manager integration tests.
use common::forms::FormManager;

/// A manager over the built-in registry with `schema` selected.
#[allow(dead_code)]
pub fn manager_editing(schema: &str) -> FormManager {
    let mut manager = FormManager::default();
    manager
        .select_schema(schema)
        .expect("built-in schema should be selectable");
    manager
}

/// Fills `values` into the active schema, panicking on rejected fields.
#[allow(dead_code)]
pub fn fill(manager: &mut FormManager, values: &[(&str, &str)]) {
    for (field, value) in values {
        manager
            .edit_field(field, value.to_string())
            .expect("field should belong to the active schema");
    }
}

/// First names of the stored user records, in table order.
#[allow(dead_code)]
pub fn first_names(manager: &FormManager) -> Vec<String> {
    manager
        .store()
        .iter()
        .filter_map(|record| record.get("firstName").map(str::to_string))
        .collect()
}

/// Submits a complete `userInfo` record with the given first name.
#[allow(dead_code)]
pub fn submit_user(manager: &mut FormManager, first_name: &str) {
    fill(manager, &[("firstName", first_name), ("lastName", "Test")]);
    manager.submit().expect("complete user record should submit");
}
