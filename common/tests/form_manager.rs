//! End-to-end behaviour of the form manager over the built-in schemas.
mod support;

use common::forms::{FormError, FormEvent, FormManager, Outcome, Selection};
use common::model::record::DraftRecord;
use common::registry::SchemaRegistry;
use support::{fill, first_names, manager_editing, submit_user};

#[test]
fn test_user_info_scenario() {
    let mut manager = manager_editing("userInfo");
    fill(&mut manager, &[("firstName", "Ada"), ("lastName", "Lovelace")]);
    assert_eq!(manager.progress(), 67);

    let outcome = manager.submit().unwrap();
    assert_eq!(outcome, Outcome::Submitted { index: 0 });
    assert_eq!(manager.store().len(), 1);
    let stored = manager.store().get(0).unwrap();
    assert_eq!(stored.get("firstName"), Some("Ada"));
    assert_eq!(stored.get("lastName"), Some("Lovelace"));
    assert_eq!(stored.get("age"), None);

    assert!(manager.draft().is_empty());
    assert_eq!(manager.progress(), 0);
    assert!(manager.error().is_none());
    assert_eq!(manager.selection(), &Selection::Editing("userInfo".into()));
}

#[test]
fn test_payment_info_with_card_number_only_fails() {
    let mut manager = manager_editing("paymentInfo");
    fill(&mut manager, &[("cardNumber", "4111111111111111")]);

    let err = manager.submit().unwrap_err();
    match &err {
        FormError::MissingRequired { fields } => {
            assert_eq!(fields, &vec!["expiryDate", "cvv", "cardholderName"]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(
        manager.error().map(ToString::to_string),
        Some("Please fill all required fields.".to_string())
    );
    assert!(manager.store().is_empty());
    assert_eq!(manager.progress(), 25);
}

#[test]
fn test_successful_submit_after_failure_clears_error() {
    let mut manager = manager_editing("paymentInfo");
    fill(&mut manager, &[("cardNumber", "4111111111111111")]);
    manager.submit().unwrap_err();
    assert!(manager.error().is_some());

    fill(
        &mut manager,
        &[("expiryDate", "2030-01-01"), ("cvv", "123"), ("cardholderName", "Ada Lovelace")],
    );
    // Filling the missing fields alone does not dismiss the banner.
    assert!(manager.error().is_some());

    assert_eq!(manager.submit(), Ok(Outcome::Submitted { index: 0 }));
    assert!(manager.error().is_none());
    assert!(manager.draft().is_empty());
    assert_eq!(manager.progress(), 0);
    assert_eq!(manager.store().len(), 1);
    assert_eq!(manager.store().get(0).unwrap().get("cvv"), Some("123"));
}

#[test]
fn test_progress_for_every_subset_of_every_schema() {
    let registry = SchemaRegistry::builtin();
    for schema in registry.iter() {
        let total = schema.fields.len();
        for mask in 0u32..(1 << total) {
            let mut manager = manager_editing(schema.name.as_str());
            let mut filled = 0;
            for (bit, field) in schema.fields.iter().enumerate() {
                if mask & (1 << bit) != 0 {
                    manager.edit_field(&field.name, "x".to_string()).unwrap();
                    filled += 1;
                }
            }
            let expected = (filled as f64 * 100.0 / total as f64).round() as u8;
            assert_eq!(manager.progress(), expected, "{} mask {:b}", schema.name, mask);
        }
    }
}

#[test]
fn test_progress_counts_optional_fields_and_ignores_cleared_ones() {
    let mut manager = manager_editing("addressInfo");
    fill(&mut manager, &[("zipCode", "73301")]);
    assert_eq!(manager.progress(), 25);
    fill(&mut manager, &[("zipCode", "")]);
    assert_eq!(manager.progress(), 0);
}

#[test]
fn test_submitted_record_equals_draft() {
    let mut manager = manager_editing("addressInfo");
    fill(
        &mut manager,
        &[("street", "1 Main St"), ("city", "Austin"), ("state", "Texas"), ("zipCode", "")],
    );
    let draft_before = manager.draft().clone();
    manager.submit().unwrap();

    assert_eq!(manager.store().len(), 1);
    assert_eq!(manager.store().get(0).unwrap().values(), &draft_before);
}

#[test]
fn test_delete_preserves_order() {
    let mut manager = manager_editing("userInfo");
    for name in ["a", "b", "c", "d"] {
        submit_user(&mut manager, name);
    }

    assert_eq!(manager.handle(FormEvent::DeleteRecord(1)), Ok(Outcome::RecordDeleted));
    assert_eq!(first_names(&manager), vec!["a", "c", "d"]);
    assert_eq!(manager.handle(FormEvent::DeleteRecord(3)), Ok(Outcome::Ignored));
    assert_eq!(manager.store().len(), 3);
}

#[test]
fn test_edit_then_resubmit_moves_record_to_end() {
    let mut manager = manager_editing("userInfo");
    for name in ["a", "b", "c"] {
        submit_user(&mut manager, name);
    }

    assert_eq!(manager.handle(FormEvent::EditRecord(0)), Ok(Outcome::RecordLoaded));
    assert_eq!(first_names(&manager), vec!["b", "c"]);
    assert_eq!(manager.draft().get("firstName"), Some("a"));
    assert_eq!(manager.progress(), 67);

    manager
        .handle(FormEvent::EditField {
            field: "firstName".into(),
            value: "A.".into(),
        })
        .unwrap();
    assert_eq!(manager.handle(FormEvent::Submit), Ok(Outcome::Submitted { index: 2 }));
    assert_eq!(first_names(&manager), vec!["b", "c", "A."]);
}

#[test]
fn test_duplicate_submissions_are_kept() {
    let mut manager = manager_editing("userInfo");
    submit_user(&mut manager, "Ada");
    submit_user(&mut manager, "Ada");
    assert_eq!(first_names(&manager), vec!["Ada", "Ada"]);
}

#[test]
fn test_edit_keeps_current_schema_for_foreign_record() {
    let mut manager = manager_editing("userInfo");
    submit_user(&mut manager, "Ada");
    manager.select_schema("paymentInfo").unwrap();

    manager.handle(FormEvent::EditRecord(0)).unwrap();
    assert_eq!(manager.selection(), &Selection::Editing("paymentInfo".into()));
    assert_eq!(manager.draft().get("firstName"), Some("Ada"));
    assert_eq!(manager.progress(), 0);
    assert!(manager.submit().is_err());
}

#[test]
fn test_store_is_shared_across_schemas() {
    let mut manager = manager_editing("userInfo");
    submit_user(&mut manager, "Ada");
    manager.select_schema("paymentInfo").unwrap();
    fill(
        &mut manager,
        &[
            ("cardNumber", "4111"),
            ("expiryDate", "2030-01-01"),
            ("cvv", "123"),
            ("cardholderName", "Ada Lovelace"),
        ],
    );
    manager.submit().unwrap();

    assert_eq!(manager.store().len(), 2);
    assert_eq!(manager.store().get(0).unwrap().get("cardNumber"), None);
    assert_eq!(manager.store().get(1).unwrap().get("cvv"), Some("123"));
}

#[test]
fn test_handle_select_and_unsaved_tracking() {
    let mut manager = FormManager::default();
    assert!(!manager.has_unsaved_data());
    manager.handle(FormEvent::SelectSchema("userInfo".into())).unwrap();
    manager
        .handle(FormEvent::EditField {
            field: "age".into(),
            value: "36".into(),
        })
        .unwrap();
    assert!(manager.has_unsaved_data());

    manager.handle(FormEvent::SelectSchema(String::new())).unwrap();
    assert_eq!(manager.draft(), &DraftRecord::new());
    assert!(!manager.has_unsaved_data());
}

#[test]
fn test_handle_unregistered_schema_deselects() {
    let mut manager = manager_editing("userInfo");
    fill(&mut manager, &[("firstName", "Ada")]);

    assert_eq!(
        manager.handle(FormEvent::SelectSchema("shippingInfo".into())),
        Ok(Outcome::Deselected)
    );
    assert_eq!(manager.selection(), &Selection::Unselected);
    assert_eq!(manager.draft().get("firstName"), None);
    assert_eq!(
        manager.handle(FormEvent::Submit),
        Err(FormError::NoSchemaSelected)
    );
}
