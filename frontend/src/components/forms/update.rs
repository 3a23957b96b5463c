//! Update function for the dynamic form component.
//!
//! Elm-style: every `FormEvent` emitted by the view is handed to the
//! `FormManager`. The outcome decides the side effects (toast on
//! submission, console warnings for rejected events); the view then re-renders
//! from the manager.

use common::forms::{FormError, FormEvent, Outcome, SUBMIT_SUCCESS_MESSAGE};
use yew::prelude::*;

use super::helpers::{set_window_dirty_flag, show_toast};
use super::state::FormManagerComponent;

/// Central update function for the component.
///
/// Always re-renders: every event can change the draft, the error banner or
/// the table.
pub fn update(
    component: &mut FormManagerComponent,
    _ctx: &Context<FormManagerComponent>,
    event: FormEvent,
) -> bool {
    match component.manager.handle(event) {
        Ok(Outcome::Submitted { index }) => {
            report_submission(component, index);
            show_toast(SUBMIT_SUCCESS_MESSAGE);
        }
        Ok(Outcome::Ignored) => {
            gloo_console::warn!("ignored an action on a row that no longer exists");
        }
        Ok(_) => {}
        // Shown by the error banner.
        Err(FormError::MissingRequired { .. }) => {}
        Err(err) => {
            gloo_console::warn!(format!("rejected form event: {}", err));
        }
    }

    set_window_dirty_flag(component);
    true
}

/// Logs which fields a stored row carries. Values stay out of the console,
/// some of them are card details.
fn report_submission(component: &FormManagerComponent, index: usize) {
    if let Some(record) = component.manager.store().get(index) {
        let fields: Vec<&str> = record.values().iter().map(|(field, _)| field).collect();
        let fields = serde_json::to_string(&fields).unwrap_or_default();
        gloo_console::log!(format!("stored row {} with fields {}", index, fields));
    }
}
