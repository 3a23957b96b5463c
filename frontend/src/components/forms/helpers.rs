//! Utility functions for the dynamic form component.
//!
//! - **User Feedback**: transient "toast" notifications, used to acknowledge a
//!   successful submission.
//! - **Unsaved Data Guard**: the global `app_dirty` flag and the
//!   `beforeunload` listener that reads it. Nothing the user enters survives a
//!   reload, so leaving the page with data asks for confirmation first.
//! - **Select Sync**: pushes the draft into the rendered `<select>` elements.
//!   Their `selected` attributes only set the default, so a dropdown the user
//!   already touched would otherwise keep showing a stale choice.
//! - **Labels**: small text builders shared by the view.

use common::forms::FormManager;
use common::model::field::FieldType;
use js_sys::Reflect;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{BeforeUnloadEvent, HtmlElement, HtmlSelectElement};

use super::state::FormManagerComponent;

/// Name of the global flag read by the `beforeunload` listener.
const DIRTY_FLAG: &str = "app_dirty";

/// Element id of the form type selector.
pub const SCHEMA_SELECT_ID: &str = "form-type-select";

/// Element id of the `<select>` rendered for a dropdown field.
pub fn field_select_id(field: &str) -> String {
    format!("field-{}", field)
}

/// Displays a temporary notification message at the bottom of the screen.
///
/// The toast removes itself after three seconds.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-family", "Arial, sans-serif").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

/// Sets the global `app_dirty` flag from the component's current data.
pub fn set_window_dirty_flag(component: &FormManagerComponent) {
    if let Some(window) = web_sys::window() {
        let _ = Reflect::set(
            &window,
            &JsValue::from_str(DIRTY_FLAG),
            &JsValue::from_bool(component.manager.has_unsaved_data()),
        );
    }
}

/// Registers the `beforeunload` listener that asks for confirmation while
/// `app_dirty` is set. Call once at startup.
pub fn install_unload_guard() {
    let Some(window) = web_sys::window() else {
        return;
    };

    let listener = Closure::<dyn FnMut(BeforeUnloadEvent)>::new(|event: BeforeUnloadEvent| {
        let dirty = web_sys::window()
            .and_then(|w| Reflect::get(&w, &JsValue::from_str(DIRTY_FLAG)).ok())
            .and_then(|value| value.as_bool())
            .unwrap_or(false);
        if dirty {
            event.prevent_default();
            event.set_return_value("");
        }
    });

    if window
        .add_event_listener_with_callback("beforeunload", listener.as_ref().unchecked_ref())
        .is_ok()
    {
        // The listener lives as long as the page.
        listener.forget();
    } else {
        gloo_console::warn!("could not register the unsaved data guard");
    }
}

/// `(element id, value)` of every `<select>` the view renders for the current
/// state: the form type selector, then each dropdown of the active schema.
pub fn select_values(manager: &FormManager) -> Vec<(String, String)> {
    let Some(schema) = manager.active_schema() else {
        return vec![(SCHEMA_SELECT_ID.to_string(), String::new())];
    };

    let mut values = vec![(SCHEMA_SELECT_ID.to_string(), schema.name.to_string())];
    values.extend(
        schema
            .fields
            .iter()
            .filter(|field| field.field_type == FieldType::Dropdown)
            .map(|field| {
                let value = manager.draft().get(&field.name).unwrap_or_default();
                (field_select_id(&field.name), value.to_string())
            }),
    );
    values
}

/// Sets every rendered `<select>` to the value held by the manager.
pub fn sync_select_values(component: &FormManagerComponent) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };

    for (id, value) in select_values(&component.manager) {
        if let Some(select) = document
            .get_element_by_id(&id)
            .and_then(|element| element.dyn_into::<HtmlSelectElement>().ok())
        {
            if select.value() != value {
                select.set_value(&value);
            }
        }
    }
}

pub fn progress_label(progress: u8) -> String {
    format!("Progress: {}%", progress)
}

/// First, neutral option of a dropdown field.
pub fn dropdown_placeholder(label: &str) -> String {
    format!("Select {}", label)
}
