//! View rendering for the dynamic form component.
//!
//! Layout, top to bottom: form type selector, the fields of the selected
//! schema with a submit button, the validation banner, the progress readout
//! and the table of submitted records.
//!
//! Notes
//! - The table columns follow the *selected* schema. Stored records do not
//!   know which schema they came from, so rows submitted under another schema
//!   show empty cells.
//! - Required hints are live: they disappear as soon as the field has a value,
//!   independently of the banner shown after a failed submit.
//! - `selected` on an `<option>` stops driving the `<select>` once the user has
//!   picked something. The selects carry ids so `rendered` can set their value
//!   from the draft afterwards.

use common::forms::FormEvent;
use common::model::field::FieldDescriptor;
use common::model::record::SubmittedRecord;
use common::model::schema::FormSchema;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use super::helpers::{SCHEMA_SELECT_ID, dropdown_placeholder, field_select_id, progress_label};
use super::state::FormManagerComponent;

const REQUIRED_HINT: &str = "This field is required.";

/// Main view function. Renders the selector, the active form, feedback and
/// the submitted data table.
pub fn view(component: &FormManagerComponent, ctx: &Context<FormManagerComponent>) -> Html {
    let link = ctx.link();
    let manager = &component.manager;

    html! {
        <div class="dynamic-form-root">
            <h1>{"Dynamic Form Example"}</h1>

            { build_selector(component, link) }

            {
                match manager.active_schema() {
                    Some(schema) => build_form(component, schema, link),
                    None => html! {},
                }
            }

            {
                match manager.error() {
                    Some(err) => html! { <div class="error">{ err.to_string() }</div> },
                    None => html! {},
                }
            }

            <div>
                <h3>{ progress_label(manager.progress()) }</h3>
            </div>

            { build_submitted_section(component, link) }
        </div>
    }
}

/// Builds the form type selector with its neutral first option.
fn build_selector(component: &FormManagerComponent, link: &Scope<FormManagerComponent>) -> Html {
    let manager = &component.manager;
    let active = manager.active_schema().map(|schema| schema.name.as_str());

    html! {
        <div>
            <select
                id={SCHEMA_SELECT_ID}
                onchange={link.callback(|e: Event| {
                    FormEvent::SelectSchema(e.target_unchecked_into::<HtmlSelectElement>().value())
                })}
            >
                <option value="" selected={active.is_none()}>{"Select Form Type"}</option>
                {
                    for manager.registry().iter().map(|schema| {
                        let name = schema.name.as_str();
                        html! {
                            <option
                                key={name}
                                value={name.to_string()}
                                selected={active == Some(name)}
                            >
                                { schema.title.clone() }
                            </option>
                        }
                    })
                }
            </select>
        </div>
    }
}

/// Builds one labelled input per field plus the submit button.
fn build_form(
    component: &FormManagerComponent,
    schema: &FormSchema,
    link: &Scope<FormManagerComponent>,
) -> Html {
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        FormEvent::Submit
    });

    html! {
        <form {onsubmit}>
            {
                for schema.fields.iter().map(|field| html! {
                    <div key={field.name.clone()}>
                        <label>{ field.label.clone() }</label>
                        { build_input(component, field, link) }
                        {
                            if component.manager.needs_value(field) {
                                html! { <span class="error">{ REQUIRED_HINT }</span> }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                })
            }
            <button type="submit">{"Submit"}</button>
        </form>
    }
}

/// Renders the widget of a single field: a `<select>` for dropdowns, a typed
/// `<input>` for everything else.
fn build_input(
    component: &FormManagerComponent,
    field: &FieldDescriptor,
    link: &Scope<FormManagerComponent>,
) -> Html {
    let current = component.manager.draft().get(&field.name).unwrap_or_default();
    let name = field.name.clone();

    match field.field_type.input_type() {
        Some(input_type) => html! {
            <input
                type={input_type}
                name={field.name.clone()}
                value={current.to_string()}
                oninput={link.callback(move |e: InputEvent| FormEvent::EditField {
                    field: name.clone(),
                    value: e.target_unchecked_into::<HtmlInputElement>().value(),
                })}
            />
        },
        None => html! {
            <select
                id={field_select_id(&field.name)}
                name={field.name.clone()}
                onchange={link.callback(move |e: Event| FormEvent::EditField {
                    field: name.clone(),
                    value: e.target_unchecked_into::<HtmlSelectElement>().value(),
                })}
            >
                <option value="" selected={current.is_empty()}>
                    { dropdown_placeholder(&field.label) }
                </option>
                {
                    for field.options.iter().map(|option| html! {
                        <option
                            key={option.clone()}
                            value={option.clone()}
                            selected={option.as_str() == current}
                        >
                            { option.clone() }
                        </option>
                    })
                }
            </select>
        },
    }
}

/// Builds the "Submitted Data" section: the table, or a placeholder when no
/// record was submitted yet.
fn build_submitted_section(
    component: &FormManagerComponent,
    link: &Scope<FormManagerComponent>,
) -> Html {
    let manager = &component.manager;
    let columns: &[FieldDescriptor] = manager
        .active_schema()
        .map(|schema| schema.fields.as_slice())
        .unwrap_or_default();

    html! {
        <div>
            <h3>{"Submitted Data"}</h3>
            {
                if manager.store().is_empty() {
                    html! { <p>{"No data submitted yet."}</p> }
                } else {
                    html! {
                        <table border="1">
                            <thead>
                                <tr>
                                    { for columns.iter().map(|field| html! {
                                        <th key={field.name.clone()}>{ field.label.clone() }</th>
                                    }) }
                                    <th>{"Actions"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {
                                    for manager.store().iter().enumerate().map(|(index, record)| {
                                        build_row(index, record, columns, link)
                                    })
                                }
                            </tbody>
                        </table>
                    }
                }
            }
        </div>
    }
}

/// Renders one stored record with its Edit and Delete buttons.
fn build_row(
    index: usize,
    record: &SubmittedRecord,
    columns: &[FieldDescriptor],
    link: &Scope<FormManagerComponent>,
) -> Html {
    html! {
        <tr key={index}>
            { for columns.iter().map(|field| html! {
                <td key={field.name.clone()}>{ cell_text(record, field) }</td>
            }) }
            <td>
                <button onclick={link.callback(move |_| FormEvent::EditRecord(index))}>{"Edit"}</button>
                <button onclick={link.callback(move |_| FormEvent::DeleteRecord(index))}>{"Delete"}</button>
            </td>
        </tr>
    }
}

/// Text of a table cell, empty when the record has no value for `field`.
fn cell_text(record: &SubmittedRecord, field: &FieldDescriptor) -> String {
    record.get(&field.name).unwrap_or_default().to_string()
}
