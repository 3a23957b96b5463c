//! State container behind the dynamic form.
//!
//! `FormManager` owns the selection, the draft, the last validation error and
//! the submission store. Every change goes through one of its transitions,
//! usually via `handle`, which maps the events emitted by the rendered form
//! onto those transitions. The view reads everything it needs (progress,
//! missing fields, table rows) back from the manager, so no derived value is
//! ever stored next to the draft.

use log::{debug, warn};

use crate::forms::error::FormError;
use crate::forms::store::SubmissionStore;
use crate::forms::validation;
use crate::model::field::FieldDescriptor;
use crate::model::record::{DraftRecord, SubmittedRecord};
use crate::model::schema::{FormSchema, SchemaName};
use crate::registry::SchemaRegistry;

/// Acknowledgement shown after a successful submission.
pub const SUBMIT_SUCCESS_MESSAGE: &str = "Form submitted successfully!";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Unselected,
    Editing(SchemaName),
}

/// Events emitted by the rendered form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The form type selector changed. An empty or unregistered name means
    /// "none selected".
    SelectSchema(String),
    EditField { field: String, value: String },
    Submit,
    EditRecord(usize),
    DeleteRecord(usize),
}

/// What a successful transition did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Selected(SchemaName),
    Deselected,
    FieldUpdated { progress: u8 },
    /// The draft was stored at `index`.
    Submitted { index: usize },
    /// The record was moved from the store back into the draft.
    RecordLoaded,
    RecordDeleted,
    /// The event referenced a row that no longer exists.
    Ignored,
}

#[derive(Debug, Clone)]
pub struct FormManager {
    registry: SchemaRegistry,
    selection: Selection,
    draft: DraftRecord,
    error: Option<FormError>,
    store: SubmissionStore,
}

impl Default for FormManager {
    fn default() -> Self {
        Self::new(SchemaRegistry::builtin())
    }
}

impl FormManager {
    pub fn new(registry: SchemaRegistry) -> Self {
        Self {
            registry,
            selection: Selection::Unselected,
            draft: DraftRecord::new(),
            error: None,
            store: SubmissionStore::new(),
        }
    }

    pub fn handle(&mut self, event: FormEvent) -> Result<Outcome, FormError> {
        match event {
            FormEvent::SelectSchema(name) => self.select_schema(&name),
            FormEvent::EditField { field, value } => self.edit_field(&field, value),
            FormEvent::Submit => self.submit(),
            FormEvent::EditRecord(index) => Ok(self.edit_at(index)),
            FormEvent::DeleteRecord(index) => Ok(self.delete_at(index)),
        }
    }

    /// Switches the active schema and resets the draft and error. The empty
    /// name and names missing from the registry both mean "nothing selected".
    pub fn select_schema(&mut self, name: &str) -> Result<Outcome, FormError> {
        let outcome = match self.registry.schema(name) {
            Some(schema) => {
                self.selection = Selection::Editing(schema.name.clone());
                Outcome::Selected(schema.name.clone())
            }
            None => {
                if !name.is_empty() {
                    warn!("form type '{}' is not registered, nothing selected", name);
                }
                self.selection = Selection::Unselected;
                Outcome::Deselected
            }
        };

        self.draft.clear();
        self.error = None;
        debug!("selection changed: {:?}", self.selection);
        Ok(outcome)
    }

    pub fn edit_field(&mut self, field: &str, value: String) -> Result<Outcome, FormError> {
        let schema = self.require_schema()?;
        if schema.field(field).is_none() {
            warn!("rejected edit of unknown field '{}' in '{}'", field, schema.name);
            return Err(FormError::UnknownField {
                schema: schema.name.clone(),
                field: field.to_string(),
            });
        }

        self.draft.set(field, value);
        let progress = self.progress();
        debug!("field '{}' updated, progress {}%", field, progress);
        Ok(Outcome::FieldUpdated { progress })
    }

    /// Stores the draft when every required field is filled. Otherwise the
    /// error is kept for the banner and the store is left untouched.
    pub fn submit(&mut self) -> Result<Outcome, FormError> {
        let schema = self.require_schema()?;
        let missing = validation::missing_required(schema, &self.draft);
        if !missing.is_empty() {
            debug!("submit rejected, missing {:?}", missing);
            let error = FormError::MissingRequired { fields: missing };
            self.error = Some(error.clone());
            return Err(error);
        }

        let record = SubmittedRecord::from(std::mem::take(&mut self.draft));
        self.store.append(record);
        self.error = None;
        let index = self.store.len() - 1;
        debug!("draft stored as row {}", index);
        Ok(Outcome::Submitted { index })
    }

    /// Moves the record at `index` back into the draft.
    ///
    /// The selection is kept as it is: records do not remember the schema
    /// they were submitted under, so loading a record from another schema
    /// fills the draft with fields the visible form does not show.
    pub fn edit_at(&mut self, index: usize) -> Outcome {
        match self.store.delete_at(index) {
            Some(record) => {
                self.draft = record.into_draft();
                debug!("row {} loaded into the draft", index);
                Outcome::RecordLoaded
            }
            None => {
                warn!("ignored edit of missing row {}", index);
                Outcome::Ignored
            }
        }
    }

    pub fn delete_at(&mut self, index: usize) -> Outcome {
        match self.store.delete_at(index) {
            Some(_) => {
                debug!("row {} deleted", index);
                Outcome::RecordDeleted
            }
            None => {
                warn!("ignored delete of missing row {}", index);
                Outcome::Ignored
            }
        }
    }

    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn active_schema(&self) -> Option<&FormSchema> {
        match &self.selection {
            Selection::Editing(name) => self.registry.schema(name.as_str()),
            Selection::Unselected => None,
        }
    }

    pub fn draft(&self) -> &DraftRecord {
        &self.draft
    }

    pub fn store(&self) -> &SubmissionStore {
        &self.store
    }

    pub fn error(&self) -> Option<&FormError> {
        self.error.as_ref()
    }

    /// Fill percentage of the active schema, 0 when nothing is selected.
    pub fn progress(&self) -> u8 {
        self.active_schema()
            .map_or(0, |schema| validation::progress(schema, &self.draft))
    }

    /// `true` for a required field without a non-empty draft value.
    pub fn needs_value(&self, field: &FieldDescriptor) -> bool {
        field.required && !self.draft.is_filled(&field.name)
    }

    /// Whether reloading the page would lose anything.
    pub fn has_unsaved_data(&self) -> bool {
        !self.draft.is_blank() || !self.store.is_empty()
    }

    fn require_schema(&self) -> Result<&FormSchema, FormError> {
        self.active_schema().ok_or_else(|| {
            warn!("rejected event while no form type is selected");
            FormError::NoSchemaSelected
        })
    }
}
