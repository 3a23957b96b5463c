use thiserror::Error;

use crate::model::schema::SchemaName;

/// Rejections produced by `FormManager` transitions.
///
/// Only `MissingRequired` is meant for the user. The other variants describe
/// events the rendered form cannot emit and are logged rather than shown.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill all required fields.")]
    MissingRequired { fields: Vec<String> },

    #[error("No form type is selected")]
    NoSchemaSelected,

    #[error("Field '{field}' does not belong to form type '{schema}'")]
    UnknownField { schema: SchemaName, field: String },
}

impl FormError {
    /// Whether the error is shown in the form's error banner.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, FormError::MissingRequired { .. })
    }
}
