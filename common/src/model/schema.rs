use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::field::FieldDescriptor;

/// Key of a registered form schema, e.g. `userInfo`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaName(String);

impl SchemaName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SchemaName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SchemaName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

/// A named, ordered list of fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSchema {
    pub name: SchemaName,
    /// Label of the schema in the form type selector.
    pub title: String,
    pub fields: Vec<FieldDescriptor>,
}

impl FormSchema {
    pub fn new(name: &str, title: &str, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            name: SchemaName::from(name),
            title: title.to_string(),
            fields,
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|field| field.required)
    }
}
