//! Read-only lookup of the form schemas the application knows about.
//!
//! The registry is assembled once at startup, `SchemaRegistry::builtin()`
//! returns the three stock schemas, and further schemas can be chained in
//! with `with_schema` before the registry is handed to the form manager.
//! After that it is only ever read.

use serde::{Deserialize, Serialize};

use crate::model::field::{FieldDescriptor, FieldType};
use crate::model::schema::{FormSchema, SchemaName};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaRegistry {
    schemas: Vec<FormSchema>,
}

impl SchemaRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The stock `userInfo`, `addressInfo` and `paymentInfo` schemas.
    pub fn builtin() -> Self {
        Self::empty()
            .with_schema(FormSchema::new(
                "userInfo",
                "User Information",
                vec![
                    FieldDescriptor::new("firstName", "First Name", FieldType::Text).required(),
                    FieldDescriptor::new("lastName", "Last Name", FieldType::Text).required(),
                    FieldDescriptor::new("age", "Age", FieldType::Number),
                ],
            ))
            .with_schema(FormSchema::new(
                "addressInfo",
                "Address Information",
                vec![
                    FieldDescriptor::new("street", "Street", FieldType::Text).required(),
                    FieldDescriptor::new("city", "City", FieldType::Text).required(),
                    FieldDescriptor::new("state", "State", FieldType::Dropdown)
                        .with_options(["California", "Texas", "New York"])
                        .required(),
                    FieldDescriptor::new("zipCode", "Zip Code", FieldType::Text),
                ],
            ))
            .with_schema(FormSchema::new(
                "paymentInfo",
                "Payment Information",
                vec![
                    FieldDescriptor::new("cardNumber", "Card Number", FieldType::Text).required(),
                    FieldDescriptor::new("expiryDate", "Expiry Date", FieldType::Date).required(),
                    FieldDescriptor::new("cvv", "CVV", FieldType::Password).required(),
                    FieldDescriptor::new("cardholderName", "Cardholder Name", FieldType::Text)
                        .required(),
                ],
            ))
    }

    /// Adds `schema`, replacing a registered schema of the same name in place.
    pub fn with_schema(mut self, schema: FormSchema) -> Self {
        match self.schemas.iter_mut().find(|s| s.name == schema.name) {
            Some(existing) => *existing = schema,
            None => self.schemas.push(schema),
        }
        self
    }

    /// Looks a schema up by key. Unknown and empty names yield `None`.
    pub fn schema(&self, name: &str) -> Option<&FormSchema> {
        self.schemas.iter().find(|s| s.name.as_str() == name)
    }

    /// Schemas in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &FormSchema> {
        self.schemas.iter()
    }

    pub fn names(&self) -> Vec<&SchemaName> {
        self.schemas.iter().map(|s| &s.name).collect()
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
