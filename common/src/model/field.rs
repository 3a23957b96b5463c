use serde::{Deserialize, Serialize};

/// Describes one input of a form schema.
///
/// Descriptors are declared once, when the registry is built, and never
/// mutated afterwards. The frontend renders one widget per descriptor and the
/// validation logic reads `required` to decide whether a draft can be
/// submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Key of the value inside a draft. Unique within its schema.
    pub name: String,
    /// Human readable label shown next to the input and as table header.
    pub label: String,
    /// Widget kind.
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub required: bool,
    /// Choices for `FieldType::Dropdown`. Empty for every other type.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl FieldDescriptor {
    pub fn new(name: &str, label: &str, field_type: FieldType) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            field_type,
            required: false,
            options: Vec::new(),
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Number,
    Dropdown,
    Date,
    Password,
}

impl FieldType {
    /// The `type` attribute of the `<input>` rendering this field, or `None`
    /// for dropdowns, which render as a `<select>`.
    pub fn input_type(self) -> Option<&'static str> {
        match self {
            FieldType::Text => Some("text"),
            FieldType::Number => Some("number"),
            FieldType::Date => Some("date"),
            FieldType::Password => Some("password"),
            FieldType::Dropdown => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dropdown_has_no_input_type() {
        assert_eq!(FieldType::Dropdown.input_type(), None);
        assert_eq!(FieldType::Password.input_type(), Some("password"));
        assert_eq!(FieldType::Number.input_type(), Some("number"));
    }

    #[test]
    fn builder_sets_required_and_options() {
        let field = FieldDescriptor::new("state", "State", FieldType::Dropdown)
            .with_options(["California", "Texas"])
            .required();
        assert!(field.required);
        assert_eq!(field.options, vec!["California", "Texas"]);
    }

    #[test]
    fn descriptor_uses_type_key_on_the_wire() {
        let field = FieldDescriptor::new("age", "Age", FieldType::Number);
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["type"], "number");
        assert!(json.get("options").is_none());

        let parsed: FieldDescriptor = serde_json::from_str(
            r#"{"name":"cvv","label":"CVV","type":"password","required":true}"#,
        )
        .unwrap();
        assert_eq!(parsed.field_type, FieldType::Password);
        assert!(parsed.required);
        assert!(parsed.options.is_empty());
    }
}
