//! Form field and step-schema types
//!
//! Fields are created once, by the static default table or by the
//! extractor, and read-only afterwards. Wire names are camelCase to
//! stay compatible with the browser client and cached schema documents.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Input kind of a form field, serialized as the HTML input kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Free text
    Text,
    /// Numeric entry
    Number,
    /// Dropdown select
    Select,
    /// Radio group
    Radio,
    /// Checkbox
    Checkbox,
    /// Date picker
    Date,
    /// Telephone-style numeric entry
    Tel,
    /// Email address
    Email,
    /// Password entry
    Password,
    /// One-time code entry
    #[serde(rename = "one-time-code")]
    Otp,
}

impl Default for FieldType {
    fn default() -> Self {
        Self::Text
    }
}

/// One selectable option of a choice field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldOption {
    /// Display label
    pub label: String,
    /// Submitted value
    pub value: String,
}

impl FieldOption {
    /// Convenience constructor.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Optional validation constraints of a field. Absence means unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldValidation {
    /// Whether the field must be filled
    #[serde(default)]
    pub required: bool,
    /// Minimum input length
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,
    /// Maximum input length
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    /// Anchored regex the value must match
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Help text shown on validation failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
}

/// A single form field. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    /// Element identifier
    pub id: String,
    /// Programmatic name submitted with the form
    pub name: String,
    /// Display label
    pub label: String,
    /// Input kind
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Options for choice fields
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<FieldOption>,
    /// Validation constraints
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation: Option<FieldValidation>,
}

/// One registration step: a title and an ordered field list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FormSchema {
    /// Step title
    pub title: String,
    /// Step number (1-based)
    pub step: u8,
    /// Ordered fields
    pub fields: Vec<FormField>,
}

impl FormSchema {
    /// Look up a field by its programmatic name.
    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_type_wire_names() {
        assert_eq!(serde_json::to_string(&FieldType::Otp).unwrap(), "\"one-time-code\"");
        assert_eq!(serde_json::to_string(&FieldType::Tel).unwrap(), "\"tel\"");
        let t: FieldType = serde_json::from_str("\"checkbox\"").unwrap();
        assert_eq!(t, FieldType::Checkbox);
    }

    #[test]
    fn test_schema_round_trip_keeps_order() {
        let schema = FormSchema {
            title: "Test".into(),
            step: 1,
            fields: vec![
                FormField {
                    id: "a".into(),
                    name: "a".into(),
                    label: "Field A".into(),
                    field_type: FieldType::Text,
                    options: vec![],
                    validation: None,
                },
                FormField {
                    id: "b".into(),
                    name: "b".into(),
                    label: "Field B".into(),
                    field_type: FieldType::Number,
                    options: vec![],
                    validation: Some(FieldValidation {
                        required: true,
                        max_length: Some(6),
                        ..Default::default()
                    }),
                },
            ],
        };

        let json = serde_json::to_string(&schema).unwrap();
        let back: FormSchema = serde_json::from_str(&json).unwrap();
        assert_eq!(back, schema);
        assert_eq!(back.fields[0].name, "a");
        assert!(back.field("b").unwrap().validation.as_ref().unwrap().required);
    }
}
