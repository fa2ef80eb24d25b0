//! Typed parameter schema and values
//!
//! Families carry a list of [`ParameterDefinition`]s; asset types and
//! asset instances carry [`ParameterValueEntry`] lists keyed by
//! definition id. The value side is a closed tagged union matched
//! exhaustively by the validator and by the form-binding layer, so
//! adding a data type is a compile-time-enforced, single-point change.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Whether a parameter applies to an asset type (shared across
/// instances) or to an individual asset instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParameterScope {
    #[serde(rename = "TYPE")]
    Type,
    #[serde(rename = "INSTANCE")]
    Instance,
}

/// Data type tag for a parameter definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParameterDataType {
    #[serde(rename = "TEXT")]
    Text,
    #[serde(rename = "NUMBER")]
    Number,
    #[serde(rename = "BOOLEAN")]
    Boolean,
    #[serde(rename = "DATE")]
    Date,
    #[serde(rename = "ENUM")]
    Enumerated,
}

impl std::fmt::Display for ParameterDataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Number => write!(f, "number"),
            Self::Boolean => write!(f, "boolean"),
            Self::Date => write!(f, "date"),
            Self::Enumerated => write!(f, "enum"),
        }
    }
}

/// Optional constraints attached to a parameter definition.
///
/// Authored alongside the schema; a malformed `regex` is treated as
/// "no constraint" by the validator rather than failing user input.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,
}

/// Schema entry describing one typed parameter of a family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterDefinition {
    pub id: Uuid,
    pub name: String,
    pub data_type: ParameterDataType,
    pub scope: ParameterScope,
    pub is_required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationRule>,
}

/// A single entered value, tagged by variant.
///
/// Serialized as `{"type": ..., "stringValue"/"numberValue"/
/// "boolValue"/"dateValue": ...}` to stay wire-compatible with the
/// schema JSON shipped with demo plans.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterValue {
    Text(String),
    Number(f64),
    Bool(bool),
    Date(DateTime<Utc>),
    Option(String),
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ParameterValueRepr {
    #[serde(rename = "type")]
    kind: ValueKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    string_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    number_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    bool_value: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    date_value: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Clone, Copy)]
#[serde(rename_all = "lowercase")]
enum ValueKind {
    Text,
    Number,
    Bool,
    Date,
    Option,
}

impl Serialize for ParameterValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let repr = match self {
            Self::Text(value) => ParameterValueRepr {
                kind: ValueKind::Text,
                string_value: Some(value.clone()),
                number_value: None,
                bool_value: None,
                date_value: None,
            },
            Self::Number(value) => ParameterValueRepr {
                kind: ValueKind::Number,
                string_value: None,
                number_value: Some(*value),
                bool_value: None,
                date_value: None,
            },
            Self::Bool(value) => ParameterValueRepr {
                kind: ValueKind::Bool,
                string_value: None,
                number_value: None,
                bool_value: Some(*value),
                date_value: None,
            },
            Self::Date(value) => ParameterValueRepr {
                kind: ValueKind::Date,
                string_value: None,
                number_value: None,
                bool_value: None,
                date_value: Some(*value),
            },
            Self::Option(value) => ParameterValueRepr {
                kind: ValueKind::Option,
                string_value: Some(value.clone()),
                number_value: None,
                bool_value: None,
                date_value: None,
            },
        };
        repr.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ParameterValue {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        let repr = ParameterValueRepr::deserialize(deserializer)?;
        match repr.kind {
            ValueKind::Text => repr
                .string_value
                .map(Self::Text)
                .ok_or_else(|| D::Error::missing_field("stringValue")),
            ValueKind::Number => repr
                .number_value
                .map(Self::Number)
                .ok_or_else(|| D::Error::missing_field("numberValue")),
            ValueKind::Bool => repr
                .bool_value
                .map(Self::Bool)
                .ok_or_else(|| D::Error::missing_field("boolValue")),
            ValueKind::Date => repr
                .date_value
                .map(Self::Date)
                .ok_or_else(|| D::Error::missing_field("dateValue")),
            ValueKind::Option => repr
                .string_value
                .map(Self::Option)
                .ok_or_else(|| D::Error::missing_field("stringValue")),
        }
    }
}

/// One entered value bound to its definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterValueEntry {
    pub parameter_id: Uuid,
    pub value: ParameterValue,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_text_value_round_trips_through_tagged_json() {
        let value = ParameterValue::Text("AHU-01".to_string());
        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(json["type"], "text");
        assert_eq!(json["stringValue"], "AHU-01");

        let back: ParameterValue = serde_json::from_value(json).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn test_option_value_uses_string_field() {
        let value = ParameterValue::Option("Used".to_string());
        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(json["type"], "option");
        assert_eq!(json["stringValue"], "Used");
    }

    #[test]
    fn test_date_value_round_trips() {
        let date = Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap();
        let value = ParameterValue::Date(date);
        let json = serde_json::to_string(&value).unwrap();
        let back: ParameterValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn test_mismatched_payload_is_rejected() {
        let json = r#"{"type":"number","stringValue":"oops"}"#;
        assert!(serde_json::from_str::<ParameterValue>(json).is_err());
    }

    #[test]
    fn test_definition_json_shape() {
        let json = r#"{
            "id": "7e57ab1e-0000-5000-8000-000000000001",
            "name": "Power",
            "dataType": "NUMBER",
            "scope": "INSTANCE",
            "isRequired": true,
            "unit": "kW",
            "validation": {"min": 0.0, "max": 500.0}
        }"#;
        let def: ParameterDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(def.data_type, ParameterDataType::Number);
        assert_eq!(def.scope, ParameterScope::Instance);
        assert_eq!(def.validation.as_ref().unwrap().max, Some(500.0));
        assert!(def.enum_values.is_none());
    }
}
