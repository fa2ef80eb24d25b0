use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::parameter::{ParameterDefinition, ParameterScope, ParameterValueEntry};

/// An asset family: the schema grouping for related asset types
/// (e.g. "Air handling units"), carrying the parameter definitions
/// shared by all its types and instances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Family {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_name: Option<String>,
    #[serde(default)]
    pub parameters: Vec<ParameterDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
}

impl Family {
    /// Definitions that apply to the asset type (shared by instances).
    pub fn type_parameters(&self) -> impl Iterator<Item = &ParameterDefinition> {
        self.parameters
            .iter()
            .filter(|p| p.scope == ParameterScope::Type)
    }

    /// Definitions filled in per recorded instance.
    pub fn instance_parameters(&self) -> impl Iterator<Item = &ParameterDefinition> {
        self.parameters
            .iter()
            .filter(|p| p.scope == ParameterScope::Instance)
    }
}

/// A concrete asset type within a family, with its type-scope
/// parameter values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetType {
    pub id: Uuid,
    pub family_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<ParameterValueEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_photo_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A recorded occurrence of an asset type inside a room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetInstance {
    pub id: Uuid,
    pub room_id: Uuid,
    pub type_id: Uuid,
    #[serde(default)]
    pub parameters: Vec<ParameterValueEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub instance_photo_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
