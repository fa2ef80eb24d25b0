use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::asset::Family;

/// A versioned parameter schema for a project. Once locked, the
/// families and their definitions must not change for that project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaVersion {
    pub id: Uuid,
    pub project_id: Uuid,
    pub version: String,
    pub created_at: DateTime<Utc>,
    pub is_locked: bool,
    #[serde(default)]
    pub families: Vec<Family>,
}
