use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which entity kind a photo belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhotoScope {
    #[serde(rename = "TYPE")]
    Type,
    #[serde(rename = "INSTANCE")]
    Instance,
    #[serde(rename = "ROOM_NOTE")]
    RoomNote,
}

impl PhotoScope {
    /// Lowercase token used in generated filenames.
    pub fn token(&self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Instance => "instance",
            Self::RoomNote => "room_note",
        }
    }
}

/// Role of a photo within its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhotoRole {
    #[serde(rename = "MAIN")]
    Main,
    #[serde(rename = "EXTRA")]
    Extra,
}

impl PhotoRole {
    /// Lowercase token used in generated filenames.
    pub fn token(&self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Extra => "extra",
        }
    }
}

/// Upload lifecycle of a captured photo. Transport is out of scope;
/// the state is model-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PhotoUploadState {
    #[default]
    #[serde(rename = "PENDING")]
    Pending,
    #[serde(rename = "UPLOADING")]
    Uploading,
    #[serde(rename = "UPLOADED")]
    Uploaded,
    #[serde(rename = "FAILED")]
    Failed,
}

/// Metadata record for a captured photo. The image bytes live in the
/// collaborator file store under `filename`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: Uuid,
    pub scope: PhotoScope,
    pub role: PhotoRole,
    pub owner_id: Uuid,
    pub filename: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<u64>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub upload_state: PhotoUploadState,
}
