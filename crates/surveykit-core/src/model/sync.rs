//! Sync event model
//!
//! Survey mutations are journaled as sync events for a later upload
//! pass. Only the record shape lives here; the transport that drains
//! the journal is a separate concern and not part of this crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of mutation captured by a sync event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SyncEventType {
    #[serde(rename = "INSTANCE_CREATED")]
    InstanceCreated,
    #[serde(rename = "INSTANCE_UPDATED")]
    InstanceUpdated,
    #[serde(rename = "INSTANCE_DELETED")]
    InstanceDeleted,
    #[serde(rename = "TYPE_CREATED")]
    TypeCreated,
    #[serde(rename = "TYPE_UPDATED")]
    TypeUpdated,
    #[serde(rename = "PHOTO_ATTACHED")]
    PhotoAttached,
    #[serde(rename = "ROOM_NOTE_CREATED")]
    RoomNoteCreated,
    #[serde(rename = "ROOM_NOTE_UPDATED")]
    RoomNoteUpdated,
    #[serde(rename = "ROOM_NOTE_DELETED")]
    RoomNoteDeleted,
}

/// Upload status of a journaled event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SyncEventStatus {
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

/// One journaled mutation, with its serialized payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncEvent {
    pub id: Uuid,
    pub project_id: Uuid,
    #[serde(rename = "type")]
    pub event_type: SyncEventType,
    pub timestamp: DateTime<Utc>,
    /// Entity snapshot as JSON, opaque to the journal.
    pub payload: serde_json::Value,
    pub device_id: String,
    pub operator_id: String,
    #[serde(default)]
    pub status: SyncEventStatus,
    #[serde(default)]
    pub retry_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_attempt_at: Option<DateTime<Utc>>,
}
