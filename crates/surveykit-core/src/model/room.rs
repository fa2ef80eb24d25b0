use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geometry::{Point, Rect};

/// Room outline in plan coordinates plus optional label anchor and
/// precomputed bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomGeometry {
    pub polygon: Vec<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_point: Option<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Rect>,
}

/// A surveyable room on a level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: Uuid,
    pub level_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<RoomGeometry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_note_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Room {
    /// Total recorded items (assets plus room notes).
    pub fn item_count(&self) -> u32 {
        self.asset_count.unwrap_or(0) + self.room_note_count.unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.item_count() == 0
    }
}

/// Survey flags recorded on a room note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomNoteFlags {
    #[serde(default)]
    pub empty_room: bool,
    #[serde(default)]
    pub room_is_blocked: bool,
}

/// Free-form note attached to a room, with photos and flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomNote {
    pub id: Uuid,
    pub room_id: Uuid,
    #[serde(default)]
    pub flags: RoomNoteFlags,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_photo_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_photo_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl RoomNote {
    /// A blocked room cannot receive further survey entries.
    pub fn is_locked(&self) -> bool {
        self.flags.room_is_blocked
    }
}
