use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle state of a survey project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectLifecycleState {
    #[serde(rename = "DRAFT")]
    Draft,
    #[serde(rename = "READY")]
    Ready,
    #[serde(rename = "ACTIVE")]
    Active,
    #[serde(rename = "COMPLETED")]
    Completed,
    #[serde(rename = "APPROVED")]
    Approved,
}

/// User-facing projection of the lifecycle state. Draft and approved
/// projects are not shown with a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectUiState {
    Online,
    Open,
    Completed,
}

impl ProjectLifecycleState {
    pub fn ui_state(&self) -> Option<ProjectUiState> {
        match self {
            Self::Ready => Some(ProjectUiState::Online),
            Self::Active => Some(ProjectUiState::Open),
            Self::Completed => Some(ProjectUiState::Completed),
            Self::Draft | Self::Approved => None,
        }
    }
}

/// A survey project: one building or site being inventoried.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub state: ProjectLifecycleState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}
