//! Domain model for technical building inventories
//!
//! All entities are plain value types: constructed from input,
//! never mutated in place by the core, safe to clone and share.
//! Persistence and presentation live outside this crate and exchange
//! these types as plain data.

mod asset;
mod level;
mod parameter;
mod photo;
mod project;
mod room;
mod schema;
mod sync;

pub use asset::{AssetInstance, AssetType, Family};
pub use level::Level;
pub use parameter::{
    ParameterDataType, ParameterDefinition, ParameterScope, ParameterValue, ParameterValueEntry,
    ValidationRule,
};
pub use photo::{Photo, PhotoRole, PhotoScope, PhotoUploadState};
pub use project::{Project, ProjectLifecycleState, ProjectUiState};
pub use room::{Room, RoomGeometry, RoomNote, RoomNoteFlags};
pub use schema::SchemaVersion;
pub use sync::{SyncEvent, SyncEventStatus, SyncEventType};
