//! # SurveyKit Core
//!
//! Core types and utilities for SurveyKit.
//! Provides the domain model for technical building inventories
//! (projects, levels, rooms, asset families and instances), 2D plan
//! geometry utilities, schema-driven parameter validation, stable
//! identifier derivation, and demo-plan loading/seeding.

pub mod demo;
pub mod error;
pub mod geometry;
pub mod model;
pub mod photo_namer;
pub mod stable_id;
pub mod validator;

pub use error::{CoreError, CoreResult};

pub use geometry::{bounds_of, compass_angle_degrees, contains, Point, Rect};

pub use model::{
    AssetInstance, AssetType, Family, Level, ParameterDataType, ParameterDefinition,
    ParameterScope, ParameterValue, ParameterValueEntry, Photo, PhotoRole, PhotoScope,
    PhotoUploadState, Project, ProjectLifecycleState, ProjectUiState, Room, RoomGeometry, RoomNote,
    RoomNoteFlags, SchemaVersion, SyncEvent, SyncEventStatus, SyncEventType, ValidationRule,
};

pub use validator::{validate, ValidationIssue};

// Re-export demo seeding types for convenience
pub use demo::{
    DemoPlanLevel, DemoPlanLoader, DemoPlanTemplate, DemoSeeder, ProjectStore, SeedBatch,
    SeedResult,
};
