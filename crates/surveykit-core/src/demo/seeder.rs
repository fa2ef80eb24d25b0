//! Demo data seeding
//!
//! Builds domain entities from the bundled plan template and hands
//! them to the object store in one batch. Identifiers are derived
//! with [`crate::stable_id`] under the project's namespace, so
//! wiping the store and reseeding reproduces the same IDs.

use tracing::{debug, info};
use uuid::Uuid;

use crate::error::CoreResult;
use crate::geometry::{bounds_of, compass_angle_degrees};
use crate::model::{Level, Project, ProjectLifecycleState, Room, RoomGeometry, SchemaVersion};
use crate::stable_id;

use super::loader::DemoPlanLoader;
use super::plan::{DemoPlanLevel, DemoPlanRoom};

/// Outcome of a seeding attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedResult {
    /// The store was empty and demo content was inserted.
    Seeded(Uuid),
    /// The store already had projects; nothing was written.
    Skipped,
}

/// Everything produced by one seeding pass. The store persists the
/// whole batch or nothing.
#[derive(Debug, Clone)]
pub struct SeedBatch {
    pub project: Project,
    pub schema_version: SchemaVersion,
    pub levels: Vec<Level>,
    pub rooms: Vec<Room>,
}

/// Seam to the out-of-scope persistence layer.
pub trait ProjectStore {
    /// Whether any project already exists.
    fn has_projects(&self) -> CoreResult<bool>;

    /// Persists the batch transactionally: all entities or none.
    fn insert_seed(&mut self, batch: SeedBatch) -> CoreResult<()>;
}

/// Seeds the demo project into an empty store.
#[derive(Debug, Default)]
pub struct DemoSeeder;

impl DemoSeeder {
    pub fn new() -> Self {
        Self
    }

    /// Loads the bundled demo content and inserts it unless the store
    /// already has projects.
    pub fn seed_if_needed(
        &self,
        store: &mut dyn ProjectStore,
        loader: &DemoPlanLoader,
        project_name: &str,
    ) -> CoreResult<SeedResult> {
        if store.has_projects()? {
            debug!("store already has projects, skipping demo seed");
            return Ok(SeedResult::Skipped);
        }

        let template = loader.load_plan_template()?;
        let schema_version = loader.load_schema_version()?;
        let project_id = schema_version.project_id;
        let namespace = project_id.to_string();

        let mut levels = Vec::with_capacity(template.levels.len());
        let mut rooms = Vec::new();
        for plan_level in &template.levels {
            let level = build_level(plan_level, project_id, &namespace);
            for plan_room in &plan_level.rooms {
                rooms.push(build_room(plan_room, &plan_level.id, level.id, &namespace));
            }
            levels.push(level);
        }

        let project = Project {
            id: project_id,
            name: project_name.to_string(),
            state: ProjectLifecycleState::Ready,
            location: None,
            room_count: Some(rooms.len() as u32),
            asset_count: Some(0),
            image_url: None,
        };

        info!(
            %project_id,
            levels = levels.len(),
            rooms = rooms.len(),
            "seeding demo project"
        );

        store.insert_seed(SeedBatch {
            project,
            schema_version,
            levels,
            rooms,
        })?;

        Ok(SeedResult::Seeded(project_id))
    }
}

fn build_level(plan_level: &DemoPlanLevel, project_id: Uuid, namespace: &str) -> Level {
    let north_angle = plan_level
        .north
        .as_ref()
        .map(|north| compass_angle_degrees(north.start_point(), north.end_point()));

    Level {
        id: stable_id::derive(&plan_level.id, namespace),
        project_id,
        name: plan_level.name.clone(),
        number: Some(plan_level.index),
        order_index: plan_level.index,
        background_geojson_path: Some(plan_level.background.geojson.clone()),
        background_bounds: plan_level.background.bounds_rect(),
        north_angle_degrees: north_angle,
    }
}

fn build_room(plan_room: &DemoPlanRoom, level_key: &str, level_id: Uuid, namespace: &str) -> Room {
    // Room keys are only unique per floor; seed from the level key
    // plus the room key so "room-001" on two levels stays distinct.
    let room_key = format!("{}:{}", level_key, plan_room.id);

    let polygon = plan_room.shape.points();
    // Outlines with fewer than three points cannot form a room; such
    // rooms are seeded without geometry.
    let geometry = if polygon.len() < 3 {
        None
    } else {
        let bounds = bounds_of(&polygon);
        // Label anchor defaults to the bounds center; fine for the
        // demo's convex room shapes.
        let label_point = bounds.map(|b| b.center());
        Some(RoomGeometry {
            polygon,
            label_point,
            bounds,
        })
    };

    Room {
        id: stable_id::derive(&room_key, namespace),
        level_id,
        name: plan_room.name.clone(),
        number: Some(plan_room.number.clone()),
        geometry,
        asset_count: Some(0),
        room_note_count: Some(0),
        updated_at: None,
    }
}
