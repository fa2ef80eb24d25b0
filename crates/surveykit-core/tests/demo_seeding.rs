//! End-to-end demo seeding tests against an in-memory store.

use std::fs;

use surveykit_core::{
    CoreResult, DemoPlanLoader, DemoSeeder, ProjectStore, SeedBatch, SeedResult,
};

const PLAN_TEMPLATE: &str = r#"{
    "levels": [
        {
            "id": "level-0",
            "index": 0,
            "name": "Ground floor",
            "background": {"geojson": "plans/level0.geojson", "bounds": [0.0, 0.0, 40.0, 25.0]},
            "north": {"start": [0.0, 0.0], "end": [0.0, 1.0]},
            "rooms": [
                {
                    "id": "room-001",
                    "number": "0.01",
                    "name": "Lobby",
                    "shape": {"polygon": [[0,0],[8,0],[8,6],[0,6]]}
                },
                {
                    "id": "room-002",
                    "number": "0.02",
                    "shape": {"polygon": [[8,0],[12,0],[12,3],[8,3]]}
                }
            ]
        },
        {
            "id": "level-1",
            "index": 1,
            "name": "First floor",
            "background": {"geojson": "plans/level1.geojson", "bounds": [0.0, 0.0, 40.0, 25.0]},
            "rooms": []
        }
    ]
}"#;

const SCHEMA_VERSION: &str = r#"{
    "id": "11111111-2222-4333-8444-555555555555",
    "projectId": "aaaaaaaa-bbbb-4ccc-8ddd-eeeeeeeeeeee",
    "version": "1.0.0",
    "createdAt": "2025-01-15T08:00:00Z",
    "isLocked": true,
    "families": [
        {
            "id": "99999999-8888-4777-8666-555555555555",
            "name": "Air handling units",
            "parameters": [
                {
                    "id": "12121212-3434-4565-8787-909090909090",
                    "name": "Model",
                    "dataType": "TEXT",
                    "scope": "TYPE",
                    "isRequired": true
                }
            ]
        }
    ]
}"#;

#[derive(Default)]
struct InMemoryStore {
    batches: Vec<SeedBatch>,
}

impl ProjectStore for InMemoryStore {
    fn has_projects(&self) -> CoreResult<bool> {
        Ok(!self.batches.is_empty())
    }

    fn insert_seed(&mut self, batch: SeedBatch) -> CoreResult<()> {
        self.batches.push(batch);
        Ok(())
    }
}

fn write_bundle(dir: &std::path::Path) {
    fs::write(dir.join("plan_template.json"), PLAN_TEMPLATE).unwrap();
    fs::write(dir.join("schema_version.json"), SCHEMA_VERSION).unwrap();
}

#[test]
fn test_seed_into_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    write_bundle(dir.path());

    let loader = DemoPlanLoader::new(dir.path());
    let mut store = InMemoryStore::default();

    let result = DemoSeeder::new()
        .seed_if_needed(&mut store, &loader, "Demo Project")
        .unwrap();

    let SeedResult::Seeded(project_id) = result else {
        panic!("expected a seeded result");
    };
    assert_eq!(
        project_id.to_string(),
        "aaaaaaaa-bbbb-4ccc-8ddd-eeeeeeeeeeee"
    );

    let batch = &store.batches[0];
    assert_eq!(batch.project.name, "Demo Project");
    assert_eq!(batch.project.room_count, Some(2));
    assert_eq!(batch.levels.len(), 2);
    assert_eq!(batch.rooms.len(), 2);
    assert_eq!(batch.schema_version.families.len(), 1);

    // North arrow pointing along +Y is 0 degrees
    let ground = &batch.levels[0];
    assert!(ground.north_angle_degrees.unwrap().abs() < 1e-9);
    assert!(batch.levels[1].north_angle_degrees.is_none());

    // Room geometry gets precomputed bounds and a label anchor
    let lobby = &batch.rooms[0];
    let geometry = lobby.geometry.as_ref().unwrap();
    let bounds = geometry.bounds.unwrap();
    assert_eq!(bounds.width(), 8.0);
    assert_eq!(bounds.height(), 6.0);
    assert!(geometry.label_point.is_some());
}

#[test]
fn test_seed_is_skipped_when_store_has_projects() {
    let dir = tempfile::tempdir().unwrap();
    write_bundle(dir.path());

    let loader = DemoPlanLoader::new(dir.path());
    let mut store = InMemoryStore::default();

    let first = DemoSeeder::new()
        .seed_if_needed(&mut store, &loader, "Demo Project")
        .unwrap();
    assert!(matches!(first, SeedResult::Seeded(_)));

    let second = DemoSeeder::new()
        .seed_if_needed(&mut store, &loader, "Demo Project")
        .unwrap();
    assert_eq!(second, SeedResult::Skipped);
    assert_eq!(store.batches.len(), 1);
}

#[test]
fn test_reseeding_reproduces_identifiers() {
    let dir = tempfile::tempdir().unwrap();
    write_bundle(dir.path());

    let loader = DemoPlanLoader::new(dir.path());

    let mut first_store = InMemoryStore::default();
    DemoSeeder::new()
        .seed_if_needed(&mut first_store, &loader, "Demo Project")
        .unwrap();

    let mut second_store = InMemoryStore::default();
    DemoSeeder::new()
        .seed_if_needed(&mut second_store, &loader, "Demo Project")
        .unwrap();

    let first_rooms: Vec<_> = first_store.batches[0].rooms.iter().map(|r| r.id).collect();
    let second_rooms: Vec<_> = second_store.batches[0].rooms.iter().map(|r| r.id).collect();
    assert_eq!(first_rooms, second_rooms);

    let first_levels: Vec<_> = first_store.batches[0].levels.iter().map(|l| l.id).collect();
    let second_levels: Vec<_> = second_store.batches[0].levels.iter().map(|l| l.id).collect();
    assert_eq!(first_levels, second_levels);
}

#[test]
fn test_room_keys_repeated_across_levels_stay_distinct() {
    // Templates number rooms per floor, so the same room key can
    // appear on every level; seeded IDs must not collide.
    let template = r#"{
        "levels": [
            {
                "id": "level-0",
                "index": 0,
                "name": "Ground floor",
                "background": {"geojson": "plans/level0.geojson", "bounds": [0.0, 0.0, 40.0, 25.0]},
                "rooms": [{
                    "id": "room-001",
                    "number": "0.01",
                    "shape": {"polygon": [[0,0],[8,0],[8,6],[0,6]]}
                }]
            },
            {
                "id": "level-1",
                "index": 1,
                "name": "First floor",
                "background": {"geojson": "plans/level1.geojson", "bounds": [0.0, 0.0, 40.0, 25.0]},
                "rooms": [{
                    "id": "room-001",
                    "number": "1.01",
                    "shape": {"polygon": [[0,0],[8,0],[8,6],[0,6]]}
                }]
            }
        ]
    }"#;

    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("plan_template.json"), template).unwrap();
    fs::write(dir.path().join("schema_version.json"), SCHEMA_VERSION).unwrap();

    let loader = DemoPlanLoader::new(dir.path());
    let mut store = InMemoryStore::default();
    DemoSeeder::new()
        .seed_if_needed(&mut store, &loader, "Demo Project")
        .unwrap();

    let rooms = &store.batches[0].rooms;
    assert_eq!(rooms.len(), 2);
    assert_ne!(rooms[0].id, rooms[1].id, "room IDs collided across levels");
    assert_ne!(rooms[0].level_id, rooms[1].level_id);
}

#[test]
fn test_degenerate_room_outline_is_seeded_without_geometry() {
    let template = r#"{
        "levels": [{
            "id": "level-0",
            "index": 0,
            "name": "Ground floor",
            "background": {"geojson": "plans/level0.geojson", "bounds": [0.0, 0.0, 40.0, 25.0]},
            "rooms": [
                {
                    "id": "room-001",
                    "number": "0.01",
                    "shape": {"polygon": [[0,0],[8,6]]}
                },
                {
                    "id": "room-002",
                    "number": "0.02",
                    "shape": {"polygon": [[8,0],[12,0],[12,3],[8,3]]}
                }
            ]
        }]
    }"#;

    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("plan_template.json"), template).unwrap();
    fs::write(dir.path().join("schema_version.json"), SCHEMA_VERSION).unwrap();

    let loader = DemoPlanLoader::new(dir.path());
    let mut store = InMemoryStore::default();
    DemoSeeder::new()
        .seed_if_needed(&mut store, &loader, "Demo Project")
        .unwrap();

    let rooms = &store.batches[0].rooms;
    assert!(rooms[0].geometry.is_none());
    assert!(rooms[1].geometry.is_some());
}

#[test]
fn test_missing_bundle_surfaces_resource_error() {
    let dir = tempfile::tempdir().unwrap();
    let loader = DemoPlanLoader::new(dir.path());
    let mut store = InMemoryStore::default();

    let err = DemoSeeder::new()
        .seed_if_needed(&mut store, &loader, "Demo Project")
        .unwrap_err();
    assert!(err.to_string().contains("plan_template.json"));
    assert!(store.batches.is_empty());
}
