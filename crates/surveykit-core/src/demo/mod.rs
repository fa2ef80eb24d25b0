//! Demo content loading and seeding
//!
//! Fresh installs ship with a bundled demo plan (floor templates plus
//! a parameter schema) so the app is usable before any real project
//! is provisioned. The loader decodes the bundled JSON; the seeder
//! turns it into domain entities with stable identifiers and hands
//! them to the collaborator object store in one transactional batch.

mod loader;
mod plan;
mod seeder;

pub use loader::DemoPlanLoader;
pub use plan::{
    DemoPlanBackground, DemoPlanLevel, DemoPlanNorth, DemoPlanRoom, DemoPlanRoomShape,
    DemoPlanTemplate,
};
pub use seeder::{DemoSeeder, ProjectStore, SeedBatch, SeedResult};
