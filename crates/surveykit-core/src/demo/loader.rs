//! Demo bundle loading from disk.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::error::{CoreError, CoreResult};
use crate::model::SchemaVersion;

use super::plan::DemoPlanTemplate;

const PLAN_TEMPLATE_RESOURCE: &str = "plan_template.json";
const SCHEMA_VERSION_RESOURCE: &str = "schema_version.json";

/// Reads the bundled demo resources from a directory.
#[derive(Debug, Clone)]
pub struct DemoPlanLoader {
    bundle_dir: PathBuf,
}

impl DemoPlanLoader {
    pub fn new(bundle_dir: impl Into<PathBuf>) -> Self {
        Self {
            bundle_dir: bundle_dir.into(),
        }
    }

    pub fn bundle_dir(&self) -> &Path {
        &self.bundle_dir
    }

    /// Loads the floor/room template.
    pub fn load_plan_template(&self) -> CoreResult<DemoPlanTemplate> {
        self.decode_json(PLAN_TEMPLATE_RESOURCE)
    }

    /// Loads the parameter schema bundled with the demo plan.
    pub fn load_schema_version(&self) -> CoreResult<SchemaVersion> {
        self.decode_json(SCHEMA_VERSION_RESOURCE)
    }

    fn decode_json<T: DeserializeOwned>(&self, resource: &str) -> CoreResult<T> {
        let path = self.bundle_dir.join(resource);
        if !path.is_file() {
            return Err(CoreError::ResourceMissing(resource.to_string()));
        }
        let data = fs::read(&path)?;
        serde_json::from_slice(&data).map_err(|source| CoreError::DecodeFailed {
            resource: resource.to_string(),
            source,
        })
    }
}
