use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geometry::Rect;

/// One floor of a project's building, with its background plan
/// reference and optional north orientation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    pub id: Uuid,
    pub project_id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<i32>,
    pub order_index: i32,
    /// Relative path of the background GeoJSON inside the plan bundle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_geojson_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_bounds: Option<Rect>,
    /// Clockwise-from-north bearing of the plan's north arrow.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub north_angle_degrees: Option<f64>,
}
