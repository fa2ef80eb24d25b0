//! Serde models mirroring the bundled `plan_template.json`.

use serde::Deserialize;

use crate::geometry::{Point, Rect};

/// Root of the bundled plan template.
#[derive(Debug, Clone, Deserialize)]
pub struct DemoPlanTemplate {
    pub levels: Vec<DemoPlanLevel>,
}

/// One floor in the template. `id` is a human-readable key, not a
/// UUID; the seeder derives the stable identifier from it.
#[derive(Debug, Clone, Deserialize)]
pub struct DemoPlanLevel {
    pub id: String,
    pub index: i32,
    pub name: String,
    pub background: DemoPlanBackground,
    #[serde(default)]
    pub north: Option<DemoPlanNorth>,
    pub rooms: Vec<DemoPlanRoom>,
}

/// Background linework reference: GeoJSON path plus plan-space bounds
/// as `[min_x, min_y, max_x, max_y]`.
#[derive(Debug, Clone, Deserialize)]
pub struct DemoPlanBackground {
    pub geojson: String,
    pub bounds: Vec<f64>,
}

impl DemoPlanBackground {
    /// Bounds as a [`Rect`], or `None` when the array is malformed.
    pub fn bounds_rect(&self) -> Option<Rect> {
        match self.bounds.as_slice() {
            [min_x, min_y, max_x, max_y] => Some(Rect::new(*min_x, *min_y, *max_x, *max_y)),
            _ => None,
        }
    }
}

/// North arrow as a directed segment in plan coordinates.
#[derive(Debug, Clone, Deserialize)]
pub struct DemoPlanNorth {
    pub start: [f64; 2],
    pub end: [f64; 2],
}

impl DemoPlanNorth {
    pub fn start_point(&self) -> Point {
        Point::new(self.start[0], self.start[1])
    }

    pub fn end_point(&self) -> Point {
        Point::new(self.end[0], self.end[1])
    }
}

/// One room outline in the template.
#[derive(Debug, Clone, Deserialize)]
pub struct DemoPlanRoom {
    pub id: String,
    pub number: String,
    #[serde(default)]
    pub name: Option<String>,
    pub shape: DemoPlanRoomShape,
}

/// Room outline as a list of `[x, y]` pairs.
#[derive(Debug, Clone, Deserialize)]
pub struct DemoPlanRoomShape {
    pub polygon: Vec<[f64; 2]>,
}

impl DemoPlanRoomShape {
    pub fn points(&self) -> Vec<Point> {
        self.polygon.iter().map(|p| Point::new(p[0], p[1])).collect()
    }
}
