//! Grid snapping and placement validation
//!
//! All functions here are pure. Positions use meters with y as the vertical
//! axis; furniture is centered horizontally on its position and rests with its
//! base at `position.y`.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::furniture::PlacedFurniture;
use crate::types::{Dimensions, RoomDimensions};

/// Size of a snapping grid cell, always positive and finite
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct GridSize(f32);

impl GridSize {
    pub const DEFAULT: GridSize = GridSize(0.5);

    pub fn new(size: f32) -> Result<Self, GeometryError> {
        if size.is_finite() && size > 0.0 {
            Ok(Self(size))
        } else {
            Err(GeometryError::InvalidGridSize(size))
        }
    }

    pub fn get(&self) -> f32 {
        self.0
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f32> for GridSize {
    type Error = GeometryError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<GridSize> for f32 {
    fn from(size: GridSize) -> Self {
        size.0
    }
}

/// Round x and z to the nearest grid multiple; y is never snapped
pub fn snap_to_grid(position: Vec3, grid: GridSize) -> Vec3 {
    let g = grid.get();
    Vec3::new(
        (position.x / g).round() * g,
        position.y,
        (position.z / g).round() * g,
    )
}

/// Check whether an item's bounding box lies entirely inside the room
///
/// Faces lying exactly on a wall, the floor or the ceiling are inside.
pub fn is_within_room(position: Vec3, dimensions: &Dimensions, room: &RoomDimensions) -> bool {
    let half_w = dimensions.width / 2.0;
    let half_d = dimensions.depth / 2.0;

    if position.x - half_w < 0.0 || position.x + half_w > room.width {
        return false;
    }
    if position.z - half_d < 0.0 || position.z + half_d > room.length {
        return false;
    }
    if position.y < 0.0 || position.y + dimensions.height > room.height {
        return false;
    }

    true
}

/// Floor-plane overlap test between two footprints
///
/// Height is ignored and rotation is not taken into account. Boxes that only
/// touch along an edge do not overlap.
pub fn footprints_overlap(a_pos: Vec3, a: &Dimensions, b_pos: Vec3, b: &Dimensions) -> bool {
    let x_overlap = (a_pos.x - b_pos.x).abs() < (a.width + b.width) / 2.0;
    let z_overlap = (a_pos.z - b_pos.z).abs() < (a.depth + b.depth) / 2.0;
    x_overlap && z_overlap
}

/// Check a candidate footprint against every placed item
pub fn check_collision<'a>(
    position: Vec3,
    dimensions: &Dimensions,
    existing: impl IntoIterator<Item = &'a PlacedFurniture>,
) -> bool {
    existing
        .into_iter()
        .any(|item| footprints_overlap(position, dimensions, item.position, item.dimensions()))
}

/// Ids of all placed items the candidate footprint overlaps
pub fn overlapping_ids<'a>(
    position: Vec3,
    dimensions: &Dimensions,
    existing: impl IntoIterator<Item = &'a PlacedFurniture>,
) -> Vec<&'a str> {
    existing
        .into_iter()
        .filter(|item| footprints_overlap(position, dimensions, item.position, item.dimensions()))
        .map(|item| item.id.as_str())
        .collect()
}
