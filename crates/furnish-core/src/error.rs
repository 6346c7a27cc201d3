//! Error types for the fallible edges of the placement core

use thiserror::Error;

/// Geometry-related errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("Grid size must be a positive finite number, got {0}")]
    InvalidGridSize(f32),
}

/// Placement rejected by an enforcing placement policy
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlacementError {
    #[error("Furniture '{template_id}' does not fit inside the room at the requested position")]
    OutOfBounds { template_id: String },

    #[error("Furniture '{template_id}' overlaps {} placed item(s)", .overlapping.len())]
    Overlapping {
        template_id: String,
        overlapping: Vec<String>,
    },
}

/// A room configuration value outside the range the editor accepts
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoomConfigError {
    #[error("{field} must be within {min}..={max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },

    #[error("{field} is not a #RRGGBB color: {value}")]
    InvalidColor { field: &'static str, value: String },

    #[error("Room name must not be empty")]
    EmptyName,
}

/// Errors raised while exporting or importing room snapshots
#[derive(Debug, Error)]
pub enum ShareError {
    #[error("Invalid room JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Share link has no 'room' parameter")]
    MissingRoomParameter,

    #[error("Share link is not valid percent-encoded UTF-8: {0}")]
    Decode(String),
}
