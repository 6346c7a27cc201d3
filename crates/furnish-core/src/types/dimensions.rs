//! Extents of furniture and rooms

use serde::{Deserialize, Serialize};

/// Size of a furniture item in meters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl Dimensions {
    pub const fn new(width: f32, height: f32, depth: f32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }
}

/// Interior size of a room in meters
///
/// `width` runs along x, `length` along z and `height` along y.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomDimensions {
    pub width: f32,
    pub length: f32,
    pub height: f32,
}

impl RoomDimensions {
    pub const fn new(width: f32, length: f32, height: f32) -> Self {
        Self {
            width,
            length,
            height,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.width.is_finite() && self.length.is_finite() && self.height.is_finite()
    }
}

impl Default for RoomDimensions {
    fn default() -> Self {
        Self::new(8.0, 10.0, 3.0)
    }
}
