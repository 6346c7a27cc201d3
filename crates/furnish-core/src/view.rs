//! Camera view record shared with the rendering layer

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::types::RoomDimensions;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub camera_position: Vec3,
    pub camera_target: Vec3,
    pub zoom: f32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            camera_position: Vec3::new(8.0, 6.0, 8.0),
            camera_target: Vec3::new(4.0, 0.0, 5.0),
            zoom: 1.0,
        }
    }
}

impl ViewState {
    /// Camera placed outside the far corner, looking at the floor center
    pub fn framing(room: &RoomDimensions) -> Self {
        Self {
            camera_position: Vec3::new(room.width + 2.0, room.height + 3.0, room.length + 2.0),
            camera_target: Vec3::new(room.width / 2.0, 0.0, room.length / 2.0),
            zoom: 1.0,
        }
    }
}
