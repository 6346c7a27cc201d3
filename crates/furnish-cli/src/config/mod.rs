//! Application configuration module
//!
//! This module handles application-wide configuration: placement behaviour of
//! the room store, the initial state of the editor and the room it starts with.

mod manager;

pub use manager::{ConfigError, ConfigManager, SharedConfig, create_shared_config};

use furnish_core::{
    GridSize, PlacementPolicy, PlacementSettings, RoomConfig, RoomConfigPatch, RoomDimensions,
};
use serde::{Deserialize, Serialize};

/// Editor preferences
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorConfig {
    /// Grid cell size in meters
    pub grid_size: f32,
    /// Snap placed and moved furniture to the grid
    pub snap_to_grid: bool,
    /// Reject invalid placements instead of only reporting them
    pub enforce_placement: bool,
    /// Show the floor grid on startup
    pub show_grid: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            grid_size: GridSize::DEFAULT.get(),
            snap_to_grid: false,
            enforce_placement: false,
            show_grid: true,
        }
    }
}

impl EditorConfig {
    /// Placement settings for the room store
    ///
    /// An invalid grid size falls back to the default.
    pub fn placement_settings(&self) -> PlacementSettings {
        let grid_size = GridSize::new(self.grid_size).unwrap_or_else(|e| {
            tracing::warn!("{}, using {}", e, GridSize::DEFAULT.get());
            GridSize::DEFAULT
        });

        PlacementSettings {
            grid_size,
            snap_to_grid: self.snap_to_grid,
            policy: if self.enforce_placement {
                PlacementPolicy::Enforce
            } else {
                PlacementPolicy::Advisory
            },
        }
    }
}

/// Starting room appearance
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RoomDefaults {
    pub name: String,
    /// Width, length and height in meters
    pub dimensions: RoomDimensions,
    pub wall_color: String,
    pub floor_material: String,
    pub floor_color: String,
}

impl Default for RoomDefaults {
    fn default() -> Self {
        let room = RoomConfig::default();
        Self {
            name: room.name,
            dimensions: room.dimensions,
            wall_color: room.wall_color,
            floor_material: room.floor_material,
            floor_color: room.floor_color,
        }
    }
}

impl RoomDefaults {
    /// The defaults as a patch over the built-in default room
    pub fn patch(&self) -> RoomConfigPatch {
        RoomConfigPatch::new()
            .name(self.name.clone())
            .dimensions(
                self.dimensions.width,
                self.dimensions.length,
                self.dimensions.height,
            )
            .wall_color(self.wall_color.clone())
            .floor_material(self.floor_material.clone())
            .floor_color(self.floor_color.clone())
    }

    /// Build the starting room, or `None` when a value is outside what the
    /// room editor allows
    pub fn room(&self) -> Option<RoomConfig> {
        let patch = self.patch();
        if let Err(e) = patch.validate() {
            tracing::warn!("Ignoring room defaults: {}", e);
            return None;
        }
        let mut room = RoomConfig::default();
        room.apply_patch(patch);
        Some(room)
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppConfig {
    /// Configuration format version
    #[serde(default)]
    pub version: u32,
    /// Editor settings
    #[serde(default)]
    pub editor: EditorConfig,
    /// Starting room
    #[serde(default)]
    pub room: RoomDefaults,
}

impl AppConfig {
    /// Current configuration version
    pub const CURRENT_VERSION: u32 = 1;

    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_settings_from_config() {
        let editor = EditorConfig {
            grid_size: 0.25,
            snap_to_grid: true,
            enforce_placement: true,
            show_grid: false,
        };
        let settings = editor.placement_settings();
        assert_eq!(settings.grid_size.get(), 0.25);
        assert!(settings.snap_to_grid);
        assert_eq!(settings.policy, PlacementPolicy::Enforce);
    }

    #[test]
    fn test_invalid_grid_size_falls_back() {
        let editor = EditorConfig {
            grid_size: -1.0,
            ..Default::default()
        };
        assert_eq!(editor.placement_settings().grid_size, GridSize::DEFAULT);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: AppConfig = ron::from_str("(version: 1)").unwrap();
        assert_eq!(config.editor, EditorConfig::default());
        assert_eq!(config.room, RoomDefaults::default());
    }

    #[test]
    fn test_room_defaults_build_starting_room() {
        let config: AppConfig = ron::from_str(
            r##"(version: 1, room: (name: "Studio", dimensions: (width: 5.0, length: 6.0, height: 2.5), wall_color: "#FFFFFF"))"##,
        )
        .unwrap();

        let room = config.room.room().unwrap();
        assert_eq!(room.name, "Studio");
        assert_eq!(room.dimensions, RoomDimensions::new(5.0, 6.0, 2.5));
        assert_eq!(room.wall_color, "#FFFFFF");
        assert_eq!(room.floor_color, RoomConfig::default().floor_color);
        assert_eq!(room.id, RoomConfig::DEFAULT_ID);
    }

    #[test]
    fn test_invalid_room_defaults_rejected() {
        let defaults = RoomDefaults {
            dimensions: RoomDimensions::new(40.0, 10.0, 3.0),
            ..Default::default()
        };
        assert!(defaults.room().is_none());

        let defaults = RoomDefaults {
            floor_color: "brown".into(),
            ..Default::default()
        };
        assert!(defaults.room().is_none());
    }
}
