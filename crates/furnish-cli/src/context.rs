//! Shared application context
//!
//! The room store is owned here and handed to every UI surface as a
//! [`SharedStore`] handle; all mutations still go through the store API.

use std::sync::Arc;

use furnish_core::{ActionOutcome, RoomAction, RoomConfig, RoomStore, snap_to_grid};
use parking_lot::Mutex;

use crate::config::{ConfigError, ConfigManager, SharedConfig, create_shared_config};

/// Shared room store type
pub type SharedStore = Arc<Mutex<RoomStore>>;

/// Handles passed to everything that reads or mutates the room
#[derive(Clone)]
pub struct AppContext {
    pub store: SharedStore,
    pub config: SharedConfig,
}

impl AppContext {
    /// Build a store configured from the given config manager, starting
    /// with the configured room
    pub fn new(manager: ConfigManager) -> Self {
        let config = manager.config();
        let mut store = RoomStore::new(config.editor.placement_settings());
        store.set_grid_visible(config.editor.show_grid);
        if let Some(room) = config.room.room() {
            store.set_current_room(room);
        }

        Self {
            store: Arc::new(Mutex::new(store)),
            config: create_shared_config(manager),
        }
    }

    /// Apply a command to the store
    pub fn dispatch(&self, action: RoomAction) -> ActionOutcome {
        tracing::debug!("Action: {}", action.description());
        let mut store = self.store.lock();
        action.apply(&mut store)
    }

    /// Make a room the active one
    pub fn open_room(&self, room: RoomConfig) {
        let mut store = self.store.lock();
        store.set_current_room(room);
        store.frame_room();
    }

    /// Write unsaved configuration changes to the config file
    pub fn save_config(&self) -> Result<(), ConfigError> {
        self.config.write().save()
    }

    /// Whether loaded layouts are snapped to the grid
    pub fn snap_enabled(&self) -> bool {
        self.store.lock().settings().snap_to_grid
    }

    /// Move every placed item onto the configured grid
    pub fn snap_layout(&self) -> usize {
        let mut store = self.store.lock();
        let grid = store.settings().grid_size;
        let moves: Vec<_> = store
            .placed_furniture()
            .iter()
            .map(|item| (item.id.clone(), item.position, snap_to_grid(item.position, grid)))
            .filter(|(_, before, after)| before != after)
            .collect();

        for (id, _, position) in &moves {
            store.update_position(id, *position);
        }
        tracing::info!("Snapped {} item(s) to a {} m grid", moves.len(), grid.get());
        moves.len()
    }
}

#[cfg(test)]
mod tests {
    use furnish_core::RoomDimensions;
    use glam::Vec3;

    use super::*;

    fn context() -> (tempfile::TempDir, AppContext) {
        let dir = tempfile::tempdir().unwrap();
        let manager = ConfigManager::with_path(dir.path().join("config.ron"));
        (dir, AppContext::new(manager))
    }

    #[test]
    fn test_dispatch_through_shared_handle() {
        let (_dir, ctx) = context();
        let handle = ctx.clone();

        let outcome = ctx.dispatch(RoomAction::PlaceFurniture {
            template_id: "armchair-01".into(),
            position: Some(Vec3::new(2.0, 0.0, 2.0)),
        });
        assert!(matches!(outcome, ActionOutcome::Placed { .. }));
        assert_eq!(handle.store.lock().placed_furniture().len(), 1);
    }

    #[test]
    fn test_snap_layout() {
        let (_dir, ctx) = context();
        ctx.dispatch(RoomAction::PlaceFurniture {
            template_id: "armchair-01".into(),
            position: Some(Vec3::new(2.2, 0.3, 2.0)),
        });
        ctx.dispatch(RoomAction::PlaceFurniture {
            template_id: "floor-lamp-01".into(),
            position: Some(Vec3::new(6.0, 0.0, 6.0)),
        });

        assert_eq!(ctx.snap_layout(), 1);
        let store = ctx.store.lock();
        assert_eq!(store.placed_furniture()[0].position, Vec3::new(2.0, 0.3, 2.0));
    }

    #[test]
    fn test_open_room_frames_camera() {
        let (_dir, ctx) = context();
        let mut room = RoomConfig::default();
        room.dimensions.width = 12.0;
        ctx.open_room(room);
        assert_eq!(ctx.store.lock().view_state().camera_target.x, 6.0);
    }

    #[test]
    fn test_room_defaults_seed_current_room() {
        let dir = tempfile::tempdir().unwrap();
        let mut manager = ConfigManager::with_path(dir.path().join("config.ron"));
        manager.config_mut().room.name = "Loft".into();
        manager.config_mut().room.dimensions = RoomDimensions::new(12.0, 9.0, 4.0);

        let ctx = AppContext::new(manager);
        let store = ctx.store.lock();
        assert_eq!(store.current_room().name, "Loft");
        assert_eq!(store.current_room().dimensions.width, 12.0);
    }

    #[test]
    fn test_save_config_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ron");
        let mut manager = ConfigManager::with_path(&path);
        manager.config_mut().editor.snap_to_grid = true;

        let ctx = AppContext::new(manager);
        assert!(ctx.snap_enabled());
        ctx.save_config().unwrap();
        assert!(!ctx.config.read().is_dirty());
        assert!(ConfigManager::with_path(&path).config().editor.snap_to_grid);
    }

    #[test]
    fn test_config_applied_to_store() {
        let dir = tempfile::tempdir().unwrap();
        let mut manager = ConfigManager::with_path(dir.path().join("config.ron"));
        manager.config_mut().editor.show_grid = false;
        manager.config_mut().editor.enforce_placement = true;

        let ctx = AppContext::new(manager);
        let store = ctx.store.lock();
        assert!(!store.is_grid_visible());
        assert_eq!(
            store.settings().policy,
            furnish_core::PlacementPolicy::Enforce
        );
        assert!(ctx.config.read().is_dirty());
    }
}
