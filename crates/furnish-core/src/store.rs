//! Room/placement store
//!
//! [`RoomStore`] is the single source of truth for the active room. Every
//! mutation goes through its methods; the rendering layer only reads it.
//!
//! Placed furniture is stored once, inside `current_room.placed_furniture`,
//! and selection is a single optional id. Lookup misses on remove, update,
//! select and load are no-ops.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::{Catalog, FurnitureCategory, FurnitureTemplate};
use crate::error::PlacementError;
use crate::furniture::PlacedFurniture;
use crate::geometry::{GridSize, is_within_room, overlapping_ids, snap_to_grid};
use crate::room::{RoomConfig, RoomConfigPatch};
use crate::saved::SavedRooms;
use crate::types::Dimensions;
use crate::view::ViewState;

/// What happens when a validated placement fails its checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlacementPolicy {
    /// Commit anyway and hand the report back to the caller
    #[default]
    Advisory,
    /// Reject placements that leave the room or overlap other items
    Enforce,
}

/// Placement behaviour of a store
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlacementSettings {
    pub grid_size: GridSize,
    /// Snap validated placements and moves to the grid
    pub snap_to_grid: bool,
    pub policy: PlacementPolicy,
}

/// Result of checking a candidate placement against the current room
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementReport {
    pub within_bounds: bool,
    pub overlapping_ids: Vec<String>,
}

impl PlacementReport {
    pub fn is_clear(&self) -> bool {
        self.within_bounds && self.overlapping_ids.is_empty()
    }
}

/// The active room, its saved snapshots and the editor view state
#[derive(Debug, Clone)]
pub struct RoomStore {
    current_room: RoomConfig,
    saved_rooms: SavedRooms,
    selected_furniture_id: Option<String>,
    grid_visible: bool,
    view_state: ViewState,
    selected_category: Option<FurnitureCategory>,
    dragging: bool,
    settings: PlacementSettings,
}

impl Default for RoomStore {
    fn default() -> Self {
        Self::new(PlacementSettings::default())
    }
}

impl RoomStore {
    /// Create a store holding the default room
    pub fn new(settings: PlacementSettings) -> Self {
        Self {
            current_room: RoomConfig::default(),
            saved_rooms: SavedRooms::default(),
            selected_furniture_id: None,
            grid_visible: true,
            view_state: ViewState::default(),
            selected_category: None,
            dragging: false,
            settings,
        }
    }

    // ========== Queries ==========

    pub fn current_room(&self) -> &RoomConfig {
        &self.current_room
    }

    /// Placed furniture of the current room, in placement order
    pub fn placed_furniture(&self) -> &[PlacedFurniture] {
        self.current_room.placed_furniture.as_slice()
    }

    pub fn furniture(&self, id: &str) -> Option<&PlacedFurniture> {
        self.current_room.placed_furniture.get(id)
    }

    pub fn selected_furniture_id(&self) -> Option<&str> {
        self.selected_furniture_id.as_deref()
    }

    pub fn selected_furniture(&self) -> Option<&PlacedFurniture> {
        self.selected_furniture_id
            .as_deref()
            .and_then(|id| self.furniture(id))
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_furniture_id.as_deref() == Some(id)
    }

    pub fn is_grid_visible(&self) -> bool {
        self.grid_visible
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view_state
    }

    pub fn saved_rooms(&self) -> &SavedRooms {
        &self.saved_rooms
    }

    pub fn selected_category(&self) -> Option<FurnitureCategory> {
        self.selected_category
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn settings(&self) -> &PlacementSettings {
        &self.settings
    }

    /// Catalog templates filtered by the selected category
    pub fn visible_catalog(&self) -> Vec<&'static FurnitureTemplate> {
        match self.selected_category {
            Some(category) => Catalog::by_category(category).collect(),
            None => Catalog::all().iter().collect(),
        }
    }

    // ========== Placement checks ==========

    /// Check a footprint at a position against the room bounds and the other
    /// placed items, skipping `ignore` (the item being moved, if any)
    pub fn check_placement(
        &self,
        dimensions: &Dimensions,
        position: Vec3,
        ignore: Option<&str>,
    ) -> PlacementReport {
        let others = self
            .current_room
            .placed_furniture
            .iter()
            .filter(|item| Some(item.id.as_str()) != ignore);

        PlacementReport {
            within_bounds: is_within_room(position, dimensions, &self.current_room.dimensions),
            overlapping_ids: overlapping_ids(position, dimensions, others)
                .into_iter()
                .map(str::to_owned)
                .collect(),
        }
    }

    /// Snap a position when grid snapping is enabled
    pub fn prepare_position(&self, position: Vec3) -> Vec3 {
        if self.settings.snap_to_grid {
            snap_to_grid(position, self.settings.grid_size)
        } else {
            position
        }
    }

    /// Default drop point: the floor center of the room, where the item's
    /// base rests on the floor
    pub fn drop_position(&self) -> Vec3 {
        let room = &self.current_room.dimensions;
        Vec3::new(room.width / 2.0, 0.0, room.length / 2.0)
    }

    // ========== Furniture mutations ==========

    /// Place a template without validation, returning the new instance id
    pub fn place(&mut self, template: &FurnitureTemplate, position: Vec3) -> String {
        let item = PlacedFurniture::from_template(template, position);
        let id = self.current_room.placed_furniture.insert(item);
        self.current_room.touch();
        tracing::info!("Placed {} as {}", template.name, id);
        id
    }

    /// Place a template after snapping and checking it under the store policy
    ///
    /// Under [`PlacementPolicy::Advisory`] the item is always placed and the
    /// report tells the caller what was wrong, if anything.
    pub fn place_validated(
        &mut self,
        template: &FurnitureTemplate,
        position: Vec3,
    ) -> Result<(String, PlacementReport), PlacementError> {
        let position = self.prepare_position(position);
        let report = self.check_placement(&template.dimensions, position, None);

        if self.settings.policy == PlacementPolicy::Enforce {
            Self::enforce(&template.id, &report)?;
        } else if !report.is_clear() {
            tracing::warn!(
                "Placing {} with issues: within_bounds={}, overlaps={}",
                template.id,
                report.within_bounds,
                report.overlapping_ids.len()
            );
        }

        Ok((self.place(template, position), report))
    }

    /// Move a placed item after snapping and checking it under the store policy
    ///
    /// Returns `Ok(None)` when the id is unknown.
    pub fn move_validated(
        &mut self,
        id: &str,
        position: Vec3,
    ) -> Result<Option<PlacementReport>, PlacementError> {
        let Some(item) = self.furniture(id) else {
            tracing::debug!("Move ignored, furniture not found: {}", id);
            return Ok(None);
        };

        let position = self.prepare_position(position);
        let report = self.check_placement(item.dimensions(), position, Some(id));
        if self.settings.policy == PlacementPolicy::Enforce {
            Self::enforce(item.template_id(), &report)?;
        }

        self.update_position(id, position);
        Ok(Some(report))
    }

    fn enforce(template_id: &str, report: &PlacementReport) -> Result<(), PlacementError> {
        if !report.within_bounds {
            tracing::warn!("Rejected placement of {}: out of bounds", template_id);
            return Err(PlacementError::OutOfBounds {
                template_id: template_id.to_string(),
            });
        }
        if !report.overlapping_ids.is_empty() {
            tracing::warn!("Rejected placement of {}: overlapping", template_id);
            return Err(PlacementError::Overlapping {
                template_id: template_id.to_string(),
                overlapping: report.overlapping_ids.clone(),
            });
        }
        Ok(())
    }

    /// Remove a placed item, clearing the selection if it was selected
    pub fn remove(&mut self, id: &str) {
        if self.current_room.placed_furniture.remove(id).is_none() {
            tracing::debug!("Remove ignored, furniture not found: {}", id);
            return;
        }
        if self.is_selected(id) {
            self.selected_furniture_id = None;
        }
        self.current_room.touch();
        tracing::info!("Removed furniture {}", id);
    }

    pub fn update_position(&mut self, id: &str, position: Vec3) {
        match self.current_room.placed_furniture.get_mut(id) {
            Some(item) => {
                item.position = position;
                self.current_room.touch();
            }
            None => tracing::debug!("Position update ignored, furniture not found: {}", id),
        }
    }

    pub fn update_rotation(&mut self, id: &str, rotation: Vec3) {
        match self.current_room.placed_furniture.get_mut(id) {
            Some(item) => {
                item.rotation = rotation;
                self.current_room.touch();
            }
            None => tracing::debug!("Rotation update ignored, furniture not found: {}", id),
        }
    }

    /// Select a placed item, or clear the selection with `None`
    ///
    /// Selecting an unknown id clears the selection.
    pub fn select(&mut self, id: Option<&str>) {
        self.selected_furniture_id = match id {
            Some(id) if self.current_room.placed_furniture.contains(id) => Some(id.to_string()),
            Some(id) => {
                tracing::debug!("Select ignored, furniture not found: {}", id);
                None
            }
            None => None,
        };
        tracing::debug!("Selection: {:?}", self.selected_furniture_id);
    }

    /// Remove every placed item and clear the selection
    pub fn clear_room(&mut self) {
        self.current_room.placed_furniture.clear();
        self.selected_furniture_id = None;
        self.current_room.touch();
        tracing::info!("Cleared room {}", self.current_room.id);
    }

    // ========== Room mutations ==========

    pub fn update_room_config(&mut self, patch: RoomConfigPatch) {
        self.current_room.apply_patch(patch);
    }

    /// Replace the active room wholesale and clear the selection
    pub fn set_current_room(&mut self, room: RoomConfig) {
        tracing::info!("Opened room {} ({})", room.name, room.id);
        self.current_room = room;
        self.selected_furniture_id = None;
    }

    /// Snapshot the current room into the saved-room registry
    pub fn save_room(&mut self) -> String {
        let mut snapshot = self.current_room.clone();
        snapshot.id = format!("room-{}", Uuid::now_v7().simple());
        snapshot.touch();

        let id = self.saved_rooms.push(snapshot);
        tracing::info!("Saved room {} as {}", self.current_room.name, id);
        id
    }

    /// Restore a saved snapshot; returns false when the id is unknown
    pub fn load_room(&mut self, id: &str) -> bool {
        let Some(room) = self.saved_rooms.get(id) else {
            tracing::debug!("Load ignored, saved room not found: {}", id);
            return false;
        };
        let room = room.clone();
        self.set_current_room(room);
        true
    }

    // ========== Editor state ==========

    pub fn toggle_grid(&mut self) {
        self.grid_visible = !self.grid_visible;
    }

    pub fn set_grid_visible(&mut self, visible: bool) {
        self.grid_visible = visible;
    }

    pub fn set_selected_category(&mut self, category: Option<FurnitureCategory>) {
        self.selected_category = category;
    }

    pub fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    pub fn set_view_state(&mut self, view: ViewState) {
        self.view_state = view;
    }

    /// Point the camera at the current room
    pub fn frame_room(&mut self) {
        self.view_state = ViewState::framing(&self.current_room.dimensions);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RoomDimensions;

    fn template(id: &str) -> &'static FurnitureTemplate {
        Catalog::by_id(id).unwrap()
    }

    fn selected_count(store: &RoomStore) -> usize {
        store
            .placed_furniture()
            .iter()
            .filter(|f| store.is_selected(&f.id))
            .count()
    }

    #[test]
    fn test_place_assigns_unique_ids() {
        let mut store = RoomStore::default();
        let sofa = template("sofa-modern-01");
        let a = store.place(sofa, Vec3::new(4.0, 0.4, 5.0));
        let b = store.place(sofa, Vec3::new(4.0, 0.4, 5.0));

        assert_ne!(a, b);
        assert_eq!(store.placed_furniture().len(), 2);
        assert_eq!(store.current_room().placed_furniture.len(), 2);
        assert!(store.selected_furniture_id().is_none());
    }

    #[test]
    fn test_mutations_advance_updated_at() {
        let mut store = RoomStore::default();
        let t0 = store.current_room().updated_at;
        let id = store.place(template("armchair-01"), Vec3::new(2.0, 0.0, 2.0));
        let t1 = store.current_room().updated_at;
        store.update_position(&id, Vec3::new(3.0, 0.0, 3.0));
        let t2 = store.current_room().updated_at;
        store.update_rotation(&id, Vec3::new(0.0, 1.57, 0.0));
        let t3 = store.current_room().updated_at;
        store.update_room_config(RoomConfigPatch::new().name("Den"));
        let t4 = store.current_room().updated_at;

        assert!(t0 < t1 && t1 < t2 && t2 < t3 && t3 < t4);
        let item = store.furniture(&id).unwrap();
        assert_eq!(item.position, Vec3::new(3.0, 0.0, 3.0));
        assert_eq!(item.rotation, Vec3::new(0.0, 1.57, 0.0));
    }

    #[test]
    fn test_updates_on_unknown_id_are_noops() {
        let mut store = RoomStore::default();
        store.place(template("armchair-01"), Vec3::new(2.0, 0.0, 2.0));
        let before = store.current_room().clone();

        store.remove("missing");
        store.update_position("missing", Vec3::ONE);
        store.update_rotation("missing", Vec3::ONE);
        assert!(!store.load_room("missing"));

        assert_eq!(store.current_room(), &before);
    }

    #[test]
    fn test_single_selection() {
        let mut store = RoomStore::default();
        let a = store.place(template("armchair-01"), Vec3::new(2.0, 0.0, 2.0));
        let b = store.place(template("floor-lamp-01"), Vec3::new(6.0, 0.0, 2.0));

        store.select(Some(a.as_str()));
        assert_eq!(selected_count(&store), 1);
        assert_eq!(store.selected_furniture_id(), Some(a.as_str()));

        store.select(Some(b.as_str()));
        assert_eq!(selected_count(&store), 1);
        assert!(store.is_selected(&b) && !store.is_selected(&a));
        assert_eq!(store.selected_furniture().unwrap().id, b);

        store.select(None);
        assert_eq!(selected_count(&store), 0);
        assert!(store.selected_furniture_id().is_none());

        store.select(Some("missing"));
        assert_eq!(selected_count(&store), 0);
        assert!(store.selected_furniture_id().is_none());
    }

    #[test]
    fn test_remove_selected_clears_selection() {
        let mut store = RoomStore::default();
        let a = store.place(template("armchair-01"), Vec3::new(2.0, 0.0, 2.0));
        let b = store.place(template("floor-lamp-01"), Vec3::new(6.0, 0.0, 2.0));

        store.select(Some(b.as_str()));
        store.remove(&a);
        assert_eq!(store.selected_furniture_id(), Some(b.as_str()));

        store.remove(&b);
        assert!(store.selected_furniture_id().is_none());
        assert!(store.placed_furniture().is_empty());
    }

    #[test]
    fn test_clear_room() {
        let mut store = RoomStore::default();
        let a = store.place(template("armchair-01"), Vec3::new(2.0, 0.0, 2.0));
        store.place(template("bed-queen-01"), Vec3::new(5.0, 0.0, 5.0));
        store.select(Some(a.as_str()));

        store.clear_room();
        assert!(store.placed_furniture().is_empty());
        assert!(store.current_room().placed_furniture.is_empty());
        assert!(store.selected_furniture_id().is_none());
    }

    #[test]
    fn test_sofa_scenario() {
        let mut store = RoomStore::default();
        assert_eq!(
            store.current_room().dimensions,
            RoomDimensions::new(8.0, 10.0, 3.0)
        );

        let sofa = template("sofa-modern-01");
        let id = store.place(sofa, Vec3::new(4.0, 0.4, 5.0));
        let report =
            store.check_placement(&sofa.dimensions, Vec3::new(4.0, 0.4, 5.0), Some(id.as_str()));
        assert!(report.is_clear());

        let table = template("coffee-table-01");
        let report = store.check_placement(&table.dimensions, Vec3::new(4.0, 0.0, 5.0), None);
        assert!(report.within_bounds);
        assert_eq!(report.overlapping_ids, vec![id.clone()]);

        store.update_position(&id, Vec3::new(0.5, 0.4, 5.0));
        let moved = store.furniture(&id).unwrap();
        let report =
            store.check_placement(moved.dimensions(), moved.position, Some(id.as_str()));
        assert!(!report.within_bounds);
    }

    #[test]
    fn test_save_then_load_restores_snapshot() {
        let mut store = RoomStore::default();
        store.place(template("bed-queen-01"), Vec3::new(4.0, 0.0, 3.0));
        store.place(template("nightstand-01"), Vec3::new(2.5, 0.0, 2.0));
        let saved_furniture = store.placed_furniture().to_vec();
        let current_id = store.current_room().id.clone();

        let saved_id = store.save_room();
        assert_ne!(saved_id, current_id);
        assert_eq!(store.saved_rooms().iter().count(), 2);
        assert_eq!(store.current_room().id, current_id);

        let first = store.placed_furniture()[0].id.clone();
        store.update_position(&first, Vec3::new(7.0, 0.0, 7.0));
        store.place(template("dresser-01"), Vec3::new(6.0, 0.0, 8.0));
        store.select(Some(first.as_str()));

        assert!(store.load_room(&saved_id));
        assert_eq!(store.placed_furniture(), saved_furniture.as_slice());
        assert_eq!(store.current_room().id, saved_id);
        assert!(store.selected_furniture_id().is_none());
    }

    #[test]
    fn test_saved_rooms_seeded_with_default() {
        let mut store = RoomStore::default();
        store.place(template("bed-queen-01"), Vec3::new(4.0, 0.0, 3.0));
        assert!(store.load_room(RoomConfig::DEFAULT_ID));
        assert!(store.placed_furniture().is_empty());
    }

    #[test]
    fn test_enforce_rejects_out_of_bounds() {
        let settings = PlacementSettings {
            policy: PlacementPolicy::Enforce,
            ..Default::default()
        };
        let mut store = RoomStore::new(settings);
        let before = store.current_room().clone();

        let sofa = template("sofa-modern-01");
        let err = store
            .place_validated(sofa, Vec3::new(0.5, 0.4, 5.0))
            .unwrap_err();
        assert!(matches!(err, PlacementError::OutOfBounds { .. }));
        assert_eq!(store.current_room(), &before);

        let (id, report) = store
            .place_validated(sofa, Vec3::new(4.0, 0.4, 5.0))
            .unwrap();
        assert!(report.is_clear());

        let err = store
            .place_validated(template("coffee-table-01"), Vec3::new(4.0, 0.0, 5.0))
            .unwrap_err();
        assert_eq!(
            err,
            PlacementError::Overlapping {
                template_id: "coffee-table-01".to_string(),
                overlapping: vec![id],
            }
        );
        assert_eq!(store.placed_furniture().len(), 1);
    }

    #[test]
    fn test_advisory_places_and_reports() {
        let mut store = RoomStore::default();
        let sofa = template("sofa-modern-01");
        let (_, report) = store
            .place_validated(sofa, Vec3::new(0.5, 0.4, 5.0))
            .unwrap();
        assert!(!report.within_bounds);
        assert_eq!(store.placed_furniture().len(), 1);
    }

    #[test]
    fn test_validated_placement_snaps() {
        let settings = PlacementSettings {
            snap_to_grid: true,
            ..Default::default()
        };
        let mut store = RoomStore::new(settings);
        let (id, _) = store
            .place_validated(template("armchair-01"), Vec3::new(2.2, 0.5, 3.9))
            .unwrap();
        assert_eq!(
            store.furniture(&id).unwrap().position,
            Vec3::new(2.0, 0.5, 4.0)
        );
    }

    #[test]
    fn test_move_validated_ignores_self_overlap() {
        let settings = PlacementSettings {
            policy: PlacementPolicy::Enforce,
            ..Default::default()
        };
        let mut store = RoomStore::new(settings);
        let (id, _) = store
            .place_validated(template("armchair-01"), Vec3::new(2.0, 0.0, 2.0))
            .unwrap();

        let report = store
            .move_validated(&id, Vec3::new(2.25, 0.0, 2.0))
            .unwrap()
            .unwrap();
        assert!(report.is_clear());
        assert_eq!(store.furniture(&id).unwrap().position.x, 2.25);

        assert!(store.move_validated(&id, Vec3::new(-3.0, 0.0, 2.0)).is_err());
        assert_eq!(store.furniture(&id).unwrap().position.x, 2.25);
        assert_eq!(store.move_validated("missing", Vec3::ZERO), Ok(None));
    }

    #[test]
    fn test_editor_state() {
        let mut store = RoomStore::default();
        assert!(store.is_grid_visible());
        store.toggle_grid();
        assert!(!store.is_grid_visible());

        store.set_selected_category(Some(FurnitureCategory::Office));
        assert!(
            store
                .visible_catalog()
                .iter()
                .all(|t| t.category == FurnitureCategory::Office)
        );
        store.set_selected_category(None);
        assert_eq!(store.visible_catalog().len(), Catalog::all().len());

        store.update_room_config(RoomConfigPatch::new().dimensions(6.0, 4.0, 2.5));
        store.frame_room();
        assert_eq!(store.view_state().camera_target, Vec3::new(3.0, 0.0, 2.0));

        assert_eq!(store.drop_position(), Vec3::new(3.0, 0.0, 2.0));
    }
}
