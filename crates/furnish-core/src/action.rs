//! Room commands
//!
//! [`RoomAction`] carries every store mutation as plain data so UI surfaces can
//! queue commands without holding references into the store.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, FurnitureCategory};
use crate::error::PlacementError;
use crate::room::RoomConfigPatch;
use crate::store::{PlacementReport, RoomStore};

/// A command against the room store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RoomAction {
    /// Place a catalog template; `None` drops it at the room center
    PlaceFurniture {
        template_id: String,
        position: Option<Vec3>,
    },
    RemoveFurniture(String),
    MoveFurniture { id: String, position: Vec3 },
    RotateFurniture { id: String, rotation: Vec3 },
    SelectFurniture(Option<String>),
    DeleteSelected,
    UpdateRoom(RoomConfigPatch),
    ClearRoom,
    SaveRoom,
    LoadRoom(String),
    ToggleGrid,
    SetSelectedCategory(Option<FurnitureCategory>),
    SetDragging(bool),
}

/// What applying an action produced
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    /// Nothing to report (also returned for lookup misses)
    Done,
    Placed {
        id: String,
        report: PlacementReport,
    },
    Moved(PlacementReport),
    Saved(String),
    Loaded(bool),
    Rejected(PlacementError),
}

impl RoomAction {
    /// Whether this action changes the room document
    pub fn is_mutating(&self) -> bool {
        match self {
            // Editor state only
            RoomAction::SelectFurniture(_)
            | RoomAction::ToggleGrid
            | RoomAction::SetSelectedCategory(_)
            | RoomAction::SetDragging(_) => false,

            // Snapshots do not alter the current room
            RoomAction::SaveRoom => false,

            _ => true,
        }
    }

    /// Get a description of the action for display
    pub fn description(&self) -> &'static str {
        match self {
            RoomAction::PlaceFurniture { .. } => "Place Furniture",
            RoomAction::RemoveFurniture(_) | RoomAction::DeleteSelected => "Remove Furniture",
            RoomAction::MoveFurniture { .. } => "Move Furniture",
            RoomAction::RotateFurniture { .. } => "Rotate Furniture",
            RoomAction::SelectFurniture(_) => "Select Furniture",
            RoomAction::UpdateRoom(_) => "Edit Room",
            RoomAction::ClearRoom => "Clear Room",
            RoomAction::SaveRoom => "Save Room",
            RoomAction::LoadRoom(_) => "Load Room",
            RoomAction::ToggleGrid => "Toggle Grid",
            RoomAction::SetSelectedCategory(_) => "Filter Catalog",
            RoomAction::SetDragging(_) => "Drag",
        }
    }

    /// Run the action against a store
    pub fn apply(self, store: &mut RoomStore) -> ActionOutcome {
        match self {
            RoomAction::PlaceFurniture {
                template_id,
                position,
            } => {
                let Some(template) = Catalog::by_id(&template_id) else {
                    tracing::warn!("Unknown catalog item: {}", template_id);
                    return ActionOutcome::Done;
                };
                let position = position.unwrap_or_else(|| store.drop_position());
                match store.place_validated(template, position) {
                    Ok((id, report)) => ActionOutcome::Placed { id, report },
                    Err(e) => ActionOutcome::Rejected(e),
                }
            }

            RoomAction::RemoveFurniture(id) => {
                store.remove(&id);
                ActionOutcome::Done
            }

            RoomAction::DeleteSelected => {
                if let Some(id) = store.selected_furniture_id().map(str::to_owned) {
                    store.remove(&id);
                }
                ActionOutcome::Done
            }

            RoomAction::MoveFurniture { id, position } => {
                match store.move_validated(&id, position) {
                    Ok(Some(report)) => ActionOutcome::Moved(report),
                    Ok(None) => ActionOutcome::Done,
                    Err(e) => ActionOutcome::Rejected(e),
                }
            }

            RoomAction::RotateFurniture { id, rotation } => {
                store.update_rotation(&id, rotation);
                ActionOutcome::Done
            }

            RoomAction::SelectFurniture(id) => {
                store.select(id.as_deref());
                ActionOutcome::Done
            }

            RoomAction::UpdateRoom(patch) => {
                store.update_room_config(patch);
                ActionOutcome::Done
            }

            RoomAction::ClearRoom => {
                store.clear_room();
                ActionOutcome::Done
            }

            RoomAction::SaveRoom => ActionOutcome::Saved(store.save_room()),

            RoomAction::LoadRoom(id) => ActionOutcome::Loaded(store.load_room(&id)),

            RoomAction::ToggleGrid => {
                store.toggle_grid();
                ActionOutcome::Done
            }

            RoomAction::SetSelectedCategory(category) => {
                store.set_selected_category(category);
                ActionOutcome::Done
            }

            RoomAction::SetDragging(dragging) => {
                store.set_dragging(dragging);
                ActionOutcome::Done
            }
        }
    }
}
