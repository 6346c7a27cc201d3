//! Layout report: which placed items leave the room or collide

use std::fmt;

use furnish_core::{PlacementReport, RoomStore};
use glam::Vec3;

/// Placement check result for one placed item
#[derive(Debug, Clone, PartialEq)]
pub struct ItemReport {
    pub id: String,
    pub name: String,
    pub position: Vec3,
    pub placement: PlacementReport,
}

impl fmt::Display for ItemReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.placement.is_clear() { "ok" } else { "PROBLEM" };
        write!(
            f,
            "[{}] {} ({}) at ({:.2}, {:.2}, {:.2})",
            status, self.name, self.id, self.position.x, self.position.y, self.position.z
        )?;
        if !self.placement.within_bounds {
            write!(f, " outside the room")?;
        }
        if !self.placement.overlapping_ids.is_empty() {
            write!(f, " overlaps {}", self.placement.overlapping_ids.join(", "))?;
        }
        Ok(())
    }
}

/// Check every placed item against the room and the other items
pub fn audit_layout(store: &RoomStore) -> Vec<ItemReport> {
    store
        .placed_furniture()
        .iter()
        .map(|item| ItemReport {
            id: item.id.clone(),
            name: item.name().to_string(),
            position: item.position,
            placement: store.check_placement(
                item.dimensions(),
                item.position,
                Some(item.id.as_str()),
            ),
        })
        .collect()
}

/// Number of items with a placement problem
pub fn problem_count(reports: &[ItemReport]) -> usize {
    reports.iter().filter(|r| !r.placement.is_clear()).count()
}
