//! In-memory registry of saved room snapshots

use crate::room::RoomConfig;

/// Ordered list of room snapshots; lives only as long as the process
#[derive(Debug, Clone)]
pub struct SavedRooms {
    rooms: Vec<RoomConfig>,
}

impl Default for SavedRooms {
    /// Seeded with the default room so it can always be reloaded
    fn default() -> Self {
        Self {
            rooms: vec![RoomConfig::default()],
        }
    }
}

impl SavedRooms {
    /// Append a snapshot, returning its id
    pub fn push(&mut self, room: RoomConfig) -> String {
        let id = room.id.clone();
        self.rooms.push(room);
        id
    }

    /// Find a snapshot by id; the most recent one wins on duplicate ids
    pub fn get(&self, id: &str) -> Option<&RoomConfig> {
        self.rooms.iter().rev().find(|r| r.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RoomConfig> {
        self.rooms.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_with_default_room() {
        let saved = SavedRooms::default();
        assert_eq!(saved.iter().count(), 1);
        assert!(saved.get(RoomConfig::DEFAULT_ID).is_some());
    }

    #[test]
    fn test_lookup_by_id() {
        let mut saved = SavedRooms::default();
        let room = RoomConfig {
            id: "room-a".to_string(),
            name: "Study".to_string(),
            ..RoomConfig::default()
        };
        assert_eq!(saved.push(room), "room-a");
        assert_eq!(saved.get("room-a").unwrap().name, "Study");
        assert!(saved.get("room-b").is_none());
        assert_eq!(saved.iter().count(), 2);
    }
}
