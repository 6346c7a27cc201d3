//! Room snapshot interchange: JSON documents and shareable links

use crate::error::ShareError;
use crate::room::RoomConfig;

/// Query parameter carrying the encoded room in a share link
pub const SHARE_PARAM: &str = "room";

/// Pretty-printed JSON of a room, including its placed furniture
pub fn export_room_json(room: &RoomConfig) -> Result<String, ShareError> {
    Ok(serde_json::to_string_pretty(room)?)
}

/// Parse a room exported by [`export_room_json`]
pub fn import_room_json(json: &str) -> Result<RoomConfig, ShareError> {
    let room: RoomConfig = serde_json::from_str(json)?;
    tracing::debug!(
        "Imported room {} with {} item(s)",
        room.id,
        room.placed_furniture.len()
    );
    Ok(room)
}

/// Build `<base_url>?room=<percent-encoded JSON>`
///
/// A `#fragment` on the base URL is kept after the query.
pub fn share_link(base_url: &str, room: &RoomConfig) -> Result<String, ShareError> {
    let json = serde_json::to_string(room)?;
    let (base, fragment) = match base_url.split_once('#') {
        Some((base, fragment)) => (base, Some(fragment)),
        None => (base_url, None),
    };
    let separator = if base.contains('?') { '&' } else { '?' };

    let mut link = format!(
        "{}{}{}={}",
        base,
        separator,
        SHARE_PARAM,
        urlencoding::encode(&json)
    );
    if let Some(fragment) = fragment {
        link.push('#');
        link.push_str(fragment);
    }
    Ok(link)
}

/// Decode the room carried by a share link
pub fn room_from_share_link(url: &str) -> Result<RoomConfig, ShareError> {
    let query = url
        .split_once('?')
        .map(|(_, q)| q)
        .ok_or(ShareError::MissingRoomParameter)?;
    let query = query.split('#').next().unwrap_or_default();

    let encoded = query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == SHARE_PARAM)
        .map(|(_, value)| value)
        .ok_or(ShareError::MissingRoomParameter)?;

    let json = urlencoding::decode(encoded).map_err(|e| ShareError::Decode(e.to_string()))?;
    import_room_json(&json)
}
