//! Room configuration

use std::ops::RangeInclusive;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::RoomConfigError;
use crate::furniture::FurnitureLayout;
use crate::types::{RoomDimensions, is_hex_color};

/// Light intensities, both in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lighting {
    pub ambient: f32,
    pub directional: f32,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            ambient: 0.6,
            directional: 0.8,
        }
    }
}

impl Lighting {
    pub fn is_finite(&self) -> bool {
        self.ambient.is_finite() && self.directional.is_finite()
    }
}

/// The active room document: geometry, appearance and its furniture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomConfig {
    pub id: String,
    pub name: String,
    pub dimensions: RoomDimensions,
    pub wall_color: String,
    pub floor_material: String,
    pub floor_color: String,
    pub lighting: Lighting,
    pub placed_furniture: FurnitureLayout,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Default for RoomConfig {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: Self::DEFAULT_ID.to_string(),
            name: "My Room".to_string(),
            dimensions: RoomDimensions::default(),
            wall_color: "#F5F5F5".to_string(),
            floor_material: "wood".to_string(),
            floor_color: "#DEB887".to_string(),
            lighting: Lighting::default(),
            placed_furniture: FurnitureLayout::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl RoomConfig {
    pub const DEFAULT_ID: &'static str = "default-room";

    /// Advance `updated_at`, strictly later than its previous value even when
    /// the clock has not moved or went backwards
    pub fn touch(&mut self) {
        let now = Utc::now();
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + Duration::microseconds(1)
        };
    }

    /// Merge the set fields of a patch; non-finite numbers are dropped
    pub fn apply_patch(&mut self, patch: RoomConfigPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(dimensions) = patch.dimensions {
            if dimensions.is_finite() {
                self.dimensions = dimensions;
            } else {
                tracing::warn!("Ignoring non-finite room dimensions: {:?}", dimensions);
            }
        }
        if let Some(wall_color) = patch.wall_color {
            self.wall_color = wall_color;
        }
        if let Some(floor_material) = patch.floor_material {
            self.floor_material = floor_material;
        }
        if let Some(floor_color) = patch.floor_color {
            self.floor_color = floor_color;
        }
        if let Some(lighting) = patch.lighting {
            if lighting.is_finite() {
                self.lighting = lighting;
            } else {
                tracing::warn!("Ignoring non-finite lighting: {:?}", lighting);
            }
        }
        self.touch();
    }
}

/// Partial room update; unset fields keep their current value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoomConfigPatch {
    pub name: Option<String>,
    pub dimensions: Option<RoomDimensions>,
    pub wall_color: Option<String>,
    pub floor_material: Option<String>,
    pub floor_color: Option<String>,
    pub lighting: Option<Lighting>,
}

impl RoomConfigPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn dimensions(mut self, width: f32, length: f32, height: f32) -> Self {
        self.dimensions = Some(RoomDimensions::new(width, length, height));
        self
    }

    pub fn wall_color(mut self, color: impl Into<String>) -> Self {
        self.wall_color = Some(color.into());
        self
    }

    pub fn floor_material(mut self, material: impl Into<String>) -> Self {
        self.floor_material = Some(material.into());
        self
    }

    pub fn floor_color(mut self, color: impl Into<String>) -> Self {
        self.floor_color = Some(color.into());
        self
    }

    pub fn lighting(mut self, ambient: f32, directional: f32) -> Self {
        self.lighting = Some(Lighting {
            ambient,
            directional,
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Check the patch against the ranges the editor controls allow
    ///
    /// The store does not call this; it is offered to the UI layer.
    pub fn validate(&self) -> Result<(), RoomConfigError> {
        if let Some(name) = &self.name
            && name.trim().is_empty()
        {
            return Err(RoomConfigError::EmptyName);
        }
        if let Some(d) = &self.dimensions {
            RoomLimits::check("width", d.width, RoomLimits::WIDTH)?;
            RoomLimits::check("length", d.length, RoomLimits::LENGTH)?;
            RoomLimits::check("height", d.height, RoomLimits::HEIGHT)?;
        }
        if let Some(l) = &self.lighting {
            RoomLimits::check("ambient", l.ambient, RoomLimits::LIGHT)?;
            RoomLimits::check("directional", l.directional, RoomLimits::LIGHT)?;
        }
        for (field, color) in [
            ("wallColor", &self.wall_color),
            ("floorColor", &self.floor_color),
        ] {
            if let Some(value) = color
                && !is_hex_color(value)
            {
                return Err(RoomConfigError::InvalidColor {
                    field,
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Ranges of the room editor controls
pub struct RoomLimits;

impl RoomLimits {
    pub const WIDTH: RangeInclusive<f32> = 3.0..=15.0;
    pub const LENGTH: RangeInclusive<f32> = 3.0..=15.0;
    pub const HEIGHT: RangeInclusive<f32> = 2.0..=5.0;
    pub const LIGHT: RangeInclusive<f32> = 0.0..=1.0;

    fn check(
        field: &'static str,
        value: f32,
        range: RangeInclusive<f32>,
    ) -> Result<(), RoomConfigError> {
        if range.contains(&value) {
            Ok(())
        } else {
            Err(RoomConfigError::OutOfRange {
                field,
                value,
                min: *range.start(),
                max: *range.end(),
            })
        }
    }
}
