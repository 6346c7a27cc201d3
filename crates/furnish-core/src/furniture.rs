//! Placed furniture instances and the layout that holds them

use std::collections::HashMap;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::{FurnitureCategory, FurnitureMaterial, FurnitureTemplate};
use crate::types::Dimensions;

/// A template realized at a position inside the room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "PlacedFurnitureRecord", into = "PlacedFurnitureRecord")]
pub struct PlacedFurniture {
    /// Placement-unique id: `<template id>-<suffix>`
    pub id: String,
    pub template: FurnitureTemplate,
    pub position: Vec3,
    /// Euler angles in radians
    pub rotation: Vec3,
    pub scale: Vec3,
}

/// JSON shape of a placed item: the template's fields sit next to the
/// placement, and `id` is the instance id
///
/// `templateId` is optional on input; documents without it carry the
/// template id as the prefix of the instance id. Unknown keys such as
/// `isSelected` are ignored.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlacedFurnitureRecord {
    id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    template_id: Option<String>,
    name: String,
    category: FurnitureCategory,
    dimensions: Dimensions,
    color: String,
    material: FurnitureMaterial,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    price: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image_url: Option<String>,
    position: Vec3,
    #[serde(default)]
    rotation: Vec3,
    #[serde(default = "unit_scale")]
    scale: Vec3,
}

impl From<PlacedFurnitureRecord> for PlacedFurniture {
    fn from(record: PlacedFurnitureRecord) -> Self {
        let template_id = record
            .template_id
            .unwrap_or_else(|| template_id_of(&record.id).to_string());
        Self {
            template: FurnitureTemplate {
                id: template_id,
                name: record.name,
                category: record.category,
                dimensions: record.dimensions,
                color: record.color,
                material: record.material,
                price: record.price,
                description: record.description,
                image_url: record.image_url,
            },
            id: record.id,
            position: record.position,
            rotation: record.rotation,
            scale: record.scale,
        }
    }
}

impl From<PlacedFurniture> for PlacedFurnitureRecord {
    fn from(item: PlacedFurniture) -> Self {
        let template = item.template;
        Self {
            id: item.id,
            template_id: Some(template.id),
            name: template.name,
            category: template.category,
            dimensions: template.dimensions,
            color: template.color,
            material: template.material,
            price: template.price,
            description: template.description,
            image_url: template.image_url,
            position: item.position,
            rotation: item.rotation,
            scale: item.scale,
        }
    }
}

/// Template id embedded in an instance id (everything before the last `-`)
fn template_id_of(instance_id: &str) -> &str {
    instance_id
        .rsplit_once('-')
        .map_or(instance_id, |(template_id, _)| template_id)
}

fn unit_scale() -> Vec3 {
    Vec3::ONE
}

impl PlacedFurniture {
    /// Instantiate a template with no rotation and unit scale
    pub fn from_template(template: &FurnitureTemplate, position: Vec3) -> Self {
        Self {
            id: Self::instance_id(&template.id),
            template: template.clone(),
            position,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }

    /// Uuid v7 embeds the creation time and a random tail, so placing the same
    /// template twice in one millisecond still yields distinct ids.
    fn instance_id(template_id: &str) -> String {
        format!("{}-{}", template_id, Uuid::now_v7().simple())
    }

    pub fn template_id(&self) -> &str {
        &self.template.id
    }

    pub fn name(&self) -> &str {
        &self.template.name
    }

    pub fn dimensions(&self) -> &Dimensions {
        &self.template.dimensions
    }
}

/// Ordered collection of placed furniture with O(1) lookup by id
///
/// Serializes as a plain array.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<PlacedFurniture>", into = "Vec<PlacedFurniture>")]
pub struct FurnitureLayout {
    items: Vec<PlacedFurniture>,
    index: HashMap<String, usize>,
}

impl FurnitureLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item, returning its id
    ///
    /// An item whose id is already present replaces the existing entry in place.
    pub fn insert(&mut self, item: PlacedFurniture) -> String {
        let id = item.id.clone();
        match self.index.get(&id).copied() {
            Some(i) => self.items[i] = item,
            None => {
                self.index.insert(id.clone(), self.items.len());
                self.items.push(item);
            }
        }
        id
    }

    /// Remove an item by id, preserving the order of the rest
    pub fn remove(&mut self, id: &str) -> Option<PlacedFurniture> {
        let i = self.index.remove(id)?;
        let removed = self.items.remove(i);
        for slot in self.index.values_mut() {
            if *slot > i {
                *slot -= 1;
            }
        }
        Some(removed)
    }

    pub fn get(&self, id: &str) -> Option<&PlacedFurniture> {
        self.index.get(id).map(|&i| &self.items[i])
    }

    /// Mutable access to an item; the id must not be changed through it
    pub fn get_mut(&mut self, id: &str) -> Option<&mut PlacedFurniture> {
        self.index.get(id).map(|&i| &mut self.items[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlacedFurniture> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[PlacedFurniture] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.index.clear();
    }
}

impl PartialEq for FurnitureLayout {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl From<Vec<PlacedFurniture>> for FurnitureLayout {
    fn from(items: Vec<PlacedFurniture>) -> Self {
        let mut layout = Self::new();
        for item in items {
            if layout.contains(&item.id) {
                tracing::warn!("Dropping duplicate furniture id: {}", item.id);
                continue;
            }
            layout.insert(item);
        }
        layout
    }
}

impl From<FurnitureLayout> for Vec<PlacedFurniture> {
    fn from(layout: FurnitureLayout) -> Self {
        layout.items
    }
}

impl<'a> IntoIterator for &'a FurnitureLayout {
    type Item = &'a PlacedFurniture;
    type IntoIter = std::slice::Iter<'a, PlacedFurniture>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
