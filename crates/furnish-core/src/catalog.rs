//! Furniture catalog
//!
//! A static, read-only registry of furniture templates. Templates are built
//! once on first access and never mutated.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::types::Dimensions;

/// Room a furniture item is usually found in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FurnitureCategory {
    LivingRoom,
    Bedroom,
    Dining,
    Office,
    Storage,
    Decor,
}

impl FurnitureCategory {
    /// All categories in display order
    pub const ALL: [FurnitureCategory; 6] = [
        FurnitureCategory::LivingRoom,
        FurnitureCategory::Bedroom,
        FurnitureCategory::Dining,
        FurnitureCategory::Office,
        FurnitureCategory::Storage,
        FurnitureCategory::Decor,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FurnitureCategory::LivingRoom => "Living Room",
            FurnitureCategory::Bedroom => "Bedroom",
            FurnitureCategory::Dining => "Dining Room",
            FurnitureCategory::Office => "Office",
            FurnitureCategory::Storage => "Storage",
            FurnitureCategory::Decor => "Decor & Lighting",
        }
    }
}

/// Surface material of a furniture item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FurnitureMaterial {
    Wood,
    Metal,
    Fabric,
    Leather,
    Glass,
    Plastic,
}

/// Physically based shading parameters for a material
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceParams {
    pub roughness: f32,
    pub metalness: f32,
    /// Set for transparent materials
    pub opacity: Option<f32>,
}

impl FurnitureMaterial {
    pub fn name(&self) -> &'static str {
        match self {
            FurnitureMaterial::Wood => "Wood",
            FurnitureMaterial::Metal => "Metal",
            FurnitureMaterial::Fabric => "Fabric",
            FurnitureMaterial::Leather => "Leather",
            FurnitureMaterial::Glass => "Glass",
            FurnitureMaterial::Plastic => "Plastic",
        }
    }

    /// Shading parameters the renderer applies to this material
    pub fn surface(&self) -> SurfaceParams {
        let (roughness, metalness, opacity) = match self {
            FurnitureMaterial::Wood => (0.8, 0.1, None),
            FurnitureMaterial::Metal => (0.2, 0.9, None),
            FurnitureMaterial::Fabric => (0.9, 0.0, None),
            FurnitureMaterial::Leather => (0.4, 0.0, None),
            FurnitureMaterial::Glass => (0.0, 0.0, Some(0.3)),
            FurnitureMaterial::Plastic => (0.3, 0.0, None),
        };
        SurfaceParams {
            roughness,
            metalness,
            opacity,
        }
    }
}

/// An immutable catalog definition of a furniture type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FurnitureTemplate {
    pub id: String,
    pub name: String,
    pub category: FurnitureCategory,
    pub dimensions: Dimensions,
    /// `#RRGGBB`
    pub color: String,
    pub material: FurnitureMaterial,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl FurnitureTemplate {
    /// Create a template without price, description or image
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: FurnitureCategory,
        dimensions: Dimensions,
        color: impl Into<String>,
        material: FurnitureMaterial,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            dimensions,
            color: color.into(),
            material,
            price: None,
            description: None,
            image_url: None,
        }
    }

    pub fn with_price(mut self, price: f32) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

static CATALOG: LazyLock<Vec<FurnitureTemplate>> = LazyLock::new(build_catalog);

#[rustfmt::skip]
fn build_catalog() -> Vec<FurnitureTemplate> {
    use FurnitureCategory::*;
    use FurnitureMaterial::*;

    let item = |id: &str, name: &str, category: FurnitureCategory, (w, h, d): (f32, f32, f32),
                color: &str, material: FurnitureMaterial, price: f32, description: &str| {
        FurnitureTemplate::new(id, name, category, Dimensions::new(w, h, d), color, material)
            .with_price(price)
            .with_description(description)
    };

    vec![
        // Living room
        item("sofa-modern-01", "Modern Sectional Sofa", LivingRoom, (2.5, 0.8, 1.8), "#8B4513", Fabric, 1299.0,
            "Comfortable L-shaped sectional sofa perfect for modern living rooms"),
        item("coffee-table-01", "Glass Coffee Table", LivingRoom, (1.2, 0.4, 0.6), "#87CEEB", Glass, 399.0,
            "Sleek glass coffee table with chrome legs"),
        item("armchair-01", "Leather Armchair", LivingRoom, (0.8, 1.0, 0.9), "#654321", Leather, 799.0,
            "Classic leather armchair with wooden frame"),
        item("tv-stand-01", "Oak TV Stand", LivingRoom, (1.8, 0.5, 0.4), "#DEB887", Wood, 549.0,
            "Solid oak TV stand with storage compartments"),
        // Bedroom
        item("bed-queen-01", "Queen Size Bed", Bedroom, (1.6, 1.0, 2.1), "#8B4513", Wood, 899.0,
            "Elegant queen size bed with upholstered headboard"),
        item("wardrobe-01", "Walk-in Wardrobe", Bedroom, (2.0, 2.2, 0.6), "#F5F5DC", Wood, 1199.0,
            "Spacious wardrobe with mirror doors"),
        item("nightstand-01", "Bedside Table", Bedroom, (0.5, 0.6, 0.4), "#DEB887", Wood, 199.0,
            "Compact bedside table with drawer"),
        item("dresser-01", "Bedroom Dresser", Bedroom, (1.2, 0.8, 0.5), "#F5F5DC", Wood, 649.0,
            "Six-drawer dresser with mirror"),
        // Dining
        item("dining-table-01", "Dining Table", Dining, (1.8, 0.75, 0.9), "#8B4513", Wood, 799.0,
            "Solid wood dining table for 6 people"),
        item("dining-chair-01", "Dining Chair", Dining, (0.45, 0.85, 0.5), "#654321", Wood, 149.0,
            "Comfortable wooden dining chair with cushion"),
        item("dining-cabinet-01", "Dining Cabinet", Dining, (1.6, 1.8, 0.4), "#DEB887", Wood, 949.0,
            "Traditional dining room cabinet with glass doors"),
        // Office
        item("office-desk-01", "Executive Desk", Office, (1.6, 0.75, 0.8), "#8B4513", Wood, 699.0,
            "Spacious executive desk with drawers"),
        item("office-chair-01", "Ergonomic Office Chair", Office, (0.6, 1.2, 0.6), "#000000", Fabric, 399.0,
            "Adjustable ergonomic office chair with lumbar support"),
        item("bookshelf-01", "Tall Bookshelf", Office, (0.8, 2.0, 0.3), "#DEB887", Wood, 449.0,
            "Five-shelf wooden bookshelf"),
        // Storage
        item("storage-cabinet-01", "Storage Cabinet", Storage, (1.0, 1.6, 0.4), "#F5F5DC", Wood, 349.0,
            "Multi-purpose storage cabinet with shelves"),
        item("storage-box-01", "Storage Ottoman", Storage, (0.6, 0.4, 0.4), "#696969", Fabric, 129.0,
            "Cushioned storage ottoman with hidden compartment"),
        // Decor
        item("floor-lamp-01", "Modern Floor Lamp", Decor, (0.3, 1.5, 0.3), "#C0C0C0", Metal, 199.0,
            "Sleek modern floor lamp with adjustable head"),
        item("side-table-01", "Round Side Table", Decor, (0.5, 0.5, 0.5), "#8B4513", Wood, 149.0,
            "Small round side table perfect for plants or decor"),
    ]
}

/// Read-only access to the built-in furniture templates
pub struct Catalog;

impl Catalog {
    /// All templates in catalog order
    pub fn all() -> &'static [FurnitureTemplate] {
        &CATALOG
    }

    /// Look up a template by its identifier
    pub fn by_id(id: &str) -> Option<&'static FurnitureTemplate> {
        CATALOG.iter().find(|t| t.id == id)
    }

    /// Templates belonging to a category, in catalog order
    pub fn by_category(
        category: FurnitureCategory,
    ) -> impl Iterator<Item = &'static FurnitureTemplate> {
        CATALOG.iter().filter(move |t| t.category == category)
    }

    /// Every category in display order paired with its templates
    pub fn categorized() -> Vec<(FurnitureCategory, Vec<&'static FurnitureTemplate>)> {
        FurnitureCategory::ALL
            .iter()
            .map(|&c| (c, Self::by_category(c).collect()))
            .collect()
    }
}
