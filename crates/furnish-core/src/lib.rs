//! Furnish Core Data Structures
//!
//! This crate contains the placement core of the room visualizer:
//! - Catalog: static furniture templates
//! - Geometry: grid snapping, room bounds and footprint overlap checks
//! - Room: room configuration and placed furniture
//! - Store: the single mutable room state and its command surface
//! - Share: JSON snapshots and shareable links

pub mod action;
pub mod catalog;
pub mod error;
pub mod furniture;
pub mod geometry;
pub mod room;
pub mod saved;
pub mod share;
pub mod store;
pub mod types;
pub mod view;

pub use action::*;
pub use catalog::*;
pub use error::*;
pub use furniture::*;
pub use geometry::*;
pub use room::*;
pub use saved::*;
pub use share::*;
pub use store::*;
pub use types::*;
pub use view::*;
