//! Furnish CLI
//!
//! Composition root for the room planner: configuration, the shared room
//! store and a layout checker.

pub mod cli;
pub mod config;
pub mod context;
pub mod report;

pub use context::{AppContext, SharedStore};
