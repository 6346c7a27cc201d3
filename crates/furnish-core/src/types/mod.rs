//! Core type definitions

mod color;
mod dimensions;

pub use color::*;
pub use dimensions::*;
