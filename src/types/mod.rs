//! Core domain types for appicon.
//!
//! - `Colour` - RGBA colour values
//! - `Palette` - the icon's colours keyed by semantic role
//! - `Point` / `Rect` - pixel geometry for the drawing primitives

mod colour;
mod geometry;
mod palette;

pub use colour::Colour;
pub use geometry::{Point, Rect};
pub use palette::{Palette, Role};
