//! appicon - Procedural app icon generator
//!
//! Draws one square base composition and exports it at every size an app
//! icon set needs.

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod manifest;
pub mod output;
pub mod render;
pub mod types;

pub use config::IconConfig;
pub use error::{IconError, Result};
pub use export::{ensure_output_directory, export, export_with, write_png, ExportedIcon};
pub use manifest::{AssetCatalog, IconSize, SizeManifest};
pub use render::{render_base_composition, Canvas, Motif, Resampler, BASE_SIZE};
pub use types::{Colour, Palette, Point, Rect, Role};
