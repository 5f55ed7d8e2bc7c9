//! Rendering module for appicon.
//!
//! This module composes the base icon on a canvas and produces the
//! resampled copies used for each output size.

mod canvas;
pub mod font;
mod motif;
mod resample;

pub use canvas::Canvas;
pub use motif::{render_base_composition, Motif, BASE_SIZE, LABEL};
pub use resample::Resampler;
