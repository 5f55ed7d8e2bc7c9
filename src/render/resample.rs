//! Resampling filters offered for downsizing the base canvas.

use std::fmt;

use clap::ValueEnum;
use image::imageops::FilterType;
use serde::{Deserialize, Serialize};

/// An anti-aliased resampling filter.
///
/// Nearest-neighbour is deliberately absent: icons are always downsampled
/// with a smoothing kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Resampler {
    /// Lanczos with a window of 3
    #[default]
    Lanczos3,
    /// Cubic Catmull-Rom
    CatmullRom,
    /// Linear (tent) filter
    Triangle,
    /// Gaussian blur kernel
    Gaussian,
}

impl Resampler {
    pub fn filter_type(self) -> FilterType {
        match self {
            Resampler::Lanczos3 => FilterType::Lanczos3,
            Resampler::CatmullRom => FilterType::CatmullRom,
            Resampler::Triangle => FilterType::Triangle,
            Resampler::Gaussian => FilterType::Gaussian,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Resampler::Lanczos3 => "lanczos3",
            Resampler::CatmullRom => "catmull-rom",
            Resampler::Triangle => "triangle",
            Resampler::Gaussian => "gaussian",
        }
    }
}

impl fmt::Display for Resampler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
