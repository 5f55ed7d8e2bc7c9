//! Optional project configuration (appicon.yaml).
//!
//! Every field falls back to the built-in constants, so an empty file (or no
//! file at all) reproduces the default icon set.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{IconError, Result};
use crate::manifest::{SizeManifest, IOS_SIZES};
use crate::render::{Motif, Resampler};
use crate::types::{Colour, Palette, Role};

/// Config file looked up in the working directory when none is given.
pub const CONFIG_FILE: &str = "appicon.yaml";

/// Default product name used in output file names.
pub const DEFAULT_PRODUCT: &str = "playdates";

/// Default output directory.
pub const DEFAULT_OUTPUT: &str = "PlaydatesApp/Assets.xcassets/AppIcon.appiconset";

/// Icon generation settings loaded from appicon.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IconConfig {
    /// Product name, used as the file name prefix.
    pub product: String,

    /// Directory the icon set is written to.
    pub output: PathBuf,

    /// Composition to draw.
    pub motif: Motif,

    /// Resampling filter for the smaller sizes.
    pub filter: Resampler,

    /// Pixel sizes to export.
    pub sizes: Vec<u32>,

    /// Also write the asset catalog's Contents.json.
    pub contents: bool,

    /// Hex colour overrides keyed by palette role.
    pub palette: BTreeMap<Role, String>,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            product: DEFAULT_PRODUCT.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            motif: Motif::default(),
            filter: Resampler::default(),
            sizes: IOS_SIZES.to_vec(),
            contents: false,
            palette: BTreeMap::new(),
        }
    }
}

impl IconConfig {
    /// Load config from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| IconError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Load `path` if given, else appicon.yaml from `dir` if present, else
    /// the defaults.
    pub fn discover(path: Option<&Path>, dir: &Path) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let candidate = dir.join(CONFIG_FILE);
                if candidate.is_file() {
                    Self::load(&candidate)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Parse config from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| IconError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILE)),
        })
    }

    /// The motif's palette with any configured overrides applied.
    pub fn palette(&self) -> Result<Palette> {
        let mut palette = self.motif.palette();
        for (&role, hex) in &self.palette {
            let colour = Colour::from_hex(hex).map_err(|e| IconError::Validation {
                message: format!("palette.{}: {}", role, e),
                help: Some("Use #RRGGBB or #RRGGBBAA".to_string()),
            })?;
            palette.set(role, colour);
        }
        if !palette.background.is_opaque() {
            return Err(IconError::Validation {
                message: format!("palette.background {} is not opaque", palette.background),
                help: Some("App icons cannot have a transparent background".to_string()),
            });
        }
        Ok(palette)
    }

    /// The size manifest these settings describe.
    pub fn manifest(&self) -> Result<SizeManifest> {
        SizeManifest::for_product(&self.product, &self.sizes)
    }
}
