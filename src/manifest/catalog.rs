//! Asset catalog `Contents.json` for an app icon set.
//!
//! Xcode describes an icon set as a list of slots, each an idiom, a point
//! size and a scale. A slot is filled by the manifest file whose pixel size
//! equals `points * scale`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{IconError, Result};

use super::SizeManifest;

/// File name Xcode expects inside an `.appiconset` directory.
pub const CONTENTS_FILE: &str = "Contents.json";

/// One icon slot: (idiom, size in points, scale, size in pixels).
const IOS_SLOTS: &[(&str, &str, u32, u32)] = &[
    ("iphone", "20x20", 2, 40),
    ("iphone", "20x20", 3, 60),
    ("iphone", "29x29", 2, 58),
    ("iphone", "29x29", 3, 87),
    ("iphone", "40x40", 2, 80),
    ("iphone", "40x40", 3, 120),
    ("iphone", "60x60", 2, 120),
    ("iphone", "60x60", 3, 180),
    ("ipad", "20x20", 1, 20),
    ("ipad", "20x20", 2, 40),
    ("ipad", "29x29", 1, 29),
    ("ipad", "29x29", 2, 58),
    ("ipad", "40x40", 1, 40),
    ("ipad", "40x40", 2, 80),
    ("ipad", "76x76", 1, 76),
    ("ipad", "76x76", 2, 152),
    ("ipad", "83.5x83.5", 2, 167),
    ("ios-marketing", "1024x1024", 1, 1024),
];

/// An image slot in `Contents.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogImage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    pub idiom: String,
    pub scale: String,
    pub size: String,
}

/// Authoring metadata block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogInfo {
    pub author: String,
    pub version: u32,
}

/// The whole `Contents.json` document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetCatalog {
    pub images: Vec<CatalogImage>,
    pub info: CatalogInfo,
}

impl AssetCatalog {
    /// Map every iOS slot to the manifest file with the matching pixel size.
    ///
    /// Slots with no matching file are kept without a file name, which is
    /// how Xcode records an empty slot.
    pub fn for_manifest(manifest: &SizeManifest) -> Self {
        let images = IOS_SLOTS
            .iter()
            .map(|&(idiom, size, scale, pixels)| CatalogImage {
                filename: manifest.find(pixels).map(|e| e.filename.clone()),
                idiom: idiom.to_string(),
                scale: format!("{}x", scale),
                size: size.to_string(),
            })
            .collect();

        Self {
            images,
            info: CatalogInfo {
                author: "xcode".to_string(),
                version: 1,
            },
        }
    }

    /// Slots that have no file in the manifest.
    pub fn missing(&self) -> impl Iterator<Item = &CatalogImage> {
        self.images.iter().filter(|i| i.filename.is_none())
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| IconError::Validation {
            message: format!("Failed to serialize {}: {}", CONTENTS_FILE, e),
            help: None,
        })
    }

    /// Write `Contents.json` into `dir` and return its path.
    pub fn write(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(CONTENTS_FILE);
        let mut json = self.to_json()?;
        json.push('\n');
        fs::write(&path, json).map_err(|e| IconError::Io {
            path: path.clone(),
            message: format!("Failed to write asset catalog: {}", e),
        })?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::IconSize;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_ios_manifest_fills_every_slot() {
        let manifest = SizeManifest::ios("playdates").unwrap();
        let catalog = AssetCatalog::for_manifest(&manifest);

        assert_eq!(catalog.images.len(), IOS_SLOTS.len());
        assert_eq!(catalog.missing().count(), 0);

        let marketing = catalog
            .images
            .iter()
            .find(|i| i.idiom == "ios-marketing")
            .unwrap();
        assert_eq!(
            marketing,
            &CatalogImage {
                filename: Some("playdates-icon-1024.png".to_string()),
                idiom: "ios-marketing".to_string(),
                scale: "1x".to_string(),
                size: "1024x1024".to_string(),
            }
        );
    }

    #[test]
    fn test_shared_pixel_size_reuses_file() {
        let manifest = SizeManifest::ios("playdates").unwrap();
        let catalog = AssetCatalog::for_manifest(&manifest);

        let for_120: Vec<&str> = catalog
            .images
            .iter()
            .filter(|i| i.filename.as_deref() == Some("playdates-icon-120.png"))
            .map(|i| i.size.as_str())
            .collect();
        assert_eq!(for_120, vec!["40x40", "60x60"]);
    }

    #[test]
    fn test_partial_manifest_leaves_empty_slots() {
        let manifest = SizeManifest::new(vec![IconSize::new(1024, "base.png")]).unwrap();
        let catalog = AssetCatalog::for_manifest(&manifest);
        assert_eq!(catalog.missing().count(), IOS_SLOTS.len() - 1);
    }

    #[test]
    fn test_json_shape() {
        let manifest = SizeManifest::new(vec![IconSize::new(1024, "base.png")]).unwrap();
        let json = AssetCatalog::for_manifest(&manifest).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["info"]["author"], "xcode");
        assert_eq!(value["info"]["version"], 1);
        assert!(value["images"][0].get("filename").is_none());
        let last = value["images"].as_array().unwrap().last().unwrap().clone();
        assert_eq!(last["filename"], "base.png");
    }

    #[test]
    fn test_write_round_trips() {
        let dir = tempdir().unwrap();
        let manifest = SizeManifest::ios("demo").unwrap();
        let catalog = AssetCatalog::for_manifest(&manifest);

        let path = catalog.write(dir.path()).unwrap();
        assert_eq!(path, dir.path().join(CONTENTS_FILE));

        let read: AssetCatalog =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(read, catalog);
    }
}
