//! The size manifest: every pixel size an icon set must contain.

use std::collections::HashSet;

use crate::error::{IconError, Result};
use crate::render::BASE_SIZE;

/// Pixel sizes required for an iOS app icon set, base size first.
pub const IOS_SIZES: [u32; 13] = [1024, 180, 120, 167, 152, 76, 40, 60, 58, 87, 80, 20, 29];

/// One output file: a square size and the file it is written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSize {
    pub size: u32,
    pub filename: String,
}

impl IconSize {
    pub fn new(size: u32, filename: impl Into<String>) -> Self {
        Self {
            size,
            filename: filename.into(),
        }
    }
}

/// Ordered list of output files.
///
/// Every entry has a non-zero size and a bare, unique file name, so each
/// entry maps to exactly one file in the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeManifest {
    entries: Vec<IconSize>,
}

impl SizeManifest {
    /// Build a manifest from explicit entries.
    pub fn new(entries: Vec<IconSize>) -> Result<Self> {
        if entries.is_empty() {
            return Err(IconError::Validation {
                message: "size manifest is empty".to_string(),
                help: Some("List at least one icon size".to_string()),
            });
        }

        let mut seen = HashSet::new();
        for entry in &entries {
            if entry.size == 0 {
                return Err(IconError::Resample {
                    message: format!("{} has a size of 0", entry.filename),
                    help: Some("Icon sizes must be at least 1 pixel".to_string()),
                });
            }
            if entry.filename.is_empty()
                || entry.filename.contains(|c| c == '/' || c == '\\')
                || entry.filename == "."
                || entry.filename == ".."
            {
                return Err(IconError::Validation {
                    message: format!("invalid icon file name {:?}", entry.filename),
                    help: Some("Use a plain file name without directories".to_string()),
                });
            }
            if !seen.insert(entry.filename.as_str()) {
                return Err(IconError::Validation {
                    message: format!("{} is listed more than once", entry.filename),
                    help: None,
                });
            }
        }

        Ok(Self { entries })
    }

    /// Manifest for `product` with the conventional file name for each size.
    ///
    /// The base size is always part of the set; it is placed first when the
    /// given sizes leave it out.
    pub fn for_product(product: &str, sizes: &[u32]) -> Result<Self> {
        validate_product(product)?;
        let base = (!sizes.contains(&BASE_SIZE)).then_some(BASE_SIZE);
        Self::new(
            base.into_iter()
                .chain(sizes.iter().copied())
                .map(|size| IconSize::new(size, icon_filename(product, size)))
                .collect(),
        )
    }

    /// The full iOS icon set for `product`.
    pub fn ios(product: &str) -> Result<Self> {
        Self::for_product(product, &IOS_SIZES)
    }

    pub fn iter(&self) -> impl Iterator<Item = &IconSize> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the first entry with the given pixel size.
    pub fn find(&self, size: u32) -> Option<&IconSize> {
        self.entries.iter().find(|e| e.size == size)
    }
}

impl<'a> IntoIterator for &'a SizeManifest {
    type Item = &'a IconSize;
    type IntoIter = std::slice::Iter<'a, IconSize>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// File name for one size: `<product>-icon-<size>.png`.
pub fn icon_filename(product: &str, size: u32) -> String {
    format!("{}-icon-{}.png", product, size)
}

/// Product names become part of file names, so keep them simple.
pub fn validate_product(product: &str) -> Result<()> {
    let valid = !product.is_empty()
        && product
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(IconError::Validation {
            message: format!("invalid product name {:?}", product),
            help: Some("Use letters, digits, '-' or '_'".to_string()),
        })
    }
}
