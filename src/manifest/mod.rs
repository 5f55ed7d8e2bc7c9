//! What gets written: the list of icon sizes and the asset catalog entry
//! describing them.

mod catalog;
mod sizes;

pub use catalog::{AssetCatalog, CatalogImage, CatalogInfo, CONTENTS_FILE};
pub use sizes::{icon_filename, validate_product, IconSize, SizeManifest, IOS_SIZES};
