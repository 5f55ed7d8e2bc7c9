//! Writing the icon set to disk.
//!
//! Each manifest entry is written independently. A failure stops the export
//! immediately; files written before it are left in place and are simply
//! overwritten on the next run.

use std::fs;
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbImage};

use crate::error::{IconError, Result};
use crate::manifest::SizeManifest;
use crate::render::{Canvas, Resampler};

/// A file produced by [`export`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedIcon {
    /// Edge length in pixels.
    pub size: u32,
    /// Where the file was written.
    pub path: PathBuf,
    /// False when the canvas was written at its native size.
    pub resampled: bool,
}

/// Create the output directory (and parents) if it does not exist.
pub fn ensure_output_directory(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| IconError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to create output directory: {}", e),
    })
}

/// Write one PNG per manifest entry into `dir`.
pub fn export(
    canvas: &Canvas,
    manifest: &SizeManifest,
    dir: &Path,
    filter: Resampler,
) -> Result<Vec<ExportedIcon>> {
    export_with(canvas, manifest, dir, filter, |_| {})
}

/// Like [`export`], calling `on_written` after each file is saved.
pub fn export_with<F>(
    canvas: &Canvas,
    manifest: &SizeManifest,
    dir: &Path,
    filter: Resampler,
    mut on_written: F,
) -> Result<Vec<ExportedIcon>>
where
    F: FnMut(&ExportedIcon),
{
    let mut written = Vec::with_capacity(manifest.len());

    for entry in manifest {
        let path = dir.join(&entry.filename);
        let resampled = entry.size != canvas.size();

        if resampled {
            let image = canvas.resized(entry.size, filter)?;
            write_png(&image, &path)?;
        } else {
            write_png(canvas.image(), &path)?;
        }

        let icon = ExportedIcon {
            size: entry.size,
            path,
            resampled,
        };
        on_written(&icon);
        written.push(icon);
    }

    Ok(written)
}

/// Save an RGB image as PNG.
pub fn write_png(image: &RgbImage, path: &Path) -> Result<()> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| IconError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write PNG: {}", e),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::IconSize;
    use crate::types::{Colour, Rect};
    use tempfile::tempdir;

    const C: Colour = Colour::rgb(145, 221, 207);

    fn manifest(entries: &[(u32, &str)]) -> SizeManifest {
        SizeManifest::new(
            entries
                .iter()
                .map(|&(size, name)| IconSize::new(size, name))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_ensure_output_directory_is_idempotent() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("Assets.xcassets").join("AppIcon.appiconset");

        ensure_output_directory(&target).unwrap();
        assert!(target.is_dir());
        ensure_output_directory(&target).unwrap();
        assert!(target.is_dir());
    }

    #[test]
    fn test_ensure_output_directory_fails_on_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("taken");
        fs::write(&file, b"not a directory").unwrap();

        let err = ensure_output_directory(&file.join("sub")).unwrap_err();
        assert!(matches!(err, IconError::Io { .. }));
    }

    #[test]
    fn test_export_writes_one_file_per_entry() {
        let dir = tempdir().unwrap();
        let canvas = Canvas::new(64, C).unwrap();
        let manifest = manifest(&[(64, "base.png"), (32, "a.png"), (7, "b.png")]);

        let written = export(&canvas, &manifest, dir.path(), Resampler::default()).unwrap();

        assert_eq!(written.len(), 3);
        assert!(!written[0].resampled);
        assert!(written[1].resampled);
        for (icon, entry) in written.iter().zip(&manifest) {
            assert_eq!(icon.path, dir.path().join(&entry.filename));
            let img = image::open(&icon.path).unwrap();
            assert_eq!((img.width(), img.height()), (entry.size, entry.size));
        }
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 3);
    }

    #[test]
    fn test_export_native_size_is_pixel_identical() {
        let dir = tempdir().unwrap();
        let mut canvas = Canvas::new(48, C).unwrap();
        canvas.fill_ellipse(Rect::new(5, 5, 40, 30).unwrap(), Colour::rgb(93, 78, 109));
        let manifest = manifest(&[(48, "base.png")]);

        export(&canvas, &manifest, dir.path(), Resampler::default()).unwrap();

        let img = image::open(dir.path().join("base.png")).unwrap().to_rgb8();
        assert_eq!(&img, canvas.image());
    }

    #[test]
    fn test_export_reports_each_file() {
        let dir = tempdir().unwrap();
        let canvas = Canvas::new(16, C).unwrap();
        let manifest = manifest(&[(16, "a.png"), (8, "b.png")]);

        let mut seen = Vec::new();
        export_with(&canvas, &manifest, dir.path(), Resampler::Triangle, |icon| {
            seen.push(icon.size)
        })
        .unwrap();
        assert_eq!(seen, vec![16, 8]);
    }

    #[test]
    fn test_export_missing_directory_is_io_error() {
        let dir = tempdir().unwrap();
        let canvas = Canvas::new(8, C).unwrap();
        let manifest = manifest(&[(8, "a.png")]);

        let err = export(
            &canvas,
            &manifest,
            &dir.path().join("missing"),
            Resampler::default(),
        )
        .unwrap_err();
        assert!(matches!(err, IconError::Io { .. }));
    }
}
