//! Generate command implementation.
//!
//! Draws the base composition once, then writes every size in the manifest.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::IconConfig;
use crate::error::Result;
use crate::export::{ensure_output_directory, export_with, ExportedIcon};
use crate::manifest::{AssetCatalog, CONTENTS_FILE};
use crate::output::{display_path, plural, Printer};
use crate::render::{Motif, Resampler};

/// Draw the icon and write every size
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Config file (defaults to appicon.yaml if present)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Output directory
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Product name used in file names
    #[arg(long)]
    pub product: Option<String>,

    /// Composition to draw
    #[arg(long, value_enum)]
    pub motif: Option<Motif>,

    /// Resampling filter for smaller sizes
    #[arg(long, value_enum)]
    pub filter: Option<Resampler>,

    /// Also write the asset catalog Contents.json
    #[arg(long)]
    pub contents: bool,
}

impl GenerateArgs {
    /// Layer command-line flags over the config file.
    pub fn resolve(&self, cwd: &Path) -> Result<IconConfig> {
        let mut config = IconConfig::discover(self.config.as_deref(), cwd)?;
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if let Some(product) = &self.product {
            config.product = product.clone();
        }
        if let Some(motif) = self.motif {
            config.motif = motif;
        }
        if let Some(filter) = self.filter {
            config.filter = filter;
        }
        config.contents |= self.contents;
        Ok(config)
    }
}

pub fn run(args: GenerateArgs, printer: &Printer) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config = args.resolve(&cwd)?;
    generate(&config, printer).map(|_| ())
}

/// Run the whole pipeline for `config`.
pub fn generate(config: &IconConfig, printer: &Printer) -> Result<Vec<ExportedIcon>> {
    // Validate everything before touching the filesystem
    let palette = config.palette()?;
    let manifest = config.manifest()?;

    let canvas = config.motif.render(&palette)?;
    let size = canvas.size();
    printer.status("Rendered", &format!("{} motif ({}x{})", config.motif, size, size));

    ensure_output_directory(&config.output)?;

    let written = export_with(&canvas, &manifest, &config.output, config.filter, |icon| {
        let kind = if icon.resampled { "icon" } else { "base icon" };
        printer.status(
            "Created",
            &format!("{} {}", kind, printer.cyan(&display_path(&icon.path))),
        );
    })?;

    if config.contents {
        let catalog = AssetCatalog::for_manifest(&manifest);
        let path = catalog.write(&config.output)?;
        printer.status("Wrote", &printer.cyan(&display_path(&path)));
        let missing = catalog.missing().count();
        if missing > 0 {
            printer.info(
                "Note",
                &format!("{} in {} left empty", plural(missing, "slot", "slots"), CONTENTS_FILE),
            );
        }
    } else {
        printer.info(
            "Note",
            &format!(
                "update {} in the asset catalog if the icon set changed (or pass --contents)",
                CONTENTS_FILE
            ),
        );
    }

    printer.status(
        "Finished",
        &format!(
            "{} in {}",
            plural(written.len(), "icon", "icons"),
            display_path(&config.output)
        ),
    );

    Ok(written)
}
