use std::path::PathBuf;

use clap::Args;

use crate::config::IconConfig;
use crate::error::Result;
use crate::output::{plural, Printer};
use crate::render::Motif;

/// Print the icon palette
#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// Config file (defaults to appicon.yaml if present)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Motif whose background to show
    #[arg(long, value_enum)]
    pub motif: Option<Motif>,
}

pub fn run(args: PaletteArgs, printer: &Printer) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let mut config = IconConfig::discover(args.config.as_deref(), &cwd)?;
    if let Some(motif) = args.motif {
        config.motif = motif;
    }

    let palette = config.palette()?;
    let total = palette.iter().count();
    printer.status(
        "Palette",
        &format!("{} for the {} motif", plural(total, "colour", "colours"), config.motif),
    );

    // Palette lines to stdout
    for (role, colour) in palette.iter() {
        println!("${}: {}", role, colour);
    }

    Ok(())
}
