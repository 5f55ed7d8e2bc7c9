use std::path::PathBuf;

use clap::Args;

use crate::config::IconConfig;
use crate::error::Result;
use crate::output::{plural, Printer};

/// List the icon sizes and file names that would be written
#[derive(Args, Debug)]
pub struct SizesArgs {
    /// Config file (defaults to appicon.yaml if present)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Product name used in file names
    #[arg(long)]
    pub product: Option<String>,
}

pub fn run(args: SizesArgs, printer: &Printer) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let mut config = IconConfig::discover(args.config.as_deref(), &cwd)?;
    if let Some(product) = args.product {
        config.product = product;
    }

    let manifest = config.manifest()?;
    printer.status(
        "Listing",
        &format!("{} for {}", plural(manifest.len(), "size", "sizes"), config.product),
    );

    for entry in &manifest {
        println!("{}\t{}", entry.size, entry.filename);
    }

    Ok(())
}
