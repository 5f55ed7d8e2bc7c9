pub mod completions;
pub mod generate;
pub mod palette;
pub mod sizes;

use clap::{Parser, Subcommand};

/// appicon - Procedural app icon generator
#[derive(Parser, Debug)]
#[command(name = "appicon")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Draw the icon and write every size (the default)
    Generate(generate::GenerateArgs),

    /// List the icon sizes and file names that would be written
    Sizes(sizes::SizesArgs),

    /// Print the icon palette
    Palette(palette::PaletteArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Generate(generate::GenerateArgs::default())
    }
}
