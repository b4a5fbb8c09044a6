pub mod completions;
pub mod generate;
pub mod validate;

use clap::{Parser, Subcommand};

/// iconset - App icon asset generator
#[derive(Parser, Debug)]
#[command(name = "iconset")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compose the badge icon and export the multi-resolution asset set
    Generate(generate::GenerateArgs),

    /// Check an icon configuration without writing any files
    Validate(validate::ValidateArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
