use clap::Parser;
use iconset::cli::{Cli, Commands};
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => iconset::cli::generate::run(args)?,
        Commands::Validate(args) => iconset::cli::validate::run(args)?,
        Commands::Completions(args) => iconset::cli::completions::run(args)?,
    }

    Ok(())
}
