//! Generate command implementation.
//!
//! Composes the badge at full resolution and exports the asset set.

use std::path::PathBuf;

use clap::Args;

use crate::compose::compose;
use crate::config::IconConfig;
use crate::error::Result;
use crate::export::{export_all, ExportPlan};
use crate::output::Printer;

/// Compose the badge icon and export the multi-resolution asset set
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Icon layout config file (YAML); defaults are used when omitted
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Output directory (must already exist)
    #[arg(long, short, default_value = "Assets.xcassets/AppIcon.appiconset")]
    pub output: PathBuf,
}

pub fn run(args: GenerateArgs) -> Result<()> {
    let printer = Printer::new();

    let config = match &args.config {
        Some(path) => IconConfig::from_path(path)?,
        None => IconConfig::default(),
    };
    config.validate()?;

    let plan = ExportPlan::macos_app_iconset();
    plan.validate_against(config.size)?;

    printer.status(
        "Composing",
        &format!("badge icon at {}x{}", config.size, config.size),
    );
    let canvas = compose(&config);

    export_all(&canvas, &plan, &args.output, &printer)?;

    Ok(())
}
