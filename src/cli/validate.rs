use std::path::PathBuf;

use clap::Args;

use crate::config::IconConfig;
use crate::error::Result;
use crate::export::ExportPlan;
use crate::output::{display_path, Printer};

/// Check an icon configuration without writing any files
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Icon layout config file (YAML); defaults are checked when omitted
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

pub fn run(args: ValidateArgs) -> Result<()> {
    let printer = Printer::new();

    let (config, source) = match &args.config {
        Some(path) => (IconConfig::from_path(path)?, display_path(path)),
        None => (IconConfig::default(), "builtin defaults".to_string()),
    };

    config.validate()?;
    ExportPlan::macos_app_iconset().validate_against(config.size)?;

    printer.success(
        "Validated",
        &format!(
            "{} ({}x{} canvas, badge {}..{})",
            source,
            config.size,
            config.size,
            config.margin,
            config.size - config.margin
        ),
    );

    Ok(())
}
