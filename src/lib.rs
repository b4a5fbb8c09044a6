//! iconset - App icon asset generator
//!
//! A library for procedurally composing a rounded-rectangle badge icon
//! and exporting it as a multi-resolution PNG asset set.

pub mod canvas;
pub mod cli;
pub mod colour;
pub mod compose;
pub mod config;
pub mod error;
pub mod export;
pub mod output;

pub use canvas::Canvas;
pub use colour::Colour;
pub use compose::compose;
pub use config::IconConfig;
pub use error::{IconsetError, Result};
pub use export::{export_all, resample, ExportEntry, ExportPlan};
pub use output::Printer;
