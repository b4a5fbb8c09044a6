//! Multi-resolution PNG export.
//!
//! Every output is resampled from the one full-resolution canvas, never
//! from a previously-resized copy, so no export compounds quality loss.

use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::canvas::Canvas;
use crate::error::{IconsetError, Result};
use crate::output::{display_path, plural, Printer};

/// One output file: name and square pixel size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportEntry {
    pub filename: String,
    pub pixel_size: u32,
}

impl ExportEntry {
    pub fn new(filename: impl Into<String>, pixel_size: u32) -> Self {
        Self {
            filename: filename.into(),
            pixel_size,
        }
    }
}

/// An ordered list of exports. Order only affects progress output; each
/// entry is independent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPlan {
    pub entries: Vec<ExportEntry>,
}

impl ExportPlan {
    /// The ten-file macOS AppIcon.appiconset table.
    pub fn macos_app_iconset() -> Self {
        let entries = [
            ("icon_16x16.png", 16),
            ("icon_16x16@2x.png", 32),
            ("icon_32x32.png", 32),
            ("icon_32x32@2x.png", 64),
            ("icon_128x128.png", 128),
            ("icon_128x128@2x.png", 256),
            ("icon_256x256.png", 256),
            ("icon_256x256@2x.png", 512),
            ("icon_512x512.png", 512),
            ("icon_512x512@2x.png", 1024),
        ]
        .into_iter()
        .map(|(name, size)| ExportEntry::new(name, size))
        .collect();

        Self { entries }
    }

    /// Check that every entry is a downscale (or identity) of a canvas of
    /// side `canvas_side`.
    pub fn validate_against(&self, canvas_side: u32) -> Result<()> {
        for entry in &self.entries {
            if entry.pixel_size == 0 {
                return Err(IconsetError::Export {
                    message: format!("{} has zero pixel size", entry.filename),
                    help: None,
                });
            }
            if entry.pixel_size > canvas_side {
                return Err(IconsetError::Export {
                    message: format!(
                        "{} wants {}px but the canvas is only {}px",
                        entry.filename, entry.pixel_size, canvas_side
                    ),
                    help: Some("exports must downscale; increase the canvas size".to_string()),
                });
            }
        }
        Ok(())
    }
}

/// Resample the canvas to a square of the given side.
///
/// Lanczos3 is used because every target is a downscale (or identity) of
/// the source.
pub fn resample(canvas: &Canvas, pixel_size: u32) -> RgbaImage {
    if pixel_size == canvas.side() {
        return canvas.image().clone();
    }
    imageops::resize(canvas.image(), pixel_size, pixel_size, FilterType::Lanczos3)
}

/// Write every entry of the plan to `output_dir`, reporting progress.
///
/// The directory must already exist; if it does not, this fails before any
/// file is written. A failing entry aborts the remaining exports.
pub fn export_all(
    canvas: &Canvas,
    plan: &ExportPlan,
    output_dir: &Path,
    printer: &Printer,
) -> Result<Vec<PathBuf>> {
    if !output_dir.is_dir() {
        return Err(IconsetError::Export {
            message: format!("output directory {} does not exist", output_dir.display()),
            help: Some("create the icon-asset directory before running".to_string()),
        });
    }

    plan.validate_against(canvas.side())?;

    let mut written = Vec::with_capacity(plan.entries.len());
    for entry in &plan.entries {
        let resized = resample(canvas, entry.pixel_size);
        let path = output_dir.join(&entry.filename);

        resized.save(&path).map_err(|e| IconsetError::Io {
            path: path.clone(),
            message: format!("Failed to write PNG: {}", e),
        })?;

        printer.status(
            "Exporting",
            &format!(
                "{} ({}x{})",
                display_path(&path),
                entry.pixel_size,
                entry.pixel_size
            ),
        );
        written.push(path);
    }

    printer.success(
        "Finished",
        &format!(
            "{} to {}",
            plural(written.len(), "icon", "icons"),
            display_path(output_dir)
        ),
    );

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::compose;
    use crate::config::IconConfig;
    use tempfile::tempdir;

    fn composed() -> Canvas {
        compose(&IconConfig::default())
    }

    #[test]
    fn test_default_plan_matches_appiconset_table() {
        let plan = ExportPlan::macos_app_iconset();
        assert_eq!(plan.entries.len(), 10);
        assert_eq!(plan.entries[0], ExportEntry::new("icon_16x16.png", 16));
        assert_eq!(
            plan.entries[9],
            ExportEntry::new("icon_512x512@2x.png", 1024)
        );
    }

    #[test]
    fn test_plan_validation() {
        let plan = ExportPlan::macos_app_iconset();
        plan.validate_against(1024).unwrap();
        assert!(plan.validate_against(512).is_err());

        let zero = ExportPlan {
            entries: vec![ExportEntry::new("bad.png", 0)],
        };
        assert!(zero.validate_against(1024).is_err());
    }

    #[test]
    fn test_resample_identity_keeps_pixels() {
        let canvas = composed();
        let same = resample(&canvas, 1024);
        assert_eq!(same.as_raw(), canvas.image().as_raw());
    }

    #[test]
    fn test_resample_downscale_dimensions() {
        let canvas = composed();
        let small = resample(&canvas, 16);
        assert_eq!(small.width(), 16);
        assert_eq!(small.height(), 16);
    }

    #[test]
    fn test_downscale_keeps_corners_transparent() {
        let canvas = composed();
        // At these sizes the resampling window never reaches the badge, so
        // corners stay exactly transparent.
        for size in [64u32, 256, 512] {
            let img = resample(&canvas, size);
            assert_eq!(img.get_pixel(0, 0).0[3], 0, "corner opaque at {}px", size);
            assert_eq!(
                img.get_pixel(size - 1, size - 1).0[3],
                0,
                "corner opaque at {}px",
                size
            );
        }
        // At the smallest sizes the filter window overlaps the badge edge;
        // corners may pick up faint blur but must stay far from opaque.
        for size in [16u32, 32] {
            let img = resample(&canvas, size);
            assert!(
                img.get_pixel(0, 0).0[3] < 64,
                "corner too opaque at {}px",
                size
            );
        }
    }

    #[test]
    fn test_downscale_keeps_centre_foreground() {
        let canvas = composed();
        for size in [128u32, 512] {
            let img = resample(&canvas, size);
            let p = img.get_pixel(size / 2, size / 2).0;
            assert_eq!(p, [255, 255, 255, 255], "centre not foreground at {}px", size);
        }
        // Small sizes blur the node edge into the centre pixel's window; the
        // centre must still be opaque and clearly foreground.
        for size in [16u32, 32] {
            let img = resample(&canvas, size);
            let p = img.get_pixel(size / 2, size / 2).0;
            assert_eq!(p[3], 255, "centre not opaque at {}px", size);
            assert!(p[0] > 200 && p[1] > 200 && p[2] > 200, "centre too dark at {}px", size);
        }
    }

    #[test]
    fn test_export_all_writes_every_file() {
        let canvas = composed();
        let plan = ExportPlan::macos_app_iconset();
        let dir = tempdir().unwrap();

        let written = export_all(&canvas, &plan, dir.path(), &Printer::new()).unwrap();
        assert_eq!(written.len(), 10);

        for entry in &plan.entries {
            let path = dir.path().join(&entry.filename);
            assert!(path.exists(), "missing {}", entry.filename);

            let img = image::open(&path).unwrap().to_rgba8();
            assert_eq!(img.width(), entry.pixel_size);
            assert_eq!(img.height(), entry.pixel_size);
        }
    }

    #[test]
    fn test_export_is_pixel_identical_across_runs() {
        let canvas = composed();
        let plan = ExportPlan {
            entries: vec![ExportEntry::new("icon_32x32.png", 32)],
        };
        let dir_a = tempdir().unwrap();
        let dir_b = tempdir().unwrap();
        let printer = Printer::new();

        export_all(&canvas, &plan, dir_a.path(), &printer).unwrap();
        export_all(&canvas, &plan, dir_b.path(), &printer).unwrap();

        let a = image::open(dir_a.path().join("icon_32x32.png")).unwrap().to_rgba8();
        let b = image::open(dir_b.path().join("icon_32x32.png")).unwrap().to_rgba8();
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn test_missing_directory_fails_before_writing() {
        let canvas = composed();
        let plan = ExportPlan::macos_app_iconset();
        let dir = tempdir().unwrap();
        let missing = dir.path().join("appiconset");

        let result = export_all(&canvas, &plan, &missing, &Printer::new());
        assert!(result.is_err());
        assert!(!missing.exists(), "exporter must not create the directory");
    }

    #[test]
    fn test_full_resolution_export_corner_and_centre() {
        let canvas = composed();
        let plan = ExportPlan {
            entries: vec![ExportEntry::new("icon_512x512@2x.png", 1024)],
        };
        let dir = tempdir().unwrap();

        export_all(&canvas, &plan, dir.path(), &Printer::new()).unwrap();

        let img = image::open(dir.path().join("icon_512x512@2x.png"))
            .unwrap()
            .to_rgba8();
        assert_eq!(img.width(), 1024);
        assert_eq!(img.get_pixel(0, 0).0[3], 0);
        assert_eq!(img.get_pixel(512, 512).0, [255, 255, 255, 255]);
    }
}
