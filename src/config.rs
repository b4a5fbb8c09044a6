//! Icon layout configuration.
//!
//! All geometry that was once inline literals lives here as a named,
//! loadable profile. The defaults reproduce the original badge exactly.
//!
//! # Example
//!
//! ```yaml
//! size: 1024
//! margin: 80
//! corner_radius: 200
//! circle_radius: 80
//! branch_length: 180
//! branch_width: 40
//! background: "#24292E"
//! foreground: "#FFFFFF"
//! ```
//!
//! Geometry values are fixed pixel values tuned for the 1024 canvas; they do
//! not scale with `size`. Changing `size` without adjusting the rest is
//! rejected by [`IconConfig::validate`] when shapes would leave the canvas.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::colour::Colour;
use crate::error::{IconsetError, Result};

/// Layout and colour parameters for the badge icon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IconConfig {
    /// Canvas side length in pixels (the master render resolution).
    #[serde(default = "default_size")]
    pub size: u32,

    /// Gap between the canvas edge and the badge silhouette.
    #[serde(default = "default_margin")]
    pub margin: u32,

    /// Corner radius of the badge's rounded rectangle.
    #[serde(default = "default_corner_radius")]
    pub corner_radius: u32,

    /// Radius of the central node circle.
    #[serde(default = "default_circle_radius")]
    pub circle_radius: u32,

    /// Length of each branch bar, measured from the node's edge.
    #[serde(default = "default_branch_length")]
    pub branch_length: u32,

    /// Thickness of each branch bar.
    #[serde(default = "default_branch_width")]
    pub branch_width: u32,

    /// Badge fill colour.
    #[serde(default = "default_background")]
    pub background: Colour,

    /// Node and branch colour.
    #[serde(default = "default_foreground")]
    pub foreground: Colour,
}

fn default_size() -> u32 {
    1024
}

fn default_margin() -> u32 {
    80
}

fn default_corner_radius() -> u32 {
    200
}

fn default_circle_radius() -> u32 {
    80
}

fn default_branch_length() -> u32 {
    180
}

fn default_branch_width() -> u32 {
    40
}

fn default_background() -> Colour {
    Colour::rgb(36, 41, 46)
}

fn default_foreground() -> Colour {
    Colour::WHITE
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            margin: default_margin(),
            corner_radius: default_corner_radius(),
            circle_radius: default_circle_radius(),
            branch_length: default_branch_length(),
            branch_width: default_branch_width(),
            background: default_background(),
            foreground: default_foreground(),
        }
    }
}

impl IconConfig {
    /// Load a config from a YAML file. Missing fields take their defaults.
    pub fn from_path(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|e| IconsetError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config file: {}", e),
        })?;

        let config: IconConfig = serde_yaml::from_str(&source).map_err(|e| IconsetError::Config {
            message: format!("Failed to parse {}: {}", path.display(), e),
            help: Some("Expected YAML with size/margin/corner_radius/... fields".to_string()),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Centre coordinate of the canvas.
    pub fn center(&self) -> u32 {
        self.size / 2
    }

    /// Check that every shape the composer draws stays on the canvas.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(config_error("size must be non-zero", None));
        }

        if self.margin * 2 >= self.size {
            return Err(config_error(
                &format!(
                    "margin {} leaves no badge area on a {} canvas",
                    self.margin, self.size
                ),
                Some("margin must be less than half the canvas size"),
            ));
        }

        let badge_side = self.size - 2 * self.margin;
        if self.corner_radius * 2 > badge_side {
            return Err(config_error(
                &format!(
                    "corner_radius {} exceeds half the badge side ({})",
                    self.corner_radius, badge_side
                ),
                Some("reduce corner_radius or margin"),
            ));
        }

        // Branch caps reach circle_radius/2 beyond the bar ends; that full
        // extent must stay inside the canvas.
        let reach = self.circle_radius + self.branch_length + self.circle_radius / 2;
        if reach > self.center() {
            return Err(config_error(
                &format!(
                    "branch reach {} extends past the canvas centre offset {}",
                    reach,
                    self.center()
                ),
                Some("reduce circle_radius or branch_length"),
            ));
        }

        // The lower bars hang branch_width below the node's bottom edge, and
        // their caps hang circle_radius/2; the deeper of the two must stay
        // inside the canvas.
        let drop = self.center()
            + self.circle_radius
            + self.branch_width.max(self.circle_radius / 2);
        if drop > self.size {
            return Err(config_error(
                &format!(
                    "lower branches reach y={} on a {} canvas",
                    drop, self.size
                ),
                Some("reduce circle_radius or branch_width"),
            ));
        }

        if self.branch_width > self.circle_radius * 2 {
            return Err(config_error(
                &format!(
                    "branch_width {} is wider than the node diameter {}",
                    self.branch_width,
                    self.circle_radius * 2
                ),
                Some("branch bars should join the node, not engulf it"),
            ));
        }

        Ok(())
    }
}

fn config_error(message: &str, help: Option<&str>) -> IconsetError {
    IconsetError::Config {
        message: message.to_string(),
        help: help.map(String::from),
    }
}
