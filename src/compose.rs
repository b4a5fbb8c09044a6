//! Icon composer - draws the badge onto a fresh canvas.
//!
//! Draw order matters: later shapes occlude earlier ones. The badge
//! silhouette goes down first, then the central node, then the three
//! branch bars with their circular end caps.

use crate::canvas::Canvas;
use crate::config::IconConfig;

/// Compose the full-resolution icon described by `config`.
///
/// The result is deterministic: the same config always produces the same
/// pixels, so every export can resample from this one canvas.
pub fn compose(config: &IconConfig) -> Canvas {
    let mut canvas = Canvas::new(config.size);

    let size = config.size as i64;
    let margin = config.margin as i64;
    let center = config.center() as i64;
    let node_r = config.circle_radius as i64;
    let branch_len = config.branch_length as i64;
    let branch_w = config.branch_width as i64;
    let cap_r = node_r / 2;

    // Badge silhouette
    canvas.fill_rounded_rect(
        margin,
        margin,
        size - margin,
        size - margin,
        config.corner_radius as i64,
        config.background,
    );

    // Central node
    canvas.fill_circle(center, center, node_r, config.foreground);

    // Upward branch: vertical bar centred on the node, capped at the top
    canvas.fill_rect(
        center - branch_w / 2,
        center - node_r - branch_len,
        center + branch_w / 2,
        center - node_r,
        config.foreground,
    );
    canvas.fill_circle(center, center - node_r - branch_len, cap_r, config.foreground);

    // Lower-left branch: horizontal bar below the node, capped at its left end
    canvas.fill_rect(
        center - node_r - branch_len,
        center + node_r,
        center - node_r,
        center + node_r + branch_w,
        config.foreground,
    );
    canvas.fill_circle(center - node_r - branch_len, center + node_r, cap_r, config.foreground);

    // Lower-right branch: mirror of the lower-left across the vertical centreline
    canvas.fill_rect(
        center + node_r,
        center + node_r,
        center + node_r + branch_len,
        center + node_r + branch_w,
        config.foreground,
    );
    canvas.fill_circle(center + node_r + branch_len, center + node_r, cap_r, config.foreground);

    canvas
}
