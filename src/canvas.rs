//! Square RGBA drawing surface.
//!
//! Wraps an `image::RgbaImage` and provides the filled primitives the
//! composer draws with. Coordinates are inclusive on both ends, and fills
//! clip silently at the canvas edges.

use image::{Rgba, RgbaImage};

use crate::colour::Colour;

/// A square raster canvas with an alpha channel.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
    side: u32,
}

impl Canvas {
    /// Create a fully transparent canvas of the given side length.
    pub fn new(side: u32) -> Self {
        Self {
            image: RgbaImage::new(side, side),
            side,
        }
    }

    /// Side length in pixels.
    pub fn side(&self) -> u32 {
        self.side
    }

    /// Get a pixel at the given position.
    pub fn get(&self, x: u32, y: u32) -> Option<Colour> {
        if x < self.side && y < self.side {
            let p = self.image.get_pixel(x, y).0;
            Some(Colour::new(p[0], p[1], p[2], p[3]))
        } else {
            None
        }
    }

    /// Borrow the underlying image buffer.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Consume the canvas, returning the image buffer.
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Fill an axis-aligned rectangle spanning `[x0, x1]` x `[y0, y1]`,
    /// both corners inclusive.
    pub fn fill_rect(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, colour: Colour) {
        let rgba = Rgba(colour.to_rgba());
        for y in self.clip_range(y0, y1) {
            for x in self.clip_range(x0, x1) {
                self.image.put_pixel(x, y, rgba);
            }
        }
    }

    /// Fill a circle of radius `r` centred at `(cx, cy)`.
    pub fn fill_circle(&mut self, cx: i64, cy: i64, r: i64, colour: Colour) {
        let rgba = Rgba(colour.to_rgba());
        for y in self.clip_range(cy - r, cy + r) {
            for x in self.clip_range(cx - r, cx + r) {
                let dx = x as i64 - cx;
                let dy = y as i64 - cy;
                if dx * dx + dy * dy <= r * r {
                    self.image.put_pixel(x, y, rgba);
                }
            }
        }
    }

    /// Fill a rounded rectangle spanning `[x0, x1]` x `[y0, y1]` inclusive,
    /// with corners replaced by quarter-circles of radius `r`.
    pub fn fill_rounded_rect(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, r: i64, colour: Colour) {
        let rgba = Rgba(colour.to_rgba());
        for y in self.clip_range(y0, y1) {
            for x in self.clip_range(x0, x1) {
                if rounded_rect_contains(x as i64, y as i64, x0, y0, x1, y1, r) {
                    self.image.put_pixel(x, y, rgba);
                }
            }
        }
    }

    /// Clamp an inclusive coordinate span to the canvas, as a pixel range.
    fn clip_range(&self, lo: i64, hi: i64) -> std::ops::Range<u32> {
        let lo = lo.clamp(0, self.side as i64) as u32;
        let hi = (hi + 1).clamp(0, self.side as i64) as u32;
        lo..hi
    }
}

/// Inside test for the rounded rectangle: plain rectangle membership except
/// in the four corner squares, where a quarter-circle applies.
fn rounded_rect_contains(x: i64, y: i64, x0: i64, y0: i64, x1: i64, y1: i64, r: i64) -> bool {
    if x < x0 || x > x1 || y < y0 || y > y1 {
        return false;
    }

    let (cx, cy) = match (x < x0 + r, x > x1 - r, y < y0 + r, y > y1 - r) {
        (true, _, true, _) => (x0 + r, y0 + r),
        (_, true, true, _) => (x1 - r, y0 + r),
        (true, _, _, true) => (x0 + r, y1 - r),
        (_, true, _, true) => (x1 - r, y1 - r),
        _ => return true,
    };

    let dx = x - cx;
    let dy = y - cy;
    dx * dx + dy * dy <= r * r
}
