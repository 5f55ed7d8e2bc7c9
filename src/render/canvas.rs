//! The icon canvas and its drawing primitives.
//!
//! Every primitive paints back-to-front with source-over compositing. Shape
//! edges are anti-aliased by sampling a fixed grid inside each pixel, so the
//! result depends only on the inputs and is identical across runs.

use image::{imageops, Rgb, RgbImage};

use crate::error::{IconError, Result};
use crate::types::{Colour, Point, Rect};

use super::font;
use super::Resampler;

/// Samples per axis taken inside each pixel when estimating coverage.
const SUBSAMPLES: u32 = 4;

/// A square, opaque RGB raster the icon is composed on.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// Create a canvas filled with `background`.
    ///
    /// The canvas is always opaque; the background's alpha is ignored.
    pub fn new(size: u32, background: Colour) -> Result<Self> {
        if size == 0 {
            return Err(IconError::Geometry {
                message: "canvas size must be at least 1 pixel".to_string(),
                help: None,
            });
        }
        Ok(Self {
            image: RgbImage::from_pixel(size, size, Rgb(background.to_rgb())),
        })
    }

    /// Edge length in pixels.
    pub fn size(&self) -> u32 {
        self.image.width()
    }

    /// Get a pixel, or None if out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<Colour> {
        if x >= self.size() || y >= self.size() {
            return None;
        }
        let [r, g, b] = self.image.get_pixel(x, y).0;
        Some(Colour::rgb(r, g, b))
    }

    /// Borrow the underlying raster.
    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Fill an axis-aligned rectangle.
    pub fn fill_rect(&mut self, rect: Rect, colour: Colour) {
        let Some((x0, y0, x1, y1)) = self.clip(rect.left(), rect.top(), rect.right(), rect.bottom())
        else {
            return;
        };
        for y in y0..=y1 {
            for x in x0..=x1 {
                let px = self.image.get_pixel_mut(x, y);
                px.0 = colour.over(px.0, 1.0);
            }
        }
    }

    /// Fill the ellipse inscribed in `bounds`.
    pub fn fill_ellipse(&mut self, bounds: Rect, colour: Colour) {
        let rx = bounds.width() as f32 / 2.0;
        let ry = bounds.height() as f32 / 2.0;
        let cx = bounds.left() as f32 + rx;
        let cy = bounds.top() as f32 + ry;

        self.fill_covered(bounds, colour, |x, y| {
            let dx = (x - cx) / rx;
            let dy = (y - cy) / ry;
            dx * dx + dy * dy <= 1.0
        });
    }

    /// Fill a rectangle whose corners are rounded with `radius`.
    ///
    /// A radius of zero gives a plain rectangle. The radius may be at most
    /// half the shorter side.
    pub fn fill_rounded_rect(&mut self, rect: Rect, radius: u32, colour: Colour) -> Result<()> {
        if radius * 2 > rect.width().min(rect.height()) {
            return Err(IconError::Geometry {
                message: format!(
                    "corner radius {} is too large for a {}x{} rectangle",
                    radius,
                    rect.width(),
                    rect.height()
                ),
                help: Some("The radius may be at most half the shorter side".to_string()),
            });
        }

        let r = radius as f32;
        let left = rect.left() as f32;
        let top = rect.top() as f32;
        let right = rect.right() as f32 + 1.0;
        let bottom = rect.bottom() as f32 + 1.0;

        self.fill_covered(rect, colour, |x, y| {
            // Nearest point on the inner rectangle the corner arcs are centred on.
            let nx = x.clamp(left + r, right - r);
            let ny = y.clamp(top + r, bottom - r);
            let dx = x - nx;
            let dy = y - ny;
            dx * dx + dy * dy <= r * r
        });
        Ok(())
    }

    /// Draw a straight line with round caps between two pixel centres.
    pub fn draw_line(&mut self, from: Point, to: Point, width: u32, colour: Colour) -> Result<()> {
        if width == 0 {
            return Err(IconError::Geometry {
                message: format!(
                    "line from ({}, {}) to ({}, {}) has zero width",
                    from.x, from.y, to.x, to.y
                ),
                help: None,
            });
        }

        let half = width as f32 / 2.0;
        let pad = half.ceil() as i32 + 1;
        let bounds = Rect::new(
            from.x.min(to.x) - pad,
            from.y.min(to.y) - pad,
            from.x.max(to.x) + pad,
            from.y.max(to.y) + pad,
        )?;

        let (ax, ay) = from.centre();
        let (bx, by) = to.centre();
        let (ex, ey) = (bx - ax, by - ay);
        let len_sq = ex * ex + ey * ey;

        self.fill_covered(bounds, colour, |x, y| {
            let t = if len_sq == 0.0 {
                0.0
            } else {
                (((x - ax) * ex + (y - ay) * ey) / len_sq).clamp(0.0, 1.0)
            };
            let dx = x - (ax + ex * t);
            let dy = y - (ay + ey * t);
            dx * dx + dy * dy <= half * half
        });
        Ok(())
    }

    /// Draw text in the built-in bitmap font.
    ///
    /// `origin` is the top-left corner of the first glyph and each font cell
    /// becomes a `scale` x `scale` block. Lowercase letters render as capitals.
    pub fn draw_text(&mut self, origin: Point, text: &str, scale: u32, colour: Colour) -> Result<()> {
        if scale == 0 {
            return Err(IconError::Geometry {
                message: "text scale must be at least 1".to_string(),
                help: None,
            });
        }

        let advance = (font::GLYPH_WIDTH + font::GLYPH_SPACING) as i32 * scale as i32;
        for (i, ch) in text.chars().enumerate() {
            let glyph = font::glyph(ch)?;
            let gx = origin.x + i as i32 * advance;
            for (row, bits) in glyph.iter().enumerate() {
                for (col, cell) in bits.chars().enumerate() {
                    if cell != '#' {
                        continue;
                    }
                    let cell_origin = Point::new(
                        gx + col as i32 * scale as i32,
                        origin.y + row as i32 * scale as i32,
                    );
                    self.fill_rect(Rect::square(cell_origin, scale)?, colour);
                }
            }
        }
        Ok(())
    }

    /// Produce a smoothly downsampled (or upsampled) square copy.
    ///
    /// At the canvas's own size the pixels are returned unchanged.
    pub fn resized(&self, size: u32, filter: Resampler) -> Result<RgbImage> {
        if size == 0 {
            return Err(IconError::Resample {
                message: "target size must be at least 1 pixel".to_string(),
                help: Some("Remove zero-sized entries from the size list".to_string()),
            });
        }
        if size == self.size() {
            return Ok(self.image.clone());
        }
        Ok(imageops::resize(&self.image, size, size, filter.filter_type()))
    }

    /// Clip inclusive integer bounds to the canvas, or None if fully outside.
    fn clip(&self, left: i32, top: i32, right: i32, bottom: i32) -> Option<(u32, u32, u32, u32)> {
        let max = self.size() as i32 - 1;
        let x0 = left.max(0);
        let y0 = top.max(0);
        let x1 = right.min(max);
        let y1 = bottom.min(max);
        if x0 > x1 || y0 > y1 {
            return None;
        }
        Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
    }

    /// Paint every pixel in `bounds` in proportion to how many of its
    /// sample points satisfy `inside`.
    fn fill_covered<F>(&mut self, bounds: Rect, colour: Colour, inside: F)
    where
        F: Fn(f32, f32) -> bool,
    {
        let Some((x0, y0, x1, y1)) =
            self.clip(bounds.left(), bounds.top(), bounds.right(), bounds.bottom())
        else {
            return;
        };

        let step = 1.0 / SUBSAMPLES as f32;
        let total = (SUBSAMPLES * SUBSAMPLES) as f32;

        for y in y0..=y1 {
            for x in x0..=x1 {
                let mut hits = 0u32;
                for sy in 0..SUBSAMPLES {
                    let py = y as f32 + (sy as f32 + 0.5) * step;
                    for sx in 0..SUBSAMPLES {
                        let px = x as f32 + (sx as f32 + 0.5) * step;
                        if inside(px, py) {
                            hits += 1;
                        }
                    }
                }
                if hits == 0 {
                    continue;
                }
                let pixel = self.image.get_pixel_mut(x, y);
                pixel.0 = colour.over(pixel.0, hits as f32 / total);
            }
        }
    }
}
