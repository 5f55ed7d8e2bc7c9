//! Integer geometry used by the canvas primitives.
//!
//! Coordinates are in canvas pixels with the origin at the top-left corner.
//! A [`Rect`] is inclusive on both ends, so `Rect::new(0, 0, 9, 9)` covers a
//! 10x10 block of pixels.

use crate::error::{IconError, Result};

/// A pixel position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Centre of the pixel in continuous canvas space.
    pub(crate) fn centre(self) -> (f32, f32) {
        (self.x as f32 + 0.5, self.y as f32 + 0.5)
    }
}

/// An inclusive pixel rectangle with `left <= right` and `top <= bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
}

impl Rect {
    /// Create a rectangle from its corner coordinates.
    ///
    /// Fails if the corners are given out of order.
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Result<Self> {
        if right < left || bottom < top {
            return Err(IconError::Geometry {
                message: format!(
                    "rectangle ({}, {}, {}, {}) has its corners out of order",
                    left, top, right, bottom
                ),
                help: Some("Pass the top-left corner first, then the bottom-right".to_string()),
            });
        }
        Ok(Self {
            left,
            top,
            right,
            bottom,
        })
    }

    /// A square of `size` pixels with its top-left corner at `origin`.
    pub fn square(origin: Point, size: u32) -> Result<Self> {
        let extent = size as i32 - 1;
        Self::new(origin.x, origin.y, origin.x + extent, origin.y + extent)
    }

    /// A rectangle bounding a circle of `radius` around `centre`.
    pub fn around(centre: Point, radius: i32) -> Result<Self> {
        Self::new(
            centre.x - radius,
            centre.y - radius,
            centre.x + radius,
            centre.y + radius,
        )
    }

    pub fn left(&self) -> i32 {
        self.left
    }

    pub fn top(&self) -> i32 {
        self.top
    }

    pub fn right(&self) -> i32 {
        self.right
    }

    pub fn bottom(&self) -> i32 {
        self.bottom
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        (self.right - self.left) as u32 + 1
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        (self.bottom - self.top) as u32 + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_inclusive_size() {
        let r = Rect::new(400, 350, 460, 410).unwrap();
        assert_eq!(r.width(), 61);
        assert_eq!(r.height(), 61);
    }

    #[test]
    fn test_rect_single_pixel() {
        let r = Rect::new(3, 3, 3, 3).unwrap();
        assert_eq!((r.width(), r.height()), (1, 1));
        assert_eq!((r.left(), r.right()), (3, 3));
    }

    #[test]
    fn test_rect_out_of_order_is_geometry_error() {
        let err = Rect::new(10, 0, 5, 10).unwrap_err();
        assert!(matches!(err, IconError::Geometry { .. }));
        assert!(Rect::new(0, 10, 10, 5).is_err());
    }

    #[test]
    fn test_square_and_around() {
        let s = Rect::square(Point::new(0, 0), 1024).unwrap();
        assert_eq!((s.right(), s.bottom()), (1023, 1023));

        let c = Rect::around(Point::new(50, 50), 10).unwrap();
        assert_eq!((c.left(), c.top(), c.right(), c.bottom()), (40, 40, 60, 60));
    }

    #[test]
    fn test_square_zero_size_fails() {
        assert!(Rect::square(Point::new(0, 0), 0).is_err());
    }
}
