//! Colour type, hex parsing and HSL shading.

use std::fmt;
use std::str::FromStr;

use crate::error::{IconError, Result};

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const BLACK: Self = Self::rgb(0, 0, 0);

    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Parse a hex colour string.
    ///
    /// Accepts `#RRGGBB` and `#RRGGBBAA`, with or without the leading `#`.
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        match hex.len() {
            6 => Ok(Self::rgb(
                parse_hex_byte(&hex[0..2])?,
                parse_hex_byte(&hex[2..4])?,
                parse_hex_byte(&hex[4..6])?,
            )),
            8 => Ok(Self::new(
                parse_hex_byte(&hex[0..2])?,
                parse_hex_byte(&hex[2..4])?,
                parse_hex_byte(&hex[4..6])?,
                parse_hex_byte(&hex[6..8])?,
            )),
            _ => Err(IconError::Parse {
                message: format!("Invalid hex colour: {}", s),
                help: Some("Use #RRGGBB or #RRGGBBAA format".to_string()),
            }),
        }
    }

    /// Convert to an RGB triple, dropping alpha.
    pub fn to_rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Check if the colour is fully opaque.
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// Lighten (positive) or darken (negative) by a percentage in HSL space.
    ///
    /// The adjustment is relative to the remaining range, so `shade(100.0)`
    /// yields white and `shade(-100.0)` yields black. Alpha is preserved.
    pub fn shade(self, percent: f32) -> Self {
        use palette::{Hsl, IntoColor, Srgb};

        let rgb: Srgb<f32> = Srgb::new(
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        );

        let mut hsl: Hsl = rgb.into_color();

        let delta = percent / 100.0;
        if delta > 0.0 {
            hsl.lightness += (1.0 - hsl.lightness) * delta;
        } else {
            hsl.lightness += hsl.lightness * delta;
        }
        hsl.lightness = hsl.lightness.clamp(0.0, 1.0);

        let rgb_out: Srgb<f32> = hsl.into_color();
        Colour::new(
            (rgb_out.red * 255.0).round() as u8,
            (rgb_out.green * 255.0).round() as u8,
            (rgb_out.blue * 255.0).round() as u8,
            self.a,
        )
    }

    /// Composite this colour over an opaque destination pixel.
    ///
    /// `coverage` is the fraction of the pixel covered by the shape (0..=1)
    /// and scales the colour's own alpha.
    pub fn over(self, dst: [u8; 3], coverage: f32) -> [u8; 3] {
        let alpha = (self.a as f32 / 255.0) * coverage.clamp(0.0, 1.0);
        if alpha >= 1.0 {
            return self.to_rgb();
        }
        if alpha <= 0.0 {
            return dst;
        }
        let mix = |s: u8, d: u8| -> u8 {
            let v = d as f32 + (s as f32 - d as f32) * alpha;
            v.round().clamp(0.0, 255.0) as u8
        };
        [mix(self.r, dst[0]), mix(self.g, dst[1]), mix(self.b, dst[2])]
    }
}

impl FromStr for Colour {
    type Err = IconError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| IconError::Parse {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_6digit() {
        let c = Colour::from_hex("#91DDCF").unwrap();
        assert_eq!(c, Colour::rgb(145, 221, 207));

        let c = Colour::from_hex("5d4e6d").unwrap();
        assert_eq!(c, Colour::rgb(93, 78, 109));
    }

    #[test]
    fn test_from_hex_8digit() {
        let c = Colour::from_hex("#E8C5E580").unwrap();
        assert_eq!(c, Colour::new(232, 197, 229, 128));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(Colour::from_hex("#GGGGGG").is_err());
        assert!(Colour::from_hex("#12345").is_err());
        assert!(Colour::from_hex("#FFF").is_err());
        assert!(Colour::from_hex("").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Colour::rgb(241, 158, 210)), "#F19ED2");
        assert_eq!(format!("{}", Colour::new(255, 0, 0, 128)), "#FF000080");
    }

    #[test]
    fn test_shade_extremes() {
        let c = Colour::rgb(145, 221, 207);
        assert_eq!(c.shade(100.0), Colour::WHITE);
        assert_eq!(c.shade(-100.0), Colour::BLACK);
        assert_eq!(c.shade(0.0), c);
    }

    #[test]
    fn test_shade_direction() {
        let c = Colour::rgb(93, 78, 109);
        let light = c.shade(40.0);
        let dark = c.shade(-40.0);
        assert!(light.r > c.r && light.g > c.g && light.b > c.b);
        assert!(dark.r < c.r && dark.g < c.g && dark.b < c.b);
    }

    #[test]
    fn test_over_opaque_full_coverage_replaces() {
        let c = Colour::rgb(10, 20, 30);
        assert_eq!(c.over([200, 200, 200], 1.0), [10, 20, 30]);
    }

    #[test]
    fn test_over_zero_coverage_keeps_destination() {
        let c = Colour::rgb(10, 20, 30);
        assert_eq!(c.over([200, 200, 200], 0.0), [200, 200, 200]);
    }

    #[test]
    fn test_over_half_alpha_mixes() {
        let c = Colour::new(0, 0, 0, 128);
        let out = c.over([200, 100, 50], 1.0);
        // 128/255 of the way to black
        assert_eq!(out, [100, 50, 25]);
    }
}
