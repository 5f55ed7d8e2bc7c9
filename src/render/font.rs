//! A 5x7 bitmap font for icon labels.
//!
//! Glyphs are written as rows of `#` (ink) and `.` (blank), the same way
//! they would look on screen.

use crate::error::{IconError, Result};

pub const GLYPH_WIDTH: u32 = 5;
pub const GLYPH_HEIGHT: u32 = 7;
/// Blank columns between adjacent glyphs.
pub const GLYPH_SPACING: u32 = 1;

pub type Glyph = [&'static str; GLYPH_HEIGHT as usize];

/// Look up the glyph for a character. Lowercase letters map to capitals.
pub fn glyph(ch: char) -> Result<&'static Glyph> {
    let upper = ch.to_ascii_uppercase();
    GLYPHS
        .iter()
        .find(|(c, _)| *c == upper)
        .map(|(_, g)| g)
        .ok_or_else(|| IconError::Geometry {
            message: format!("no glyph for character {:?}", ch),
            help: Some("Labels may use A-Z, 0-9, space, '-', '.' and '!'".to_string()),
        })
}

/// Width in pixels of `text` rendered at `scale`, without trailing spacing.
pub fn text_width(text: &str, scale: u32) -> u32 {
    let n = text.chars().count() as u32;
    if n == 0 {
        return 0;
    }
    (n * (GLYPH_WIDTH + GLYPH_SPACING) - GLYPH_SPACING) * scale
}

#[rustfmt::skip]
static GLYPHS: &[(char, Glyph)] = &[
    (' ', [".....", ".....", ".....", ".....", ".....", ".....", "....."]),
    ('A', [".###.", "#...#", "#...#", "#####", "#...#", "#...#", "#...#"]),
    ('B', ["####.", "#...#", "#...#", "####.", "#...#", "#...#", "####."]),
    ('C', [".###.", "#...#", "#....", "#....", "#....", "#...#", ".###."]),
    ('D', ["####.", "#...#", "#...#", "#...#", "#...#", "#...#", "####."]),
    ('E', ["#####", "#....", "#....", "####.", "#....", "#....", "#####"]),
    ('F', ["#####", "#....", "#....", "####.", "#....", "#....", "#...."]),
    ('G', [".###.", "#...#", "#....", "#.###", "#...#", "#...#", ".####"]),
    ('H', ["#...#", "#...#", "#...#", "#####", "#...#", "#...#", "#...#"]),
    ('I', ["#####", "..#..", "..#..", "..#..", "..#..", "..#..", "#####"]),
    ('J', ["..###", "...#.", "...#.", "...#.", "...#.", "#..#.", ".##.."]),
    ('K', ["#...#", "#..#.", "#.#..", "##...", "#.#..", "#..#.", "#...#"]),
    ('L', ["#....", "#....", "#....", "#....", "#....", "#....", "#####"]),
    ('M', ["#...#", "##.##", "#.#.#", "#.#.#", "#...#", "#...#", "#...#"]),
    ('N', ["#...#", "#...#", "##..#", "#.#.#", "#..##", "#...#", "#...#"]),
    ('O', [".###.", "#...#", "#...#", "#...#", "#...#", "#...#", ".###."]),
    ('P', ["####.", "#...#", "#...#", "####.", "#....", "#....", "#...."]),
    ('Q', [".###.", "#...#", "#...#", "#...#", "#.#.#", "#..#.", ".##.#"]),
    ('R', ["####.", "#...#", "#...#", "####.", "#.#..", "#..#.", "#...#"]),
    ('S', [".####", "#....", "#....", ".###.", "....#", "....#", "####."]),
    ('T', ["#####", "..#..", "..#..", "..#..", "..#..", "..#..", "..#.."]),
    ('U', ["#...#", "#...#", "#...#", "#...#", "#...#", "#...#", ".###."]),
    ('V', ["#...#", "#...#", "#...#", "#...#", "#...#", ".#.#.", "..#.."]),
    ('W', ["#...#", "#...#", "#...#", "#.#.#", "#.#.#", "#.#.#", ".#.#."]),
    ('X', ["#...#", "#...#", ".#.#.", "..#..", ".#.#.", "#...#", "#...#"]),
    ('Y', ["#...#", "#...#", ".#.#.", "..#..", "..#..", "..#..", "..#.."]),
    ('Z', ["#####", "....#", "...#.", "..#..", ".#...", "#....", "#####"]),
    ('0', [".###.", "#...#", "#..##", "#.#.#", "##..#", "#...#", ".###."]),
    ('1', ["..#..", ".##..", "..#..", "..#..", "..#..", "..#..", ".###."]),
    ('2', [".###.", "#...#", "....#", "...#.", "..#..", ".#...", "#####"]),
    ('3', ["#####", "...#.", "..#..", "...#.", "....#", "#...#", ".###."]),
    ('4', ["...#.", "..##.", ".#.#.", "#..#.", "#####", "...#.", "...#."]),
    ('5', ["#####", "#....", "####.", "....#", "....#", "#...#", ".###."]),
    ('6', ["..##.", ".#...", "#....", "####.", "#...#", "#...#", ".###."]),
    ('7', ["#####", "....#", "...#.", "..#..", ".#...", ".#...", ".#..."]),
    ('8', [".###.", "#...#", "#...#", ".###.", "#...#", "#...#", ".###."]),
    ('9', [".###.", "#...#", "#...#", ".####", "....#", "...#.", ".##.."]),
    ('-', [".....", ".....", ".....", "#####", ".....", ".....", "....."]),
    ('.', [".....", ".....", ".....", ".....", ".....", ".##..", ".##.."]),
    ('!', ["..#..", "..#..", "..#..", "..#..", "..#..", ".....", "..#.."]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_glyph_is_5x7() {
        for (ch, g) in GLYPHS {
            assert_eq!(g.len(), GLYPH_HEIGHT as usize, "glyph {:?}", ch);
            for row in g {
                assert_eq!(row.len(), GLYPH_WIDTH as usize, "glyph {:?}", ch);
                assert!(row.chars().all(|c| c == '#' || c == '.'), "glyph {:?}", ch);
            }
        }
    }

    #[test]
    fn test_glyph_lookup_is_case_insensitive() {
        assert_eq!(glyph('p').unwrap(), glyph('P').unwrap());
    }

    #[test]
    fn test_every_letter_present() {
        for ch in 'A'..='Z' {
            assert!(glyph(ch).is_ok(), "missing {:?}", ch);
        }
        for ch in '0'..='9' {
            assert!(glyph(ch).is_ok(), "missing {:?}", ch);
        }
    }

    #[test]
    fn test_missing_glyph() {
        assert!(glyph('@').is_err());
    }

    #[test]
    fn test_text_width() {
        assert_eq!(text_width("", 3), 0);
        assert_eq!(text_width("A", 1), 5);
        assert_eq!(text_width("PLAYDATES", 1), 53);
        assert_eq!(text_width("PLAYDATES", 6), 318);
    }
}
