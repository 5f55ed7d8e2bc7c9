//! The fixed icon compositions.
//!
//! Each motif is a fixed, ordered list of draw calls on a 1024x1024 canvas.
//! Later calls paint over earlier ones.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{Colour, Palette, Point, Rect};

use super::font::text_width;
use super::Canvas;

/// Native edge length of the base composition.
pub const BASE_SIZE: u32 = 1024;

/// Radius of the rounded tile corners.
const CORNER_RADIUS: u32 = 220;

/// Label drawn on the icon.
pub const LABEL: &str = "Playdates";

/// Which composition to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Motif {
    /// Calendar card with binder rings, day dots and two stick figures
    #[default]
    Calendar,
    /// Three smiling faces with decorative dots
    Figures,
}

impl Motif {
    pub fn name(self) -> &'static str {
        match self {
            Motif::Calendar => "calendar",
            Motif::Figures => "figures",
        }
    }

    /// The app theme palette with this motif's background colour.
    pub fn palette(self) -> Palette {
        match self {
            Motif::Calendar => Palette::with_background(Palette::LAVENDER),
            Motif::Figures => Palette::with_background(Palette::MINT),
        }
    }

    /// Draw the composition onto a fresh canvas.
    pub fn render(self, palette: &Palette) -> Result<Canvas> {
        let mut canvas = Canvas::new(BASE_SIZE, palette.background)?;
        fill_tile(&mut canvas, palette.background)?;
        match self {
            Motif::Calendar => draw_calendar(&mut canvas, palette)?,
            Motif::Figures => draw_figures(&mut canvas, palette)?,
        }
        Ok(canvas)
    }
}

impl fmt::Display for Motif {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Render the default motif with its own palette.
pub fn render_base_composition() -> Result<Canvas> {
    let motif = Motif::default();
    motif.render(&motif.palette())
}

/// The rounded icon tile covering the whole canvas.
fn fill_tile(canvas: &mut Canvas, colour: Colour) -> Result<()> {
    let tile = Rect::square(Point::new(0, 0), canvas.size())?;
    canvas.fill_rounded_rect(tile, CORNER_RADIUS, colour)
}

/// A face: head disc, two eyes and a flattened mouth.
struct Face {
    head: (i32, i32, i32, i32),
    left_eye: (i32, i32, i32, i32),
    right_eye: (i32, i32, i32, i32),
    mouth: (i32, i32, i32, i32),
}

impl Face {
    fn draw(&self, canvas: &mut Canvas, skin: Colour, ink: Colour) -> Result<()> {
        canvas.fill_ellipse(rect(self.head)?, skin);
        canvas.fill_ellipse(rect(self.left_eye)?, ink);
        canvas.fill_ellipse(rect(self.right_eye)?, ink);
        canvas.fill_ellipse(rect(self.mouth)?, ink);
        Ok(())
    }
}

fn rect((l, t, r, b): (i32, i32, i32, i32)) -> Result<Rect> {
    Rect::new(l, t, r, b)
}

/// Draw the label horizontally centred on the canvas with its top at `top`.
fn draw_centred_label(canvas: &mut Canvas, top: i32, scale: u32, colour: Colour) -> Result<()> {
    let width = text_width(LABEL, scale) as i32;
    let left = (canvas.size() as i32 - width) / 2;
    canvas.draw_text(Point::new(left, top), LABEL, scale, colour)
}

fn draw_figures(canvas: &mut Canvas, p: &Palette) -> Result<()> {
    let faces = [
        // Child, left
        (
            Face {
                head: (400, 350, 460, 410),
                left_eye: (415, 370, 423, 378),
                right_eye: (437, 370, 445, 378),
                mouth: (420, 390, 440, 396),
            },
            p.secondary,
        ),
        // Adult, middle
        (
            Face {
                head: (470, 330, 550, 410),
                left_eye: (490, 355, 500, 365),
                right_eye: (520, 355, 530, 365),
                mouth: (500, 380, 525, 388),
            },
            p.highlight,
        ),
        // Child, right
        (
            Face {
                head: (560, 350, 620, 410),
                left_eye: (575, 370, 583, 378),
                right_eye: (597, 370, 605, 378),
                mouth: (580, 390, 600, 396),
            },
            p.accent,
        ),
    ];
    for (face, skin) in &faces {
        face.draw(canvas, *skin, p.text)?;
    }

    // Decorative dots, painted opaque like every other shape
    canvas.fill_ellipse(Rect::new(340, 340, 380, 380)?, p.accent);
    canvas.fill_ellipse(Rect::new(640, 340, 670, 370)?, p.highlight);
    canvas.fill_ellipse(Rect::new(640, 640, 665, 665)?, p.secondary);

    // Clear a band for the label, then draw it
    canvas.fill_rect(Rect::new(412, 700, 612, 730)?, p.primary);
    draw_centred_label(canvas, 705, 3, p.text)?;
    Ok(())
}

/// Stick figure proportions, relative to the head centre.
struct StickFigure {
    head: Point,
    head_radius: i32,
    body: i32,
    arm_drop: i32,
    arm_reach: i32,
    leg_spread: i32,
    leg_length: i32,
}

impl StickFigure {
    const LIMB_WIDTH: u32 = 14;

    fn neck(&self) -> Point {
        Point::new(self.head.x, self.head.y + self.head_radius)
    }

    fn shoulder(&self) -> Point {
        let neck = self.neck();
        Point::new(neck.x, neck.y + self.body / 4)
    }

    /// Hand position; `side` is -1 for left, 1 for right.
    fn hand(&self, side: i32) -> Point {
        let shoulder = self.shoulder();
        Point::new(shoulder.x + side * self.arm_reach, shoulder.y + self.arm_drop)
    }

    fn draw(&self, canvas: &mut Canvas, skin: Colour, ink: Colour) -> Result<()> {
        let Point { x, y } = self.head;
        let neck = self.neck();
        let hip = Point::new(x, neck.y + self.body);

        // Limbs first so the head sits on top
        canvas.draw_line(neck, hip, Self::LIMB_WIDTH, ink)?;
        for side in [-1, 1] {
            let foot = Point::new(x + side * self.leg_spread, hip.y + self.leg_length);
            canvas.draw_line(self.shoulder(), self.hand(side), Self::LIMB_WIDTH, ink)?;
            canvas.draw_line(hip, foot, Self::LIMB_WIDTH, ink)?;
        }

        canvas.fill_ellipse(Rect::around(self.head, self.head_radius)?, skin);
        let eye = (self.head_radius / 5).max(2);
        let eye_dx = self.head_radius * 2 / 5;
        let eye_y = y - self.head_radius / 6;
        canvas.fill_ellipse(Rect::around(Point::new(x - eye_dx, eye_y), eye)?, ink);
        canvas.fill_ellipse(Rect::around(Point::new(x + eye_dx, eye_y), eye)?, ink);
        Ok(())
    }
}

fn draw_calendar(canvas: &mut Canvas, p: &Palette) -> Result<()> {
    let card = Rect::new(172, 212, 851, 871)?;
    let radius = 72;

    // Drop shadow
    let shadow = Rect::new(card.left() + 14, card.top() + 18, card.right() + 14, card.bottom() + 18)?;
    canvas.fill_rounded_rect(shadow, radius, p.background.shade(-18.0))?;

    // Page and header band, squared off where the two meet
    canvas.fill_rounded_rect(card, radius, p.secondary)?;
    canvas.fill_rounded_rect(Rect::new(card.left(), card.top(), card.right(), 372)?, radius, p.primary)?;
    canvas.fill_rect(Rect::new(card.left(), 300, card.right(), 372)?, p.primary);

    // Binder rings
    for x in [300, 667] {
        canvas.fill_rounded_rect(Rect::new(x, 168, x + 56, 268)?, 28, p.text)?;
    }

    // Two rows of days, one of them marked
    let columns = [262, 387, 512, 637, 762];
    for (row, y) in [430, 500].into_iter().enumerate() {
        for (col, x) in columns.into_iter().enumerate() {
            let marked = row == 1 && col == 3;
            let colour = if marked { p.highlight } else { p.accent };
            let r = if marked { 26 } else { 18 };
            canvas.fill_ellipse(Rect::around(Point::new(x, y), r)?, colour);
        }
    }

    // Grown-up and child holding hands
    let adult = StickFigure {
        head: Point::new(440, 596),
        head_radius: 36,
        body: 96,
        arm_drop: 36,
        arm_reach: 60,
        leg_spread: 32,
        leg_length: 60,
    };
    let child = StickFigure {
        head: Point::new(584, 640),
        head_radius: 28,
        body: 62,
        arm_drop: 20,
        arm_reach: 44,
        leg_spread: 22,
        leg_length: 44,
    };
    adult.draw(canvas, p.highlight, p.text)?;
    child.draw(canvas, p.primary, p.text)?;
    canvas.draw_line(adult.hand(1), child.hand(-1), StickFigure::LIMB_WIDTH, p.text)?;

    draw_centred_label(canvas, 800, 6, p.text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_base_composition_size() {
        let canvas = render_base_composition().unwrap();
        assert_eq!(canvas.size(), BASE_SIZE);
    }

    #[test]
    fn test_render_is_deterministic() {
        for motif in [Motif::Calendar, Motif::Figures] {
            let a = motif.render(&motif.palette()).unwrap();
            let b = motif.render(&motif.palette()).unwrap();
            assert!(a == b, "{} differs between runs", motif);
        }
    }

    #[test]
    fn test_figures_layout() {
        let p = Motif::Figures.palette();
        let canvas = Motif::Figures.render(&p).unwrap();

        // Corners and untouched areas keep the background
        assert_eq!(canvas.get(0, 0), Some(p.background));
        assert_eq!(canvas.get(1023, 1023), Some(p.background));
        assert_eq!(canvas.get(100, 900), Some(p.background));

        // Head centres
        assert_eq!(canvas.get(430, 360), Some(p.secondary));
        assert_eq!(canvas.get(510, 340), Some(p.highlight));
        assert_eq!(canvas.get(590, 360), Some(p.accent));

        // Eye
        assert_eq!(canvas.get(419, 374), Some(p.text));

        // Decorative dots are solid role colours
        assert_eq!(canvas.get(360, 360), Some(p.accent));
        assert_eq!(canvas.get(655, 355), Some(p.highlight));
        assert_eq!(canvas.get(652, 652), Some(p.secondary));
    }

    #[test]
    fn test_calendar_layout() {
        let p = Motif::Calendar.palette();
        let canvas = Motif::Calendar.render(&p).unwrap();

        assert_eq!(canvas.get(0, 0), Some(p.background));
        assert_eq!(canvas.get(40, 512), Some(p.background));

        // Header band, page, binder ring
        assert_eq!(canvas.get(512, 300), Some(p.primary));
        assert_eq!(canvas.get(200, 700), Some(p.secondary));
        assert_eq!(canvas.get(328, 218), Some(p.text));

        // Ordinary day and the marked day
        assert_eq!(canvas.get(262, 430), Some(p.accent));
        assert_eq!(canvas.get(637, 500), Some(p.highlight));

        // Adult head over its limbs
        assert_eq!(canvas.get(440, 580), Some(p.highlight));
        // Adult body line
        assert_eq!(canvas.get(440, 680), Some(p.text));
    }

    #[test]
    fn test_calendar_and_figures_differ() {
        let a = Motif::Calendar.render(&Motif::Calendar.palette()).unwrap();
        let b = Motif::Figures.render(&Motif::Figures.palette()).unwrap();
        assert!(a != b);
        assert_ne!(Motif::Calendar.palette().background, Motif::Figures.palette().background);
    }

    #[test]
    fn test_motif_names() {
        let m: Motif = serde_yaml::from_str("figures").unwrap();
        assert_eq!(m, Motif::Figures);
        assert_eq!(Motif::default().to_string(), "calendar");
    }
}
