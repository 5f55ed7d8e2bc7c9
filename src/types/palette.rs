//! Icon palette: semantic colour roles.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Colour;

/// A semantic colour role in the icon palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Primary,
    Secondary,
    Accent,
    Highlight,
    Text,
    Background,
}

impl Role {
    /// All roles in display order.
    pub const ALL: [Role; 6] = [
        Role::Primary,
        Role::Secondary,
        Role::Accent,
        Role::Highlight,
        Role::Text,
        Role::Background,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Role::Primary => "primary",
            Role::Secondary => "secondary",
            Role::Accent => "accent",
            Role::Highlight => "highlight",
            Role::Text => "text",
            Role::Background => "background",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The colours an icon is drawn with, one per [`Role`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: Colour,
    pub secondary: Colour,
    pub accent: Colour,
    pub highlight: Colour,
    pub text: Colour,
    pub background: Colour,
}

impl Palette {
    /// Mint green #91DDCF
    pub const MINT: Colour = Colour::rgb(145, 221, 207);
    /// Off-white #F7F9F2
    pub const OFF_WHITE: Colour = Colour::rgb(247, 249, 242);
    /// Soft lavender #E8C5E5
    pub const LAVENDER: Colour = Colour::rgb(232, 197, 229);
    /// Pink #F19ED2
    pub const PINK: Colour = Colour::rgb(241, 158, 210);
    /// Dark purple #5D4E6D
    pub const DARK_PURPLE: Colour = Colour::rgb(93, 78, 109);

    /// The app theme colours with the given background.
    pub const fn with_background(background: Colour) -> Self {
        Self {
            primary: Self::MINT,
            secondary: Self::OFF_WHITE,
            accent: Self::LAVENDER,
            highlight: Self::PINK,
            text: Self::DARK_PURPLE,
            background,
        }
    }

    /// Look up a colour by role.
    pub fn get(&self, role: Role) -> Colour {
        match role {
            Role::Primary => self.primary,
            Role::Secondary => self.secondary,
            Role::Accent => self.accent,
            Role::Highlight => self.highlight,
            Role::Text => self.text,
            Role::Background => self.background,
        }
    }

    /// Replace the colour for a role.
    pub fn set(&mut self, role: Role, colour: Colour) {
        match role {
            Role::Primary => self.primary = colour,
            Role::Secondary => self.secondary = colour,
            Role::Accent => self.accent = colour,
            Role::Highlight => self.highlight = colour,
            Role::Text => self.text = colour,
            Role::Background => self.background = colour,
        }
    }

    /// Iterate over `(role, colour)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, Colour)> + '_ {
        Role::ALL.iter().map(move |&role| (role, self.get(role)))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::with_background(Self::MINT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette_theme_colours() {
        let palette = Palette::default();
        assert_eq!(palette.get(Role::Primary).to_string(), "#91DDCF");
        assert_eq!(palette.get(Role::Secondary).to_string(), "#F7F9F2");
        assert_eq!(palette.get(Role::Accent).to_string(), "#E8C5E5");
        assert_eq!(palette.get(Role::Highlight).to_string(), "#F19ED2");
        assert_eq!(palette.get(Role::Text).to_string(), "#5D4E6D");
        assert_eq!(palette.background, palette.primary);
    }

    #[test]
    fn test_set_overrides_single_role() {
        let mut palette = Palette::default();
        palette.set(Role::Accent, Colour::BLACK);
        assert_eq!(palette.accent, Colour::BLACK);
        assert_eq!(palette.primary, Palette::MINT);
    }

    #[test]
    fn test_iter_covers_every_role_once() {
        let palette = Palette::default();
        let roles: Vec<Role> = palette.iter().map(|(role, _)| role).collect();
        assert_eq!(roles, Role::ALL.to_vec());
    }

    #[test]
    fn test_role_deserializes_lowercase() {
        let role: Role = serde_yaml::from_str("highlight").unwrap();
        assert_eq!(role, Role::Highlight);
    }
}
