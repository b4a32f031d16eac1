//! Sticker colors.

use std::fmt;

use strum::EnumIter;

/// One of the six sticker colors.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter)]
pub enum Color {
    /// White (up face of a solved cube).
    White,
    /// Yellow (down).
    Yellow,
    /// Blue (front).
    Blue,
    /// Green (back).
    Green,
    /// Orange (left).
    Orange,
    /// Red (right).
    Red,
}
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
impl Color {
    /// Returns the single-letter code for this color, as used in piece
    /// signatures and the sticker grid.
    pub const fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Blue => 'B',
            Color::Green => 'G',
            Color::Orange => 'O',
            Color::Red => 'R',
        }
    }
    /// Returns the color for a single-letter code.
    pub fn from_letter(letter: char) -> Option<Color> {
        match letter.to_ascii_uppercase() {
            'W' => Some(Color::White),
            'Y' => Some(Color::Yellow),
            'B' => Some(Color::Blue),
            'G' => Some(Color::Green),
            'O' => Some(Color::Orange),
            'R' => Some(Color::Red),
            _ => None,
        }
    }
    /// Returns the CSS hex value for this color, for the render
    /// collaborator.
    pub const fn hex(self) -> &'static str {
        match self {
            Color::White => "#ffffff",
            Color::Yellow => "#ffff00",
            Color::Blue => "#0000ff",
            Color::Green => "#00ff00",
            Color::Orange => "#ffa500",
            Color::Red => "#ff0000",
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn letters_round_trip() {
        for color in Color::iter() {
            assert_eq!(Some(color), Color::from_letter(color.letter()));
            assert_eq!(Some(color), Color::from_letter(color.letter().to_ascii_lowercase()));
        }
        assert_eq!(None, Color::from_letter('X'));
    }
}
