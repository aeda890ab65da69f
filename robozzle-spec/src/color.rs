//! # Cell colors
//!
//! Colors double as command conditions. In program text a color is one
//! lower-case character and "no condition" is `_`.

use crate::error::{Result, SpecError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Character for an absent condition
pub const ANY_CHAR: char = '_';

/// Cell color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl Color {
    /// All colors in palette order
    pub const ALL: [Color; 3] = [Color::Red, Color::Green, Color::Blue];

    /// Program text character
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Color::Red => 'r',
            Color::Green => 'g',
            Color::Blue => 'b',
        }
    }

    /// Convert from program text character
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'r' => Some(Color::Red),
            'g' => Some(Color::Green),
            'b' => Some(Color::Blue),
            _ => None,
        }
    }

    /// Parse a condition character: `_` is "always", otherwise a color
    pub fn parse_condition(c: char) -> Result<Option<Self>> {
        if c == ANY_CHAR {
            return Ok(None);
        }
        Self::from_char(c).map(Some).ok_or(SpecError::UnknownColor(c))
    }

    /// Condition character for an optional color
    #[inline]
    pub fn condition_char(condition: Option<Self>) -> char {
        condition.map_or(ANY_CHAR, Color::to_char)
    }

    /// Paint permission bit for this color
    #[inline]
    const fn paint_bit(self) -> u8 {
        match self {
            Color::Red => 1,
            Color::Green => 2,
            Color::Blue => 4,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
        };
        write!(f, "{}", name)
    }
}

/// Set of paint commands a puzzle allows
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaintSet(u8);

impl PaintSet {
    /// No paint commands
    pub const NONE: Self = Self(0);

    /// Every paint command
    pub const ALL: Self = Self(1 | 2 | 4);

    /// Set containing a single color
    pub const fn only(color: Color) -> Self {
        Self(color.paint_bit())
    }

    /// Add a color to the set
    pub const fn with(self, color: Color) -> Self {
        Self(self.0 | color.paint_bit())
    }

    /// Check if painting with `color` is allowed
    #[inline]
    pub const fn contains(self, color: Color) -> bool {
        self.0 & color.paint_bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Allowed colors in palette order
    pub fn colors(self) -> impl Iterator<Item = Color> {
        Color::ALL.into_iter().filter(move |c| self.contains(*c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_chars() {
        for color in Color::ALL {
            assert_eq!(Color::from_char(color.to_char()), Some(color));
        }
        assert_eq!(Color::from_char('x'), None);
        assert_eq!(Color::from_char('R'), None);
    }

    #[test]
    fn test_parse_condition() {
        assert_eq!(Color::parse_condition('_').unwrap(), None);
        assert_eq!(Color::parse_condition('g').unwrap(), Some(Color::Green));
        assert!(matches!(
            Color::parse_condition('F'),
            Err(SpecError::UnknownColor('F'))
        ));
    }

    #[test]
    fn test_condition_char() {
        assert_eq!(Color::condition_char(None), '_');
        assert_eq!(Color::condition_char(Some(Color::Blue)), 'b');
    }

    #[test]
    fn test_paint_set() {
        assert!(PaintSet::NONE.is_empty());
        assert_eq!(PaintSet::ALL.colors().count(), 3);

        let set = PaintSet::only(Color::Red).with(Color::Blue);
        assert!(set.contains(Color::Red));
        assert!(!set.contains(Color::Green));
        assert!(set.contains(Color::Blue));
        assert_eq!(set.colors().collect::<Vec<_>>(), vec![Color::Red, Color::Blue]);
    }
}
