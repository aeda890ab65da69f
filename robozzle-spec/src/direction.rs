//! # Robot heading
//!
//! Directions live on a cyclic ordinal: 0 = right, 1 = down, 2 = left,
//! 3 = up. Turning right adds one, turning left subtracts one. The raw value
//! is never normalized on turns; equality and hashing work modulo 4.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Direction(i32);

impl Direction {
    pub const RIGHT: Self = Self(0);
    pub const DOWN: Self = Self(1);
    pub const LEFT: Self = Self(2);
    pub const UP: Self = Self(3);

    /// Create a direction from a raw ordinal (any integer)
    #[inline]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Raw ordinal, not normalized
    #[inline]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Rotate 90 degrees counter-clockwise
    #[inline]
    #[must_use]
    pub const fn turn_left(self) -> Self {
        Self(self.0.wrapping_sub(1))
    }

    /// Rotate 90 degrees clockwise
    #[inline]
    #[must_use]
    pub const fn turn_right(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    /// Same heading with ordinal in 0..4
    #[inline]
    #[must_use]
    pub const fn normalize(self) -> Self {
        Self(self.0 & 3)
    }

    /// Unit vector `(dx, dy)`; y grows downward
    pub const fn delta(self) -> (i32, i32) {
        match self.0 & 3 {
            0 => (1, 0),
            1 => (0, 1),
            2 => (-1, 0),
            _ => (0, -1),
        }
    }

    /// Number of right turns taking `from` to `self` (0..4)
    pub const fn turns_from(self, from: Direction) -> i32 {
        (self.0.wrapping_sub(from.0)) & 3
    }
}

impl Default for Direction {
    fn default() -> Self {
        Self::RIGHT
    }
}

impl PartialEq for Direction {
    fn eq(&self, other: &Self) -> bool {
        self.normalize().0 == other.normalize().0
    }
}

impl Eq for Direction {}

impl Hash for Direction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalize().0.hash(state);
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.0 & 3 {
            0 => "right",
            1 => "down",
            2 => "left",
            _ => "up",
        };
        write!(f, "{}", name)
    }
}
