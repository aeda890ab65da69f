//! # Commands
//!
//! A command is an optional color condition plus an action. A program slot
//! is `Option<Command>`; `None` is the empty slot, written `__` in text.

use crate::action::Action;
use crate::color::Color;
use crate::error::Result;
use crate::grid::PuzzleState;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Text form of an empty slot
pub const EMPTY_CODE: &str = "__";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Command {
    /// Required cell color; `None` always matches
    pub condition: Option<Color>,
    pub action: Action,
}

impl Command {
    /// Unconditional command
    pub const fn new(action: Action) -> Self {
        Self { condition: None, action }
    }

    /// Command that only runs on cells of `color`
    pub const fn when(color: Color, action: Action) -> Self {
        Self { condition: Some(color), action }
    }

    /// Parse a command from its condition and action characters.
    ///
    /// Returns `Ok(None)` for an empty action regardless of the condition.
    pub fn from_chars(condition: char, action: char) -> Result<Option<Self>> {
        let Some(action) = Action::from_char(action)? else {
            return Ok(None);
        };
        let condition = Color::parse_condition(condition)?;
        Ok(Some(Self { condition, action }))
    }

    /// Two-character text code
    pub fn code(&self) -> Result<[char; 2]> {
        Ok([Color::condition_char(self.condition), self.action.to_char()?])
    }

    /// Check if the condition holds for the robot's current cell.
    ///
    /// The robot must stand on a colored cell; asking otherwise is an error,
    /// even for unconditional commands.
    pub fn is_met(&self, state: &PuzzleState) -> Result<bool> {
        let color = state.robot_color()?;
        Ok(self.condition.map_or(true, |condition| condition == color))
    }
}

impl From<Action> for Command {
    fn from(action: Action) -> Self {
        Self::new(action)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code() {
            Ok([condition, action]) => write!(f, "{}{}", condition, action),
            Err(_) => write!(f, "{}<{}>", Color::condition_char(self.condition), self.action),
        }
    }
}

/// Text code of a slot, `__` when empty
pub fn slot_code(slot: Option<&Command>) -> Result<[char; 2]> {
    slot.map_or(Ok(['_', '_']), Command::code)
}
