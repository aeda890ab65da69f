//! # Robot actions
//!
//! Every action maps to exactly one program text character:
//!
//! ```text
//! F L R        move forward, turn left, turn right
//! r g b        paint the current cell
//! 1..9 0       call function 0..9
//! _ NUL        no action (empty slot)
//! ```

use crate::color::Color;
use crate::error::{Result, SpecError};
use crate::program::MAX_FUNCTIONS;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Character for an empty action
pub const EMPTY_CHAR: char = '_';

/// Highest call target a single character can encode
pub const MAX_CALL_TARGET: usize = 9;

/// Robot movements
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovementKind {
    /// Move forward one cell
    Move,
    /// Turn 90 degrees counter-clockwise
    TurnLeft,
    /// Turn 90 degrees clockwise
    TurnRight,
}

impl MovementKind {
    pub const ALL: [MovementKind; 3] =
        [MovementKind::Move, MovementKind::TurnLeft, MovementKind::TurnRight];

    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            MovementKind::Move => 'F',
            MovementKind::TurnLeft => 'L',
            MovementKind::TurnRight => 'R',
        }
    }
}

/// Action performed by a command
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Move or turn the robot
    Movement(MovementKind),
    /// Recolor the cell under the robot
    Paint(Color),
    /// Enter the function with this index
    Call(usize),
}

impl Action {
    pub const MOVE: Action = Action::Movement(MovementKind::Move);
    pub const TURN_LEFT: Action = Action::Movement(MovementKind::TurnLeft);
    pub const TURN_RIGHT: Action = Action::Movement(MovementKind::TurnRight);

    /// Call action with a range-checked target
    pub fn call(target: usize) -> Result<Self> {
        if target > MAX_CALL_TARGET {
            return Err(SpecError::InvalidCallTarget(target));
        }
        Ok(Action::Call(target))
    }

    /// Program text character; call targets above 9 have none
    pub fn to_char(self) -> Result<char> {
        let c = match self {
            Action::Movement(kind) => kind.to_char(),
            Action::Paint(color) => color.to_char(),
            Action::Call(MAX_CALL_TARGET) => '0',
            Action::Call(target) => u32::try_from(target)
                .ok()
                .filter(|&digit| digit < MAX_CALL_TARGET as u32)
                .and_then(|digit| char::from_digit(digit + 1, 10))
                .ok_or(SpecError::InvalidCallTarget(target))?,
        };
        Ok(c)
    }

    /// Parse an action character. `_` and NUL are the empty action.
    pub fn from_char(c: char) -> Result<Option<Self>> {
        let action = match c {
            EMPTY_CHAR | '\0' => return Ok(None),
            'F' => Action::MOVE,
            'L' => Action::TURN_LEFT,
            'R' => Action::TURN_RIGHT,
            '0' => Action::Call(9),
            '1'..='9' => Action::Call(c as usize - '1' as usize),
            _ => match Color::from_char(c) {
                Some(color) => Action::Paint(color),
                None => return Err(SpecError::UnknownAction(c)),
            },
        };
        Ok(Some(action))
    }

    /// Every action usable in a program with the maximum number of functions
    pub fn all() -> Vec<Action> {
        MovementKind::ALL
            .into_iter()
            .map(Action::Movement)
            .chain(Color::ALL.into_iter().map(Action::Paint))
            .chain((0..MAX_FUNCTIONS).map(Action::Call))
            .collect()
    }

    /// Call target, if this is a call
    #[inline]
    pub const fn call_target(self) -> Option<usize> {
        match self {
            Action::Call(target) => Some(target),
            _ => None,
        }
    }

    /// True for actions that count as a robot move (movement and paint)
    #[inline]
    pub const fn is_move(self) -> bool {
        !matches!(self, Action::Call(_))
    }

    /// Reject call targets with no text character
    pub fn check_encodable(self) -> Result<()> {
        match self {
            Action::Call(target) if target > MAX_CALL_TARGET => {
                Err(SpecError::InvalidCallTarget(target))
            }
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Movement(MovementKind::Move) => write!(f, "forward"),
            Action::Movement(MovementKind::TurnLeft) => write!(f, "left"),
            Action::Movement(MovementKind::TurnRight) => write!(f, "right"),
            Action::Paint(color) => write!(f, "paint {}", color),
            Action::Call(target) => match target.checked_add(1) {
                Some(number) => write!(f, "call F{}", number),
                None => write!(f, "call #{}", target),
            },
        }
    }
}
