//! # Error Types for the RoboZZle model

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpecError {
    // Program shape errors
    #[error("Invalid function count: {0} (valid range: 1-5)")]
    InvalidFunctionCount(usize),

    #[error("Invalid command count: {0} (valid range: 0-10)")]
    InvalidCommandCount(usize),

    #[error("Function index {index} out of range (program has {count} functions)")]
    FunctionOutOfRange { index: usize, count: usize },

    #[error("Command index {index} out of range (function has {len} slots)")]
    CommandOutOfRange { index: usize, len: usize },

    #[error("Call target F{target} out of range (program has {count} functions)")]
    CallTargetOutOfRange { target: usize, count: usize },

    // Character mapping errors
    #[error("Unknown color character: {0:?}")]
    UnknownColor(char),

    #[error("Unknown action character: {0:?}")]
    UnknownAction(char),

    #[error("Call target {0} cannot be encoded (valid range: 0-9)")]
    InvalidCallTarget(usize),

    // Grid preconditions
    #[error("Robot is not on a colored cell at ({x}, {y})")]
    RobotNotOnColoredCell { x: i32, y: i32 },

    // Edit history
    #[error("Nothing to undo")]
    NothingToUndo,

    #[error("Nothing to redo")]
    NothingToRedo,

    #[error("Invalid history cursor {cursor} (history has {len} versions)")]
    InvalidHistoryCursor { cursor: usize, len: usize },

    #[error("History snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),
}

impl SpecError {
    /// Check if this error reports a broken caller contract rather than bad input
    pub fn is_precondition_violation(&self) -> bool {
        matches!(self, SpecError::RobotNotOnColoredCell { .. })
    }
}

pub type Result<T> = std::result::Result<T, SpecError>;
