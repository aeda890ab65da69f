//! # RoboZZle core model
//!
//! Types shared by the codec and the runtime.
//!
//! ## Key Features
//! - 16 x 12 board of colored cells with stars
//! - Programs of 1-5 functions, each with up to 10 conditional commands
//! - Actions: move, turn left, turn right, paint, call
//! - Flat instruction addressing across functions
//! - Linear edit history with binary snapshots

pub mod color;
pub mod direction;
pub mod grid;
pub mod action;
pub mod command;
pub mod function;
pub mod program;
pub mod pointer;
pub mod puzzle;
pub mod history;
pub mod error;

pub use color::{Color, PaintSet};
pub use direction::Direction;
pub use grid::{PuzzleCell, PuzzleState, Robot, HEIGHT, WIDTH};
pub use action::{Action, MovementKind};
pub use command::{Command, EMPTY_CODE};
pub use function::{Function, MAX_COMMANDS};
pub use program::{Program, MAX_FUNCTIONS};
pub use pointer::InstructionPointer;
pub use puzzle::{Puzzle, DEFAULT_ACTION_LIMIT};
pub use history::ProgramHistory;
pub use error::SpecError;

/// Character that terminates every function in program text
pub const FUNCTION_SEPARATOR: char = '|';
