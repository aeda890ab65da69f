//! # RoboZZle Runtime
//!
//! Step-by-step execution of RoboZZle programs.
//!
//! ## Features
//!
//! - **Single steps**: each step runs at most one non-empty command
//! - **Bounded call stack**: overflow is reported, never a panic
//! - **Notifications**: robot moves, cell changes and program state changes
//!   are reported to an [`ExecutionObserver`]
//! - **Limits**: configurable move limit and stack depth
//!
//! ## Example
//!
//! ```rust
//! use robozzle_runtime::{ProgramExecutor, Termination};
//! use robozzle_spec::{Color, Direction, Program, PuzzleState, Robot};
//!
//! let program = Program::new(&[3]).unwrap();
//! let board = PuzzleState::filled(Color::Red, Robot::new(0, 0, Direction::RIGHT));
//! let mut executor = ProgramExecutor::new(&program, board).unwrap();
//! assert_eq!(executor.run().unwrap(), Termination::Victory);
//! ```

pub mod error;
pub mod call_stack;
pub mod events;
pub mod executor;

pub use call_stack::{ProgramState, DEFAULT_MAX_STACK_DEPTH};
pub use events::{ExecutionEvent, ExecutionObserver, NullObserver};
pub use executor::{ExecutionResult, ExecutorConfig, ProgramExecutor, Termination};
pub use error::{Result, RuntimeError};

use robozzle_spec::{Program, Puzzle};

/// Simple execution helper
///
/// Runs `program` on the puzzle's starting board until it terminates.
pub fn run(program: &Program, puzzle: &Puzzle) -> Result<ExecutionResult> {
    ProgramExecutor::for_puzzle(program, puzzle)?.finish()
}
