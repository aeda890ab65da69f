//! # Call stack
//!
//! [`ProgramState`] tracks where execution is: a stack of instruction
//! pointers whose top is the next slot to run. A fresh state holds the
//! entry frame `0:0`; an empty stack means the program has returned.
//!
//! Running out of depth is not an error. The call is dropped and a sticky
//! overflow flag is raised for the executor to report.

use crate::error::{Result, RuntimeError};
use robozzle_spec::InstructionPointer;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default maximum number of frames
pub const DEFAULT_MAX_STACK_DEPTH: usize = 1024;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramState {
    frames: Vec<InstructionPointer>,
    max_depth: usize,
    overflowed: bool,
}

impl ProgramState {
    pub fn new() -> Self {
        Self::with_max_depth(DEFAULT_MAX_STACK_DEPTH)
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            frames: vec![InstructionPointer::ENTRY],
            max_depth,
            overflowed: false,
        }
    }

    /// Pointer to the next slot to run, `None` once the entry frame returned
    #[inline]
    pub fn current_instruction(&self) -> Option<InstructionPointer> {
        self.frames.last().copied()
    }

    /// Enter `function` at its first slot
    pub fn call(&mut self, function: usize) {
        if self.frames.len() >= self.max_depth {
            debug!(function, depth = self.frames.len(), "call stack overflow");
            self.overflowed = true;
            return;
        }
        self.frames.push(InstructionPointer::new(function, 0));
    }

    /// Leave the current function
    pub fn ret(&mut self) -> Result<InstructionPointer> {
        self.frames.pop().ok_or(RuntimeError::EmptyCallStack)
    }

    /// Move the current frame to its next slot
    pub fn advance(&mut self) -> Result<()> {
        let top = self.frames.last_mut().ok_or(RuntimeError::EmptyCallStack)?;
        *top = top.advanced();
        Ok(())
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    #[inline]
    pub fn is_overflowed(&self) -> bool {
        self.overflowed
    }

    /// Frames from the innermost call outwards
    pub fn frames(&self) -> impl Iterator<Item = &InstructionPointer> {
        self.frames.iter().rev()
    }
}

impl Default for ProgramState {
    fn default() -> Self {
        Self::new()
    }
}
