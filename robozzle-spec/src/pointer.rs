//! # Instruction addressing
//!
//! An [`InstructionPointer`] names a slot as (function, command). The same
//! slot also has a flat global index: the capacities of all earlier
//! functions plus the command offset.
//!
//! ```text
//! layout [3, 2, 4]
//! global   0 1 2 | 3 4 | 5 6 7 8
//! pointer  0:0 .. 0:2 | 1:0 1:1 | 2:0 .. 2:3
//! ```
//!
//! A command offset equal to the function length means "about to return".

use crate::program::Program;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstructionPointer {
    pub function: usize,
    pub command: usize,
}

impl InstructionPointer {
    /// First slot of the entry function
    pub const ENTRY: Self = Self { function: 0, command: 0 };

    #[inline]
    pub const fn new(function: usize, command: usize) -> Self {
        Self { function, command }
    }

    /// Pointer for a global slot index, or `None` past the last slot
    pub fn from_global(program: &Program, global: usize) -> Option<Self> {
        let mut remaining = global;
        for (function, f) in program.functions().iter().enumerate() {
            if remaining < f.len() {
                return Some(Self::new(function, remaining));
            }
            remaining -= f.len();
        }
        None
    }

    /// Global slot index.
    ///
    /// A command offset past the end of its function is clamped to the
    /// function's last slot. Past the end of the final function, or for a
    /// pointer into a missing function, there is no index.
    pub fn to_global(&self, program: &Program) -> Option<usize> {
        let functions = program.functions();
        let current = functions.get(self.function)?;
        let is_last = self.function + 1 >= functions.len();
        if self.command >= current.len() && is_last {
            return None;
        }

        let preceding: usize = functions[..self.function].iter().map(|f| f.len()).sum();
        let offset = self.command.min(current.len().checked_sub(1)?);
        Some(preceding + offset)
    }

    /// Next slot in program order, crossing into the following function.
    ///
    /// Empty slots are not skipped.
    pub fn next(&self, program: &Program) -> Option<Self> {
        let len = program.function(self.function)?.len();
        if self.command + 1 < len {
            return Some(Self::new(self.function, self.command + 1));
        }
        if self.function + 1 >= program.function_count() {
            return None;
        }
        Some(Self::new(self.function + 1, 0))
    }

    /// Same function, following slot
    #[inline]
    #[must_use]
    pub const fn advanced(self) -> Self {
        Self::new(self.function, self.command + 1)
    }
}

impl fmt::Display for InstructionPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.function, self.command)
    }
}
