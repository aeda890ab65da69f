//! # Program Structure
//!
//! A program is an ordered list of 1 to 5 functions; function 0 is the
//! entry point. The function count is fixed when the program is built.
//!
//! ```text
//! F1: [r:F] [_:L] [_:2] [__] ...
//! F2: [b:R] [__]
//! ```

use crate::command::Command;
use crate::error::{Result, SpecError};
use crate::function::Function;
use crate::pointer::InstructionPointer;
use serde::{Deserialize, Serialize};

/// Maximum number of functions in a program
pub const MAX_FUNCTIONS: usize = 5;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Program {
    functions: Vec<Function>,
}

impl Program {
    /// Empty program with one function per capacity
    pub fn new(capacities: &[usize]) -> Result<Self> {
        Self::check_function_count(capacities.len())?;
        let functions = capacities
            .iter()
            .map(|&capacity| Function::new(capacity))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { functions })
    }

    /// Program made of the given functions.
    ///
    /// Every call must target one of these functions.
    pub fn from_functions(functions: Vec<Function>) -> Result<Self> {
        Self::check_function_count(functions.len())?;
        let program = Self { functions };
        for target in program.functions.iter().flat_map(Function::call_targets) {
            program.check_call_target(target)?;
        }
        Ok(program)
    }

    fn check_function_count(count: usize) -> Result<()> {
        if count == 0 || count > MAX_FUNCTIONS {
            return Err(SpecError::InvalidFunctionCount(count));
        }
        Ok(())
    }

    #[inline]
    pub fn functions(&self) -> &[Function] {
        &self.functions
    }

    #[inline]
    pub fn function(&self, index: usize) -> Option<&Function> {
        self.functions.get(index)
    }

    #[inline]
    pub fn function_count(&self) -> usize {
        self.functions.len()
    }

    /// Capacity of each function, in order
    pub fn layout(&self) -> Vec<usize> {
        self.functions.iter().map(Function::len).collect()
    }

    /// Total number of command slots
    pub fn total_slots(&self) -> usize {
        self.functions.iter().map(Function::len).sum()
    }

    /// Number of non-empty commands (the length of a solution)
    pub fn command_count(&self) -> usize {
        self.functions.iter().map(Function::command_count).sum()
    }

    /// Command under `pointer`; `None` for empty or out-of-range slots
    pub fn command(&self, pointer: InstructionPointer) -> Option<&Command> {
        self.function(pointer.function)?.command(pointer.command)
    }

    /// Store a command into a slot.
    ///
    /// Calls are checked against this program's function count.
    pub fn set_command(
        &mut self,
        pointer: InstructionPointer,
        command: Option<Command>,
    ) -> Result<()> {
        if let Some(target) = command.and_then(|c| c.action.call_target()) {
            self.check_call_target(target)?;
        }
        let count = self.functions.len();
        self.functions
            .get_mut(pointer.function)
            .ok_or(SpecError::FunctionOutOfRange { index: pointer.function, count })?
            .set(pointer.command, command)
    }

    /// Replace every slot of a function.
    ///
    /// The capacity of the replacement must match the existing one.
    pub fn replace_function(&mut self, index: usize, function: Function) -> Result<()> {
        let count = self.functions.len();
        let existing = self
            .functions
            .get(index)
            .ok_or(SpecError::FunctionOutOfRange { index, count })?;
        if existing.len() != function.len() {
            return Err(SpecError::InvalidCommandCount(function.len()));
        }
        for target in function.call_targets() {
            self.check_call_target(target)?;
        }
        self.functions[index] = function;
        Ok(())
    }

    fn check_call_target(&self, target: usize) -> Result<()> {
        if target >= self.functions.len() {
            return Err(SpecError::CallTargetOutOfRange {
                target,
                count: self.functions.len(),
            });
        }
        Ok(())
    }

    /// Check shape limits and that every call targets an existing function
    pub fn validate(&self) -> Result<()> {
        Self::check_function_count(self.functions.len())?;
        for function in &self.functions {
            function.check_capacity()?;
            for target in function.call_targets() {
                self.check_call_target(target)?;
            }
        }
        Ok(())
    }

    /// Same layout, every slot empty
    pub fn cleared(&self) -> Self {
        Self {
            functions: self.functions.iter().map(Function::cleared).collect(),
        }
    }
}
