//! # Functions
//!
//! A function is a fixed-capacity row of command slots. The capacity is set
//! when the function is created and never changes; editing only fills or
//! clears slots.

use crate::command::Command;
use crate::error::{Result, SpecError};
use serde::{Deserialize, Serialize};

/// Maximum number of command slots in one function
pub const MAX_COMMANDS: usize = 10;

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Function {
    slots: Vec<Option<Command>>,
}

impl Function {
    /// Function with `capacity` empty slots
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity > MAX_COMMANDS {
            return Err(SpecError::InvalidCommandCount(capacity));
        }
        Ok(Self { slots: vec![None; capacity] })
    }

    /// Function whose capacity is the number of slots given
    pub fn from_slots(slots: Vec<Option<Command>>) -> Result<Self> {
        if slots.len() > MAX_COMMANDS {
            return Err(SpecError::InvalidCommandCount(slots.len()));
        }
        for command in slots.iter().flatten() {
            command.action.check_encodable()?;
        }
        Ok(Self { slots })
    }

    /// Number of slots (empty or not)
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True if every slot is empty. A function with slots can be empty.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Command at `index`; `None` for an empty slot or an index past the end
    #[inline]
    pub fn command(&self, index: usize) -> Option<&Command> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub fn slots(&self) -> &[Option<Command>] {
        &self.slots
    }

    /// Non-empty commands in slot order
    pub fn commands(&self) -> impl Iterator<Item = &Command> {
        self.slots.iter().flatten()
    }

    /// Number of non-empty slots
    pub fn command_count(&self) -> usize {
        self.commands().count()
    }

    /// Store a command into a slot, or clear it with `None`
    pub fn set(&mut self, index: usize, command: Option<Command>) -> Result<()> {
        if let Some(command) = command {
            command.action.check_encodable()?;
        }
        let len = self.slots.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(SpecError::CommandOutOfRange { index, len })?;
        *slot = command;
        Ok(())
    }

    /// Same capacity, every slot empty
    pub fn cleared(&self) -> Self {
        Self { slots: vec![None; self.slots.len()] }
    }

    pub(crate) fn check_capacity(&self) -> Result<()> {
        if self.slots.len() > MAX_COMMANDS {
            return Err(SpecError::InvalidCommandCount(self.slots.len()));
        }
        Ok(())
    }

    pub(crate) fn call_targets(&self) -> impl Iterator<Item = usize> + '_ {
        self.commands().filter_map(|c| c.action.call_target())
    }
}
