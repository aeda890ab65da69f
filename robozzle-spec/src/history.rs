//! # Program edit history
//!
//! Linear undo/redo over immutable program snapshots. Adding a version
//! after an undo discards every version past the cursor.

use crate::error::{Result, SpecError};
use crate::program::Program;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramHistory {
    versions: Vec<Program>,
    cursor: usize,
}

impl ProgramHistory {
    /// History holding a single version
    pub fn new(initial: Program) -> Self {
        Self {
            versions: vec![initial],
            cursor: 0,
        }
    }

    /// Program at the cursor
    pub fn current(&self) -> &Program {
        &self.versions[self.cursor]
    }

    /// Index of the version at the cursor
    pub fn current_version(&self) -> usize {
        self.cursor
    }

    /// Index of the newest stored version
    pub fn latest_version(&self) -> usize {
        self.versions.len() - 1
    }

    /// Record a new version, discarding any redo tail
    pub fn add(&mut self, version: Program) {
        self.versions.truncate(self.cursor + 1);
        self.versions.push(version);
        self.cursor += 1;
    }

    /// Step back one version
    pub fn undo(&mut self) -> Result<&Program> {
        if self.cursor == 0 {
            return Err(SpecError::NothingToUndo);
        }
        self.cursor -= 1;
        Ok(self.current())
    }

    /// Step forward one version after an undo
    pub fn redo(&mut self) -> Result<&Program> {
        if self.cursor == self.latest_version() {
            return Err(SpecError::NothingToRedo);
        }
        self.cursor += 1;
        Ok(self.current())
    }

    /// Versions from the first one up to the cursor
    pub fn iter(&self) -> impl Iterator<Item = &Program> {
        self.versions[..=self.cursor].iter()
    }

    /// Encode the whole history, redo tail included
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a history and re-check every stored program
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let history: Self = bincode::deserialize(bytes)?;
        if history.cursor >= history.versions.len() {
            return Err(SpecError::InvalidHistoryCursor {
                cursor: history.cursor,
                len: history.versions.len(),
            });
        }
        for version in &history.versions {
            version.validate()?;
        }
        Ok(history)
    }
}
