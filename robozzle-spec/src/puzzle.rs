//! # Puzzle definition
//!
//! The parts of a puzzle the engine reads: the function layout a program
//! must follow, the paint commands on offer, the starting board and the
//! action limit. Catalog fields (title, author, ...) are carried as inert
//! data.

use crate::color::{Color, PaintSet};
use crate::error::{Result, SpecError};
use crate::function::MAX_COMMANDS;
use crate::grid::PuzzleState;
use crate::program::{Program, MAX_FUNCTIONS};
use serde::{Deserialize, Serialize};

/// Default number of robot moves before a run is cut off
pub const DEFAULT_ACTION_LIMIT: u32 = 1000;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub about: String,
    /// Paint commands a program may use
    pub paints: PaintSet,
    /// Capacity of each program function
    function_lengths: Vec<usize>,
    /// Board at the start of every attempt
    pub initial_state: PuzzleState,
    /// Maximum robot moves per attempt
    pub action_limit: u32,
}

impl Puzzle {
    /// Create a puzzle with a validated function layout
    pub fn new(function_lengths: Vec<usize>, initial_state: PuzzleState) -> Result<Self> {
        Self::check_layout(&function_lengths)?;
        Ok(Self {
            id: 0,
            title: String::new(),
            author: String::new(),
            about: String::new(),
            paints: PaintSet::NONE,
            function_lengths,
            initial_state,
            action_limit: DEFAULT_ACTION_LIMIT,
        })
    }

    /// Set paint permissions
    pub fn with_paints(mut self, paints: PaintSet) -> Self {
        self.paints = paints;
        self
    }

    fn check_layout(function_lengths: &[usize]) -> Result<()> {
        if function_lengths.is_empty() || function_lengths.len() > MAX_FUNCTIONS {
            return Err(SpecError::InvalidFunctionCount(function_lengths.len()));
        }
        if let Some(&len) = function_lengths.iter().find(|&&len| len > MAX_COMMANDS) {
            return Err(SpecError::InvalidCommandCount(len));
        }
        Ok(())
    }

    pub fn function_lengths(&self) -> &[usize] {
        &self.function_lengths
    }

    /// Empty program with this puzzle's layout
    pub fn new_program(&self) -> Result<Program> {
        Program::new(&self.function_lengths)
    }

    /// Check if `color` can appear on the board during an attempt
    pub fn is_available(&self, color: Color) -> bool {
        self.paints.contains(color)
            || self.initial_state.cells().any(|cell| cell.color == Some(color))
    }

    /// Conditions worth offering: "any" first, then every available color
    pub fn available_conditions(&self) -> Vec<Option<Color>> {
        std::iter::once(None)
            .chain(Color::ALL.into_iter().filter(|c| self.is_available(*c)).map(Some))
            .collect()
    }
}
