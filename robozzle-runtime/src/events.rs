//! Execution notifications
//!
//! The executor reports what it changed to an [`ExecutionObserver`] passed
//! into each step. Observers never influence execution.

use robozzle_spec::MovementKind;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExecutionEvent {
    /// The call stack or the current instruction changed
    ProgramStateChanged,
    /// The robot moved or turned
    RobotMoved(MovementKind),
    /// A cell lost its star or was repainted
    CellChanged { x: i32, y: i32 },
}

pub trait ExecutionObserver {
    fn on_event(&mut self, event: ExecutionEvent);
}

/// Records every event in order
impl ExecutionObserver for Vec<ExecutionEvent> {
    fn on_event(&mut self, event: ExecutionEvent) {
        self.push(event);
    }
}

/// Observer that drops every event
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl ExecutionObserver for NullObserver {
    #[inline]
    fn on_event(&mut self, _event: ExecutionEvent) {}
}
