//! Program executor
//!
//! Runs a program one step at a time against a board. A step executes at
//! most one non-empty command; empty slots and implicit returns on the way
//! to it are passed through within the same step.

use crate::call_stack::{ProgramState, DEFAULT_MAX_STACK_DEPTH};
use crate::error::{Result, RuntimeError};
use crate::events::{ExecutionEvent, ExecutionObserver, NullObserver};
use robozzle_spec::{
    Action, Color, Function, InstructionPointer, MovementKind, Program, Puzzle, PuzzleState,
    SpecError, DEFAULT_ACTION_LIMIT,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Executor configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutorConfig {
    /// Robot moves (movements and paints) before the run is cut off
    pub max_moves: u32,

    /// Maximum number of call stack frames
    pub max_stack_depth: usize,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            max_moves: DEFAULT_ACTION_LIMIT,
            max_stack_depth: DEFAULT_MAX_STACK_DEPTH,
        }
    }
}

impl ExecutorConfig {
    pub fn with_max_moves(mut self, max_moves: u32) -> Self {
        self.max_moves = max_moves;
        self
    }

    pub fn with_max_stack_depth(mut self, max_stack_depth: usize) -> Self {
        self.max_stack_depth = max_stack_depth;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_moves == 0 {
            return Err(RuntimeError::InvalidConfig("max_moves must be positive".to_string()));
        }
        if self.max_stack_depth == 0 {
            return Err(RuntimeError::InvalidConfig(
                "max_stack_depth must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Why execution stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Termination {
    /// Every star was collected
    Victory,
    /// The robot left the board or stands on an uncolored cell
    Failure,
    /// The move limit was reached
    MoveLimit,
    /// A call exceeded the stack depth
    StackOverflow,
    /// The entry function returned
    Returned,
}

impl Termination {
    #[inline]
    pub fn is_victory(self) -> bool {
        self == Termination::Victory
    }
}

/// Execution result
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Non-empty commands executed, met or not
    pub steps: u32,

    /// Movements and paints performed
    pub moves: u32,

    /// Reason for stopping
    pub termination: Termination,

    /// Board after the last step
    pub final_state: PuzzleState,
}

/// Step executor over a borrowed program
#[derive(Debug, Clone)]
pub struct ProgramExecutor<'p> {
    program: &'p Program,
    puzzle_state: PuzzleState,
    program_state: ProgramState,
    config: ExecutorConfig,
    steps: u32,
    moves: u32,
}

impl<'p> ProgramExecutor<'p> {
    /// Create an executor with the default configuration
    pub fn new(program: &'p Program, initial_state: PuzzleState) -> Result<Self> {
        Self::with_config(program, initial_state, ExecutorConfig::default())
    }

    /// Create an executor; the program must pass [`Program::validate`]
    pub fn with_config(
        program: &'p Program,
        initial_state: PuzzleState,
        config: ExecutorConfig,
    ) -> Result<Self> {
        config.validate()?;
        program.validate()?;
        Ok(Self {
            program,
            puzzle_state: initial_state,
            program_state: ProgramState::with_max_depth(config.max_stack_depth),
            config,
            steps: 0,
            moves: 0,
        })
    }

    /// Executor starting from the puzzle's board, limited to its action limit
    pub fn for_puzzle(program: &'p Program, puzzle: &Puzzle) -> Result<Self> {
        let config = ExecutorConfig::default().with_max_moves(puzzle.action_limit);
        Self::with_config(program, puzzle.initial_state.clone(), config)
    }

    #[inline]
    pub fn program(&self) -> &'p Program {
        self.program
    }

    #[inline]
    pub fn puzzle_state(&self) -> &PuzzleState {
        &self.puzzle_state
    }

    #[inline]
    pub fn program_state(&self) -> &ProgramState {
        &self.program_state
    }

    #[inline]
    pub fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    #[inline]
    pub fn steps(&self) -> u32 {
        self.steps
    }

    #[inline]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    #[inline]
    pub fn current_instruction(&self) -> Option<InstructionPointer> {
        self.program_state.current_instruction()
    }

    /// True if every star has been collected
    pub fn is_victory(&self) -> bool {
        self.puzzle_state.is_victory()
    }

    pub fn is_terminated(&self) -> bool {
        self.termination().is_some()
    }

    /// First termination condition that holds, if any
    pub fn termination(&self) -> Option<Termination> {
        if self.puzzle_state.is_victory() {
            Some(Termination::Victory)
        } else if self.puzzle_state.is_fail() {
            Some(Termination::Failure)
        } else if self.moves >= self.config.max_moves {
            Some(Termination::MoveLimit)
        } else if self.program_state.is_overflowed() {
            Some(Termination::StackOverflow)
        } else if self.program_state.current_instruction().is_none() {
            Some(Termination::Returned)
        } else {
            None
        }
    }

    /// Execute one step, discarding notifications
    pub fn step(&mut self) -> Result<()> {
        self.step_with(&mut NullObserver)
    }

    /// Execute one step and collect its notifications
    pub fn step_events(&mut self) -> Result<Vec<ExecutionEvent>> {
        let mut events = Vec::new();
        self.step_with(&mut events)?;
        Ok(events)
    }

    /// Execute one step, reporting every change to `observer`.
    ///
    /// Only call while [`is_terminated`](Self::is_terminated) is false;
    /// stepping a failed board reports a precondition violation.
    pub fn step_with(&mut self, observer: &mut dyn ExecutionObserver) -> Result<()> {
        while let Some(ip) = self.program_state.current_instruction() {
            let function = self.function(ip.function)?;

            if ip.command >= function.len() {
                self.program_state.ret()?;
                observer.on_event(ExecutionEvent::ProgramStateChanged);
                continue;
            }

            let Some(command) = function.command(ip.command).copied() else {
                self.program_state.advance()?;
                observer.on_event(ExecutionEvent::ProgramStateChanged);
                continue;
            };

            trace!(pointer = %ip, command = %command, "execute");
            self.steps += 1;

            if command.is_met(&self.puzzle_state)? {
                self.perform(command.action, observer)?;
            } else {
                self.program_state.advance()?;
            }
            observer.on_event(ExecutionEvent::ProgramStateChanged);
            return Ok(());
        }
        Ok(())
    }

    /// Step until a termination condition holds
    pub fn run(&mut self) -> Result<Termination> {
        loop {
            if let Some(termination) = self.termination() {
                debug!(
                    ?termination,
                    steps = self.steps,
                    moves = self.moves,
                    "execution terminated"
                );
                return Ok(termination);
            }
            self.step()?;
        }
    }

    /// Run to termination and return the final counters and board
    pub fn finish(mut self) -> Result<ExecutionResult> {
        let termination = self.run()?;
        Ok(ExecutionResult {
            steps: self.steps,
            moves: self.moves,
            termination,
            final_state: self.puzzle_state,
        })
    }

    fn function(&self, index: usize) -> Result<&'p Function> {
        self.program.function(index).ok_or_else(|| {
            SpecError::FunctionOutOfRange {
                index,
                count: self.program.function_count(),
            }
            .into()
        })
    }

    fn perform(&mut self, action: Action, observer: &mut dyn ExecutionObserver) -> Result<()> {
        match action {
            Action::Movement(kind) => self.perform_movement(kind, observer)?,
            Action::Paint(color) => self.perform_paint(color, observer)?,
            Action::Call(target) => self.perform_call(target)?,
        }
        if action.is_move() {
            self.moves += 1;
        }
        Ok(())
    }

    fn perform_movement(
        &mut self,
        kind: MovementKind,
        observer: &mut dyn ExecutionObserver,
    ) -> Result<()> {
        let robot = &mut self.puzzle_state.robot;
        match kind {
            MovementKind::Move => robot.step_forward(),
            MovementKind::TurnLeft => robot.direction = robot.direction.turn_left(),
            MovementKind::TurnRight => robot.direction = robot.direction.turn_right(),
        }
        observer.on_event(ExecutionEvent::RobotMoved(kind));

        let (x, y) = (robot.x, robot.y);
        if self.puzzle_state.take_star(x, y) {
            observer.on_event(ExecutionEvent::CellChanged { x, y });
        }

        self.program_state.advance()?;
        Ok(())
    }

    fn perform_paint(&mut self, color: Color, observer: &mut dyn ExecutionObserver) -> Result<()> {
        // paint needs a colored cell under the robot
        self.puzzle_state.robot_color()?;
        let (x, y) = (self.puzzle_state.robot.x, self.puzzle_state.robot.y);
        if let Some(cell) = self.puzzle_state.cell_mut(x, y) {
            cell.color = Some(color);
        }
        observer.on_event(ExecutionEvent::CellChanged { x, y });

        self.program_state.advance()?;
        Ok(())
    }

    fn perform_call(&mut self, target: usize) -> Result<()> {
        // the caller resumes after the call
        self.program_state.advance()?;

        if self.function(target)?.is_empty() {
            debug!(target, "call to a function with no commands skipped");
            return Ok(());
        }
        self.program_state.call(target);
        Ok(())
    }
}
