//! # Puzzle board
//!
//! A fixed 16 x 12 grid of cells plus the robot pose. Everything here is a
//! plain value type: cloning a [`PuzzleState`] copies every cell and the
//! robot, so search branches never share mutable state.
//!
//! The robot may stand outside the grid. That is a failure state reported
//! by [`PuzzleState::is_fail`], not an error.

use crate::color::Color;
use crate::direction::Direction;
use crate::error::{Result, SpecError};
use serde::{Deserialize, Serialize};

/// Board width in cells
pub const WIDTH: usize = 16;

/// Board height in cells
pub const HEIGHT: usize = 12;

/// Single board cell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PuzzleCell {
    /// Cell color; uncolored cells cannot be stood on
    pub color: Option<Color>,
    /// True if the cell holds a star
    pub star: bool,
}

impl PuzzleCell {
    pub const fn colored(color: Color) -> Self {
        Self { color: Some(color), star: false }
    }

    pub const fn starred(color: Color) -> Self {
        Self { color: Some(color), star: true }
    }
}

/// Robot pose
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Robot {
    pub x: i32,
    pub y: i32,
    pub direction: Direction,
}

impl Robot {
    pub const fn new(x: i32, y: i32, direction: Direction) -> Self {
        Self { x, y, direction }
    }

    /// Advance one cell along the current heading
    #[inline]
    pub fn step_forward(&mut self) {
        let (dx, dy) = self.direction.delta();
        self.x += dx;
        self.y += dy;
    }
}

/// Board cells plus robot
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleState {
    /// Cells indexed `[x][y]`
    cells: [[PuzzleCell; HEIGHT]; WIDTH],
    pub robot: Robot,
}

impl PuzzleState {
    /// Board with every cell uncolored
    pub fn new(robot: Robot) -> Self {
        Self {
            cells: [[PuzzleCell::default(); HEIGHT]; WIDTH],
            robot,
        }
    }

    /// Board with every cell painted `color` and no stars
    pub fn filled(color: Color, robot: Robot) -> Self {
        Self {
            cells: [[PuzzleCell::colored(color); HEIGHT]; WIDTH],
            robot,
        }
    }

    #[inline]
    pub const fn width(&self) -> usize {
        WIDTH
    }

    #[inline]
    pub const fn height(&self) -> usize {
        HEIGHT
    }

    #[inline]
    fn index(x: i32, y: i32) -> Option<(usize, usize)> {
        let x = usize::try_from(x).ok().filter(|x| *x < WIDTH)?;
        let y = usize::try_from(y).ok().filter(|y| *y < HEIGHT)?;
        Some((x, y))
    }

    /// Cell at `(x, y)`, or `None` outside the board
    pub fn cell(&self, x: i32, y: i32) -> Option<&PuzzleCell> {
        let (x, y) = Self::index(x, y)?;
        Some(&self.cells[x][y])
    }

    pub fn cell_mut(&mut self, x: i32, y: i32) -> Option<&mut PuzzleCell> {
        let (x, y) = Self::index(x, y)?;
        Some(&mut self.cells[x][y])
    }

    /// Cell under the robot, or `None` when off the board
    pub fn robot_cell(&self) -> Option<&PuzzleCell> {
        self.cell(self.robot.x, self.robot.y)
    }

    /// Color under the robot.
    ///
    /// Fails if the robot is off the board or on an uncolored cell.
    pub fn robot_color(&self) -> Result<Color> {
        self.robot_cell()
            .and_then(|cell| cell.color)
            .ok_or(SpecError::RobotNotOnColoredCell {
                x: self.robot.x,
                y: self.robot.y,
            })
    }

    /// Set cell color and star. Coordinates outside the board are ignored.
    pub fn set_cell(&mut self, x: i32, y: i32, cell: PuzzleCell) {
        if let Some(target) = self.cell_mut(x, y) {
            *target = cell;
        }
    }

    /// Remove the star at `(x, y)`; returns whether one was there
    pub fn take_star(&mut self, x: i32, y: i32) -> bool {
        match self.cell_mut(x, y) {
            Some(cell) if cell.star => {
                cell.star = false;
                true
            }
            _ => false,
        }
    }

    /// All cells, column by column
    pub fn cells(&self) -> impl Iterator<Item = &PuzzleCell> {
        self.cells.iter().flatten()
    }

    /// Number of stars left on the board
    pub fn star_count(&self) -> usize {
        self.cells().filter(|cell| cell.star).count()
    }

    /// True if every star has been collected
    pub fn is_victory(&self) -> bool {
        self.cells().all(|cell| !cell.star)
    }

    /// True if the robot is off the board or on an uncolored cell
    pub fn is_fail(&self) -> bool {
        self.robot_cell().map_or(true, |cell| cell.color.is_none())
    }
}
