use crate::error::{GridError, Result};
use itertools::iproduct;
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cell codes shared by every map in the system: `0=free, 1=wall, 2=start, 3=goal`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Free = 0,
    Wall = 1,
    Start = 2,
    Goal = 3,
}

impl Cell {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Cell {
    type Error = GridError;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Cell::Free),
            1 => Ok(Cell::Wall),
            2 => Ok(Cell::Start),
            3 => Ok(Cell::Goal),
            c => Err(GridError::Configuration(format!("unknown cell code {c}"))),
        }
    }
}

/// A state of the grid world is the agent's coordinate.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Immutable rectangular map. Construction guarantees at least one start and one goal cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    pub fn new(rows: &[Vec<u8>]) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map(Vec::len).unwrap_or(0);
        if n_rows == 0 || n_cols == 0 {
            return Err(GridError::Configuration("grid is empty".to_string()));
        }

        if let Some(r) = rows.iter().position(|row| row.len() != n_cols) {
            return Err(GridError::Configuration(format!(
                "grid is not rectangular: row {r} has {} cells, expected {n_cols}",
                rows[r].len()
            )));
        }

        let cells = rows
            .iter()
            .flatten()
            .map(|&code| Cell::try_from(code))
            .collect::<Result<Vec<_>>>()?;
        let cells = Array2::from_shape_vec((n_rows, n_cols), cells)
            .map_err(|e| GridError::Configuration(e.to_string()))?;

        Self::from_cells(cells)
    }

    pub fn from_cells(cells: Array2<Cell>) -> Result<Self> {
        let grid = Self { cells };
        if grid.positions_of(Cell::Start).is_empty() {
            return Err(GridError::Configuration(
                "map must contain at least one start cell (code 2)".to_string(),
            ));
        }
        if grid.positions_of(Cell::Goal).is_empty() {
            return Err(GridError::Configuration(
                "map must contain at least one goal cell (code 3)".to_string(),
            ));
        }

        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    pub fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }

    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows() && (col as usize) < self.cols()
    }

    /// Cell at a signed coordinate, `None` when outside the map.
    pub fn get(&self, row: isize, col: isize) -> Option<Cell> {
        if self.in_bounds(row, col) {
            Some(self.cells[[row as usize, col as usize]])
        } else {
            None
        }
    }

    /// Cell at a position. Panics when the position lies outside the map.
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[[pos.row, pos.col]]
    }

    /// All coordinates holding `cell`, row-major.
    pub fn positions_of(&self, cell: Cell) -> Vec<Position> {
        iproduct!(0..self.rows(), 0..self.cols())
            .filter(|&(r, c)| self.cells[[r, c]] == cell)
            .map(Position::from)
            .collect()
    }

    pub fn to_codes(&self) -> Vec<Vec<u8>> {
        self.cells
            .rows()
            .into_iter()
            .map(|row| row.iter().map(|c| c.code()).collect())
            .collect()
    }
}
