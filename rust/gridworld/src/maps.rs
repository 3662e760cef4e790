use crate::error::{GridError, Result};
use crate::grid::{Cell, Grid};
use ndarray::Array2;

const SAMPLE_WALLS: [(usize, usize); 7] = [(3, 3), (3, 4), (3, 5), (5, 8), (6, 8), (4, 10), (2, 10)];

/// A bordered demo map with a few interior walls, start at (1, 1) and goal at (rows-2, cols-2).
/// Interior walls that fall outside a small map are skipped.
pub fn sample_map(rows: usize, cols: usize) -> Result<Grid> {
    if rows < 3 || cols < 4 {
        return Err(GridError::Configuration(format!(
            "sample map needs at least 3x4 cells, got {rows}x{cols}"
        )));
    }

    let mut cells = Array2::from_elem((rows, cols), Cell::Free);
    cells.row_mut(0).fill(Cell::Wall);
    cells.row_mut(rows - 1).fill(Cell::Wall);
    cells.column_mut(0).fill(Cell::Wall);
    cells.column_mut(cols - 1).fill(Cell::Wall);
    for (r, c) in SAMPLE_WALLS.into_iter().filter(|&(r, c)| r < rows && c < cols) {
        cells[[r, c]] = Cell::Wall;
    }
    cells[[1, 1]] = Cell::Start;
    cells[[rows - 2, cols - 2]] = Cell::Goal;

    Grid::from_cells(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Position;

    #[test]
    fn default_sample_has_border_and_endpoints() {
        let g = sample_map(10, 14).unwrap();

        assert_eq!(g.positions_of(Cell::Start), vec![Position::new(1, 1)]);
        assert_eq!(g.positions_of(Cell::Goal), vec![Position::new(8, 12)]);
        assert_eq!(g.cell(Position::new(0, 5)), Cell::Wall);
        assert_eq!(g.cell(Position::new(9, 13)), Cell::Wall);
        assert_eq!(g.cell(Position::new(3, 4)), Cell::Wall);
        assert_eq!(g.cell(Position::new(2, 2)), Cell::Free);
    }

    #[test]
    fn tiny_sample_is_rejected() {
        assert!(sample_map(3, 3).is_err());
    }
}
