use crate::grid::{Cell, Grid, Position};
use crate::policy::Policy;
use ndarray::Array2;

/// Marks the agent in `agent_view`.
pub const AGENT_CODE: u8 = 4;

const HIGHLIGHT: &str = "\u{1b}[41m";
const RESET: &str = "\u{1b}[0m";

/// ANSI text frame, one line per grid row.
///
/// Walls render as `#`, goals as `G`. Other cells show the policy's arrow when it has one,
/// else `S` for starts and `.` for free cells. The agent's cell is highlighted.
pub fn render(grid: &Grid, policy: Option<&Policy>, agent: Option<Position>) -> String {
    let mut frame = String::new();
    for ((r, c), &cell) in grid.cells().indexed_iter() {
        let pos = Position::new(r, c);
        let glyph = match cell {
            Cell::Wall => '#',
            Cell::Goal => 'G',
            _ => match policy.and_then(|p| p.action(&pos)) {
                Some(a) => a.arrow(),
                None if cell == Cell::Start => 'S',
                None => '.',
            },
        };

        if agent == Some(pos) {
            frame.push_str(HIGHLIGHT);
            frame.push(glyph);
            frame.push_str(RESET);
        } else {
            frame.push(glyph);
        }

        if c + 1 == grid.cols() {
            frame.push('\n');
        }
    }

    frame
}

/// Full-map picture of a single state: the cell codes with the agent stamped as `AGENT_CODE`.
/// An agent outside the map leaves the picture unmarked.
pub fn agent_view(grid: &Grid, agent: Position) -> Array2<u8> {
    let mut view = grid.cells().mapv(Cell::code);
    if let Some(v) = view.get_mut([agent.row, agent.col]) {
        *v = AGENT_CODE;
    }

    view
}
