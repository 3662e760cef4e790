use crate::error::{GridError, Result};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Action {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
}

/// Fixed enumeration order. Argmax ties resolve to the earliest entry.
pub const ACTIONS: [Action; 4] = [Action::Up, Action::Down, Action::Left, Action::Right];

/// (d_row, d_col) indexed by `Action::index`.
const DISPLACEMENTS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

impl Action {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn delta(self) -> (isize, isize) {
        DISPLACEMENTS[self.index()]
    }

    pub fn arrow(self) -> char {
        match self {
            Action::Up => '↑',
            Action::Down => '↓',
            Action::Left => '←',
            Action::Right => '→',
        }
    }
}

impl TryFrom<usize> for Action {
    type Error = GridError;

    fn try_from(i: usize) -> Result<Self> {
        ACTIONS.get(i).copied().ok_or(GridError::InvalidAction(i))
    }
}
