use crate::action::Action;
use crate::config::{EnvConfig, RewardConfig};
use crate::error::{GridError, Result};
use crate::grid::{Cell, Grid, Position};
use itertools::iproduct;
use rand::prelude::*;
use tracing::debug;

/// Result of the pure transition oracle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub next_state: Position,
    pub reward: f64,
    pub done: bool,
}

/// Result of a live `step`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepInfo {
    pub observation: Position,
    pub reward: f64,
    /// Goal reached.
    pub terminated: bool,
    /// Step budget exhausted.
    pub truncated: bool,
}

impl StepInfo {
    pub fn done(&self) -> bool {
        self.terminated || self.truncated
    }
}

/// Deterministic grid world with an episodic interface.
///
/// The map and reward model are fixed at construction. `reset` and `step` only touch the
/// episode fields (position, step counter, termination flags), so `transition` can be
/// queried at any time without disturbing a live episode.
#[derive(Debug)]
pub struct GridEnvironment {
    grid: Grid,
    rewards: RewardConfig,
    max_steps: usize,
    starts: Vec<Position>,
    goals: Vec<Position>,
    rng: StdRng,
    pos: Position,
    steps: usize,
    terminated: bool,
    truncated: bool,
}

impl GridEnvironment {
    pub fn new(
        grid: Grid,
        rewards: RewardConfig,
        max_steps: usize,
        seed: Option<u64>,
    ) -> Result<Self> {
        let starts = grid.positions_of(Cell::Start);
        let goals = grid.positions_of(Cell::Goal);
        let Some(&first) = starts.first() else {
            return Err(GridError::Configuration(
                "map must contain at least one start cell (code 2)".to_string(),
            ));
        };
        if goals.is_empty() {
            return Err(GridError::Configuration(
                "map must contain at least one goal cell (code 3)".to_string(),
            ));
        }

        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut env = Self {
            grid,
            rewards,
            max_steps,
            starts,
            goals,
            rng,
            pos: first,
            steps: 0,
            terminated: false,
            truncated: false,
        };
        env.reset(None);

        Ok(env)
    }

    pub fn from_config(grid: Grid, config: &EnvConfig) -> Result<Self> {
        Self::new(grid, config.rewards, config.max_steps, config.seed)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rewards(&self) -> &RewardConfig {
        &self.rewards
    }

    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    pub fn starts(&self) -> &[Position] {
        &self.starts
    }

    pub fn goals(&self) -> &[Position] {
        &self.goals
    }

    pub fn position(&self) -> Position {
        self.pos
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn is_done(&self) -> bool {
        self.terminated || self.truncated
    }

    /// Start a new episode. Without an override the start cell is drawn uniformly from the map's
    /// start cells. An override is used verbatim.
    pub fn reset(&mut self, start: Option<Position>) -> Position {
        self.pos = match start {
            Some(s) => s,
            None => *self.starts.choose(&mut self.rng).unwrap_or(&self.starts[0]),
        };
        self.steps = 0;
        self.terminated = false;
        self.truncated = false;
        debug!(start = %self.pos, "episode reset");

        self.pos
    }

    /// Advance the live episode. A no-op returning zero reward once the episode is over.
    pub fn step(&mut self, action: Action) -> StepInfo {
        if self.is_done() {
            return StepInfo {
                observation: self.pos,
                reward: 0.,
                terminated: self.terminated,
                truncated: self.truncated,
            };
        }

        let t = self.transition(&self.pos, action);
        self.steps += 1;
        self.pos = t.next_state;
        self.terminated = t.done;
        self.truncated = !t.done && self.steps >= self.max_steps;

        StepInfo {
            observation: self.pos,
            reward: t.reward,
            terminated: self.terminated,
            truncated: self.truncated,
        }
    }

    /// The model: what `action` from `state` would produce. Pure.
    pub fn transition(&self, state: &Position, action: Action) -> Transition {
        let (dr, dc) = action.delta();
        let (nr, nc) = (state.row as isize + dr, state.col as isize + dc);

        match self.grid.get(nr, nc) {
            None | Some(Cell::Wall) => Transition {
                next_state: *state,
                reward: self.rewards.wall_reward,
                done: false,
            },
            Some(Cell::Goal) => Transition {
                next_state: Position::new(nr as usize, nc as usize),
                reward: self.rewards.goal_reward,
                done: true,
            },
            Some(_) => Transition {
                next_state: Position::new(nr as usize, nc as usize),
                reward: self.rewards.step_reward,
                done: false,
            },
        }
    }

    /// Every non-wall coordinate, row-major.
    pub fn enumerate_states(&self) -> Vec<Position> {
        iproduct!(0..self.grid.rows(), 0..self.grid.cols())
            .map(Position::from)
            .filter(|&p| self.grid.cell(p) != Cell::Wall)
            .collect()
    }

    pub fn is_terminal(&self, state: &Position) -> bool {
        self.grid.get(state.row as isize, state.col as isize) == Some(Cell::Goal)
    }

    pub fn is_wall(&self, row: isize, col: isize) -> bool {
        self.grid.get(row, col) == Some(Cell::Wall)
    }

    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        self.grid.in_bounds(row, col)
    }
}
