pub mod gradient_free;

use gridworld::{Action, Policy, Position, Result, StepInfo, ACTIONS};
use itertools::Itertools;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Episodic interface the learners train against.
pub trait MdpSimulator {
    fn reset(&mut self, start: Option<Position>) -> Position;

    fn step(&mut self, a: Action) -> StepInfo;

    fn max_steps(&self) -> usize;
}

/// Drives one training run.
pub trait Learner {
    fn train<E: MdpSimulator, R: Rng>(&self, env: &mut E, rng: &mut R) -> Learned;
}

/// Sparse action-value table. Rows appear on first touch, zero-initialised.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QTable {
    rows: HashMap<Position, [f64; 4]>,
}

#[derive(Serialize, Deserialize)]
struct QEntry {
    state: Position,
    values: [f64; 4],
}

impl QTable {
    pub fn new() -> Self {
        Default::default()
    }

    /// Row for `s`, inserting the zero vector if `s` was never seen.
    pub fn row(&mut self, s: Position) -> &mut [f64; 4] {
        self.rows.entry(s).or_insert([0.; 4])
    }

    pub fn get(&self, s: &Position) -> Option<&[f64; 4]> {
        self.rows.get(s)
    }

    pub fn value(&self, s: &Position, a: Action) -> f64 {
        self.rows.get(s).map_or(0., |q| q[a.index()])
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Argmax action of every recorded state.
    pub fn greedy_policy(&self) -> Policy {
        self.rows
            .iter()
            .map(|(s, q)| (*s, Some(argmax(q))))
            .collect()
    }

    pub fn to_json(&self) -> Result<String> {
        let entries = self
            .rows
            .iter()
            .map(|(s, q)| QEntry {
                state: *s,
                values: *q,
            })
            .sorted_by_key(|e| e.state)
            .collect::<Vec<_>>();

        Ok(serde_json::to_string_pretty(&entries)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<QEntry> = serde_json::from_str(json)?;

        Ok(Self {
            rows: entries.into_iter().map(|e| (e.state, e.values)).collect(),
        })
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }

        Ok(fs::write(path, self.to_json()?)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json(&fs::read_to_string(path)?)
    }
}

/// First action holding the maximum value.
pub fn argmax(q: &[f64; 4]) -> Action {
    let mut best = 0;
    for i in 1..q.len() {
        if q[i] > q[best] {
            best = i;
        }
    }

    ACTIONS[best]
}

pub fn max_value(q: &[f64; 4]) -> f64 {
    q.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// Explore uniformly with probability `epsilon`, otherwise exploit. Registers `s` in the table.
pub fn epsilon_greedy<R: Rng>(q: &mut QTable, s: Position, epsilon: f64, rng: &mut R) -> Action {
    let row = q.row(s);
    if rng.gen::<f64>() < epsilon {
        ACTIONS[rng.gen_range(0..ACTIONS.len())]
    } else {
        argmax(row)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EpisodeStats {
    pub reward: f64,
    pub steps: usize,
}

/// A trained table plus the per-episode learning curve.
#[derive(Clone, Debug, PartialEq)]
pub struct Learned {
    pub q: QTable,
    pub episodes: Vec<EpisodeStats>,
}

impl Learned {
    pub fn policy(&self) -> Policy {
        self.q.greedy_policy()
    }

    pub fn rewards(&self) -> Vec<f64> {
        self.episodes.iter().map(|e| e.reward).collect()
    }

    pub fn steps(&self) -> Vec<usize> {
        self.episodes.iter().map(|e| e.steps).collect()
    }
}
