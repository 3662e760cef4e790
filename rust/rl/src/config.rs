use gridworld::{EnvConfig, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Value iteration and policy iteration settings.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DpConfig {
    pub gamma: f64,
    /// Absolute value-change tolerance.
    pub theta: f64,
    /// Sweep cap: the whole run for value iteration, each evaluation for policy iteration.
    pub max_iters: usize,
    pub max_outer_iters: usize,
}

impl Default for DpConfig {
    fn default() -> Self {
        Self {
            gamma: 0.9,
            theta: 1e-4,
            max_iters: 10_000,
            max_outer_iters: 100,
        }
    }
}

/// Q-learning and SARSA settings.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LearnerConfig {
    pub num_episodes: usize,
    pub alpha: f64,
    pub gamma: f64,
    pub epsilon: f64,
    pub epsilon_decay: f64,
    pub min_epsilon: f64,
}

impl Default for LearnerConfig {
    fn default() -> Self {
        Self {
            num_episodes: 2000,
            alpha: 0.1,
            gamma: 0.9,
            epsilon: 1.0,
            epsilon_decay: 0.999,
            min_epsilon: 0.05,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    pub env: EnvConfig,
    pub dp: DpConfig,
    pub learner: LearnerConfig,
}

impl ExperimentConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json(&fs::read_to_string(path)?)
    }
}
