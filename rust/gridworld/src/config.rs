use serde::{Deserialize, Serialize};

/// Reward shaping. Collisions should cost more than ordinary moves: `wall < step < 0 < goal`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardConfig {
    pub step_reward: f64,
    pub wall_reward: f64,
    pub goal_reward: f64,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            step_reward: -1.,
            wall_reward: -5.,
            goal_reward: 100.,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvConfig {
    #[serde(flatten)]
    pub rewards: RewardConfig,
    pub max_steps: usize,
    pub seed: Option<u64>,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            rewards: Default::default(),
            max_steps: 500,
            seed: None,
        }
    }
}
