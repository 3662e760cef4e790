pub mod off_policy;
pub mod on_policy;

use crate::config::LearnerConfig;

/// Multiplicative decay after each episode, floored at `min_epsilon`.
pub(crate) fn decay_epsilon(epsilon: f64, config: &LearnerConfig) -> f64 {
    config.min_epsilon.max(epsilon * config.epsilon_decay)
}
