use super::super::decay_epsilon;
use crate::algos::model_free::*;
use crate::config::LearnerConfig;
use gridworld::{Action, Position};
use rand::Rng;
use tracing::{debug, info};

/// Tabular Q-learning: one-step off-policy TD control.
/// Ref: Sutton & Barto 2018, section 6.5.
#[derive(Clone, Debug, Default)]
pub struct QLearning {
    pub config: LearnerConfig,
}

impl QLearning {
    pub fn new(config: LearnerConfig) -> Self {
        Self { config }
    }
}

/// `Q(s,a) += alpha * (r + gamma * max_a' Q(s',a') - Q(s,a))`, on every transition.
/// Goal rows are never updated, so reaching the goal bootstraps from zero. A step cut off by
/// the budget still bootstraps from the state it landed on.
pub fn update(
    q: &mut QTable,
    s: Position,
    a: Action,
    r: f64,
    next: Position,
    alpha: f64,
    gamma: f64,
) {
    let target = r + gamma * max_value(q.row(next));

    let v = &mut q.row(s)[a.index()];
    *v += alpha * (target - *v);
}

impl Learner for QLearning {
    fn train<E: MdpSimulator, R: Rng>(&self, env: &mut E, rng: &mut R) -> Learned {
        let c = &self.config;
        let mut q = QTable::new();
        let mut episodes = Vec::with_capacity(c.num_episodes);
        let mut epsilon = c.epsilon;

        for ep in 0..c.num_episodes {
            let mut s = env.reset(None);
            q.row(s);

            let mut stats = EpisodeStats {
                reward: 0.,
                steps: 0,
            };
            loop {
                let a = epsilon_greedy(&mut q, s, epsilon, rng);
                let si = env.step(a);
                update(&mut q, s, a, si.reward, si.observation, c.alpha, c.gamma);

                stats.reward += si.reward;
                stats.steps += 1;
                s = si.observation;
                if si.done() {
                    break;
                }
            }

            episodes.push(stats);
            epsilon = decay_epsilon(epsilon, c);
            if (ep + 1) % 100 == 0 {
                debug!(
                    episode = ep + 1,
                    reward = stats.reward,
                    steps = stats.steps,
                    epsilon,
                    "q-learning progress"
                );
            }
        }

        info!(episodes = episodes.len(), states = q.len(), "q-learning finished");
        Learned { q, episodes }
    }
}
