use super::super::decay_epsilon;
use crate::algos::model_free::*;
use crate::config::LearnerConfig;
use gridworld::{Action, Position};
use rand::Rng;
use tracing::{debug, info};

/// Tabular SARSA: one-step on-policy TD control.
/// Ref: Sutton & Barto 2018, section 6.4.
#[derive(Clone, Debug, Default)]
pub struct Sarsa {
    pub config: LearnerConfig,
}

impl Sarsa {
    pub fn new(config: LearnerConfig) -> Self {
        Self { config }
    }
}

/// `Q(s,a) += alpha * (r + gamma * Q(s',a') - Q(s,a))` with `a'` the action actually taken next.
/// Without a next action (episode over) the target is `r`.
#[allow(clippy::too_many_arguments)]
pub fn update(
    q: &mut QTable,
    s: Position,
    a: Action,
    r: f64,
    next: Position,
    next_action: Option<Action>,
    alpha: f64,
    gamma: f64,
) {
    let target = match next_action {
        Some(na) => r + gamma * q.row(next)[na.index()],
        None => r,
    };

    let v = &mut q.row(s)[a.index()];
    *v += alpha * (target - *v);
}

impl Learner for Sarsa {
    fn train<E: MdpSimulator, R: Rng>(&self, env: &mut E, rng: &mut R) -> Learned {
        let c = &self.config;
        let mut q = QTable::new();
        let mut episodes = Vec::with_capacity(c.num_episodes);
        let mut epsilon = c.epsilon;

        for ep in 0..c.num_episodes {
            let mut s = env.reset(None);
            let mut a = epsilon_greedy(&mut q, s, epsilon, rng);

            let mut stats = EpisodeStats {
                reward: 0.,
                steps: 0,
            };
            loop {
                let si = env.step(a);
                q.row(si.observation);
                let next_action = if si.done() {
                    None
                } else {
                    Some(epsilon_greedy(&mut q, si.observation, epsilon, rng))
                };
                update(
                    &mut q,
                    s,
                    a,
                    si.reward,
                    si.observation,
                    next_action,
                    c.alpha,
                    c.gamma,
                );

                stats.reward += si.reward;
                stats.steps += 1;
                match next_action {
                    Some(na) => {
                        s = si.observation;
                        a = na;
                    }
                    None => break,
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
                    "sarsa progress"
                );
            }
        }

        info!(episodes = episodes.len(), states = q.len(), "sarsa finished");
        Learned { q, episodes }
    }
}
