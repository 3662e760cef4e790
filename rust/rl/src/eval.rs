use crate::algos::model_based::mdp::Mdp;
use crate::algos::model_free::MdpSimulator;
use gridworld::{Policy, Position};
use serde::Serialize;
use tracing::{info, warn};

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Evaluation {
    /// Fraction of rollouts ending on a goal cell, in `[0, 1]`.
    pub success_rate: f64,
    /// Mean step count over successful rollouts; `None` without any success.
    pub mean_steps: Option<f64>,
    /// Rollouts abandoned on a state the policy has no action for.
    pub gaps: usize,
}

/// Roll `policy` out `episodes` times from fresh resets.
///
/// A rollout stops on termination, on a policy gap, or after exceeding the environment's
/// step budget. Gaps are counted and logged, never raised.
pub fn evaluate<E>(policy: &Policy, env: &mut E, episodes: usize) -> Evaluation
where
    E: Mdp + MdpSimulator,
{
    let mut successes = 0;
    let mut success_steps = 0;
    let mut gaps = 0;

    for ep in 0..episodes {
        let mut s = env.reset(None);
        let mut steps = 0;
        loop {
            let Some(a) = policy.action(&s) else {
                if !env.is_terminal(&s) {
                    warn!(episode = ep, state = %s, "policy has no action, abandoning rollout");
                    gaps += 1;
                }
                break;
            };

            let si = env.step(a);
            steps += 1;
            s = si.observation;
            if si.done() || steps > env.max_steps() {
                break;
            }
        }

        if env.is_terminal(&s) {
            successes += 1;
            success_steps += steps;
        }
    }

    let success_rate = if episodes == 0 {
        0.
    } else {
        successes as f64 / episodes as f64
    };
    let mean_steps = (successes > 0).then(|| success_steps as f64 / successes as f64);
    info!(episodes, success_rate, ?mean_steps, gaps, "policy evaluated");

    Evaluation {
        success_rate,
        mean_steps,
        gaps,
    }
}

/// The route `policy` takes from `start` under the model, without touching any episode.
#[derive(Clone, Debug, PartialEq)]
pub struct PathTrace {
    /// Visited states, `start` first.
    pub path: Vec<Position>,
    /// Moves that bumped into a wall or the map edge.
    pub collisions: usize,
    pub reached_goal: bool,
}

impl PathTrace {
    pub fn steps(&self) -> usize {
        self.path.len() - 1
    }
}

/// Follow `policy` through the model for at most `limit` moves.
pub fn trace_path(mdp: &dyn Mdp, policy: &Policy, start: Position, limit: usize) -> PathTrace {
    let mut path = vec![start];
    let mut collisions = 0;
    let mut s = start;

    while !mdp.is_terminal(&s) && path.len() <= limit {
        let Some(a) = policy.action(&s) else {
            break;
        };

        let t = mdp.transition(&s, a);
        if t.next_state == s {
            collisions += 1;
        }
        s = t.next_state;
        path.push(s);
    }

    PathTrace {
        path,
        collisions,
        reached_goal: mdp.is_terminal(&s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::*;
    use gridworld::{Action, Grid, GridEnvironment, RewardConfig};

    fn env(max_steps: usize) -> GridEnvironment {
        let grid = Grid::new(&[vec![2, 0, 3]]).unwrap();
        GridEnvironment::new(grid, RewardConfig::default(), max_steps, Some(1)).unwrap()
    }

    #[test]
    fn gap_aborts_rollout_without_failing_evaluation() {
        let env = &mut env(10);
        let policy = Policy::from_iter([(Position::new(0, 0), Some(Action::Right))]);

        let e = evaluate(&policy, env, 3);
        assert_float_eq!(e.success_rate, 0., abs <= 1e-12);
        assert_eq!(e.mean_steps, None);
        assert_eq!(e.gaps, 3);
    }

    #[test]
    fn looping_policy_is_cut_by_step_budget() {
        let env = &mut env(7);
        let policy = Policy::from_iter([
            (Position::new(0, 0), Some(Action::Left)),
            (Position::new(0, 1), Some(Action::Left)),
        ]);

        let e = evaluate(&policy, env, 2);
        assert_float_eq!(e.success_rate, 0., abs <= 1e-12);
        assert_eq!(e.gaps, 0);
        assert_eq!(env.steps(), 7);
    }

    #[test]
    fn zero_episodes() {
        let env = &mut env(10);

        let e = evaluate(&Policy::new(), env, 0);
        assert_float_eq!(e.success_rate, 0., abs <= 1e-12);
        assert_eq!(e.mean_steps, None);
    }

    #[test]
    fn trace_counts_collisions() {
        let env = env(10);
        let policy = Policy::from_iter([
            (Position::new(0, 0), Some(Action::Up)),
            (Position::new(0, 1), Some(Action::Right)),
        ]);

        let t = trace_path(&env, &policy, Position::new(0, 0), 5);
        assert_eq!(t.steps(), 5);
        assert_eq!(t.collisions, 5);
        assert!(!t.reached_goal);

        let t = trace_path(&env, &policy, Position::new(0, 1), 5);
        assert_eq!(t.path, vec![Position::new(0, 1), Position::new(0, 2)]);
        assert_eq!(t.collisions, 0);
        assert!(t.reached_goal);
    }
}
