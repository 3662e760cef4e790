use super::common::{greedy, q_value};
use super::{Mdp, MdpSolver, ValueTable};
use gridworld::{Action, Policy, Position, ACTIONS};
use rand::Rng;
use tracing::{debug, info};

pub const DEFAULT_MAX_OUTER_ITERS: usize = 100;

/// Policy iteration, starting from a uniformly random deterministic policy.
/// Ref: Sutton & Barto 2018, section 4.3.
#[derive(Clone)]
pub struct PolicyIteration<'a> {
    mdp: &'a dyn Mdp,
    gamma: f64,
    eval_max_iters: usize,
    states: Vec<Position>,
    v: ValueTable,
    pi: Policy,
}

impl<'a> PolicyIteration<'a> {
    /// `eval_max_iters` caps the sweeps of each policy evaluation.
    pub fn new<R: Rng>(
        mdp: &'a dyn Mdp,
        gamma: f64,
        eval_max_iters: usize,
        rng: &mut R,
    ) -> Self {
        let states = mdp.states();
        let pi = states
            .iter()
            .map(|s| {
                if mdp.is_terminal(s) {
                    (*s, None)
                } else {
                    (*s, Some(ACTIONS[rng.gen_range(0..ACTIONS.len())]))
                }
            })
            .collect();
        let v = states.iter().map(|s| (*s, 0.)).collect();

        Self {
            mdp,
            gamma,
            eval_max_iters,
            states,
            v,
            pi,
        }
    }

    pub fn values(&self) -> &ValueTable {
        &self.v
    }

    pub fn policy(&self) -> &Policy {
        &self.pi
    }

    /// Iterative evaluation of the current policy from zero values. Returns the sweeps run.
    pub fn evaluate(&mut self, theta: f64) -> usize {
        self.v = self.states.iter().map(|s| (*s, 0.)).collect();

        let mut sweeps = 0;
        while sweeps < self.eval_max_iters {
            let mut delta: f64 = 0.;
            for s in &self.states {
                let Some(a) = self.pi.action(s) else {
                    continue;
                };
                if self.mdp.is_terminal(s) {
                    continue;
                }

                let old = self.v.get(s).copied().unwrap_or(0.);
                let new = q_value(self.mdp, &self.v, s, a, self.gamma);
                self.v.insert(*s, new);
                delta = delta.max((old - new).abs());
            }

            sweeps += 1;
            if delta < theta {
                break;
            }
        }

        sweeps
    }

    /// Greedy improvement against the current values. Returns `true` when no action changed.
    pub fn improve(&mut self) -> bool {
        let mut stable = true;
        for s in &self.states {
            if self.mdp.is_terminal(s) {
                continue;
            }

            let (best, _) = greedy(self.mdp, &self.v, s, self.gamma);
            if self.pi.insert(*s, Some(best)) != Some(Some(best)) {
                stable = false;
            }
        }

        stable
    }
}

impl<'a> MdpSolver<bool> for PolicyIteration<'a> {
    fn v_star(&self, s: &Position) -> f64 {
        self.v.get(s).copied().unwrap_or(0.)
    }

    fn q_star(&self, s: &Position, a: Action) -> Option<f64> {
        if self.mdp.is_terminal(s) {
            return None;
        }

        Some(q_value(self.mdp, &self.v, s, a, self.gamma))
    }

    fn pi_star(&self, s: &Position) -> Option<Action> {
        self.pi.action(s)
    }

    /// Returns whether the policy became stable and the number of evaluate/improve rounds.
    fn exec(&mut self, theta: f64, num_iterations: Option<usize>) -> (bool, usize) {
        let max_iters = num_iterations.unwrap_or(DEFAULT_MAX_OUTER_ITERS);

        let mut stable = false;
        let mut it = 0;
        while it < max_iters {
            let sweeps = self.evaluate(theta);
            stable = self.improve();
            it += 1;
            debug!(round = it, sweeps, stable, "policy iteration round");

            if stable {
                break;
            }
        }

        info!(rounds = it, stable, "policy iteration finished");
        (stable, it)
    }
}
