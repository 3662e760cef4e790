use super::common::{extract_policy, greedy, q_value};
use super::{Mdp, MdpSolver, ValueTable};
use gridworld::{Action, Policy, Position};
use tracing::{debug, info};

pub const DEFAULT_MAX_ITERS: usize = 10_000;

/// Value iteration with in-place (Gauss-Seidel) sweeps in state order.
/// Ref: Sutton & Barto 2018, section 4.4.
#[derive(Clone)]
pub struct ValueIteration<'a> {
    mdp: &'a dyn Mdp,
    gamma: f64,
    states: Vec<Position>,
    v: ValueTable,
    pi: Policy,
    deltas: Vec<f64>,
}

impl<'a> ValueIteration<'a> {
    pub fn new(mdp: &'a dyn Mdp, gamma: f64) -> Self {
        let states = mdp.states();
        let v = states.iter().map(|s| (*s, 0.)).collect();

        Self {
            mdp,
            gamma,
            states,
            v,
            pi: Policy::new(),
            deltas: vec![],
        }
    }

    pub fn values(&self) -> &ValueTable {
        &self.v
    }

    pub fn policy(&self) -> &Policy {
        &self.pi
    }

    /// Largest value change of each sweep of the last `exec`.
    pub fn deltas(&self) -> &[f64] {
        &self.deltas
    }

    fn sweep(&mut self) -> f64 {
        let mut delta: f64 = 0.;
        for s in &self.states {
            if self.mdp.is_terminal(s) {
                continue;
            }

            let old = self.v.get(s).copied().unwrap_or(0.);
            let (_, new) = greedy(self.mdp, &self.v, s, self.gamma);
            self.v.insert(*s, new);
            delta = delta.max((old - new).abs());
        }

        delta
    }
}

impl<'a> MdpSolver<bool> for ValueIteration<'a> {
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

    /// Returns whether `delta < theta` was reached and the number of sweeps run.
    fn exec(&mut self, theta: f64, num_iterations: Option<usize>) -> (bool, usize) {
        let max_iters = num_iterations.unwrap_or(DEFAULT_MAX_ITERS);
        self.deltas.clear();

        let mut converged = false;
        while self.deltas.len() < max_iters {
            let delta = self.sweep();
            self.deltas.push(delta);
            debug!(sweep = self.deltas.len(), delta, "value iteration sweep");

            if delta < theta {
                converged = true;
                break;
            }
        }

        self.pi = extract_policy(self.mdp, &self.states, &self.v, self.gamma);
        info!(
            sweeps = self.deltas.len(),
            converged, "value iteration finished"
        );

        (converged, self.deltas.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::*;
    use gridworld::{Grid, GridEnvironment, RewardConfig};

    fn corridor() -> GridEnvironment {
        let grid = Grid::new(&[vec![2, 0, 0, 3]]).unwrap();
        GridEnvironment::new(grid, RewardConfig::default(), 100, Some(1)).unwrap()
    }

    #[test]
    fn corridor_values_are_discounted_path_returns() {
        let env = corridor();
        let mut vi = ValueIteration::new(&env, 0.9);

        let (converged, sweeps) = vi.exec(1e-4, None);
        assert!(converged);
        assert!(sweeps < 10);

        assert_float_eq!(vi.v_star(&Position::new(0, 2)), 100., abs <= 1e-9);
        assert_float_eq!(vi.v_star(&Position::new(0, 1)), 89., abs <= 1e-9);
        assert_float_eq!(vi.v_star(&Position::new(0, 0)), 79.1, abs <= 1e-9);
        assert_float_eq!(vi.v_star(&Position::new(0, 3)), 0., abs <= 1e-12);

        assert_eq!(vi.pi_star(&Position::new(0, 0)), Some(Action::Right));
        assert_eq!(vi.pi_star(&Position::new(0, 3)), None);
    }

    #[test]
    fn q_star_is_lookahead_on_converged_values() {
        let env = corridor();
        let mut vi = ValueIteration::new(&env, 0.9);
        vi.exec(1e-8, None);

        let q = vi.q_star(&Position::new(0, 0), Action::Left).unwrap();
        assert_float_eq!(q, -5. + 0.9 * 79.1, abs <= 1e-6);
        assert_eq!(vi.q_star(&Position::new(0, 3), Action::Left), None);
    }

    #[test]
    fn iteration_cap_returns_best_effort() {
        let env = corridor();
        let mut vi = ValueIteration::new(&env, 0.9);

        let (converged, sweeps) = vi.exec(1e-4, Some(1));
        assert!(!converged);
        assert_eq!(sweeps, 1);
        assert_eq!(vi.policy().len(), 4);
    }
}
