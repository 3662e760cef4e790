pub mod common;
pub mod pi;
pub mod vi;

use crate::config::DpConfig;
use gridworld::{Action, Policy, Position, Transition};
use pi::PolicyIteration;
use rand::Rng;
use std::collections::HashMap;
use vi::ValueIteration;

pub type ValueTable = HashMap<Position, f64>;

/// Markov Decision Process - Sutton & Barto 2018.
///
/// Deterministic, fully known model: the solvers query it exhaustively and never drive an episode.
pub trait Mdp {
    /// All states, in a fixed order.
    fn states(&self) -> Vec<Position>;

    fn is_terminal(&self, s: &Position) -> bool;

    fn transition(&self, s: &Position, a: Action) -> Transition;
}

pub trait MdpSolver<T> {
    fn v_star(&self, s: &Position) -> f64;

    fn q_star(&self, s: &Position, a: Action) -> Option<f64>;

    fn pi_star(&self, s: &Position) -> Option<Action>;

    fn exec(&mut self, theta: f64, num_iterations: Option<usize>) -> (T, usize);
}

/// What a dynamic programming run hands back to the caller.
#[derive(Clone, Debug, PartialEq)]
pub struct DpSolution {
    pub values: ValueTable,
    pub policy: Policy,
    pub iterations: usize,
    /// `false` when an iteration cap stopped the run first. Not an error.
    pub converged: bool,
}

pub fn value_iteration(mdp: &dyn Mdp, config: &DpConfig) -> DpSolution {
    let mut vi = ValueIteration::new(mdp, config.gamma);
    let (converged, iterations) = vi.exec(config.theta, Some(config.max_iters));

    DpSolution {
        values: vi.values().clone(),
        policy: vi.policy().clone(),
        iterations,
        converged,
    }
}

pub fn policy_iteration<R: Rng>(
    mdp: &dyn Mdp,
    config: &DpConfig,
    rng: &mut R,
) -> DpSolution {
    let mut pi = PolicyIteration::new(mdp, config.gamma, config.max_iters, rng);
    let (stable, iterations) = pi.exec(config.theta, Some(config.max_outer_iters));

    DpSolution {
        values: pi.values().clone(),
        policy: pi.policy().clone(),
        iterations,
        converged: stable,
    }
}
