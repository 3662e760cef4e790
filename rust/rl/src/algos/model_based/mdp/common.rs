use super::{Mdp, ValueTable};
use gridworld::{Action, Policy, Position, ACTIONS};

/// One-step lookahead: `r + gamma * V(s')`, unknown states valued at zero.
pub fn q_value(mdp: &dyn Mdp, v: &ValueTable, s: &Position, a: Action, gamma: f64) -> f64 {
    let t = mdp.transition(s, a);
    t.reward + gamma * v.get(&t.next_state).copied().unwrap_or(0.)
}

/// Best action by lookahead. The first action in `ACTIONS` wins ties.
pub fn greedy(mdp: &dyn Mdp, v: &ValueTable, s: &Position, gamma: f64) -> (Action, f64) {
    let mut best = (ACTIONS[0], f64::NEG_INFINITY);
    for a in ACTIONS {
        let q = q_value(mdp, v, s, a, gamma);
        if q > best.1 {
            best = (a, q);
        }
    }

    best
}

/// Greedy policy over `states`; terminal states get no action.
pub fn extract_policy(mdp: &dyn Mdp, states: &[Position], v: &ValueTable, gamma: f64) -> Policy {
    states
        .iter()
        .map(|s| {
            if mdp.is_terminal(s) {
                (*s, None)
            } else {
                (*s, Some(greedy(mdp, v, s, gamma).0))
            }
        })
        .collect()
}
