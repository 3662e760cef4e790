use crate::action::Action;
use crate::grid::Position;
use std::collections::hash_map;
use std::collections::HashMap;

/// Deterministic tabular policy.
///
/// A state mapped to `None` has no action to take (terminal). A state absent from the table is
/// a gap: the producer never saw it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Policy {
    actions: HashMap<Position, Option<Action>>,
}

impl Policy {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn insert(&mut self, s: Position, a: Option<Action>) -> Option<Option<Action>> {
        self.actions.insert(s, a)
    }

    /// `None` for a gap, `Some(None)` for a state with no action.
    pub fn get(&self, s: &Position) -> Option<Option<Action>> {
        self.actions.get(s).copied()
    }

    pub fn action(&self, s: &Position) -> Option<Action> {
        self.get(s).flatten()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, Position, Option<Action>> {
        self.actions.iter()
    }
}

impl FromIterator<(Position, Option<Action>)> for Policy {
    fn from_iter<I: IntoIterator<Item = (Position, Option<Action>)>>(iter: I) -> Self {
        Self {
            actions: iter.into_iter().collect(),
        }
    }
}
