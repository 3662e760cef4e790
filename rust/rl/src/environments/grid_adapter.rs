use crate::algos::model_based::mdp::Mdp;
use crate::algos::model_free::MdpSimulator;
use gridworld::*;

impl Mdp for GridEnvironment {
    fn states(&self) -> Vec<Position> {
        self.enumerate_states()
    }

    fn is_terminal(&self, s: &Position) -> bool {
        GridEnvironment::is_terminal(self, s)
    }

    fn transition(&self, s: &Position, a: Action) -> Transition {
        GridEnvironment::transition(self, s, a)
    }
}

impl MdpSimulator for GridEnvironment {
    fn reset(&mut self, start: Option<Position>) -> Position {
        GridEnvironment::reset(self, start)
    }

    fn step(&mut self, a: Action) -> StepInfo {
        GridEnvironment::step(self, a)
    }

    fn max_steps(&self) -> usize {
        GridEnvironment::max_steps(self)
    }
}
