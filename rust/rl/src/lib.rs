extern crate gridworld;
extern crate rand;
extern crate serde;
extern crate serde_json;

pub mod algos;
pub mod config;
pub mod diagnostics;
pub mod environments;
pub mod eval;

pub use algos::model_based::mdp::{
    policy_iteration, value_iteration, DpSolution, Mdp, MdpSolver, ValueTable,
};
pub use algos::model_free::gradient_free::{
    off_policy::q_learning::QLearning, on_policy::sarsa::Sarsa,
};
pub use algos::model_free::{EpisodeStats, Learned, Learner, MdpSimulator, QTable};
pub use config::{DpConfig, ExperimentConfig, LearnerConfig};
pub use eval::{evaluate, trace_path, Evaluation, PathTrace};
