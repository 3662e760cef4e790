extern crate rand;
extern crate serde;
extern crate serde_json;

pub mod action;
pub mod config;
pub mod env;
pub mod error;
pub mod grid;
pub mod io;
pub mod maps;
pub mod policy;
pub mod render;

pub use action::{Action, ACTIONS};
pub use config::{EnvConfig, RewardConfig};
pub use env::{GridEnvironment, StepInfo, Transition};
pub use error::{GridError, Result};
pub use grid::{Cell, Grid, Position};
pub use policy::Policy;
