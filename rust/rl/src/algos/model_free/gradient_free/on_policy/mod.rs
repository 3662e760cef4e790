pub mod sarsa;
