extern crate float_eq;
extern crate gridrl;
extern crate gridworld;
mod common;

use common::*;
use float_eq::*;
use gridrl::diagnostics::moving_average;
use gridrl::*;
use gridworld::*;
use rand::prelude::*;
use rstest::*;
use tempfile::tempdir;

/// Greedy from the first step, no decay.
fn greedy_once() -> LearnerConfig {
    LearnerConfig {
        num_episodes: 1,
        alpha: 0.1,
        gamma: 0.9,
        epsilon: 0.,
        epsilon_decay: 1.,
        min_epsilon: 0.,
    }
}

fn train(learner: &str, env: &mut GridEnvironment, config: LearnerConfig, seed: u64) -> Learned {
    let rng = &mut StdRng::seed_from_u64(seed);
    match learner {
        "q_learning" => QLearning::new(config).train(env, rng),
        "sarsa" => Sarsa::new(config).train(env, rng),
        l => panic!("unknown learner {l}"),
    }
}

#[rstest]
#[case::q_learning("q_learning", 95., 2)]
#[case::sarsa("sarsa", 90., 3)]
fn goal_transition_has_no_bootstrap_term(
    #[case] learner: &str,
    #[case] reward: f64,
    #[case] steps: usize,
) {
    // Start above the goal. With all-zero rows argmax picks Up first and bumps the edge.
    let env = &mut make_env(Grid::new(&[vec![2], vec![3]]).unwrap(), 100, 1);

    let learned = train(learner, env, greedy_once(), 2718);
    let start = Position::new(0, 0);
    assert_float_eq!(
        learned.q.value(&start, Action::Down),
        0.1 * (100. - 0.),
        abs <= 1e-12
    );
    assert_eq!(learned.q.get(&Position::new(1, 0)), Some(&[0.; 4]));
    assert_float_eq!(learned.episodes[0].reward, reward, abs <= 1e-12);
    assert_eq!(learned.episodes[0].steps, steps);
}

#[test]
fn q_learning_bootstraps_through_step_budget_cutoff() {
    // Every episode is one step long. From (0, 0) the only way forward is cut off at (0, 1).
    let env = &mut make_env(Grid::new(&[vec![2, 2, 3]]).unwrap(), 1, 7);

    let learned = train("q_learning", env, LearnerConfig::default(), 42);
    let (first, second) = (Position::new(0, 0), Position::new(0, 1));
    let next_best = learned.q.value(&second, Action::Right);
    assert!(next_best > 90., "{next_best}");

    // Without the bootstrap term this would settle at the step reward, -1.
    assert!(learned.q.value(&first, Action::Right) > 50.);
    assert_eq!(learned.policy().action(&first), Some(Action::Right));
}

#[rstest]
#[case::q_learning("q_learning")]
#[case::sarsa("sarsa")]
fn learns_to_reach_goal_on_walled_5x5(#[case] learner: &str) {
    init_tracing();
    let env = &mut make_env(walled_5x5(), 500, 123);

    let learned = train(learner, env, LearnerConfig::default(), 42);
    assert_eq!(learned.episodes.len(), 2000);

    let e = evaluate(&learned.policy(), env, 10);
    assert_float_eq!(e.success_rate, 1., abs <= 1e-12);
    assert!(e.mean_steps.unwrap() < 20.);

    let curve = moving_average(&learned.rewards(), 100);
    assert!(curve.last().unwrap() > curve.first().unwrap());
}

#[rstest]
#[case::q_learning("q_learning")]
#[case::sarsa("sarsa")]
fn same_seeds_same_tables(#[case] learner: &str) {
    let config = LearnerConfig {
        num_episodes: 200,
        ..Default::default()
    };
    let run = || train(learner, &mut make_env(walled_5x5(), 500, 123), config, 42);

    assert_eq!(run(), run());
}

#[test]
fn learning_curve_is_recorded_per_episode() {
    let env = &mut make_env(walled_5x5(), 50, 123);
    let config = LearnerConfig {
        num_episodes: 30,
        ..Default::default()
    };

    let learned = train("q_learning", env, config, 42);
    assert_eq!(learned.rewards().len(), 30);
    assert!(learned.steps().iter().all(|&s| (1..=50).contains(&s)));
}

#[test]
fn q_table_persists_to_json_file() {
    let env = &mut make_env(walled_5x5(), 500, 123);
    let config = LearnerConfig {
        num_episodes: 50,
        ..Default::default()
    };
    let learned = train("sarsa", env, config, 42);

    let dir = tempdir().unwrap();
    let path = dir.path().join("q").join("sarsa.json");
    learned.q.save(&path).unwrap();
    let back = QTable::load(&path).unwrap();

    assert_eq!(back.len(), learned.q.len());
    for s in env.enumerate_states() {
        for a in ACTIONS {
            assert_float_eq!(back.value(&s, a), learned.q.value(&s, a), abs <= 1e-9);
        }
    }
}
