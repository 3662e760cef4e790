use gridworld::*;

#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// 5x5, wall at (2, 2), start (0, 0), goal (4, 4).
#[allow(dead_code)]
pub fn walled_5x5() -> Grid {
    let mut rows = vec![vec![0u8; 5]; 5];
    rows[2][2] = 1;
    rows[0][0] = 2;
    rows[4][4] = 3;
    Grid::new(&rows).unwrap()
}

/// 3x3, wall at (1, 1), start (0, 0), goal (2, 2).
#[allow(dead_code)]
pub fn walled_3x3() -> Grid {
    Grid::new(&[vec![2, 0, 0], vec![0, 1, 0], vec![0, 0, 3]]).unwrap()
}

/// 3x3 without walls, start (0, 0), goal (2, 2).
#[allow(dead_code)]
pub fn open_3x3() -> Grid {
    Grid::new(&[vec![2, 0, 0], vec![0, 0, 0], vec![0, 0, 3]]).unwrap()
}

#[allow(dead_code)]
pub fn make_env(grid: Grid, max_steps: usize, seed: u64) -> GridEnvironment {
    GridEnvironment::new(grid, RewardConfig::default(), max_steps, Some(seed)).unwrap()
}
