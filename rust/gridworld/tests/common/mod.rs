use gridworld::*;

/// 5x5, wall at (2, 2), start (0, 0), goal (4, 4).
#[allow(dead_code)]
pub fn walled_5x5() -> Grid {
    let mut rows = vec![vec![0u8; 5]; 5];
    rows[2][2] = 1;
    rows[0][0] = 2;
    rows[4][4] = 3;
    Grid::new(&rows).unwrap()
}

#[allow(dead_code)]
pub fn make_env(grid: Grid, max_steps: usize, seed: u64) -> GridEnvironment {
    GridEnvironment::new(grid, RewardConfig::default(), max_steps, Some(seed)).unwrap()
}

/// Every move whose destination is a wall or off the map.
#[allow(dead_code)]
pub fn blocked_moves(env: &GridEnvironment) -> Vec<(Position, Action)> {
    let mut blocked = vec![];
    for s in env.enumerate_states() {
        for a in ACTIONS {
            let (dr, dc) = a.delta();
            let (r, c) = (s.row as isize + dr, s.col as isize + dc);
            if !env.in_bounds(r, c) || env.is_wall(r, c) {
                blocked.push((s, a));
            }
        }
    }
    blocked
}
