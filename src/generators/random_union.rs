use rand::{Rng, rngs::StdRng};

use crate::{
    disjoint_set::DisjointSet,
    error::MazeError,
    generators::{WallPolicy, get_rng},
    maze::{Direction, Grid},
};

/// Generates a perfect maze on an n-by-n grid: every cell reachable from
/// every other by exactly one path.
///
/// Random cell/neighbor pairs are drawn until every cell belongs to one
/// component; pairs already connected are discarded, which is what keeps the
/// passage graph a tree. `n` of 1 is a valid boundary case and returns the
/// singleton grid untouched.
pub fn generate_maze(n: usize, policy: WallPolicy, seed: Option<u64>) -> Result<Grid, MazeError> {
    if n == 0 {
        return Err(MazeError::InvalidDimension { n });
    }

    let mut rng = get_rng(seed);
    let mut grid = Grid::new(n);
    let mut set = DisjointSet::new(n * n);
    let mut attempts: u64 = 0;

    // Each successful union merges two components into one, so exactly
    // n*n - 1 unions happen before the set is fully unified.
    while !set.unified() {
        attempts += 1;

        let (x, y) = (rng.random_range(0..n), rng.random_range(0..n));
        let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];

        // A step off the grid is a discarded attempt, not an error
        let Some((nx, ny)) = grid.neighbor(x, y, direction) else {
            continue;
        };

        let cell_id = grid.ravel_index(x, y);
        let neighbor_id = grid.ravel_index(nx, ny);

        // Already connected: linking again would close a cycle
        if set.find(cell_id)? == set.find(neighbor_id)? {
            continue;
        }
        set.union(cell_id, neighbor_id)?;

        grid[(x, y)].is_open = true;
        let slot = pick_wall(direction, policy, &mut rng);
        grid[(x, y)].remove_wall(slot);

        grid[(nx, ny)].is_open = true;
        let slot = pick_wall(direction.opposite(), policy, &mut rng);
        grid[(nx, ny)].remove_wall(slot);

        grid.passages += 1;
        tracing::trace!(
            "[generate] passage {} between ({x}, {y}) and ({nx}, {ny})",
            grid.passages
        );
    }

    tracing::debug!(
        "[generate] {n}x{n} maze done: {} passages carved in {attempts} attempts",
        grid.passages
    );
    Ok(grid)
}

/// Which wall slot a cell clears for a passage whose facing side is
/// `facing`. The independent policy picks between the facing side and its
/// reverse at random, one draw per cell.
fn pick_wall(facing: Direction, policy: WallPolicy, rng: &mut StdRng) -> Direction {
    match policy {
        WallPolicy::Facing => facing,
        WallPolicy::Independent => {
            if rng.random_bool(0.5) {
                facing
            } else {
                facing.opposite()
            }
        }
    }
}
