mod backtracker;

use rand::{thread_rng, Rng as _, SeedableRng as _};

use crate::dims::Pos;
use crate::gameboard::{Cell, Maze};

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

/// Requests below this are silently raised, not rejected.
pub const MIN_SIZE: i32 = 5;

/// Generates a maze with a fresh random seed.
pub fn generate(rows: i32, cols: i32) -> Maze {
    generate_seeded(rows, cols, None)
}

/// Generates a maze, deterministically when `seed` is `Some`.
///
/// `rows` and `cols` are clamped up to [`MIN_SIZE`]; no upper bound is
/// enforced. The result holds exactly one `Start` at (1, 1) and exactly one
/// `End` at (rows − 2, cols − 2), with passages carved as a tree reachable
/// from `Start`.
pub fn generate_seeded(rows: i32, cols: i32, seed: Option<u64>) -> Maze {
    let mut rng = Random::seed_from_u64(seed.unwrap_or_else(|| thread_rng().gen()));

    let rows = rows.max(MIN_SIZE);
    let cols = cols.max(MIN_SIZE);
    log::debug!("generating {}x{} maze", rows, cols);

    let mut maze = Maze::filled(rows as usize, cols as usize, Cell::Wall);

    let start = Pos(1, 1);
    let end = Pos(rows - 2, cols - 2);
    maze[start] = Cell::Start;
    maze[end] = Cell::End;

    backtracker::carve(&mut maze, start, &mut rng);
    backtracker::ensure_exit(&mut maze, end);

    maze
}
