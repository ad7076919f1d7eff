use rand::seq::SliceRandom as _;
use smallvec::SmallVec;

use super::Random;
use crate::dims::Pos;
use crate::gameboard::{Cell, Maze, Way};

/// One in-progress lattice point: where we carve from, and the directions
/// still to try, pre-shuffled so popping yields a random order.
struct Frame {
    pos: Pos,
    ways: SmallVec<[Way; 4]>,
}

impl Frame {
    fn new(pos: Pos, rng: &mut Random) -> Self {
        let mut ways = SmallVec::from_buf(Way::get_in_order());
        ways.shuffle(rng);
        Frame { pos, ways }
    }
}

/// Randomized depth-first carving over the half-resolution lattice.
///
/// Lattice points sit two cells apart; carving an edge opens the point and
/// the intervening cell. Points already holding a marker are skipped as
/// carve targets, and the intervening write never clobbers a marker, so
/// `Start` and `End` survive whatever lattice position they land on. The
/// result is a spanning tree of the lattice: one simple path between any
/// two carved cells.
pub(super) fn carve(maze: &mut Maze, start: Pos, rng: &mut Random) {
    let mut stack = vec![Frame::new(start, rng)];

    while let Some(frame) = stack.last_mut() {
        let Some(way) = frame.ways.pop() else {
            stack.pop();
            continue;
        };

        let from = frame.pos;
        let mid = from + way.offset();
        let next = from + way.offset() * 2;

        if maze.get_cell(next) == Some(&Cell::Wall) {
            if maze[mid] == Cell::Wall {
                maze[mid] = Cell::Passage;
            }
            maze[next] = Cell::Passage;
            stack.push(Frame::new(next, rng));
        }
    }
}

/// Opens one wall next to `end` when carving left it sealed.
///
/// Local patch only: the forced cell is not checked for a connection back
/// to the start. It borders already-carved territory for every
/// constructible size, which is what keeps the end reachable.
pub(super) fn ensure_exit(maze: &mut Maze, end: Pos) {
    let neighbors = maze.get_neighbors_pos(end);

    if neighbors.iter().any(|&pos| maze[pos] == Cell::Passage) {
        return;
    }

    if let Some(&pos) = neighbors.iter().find(|&&pos| maze[pos] == Cell::Wall) {
        maze[pos] = Cell::Passage;
        log::debug!("carved emergency passage at {:?} next to sealed end", pos);
    }
}
