use super::{traverse, Solution, SolveAlgorithm};
use crate::dims::Pos;
use crate::gameboard::Maze;

/// Depth-first search behind a LIFO frontier.
///
/// Dives along the most recently discovered positions first, biased by the
/// fixed scan order. Returns some valid route, not necessarily the
/// shortest one.
#[derive(Debug)]
pub struct DepthFirst;

impl SolveAlgorithm for DepthFirst {
    fn solve(&self, maze: &Maze) -> Option<Solution> {
        traverse::<Vec<Pos>>(maze)
    }
}
