use std::collections::VecDeque;

use super::{traverse, Solution, SolveAlgorithm};
use crate::dims::Pos;
use crate::gameboard::Maze;

/// Breadth-first search behind a FIFO frontier.
///
/// Expands the grid frontier-by-frontier, so the first route that reaches
/// `End` has the minimum number of steps of any route in the grid.
#[derive(Debug)]
pub struct BreadthFirst;

impl SolveAlgorithm for BreadthFirst {
    fn solve(&self, maze: &Maze) -> Option<Solution> {
        traverse::<VecDeque<Pos>>(maze)
    }
}
