use std::ops;

use smallvec::SmallVec;

use crate::array::Array2D;
use crate::dims::Pos;
use crate::gameboard::cell::{Cell, Way};
use crate::solvers::CellMask;

/// A rectangular maze.
///
/// Cloning performs a full deep copy: the cell buffer is owned, so a clone
/// shares no storage with its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    cells: Array2D<Cell>,
}

impl Maze {
    pub fn new(cells: Array2D<Cell>) -> Self {
        Maze { cells }
    }

    pub fn filled(rows: usize, cols: usize, cell: Cell) -> Self {
        Maze {
            cells: Array2D::new(cell, rows, cols),
        }
    }

    /// Size as `Pos(rows, cols)`.
    pub fn size(&self) -> Pos {
        self.cells.size()
    }

    pub fn is_in_bounds(&self, pos: Pos) -> bool {
        let Pos(rows, cols) = self.size();
        0 <= pos.0 && pos.0 < rows && 0 <= pos.1 && pos.1 < cols
    }

    pub fn get_cell(&self, pos: Pos) -> Option<&Cell> {
        self.cells.get(pos)
    }

    pub fn get_cell_mut(&mut self, pos: Pos) -> Option<&mut Cell> {
        self.cells.get_mut(pos)
    }

    /// First position holding `target`, scanning row-major.
    pub fn find_cell(&self, target: Cell) -> Option<Pos> {
        self.cells.iter_pos().find(|&pos| self.cells[pos] == target)
    }

    pub fn start(&self) -> Option<Pos> {
        self.find_cell(Cell::Start)
    }

    pub fn end(&self) -> Option<Pos> {
        self.find_cell(Cell::End)
    }

    /// In-bounds orthogonal neighbors of `pos`, in the fixed scan order.
    pub fn get_neighbors_pos(&self, pos: Pos) -> SmallVec<[Pos; 4]> {
        Way::get_in_order()
            .into_iter()
            .map(|way| pos + way.offset())
            .filter(|&neighbor| self.is_in_bounds(neighbor))
            .collect()
    }

    /// Stamps `Solution` over every path cell except Start and End.
    ///
    /// Mutates whichever maze it is called on; callers wanting to keep the
    /// canonical maze untouched apply this to a clone. Idempotent.
    pub fn mark_solution(&mut self, path: &[Pos]) {
        for &pos in path {
            if let Some(cell) = self.get_cell_mut(pos) {
                if *cell != Cell::Start && *cell != Cell::End {
                    *cell = Cell::Solution;
                }
            }
        }
    }

    /// Stamps `Visited` over every masked `Passage` cell.
    ///
    /// Presentation overlay for a traversal footprint; Start, End and
    /// already-marked Solution cells are left alone.
    pub fn mark_visited(&mut self, mask: &CellMask) {
        for pos in mask.iter_enabled() {
            if let Some(cell) = self.get_cell_mut(pos) {
                if *cell == Cell::Passage {
                    *cell = Cell::Visited;
                }
            }
        }
    }
}

impl ops::Index<Pos> for Maze {
    type Output = Cell;

    fn index(&self, index: Pos) -> &Self::Output {
        &self.cells[index]
    }
}

impl ops::IndexMut<Pos> for Maze {
    fn index_mut(&mut self, index: Pos) -> &mut Self::Output {
        &mut self.cells[index]
    }
}
