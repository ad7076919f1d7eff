use std::fmt;

use thiserror::Error;

use crate::array::Array2D;
use crate::dims::Pos;
use crate::gameboard::cell::Cell;
use crate::gameboard::maze::Maze;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseMazeError {
    #[error("maze text is empty")]
    Empty,
    #[error("row {row} is {len} cells wide, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("unknown cell symbol {symbol:?} at row {row}, column {col}")]
    UnknownSymbol { symbol: char, row: usize, col: usize },
}

/// Renders the row-major symbol matrix, one row per line.
///
/// This is the only serialization the crate exposes; presentation layers
/// consume it as-is.
impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Pos(rows, cols) = self.size();
        for row in 0..rows {
            for col in 0..cols {
                write!(f, "{}", self[Pos(row, col)].symbol())?;
            }
            if row < rows - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl Maze {
    /// Parses the matrix produced by `Display`. Rows must be equally wide
    /// and every symbol must name a cell state.
    pub fn from_text(text: &str) -> Result<Maze, ParseMazeError> {
        let lines: Vec<&str> = text.lines().collect();
        if lines.is_empty() {
            return Err(ParseMazeError::Empty);
        }

        let cols = lines[0].chars().count();
        if cols == 0 {
            return Err(ParseMazeError::Empty);
        }

        let mut buf = Vec::with_capacity(lines.len() * cols);
        for (row, line) in lines.iter().enumerate() {
            let len = line.chars().count();
            if len != cols {
                return Err(ParseMazeError::RaggedRow {
                    row,
                    len,
                    expected: cols,
                });
            }

            for (col, symbol) in line.chars().enumerate() {
                let cell = Cell::from_symbol(symbol)
                    .ok_or(ParseMazeError::UnknownSymbol { symbol, row, col })?;
                buf.push(cell);
            }
        }

        let rows = lines.len();
        // length is rows * cols by construction
        Ok(Maze::new(Array2D::from_buf(buf, rows, cols).unwrap()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_roundtrip() {
        let text = "#####\n#S..#\n#.#.#\n#..E#\n#####";
        let maze = Maze::from_text(text).unwrap();
        assert_eq!(maze.size(), Pos(5, 5));
        assert_eq!(maze.to_string(), text);
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(Maze::from_text(""), Err(ParseMazeError::Empty));
    }

    #[test]
    fn rejects_ragged_rows() {
        assert_eq!(
            Maze::from_text("###\n####"),
            Err(ParseMazeError::RaggedRow {
                row: 1,
                len: 4,
                expected: 3,
            })
        );
    }

    #[test]
    fn rejects_unknown_symbols() {
        assert_eq!(
            Maze::from_text("##\n#X"),
            Err(ParseMazeError::UnknownSymbol {
                symbol: 'X',
                row: 1,
                col: 1,
            })
        );
    }
}
