//! Grid of cells with gravity placement and a chronological move log.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::fmt::Write as _;

use crate::common::{BoardError, Cell, Move, MoveError, PlayerId};

/// Marker drawn over the obstacle cell.
pub const OBSTACLE_MARKER: char = 'X';

/// `rows × cols` board, row 0 at the top.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    moves: Vec<Move>,
}

impl Board {
    /// Create an empty board.
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::InvalidDimensions);
        }
        let size = rows
            .checked_mul(cols)
            .ok_or(BoardError::InvalidDimensions)?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(size)
            .map_err(|_| BoardError::InvalidDimensions)?;
        cells.resize(size, Cell::Empty);
        Ok(Board {
            rows,
            cols,
            cells,
            moves: Vec::new(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Cell lookup for callers that already hold in-range coordinates.
    #[inline]
    pub(crate) fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.idx(row, col)]
    }

    /// Read a cell. Fails with `OutOfBounds` outside the grid.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        if row >= self.rows || col >= self.cols {
            return Err(BoardError::OutOfBounds { row, col });
        }
        Ok(self.get(row, col))
    }

    /// A column is full once its top cell is taken. Out-of-range columns
    /// count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        col >= self.cols || !self.get(0, col).is_empty()
    }

    /// Drop a piece into `col`, returning the row where it landed.
    pub fn drop_piece(&mut self, col: usize, player: PlayerId) -> Result<usize, MoveError> {
        if col >= self.cols {
            return Err(MoveError::InvalidColumn);
        }
        for row in (0..self.rows).rev() {
            let i = self.idx(row, col);
            if self.cells[i].is_empty() {
                self.cells[i] = Cell::Occupied(player);
                self.moves.push(Move { row, col, player });
                return Ok(row);
            }
        }
        Err(MoveError::ColumnFull)
    }

    /// Accepted moves in the order they were played.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Number of occupied cells.
    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    /// Returns `true` when every cell holds a piece.
    pub fn is_full(&self) -> bool {
        self.move_count() == self.rows * self.cols
    }

    /// Display lines for this board: a column header, then one line per row.
    /// `obstacle` is drawn as [`OBSTACLE_MARKER`] without touching the cell.
    pub fn render(&self, obstacle: Option<(usize, usize)>) -> Render<'_> {
        Render {
            board: self,
            obstacle,
            line: 0,
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Board {{ rows: {}, cols: {}, moves: {:?} }}",
            self.rows, self.cols, self.moves
        )
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.render(None) {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Lazy iterator over rendered board lines. Clone it to start over.
#[derive(Clone)]
pub struct Render<'a> {
    board: &'a Board,
    obstacle: Option<(usize, usize)>,
    line: usize,
}

impl Render<'_> {
    fn header(&self) -> String {
        let mut out = String::new();
        for c in 0..self.board.cols {
            if c > 0 {
                out.push_str("  ");
            }
            let _ = write!(out, "{}", c);
        }
        out
    }

    fn row(&self, row: usize) -> String {
        let mut out = String::from("|");
        for col in 0..self.board.cols {
            out.push(' ');
            if self.obstacle == Some((row, col)) {
                out.push(OBSTACLE_MARKER);
            } else {
                match self.board.get(row, col) {
                    Cell::Empty => out.push(' '),
                    Cell::Occupied(p) => {
                        let _ = write!(out, "{}", p);
                    }
                }
            }
            out.push_str(" |");
        }
        out
    }
}

impl Iterator for Render<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let line = match self.line {
            0 => self.header(),
            n if n <= self.board.rows => self.row(n - 1),
            _ => return None,
        };
        self.line += 1;
        Some(line)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.board.rows + 1).saturating_sub(self.line);
        (left, Some(left))
    }
}

impl ExactSizeIterator for Render<'_> {}
