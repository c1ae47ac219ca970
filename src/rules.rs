//! Win and draw detection parameterized by win-length.

use crate::board::Board;
use crate::common::{BoardError, Cell, PlayerId};

/// Line rules of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSet {
    win_length: usize,
}

impl RuleSet {
    /// Rules for lines of `win_length`. Zero is rejected.
    pub fn new(win_length: usize) -> Result<Self, BoardError> {
        if win_length == 0 {
            return Err(BoardError::InvalidWinLength);
        }
        Ok(Self { win_length })
    }

    /// Number of window start positions along a line of `extent` cells.
    fn starts(&self, extent: usize) -> usize {
        if self.win_length > extent {
            0
        } else {
            extent - self.win_length + 1
        }
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Scan the move log in play order and return the first player owning a
    /// complete line through one of the played cells.
    ///
    /// Every logged move is re-checked on each call. Checking only the last
    /// move would give the same answer during normal play.
    pub fn check_win(&self, board: &Board) -> Option<PlayerId> {
        board
            .moves()
            .iter()
            .find_map(|m| self.check_move(board, m.row, m.col))
    }

    /// Test the piece at (`row`, `col`) for a line in any of the four
    /// directions. Returns its owner on success.
    pub fn check_move(&self, board: &Board, row: usize, col: usize) -> Option<PlayerId> {
        let player = board.cell_at(row, col).ok()?.player()?;
        if self.check_row(board, row, player)
            || self.check_col(board, col, player)
            || self.check_diag(board, row, col, player)
        {
            Some(player)
        } else {
            None
        }
    }

    /// Any `win_length` window in `row` fully owned by `player`.
    pub fn check_row(&self, board: &Board, row: usize, player: PlayerId) -> bool {
        if row >= board.rows() {
            return false;
        }
        let starts = self.starts(board.cols());
        (0..starts).any(|c| (0..self.win_length).all(|i| owns(board, row, c + i, player)))
    }

    /// Any `win_length` window in `col` fully owned by `player`.
    pub fn check_col(&self, board: &Board, col: usize, player: PlayerId) -> bool {
        if col >= board.cols() {
            return false;
        }
        let starts = self.starts(board.rows());
        (0..starts).any(|r| (0..self.win_length).all(|i| owns(board, r + i, col, player)))
    }

    /// Diagonal windows anchored at (`row`, `col`). Each of the four
    /// orientations is gated by its own bounds check so the window never
    /// leaves the grid.
    pub fn check_diag(&self, board: &Board, row: usize, col: usize, player: PlayerId) -> bool {
        let wl = self.win_length;
        let (rows, cols) = (board.rows(), board.cols());
        if row >= rows || col >= cols {
            return false;
        }
        // win_length >= 1 and the anchor is in range, so none of these wrap
        let fits_up = wl - 1 <= row;
        let fits_down = wl <= rows - row;
        let fits_left = wl - 1 <= col;
        let fits_right = wl <= cols - col;

        // up-right: (row-i, col+i)
        if fits_up && fits_right && (0..wl).all(|i| owns(board, row - i, col + i, player)) {
            return true;
        }
        // down-right: (row+i, col+i)
        if fits_down && fits_right && (0..wl).all(|i| owns(board, row + i, col + i, player)) {
            return true;
        }
        // down-left: (row+i, col-i)
        if fits_down && fits_left && (0..wl).all(|i| owns(board, row + i, col - i, player)) {
            return true;
        }
        // up-left: (row-i, col-i)
        if fits_up && fits_left && (0..wl).all(|i| owns(board, row - i, col - i, player)) {
            return true;
        }
        false
    }

    /// A full board with no line for anyone.
    pub fn check_draw(&self, board: &Board) -> bool {
        board.is_full() && self.check_win(board).is_none()
    }
}

#[inline]
fn owns(board: &Board, row: usize, col: usize, player: PlayerId) -> bool {
    board.get(row, col) == Cell::Occupied(player)
}
