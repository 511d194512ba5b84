//! Four-in-a-row detection around the most recently placed piece.

use super::board::{Board, Cell};
use super::player::PlayerId;

/// Number of consecutive pieces needed to win.
pub const CONNECT_LENGTH: usize = 4;

/// One of the four lines through a cell along which a win can form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Top to bottom.
    Column,
    /// Left to right.
    Row,
    /// Top-left to bottom-right (`\`).
    Diagonal,
    /// Bottom-left to top-right (`/`).
    AntiDiagonal,
}

impl Axis {
    pub const ALL: [Axis; 4] = [Axis::Column, Axis::Row, Axis::Diagonal, Axis::AntiDiagonal];

    /// Every cell on this axis through `(row, col)`, from one board edge to
    /// the opposite one.
    pub fn cells(self, board: &Board, row: usize, col: usize) -> Vec<Cell> {
        match self {
            Axis::Column => (0..board.height()).map(|r| board.get(r, col)).collect(),
            Axis::Row => (0..board.width()).map(|c| board.get(row, c)).collect(),
            Axis::Diagonal => {
                // Back up to the top or left edge, then walk down-right.
                let back = row.min(col);
                let (mut r, mut c) = (row - back, col - back);
                let mut cells = Vec::new();
                while r < board.height() && c < board.width() {
                    cells.push(board.get(r, c));
                    r += 1;
                    c += 1;
                }
                cells
            }
            Axis::AntiDiagonal => {
                // Back up to the bottom or left edge, then walk up-right.
                let back = (board.height() - 1 - row).min(col);
                let (mut r, mut c) = (row + back, col - back);
                let mut cells = Vec::new();
                loop {
                    cells.push(board.get(r, c));
                    if r == 0 || c + 1 == board.width() {
                        break;
                    }
                    r -= 1;
                    c += 1;
                }
                cells
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Axis::Column => "column",
            Axis::Row => "row",
            Axis::Diagonal => "diagonal",
            Axis::AntiDiagonal => "anti-diagonal",
        }
    }
}

/// True if `cells` holds `length` consecutive pieces of `player`.
fn has_run(cells: &[Cell], player: PlayerId, length: usize) -> bool {
    let mut run = 0;
    for &cell in cells {
        if cell == Some(player) {
            run += 1;
            if run >= length {
                return true;
            }
        } else {
            run = 0;
        }
    }
    false
}

/// The first axis through `(row, col)` on which `player` has four in a row.
///
/// Only the lines through the given cell are inspected, so this is
/// O(height + width) rather than a full board scan.
pub fn winning_axis(board: &Board, row: usize, col: usize, player: PlayerId) -> Option<Axis> {
    Axis::ALL
        .into_iter()
        .find(|axis| has_run(&axis.cells(board, row, col), player, CONNECT_LENGTH))
}

/// Check if the piece at `(row, col)` completed a line for `player`.
pub fn check_win(board: &Board, row: usize, col: usize, player: PlayerId) -> bool {
    winning_axis(board, row, col, player).is_some()
}
