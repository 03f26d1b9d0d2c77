//! Snapshot module - a detached copy of everything a frame needs
//!
//! The control loop captures a snapshot after each event and hands it to the
//! renderer, so rendering never borrows the live `GameState`.

use crate::board::Grid;
use crate::game_state::ActivePiece;
use crate::shape::Piece;
use crate::types::{BoardId, BOARD_COUNT};

#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub boards: [Grid; BOARD_COUNT],
    pub current_board: BoardId,
    pub active: Option<ActivePiece>,
    pub next: Piece,
    pub score: f64,
    pub level: u32,
    pub lines: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    /// Grid of `board` with the falling piece drawn in when `board` is active.
    ///
    /// Cells of the piece outside the grid are skipped.
    pub fn composited(&self, board: BoardId) -> Grid {
        let mut grid = self.boards[board.index()];
        if board != self.current_board {
            return grid;
        }

        if let Some(active) = self.active {
            for (r, c) in active.piece.cells() {
                grid.set(
                    active.position.row as i32 + r as i32,
                    active.position.col as i32 + c as i32,
                    true,
                );
            }
        }
        grid
    }

    /// Score rounded for display, halves to even
    pub fn display_score(&self) -> u64 {
        self.score.round_ties_even().max(0.0) as u64
    }
}
