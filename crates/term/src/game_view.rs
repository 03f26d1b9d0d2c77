//! GameView: maps a `core::GameSnapshot` into a centered block of text lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, Grid, Piece};
use crate::types::{BoardId, BOARD_HEIGHT, BOARD_WIDTH};

pub const TITLE: &str = "Tetris CLI";
pub const BLOCK_CELL: &str = "[]";
pub const EMPTY_CELL: &str = "  ";
pub const HORIZONTAL_BORDER: &str = "-";
pub const VERTICAL_BORDER: &str = "|";
pub const CONTROLS_HELP: &str =
    "Controls: WASD/HJKL = Movement | F = Hard Drop | Q/E = Switch Board | X = Exit";

/// Next-piece preview window, in cells
const PREVIEW_WIDTH: usize = 4;
const PREVIEW_HEIGHT: usize = 2;

/// Character width of one cell
const CELL_CHARS: usize = 2;

/// Lays out frames for a given terminal width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    width: u16,
}

impl GameView {
    pub fn new(width: u16) -> Self {
        Self { width }
    }

    /// Left-pad `s` so it is centered in the terminal width.
    ///
    /// Lines wider than the terminal are left unpadded.
    pub fn center(&self, s: &str) -> String {
        let len = s.chars().count();
        let padding = (self.width as usize).saturating_sub(len) / 2;
        format!("{}{}", " ".repeat(padding), s)
    }

    /// Render a full game frame.
    pub fn render(&self, snap: &GameSnapshot) -> Vec<String> {
        let mut lines = Vec::with_capacity(BOARD_HEIGHT + 16);

        lines.push(self.center(TITLE));
        lines.push(self.center(&format!(
            "Score: {} | Level: {} | Lines: {}",
            snap.display_score(),
            snap.level,
            snap.lines
        )));
        lines.push(self.center("Next Piece:"));
        for line in preview_lines(&snap.next) {
            lines.push(self.center(&line));
        }

        lines.push(self.center(&board_labels(snap.current_board)));

        let grids = BoardId::ALL.map(|board| snap.composited(board));
        let border = boards_border();
        lines.push(self.center(&border));
        for row in 0..BOARD_HEIGHT {
            let line = grids
                .iter()
                .map(|grid| board_row(grid, row))
                .collect::<Vec<_>>()
                .join(" ");
            lines.push(self.center(&line));
        }
        lines.push(self.center(&border));

        lines.push(String::new());
        lines.push(self.center(CONTROLS_HELP));
        lines
    }

    /// Render the final frame followed by the game-over banner.
    pub fn render_game_over(&self, snap: &GameSnapshot) -> Vec<String> {
        let mut lines = self.render(snap);
        lines.push(self.center("Game Over!"));
        lines.push(self.center(&format!("Final Score: {}", snap.display_score())));
        lines
    }
}

/// Boxed preview of the next piece, centered in a 4x2 window.
///
/// Cells that do not fit in the window are not drawn.
pub fn preview_lines(piece: &Piece) -> Vec<String> {
    let offset_col = PREVIEW_WIDTH.saturating_sub(piece.cols()) / 2;
    let offset_row = PREVIEW_HEIGHT.saturating_sub(piece.rows()) / 2;

    let mut window = [[false; PREVIEW_WIDTH]; PREVIEW_HEIGHT];
    for (r, c) in piece.cells() {
        let (row, col) = (r + offset_row, c + offset_col);
        if row < PREVIEW_HEIGHT && col < PREVIEW_WIDTH {
            window[row][col] = true;
        }
    }

    let edge = format!("+{}+", HORIZONTAL_BORDER.repeat(PREVIEW_WIDTH * CELL_CHARS));
    let mut lines = Vec::with_capacity(PREVIEW_HEIGHT + 2);
    lines.push(edge.clone());
    for row in window {
        let cells: String = row.iter().map(|&filled| cell_str(filled)).collect();
        lines.push(format!("{VERTICAL_BORDER}{cells}{VERTICAL_BORDER}"));
    }
    lines.push(edge);
    lines
}

/// One bordered row of a board
pub fn board_row(grid: &Grid, row: usize) -> String {
    let cells: String = grid.row(row).iter().map(|&filled| cell_str(filled)).collect();
    format!("{VERTICAL_BORDER}{cells}{VERTICAL_BORDER}")
}

/// Top/bottom border spanning all three boards
fn boards_border() -> String {
    let edge = format!("+{}+", HORIZONTAL_BORDER.repeat(BOARD_WIDTH * CELL_CHARS));
    [edge.as_str(); 3].join(" ")
}

/// Board names above each board; the active one is bracketed
fn board_labels(current: BoardId) -> String {
    let board_chars = BOARD_WIDTH * CELL_CHARS + 2;
    BoardId::ALL
        .iter()
        .map(|&board| {
            let name = if board == current {
                format!("[{}]", board.as_str())
            } else {
                board.as_str().to_string()
            };
            format!("{:^width$}", name, width = board_chars)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn cell_str(filled: bool) -> &'static str {
    if filled {
        BLOCK_CELL
    } else {
        EMPTY_CELL
    }
}
