//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! Every one of the three playfields has the same fixed dimensions:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 24 rows (indexed 0-23)
//! - **Spawn position**: row 0, horizontally centered for the piece width
//!
//! # Fall Timing
//!
//! The fall interval is an abstract unit; one unit lasts `1 / FPS` seconds.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FPS` | 24 | Units per second for the fall ticker |
//! | `INITIAL_FALL_INTERVAL` | 10.0 | Interval at level 0 |
//! | `FALL_INTERVAL_STEP` | 0.5 | Interval reduction per level |
//! | `LINES_PER_LEVEL` | 10 | Center-board lines needed per level |
//!
//! # Examples
//!
//! ```
//! use tritris_types::{BoardId, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::ALL.len(), 7);
//!
//! // E cycles forward, Q cycles backward.
//! assert_eq!(BoardId::Center.forward(), BoardId::Right);
//! assert_eq!(BoardId::Center.backward(), BoardId::Left);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 24);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: usize = 10;

/// Board height in cells (24 rows)
pub const BOARD_HEIGHT: usize = 24;

/// Number of playfields sharing the piece stream
pub const BOARD_COUNT: usize = 3;

/// Fall ticker units per second
pub const FPS: u32 = 24;

/// Fall interval at level 0 (in ticker units)
pub const INITIAL_FALL_INTERVAL: f64 = 10.0;

/// Fall interval reduction per level
pub const FALL_INTERVAL_STEP: f64 = 0.5;

/// Center-board lines required per level
pub const LINES_PER_LEVEL: u32 = 10;

/// Shortest real fall period in milliseconds.
///
/// The fall interval itself may reach 0 at high levels; the ticker never fires
/// more often than this.
pub const MIN_FALL_PERIOD_MS: u64 = 1;

/// Pending keystrokes retained between the reader and the dispatcher
pub const KEY_CHANNEL_CAPACITY: usize = 1;

/// Terminal width used when the real width cannot be queried
pub const DEFAULT_TERMINAL_WIDTH: u16 = 80;

/// Base points by rows cleared in one lock on the center board.
///
/// Index is the row count, clamped to 4.
pub const LINE_SCORES: [f64; 5] = [0.0, 100.0, 300.0, 500.0, 850.0];

/// Side-board multipliers by rows consumed during evaluation (clamped to 4).
pub const BOARD_MULTIPLIERS: [f64; 5] = [1.0, 1.5, 2.0, 2.5, 3.0];

/// The seven tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds, in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];
}

/// Identity of one of the three playfields
///
/// Only the center board scores. The side boards bank full rows that multiply
/// the next center clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardId {
    Left,
    Center,
    Right,
}

impl BoardId {
    /// All boards, in screen order
    pub const ALL: [BoardId; BOARD_COUNT] = [BoardId::Left, BoardId::Center, BoardId::Right];

    /// Array index for board storage
    pub fn index(self) -> usize {
        match self {
            BoardId::Left => 0,
            BoardId::Center => 1,
            BoardId::Right => 2,
        }
    }

    /// Next board when cycling forward (left → center → right → left)
    pub fn forward(self) -> Self {
        match self {
            BoardId::Left => BoardId::Center,
            BoardId::Center => BoardId::Right,
            BoardId::Right => BoardId::Left,
        }
    }

    /// Next board when cycling backward (left → right → center → left)
    pub fn backward(self) -> Self {
        match self {
            BoardId::Left => BoardId::Right,
            BoardId::Right => BoardId::Center,
            BoardId::Center => BoardId::Left,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            BoardId::Left => "left",
            BoardId::Center => "center",
            BoardId::Right => "right",
        }
    }
}

/// Game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    HardDrop,
    BoardBackward,
    BoardForward,
    Exit,
}

impl GameAction {
    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::Rotate => "rotate",
            GameAction::HardDrop => "hardDrop",
            GameAction::BoardBackward => "boardBackward",
            GameAction::BoardForward => "boardForward",
            GameAction::Exit => "exit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scoring_tables_are_monotonic() {
        assert!(LINE_SCORES.windows(2).all(|w| w[0] < w[1]));
        assert!(BOARD_MULTIPLIERS.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(BOARD_MULTIPLIERS[0], 1.0);
    }

    #[test]
    fn board_cycles_visit_every_board() {
        let mut board = BoardId::Left;
        for _ in 0..BOARD_COUNT {
            board = board.forward();
        }
        assert_eq!(board, BoardId::Left);

        for _ in 0..BOARD_COUNT {
            board = board.backward();
        }
        assert_eq!(board, BoardId::Left);
    }

    #[test]
    fn backward_undoes_forward() {
        for board in BoardId::ALL {
            assert_eq!(board.forward().backward(), board);
        }
    }
}
