//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on rendering, terminals, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces the same piece stream
//! - **Testable**: Unit tests for every rule
//! - **Portable**: Can run in any environment (terminal or headless)
//!
//! # Module Structure
//!
//! - [`board`]: 10x24 grid with collision detection and line clearing
//! - [`game_state`]: three boards, the falling piece, scoring and level state
//! - [`shape`]: Tetromino masks and naive clockwise rotation
//! - [`rng`]: Uniform random piece selection
//! - [`scoring`]: Center-board points, side-board multipliers, fall speed
//! - [`snapshot`]: Detached copy of the state for rendering
//!
//! # Game Rules
//!
//! - **Three boards** share one piece stream; the player moves the falling piece
//!   between them, provided it fits on the destination board
//! - **Only the center board scores**: rows completed on the left and right boards
//!   stay put until the next center clear, which consumes them as multipliers
//! - **Naive rotation**: clockwise transpose, no wall kicks
//! - **Levels**: every 10 center lines, the fall interval drops by 0.5 units
//!
//! # Example
//!
//! ```
//! use tritris_core::GameState;
//! use tritris_types::{BoardId, GameAction};
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert!(!game.game_over());
//! assert_eq!(game.current_board(), BoardId::Center);
//! ```

pub mod board;
pub mod game_state;
pub mod rng;
pub mod scoring;
pub mod shape;
pub mod snapshot;

pub use tritris_types as types;

// Re-export commonly used types for convenience
pub use board::Grid;
pub use game_state::{ActivePiece, ClearEvent, GameState};
pub use rng::PieceRandomizer;
pub use scoring::{calculate_score, fall_interval, fall_period, ScoreResult};
pub use shape::{Piece, Position};
pub use snapshot::GameSnapshot;
