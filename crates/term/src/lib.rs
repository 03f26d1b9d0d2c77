//! Terminal game renderer.
//!
//! `game_view` turns a `core::GameSnapshot` into centered text lines and has
//! no I/O. `renderer` pushes those lines to the terminal through crossterm.

pub mod game_view;
pub mod renderer;

pub use tritris_core as core;
pub use tritris_types as types;

pub use game_view::GameView;
pub use renderer::{encode_lines_into, terminal_width, TerminalRenderer};
