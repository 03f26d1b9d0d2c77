//! Terminal input module (engine-facing).
//!
//! Maps raw keystrokes into [`crate::types::GameAction`] and runs the blocking
//! keystroke reader that feeds the control loop.

pub mod map;
pub mod reader;

pub use tritris_types as types;

pub use map::{decode_key, map_key};
pub use reader::{InputError, KeyReader, RawModeGuard};
