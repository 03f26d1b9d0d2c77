//! Game control loop.
//!
//! Multiplexes the fall timer and the keystroke channel onto one `GameState`
//! and redraws through a `Frontend` after every handled event.

pub mod control;
pub mod frontend;

pub use tritris_core as core;
pub use tritris_types as types;

pub use control::{ControlLoop, Dispatch, LoopEvent};
pub use frontend::Frontend;
