//! Tritris (workspace facade crate).
//!
//! Re-exports the member crates as `tritris::{core,engine,input,term,types}`.
//! The implementation lives in dedicated crates under `crates/`.

pub use tritris_core as core;
pub use tritris_engine as engine;
pub use tritris_input as input;
pub use tritris_term as term;
pub use tritris_types as types;
