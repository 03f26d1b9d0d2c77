//! Terminal Tritris runner (default binary).
//!
//! Three boards share one piece stream. Keys come from a reader thread over a
//! channel; the fall timer and the keys are multiplexed by the control loop.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use tracing::warn;

use tritris::core::GameState;
use tritris::engine::ControlLoop;
use tritris::input::KeyReader;
use tritris::term::TerminalRenderer;
use tritris::types::KEY_CHANNEL_CAPACITY;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::WARN)
        .with_target(false)
        .without_time()
        .init();

    // Without a terminal the game still runs on the fall timer alone.
    let (raw_guard, keys) = match KeyReader::spawn(KEY_CHANNEL_CAPACITY) {
        Ok(reader) => {
            let (guard, keys) = reader.into_parts();
            (Some(guard), Some(keys))
        }
        Err(err) => {
            warn!(error = %err, "running without keyboard input");
            (None, None)
        }
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let mut control = ControlLoop::new(GameState::new(time_seed()), &mut term);
    let result = control.run(keys).await;

    // Always try to restore terminal state.
    let _ = term.exit();
    drop(raw_guard);
    result
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}
