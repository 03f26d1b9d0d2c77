//! Keystroke producer.
//!
//! A dedicated thread blocks on terminal reads and forwards decoded characters
//! into a bounded channel. When the channel is full the thread waits, so no
//! keystroke is dropped. The channel closes when reading fails, which the
//! control loop treats as an exit.

use std::io::{self, IsTerminal};
use std::thread;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::map::decode_key;

/// Environment failures that leave the game without keyboard input
#[derive(Debug, Error)]
pub enum InputError {
    #[error("input is not a terminal, keyboard input disabled")]
    NotATerminal,
    #[error("failed to set terminal to raw mode: {0}")]
    RawMode(#[source] io::Error),
    #[error("failed to start keyboard reader: {0}")]
    Spawn(#[source] io::Error),
}

/// Restores cooked mode when dropped
#[derive(Debug)]
pub struct RawModeGuard {
    _private: (),
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Running keystroke producer
#[derive(Debug)]
pub struct KeyReader {
    raw: RawModeGuard,
    keys: mpsc::Receiver<char>,
}

impl KeyReader {
    /// Enter raw mode and start the reader thread.
    ///
    /// `capacity` is the number of keystrokes buffered ahead of the dispatcher (at least 1).
    pub fn spawn(capacity: usize) -> Result<Self, InputError> {
        if !io::stdin().is_terminal() {
            return Err(InputError::NotATerminal);
        }

        terminal::enable_raw_mode().map_err(InputError::RawMode)?;
        let raw = RawModeGuard { _private: () };

        let (tx, keys) = mpsc::channel(capacity.max(1));
        thread::Builder::new()
            .name("key-reader".into())
            .spawn(move || read_keys(tx))
            .map_err(InputError::Spawn)?;

        Ok(Self { raw, keys })
    }

    /// Split into the raw-mode guard and the keystroke receiver
    pub fn into_parts(self) -> (RawModeGuard, mpsc::Receiver<char>) {
        (self.raw, self.keys)
    }
}

fn read_keys(tx: mpsc::Sender<char>) {
    loop {
        let event = match event::read() {
            Ok(event) => event,
            Err(err) => {
                warn!(%err, "keyboard read failed");
                return;
            }
        };

        let Event::Key(key) = event else {
            continue;
        };
        // Release and repeat events are not keystrokes.
        if key.kind != KeyEventKind::Press {
            continue;
        }
        let Some(ch) = decode_key(key) else {
            continue;
        };

        if tx.blocking_send(ch).is_err() {
            debug!("dispatcher gone, keyboard reader stopping");
            return;
        }
    }
}
