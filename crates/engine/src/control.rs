//! ControlLoop: the single owner of `GameState` during play.
//!
//! Two event sources feed it: the fall ticker and the keystroke channel.
//! Events are handled one at a time, so the state needs no locking. The
//! ticker period follows the current fall interval and is rebuilt whenever a
//! level-up changes it.

use std::future;
use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc;
use tokio::time::{self, Instant, Interval, MissedTickBehavior};
use tracing::{debug, info};
use tritris_input::map_key;

use crate::core::{fall_period, GameState};
use crate::frontend::Frontend;

/// One input to the loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopEvent {
    /// The fall timer fired.
    Tick,
    /// A decoded keystroke.
    Key(char),
    /// The keystroke channel closed.
    InputClosed,
}

/// What the loop should do after handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Redraw,
    /// Unmapped key; nothing changed.
    Ignored,
    GameOver,
}

pub struct ControlLoop<F> {
    state: GameState,
    frontend: F,
}

impl<F: Frontend> ControlLoop<F> {
    pub fn new(state: GameState, frontend: F) -> Self {
        Self { state, frontend }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    /// Apply one event to the game.
    pub fn dispatch(&mut self, event: LoopEvent) -> Dispatch {
        if self.state.game_over() {
            return Dispatch::GameOver;
        }

        match event {
            LoopEvent::Tick => {
                self.state.tick();
            }
            LoopEvent::Key(key) => match map_key(key) {
                Some(action) => {
                    let applied = self.state.apply_action(action);
                    debug!(action = action.as_str(), applied, "key");
                }
                None => return Dispatch::Ignored,
            },
            LoopEvent::InputClosed => {
                info!("input closed, ending game");
                self.state.quit();
            }
        }

        if let Some(event) = self.state.take_last_event() {
            info!(
                rows = event.center_rows,
                points = event.points,
                leveled_up = event.leveled_up,
                "center clear"
            );
        }

        if self.state.game_over() {
            Dispatch::GameOver
        } else {
            Dispatch::Redraw
        }
    }

    /// Play until the game ends.
    ///
    /// With `keys` set to `None` only the fall timer drives the game.
    pub async fn run(&mut self, mut keys: Option<mpsc::Receiver<char>>) -> Result<()> {
        self.state.start();

        if !self.state.game_over() {
            self.frontend.draw_frame(&self.state.snapshot())?;

            let mut period = fall_period(self.state.fall_interval());
            let mut ticker = fall_ticker(period);

            loop {
                let event = tokio::select! {
                    _ = ticker.tick() => LoopEvent::Tick,
                    key = next_key(&mut keys) => match key {
                        Some(key) => LoopEvent::Key(key),
                        None => LoopEvent::InputClosed,
                    },
                };

                match self.dispatch(event) {
                    Dispatch::Ignored => continue,
                    Dispatch::GameOver => break,
                    Dispatch::Redraw => {}
                }

                self.frontend.draw_frame(&self.state.snapshot())?;

                let next = fall_period(self.state.fall_interval());
                if next != period {
                    debug!(period_ms = next.as_millis() as u64, "fall speed changed");
                    period = next;
                    ticker = fall_ticker(period);
                }
            }
        }

        info!(
            score = self.state.score(),
            level = self.state.level(),
            lines = self.state.total_lines(),
            "game over"
        );
        self.frontend.draw_game_over(&self.state.snapshot())
    }
}

/// Ticker whose first tick is one full period away.
fn fall_ticker(period: Duration) -> Interval {
    let mut ticker = time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}

/// Next key, or never when there is no keystroke source.
async fn next_key(keys: &mut Option<mpsc::Receiver<char>>) -> Option<char> {
    match keys {
        Some(rx) => rx.recv().await,
        None => future::pending().await,
    }
}
