//! Drawing seam between the control loop and the terminal.

use anyhow::Result;
use tritris_term::TerminalRenderer;

use crate::core::GameSnapshot;

/// Something that can show game frames.
pub trait Frontend {
    /// Show one in-progress frame.
    fn draw_frame(&mut self, snap: &GameSnapshot) -> Result<()>;

    /// Show the final frame. Called exactly once, after the last `draw_frame`.
    fn draw_game_over(&mut self, snap: &GameSnapshot) -> Result<()>;
}

impl Frontend for TerminalRenderer {
    fn draw_frame(&mut self, snap: &GameSnapshot) -> Result<()> {
        self.draw(snap)
    }

    fn draw_game_over(&mut self, snap: &GameSnapshot) -> Result<()> {
        TerminalRenderer::draw_game_over(self, snap)
    }
}

impl<F: Frontend + ?Sized> Frontend for &mut F {
    fn draw_frame(&mut self, snap: &GameSnapshot) -> Result<()> {
        (**self).draw_frame(snap)
    }

    fn draw_game_over(&mut self, snap: &GameSnapshot) -> Result<()> {
        (**self).draw_game_over(snap)
    }
}
