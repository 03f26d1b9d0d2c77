//! TerminalRenderer: writes rendered frames to a real terminal.
//!
//! Every frame is a full redraw: clear the screen, home the cursor, then print
//! the lines produced by `GameView`. Raw mode is owned by the key reader, so
//! lines are joined with "\r\n".

use std::io::{self, Write};

use anyhow::Result;
use tracing::warn;

use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute},
    terminal, ExecutableCommand, QueueableCommand,
};

use crate::core::GameSnapshot;
use crate::game_view::GameView;
use crate::types::DEFAULT_TERMINAL_WIDTH;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
    clear_failed: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(16 * 1024),
            clear_failed: false,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(cursor::Hide)?;
        self.flush_buf()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(Print("\r\n"))?;
        self.flush_buf()
    }

    /// Draw one game frame.
    pub fn draw(&mut self, snap: &GameSnapshot) -> Result<()> {
        let lines = self.view().render(snap);
        self.present(&lines)
    }

    /// Draw the final board with the game-over banner.
    pub fn draw_game_over(&mut self, snap: &GameSnapshot) -> Result<()> {
        let lines = self.view().render_game_over(snap);
        self.present(&lines)
    }

    fn view(&self) -> GameView {
        GameView::new(terminal_width())
    }

    fn present(&mut self, lines: &[String]) -> Result<()> {
        self.clear_screen();
        self.buf.clear();
        encode_lines_into(lines, &mut self.buf)?;
        self.flush_buf()
    }

    /// Clear and home the cursor. A failure is reported once and drawing
    /// continues without clearing.
    fn clear_screen(&mut self) {
        if self.clear_failed {
            return;
        }
        let result = self
            .stdout
            .execute(terminal::Clear(terminal::ClearType::All))
            .and_then(|out| out.execute(cursor::MoveTo(0, 0)))
            .map(|_| ());
        if let Err(err) = result {
            warn!(error = %err, "failed to clear screen");
            self.clear_failed = true;
        }
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Current terminal width, or `DEFAULT_TERMINAL_WIDTH` if it cannot be read.
pub fn terminal_width() -> u16 {
    match terminal::size() {
        Ok((cols, _)) if cols > 0 => cols,
        _ => DEFAULT_TERMINAL_WIDTH,
    }
}

/// Encode text lines into `out`, one terminal row each.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_lines_into(lines: &[String], out: &mut Vec<u8>) -> Result<()> {
    for line in lines {
        out.queue(Print(line))?;
        out.queue(Print("\r\n"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_lines_uses_crlf() {
        let lines = vec!["ab".to_string(), "cd".to_string()];
        let mut out = Vec::new();
        encode_lines_into(&lines, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "ab\r\ncd\r\n");
    }

    #[test]
    fn test_encode_no_lines() {
        let mut out = Vec::new();
        encode_lines_into(&[], &mut out).unwrap();
        assert!(out.is_empty());
    }
}
