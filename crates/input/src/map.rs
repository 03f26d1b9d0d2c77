//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a raw keystroke to a game action.
///
/// Returns `None` for unbound characters, which the loop ignores.
pub fn map_key(key: char) -> Option<GameAction> {
    match key {
        // Movement
        'a' | 'A' | 'h' | 'H' => Some(GameAction::MoveLeft),
        'd' | 'D' | 'l' | 'L' => Some(GameAction::MoveRight),
        's' | 'S' | 'j' | 'J' => Some(GameAction::SoftDrop),

        // Rotation
        'w' | 'W' | 'k' | 'K' => Some(GameAction::Rotate),

        // Actions
        'f' | 'F' => Some(GameAction::HardDrop),
        'q' | 'Q' => Some(GameAction::BoardBackward),
        'e' | 'E' => Some(GameAction::BoardForward),

        // Exit
        'x' | 'X' => Some(GameAction::Exit),

        _ => None,
    }
}

/// Decode a crossterm key event into the raw character the loop consumes.
///
/// Arrow keys decode to their vim equivalents and Ctrl+C decodes to the exit key.
pub fn decode_key(key: KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('C')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            Some('x')
        }
        KeyCode::Char(c) => Some(c),
        KeyCode::Left => Some('h'),
        KeyCode::Right => Some('l'),
        KeyCode::Down => Some('j'),
        KeyCode::Up => Some('k'),
        _ => None,
    }
}
