//! Translation from crossterm key events to the numeric input codes the
//! keymap consumes. Embeddings that read keys from a terminal can feed the
//! result straight into [`Navigator::handle_key`](crate::Navigator::handle_key).

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::config::{CODE_DOWN, CODE_ENTER, CODE_LEFT, CODE_RIGHT, CODE_UP};

/// Translate a crossterm key event into an input code. Key releases and keys
/// with no code mapping return None. Printable ASCII characters map to their
/// uppercase code, matching the codes a keyboard event source reports for
/// letter keys.
pub fn key_code(event: &KeyEvent) -> Option<u32> {
    if event.kind == KeyEventKind::Release {
        return None;
    }
    match event.code {
        KeyCode::Up => Some(CODE_UP),
        KeyCode::Down => Some(CODE_DOWN),
        KeyCode::Left => Some(CODE_LEFT),
        KeyCode::Right => Some(CODE_RIGHT),
        KeyCode::Enter => Some(CODE_ENTER),
        KeyCode::Char(c) if c.is_ascii_alphanumeric() || c == ' ' => {
            Some(c.to_ascii_uppercase() as u32)
        }
        _ => None,
    }
}
