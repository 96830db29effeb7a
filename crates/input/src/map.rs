//! Key mapping from terminal events to animation control.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Check if key should stop the animation.
///
/// Raw mode delivers Ctrl+C as an ordinary key event, so it is matched here
/// alongside `q` and Esc.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL))
}
