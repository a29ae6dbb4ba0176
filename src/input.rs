//! Keyboard mapping for the terminal front end.

use crate::session::Session;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::Rng;

/// UI-agnostic actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Space, Up, Enter or k.
    Flap,
    /// s
    Start,
    /// r
    Reset,
    /// q, Esc or Ctrl+C.
    Quit,
    /// Any other key.
    Other,
}

/// Translate a key press. Key releases map to `Other`.
pub fn map_key(key: KeyEvent) -> GameInput {
    if key.kind == KeyEventKind::Release {
        return GameInput::Other;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => GameInput::Quit,
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter | KeyCode::Char('k') => GameInput::Flap,
        KeyCode::Char('s') => GameInput::Start,
        KeyCode::Char('r') => GameInput::Reset,
        KeyCode::Char('q') | KeyCode::Esc => GameInput::Quit,
        _ => GameInput::Other,
    }
}

/// Apply an input to the session. Returns false when the player wants to quit.
pub fn apply_input<R: Rng>(session: &mut Session<R>, input: GameInput) -> bool {
    match input {
        GameInput::Flap => session.request_impulse(),
        GameInput::Start => session.start_session(),
        GameInput::Reset => session.reset_session(),
        GameInput::Quit => return false,
        GameInput::Other => {}
    }
    true
}
