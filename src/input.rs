use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::direction::Direction;
use crate::session::GameAction;

/// Maps one key press to a game action.
///
/// Arrows and WASD turn, Space/P pause, R restarts, Q/Esc/Ctrl-C quit.
#[must_use]
pub fn action_for_key(key: KeyEvent) -> Option<GameAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c')).then_some(GameAction::Quit);
    }

    let action = match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => GameAction::Turn(Direction::Up),
        KeyCode::Down | KeyCode::Char('s' | 'S') => GameAction::Turn(Direction::Down),
        KeyCode::Left | KeyCode::Char('a' | 'A') => GameAction::Turn(Direction::Left),
        KeyCode::Right | KeyCode::Char('d' | 'D') => GameAction::Turn(Direction::Right),
        KeyCode::Char(' ' | 'p' | 'P') => GameAction::Pause,
        KeyCode::Char('r' | 'R') => GameAction::Restart,
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => GameAction::Quit,
        _ => return None,
    };

    Some(action)
}

/// Waits up to `timeout` for a key press and maps it.
pub fn poll_action(timeout: Duration) -> io::Result<Option<GameAction>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) => Ok(action_for_key(key)),
        _ => Ok(None),
    }
}
