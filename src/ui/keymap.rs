//! Key translation for the formula bar
//!
//! Maps raw crossterm key events onto semantic `AppEvent`s. This is the
//! translation layer between the terminal and the App core; the core
//! never sees crossterm types.

use crate::app::AppEvent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn key_to_app_event(key: KeyEvent) -> AppEvent {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('q') | KeyCode::Char('c') => AppEvent::Quit,
            KeyCode::Char('r') => AppEvent::Retry,
            _ => AppEvent::None,
        };
    }

    match key.code {
        KeyCode::Char(c) => AppEvent::Input(c),
        KeyCode::Backspace => AppEvent::DeleteBack,
        KeyCode::Enter => AppEvent::Commit,
        // The terminal has no "outside click"; Tab plays the role of
        // leaving the widget and triggers evaluation
        KeyCode::Tab => AppEvent::FocusLost,
        KeyCode::Esc => AppEvent::Dismiss,
        KeyCode::Down => AppEvent::HighlightNext,
        KeyCode::Up => AppEvent::HighlightPrev,
        _ => AppEvent::None,
    }
}
