use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyModifiers};

/// TUI-specific input events
pub enum TuiEvent {
    /// Request the next feed item.
    Next,
    /// Open the current item in the browser.
    Open,
    Quit,
    Resize,
}

/// Poll for an event with the given timeout.
pub fn poll_event(timeout: Duration) -> Option<TuiEvent> {
    if event::poll(timeout).unwrap() {
        match event::read().unwrap() {
            Event::Key(key_event) => {
                match (key_event.modifiers, key_event.code) {
                    (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
                    (_, KeyCode::Char('n')) | (_, KeyCode::Enter) => Some(TuiEvent::Next),
                    (_, KeyCode::Char('o')) => Some(TuiEvent::Open),
                    (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => Some(TuiEvent::Quit),
                    _ => None,
                }
            }
            Event::Resize(_, _) => Some(TuiEvent::Resize),
            _ => None,
        }
    } else {
        None
    }
}
