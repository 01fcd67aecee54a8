//! UI events - semantic actions derived from key presses

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::focus::{FocusState, Region, Tab};

/// Events generated from user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Quit,
    SendRequest,

    // Region navigation
    NextRegion,
    PrevRegion,

    // Method selector
    PrevMethod,
    NextMethod,

    // Tab panel
    /// Jump to a tab, then hand the same key to whichever field gains focus
    SelectTab(Tab, KeyEvent),
    PrevHeaderField,
    NextHeaderField,
    AddHeader,
    ScrollUp,
    ScrollDown,

    /// Editing key for whichever text field has focus
    Input(KeyEvent),
}

/// Convert a key event to a UiEvent based on the current focus
pub fn key_to_ui_event(key: KeyEvent, focus: &FocusState) -> Option<UiEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => return Some(UiEvent::Quit),
            KeyCode::Char('r') if focus.body_active() => return Some(UiEvent::SendRequest),
            KeyCode::Char('n') if focus.headers_active() => return Some(UiEvent::AddHeader),
            _ => {}
        }
    }

    let event = match key.code {
        KeyCode::Tab => UiEvent::NextRegion,
        KeyCode::BackTab => UiEvent::PrevRegion,
        KeyCode::Left if focus.region == Region::Method => UiEvent::PrevMethod,
        KeyCode::Right if focus.region == Region::Method => UiEvent::NextMethod,
        KeyCode::Char(c) if focus.region == Region::Tabs && key.modifiers.is_empty() => match c {
            'h' => UiEvent::SelectTab(Tab::Headers, key),
            'b' => UiEvent::SelectTab(Tab::Body, key),
            'r' => UiEvent::SelectTab(Tab::Response, key),
            _ => UiEvent::Input(key),
        },
        KeyCode::Up if focus.headers_active() => UiEvent::PrevHeaderField,
        KeyCode::Down if focus.headers_active() => UiEvent::NextHeaderField,
        KeyCode::Up if focus.response_active() => UiEvent::ScrollUp,
        KeyCode::Down if focus.response_active() => UiEvent::ScrollDown,
        _ => UiEvent::Input(key),
    };
    Some(event)
}
