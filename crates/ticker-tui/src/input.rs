use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    TogglePause,     // Space: stop/resume periodic updates
    NextValue,       // 'n': push new values right away
    CycleDirection,  // 'd': any -> up -> down on the last ticker
    ToggleAnimation, // 'a': animate value changes or jump
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Esc, _) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        (KeyCode::Char(' '), _) => Action::TogglePause,
        (KeyCode::Char('n'), KeyModifiers::NONE) => Action::NextValue,
        (KeyCode::Char('d'), KeyModifiers::NONE) => Action::CycleDirection,
        (KeyCode::Char('a'), KeyModifiers::NONE) => Action::ToggleAnimation,

        _ => Action::None,
    }
}
