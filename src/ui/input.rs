use crate::host::ControlId;
use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Down | KeyCode::Tab => app.focus_next(),
        KeyCode::Up | KeyCode::BackTab => app.focus_prev(),
        KeyCode::Left | KeyCode::Char('-') => app.activate(ControlId::Decrement),
        KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => {
            app.activate(ControlId::Increment)
        }
        KeyCode::Char('r') => {
            if !app.dispatch_unrecognized() {
                tracing::debug!("focused counter has no named actions");
            }
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
