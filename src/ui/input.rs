use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || key.code == KeyCode::Esc {
        app.request_quit();
        return;
    }

    // Mode switches are allowed mid-request; they supersede it.
    match key.code {
        KeyCode::Tab => {
            app.next_mode();
            return;
        }
        KeyCode::BackTab => {
            app.previous_mode();
            return;
        }
        _ => {}
    }

    if app.is_busy() {
        return;
    }

    if is_ctrl_char(key, 's') {
        app.submit();
        return;
    }
    if is_ctrl_char(key, 'l') {
        app.cycle_length();
        return;
    }
    if is_ctrl_char(key, 'x') {
        app.clear();
        return;
    }
    if is_ctrl_char(key, 'y') {
        app.copy_summary();
        return;
    }

    match key.code {
        KeyCode::Enter => app.enter(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.type_char(ch)
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
