use crossterm::event::{KeyCode, KeyEvent};

use crate::ui::{App, InputMode};

/// Normal-mode keymap: navigation plus the agent/task operations.
pub(super) fn handle_normal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('i') => app.input_mode = InputMode::Editing,
        KeyCode::Enter => {
            if app.sidebar_visible {
                app.activate_selected_agent();
            } else {
                app.input_mode = InputMode::Editing;
            }
        }
        KeyCode::Char('b') => app.toggle_sidebar(),
        KeyCode::Up | KeyCode::Char('k') => {
            if app.sidebar_visible {
                app.select_prev_agent();
            } else {
                app.scroll_up(1);
            }
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if app.sidebar_visible {
                app.select_next_agent();
            } else {
                app.scroll_down(1);
            }
        }
        KeyCode::Char('n') => app.open_create_agent(),
        KeyCode::Char('a') => app.open_file_picker(),
        KeyCode::Char('t') => app.open_task_prompt(),
        KeyCode::Char('p') => {
            app.store.pause_agent();
            app.scroll_to_bottom();
        }
        KeyCode::Char('s') => {
            app.store.stop_task();
            app.scroll_to_bottom();
        }
        KeyCode::PageUp => app.scroll_up(10),
        KeyCode::PageDown => app.scroll_down(10),
        _ => {}
    }
}
