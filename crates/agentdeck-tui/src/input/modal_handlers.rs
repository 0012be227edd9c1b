use crossterm::event::{KeyCode, KeyEvent};

use crate::ui::modal::{CreateAgentFocus, ModalState};
use crate::ui::App;

use super::editor_handlers::apply_text_key;

/// Route a key to whichever modal is open. Returns true when a modal
/// consumed the event.
pub(super) fn handle_modal_key(app: &mut App, key: KeyEvent) -> bool {
    if matches!(app.modal_state, ModalState::CreateAgent(_)) {
        handle_create_agent_key(app, key);
        return true;
    }
    if matches!(app.modal_state, ModalState::TaskPrompt(_)) {
        handle_task_prompt_key(app, key);
        return true;
    }
    if matches!(app.modal_state, ModalState::FilePicker(_)) {
        handle_file_picker_key(app, key);
        return true;
    }
    false
}

fn handle_create_agent_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.close_modal();
            return;
        }
        KeyCode::Enter => {
            app.submit_create_agent();
            return;
        }
        _ => {}
    }

    let ModalState::CreateAgent(state) = &mut app.modal_state else {
        return;
    };

    match key.code {
        KeyCode::Tab | KeyCode::BackTab => {
            state.focus = match state.focus {
                CreateAgentFocus::Name => CreateAgentFocus::Kind,
                CreateAgentFocus::Kind => CreateAgentFocus::Name,
            };
        }
        _ => match state.focus {
            CreateAgentFocus::Name => {
                if apply_text_key(&mut state.name, key) {
                    state.error = None;
                }
            }
            CreateAgentFocus::Kind => match key.code {
                KeyCode::Left | KeyCode::Up => state.kind = state.kind.prev(),
                KeyCode::Right | KeyCode::Down | KeyCode::Char(' ') => {
                    state.kind = state.kind.next()
                }
                _ => {}
            },
        },
    }
}

fn handle_task_prompt_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_modal(),
        KeyCode::Enter => app.submit_task_prompt(),
        _ => {
            if let ModalState::TaskPrompt(state) = &mut app.modal_state {
                apply_text_key(&mut state.task, key);
            }
        }
    }
}

fn handle_file_picker_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_modal(),
        KeyCode::Enter => app.confirm_picker_selection(),
        KeyCode::Backspace | KeyCode::Left => app.picker_go_up(),
        KeyCode::Up | KeyCode::Char('k') => {
            if let ModalState::FilePicker(state) = &mut app.modal_state {
                state.select_prev();
            }
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if let ModalState::FilePicker(state) = &mut app.modal_state {
                state.select_next();
            }
        }
        _ => {}
    }
}
