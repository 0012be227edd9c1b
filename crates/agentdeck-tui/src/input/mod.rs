//! Input handling - keyboard event processing for the TUI application.
//!
//! Routing order mirrors the render stack: an open modal swallows every key
//! first, then the current input mode decides between normal-mode commands
//! and composer editing.

mod editor_handlers;
mod modal_handlers;
mod view_handlers;

use crossterm::event::KeyEvent;

use crate::ui::{App, InputMode};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if modal_handlers::handle_modal_key(app, key) {
        return;
    }

    match app.input_mode {
        InputMode::Normal => view_handlers::handle_normal_key(app, key),
        InputMode::Editing => editor_handlers::handle_composer_key(app, key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::modal::ModalState;
    use agentdeck_core::models::MessageKind;
    use agentdeck_core::{ConversationStore, CoreConfig};
    use crossterm::event::{KeyCode, KeyModifiers};

    fn app() -> App {
        let config = CoreConfig::default();
        let store = ConversationStore::new(&config);
        App::new(store, config)
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_normal_mode_quit() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }

    #[test]
    fn test_i_enters_editing_and_esc_leaves() {
        let mut app = app();
        press(&mut app, KeyCode::Char('i'));
        assert_eq!(app.input_mode, InputMode::Editing);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[tokio::test]
    async fn test_composer_typing_and_send() {
        let mut app = app();
        press(&mut app, KeyCode::Char('i'));
        type_str(&mut app, "hi agent");
        assert_eq!(app.chat_editor.text, "hi agent");

        press(&mut app, KeyCode::Enter);
        assert!(app.chat_editor.text.is_empty());
        let last = app.store.messages().last().unwrap();
        assert_eq!(last.kind, MessageKind::User);
        assert_eq!(last.content, "hi agent");
    }

    #[test]
    fn test_alt_enter_inserts_newline() {
        let mut app = app();
        press(&mut app, KeyCode::Char('i'));
        type_str(&mut app, "one");
        handle_key(&mut app, KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT));
        type_str(&mut app, "two");
        assert_eq!(app.chat_editor.text, "one\ntwo");
        // Nothing was sent
        assert_eq!(app.store.messages().len(), 1);
    }

    #[test]
    fn test_create_agent_flow_via_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('n'));
        assert!(matches!(app.modal_state, ModalState::CreateAgent(_)));

        type_str(&mut app, "Scout");
        // Tab to the kind selector and cycle once
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);

        assert!(app.modal_state.is_none());
        let created = app.store.agents().last().unwrap();
        assert_eq!(created.name, "Scout");
        assert_eq!(created.kind.label(), "analysis");
    }

    #[test]
    fn test_create_agent_esc_cancels() {
        let mut app = app();
        press(&mut app, KeyCode::Char('n'));
        type_str(&mut app, "half-typed");
        press(&mut app, KeyCode::Esc);
        assert!(app.modal_state.is_none());
        assert_eq!(app.store.agents().len(), 3);
    }

    #[test]
    fn test_task_prompt_flow_via_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('t'));
        type_str(&mut app, "sort the backlog");
        press(&mut app, KeyCode::Enter);

        assert!(app.modal_state.is_none());
        let last = app.store.messages().last().unwrap();
        assert_eq!(last.content, "Executing task: sort the backlog");
    }

    #[test]
    fn test_pause_and_stop_log_entries() {
        let mut app = app();
        press(&mut app, KeyCode::Char('p'));
        press(&mut app, KeyCode::Char('s'));

        let tail: Vec<&str> = app
            .store
            .messages()
            .iter()
            .rev()
            .take(2)
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(tail, ["Task stopped", "Agent paused"]);
    }

    #[test]
    fn test_sidebar_navigation_and_activation() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.store.active_agent().map(|a| a.id.as_str()), Some("3"));
    }

    #[test]
    fn test_sidebar_toggle_changes_enter_behavior() {
        let mut app = app();
        press(&mut app, KeyCode::Char('b'));
        assert!(!app.sidebar_visible);
        // With the sidebar hidden, Enter starts composing instead
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Editing);
    }
}
