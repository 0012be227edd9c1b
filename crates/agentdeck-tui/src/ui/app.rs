use std::path::PathBuf;

use tracing::{info, warn};

use agentdeck_core::{ConversationStore, CoreConfig};

use crate::picker;
use crate::ui::animation::AnimationClock;
use crate::ui::modal::{CreateAgentState, FilePickerState, ModalState, TaskPromptState};
use crate::ui::text_editor::TextEditor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// Transient status-bar message; expires after a few seconds of ticks
pub struct StatusLine {
    pub text: String,
    pub level: StatusLevel,
    ttl_ticks: u16,
}

/// How many ticks a status message stays visible (~5s at 10fps)
const STATUS_TTL_TICKS: u16 = 50;

/// Top-level application state: the conversation store plus everything the
/// terminal front end needs to draw and route input. All store mutation goes
/// through the store's named operations.
pub struct App {
    pub store: ConversationStore,
    pub config: CoreConfig,
    pub running: bool,
    /// First Ctrl+C arms this; the second one quits
    pub pending_quit: bool,
    pub input_mode: InputMode,
    pub modal_state: ModalState,
    pub sidebar_visible: bool,
    /// Index into the agent list the sidebar cursor sits on
    pub sidebar_selection: usize,
    pub chat_editor: TextEditor,
    /// Lines scrolled up from the transcript bottom; 0 = pinned to bottom
    pub scroll_offset: usize,
    pub status: Option<StatusLine>,
    pub animation: AnimationClock,
}

impl App {
    pub fn new(store: ConversationStore, config: CoreConfig) -> Self {
        Self {
            store,
            config,
            running: true,
            pending_quit: false,
            input_mode: InputMode::Normal,
            modal_state: ModalState::None,
            sidebar_visible: true,
            sidebar_selection: 0,
            chat_editor: TextEditor::new(),
            scroll_offset: 0,
            status: None,
            animation: AnimationClock::new(),
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Advance per-frame state: the spinner and status expiry
    pub fn tick(&mut self) {
        self.animation.tick();
        if let Some(status) = &mut self.status {
            status.ttl_ticks = status.ttl_ticks.saturating_sub(1);
            if status.ttl_ticks == 0 {
                self.status = None;
            }
        }
    }

    pub fn set_status(&mut self, text: &str) {
        self.status = Some(StatusLine {
            text: text.to_string(),
            level: StatusLevel::Info,
            ttl_ticks: STATUS_TTL_TICKS,
        });
    }

    pub fn set_warning(&mut self, text: &str) {
        self.status = Some(StatusLine {
            text: text.to_string(),
            level: StatusLevel::Warning,
            ttl_ticks: STATUS_TTL_TICKS,
        });
    }

    // -------------------------------------------------------------------------
    // Sidebar
    // -------------------------------------------------------------------------

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_visible = !self.sidebar_visible;
    }

    pub fn select_prev_agent(&mut self) {
        self.sidebar_selection = self.sidebar_selection.saturating_sub(1);
    }

    pub fn select_next_agent(&mut self) {
        if self.sidebar_selection + 1 < self.store.agents().len() {
            self.sidebar_selection += 1;
        }
    }

    /// Make the agent under the sidebar cursor the active one
    pub fn activate_selected_agent(&mut self) {
        let Some(agent) = self.store.agents().get(self.sidebar_selection) else {
            return;
        };
        let (id, name) = (agent.id.clone(), agent.name.clone());
        if self.store.set_active_agent(&id) {
            info!(agent_id = %id, "active agent changed");
            self.set_status(&format!("Talking to \"{}\"", name));
        }
    }

    // -------------------------------------------------------------------------
    // Scrolling (0 = pinned to bottom; render clamps against content height)
    // -------------------------------------------------------------------------

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_add(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = 0;
    }

    /// Called during chat rendering once the real maximum is known
    pub fn clamp_scroll(&mut self, max_offset: usize) {
        self.scroll_offset = self.scroll_offset.min(max_offset);
    }

    // -------------------------------------------------------------------------
    // Modals
    // -------------------------------------------------------------------------

    pub fn open_create_agent(&mut self) {
        self.modal_state = ModalState::CreateAgent(CreateAgentState::new());
    }

    pub fn open_task_prompt(&mut self) {
        self.modal_state = ModalState::TaskPrompt(TaskPromptState::default());
    }

    /// Open the attachment picker. A directory that cannot be read surfaces
    /// as a status warning and the picker simply does not open.
    pub fn open_file_picker(&mut self) {
        let dir = self
            .config
            .start_dir
            .clone()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        match picker::list_dir(&dir) {
            Ok(entries) => {
                self.modal_state = ModalState::FilePicker(FilePickerState::new(dir, entries));
            }
            Err(e) => {
                warn!(error = %e, "attachment picker failed to open");
                self.set_warning(&e.to_string());
            }
        }
    }

    pub fn close_modal(&mut self) {
        self.modal_state = ModalState::None;
    }

    /// Submit the create-agent form. Blank names never reach the store.
    pub fn submit_create_agent(&mut self) {
        let ModalState::CreateAgent(state) = &mut self.modal_state else {
            return;
        };
        let name = state.name.text.trim().to_string();
        if name.is_empty() {
            state.error = Some("Agent name is required".to_string());
            return;
        }
        let kind = state.kind;

        let agent = self.store.create_agent(&name, kind);
        self.store.set_active_agent(&agent.id);
        self.sidebar_selection = self.store.agents().len() - 1;
        self.close_modal();
        self.scroll_to_bottom();
        self.set_status(&format!("Agent \"{}\" is ready", name));
    }

    pub fn submit_task_prompt(&mut self) {
        let ModalState::TaskPrompt(state) = &mut self.modal_state else {
            return;
        };
        let task = state.task.text.trim().to_string();
        if !task.is_empty() {
            self.store.execute_task(&task);
            self.scroll_to_bottom();
        }
        self.close_modal();
    }

    /// Enter on a picker row: descend into directories, attach files.
    pub fn confirm_picker_selection(&mut self) {
        let ModalState::FilePicker(state) = &self.modal_state else {
            return;
        };
        let Some(entry) = state.selected_entry().cloned() else {
            return;
        };

        if entry.is_dir {
            self.picker_change_dir(entry.path);
        } else {
            let attachment = picker::attachment_from_entry(&entry);
            self.store.attach_file(attachment);
            self.close_modal();
            self.scroll_to_bottom();
            self.set_status(&format!("Attached {}", entry.name));
        }
    }

    /// Move the picker up to the parent directory
    pub fn picker_go_up(&mut self) {
        let parent = match &self.modal_state {
            ModalState::FilePicker(state) => state.dir.parent().map(|p| p.to_path_buf()),
            _ => return,
        };
        if let Some(parent) = parent {
            self.picker_change_dir(parent);
        }
    }

    fn picker_change_dir(&mut self, dir: PathBuf) {
        match picker::list_dir(&dir) {
            Ok(entries) => {
                if let ModalState::FilePicker(state) = &mut self.modal_state {
                    *state = FilePickerState::new(dir, entries);
                }
            }
            Err(e) => {
                // Stay where we are; the failure is only worth a warning
                warn!(error = %e, "picker directory change failed");
                self.set_warning(&e.to_string());
            }
        }
    }

    // -------------------------------------------------------------------------
    // Composer
    // -------------------------------------------------------------------------

    /// Send the composer buffer as a user message (whitespace-only is a no-op)
    pub fn send_composer_message(&mut self) {
        if self.chat_editor.is_empty() {
            return;
        }
        let text = self.chat_editor.take();
        self.store.send_message(text.trim(), Vec::new());
        self.scroll_to_bottom();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agentdeck_core::models::MessageKind;
    use tempfile::tempdir;

    fn app() -> App {
        let config = CoreConfig::default();
        let store = ConversationStore::new(&config);
        App::new(store, config)
    }

    #[test]
    fn test_new_app_defaults() {
        let app = app();
        assert!(app.running);
        assert!(app.sidebar_visible);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert!(app.modal_state.is_none());
        assert_eq!(app.scroll_offset, 0);
    }

    #[test]
    fn test_activate_selected_agent() {
        let mut app = app();
        app.sidebar_selection = 2;
        app.activate_selected_agent();
        assert_eq!(app.store.active_agent().map(|a| a.id.as_str()), Some("3"));
        assert!(app.status.is_some());
    }

    #[test]
    fn test_sidebar_selection_clamps_at_ends() {
        let mut app = app();
        app.select_prev_agent();
        assert_eq!(app.sidebar_selection, 0);
        for _ in 0..10 {
            app.select_next_agent();
        }
        assert_eq!(app.sidebar_selection, app.store.agents().len() - 1);
    }

    #[test]
    fn test_submit_create_agent_rejects_blank_name() {
        let mut app = app();
        app.open_create_agent();
        app.submit_create_agent();

        assert_eq!(app.store.agents().len(), 3);
        match &app.modal_state {
            ModalState::CreateAgent(state) => assert!(state.error.is_some()),
            _ => panic!("modal should stay open on validation failure"),
        }
    }

    #[test]
    fn test_submit_create_agent_creates_and_activates() {
        let mut app = app();
        app.open_create_agent();
        if let ModalState::CreateAgent(state) = &mut app.modal_state {
            state.name.handle_paste("Archivist");
        }
        app.submit_create_agent();

        assert!(app.modal_state.is_none());
        assert_eq!(app.store.agents().len(), 4);
        assert_eq!(app.store.active_agent().map(|a| a.name.as_str()), Some("Archivist"));
        assert_eq!(app.sidebar_selection, 3);
    }

    #[tokio::test]
    async fn test_send_composer_message_appends_and_clears() {
        let mut app = app();
        app.chat_editor.handle_paste("  hello there  ");
        app.send_composer_message();

        assert!(app.chat_editor.text.is_empty());
        let last = app.store.messages().last().unwrap();
        assert_eq!(last.kind, MessageKind::User);
        assert_eq!(last.content, "hello there");
    }

    #[test]
    fn test_send_composer_ignores_whitespace_only() {
        let mut app = app();
        app.chat_editor.handle_paste("   \n ");
        app.send_composer_message();
        assert_eq!(app.store.messages().len(), 1);
    }

    #[test]
    fn test_open_file_picker_warns_on_unreadable_dir() {
        let config = CoreConfig::default().with_start_dir("/definitely/not/a/dir");
        let store = ConversationStore::new(&config);
        let mut app = App::new(store, config);

        app.open_file_picker();
        assert!(app.modal_state.is_none());
        let status = app.status.as_ref().expect("warning status expected");
        assert_eq!(status.level, StatusLevel::Warning);
        // Picker failures never touch the transcript
        assert_eq!(app.store.messages().len(), 1);
    }

    #[test]
    fn test_picker_attach_flow() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"hi").unwrap();

        let config = CoreConfig::default().with_start_dir(dir.path());
        let store = ConversationStore::new(&config);
        let mut app = App::new(store, config);

        app.open_file_picker();
        assert!(matches!(app.modal_state, ModalState::FilePicker(_)));
        app.confirm_picker_selection();

        assert!(app.modal_state.is_none());
        let last = app.store.messages().last().unwrap();
        assert_eq!(last.content, "Attached file: notes.txt");
        assert_eq!(last.attachments.len(), 1);
    }

    #[test]
    fn test_task_prompt_submits_to_store() {
        let mut app = app();
        app.open_task_prompt();
        if let ModalState::TaskPrompt(state) = &mut app.modal_state {
            state.task.handle_paste("summarize inbox");
        }
        app.submit_task_prompt();

        assert!(app.modal_state.is_none());
        let last = app.store.messages().last().unwrap();
        assert_eq!(last.content, "Executing task: summarize inbox");
    }

    #[test]
    fn test_status_expires_after_ttl() {
        let mut app = app();
        app.set_status("hello");
        for _ in 0..STATUS_TTL_TICKS {
            app.tick();
        }
        assert!(app.status.is_none());
    }
}
