use std::path::PathBuf;

use agentdeck_core::models::AgentKind;

use crate::picker::PickerEntry;
use crate::ui::text_editor::TextEditor;

/// Which dialog currently sits on top of the chat screen, if any.
/// Modal input is handled before anything else, so at most one is open.
pub enum ModalState {
    None,
    CreateAgent(CreateAgentState),
    TaskPrompt(TaskPromptState),
    FilePicker(FilePickerState),
}

impl ModalState {
    pub fn is_none(&self) -> bool {
        matches!(self, ModalState::None)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateAgentFocus {
    Name,
    Kind,
}

/// Form state for the create-agent dialog
pub struct CreateAgentState {
    pub name: TextEditor,
    pub kind: AgentKind,
    pub focus: CreateAgentFocus,
    /// Validation message; empty-name rejection lives here, not in the store
    pub error: Option<String>,
}

impl CreateAgentState {
    pub fn new() -> Self {
        Self {
            name: TextEditor::new(),
            kind: AgentKind::Research,
            focus: CreateAgentFocus::Name,
            error: None,
        }
    }
}

impl Default for CreateAgentState {
    fn default() -> Self {
        Self::new()
    }
}

/// Free-text prompt for the execute-task operation
#[derive(Default)]
pub struct TaskPromptState {
    pub task: TextEditor,
}

/// Directory browser backing the attach-file flow
pub struct FilePickerState {
    pub dir: PathBuf,
    pub entries: Vec<PickerEntry>,
    pub selected: usize,
}

impl FilePickerState {
    pub fn new(dir: PathBuf, entries: Vec<PickerEntry>) -> Self {
        Self {
            dir,
            entries,
            selected: 0,
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.entries.len() {
            self.selected += 1;
        }
    }

    pub fn selected_entry(&self) -> Option<&PickerEntry> {
        self.entries.get(self.selected)
    }
}
