use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ui::text_editor::TextEditor;
use crate::ui::{App, InputMode};

/// Keys for the chat composer while in editing mode.
pub(super) fn handle_composer_key(app: &mut App, key: KeyEvent) {
    let has_alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Esc => app.input_mode = InputMode::Normal,
        KeyCode::Enter if has_alt => app.chat_editor.insert_newline(),
        KeyCode::Enter => app.send_composer_message(),
        _ => {
            apply_text_key(&mut app.chat_editor, key);
        }
    }
}

/// Shared text-editing bindings for the composer and modal input fields.
/// Returns false when the key meant nothing to the editor.
pub(super) fn apply_text_key(editor: &mut TextEditor, key: KeyEvent) -> bool {
    let has_ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let has_alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Char('a') if has_ctrl => editor.move_to_line_start(),
        KeyCode::Char('e') if has_ctrl => editor.move_to_line_end(),
        KeyCode::Char('k') if has_ctrl => editor.kill_to_line_end(),
        KeyCode::Left if has_alt => editor.move_word_left(),
        KeyCode::Right if has_alt => editor.move_word_right(),
        KeyCode::Left => editor.move_left(),
        KeyCode::Right => editor.move_right(),
        KeyCode::Home => editor.move_to_line_start(),
        KeyCode::End => editor.move_to_line_end(),
        KeyCode::Backspace => editor.delete_char_before(),
        KeyCode::Delete => editor.delete_char_at(),
        KeyCode::Char(c) if !has_ctrl && !has_alt => editor.insert_char(c),
        _ => return false,
    }
    true
}
