use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::app::StatusLevel;
use crate::ui::layout;
use crate::ui::modal::ModalState;
use crate::ui::theme;
use crate::ui::{App, InputMode};

/// Bottom line: quit confirmation beats a transient status, which beats the
/// contextual key hints.
pub fn render_statusbar(f: &mut Frame, app: &App, area: Rect) {
    let content = layout::with_content_padding(area);

    if app.pending_quit {
        let line = Line::from(Span::styled(
            "Press Ctrl+C again to quit",
            theme::status_warning(),
        ));
        f.render_widget(Paragraph::new(line), content);
        return;
    }

    if let Some(status) = &app.status {
        let style = match status.level {
            StatusLevel::Info => theme::status_info(),
            StatusLevel::Warning => theme::status_warning(),
        };
        let line = Line::from(Span::styled(status.text.as_str(), style));
        f.render_widget(Paragraph::new(line), content);
        return;
    }

    let hints = hints_for(app);
    let line = Line::from(Span::styled(hints, theme::text_dim()));
    f.render_widget(Paragraph::new(line), content);
}

fn hints_for(app: &App) -> &'static str {
    match &app.modal_state {
        ModalState::CreateAgent(_) => "Tab switch field · Enter create · Esc cancel",
        ModalState::TaskPrompt(_) => "Enter run · Esc cancel",
        ModalState::FilePicker(_) => "Enter open/attach · Backspace parent dir · Esc cancel",
        ModalState::None => match app.input_mode {
            InputMode::Editing => "Enter send · Alt+Enter newline · Esc done",
            InputMode::Normal => {
                "i compose · n new agent · a attach · t task · p pause · s stop · b sidebar · q quit"
            }
        },
    }
}
