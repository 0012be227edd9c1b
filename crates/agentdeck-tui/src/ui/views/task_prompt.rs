use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::components::{
    modal_area, render_modal_background, render_modal_header, render_modal_overlay, ModalSize,
};
use crate::ui::modal::TaskPromptState;
use crate::ui::theme;

/// Render the execute-task prompt: one free-text field.
pub fn render_task_prompt(f: &mut Frame, area: Rect, state: &TaskPromptState) {
    render_modal_overlay(f, area);

    let size = ModalSize {
        max_width: 56,
        height_percent: 0.3,
    };
    let popup_area = modal_area(area, &size);
    render_modal_background(f, popup_area);

    let inner_area = Rect::new(
        popup_area.x + 2,
        popup_area.y + 1,
        popup_area.width.saturating_sub(4),
        popup_area.height.saturating_sub(2),
    );

    let remaining = render_modal_header(f, inner_area, "Execute Task", "esc");

    let label = Paragraph::new(Line::from(Span::styled(
        "What should the agent work on?",
        theme::text_muted(),
    )));
    f.render_widget(label, Rect::new(remaining.x, remaining.y, remaining.width, 1));

    let value = if state.task.text.is_empty() {
        Span::styled("Describe the task...", theme::text_dim())
    } else {
        Span::styled(state.task.text.as_str(), theme::text_primary())
    };
    let input = Paragraph::new(Line::from(vec![
        Span::styled("│ ", Style::default().fg(theme::ACCENT_PRIMARY)),
        value,
    ]));
    let input_y = remaining.y + 1;
    f.render_widget(input, Rect::new(remaining.x, input_y, remaining.width, 1));

    let col = state.task.text[..state.task.cursor].chars().count();
    f.set_cursor_position((remaining.x + 2 + col as u16, input_y));
}
