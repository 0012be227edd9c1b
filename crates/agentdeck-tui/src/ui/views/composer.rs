use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::layout::{COMPOSER_MAX_HEIGHT, COMPOSER_MIN_HEIGHT};
use crate::ui::theme;
use crate::ui::{App, InputMode};

/// Composer height tracks the editor's line count within fixed bounds.
/// +3 = padding line above, context line below, one row of breathing room.
pub fn composer_height(app: &App) -> u16 {
    let line_count = app.chat_editor.line_count().max(1);
    (line_count as u16 + 3).clamp(COMPOSER_MIN_HEIGHT, COMPOSER_MAX_HEIGHT)
}

/// Render the message input card: a colored indicator bar on the left, the
/// buffer (or placeholder) in the middle, and an @agent context line at the
/// bottom.
pub fn render_composer(f: &mut Frame, app: &App, area: Rect) {
    let is_active = app.input_mode == InputMode::Editing && app.modal_state.is_none();

    let bar_color = if is_active {
        theme::ACCENT_PRIMARY
    } else {
        theme::BORDER_INACTIVE
    };
    let text_color = if is_active {
        theme::TEXT_PRIMARY
    } else {
        theme::TEXT_MUTED
    };
    let input_bg = theme::BG_INPUT;

    let content_width = (area.width as usize).saturating_sub(5); // "│  " left, "  " right

    let blank_row = || {
        Line::from(vec![
            Span::styled("│", Style::default().fg(bar_color).bg(input_bg)),
            Span::styled(
                " ".repeat((area.width as usize).saturating_sub(1)),
                Style::default().bg(input_bg),
            ),
        ])
    };

    let mut lines: Vec<Line> = vec![blank_row()];

    if app.chat_editor.text.is_empty() {
        let placeholder = if is_active { "Type your message..." } else { "" };
        let pad = content_width.saturating_sub(placeholder.len());
        lines.push(Line::from(vec![
            Span::styled("│", Style::default().fg(bar_color).bg(input_bg)),
            Span::styled("  ", Style::default().bg(input_bg)),
            Span::styled(placeholder, theme::input_placeholder()),
            Span::styled(" ".repeat(pad + 2), Style::default().bg(input_bg)),
        ]));
    } else {
        for line in app.chat_editor.text.split('\n') {
            // Wrap long lines on char boundaries to fit the card
            let chars: Vec<char> = line.chars().collect();
            let mut start = 0;
            loop {
                let end = (start + content_width.max(1)).min(chars.len());
                let chunk: String = chars[start..end].iter().collect();
                let pad = content_width.saturating_sub(chunk.chars().count());
                lines.push(Line::from(vec![
                    Span::styled("│", Style::default().fg(bar_color).bg(input_bg)),
                    Span::styled("  ", Style::default().bg(input_bg)),
                    Span::styled(chunk, Style::default().fg(text_color).bg(input_bg)),
                    Span::styled(" ".repeat(pad + 2), Style::default().bg(input_bg)),
                ]));
                start = end;
                if start >= chars.len() {
                    break;
                }
            }
        }
    }

    // Fill so the context line lands on the card's last row
    let target_height = (area.height as usize).saturating_sub(1);
    while lines.len() < target_height {
        lines.push(blank_row());
    }
    lines.truncate(target_height);

    // Context line at the bottom: who will answer
    let agent_display = app
        .store
        .active_agent()
        .or_else(|| app.store.agents().first())
        .map(|a| format!("@{} · {} agent", a.name, a.kind.label()))
        .unwrap_or_else(|| "@nobody".to_string());
    let pad = (area.width as usize).saturating_sub(agent_display.len() + 3);
    lines.push(Line::from(vec![
        Span::styled("│", Style::default().fg(bar_color).bg(input_bg)),
        Span::styled("  ", Style::default().bg(input_bg)),
        Span::styled(
            agent_display,
            Style::default().fg(theme::ACCENT_PRIMARY).bg(input_bg),
        ),
        Span::styled(" ".repeat(pad), Style::default().bg(input_bg)),
    ]));

    let input = Paragraph::new(lines).style(Style::default().bg(input_bg));
    f.render_widget(input, area);

    if is_active {
        // Visual cursor position, accounting for the wrapping done above
        let cw = content_width.max(1);
        let rows_for = |chars: usize| if chars == 0 { 1 } else { chars.div_ceil(cw) };

        let text = app.chat_editor.text.as_str();
        let cursor = app.chat_editor.cursor.min(text.len());
        let line_start = text[..cursor].rfind('\n').map(|i| i + 1).unwrap_or(0);
        let line_end = text[cursor..]
            .find('\n')
            .map(|i| cursor + i)
            .unwrap_or(text.len());
        let col = text[line_start..cursor].chars().count();
        let line_chars = text[line_start..line_end].chars().count();

        let mut row = 0usize;
        if line_start > 0 {
            for line in text[..line_start - 1].split('\n') {
                row += rows_for(line.chars().count());
            }
        }
        // Cursor at the very end of a fully wrapped row stays on that row
        let row_in_line = (col / cw).min(rows_for(line_chars) - 1);
        row += row_in_line;
        let visual_col = col - row_in_line * cw;

        // Keep the cursor inside the card even when the buffer overflows it
        let row = row.min((area.height as usize).saturating_sub(2));

        f.set_cursor_position((
            area.x + visual_col as u16 + 3, // +3 for "│  "
            area.y + row as u16 + 1,        // +1 for top padding
        ));
    }
}
