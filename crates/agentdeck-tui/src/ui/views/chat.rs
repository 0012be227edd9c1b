use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use agentdeck_core::models::{Message, MessageKind};

use crate::ui::format::{format_clock_time, human_size, wrap_text};
use crate::ui::layout;
use crate::ui::theme;
use crate::ui::App;

/// Render the transcript. Builds every message into owned lines first, then
/// clamps the scroll offset against the real content height and draws the
/// visible window.
pub fn render_chat(f: &mut Frame, app: &mut App, area: Rect) {
    let content = layout::with_content_padding(area);
    let width = content.width as usize;

    let mut lines: Vec<Line<'static>> = Vec::new();
    for message in app.store.messages() {
        push_message_lines(&mut lines, app, message, width);
    }

    if app.store.has_pending_reply() {
        let name = app
            .store
            .active_agent()
            .or_else(|| app.store.agents().first())
            .map(|a| a.name.clone())
            .unwrap_or_else(|| "agent".to_string());
        lines.push(Line::from(Span::styled(
            format!("{} {} is typing...", app.animation.spinner_char(), name),
            theme::typing_indicator(),
        )));
    }

    let total = lines.len();
    let visible = content.height as usize;
    app.clamp_scroll(total.saturating_sub(visible));
    let skip = total.saturating_sub(visible + app.scroll_offset);

    let transcript = Paragraph::new(lines).scroll((skip as u16, 0));
    f.render_widget(transcript, content);
}

fn push_message_lines(lines: &mut Vec<Line<'static>>, app: &App, message: &Message, width: usize) {
    match message.kind {
        MessageKind::System => {
            // System entries read as log lines, not speech
            for wrapped in wrap_text(&message.content, width.saturating_sub(2)) {
                lines.push(Line::from(Span::styled(
                    format!("· {}", wrapped),
                    theme::text_muted().add_modifier(Modifier::ITALIC),
                )));
            }
        }
        MessageKind::User | MessageKind::Agent => {
            let author = match message.kind {
                MessageKind::User => "You".to_string(),
                _ => message
                    .agent_id
                    .as_deref()
                    .and_then(|id| app.store.agent(id))
                    .map(|a| a.name.clone())
                    .unwrap_or_else(|| "agent".to_string()),
            };

            lines.push(Line::from(vec![
                Span::styled(
                    author,
                    Style::default()
                        .fg(theme::message_kind_color(message.kind))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" · {}", format_clock_time(message.timestamp)),
                    theme::text_dim(),
                ),
            ]));

            for wrapped in wrap_text(&message.content, width) {
                lines.push(Line::from(Span::styled(wrapped, theme::text_primary())));
            }

            for attachment in &message.attachments {
                lines.push(Line::from(vec![
                    Span::styled("  ⎘ ", Style::default().fg(theme::ACCENT_SPECIAL)),
                    Span::styled(
                        attachment.name.clone(),
                        Style::default().fg(theme::ACCENT_SPECIAL),
                    ),
                    Span::styled(
                        format!(" ({}, {})", attachment.kind.label(), human_size(attachment.size)),
                        theme::text_dim(),
                    ),
                ]));
            }
        }
    }

    lines.push(Line::from(""));
}
