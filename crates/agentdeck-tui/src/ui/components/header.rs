use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::layout;
use crate::ui::theme;
use crate::ui::App;

/// Top bar: app title on the left, the active agent on the right.
pub fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let content = layout::with_content_padding(area);

    let title = "AI Agent Manager";

    let (agent_label, status_span) = match app.store.active_agent() {
        Some(agent) => (
            format!("{} {} ", theme::agent_kind_glyph(agent.kind), agent.name),
            Span::styled(
                format!("● {}", agent.status.label()),
                Style::default().fg(theme::agent_status_color(agent.status)),
            ),
        ),
        None => (
            String::new(),
            Span::styled("no agent selected", theme::text_dim()),
        ),
    };

    let right_len = agent_label.len() + status_span.content.len();
    let spacing = (content.width as usize).saturating_sub(title.len() + right_len);

    let line = Line::from(vec![
        Span::styled(title, theme::text_bold()),
        Span::raw(" ".repeat(spacing)),
        Span::styled(agent_label, theme::agent_name()),
        status_span,
    ]);

    f.render_widget(Paragraph::new(line), content);

    // Thin separator under the title line
    if area.height > 1 {
        let rule = "─".repeat(area.width as usize);
        let rule_area = Rect::new(area.x, area.y + 1, area.width, 1);
        f.render_widget(
            Paragraph::new(rule).style(theme::border_inactive()),
            rule_area,
        );
    }
}
