use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::format::truncate_with_ellipsis;
use crate::ui::theme;
use crate::ui::App;

/// Rows a single agent occupies: name line, detail line, spacing
const ROWS_PER_AGENT: usize = 3;

/// Render the agent sidebar: one entry per agent with a kind glyph, name,
/// and status indicator, plus a create hint pinned to the bottom.
pub fn render_sidebar(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(theme::border_inactive())
        .style(Style::default().bg(theme::BG_SIDEBAR));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    let content_width = (inner.width as usize).saturating_sub(2);

    lines.push(Line::from(vec![
        Span::styled("AI AGENTS ", theme::text_muted()),
        Span::styled(
            format!("{}", app.store.agents().len()),
            theme::text_dim(),
        ),
    ]));
    lines.push(Line::from(""));

    if app.store.agents().is_empty() {
        lines.push(Line::from(Span::styled("No Agents Yet", theme::text_bold())));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Create your first AI agent to",
            theme::text_muted(),
        )));
        lines.push(Line::from(Span::styled(
            "get started.",
            theme::text_muted(),
        )));
    } else {
        let header_rows = lines.len();
        let visible_agents =
            ((inner.height as usize).saturating_sub(header_rows + 1) / ROWS_PER_AGENT).max(1);
        let start = app
            .sidebar_selection
            .saturating_sub(visible_agents.saturating_sub(1));

        let active_id = app.store.active_agent().map(|a| a.id.clone());

        for (idx, agent) in app
            .store
            .agents()
            .iter()
            .enumerate()
            .skip(start)
            .take(visible_agents)
        {
            let is_selected = idx == app.sidebar_selection;
            let is_active = active_id.as_deref() == Some(agent.id.as_str());

            let row_bg = if is_selected {
                Style::default().bg(theme::BG_SELECTED)
            } else {
                Style::default().bg(theme::BG_SIDEBAR)
            };

            let name_style = if is_active {
                Style::default()
                    .fg(theme::ACCENT_PRIMARY)
                    .add_modifier(Modifier::BOLD)
            } else {
                theme::text_primary()
            };

            let marker = if is_selected { "▸ " } else { "  " };
            let name = truncate_with_ellipsis(&agent.name, content_width.saturating_sub(4));
            lines.push(
                Line::from(vec![
                    Span::styled(marker, theme::text_dim()),
                    Span::styled(format!("{} ", theme::agent_kind_glyph(agent.kind)), theme::agent_name()),
                    Span::styled(name, name_style),
                ])
                .style(row_bg),
            );

            lines.push(
                Line::from(vec![
                    Span::raw("    "),
                    Span::styled(format!("{} agent · ", agent.kind.label()), theme::text_muted()),
                    Span::styled(
                        "●",
                        Style::default().fg(theme::agent_status_color(agent.status)),
                    ),
                    Span::styled(format!(" {}", agent.status.label()), theme::text_muted()),
                ])
                .style(row_bg),
            );

            lines.push(Line::from(""));
        }
    }

    let list = Paragraph::new(lines).style(Style::default().bg(theme::BG_SIDEBAR));
    f.render_widget(list, inner);

    // Create hint pinned to the bottom row
    if inner.height > 1 {
        let hint_area = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);
        let hint = Line::from(vec![
            Span::styled("n", theme::status_info()),
            Span::styled(" create new agent", theme::text_dim()),
        ]);
        f.render_widget(
            Paragraph::new(hint).style(Style::default().bg(theme::BG_SIDEBAR)),
            hint_area,
        );
    }
}
