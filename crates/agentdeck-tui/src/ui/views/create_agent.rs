use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use agentdeck_core::models::AgentKind;

use crate::ui::components::{
    modal_area, render_modal_background, render_modal_header, render_modal_overlay, ModalSize,
};
use crate::ui::modal::{CreateAgentFocus, CreateAgentState};
use crate::ui::theme;

/// Render the create-agent dialog: a name field and a kind selector.
pub fn render_create_agent(f: &mut Frame, area: Rect, state: &CreateAgentState) {
    render_modal_overlay(f, area);

    let size = ModalSize {
        max_width: 56,
        height_percent: 0.45,
    };
    let popup_area = modal_area(area, &size);
    render_modal_background(f, popup_area);

    let inner_area = Rect::new(
        popup_area.x + 2,
        popup_area.y + 1,
        popup_area.width.saturating_sub(4),
        popup_area.height.saturating_sub(2),
    );

    let remaining = render_modal_header(f, inner_area, "Create New Agent", "esc");
    let area = remaining;
    let mut y = area.y;

    // Name field
    let name_label_style = if state.focus == CreateAgentFocus::Name {
        Style::default()
            .fg(theme::ACCENT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme::TEXT_MUTED)
    };
    let name_label = Paragraph::new(Line::from(vec![
        Span::styled("Name: ", name_label_style),
        Span::styled("*", theme::status_error()),
    ]));
    f.render_widget(name_label, Rect::new(area.x, y, area.width, 1));
    y += 1;

    let name_border_color = if state.focus == CreateAgentFocus::Name {
        theme::ACCENT_PRIMARY
    } else {
        theme::BORDER_INACTIVE
    };
    let name_value = if state.name.text.is_empty() {
        "Enter agent name...".to_string()
    } else {
        state.name.text.clone()
    };
    let name_style = if state.name.text.is_empty() {
        theme::text_dim()
    } else {
        theme::text_primary()
    };
    let name_input = Paragraph::new(Line::from(vec![
        Span::styled("│ ", Style::default().fg(name_border_color)),
        Span::styled(name_value, name_style),
    ]));
    f.render_widget(name_input, Rect::new(area.x, y, area.width, 1));
    let name_input_y = y;
    y += 2;

    // Kind selector
    let kind_label_style = if state.focus == CreateAgentFocus::Kind {
        Style::default()
            .fg(theme::ACCENT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme::TEXT_MUTED)
    };
    let kind_label = Paragraph::new(Line::from(Span::styled("Type: ", kind_label_style)));
    f.render_widget(kind_label, Rect::new(area.x, y, area.width, 1));
    y += 1;

    let mut kind_spans: Vec<Span> = vec![Span::styled(
        "│ ",
        Style::default().fg(if state.focus == CreateAgentFocus::Kind {
            theme::ACCENT_PRIMARY
        } else {
            theme::BORDER_INACTIVE
        }),
    )];
    for kind in AgentKind::ALL {
        let style = if kind == state.kind {
            theme::modal_item_selected()
        } else {
            theme::text_muted()
        };
        kind_spans.push(Span::styled(format!(" {} ", kind.label()), style));
        kind_spans.push(Span::raw(" "));
    }
    f.render_widget(
        Paragraph::new(Line::from(kind_spans)),
        Rect::new(area.x, y, area.width, 1),
    );
    y += 2;

    // Validation hint
    if let Some(error) = &state.error {
        let hint = Paragraph::new(Line::from(vec![
            Span::styled("* ", theme::status_error()),
            Span::styled(error.as_str(), theme::text_dim()),
        ]));
        f.render_widget(hint, Rect::new(area.x, y, area.width, 1));
    }

    if state.focus == CreateAgentFocus::Name {
        let col = state.name.text[..state.name.cursor].chars().count();
        f.set_cursor_position((area.x + 2 + col as u16, name_input_y));
    }
}
