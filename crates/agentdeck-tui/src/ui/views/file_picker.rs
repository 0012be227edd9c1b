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
use crate::ui::format::{human_size, truncate_with_ellipsis};
use crate::ui::modal::FilePickerState;
use crate::ui::theme;

/// Render the attachment picker: the current directory plus its entries,
/// directories first.
pub fn render_file_picker(f: &mut Frame, area: Rect, state: &FilePickerState) {
    render_modal_overlay(f, area);

    let popup_area = modal_area(area, &ModalSize::default());
    render_modal_background(f, popup_area);

    let inner_area = Rect::new(
        popup_area.x + 2,
        popup_area.y + 1,
        popup_area.width.saturating_sub(4),
        popup_area.height.saturating_sub(2),
    );

    let remaining = render_modal_header(f, inner_area, "Attach File", "esc");

    // Current directory, truncated from the left so the tail stays visible
    let dir_display = state.dir.display().to_string();
    let max = remaining.width as usize;
    let dir_line = if dir_display.chars().count() > max && max > 3 {
        let tail: String = dir_display
            .chars()
            .rev()
            .take(max - 3)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        format!("...{}", tail)
    } else {
        dir_display
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(dir_line, theme::text_muted()))),
        Rect::new(remaining.x, remaining.y, remaining.width, 1),
    );

    let list_area = Rect::new(
        remaining.x,
        remaining.y + 2,
        remaining.width,
        remaining.height.saturating_sub(2),
    );

    if state.entries.is_empty() {
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "(empty directory)",
                theme::text_dim(),
            ))),
            list_area,
        );
        return;
    }

    // Keep the selection inside the window
    let visible = list_area.height as usize;
    let start = state
        .selected
        .saturating_sub(visible.saturating_sub(1));

    for (row, (idx, entry)) in state
        .entries
        .iter()
        .enumerate()
        .skip(start)
        .take(visible)
        .enumerate()
    {
        let is_selected = idx == state.selected;
        let row_area = Rect::new(list_area.x, list_area.y + row as u16, list_area.width, 1);

        if is_selected {
            f.render_widget(
                Paragraph::new("").style(Style::default().bg(theme::BG_SELECTED)),
                row_area,
            );
        }

        let name_width = (list_area.width as usize).saturating_sub(14);
        let line = if entry.is_dir {
            Line::from(vec![
                Span::styled("▸ ", theme::status_info()),
                Span::styled(
                    format!("{}/", truncate_with_ellipsis(&entry.name, name_width)),
                    if is_selected {
                        theme::text_bold()
                    } else {
                        theme::text_primary()
                    },
                ),
            ])
        } else {
            Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    truncate_with_ellipsis(&entry.name, name_width),
                    if is_selected {
                        theme::text_bold()
                    } else {
                        theme::text_primary()
                    },
                ),
                Span::styled(format!("  {}", human_size(entry.size)), theme::text_dim()),
            ])
        };

        let style = if is_selected {
            Style::default().bg(theme::BG_SELECTED)
        } else {
            Style::default()
        };
        f.render_widget(Paragraph::new(line).style(style), row_area);
    }
}
