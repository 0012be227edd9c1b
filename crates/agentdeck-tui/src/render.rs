use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

use crate::ui::components::{render_header, render_statusbar};
use crate::ui::modal::ModalState;
use crate::ui::views::{chat, composer, create_agent, file_picker, sidebar, task_prompt};
use crate::ui::{layout, theme, App};

/// Top-level frame: header / body (sidebar + chat) / composer / status bar,
/// with at most one modal drawn over everything.
pub fn render(f: &mut Frame, app: &mut App) {
    let area = f.area();

    f.render_widget(
        Block::default().style(Style::default().bg(theme::BG_APP)),
        area,
    );

    let chunks = Layout::vertical([
        Constraint::Length(layout::HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(composer::composer_height(app)),
        Constraint::Length(layout::STATUSBAR_HEIGHT),
    ])
    .split(area);

    render_header(f, app, chunks[0]);

    // The sidebar collapses on narrow terminals rather than starving the chat
    let body = chunks[1];
    if app.sidebar_visible && body.width > layout::SIDEBAR_WIDTH + 20 {
        let cols = Layout::horizontal([
            Constraint::Length(layout::SIDEBAR_WIDTH),
            Constraint::Min(0),
        ])
        .split(body);
        sidebar::render_sidebar(f, app, cols[0]);
        chat::render_chat(f, app, cols[1]);
    } else {
        chat::render_chat(f, app, body);
    }

    composer::render_composer(f, app, chunks[2]);
    render_statusbar(f, app, chunks[3]);

    match &app.modal_state {
        ModalState::None => {}
        ModalState::CreateAgent(state) => create_agent::render_create_agent(f, area, state),
        ModalState::TaskPrompt(state) => task_prompt::render_task_prompt(f, area, state),
        ModalState::FilePicker(state) => file_picker::render_file_picker(f, area, state),
    }
}
