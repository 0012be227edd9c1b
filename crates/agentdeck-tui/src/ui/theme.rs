// Centralized theme system for consistent UI styling
// All colors and styles are defined here - edit this file to change the look

use agentdeck_core::models::{AgentKind, AgentStatus, MessageKind};
use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// App background - pure black for contrast
pub const BG_APP: Color = Color::Rgb(0, 0, 0);

/// Sidebar background - very dark, almost black
pub const BG_SIDEBAR: Color = Color::Rgb(12, 12, 12);

/// Selected item background - subtle highlight
pub const BG_SELECTED: Color = Color::Rgb(32, 32, 32);

/// Input field background
pub const BG_INPUT: Color = Color::Rgb(18, 18, 18);

/// Modal background - slightly elevated from pure black
pub const BG_MODAL: Color = Color::Rgb(24, 24, 24);

/// Modal overlay - dims the background behind modals
pub const BG_MODAL_OVERLAY: Color = Color::Rgb(10, 10, 12);

/// Primary text - off-white for readability
pub const TEXT_PRIMARY: Color = Color::Rgb(220, 220, 220);

/// Secondary/muted text
pub const TEXT_MUTED: Color = Color::Rgb(128, 128, 128);

/// Dimmed text for hints, placeholders
pub const TEXT_DIM: Color = Color::Rgb(90, 90, 90);

/// Primary accent - muted blue (interactive elements, the user's messages)
pub const ACCENT_PRIMARY: Color = Color::Rgb(86, 156, 214);

/// Success/positive - muted green (online status)
pub const ACCENT_SUCCESS: Color = Color::Rgb(106, 153, 85);

/// Warning - muted amber (busy status, transient warnings)
pub const ACCENT_WARNING: Color = Color::Rgb(206, 145, 120);

/// Error - muted red
pub const ACCENT_ERROR: Color = Color::Rgb(244, 112, 112);

/// Special - muted purple (agents, attachments)
pub const ACCENT_SPECIAL: Color = Color::Rgb(169, 154, 203);

/// Inactive border
pub const BORDER_INACTIVE: Color = Color::Rgb(60, 60, 60);

// =============================================================================
// DOMAIN COLOR MAPPINGS
// =============================================================================

/// Status indicator color, matching the classic green/amber/gray convention
pub fn agent_status_color(status: AgentStatus) -> Color {
    match status {
        AgentStatus::Online => ACCENT_SUCCESS,
        AgentStatus::Busy => ACCENT_WARNING,
        AgentStatus::Offline => TEXT_MUTED,
    }
}

/// Glyph shown next to an agent, one per kind
pub fn agent_kind_glyph(kind: AgentKind) -> &'static str {
    match kind {
        AgentKind::Research => "◎",
        AgentKind::Analysis => "◆",
        AgentKind::Creative => "✎",
    }
}

/// Accent used for a message's author line
pub fn message_kind_color(kind: MessageKind) -> Color {
    match kind {
        MessageKind::User => ACCENT_PRIMARY,
        MessageKind::Agent => ACCENT_SPECIAL,
        MessageKind::System => TEXT_MUTED,
    }
}

// =============================================================================
// STYLE FUNCTIONS
// =============================================================================

pub fn text_primary() -> Style {
    Style::default().fg(TEXT_PRIMARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(TEXT_MUTED)
}

pub fn text_dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn text_bold() -> Style {
    Style::default()
        .fg(TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

pub fn border_inactive() -> Style {
    Style::default().fg(BORDER_INACTIVE)
}

pub fn border_focused() -> Style {
    Style::default().fg(ACCENT_PRIMARY)
}

pub fn status_warning() -> Style {
    Style::default().fg(ACCENT_WARNING)
}

pub fn status_error() -> Style {
    Style::default().fg(ACCENT_ERROR)
}

pub fn status_info() -> Style {
    Style::default().fg(ACCENT_PRIMARY)
}

pub fn input_placeholder() -> Style {
    Style::default().fg(TEXT_DIM).bg(BG_INPUT)
}

pub fn agent_name() -> Style {
    Style::default().fg(ACCENT_SPECIAL)
}

pub fn typing_indicator() -> Style {
    Style::default().fg(TEXT_DIM).add_modifier(Modifier::ITALIC)
}

/// Modal title style
pub fn modal_title() -> Style {
    Style::default()
        .fg(TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

/// Modal hint text (e.g., "esc" in corner)
pub fn modal_hint() -> Style {
    Style::default().fg(TEXT_MUTED)
}

/// Modal item normal state
pub fn modal_item() -> Style {
    Style::default().fg(TEXT_PRIMARY)
}

/// Modal item selected state - accent background with contrasting text
pub fn modal_item_selected() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(ACCENT_WARNING)
        .add_modifier(Modifier::BOLD)
}
