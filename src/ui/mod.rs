//! UI rendering for the sample viewer.
//!
//! Layout, top to bottom: title header, the samples table, the
//! pagination bar, and a key-hint footer. Every frame is a pure
//! re-derivation from `(App, PageView)`; nothing rendered is stored.

mod helpers;
mod pagination_bar;
mod table;
mod theme;

pub use helpers::{inner_rect, pad_cell};
pub use theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_SELECTED};

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

/// Render the whole UI from current app state.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title
            Constraint::Min(5),    // table
            Constraint::Length(1), // pagination bar
            Constraint::Length(1), // key hints
        ])
        .split(frame.area());

    let title = Paragraph::new(Line::from(Span::styled(
        "Measurement Results",
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    table::render_table(frame, chunks[1], app);
    pagination_bar::render_pagination_bar(frame, chunks[2], app);

    let hints = Paragraph::new(Line::from(Span::styled(
        "←/→ page  1-9 jump  ↑/↓ row  v view  d delete  q quit",
        Style::default().fg(COLOR_DIM),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(hints, chunks[3]);
}
