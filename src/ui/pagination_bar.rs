//! Pagination bar rendering.
//!
//! One numbered button per page with the active page highlighted, framed
//! by prev/next arrows that dim when the corresponding move is a no-op.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

use super::theme::{
    COLOR_ACCENT, COLOR_DIM, COLOR_PAGE_ACTIVE_BG, COLOR_PAGE_ACTIVE_FG,
};

pub fn render_pagination_bar(frame: &mut Frame, area: Rect, app: &App) {
    let view = app.page_view();

    let arrow_style = |enabled: bool| {
        if enabled {
            Style::default().fg(COLOR_ACCENT)
        } else {
            Style::default().fg(COLOR_DIM)
        }
    };

    let mut spans = vec![Span::styled("◀", arrow_style(view.can_go_prev()))];

    for n in 1..=view.total_pages {
        spans.push(Span::raw(" "));
        let label = format!(" {n} ");
        if n == view.current_page {
            spans.push(Span::styled(
                label,
                Style::default()
                    .fg(COLOR_PAGE_ACTIVE_FG)
                    .bg(COLOR_PAGE_ACTIVE_BG)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(label, Style::default().fg(COLOR_ACCENT)));
        }
    }

    spans.push(Span::raw(" "));
    spans.push(Span::styled("▶", arrow_style(view.can_go_next())));

    let bar = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(bar, area);
}
