//! Measurement table rendering.
//!
//! Renders the visible page of the record collection: row number column,
//! formatted date, concentration, and the (inert) per-row action hints.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::models::format_record_date;

use super::helpers::{inner_rect, pad_cell};
use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_SELECTED};

const NO_WIDTH: usize = 5;
const DATE_WIDTH: usize = 18;
const CONCENTRATION_WIDTH: usize = 19;

pub fn render_table(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(" Samples ");
    frame.render_widget(block, area);

    let inner = inner_rect(area, 1);

    if app.is_loading() {
        let loading = Paragraph::new(Line::from(Span::styled(
            "Loading samples…",
            Style::default().fg(COLOR_DIM),
        )));
        frame.render_widget(loading, inner);
        return;
    }

    let view = app.page_view();

    if view.rows.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No samples.",
            Style::default().fg(COLOR_DIM),
        )));
        frame.render_widget(empty, inner);
        return;
    }

    let mut lines = vec![
        Line::from(Span::styled(
            format!(
                "  {}{}{}Actions",
                pad_cell("No", NO_WIDTH),
                pad_cell("Date", DATE_WIDTH),
                pad_cell("Concentration (%)", CONCENTRATION_WIDTH),
            ),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "─".repeat(inner.width as usize),
            Style::default().fg(COLOR_DIM),
        )),
    ];

    for (i, record) in view.rows.iter().enumerate() {
        let is_selected = i == app.selected_row();
        let marker = if is_selected { "▶ " } else { "  " };
        let marker_style = if is_selected {
            Style::default().fg(COLOR_SELECTED)
        } else {
            Style::default()
        };
        let row_style = if is_selected {
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        lines.push(Line::from(vec![
            Span::styled(marker, marker_style),
            Span::styled(
                format!(
                    "{}{}{}",
                    pad_cell(&format!("{}", view.first_index + i + 1), NO_WIDTH),
                    pad_cell(&format_record_date(&record.timestamps), DATE_WIDTH),
                    pad_cell(&format!("{}", record.concentration), CONCENTRATION_WIDTH),
                ),
                row_style,
            ),
            Span::styled("⊙ view  ✕ delete", Style::default().fg(COLOR_DIM)),
        ]));
    }

    let table = Paragraph::new(lines);
    frame.render_widget(table, inner);
}
