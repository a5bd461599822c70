//! Record table for one list.

use crate::state::{ListView, Partition, RowView};
use crate::view::styles::Palette;
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Widest a free-text column may grow before the table clips it.
const MAX_TEXT_COLUMN: u16 = 32;

/// Display width of the widest value in a column, header included.
fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> u16 {
    let widest = values
        .map(UnicodeWidthStr::width)
        .chain(std::iter::once(header.width()))
        .max()
        .unwrap_or(0);
    u16::try_from(widest)
        .unwrap_or(MAX_TEXT_COLUMN)
        .min(MAX_TEXT_COLUMN)
}

fn kind_label(row: &RowView) -> String {
    if row.category.is_empty() {
        row.kind.clone()
    } else {
        format!("{} ({})", row.kind, row.category)
    }
}

fn to_row<'a>(row: &'a RowView, palette: &Palette) -> Row<'a> {
    let marker = if row.in_flight { "…" } else { " " };
    let style = if row.in_flight {
        palette.in_flight
    } else {
        Style::default()
    };
    Row::new(vec![
        Cell::from(marker),
        Cell::from(row.aid_id.as_str()),
        Cell::from(row.name.as_str()),
        Cell::from(row.beneficiary_id.as_str()),
        Cell::from(kind_label(row)),
        Cell::from(row.date.as_str()),
        Cell::from(row.source.as_str()),
    ])
    .style(style)
}

/// Message shown in place of an empty table.
pub fn empty_message(view: &ListView, loaded: bool) -> String {
    if !loaded {
        "Loading records…".to_string()
    } else if !view.term.is_empty() {
        format!("No records match \"{}\"", view.term)
    } else {
        match view.partition {
            Partition::Future => "No scheduled aid".to_string(),
            Partition::Completed => "No delivered aid".to_string(),
        }
    }
}

/// Render `view` as a table, highlighting row `selected`.
pub fn render_table(
    frame: &mut Frame,
    area: Rect,
    view: &ListView,
    selected: usize,
    loaded: bool,
    palette: &Palette,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} aid ", view.partition.title()));

    if view.rows.is_empty() {
        let paragraph = Paragraph::new(Line::styled(empty_message(view, loaded), palette.muted))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(vec![
        "", "Aid ID", "Beneficiary", "ID No.", "Kind", "Date", "Source",
    ])
    .style(palette.header);

    let widths = [
        Constraint::Length(1),
        Constraint::Length(column_width("Aid ID", view.rows.iter().map(|r| r.aid_id.as_str()))),
        Constraint::Length(column_width("Beneficiary", view.rows.iter().map(|r| r.name.as_str()))),
        Constraint::Length(column_width(
            "ID No.",
            view.rows.iter().map(|r| r.beneficiary_id.as_str()),
        )),
        Constraint::Min(12),
        Constraint::Length(10),
        Constraint::Length(column_width("Source", view.rows.iter().map(|r| r.source.as_str()))),
    ];

    let rows: Vec<Row> = view.rows.iter().map(|r| to_row(r, palette)).collect();
    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(1)
        .row_highlight_style(palette.selected);

    let mut state = TableState::default().with_selected(Some(selected.min(view.rows.len() - 1)));
    frame.render_stateful_widget(table, area, &mut state);
}
