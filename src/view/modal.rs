//! Dialog overlays: single completion confirmation and the bulk exception editor.

use crate::model::AidRecord;
use crate::state::{plan_bulk, ListState, TextInput};
use crate::view::constants::{BULK_DIALOG_HEIGHT, CONFIRM_DIALOG_HEIGHT, DIALOG_WIDTH};
use crate::view::search_input::lines_with_cursor;
use crate::view::styles::Palette;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Rect of at most `width` x `height`, centered in `area`.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let popup_width = width.min(area.width);
    let popup_height = height.min(area.height);
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

fn dialog_block(title: &str, palette: &Palette) -> Block<'static> {
    Block::default()
        .title(Line::styled(format!(" {title} "), palette.header).alignment(Alignment::Center))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.focus_border)
}

fn footer(text: &'static str, palette: &Palette) -> Paragraph<'static> {
    Paragraph::new(Line::styled(text, palette.muted)).alignment(Alignment::Center)
}

/// Ask the admin to confirm marking `record` delivered.
pub fn render_confirm_modal(frame: &mut Frame, record: &AidRecord, palette: &Palette) {
    let area = centered_rect(DIALOG_WIDTH, CONFIRM_DIALOG_HEIGHT, frame.area());
    frame.render_widget(Clear, area);

    let block = dialog_block("Confirm delivery", palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let name = if record.beneficiary_name.trim().is_empty() {
        record.beneficiary_id.as_str()
    } else {
        record.beneficiary_name.as_str()
    };
    let body = vec![
        Line::from(vec![
            Span::raw("Mark aid "),
            Span::styled(record.id.as_str().to_string(), palette.highlight),
            Span::raw(" as delivered?"),
        ]),
        Line::from(format!("Beneficiary: {name} ({})", record.beneficiary_id)),
        Line::from(format!("Kind: {}", record.kind)),
        Line::from(format!("Scheduled: {}", record.display_date())),
    ];

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);
    frame.render_widget(Paragraph::new(body).wrap(Wrap { trim: true }), rows[0]);
    frame.render_widget(footer("y/Enter: Confirm  n/Esc: Cancel", palette), rows[1]);
}

/// One-line preview of what submitting the exception list would do.
pub fn bulk_preview(future: &ListState, exception_text: &str) -> Result<String, String> {
    match plan_bulk(future.filtered(), exception_text) {
        Ok(plan) => Ok(format!(
            "Will mark {} beneficiar{} delivered and delete records of {} exception{}",
            plan.complete.len(),
            if plan.complete.len() == 1 { "y" } else { "ies" },
            plan.delete.len(),
            if plan.delete.len() == 1 { "" } else { "s" },
        )),
        Err(err) => Err(err.to_string()),
    }
}

/// Bulk completion dialog over the filtered Future list.
pub fn render_bulk_modal(
    frame: &mut Frame,
    editor: &TextInput,
    future: &ListState,
    palette: &Palette,
) {
    let area = centered_rect(DIALOG_WIDTH, BULK_DIALOG_HEIGHT, frame.area());
    frame.render_widget(Clear, area);

    let block = dialog_block("Bulk delivery", palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let scope = if future.term().is_empty() {
        format!("Applies to all {} Future records.", future.filtered_len())
    } else {
        format!(
            "Applies to {} Future records matching \"{}\".",
            future.filtered_len(),
            future.term()
        )
    };
    let intro = vec![
        Line::from(scope),
        Line::styled(
            "Exceptions, one beneficiary ID per line, are deleted instead:",
            palette.muted,
        ),
    ];
    frame.render_widget(Paragraph::new(intro), rows[0]);

    frame.render_widget(
        Paragraph::new(lines_with_cursor(editor))
            .block(Block::default().borders(Borders::ALL).border_style(Style::default())),
        rows[1],
    );

    let preview = match bulk_preview(future, editor.text()) {
        Ok(text) => Line::styled(text, palette.muted),
        Err(text) => Line::styled(text, palette.severity(crate::state::Severity::Error)),
    };
    frame.render_widget(Paragraph::new(preview), rows[2]);
    frame.render_widget(footer("Ctrl+S: Submit  Enter: New line  Esc: Cancel", palette), rows[3]);
}
