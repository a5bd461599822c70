//! Bottom status line: latest notification and in-flight indicators.

use crate::state::{AidPage, Severity};
use crate::view::styles::Palette;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const IDLE_HINT: &str = "? help  ·  / search  ·  c complete  ·  b bulk  ·  r refresh  ·  q quit";

fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "info",
        Severity::Success => "ok",
        Severity::Warning => "warn",
        Severity::Error => "error",
    }
}

/// Activity indicators, empty when nothing is outstanding.
pub fn activity(page: &AidPage) -> Vec<String> {
    let mut parts = Vec::new();
    if page.is_refreshing() {
        parts.push("refreshing…".to_string());
    }
    if page.is_bulk_in_flight() {
        parts.push("bulk in progress…".to_string());
    }
    match page.completing_count() {
        0 => {}
        n => parts.push(format!("{n} completing…")),
    }
    parts
}

/// Render the status line.
pub fn render_status_bar(frame: &mut Frame, area: Rect, page: &AidPage, palette: &Palette) {
    let message = match page.notifications.latest() {
        Some(n) => {
            let style = palette.severity(n.severity);
            let mut spans = vec![
                Span::styled(format!("[{}] ", severity_label(n.severity)), style),
                Span::styled(n.message.clone(), style),
            ];
            let unread = page.notifications.unread_count();
            if unread > 1 {
                spans.push(Span::styled(format!("  (+{} more)", unread - 1), palette.muted));
            }
            Line::from(spans)
        }
        None => Line::styled(IDLE_HINT, palette.muted),
    };

    let activity = activity(page).join("  ");
    let width = u16::try_from(activity.chars().count()).unwrap_or(u16::MAX);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(width)])
        .split(area);

    frame.render_widget(Paragraph::new(message), chunks[0]);
    frame.render_widget(
        Paragraph::new(Line::styled(activity, palette.in_flight)),
        chunks[1],
    );
}
