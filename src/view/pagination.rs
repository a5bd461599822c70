//! Pagination bar: "Showing a–b of n" plus the page-link window.

use crate::state::{ListView, PageLink, PageWindow};
use crate::view::styles::Palette;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Spans for the page-link window, previous/next included.
pub fn window_spans(window: &PageWindow, palette: &Palette) -> Vec<Span<'static>> {
    let enabled = |on: bool| if on { Default::default() } else { palette.muted };

    let mut spans = vec![Span::styled("‹ Prev", enabled(window.prev_enabled)), Span::raw("  ")];
    for link in &window.links {
        match *link {
            PageLink::Page {
                number,
                current: true,
            } => spans.push(Span::styled(format!("[{number}]"), palette.highlight)),
            PageLink::Page { number, .. } => spans.push(Span::raw(number.to_string())),
            PageLink::Ellipsis => spans.push(Span::styled("…", palette.muted)),
        }
        spans.push(Span::raw(" "));
    }
    spans.push(Span::raw(" "));
    spans.push(Span::styled("Next ›", enabled(window.next_enabled)));
    spans
}

/// Render the two-line pagination bar for `view`.
pub fn render_pagination(frame: &mut Frame, area: Rect, view: &ListView, palette: &Palette) {
    let summary = Line::from(vec![
        Span::raw(view.summary()),
        Span::styled(format!("  ·  {} per page", view.per_page), palette.muted),
    ]);
    let links = Line::from(window_spans(&view.window, palette));

    frame.render_widget(
        Paragraph::new(vec![summary, links]).alignment(Alignment::Center),
        area,
    );
}
