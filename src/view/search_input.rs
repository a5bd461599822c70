//! Text box widgets: the per-tab search bar and the shared cursor rendering.

use crate::state::TextInput;
use crate::view::styles::Palette;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Split `input` into display lines with a block cursor at its position.
///
/// The cursor occupies the character under it, or a trailing space when it
/// sits at the end of a line.
pub fn lines_with_cursor(input: &TextInput) -> Vec<Line<'static>> {
    let cursor_style = Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD);
    let mut remaining = input.cursor();
    let mut lines = Vec::new();

    for raw in input.text().split('\n') {
        let len = raw.chars().count();
        if remaining > len {
            lines.push(Line::from(raw.to_string()));
            // the newline itself counts as one character
            remaining -= len + 1;
            continue;
        }

        let before: String = raw.chars().take(remaining).collect();
        let under: String = raw
            .chars()
            .nth(remaining)
            .map_or_else(|| " ".to_string(), |c| c.to_string());
        let after: String = raw.chars().skip(remaining + 1).collect();
        lines.push(Line::from(vec![
            Span::raw(before),
            Span::styled(under, cursor_style),
            Span::raw(after),
        ]));
        remaining = usize::MAX;
    }

    lines
}

/// Search bar for one list.
pub struct SearchInput<'a> {
    input: &'a TextInput,
    focused: bool,
    palette: &'a Palette,
}

impl<'a> SearchInput<'a> {
    /// Create a search bar over `input`.
    pub fn new(input: &'a TextInput, focused: bool, palette: &'a Palette) -> Self {
        Self {
            input,
            focused,
            palette,
        }
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (content, border, title) = if self.focused {
            (
                lines_with_cursor(self.input),
                self.palette.focus_border,
                " Search (Enter: done, Esc: clear) ",
            )
        } else if self.input.text().is_empty() {
            (
                vec![Line::styled("Press / to search", self.palette.muted)],
                Style::default(),
                " Search ",
            )
        } else {
            (
                vec![Line::from(self.input.text().to_string())],
                Style::default(),
                " Search ",
            )
        };

        Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border)
                    .title(title),
            )
            .render(area, buf);
    }
}
