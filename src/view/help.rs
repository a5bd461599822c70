//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with all keyboard shortcuts grouped by
//! category, read from the active [`KeyBindings`]. Triggered by '?',
//! dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use crate::config::KeyBindings;
use crate::model::KeyAction;
use crate::view::styles::Palette;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const KEY_COLUMN: usize = 16;

const SECTIONS: &[(&str, &[(KeyAction, &str)])] = &[
    (
        "Navigation",
        &[
            (KeyAction::SelectUp, "Select previous row"),
            (KeyAction::SelectDown, "Select next row"),
            (KeyAction::PrevPage, "Previous page"),
            (KeyAction::NextPage, "Next page"),
            (KeyAction::FirstPage, "First page"),
            (KeyAction::LastPage, "Last page"),
            (KeyAction::CyclePageSize, "Cycle rows per page"),
        ],
    ),
    (
        "Lists",
        &[
            (KeyAction::SwitchTab, "Switch Future / Completed"),
            (KeyAction::StartSearch, "Search this list"),
            (KeyAction::ClearSearch, "Clear search"),
        ],
    ),
    (
        "Delivery",
        &[
            (KeyAction::CompleteSelected, "Mark selected record delivered"),
            (KeyAction::BulkComplete, "Bulk deliver the filtered list"),
        ],
    ),
    (
        "Application",
        &[
            (KeyAction::Refresh, "Refetch from the service"),
            (KeyAction::Help, "Toggle this help"),
            (KeyAction::Quit, "Quit"),
        ],
    ),
];

/// Human-readable name of a key, e.g. `Ctrl+f`, `PgDn`, `G`.
pub fn format_key(key: KeyEvent) -> String {
    let base = match key.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        KeyCode::PageUp => "PgUp".to_string(),
        KeyCode::PageDown => "PgDn".to_string(),
        KeyCode::BackTab => "Shift+Tab".to_string(),
        KeyCode::F(n) => format!("F{n}"),
        other => format!("{other:?}"),
    };
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        format!("Ctrl+{base}")
    } else {
        base
    }
}

/// Build the help content lines grouped by category.
pub fn build_help_content(bindings: &KeyBindings, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (title, actions) in SECTIONS {
        lines.push(Line::styled(*title, palette.header));
        for (action, description) in *actions {
            let keys = bindings
                .keys_for(*action)
                .into_iter()
                .map(format_key)
                .collect::<Vec<_>>()
                .join("/");
            lines.push(Line::from(vec![
                Span::styled(format!("  {keys:<width$}", width = KEY_COLUMN), palette.key),
                Span::raw(*description),
            ]));
        }
        lines.push(Line::from(""));
    }

    lines.push(Line::styled("Dialogs", palette.header));
    for (keys, description) in [
        ("y/Enter", "Confirm delivery"),
        ("n/Esc", "Cancel"),
        ("Ctrl+s", "Submit bulk exceptions"),
    ] {
        lines.push(Line::from(vec![
            Span::styled(format!("  {keys:<width$}", width = KEY_COLUMN), palette.key),
            Span::raw(description),
        ]));
    }
    lines
}

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame, bindings: &KeyBindings, palette: &Palette) {
    let area = frame.area();
    let popup_area = centered_percent(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);

    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(bindings, palette))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(palette.focus_border),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };
    let hint = Paragraph::new(Line::styled(
        " Press Esc or ? to close ",
        palette.muted.add_modifier(Modifier::DIM),
    ))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

fn centered_percent(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    super::modal::centered_rect(popup_width, popup_height, area)
}

// ===== Tests =====

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
