//! Screen layout: tab bar, search, table, pagination, status, overlays.
//!
//! Pure layout logic. Everything is projected from `AppState` and `AidPage`
//! on each frame.

use crate::config::KeyBindings;
use crate::state::{project, AidPage, AppState, FocusPane, Partition};
use crate::view::constants::{
    PAGINATION_HEIGHT, SEARCH_INPUT_HEIGHT, STATUS_BAR_HEIGHT, TAB_BAR_HEIGHT,
};
use crate::view::styles::Palette;
use crate::view::{help, modal, pagination, status, table, tabs, SearchInput};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

/// Areas of the main screen, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Future/Completed tab bar.
    pub tabs: Rect,
    /// Search box of the visible list.
    pub search: Rect,
    /// Record table.
    pub table: Rect,
    /// Summary and page links.
    pub pagination: Rect,
    /// Notification line.
    pub status: Rect,
}

/// Split `area` into the main screen regions.
pub fn screen_areas(area: Rect) -> ScreenAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TAB_BAR_HEIGHT),
            Constraint::Length(SEARCH_INPUT_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(PAGINATION_HEIGHT),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    ScreenAreas {
        tabs: chunks[0],
        search: chunks[1],
        table: chunks[2],
        pagination: chunks[3],
        status: chunks[4],
    }
}

/// Rows of the table body that fit in `table_area` (borders and header excluded).
pub fn visible_table_rows(table_area: Rect) -> usize {
    usize::from(table_area.height.saturating_sub(3))
}

/// Render one full frame.
pub fn render_layout(
    frame: &mut Frame,
    state: &AppState,
    page: &AidPage,
    bindings: &KeyBindings,
    palette: &Palette,
) {
    let areas = screen_areas(frame.area());
    let view = project(page, state.tab);
    let tab = state.current();

    tabs::render_tab_bar(frame, areas.tabs, page, state.tab, palette);
    frame.render_widget(
        SearchInput::new(&tab.search, state.focus == FocusPane::Search, palette),
        areas.search,
    );
    table::render_table(
        frame,
        areas.table,
        &view,
        tab.selected,
        page.is_loaded(),
        palette,
    );
    pagination::render_pagination(frame, areas.pagination, &view, palette);
    status::render_status_bar(frame, areas.status, page, palette);

    // overlays, lowest first
    if state.focus == FocusPane::BulkEditor {
        modal::render_bulk_modal(
            frame,
            &state.bulk_editor,
            page.list(Partition::Future),
            palette,
        );
    }
    if let Some(record) = page.pending_confirmation() {
        modal::render_confirm_modal(frame, record, palette);
    }
    if state.help_visible {
        help::render_help_overlay(frame, bindings, palette);
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
