//! Future/Completed tab bar.
//!
//! Selection state is managed by `AppState.tab`.

use crate::state::{AidPage, Partition};
use crate::view::styles::Palette;
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

const ORDER: [Partition; 2] = [Partition::Future, Partition::Completed];

/// Tab title with the number of records matching the list's filter.
pub fn tab_title(page: &AidPage, partition: Partition) -> String {
    format!(
        "{} ({})",
        partition.title(),
        page.list(partition).filtered_len()
    )
}

/// Render the tab bar with `selected` highlighted.
pub fn render_tab_bar(
    frame: &mut Frame,
    area: Rect,
    page: &AidPage,
    selected: Partition,
    palette: &Palette,
) {
    let titles: Vec<Line> = ORDER
        .iter()
        .map(|&p| Line::from(tab_title(page, p)))
        .collect();
    let index = ORDER.iter().position(|&p| p == selected).unwrap_or(0);

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title(" Aid log "))
        .highlight_style(palette.highlight)
        .select(index);

    frame.render_widget(tabs, area);
}
