//! UI state for the aid log screen and its key handlers (pure).
//!
//! `AppState` is everything the terminal shell needs besides the page
//! itself: which tab is shown, which pane has focus, the text inputs and
//! their debouncers. Handlers translate [`KeyAction`]s and text edits into
//! lifecycle [`Msg`]s; they never call the service.

use crate::model::{AidId, KeyAction};
use crate::state::aid_page::{AidPage, Partition};
use crate::state::debounce::{time_until_next, Debouncer};
use crate::state::lifecycle::Msg;
use crate::state::list_state::next_page_size;
use crate::state::text_input::{self, TextInput};
use std::time::{Duration, Instant};

/// Default quiet period before a search term is applied.
pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(250);

/// Which pane receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPane {
    /// Record table: navigation and actions.
    #[default]
    Table,
    /// Search box of the current tab.
    Search,
    /// Bulk exception editor (modal).
    BulkEditor,
}

/// Per-tab UI state.
#[derive(Debug, Clone)]
pub struct TabState {
    /// Search box contents.
    pub search: TextInput,
    /// Pending debounced term for this tab's search.
    pub debounce: Debouncer<String>,
    /// Selected row within the current page.
    pub selected: usize,
}

impl TabState {
    fn new(delay: Duration) -> Self {
        Self {
            search: TextInput::single_line(),
            debounce: Debouncer::new(delay),
            selected: 0,
        }
    }
}

/// Debounce delays per search box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchDelays {
    /// Future tab search.
    pub future: Duration,
    /// Completed tab search.
    pub completed: Duration,
}

impl Default for SearchDelays {
    fn default() -> Self {
        Self {
            future: DEFAULT_SEARCH_DEBOUNCE,
            completed: DEFAULT_SEARCH_DEBOUNCE,
        }
    }
}

/// UI state. Pure data, no side effects.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Visible tab.
    pub tab: Partition,
    /// Focused pane.
    pub focus: FocusPane,
    /// Future tab state.
    pub future: TabState,
    /// Completed tab state.
    pub completed: TabState,
    /// Bulk exception editor; kept across failed attempts so the same text
    /// can be resubmitted.
    pub bulk_editor: TextInput,
    /// Whether the help overlay is shown.
    pub help_visible: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(SearchDelays::default())
    }
}

impl AppState {
    /// Fresh UI on the Future tab.
    pub fn new(delays: SearchDelays) -> Self {
        Self {
            tab: Partition::Future,
            focus: FocusPane::Table,
            future: TabState::new(delays.future),
            completed: TabState::new(delays.completed),
            bulk_editor: TextInput::multi_line(),
            help_visible: false,
        }
    }

    /// State of one tab.
    pub fn tab_state(&self, partition: Partition) -> &TabState {
        match partition {
            Partition::Future => &self.future,
            Partition::Completed => &self.completed,
        }
    }

    /// Mutable state of one tab.
    pub fn tab_state_mut(&mut self, partition: Partition) -> &mut TabState {
        match partition {
            Partition::Future => &mut self.future,
            Partition::Completed => &mut self.completed,
        }
    }

    /// State of the visible tab.
    pub fn current(&self) -> &TabState {
        self.tab_state(self.tab)
    }

    fn current_mut(&mut self) -> &mut TabState {
        self.tab_state_mut(self.tab)
    }

    /// Earliest debounce deadline, as a poll timeout capped at `max`.
    pub fn poll_timeout(&self, now: Instant, max: Duration) -> Duration {
        time_until_next(
            [self.future.debounce.deadline(), self.completed.debounce.deadline()],
            now,
            max,
        )
    }

    /// Deliver every search term whose quiet period has elapsed.
    pub fn poll_debounces(&mut self, now: Instant) -> Vec<Msg> {
        let mut msgs = Vec::new();
        for partition in [Partition::Future, Partition::Completed] {
            let tab = self.tab_state_mut(partition);
            if let Some(term) = tab.debounce.poll(now) {
                tab.selected = 0;
                msgs.push(Msg::FilterChanged { partition, term });
            }
        }
        msgs
    }
}

/// Clamp the selection into the rows of the visible page.
pub fn clamp_selection(state: &mut AppState, page: &AidPage) {
    let rows = page.list(state.tab).current_slice().0.len();
    let tab = state.current_mut();
    tab.selected = tab.selected.min(rows.saturating_sub(1));
}

/// Aid id of the selected row on the visible page.
pub fn selected_id(state: &AppState, page: &AidPage) -> Option<AidId> {
    let (rows, _) = page.list(state.tab).current_slice();
    rows.get(state.current().selected).map(|r| r.id.clone())
}

/// Apply a text edit to the focused search box and reschedule its debounce.
pub fn handle_search_edit(
    state: &mut AppState,
    now: Instant,
    edit: impl FnOnce(TextInput) -> TextInput,
) {
    let tab = state.current_mut();
    tab.search = edit(tab.search.clone());
    let term = tab.search.text().to_string();
    tab.debounce.schedule(term, now);
}

/// Apply a text edit to the bulk exception editor.
pub fn handle_bulk_edit(state: &mut AppState, edit: impl FnOnce(TextInput) -> TextInput) {
    state.bulk_editor = edit(state.bulk_editor.clone());
}

/// Submit the bulk editor; the dialog closes, the text stays.
pub fn submit_bulk(state: &mut AppState) -> Msg {
    state.focus = FocusPane::Table;
    Msg::BulkConfirmed {
        exception_text: state.bulk_editor.text().to_string(),
    }
}

/// Forget the exception text after a successful bulk call.
pub fn reset_bulk_editor(state: &mut AppState) {
    state.bulk_editor = text_input::clear(state.bulk_editor.clone());
}

/// Handle a bound action while the table has focus.
///
/// Returns the lifecycle message the action maps to, if any. `Quit` is left
/// to the shell.
pub fn handle_key_action(state: &mut AppState, page: &AidPage, action: KeyAction) -> Option<Msg> {
    let list = page.list(state.tab);
    let partition = state.tab;
    match action {
        KeyAction::SelectUp => {
            let tab = state.current_mut();
            tab.selected = tab.selected.saturating_sub(1);
            None
        }
        KeyAction::SelectDown => {
            state.current_mut().selected += 1;
            clamp_selection(state, page);
            None
        }
        KeyAction::PrevPage | KeyAction::NextPage | KeyAction::FirstPage | KeyAction::LastPage => {
            let target = match action {
                KeyAction::PrevPage => list.page().saturating_sub(1),
                KeyAction::NextPage => list.page() + 1,
                KeyAction::FirstPage => 1,
                _ => list.total_pages(),
            };
            state.current_mut().selected = 0;
            Some(Msg::PageRequested {
                partition,
                page: target,
            })
        }
        KeyAction::CyclePageSize => {
            state.current_mut().selected = 0;
            Some(Msg::PerPageChanged {
                partition,
                per_page: next_page_size(list.per_page()),
            })
        }
        KeyAction::SwitchTab => {
            state.tab = state.tab.other();
            state.focus = FocusPane::Table;
            None
        }
        KeyAction::StartSearch => {
            state.focus = FocusPane::Search;
            None
        }
        KeyAction::ClearSearch => {
            let tab = state.current_mut();
            tab.search = TextInput::single_line();
            tab.debounce.cancel();
            tab.selected = 0;
            state.focus = FocusPane::Table;
            Some(Msg::FilterChanged {
                partition,
                term: String::new(),
            })
        }
        KeyAction::CompleteSelected => {
            if partition != Partition::Future {
                return None;
            }
            selected_id(state, page).map(Msg::CompleteRequested)
        }
        KeyAction::BulkComplete => {
            if partition == Partition::Future && !page.is_bulk_in_flight() {
                state.focus = FocusPane::BulkEditor;
            }
            None
        }
        KeyAction::Refresh => Some(Msg::RefreshRequested),
        KeyAction::Help => {
            state.help_visible = !state.help_visible;
            None
        }
        KeyAction::Quit => None,
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
