//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod help;
pub mod layout;
pub mod modal;
pub mod pagination;
mod search_input;
pub mod status;
mod styles;
pub mod table;
pub mod tabs;

pub use help::{build_help_content, format_key, render_help_overlay};
pub use layout::render_layout;
pub use search_input::{lines_with_cursor, SearchInput};
pub use styles::{ColorConfig, Palette};

use crate::config::KeyBindings;
use crate::controller::AidLifecycleController;
use crate::model::{AppError, KeyAction};
use crate::state::app_state::{
    clamp_selection, handle_bulk_edit, handle_key_action, handle_search_edit, reset_bulk_editor,
    submit_bulk,
};
use crate::state::text_input::{
    handle_backspace, handle_char_input, handle_cursor_left, handle_cursor_right, handle_newline,
};
use crate::state::{AidPage, AppState, FocusPane, Msg, Partition};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    controller: AidLifecycleController,
    key_bindings: KeyBindings,
    palette: Palette,
    runtime: tokio::runtime::Handle,
    results_tx: Sender<Msg>,
    results_rx: Receiver<Msg>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(
        controller: AidLifecycleController,
        app_state: AppState,
        palette: Palette,
        runtime: tokio::runtime::Handle,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self::with_terminal(
            terminal, controller, app_state, palette, runtime,
        ))
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create the app over an already prepared terminal.
    pub fn with_terminal(
        terminal: Terminal<B>,
        controller: AidLifecycleController,
        app_state: AppState,
        palette: Palette,
        runtime: tokio::runtime::Handle,
    ) -> Self {
        let (results_tx, results_rx) = mpsc::channel();
        Self {
            terminal,
            app_state,
            controller,
            key_bindings: KeyBindings::default(),
            palette,
            runtime,
            results_tx,
            results_rx,
        }
    }

    /// Run the main event loop
    ///
    /// Returns when the admin quits (q or Ctrl+C). Issues the initial fetch
    /// before the first frame.
    pub fn run(&mut self) -> Result<(), TuiError> {
        let tick = Duration::from_millis(constants::TICK_INTERVAL_MS);

        self.dispatch(Msg::RefreshRequested);
        self.draw()?;

        loop {
            let timeout = self.app_state.poll_timeout(Instant::now(), tick);
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key, Instant::now()) {
                            return Ok(());
                        }
                    }
                    // resize only needs the redraw below
                    _ => {}
                }
            }

            self.tick(Instant::now());
            self.draw()?;
        }
    }

    /// Feed `msg` to the controller and start the command it yields, if any.
    fn dispatch(&mut self, msg: Msg) {
        let bulk_succeeded = matches!(msg, Msg::BulkFinished(Ok(_)));

        if let Some(command) = self.controller.apply(msg) {
            debug!(?command, "spawning command");
            self.controller
                .spawn(command, &self.runtime, self.results_tx.clone());
        }

        if bulk_succeeded {
            reset_bulk_editor(&mut self.app_state);
        }
        clamp_selection(&mut self.app_state, self.controller.page());
    }

    /// Deliver finished service calls and elapsed search debounces.
    fn tick(&mut self, now: Instant) {
        while let Ok(msg) = self.results_rx.try_recv() {
            self.dispatch(msg);
        }
        for msg in self.app_state.poll_debounces(now) {
            self.dispatch(msg);
        }
    }

    /// Handle a key press. Returns true when the app should quit.
    fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        // Ctrl+C always quits, whatever has focus
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }
        self.controller.mark_notifications_read();

        if self.controller.page().pending_confirmation().is_some() {
            match key.code {
                KeyCode::Char('y') | KeyCode::Enter => self.dispatch(Msg::CompleteConfirmed),
                KeyCode::Char('n') | KeyCode::Esc => self.dispatch(Msg::CompleteCancelled),
                _ => {}
            }
            return false;
        }

        if self.app_state.help_visible {
            match self.key_bindings.get(key) {
                Some(KeyAction::Quit) => return true,
                Some(KeyAction::Help) => self.app_state.help_visible = false,
                _ if key.code == KeyCode::Esc => self.app_state.help_visible = false,
                _ => {}
            }
            return false;
        }

        match self.app_state.focus {
            FocusPane::Search => {
                self.handle_search_key(key, now);
                false
            }
            FocusPane::BulkEditor => {
                self.handle_bulk_key(key);
                false
            }
            FocusPane::Table => {
                let Some(action) = self.key_bindings.get(key) else {
                    return false;
                };
                if action == KeyAction::Quit {
                    return true;
                }
                if let Some(msg) =
                    handle_key_action(&mut self.app_state, self.controller.page(), action)
                {
                    self.dispatch(msg);
                }
                false
            }
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent, now: Instant) {
        let state = &mut self.app_state;
        match key.code {
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                handle_search_edit(state, now, |i| handle_char_input(i, ch));
            }
            KeyCode::Backspace => handle_search_edit(state, now, handle_backspace),
            KeyCode::Left => handle_search_edit(state, now, handle_cursor_left),
            KeyCode::Right => handle_search_edit(state, now, handle_cursor_right),
            KeyCode::Enter => state.focus = FocusPane::Table,
            KeyCode::Esc => {
                if let Some(msg) =
                    handle_key_action(state, self.controller.page(), KeyAction::ClearSearch)
                {
                    self.dispatch(msg);
                }
            }
            _ => {}
        }
    }

    fn handle_bulk_key(&mut self, key: KeyEvent) {
        let state = &mut self.app_state;
        match key.code {
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                let msg = submit_bulk(state);
                self.dispatch(msg);
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                handle_bulk_edit(state, |i| handle_char_input(i, ch));
            }
            KeyCode::Enter => handle_bulk_edit(state, handle_newline),
            KeyCode::Backspace => handle_bulk_edit(state, handle_backspace),
            KeyCode::Left => handle_bulk_edit(state, handle_cursor_left),
            KeyCode::Right => handle_bulk_edit(state, handle_cursor_right),
            KeyCode::Esc => state.focus = FocusPane::Table,
            _ => {}
        }
    }

    fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.app_state;
        let page = self.controller.page();
        let bindings = &self.key_bindings;
        let palette = &self.palette;
        self.terminal.draw(|frame| {
            layout::render_layout(frame, state, page, bindings, palette);
        })?;
        Ok(())
    }

    /// Current page state.
    pub fn page(&self) -> &AidPage {
        self.controller.page()
    }
}

/// Initialize and run the TUI application
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// even when the loop fails. `initial_search` pre-fills the Future search.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run(
    controller: AidLifecycleController,
    app_state: AppState,
    initial_search: Option<String>,
    palette: Palette,
    runtime: tokio::runtime::Handle,
) -> Result<(), TuiError> {
    let mut app = TuiApp::new(controller, app_state, palette, runtime)?;

    if let Some(term) = initial_search.filter(|t| !t.trim().is_empty()) {
        app.app_state.future.search = crate::state::TextInput::with_text(term.clone());
        app.dispatch(Msg::FilterChanged {
            partition: Partition::Future,
            term,
        });
    }

    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
