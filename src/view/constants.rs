//! Layout dimension constants for TUI rendering.

/// Height of the tab bar in lines (border + content).
pub const TAB_BAR_HEIGHT: u16 = 3;

/// Height of the search input widget in lines (border + content).
pub const SEARCH_INPUT_HEIGHT: u16 = 3;

/// Height of the pagination bar: summary line plus page links.
pub const PAGINATION_HEIGHT: u16 = 2;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width of the confirmation and bulk dialogs in columns.
pub const DIALOG_WIDTH: u16 = 64;

/// Height of the confirmation dialog.
pub const CONFIRM_DIALOG_HEIGHT: u16 = 8;

/// Height of the bulk exception editor dialog.
pub const BULK_DIALOG_HEIGHT: u16 = 16;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Upper bound on how long the event loop sleeps without a key press.
///
/// Service results arrive over a channel, so this also bounds how late a
/// finished call is shown.
pub const TICK_INTERVAL_MS: u64 = 100;
