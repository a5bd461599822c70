//! Domain-level keyboard actions independent of key bindings.

/// Admin intents that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Row selection
    /// Move row selection up. Default: k/↑
    SelectUp,
    /// Move row selection down. Default: j/↓
    SelectDown,

    // Page navigation
    /// Previous page. Default: h/←/Page Up
    PrevPage,
    /// Next page. Default: l/→/Page Down
    NextPage,
    /// Jump to the first page. Default: g/Home
    FirstPage,
    /// Jump to the last page. Default: G/End
    LastPage,
    /// Cycle through the supported page sizes. Default: p
    CyclePageSize,

    // Tabs
    /// Switch between the Future and Completed lists. Default: Tab
    SwitchTab,

    // Search
    /// Focus the search box of the current list. Default: //Ctrl+f
    StartSearch,
    /// Clear the search term of the current list. Default: Esc
    ClearSearch,

    // Lifecycle
    /// Mark the selected Future record delivered (asks for confirmation). Default: c/Enter
    CompleteSelected,
    /// Open the bulk completion dialog. Default: b
    BulkComplete,

    // Application
    /// Refetch both lists from the service. Default: r
    Refresh,
    /// Show help overlay. Default: ?
    Help,
    /// Exit. Default: q/Ctrl+c
    Quit,
}
