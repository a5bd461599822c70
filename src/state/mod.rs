//! Aid log state machine (pure).
//!
//! All state transitions are pure functions testable without the TUI or the
//! service.

pub mod aid_page;
pub mod app_state;
pub mod bulk;
pub mod debounce;
pub mod filter;
pub mod lifecycle;
pub mod list_state;
pub mod notifications;
pub mod paginator;
pub mod projection;
pub mod text_input;

// Re-export for convenience
pub use aid_page::{partition_records, AidPage, Partition};
pub use app_state::{AppState, FocusPane, SearchDelays};
pub use bulk::{parse_exceptions, plan_bulk, BulkPlan};
pub use debounce::{Debouncer, TaskHandle};
pub use filter::FilterTerm;
pub use lifecycle::{update, Ack, Command, Msg};
pub use list_state::{ListState, DEFAULT_PER_PAGE, PAGE_SIZES};
pub use notifications::{Notification, Notifications, Severity};
pub use paginator::{PageLink, PageMeta, PageWindow};
pub use projection::{project, ListView, PresentationSink, RowView};
pub use text_input::TextInput;
