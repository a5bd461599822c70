//! Admin-facing notifications.
//!
//! Ring buffer of notifications with unread tracking. Every failure that is
//! caught at the controller boundary ends up here.

use crate::model::AidError;
use std::collections::VecDeque;

/// Default number of notifications kept.
pub const DEFAULT_CAPACITY: usize = 50;

/// How a notification is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Neutral information.
    Info,
    /// An operation completed.
    Success,
    /// Refused locally; nothing was sent.
    Warning,
    /// An operation failed.
    Error,
}

/// A single notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// When it was raised.
    pub timestamp: chrono::DateTime<chrono::Utc>,
    /// Presentation severity.
    pub severity: Severity,
    /// Text shown to the admin.
    pub message: String,
}

/// Bounded notification history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notifications {
    entries: VecDeque<Notification>,
    capacity: usize,
    unread: usize,
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl Notifications {
    /// Empty history holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            unread: 0,
        }
    }

    /// Append a notification, evicting the oldest when full.
    pub fn push(&mut self, severity: Severity, message: impl Into<String>) {
        let message = message.into();
        match severity {
            Severity::Error => tracing::error!(%message, "notification"),
            Severity::Warning => tracing::warn!(%message, "notification"),
            Severity::Info | Severity::Success => tracing::info!(%message, "notification"),
        }

        if self.capacity == 0 {
            return;
        }
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(Notification {
            timestamp: chrono::Utc::now(),
            severity,
            message,
        });
        self.unread = (self.unread + 1).min(self.entries.len());
    }

    /// Append an error, as a warning when it never left the process.
    pub fn push_error(&mut self, err: &AidError) {
        let severity = if err.is_warning() {
            Severity::Warning
        } else {
            Severity::Error
        };
        self.push(severity, err.to_string());
    }

    /// Most recent notification.
    pub fn latest(&self) -> Option<&Notification> {
        self.entries.back()
    }

    /// All notifications, oldest first.
    pub fn entries(&self) -> &VecDeque<Notification> {
        &self.entries
    }

    /// Notifications raised since the last [`Notifications::mark_read`].
    pub fn unread_count(&self) -> usize {
        self.unread
    }

    /// Reset the unread counter.
    pub fn mark_read(&mut self) {
        self.unread = 0;
    }
}
