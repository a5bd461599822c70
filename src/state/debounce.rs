//! Trailing-edge debounce as an explicit scheduled task (pure).
//!
//! Each input field owns one [`Debouncer`]. Scheduling a new value atomically
//! replaces the pending task, so only the last value of a burst is delivered
//! once the field has been quiet for the full delay. Time is passed in by the
//! caller, which keeps this testable without sleeping.

use std::time::{Duration, Instant};

/// Handle to a scheduled evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

#[derive(Debug, Clone)]
struct Scheduled<T> {
    value: T,
    due: Instant,
    handle: TaskHandle,
}

/// Single-slot trailing debouncer for one input field.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Scheduled<T>>,
    next_handle: u64,
}

impl<T> Debouncer<T> {
    /// Debouncer with a fixed trailing delay.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            next_handle: 0,
        }
    }

    /// Configured delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `value` for `now + delay`, cancelling any pending task.
    pub fn schedule(&mut self, value: T, now: Instant) -> TaskHandle {
        let handle = TaskHandle(self.next_handle);
        self.next_handle = self.next_handle.wrapping_add(1);
        self.pending = Some(Scheduled {
            value,
            due: now + self.delay,
            handle,
        });
        handle
    }

    /// Drop the pending task, returning its value.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|s| s.value)
    }

    /// Whether `handle` is still the pending task.
    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.pending.as_ref().is_some_and(|s| s.handle == handle)
    }

    /// When the pending task fires, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|s| s.due)
    }

    /// Fire the pending task if it is due at `now`.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let due = self.pending.as_ref().is_some_and(|s| s.due <= now);
        if due {
            self.cancel()
        } else {
            None
        }
    }

    /// Fire the pending task immediately regardless of its deadline.
    pub fn flush(&mut self) -> Option<T> {
        self.cancel()
    }
}

/// Time until the earliest of `deadlines`, capped at `max`.
///
/// Used to size the event-poll timeout so a due task is not delayed by an
/// idle terminal.
pub fn time_until_next(
    deadlines: impl IntoIterator<Item = Option<Instant>>,
    now: Instant,
    max: Duration,
) -> Duration {
    deadlines
        .into_iter()
        .flatten()
        .map(|d| d.saturating_duration_since(now))
        .min()
        .map_or(max, |d| d.min(max))
}

#[cfg(test)]
#[path = "debounce_tests.rs"]
mod tests;
