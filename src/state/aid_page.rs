//! Per-page context for the aid log screen.
//!
//! Holds both record partitions plus the in-flight bookkeeping for every
//! control that can talk to the service. One value is built per screen and
//! passed explicitly; nothing here is global.

use crate::model::{AidId, AidRecord, AidStatus};
use crate::state::list_state::ListState;
use crate::state::notifications::Notifications;
use std::collections::HashSet;
use std::num::NonZeroUsize;

/// Which partition a list holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Partition {
    /// Scheduled, not yet delivered.
    #[default]
    Future,
    /// Delivered.
    Completed,
}

impl Partition {
    /// The other partition.
    pub fn other(self) -> Self {
        match self {
            Partition::Future => Partition::Completed,
            Partition::Completed => Partition::Future,
        }
    }

    /// Tab title.
    pub fn title(self) -> &'static str {
        match self {
            Partition::Future => "Future",
            Partition::Completed => "Completed",
        }
    }

    /// Partition a record with this status belongs to.
    pub fn of(status: AidStatus) -> Self {
        match status {
            AidStatus::Future => Partition::Future,
            AidStatus::Completed => Partition::Completed,
        }
    }
}

/// Split a fetched batch by status, preserving fetch order within each side.
///
/// A repeated aid id keeps its first occurrence, so no id lands in both sides.
pub fn partition_records(records: Vec<AidRecord>) -> (Vec<AidRecord>, Vec<AidRecord>) {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|r| seen.insert(r.id.clone()))
        .partition(|r| Partition::of(r.status) == Partition::Future)
}

/// State of the aid log screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AidPage {
    pub(crate) future: ListState,
    pub(crate) completed: ListState,
    /// Record awaiting the admin's yes/no before completion.
    pub(crate) pending_confirmation: Option<AidId>,
    /// Records whose completion call is outstanding.
    pub(crate) completing: HashSet<AidId>,
    pub(crate) bulk_in_flight: bool,
    pub(crate) refresh_in_flight: bool,
    /// A refetch was requested while another one was outstanding.
    pub(crate) refresh_queued: bool,
    pub(crate) loaded: bool,
    /// Notifications raised by lifecycle operations.
    pub notifications: Notifications,
}

impl Default for AidPage {
    fn default() -> Self {
        Self::new(crate::state::list_state::DEFAULT_PER_PAGE)
    }
}

impl AidPage {
    /// Empty page; both lists use `per_page` rows.
    pub fn new(per_page: NonZeroUsize) -> Self {
        Self {
            future: ListState::new(per_page),
            completed: ListState::new(per_page),
            pending_confirmation: None,
            completing: HashSet::new(),
            bulk_in_flight: false,
            refresh_in_flight: false,
            refresh_queued: false,
            loaded: false,
            notifications: Notifications::default(),
        }
    }

    /// List for a partition.
    pub fn list(&self, partition: Partition) -> &ListState {
        match partition {
            Partition::Future => &self.future,
            Partition::Completed => &self.completed,
        }
    }

    pub(crate) fn list_mut(&mut self, partition: Partition) -> &mut ListState {
        match partition {
            Partition::Future => &mut self.future,
            Partition::Completed => &mut self.completed,
        }
    }

    /// Replace both partitions from one fetched batch.
    pub fn load(&mut self, records: Vec<AidRecord>) {
        let (future, completed) = partition_records(records);
        self.future.load(future);
        self.completed.load(completed);
        self.loaded = true;
        if let Some(id) = &self.pending_confirmation {
            if !self.future.contains(id) {
                self.pending_confirmation = None;
            }
        }
    }

    /// Whether at least one fetch has succeeded.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Record awaiting confirmation, if any.
    pub fn pending_confirmation(&self) -> Option<&AidRecord> {
        self.pending_confirmation
            .as_ref()
            .and_then(|id| self.future.get(id))
    }

    /// Whether this record's completion control is disabled.
    pub fn is_completing(&self, id: &AidId) -> bool {
        self.completing.contains(id)
    }

    /// Number of outstanding single completions.
    pub fn completing_count(&self) -> usize {
        self.completing.len()
    }

    /// Whether the bulk control is disabled.
    pub fn is_bulk_in_flight(&self) -> bool {
        self.bulk_in_flight
    }

    /// Whether a fetch is outstanding.
    pub fn is_refreshing(&self) -> bool {
        self.refresh_in_flight
    }
}
