//! Aid lifecycle reducer (pure).
//!
//! `update(page, msg) -> (page', command?)`. The reducer never talks to the
//! service; it returns a [`Command`] that the shell executes and whose result
//! comes back as another [`Msg`]. A failed call therefore never leaves a
//! half-applied change: local state only moves once the result message
//! arrives.
//!
//! Each control tracks at most one outstanding call of its own (refresh, bulk,
//! and one per record for single completion). Calls from different controls
//! may overlap freely.

use crate::model::{AidError, AidId, AidStatus, Ingested};
use crate::state::aid_page::{AidPage, Partition};
use crate::state::bulk::{plan_bulk, BulkPlan};
use crate::state::notifications::Severity;
use std::num::NonZeroUsize;

/// Service acknowledgement: the optional human-readable message.
pub type Ack = Result<Option<String>, AidError>;

/// Inputs to the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Refetch both partitions.
    RefreshRequested,
    /// A fetch finished.
    RecordsFetched(Result<Ingested, AidError>),

    /// A (debounced) search term for one list.
    FilterChanged {
        /// Target list.
        partition: Partition,
        /// New term, as typed.
        term: String,
    },
    /// Page navigation for one list.
    PageRequested {
        /// Target list.
        partition: Partition,
        /// Requested page, clamped on apply.
        page: usize,
    },
    /// Page-size change for one list.
    PerPageChanged {
        /// Target list.
        partition: Partition,
        /// New page size.
        per_page: NonZeroUsize,
    },

    /// Admin asked to complete one Future record; needs confirmation.
    CompleteRequested(AidId),
    /// Admin confirmed the pending completion.
    CompleteConfirmed,
    /// Admin dismissed the pending completion.
    CompleteCancelled,
    /// A single completion call finished.
    CompleteFinished {
        /// Record the call was for.
        id: AidId,
        /// Service outcome.
        result: Ack,
    },

    /// Admin confirmed the bulk dialog with this exception text.
    BulkConfirmed {
        /// Raw textbox contents, one beneficiary id per line.
        exception_text: String,
    },
    /// The bulk call finished.
    BulkFinished(Ack),
}

/// Remote work requested by the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Fetch every record.
    FetchAll,
    /// Set one record's status.
    UpdateStatus {
        /// Record to update.
        id: AidId,
        /// Target status.
        status: AidStatus,
    },
    /// Complete and delete in one call.
    BulkProcess(BulkPlan),
}

/// Apply one message.
pub fn update(mut page: AidPage, msg: Msg) -> (AidPage, Option<Command>) {
    let command = match msg {
        Msg::RefreshRequested => request_refresh(&mut page),
        Msg::RecordsFetched(result) => on_fetched(&mut page, result),

        Msg::FilterChanged { partition, term } => {
            page.list_mut(partition).set_filter(&term);
            None
        }
        Msg::PageRequested { partition, page: n } => {
            page.list_mut(partition).set_page(n);
            None
        }
        Msg::PerPageChanged {
            partition,
            per_page,
        } => {
            page.list_mut(partition).set_per_page(per_page);
            None
        }

        Msg::CompleteRequested(id) => {
            if page.completing.contains(&id) {
                // control is disabled while its call is outstanding
            } else if page.future.contains(&id) {
                page.pending_confirmation = Some(id);
            } else {
                page.notifications.push(
                    Severity::Warning,
                    format!("Record {id} is not in the Future list"),
                );
            }
            None
        }
        Msg::CompleteCancelled => {
            page.pending_confirmation = None;
            None
        }
        Msg::CompleteConfirmed => {
            let id = page.pending_confirmation.take();
            match id {
                Some(id) if page.future.contains(&id) && page.completing.insert(id.clone()) => {
                    Some(Command::UpdateStatus {
                        id,
                        status: AidStatus::Completed,
                    })
                }
                _ => None,
            }
        }
        Msg::CompleteFinished { id, result } => {
            on_completed(&mut page, id, result);
            None
        }

        Msg::BulkConfirmed { exception_text } => {
            if page.bulk_in_flight {
                None
            } else {
                match plan_bulk(page.future.filtered(), &exception_text) {
                    Ok(plan) => {
                        page.bulk_in_flight = true;
                        Some(Command::BulkProcess(plan))
                    }
                    Err(err) => {
                        page.notifications.push_error(&err);
                        None
                    }
                }
            }
        }
        Msg::BulkFinished(result) => {
            page.bulk_in_flight = false;
            match result {
                Ok(message) => {
                    page.notifications.push(
                        Severity::Success,
                        message.unwrap_or_else(|| "Bulk operation applied".to_string()),
                    );
                    request_refresh(&mut page)
                }
                Err(err) => {
                    page.notifications.push_error(&err);
                    None
                }
            }
        }
    };
    (page, command)
}

/// Start a fetch, or queue one behind the outstanding fetch so that the
/// result reflects every mutation confirmed so far.
fn request_refresh(page: &mut AidPage) -> Option<Command> {
    if page.refresh_in_flight {
        page.refresh_queued = true;
        None
    } else {
        page.refresh_in_flight = true;
        Some(Command::FetchAll)
    }
}

fn on_fetched(page: &mut AidPage, result: Result<Ingested, AidError>) -> Option<Command> {
    page.refresh_in_flight = false;
    match result {
        Ok(ingested) => {
            if !ingested.rejected.is_empty() {
                page.notifications.push(
                    Severity::Warning,
                    format!(
                        "{} record(s) skipped as malformed or duplicate (see log)",
                        ingested.rejected.len()
                    ),
                );
            }
            page.load(ingested.records);
        }
        Err(err) => page.notifications.push_error(&err),
    }
    if std::mem::take(&mut page.refresh_queued) {
        request_refresh(page)
    } else {
        None
    }
}

fn on_completed(page: &mut AidPage, id: AidId, result: Ack) {
    page.completing.remove(&id);
    match result {
        Ok(message) => {
            if let Some(record) = page.future.remove(&id) {
                if let Some(done) = record.completed() {
                    page.completed.insert(done);
                }
            }
            page.notifications.push(
                Severity::Success,
                message.unwrap_or_else(|| format!("Record {id} marked delivered")),
            );
        }
        Err(err) => page.notifications.push_error(&err),
    }
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod tests;
