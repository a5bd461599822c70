//! Aid lifecycle controller (impure shell around the reducer).
//!
//! Owns the [`AidPage`], runs the pure [`update`] and executes the commands it
//! returns against an [`AidService`]. Service results re-enter as messages,
//! so every state change still goes through the reducer.
//!
//! Two ways to drive it:
//! - [`AidLifecycleController::dispatch`] awaits each command inline; used by
//!   headless callers and tests.
//! - [`AidLifecycleController::apply`] plus [`AidLifecycleController::spawn`]
//!   runs commands as tasks and posts results to a channel; used by the TUI,
//!   which must keep redrawing while calls are outstanding.

use crate::model::{ingest_records, AidError, AidId};
use crate::service::AidService;
use crate::state::{update, AidPage, Command, Msg, Partition};
use std::num::NonZeroUsize;
use std::sync::mpsc::Sender;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Execute one command and turn its outcome into the message that reports it.
///
/// Every failure is logged here; none escapes as an `Err`.
pub async fn execute<S>(service: &S, token: &str, command: Command) -> Msg
where
    S: AidService + ?Sized,
{
    match command {
        Command::FetchAll => {
            let result = service.get_all_aid_records(token).await.map(|rows| {
                let ingested = ingest_records(&rows);
                for rejected in &ingested.rejected {
                    warn!(index = rejected.index, reason = %rejected.reason, "skipping record");
                }
                info!(
                    accepted = ingested.records.len(),
                    rejected = ingested.rejected.len(),
                    "records fetched"
                );
                ingested
            });
            log_failure("getAllAidRecords", result.as_ref().err());
            Msg::RecordsFetched(result)
        }
        Command::UpdateStatus { id, status } => {
            let result = service
                .update_aid_status(token, &id, status)
                .await
                .map(|ack| ack.message);
            log_failure("updateAidStatus", result.as_ref().err());
            Msg::CompleteFinished { id, result }
        }
        Command::BulkProcess(plan) => {
            info!(
                complete = plan.complete.len(),
                delete = plan.delete.len(),
                "bulk processing"
            );
            let result = service
                .bulk_process_aid(token, &plan.complete, &plan.delete)
                .await
                .map(|ack| ack.message);
            log_failure("bulkProcessAid", result.as_ref().err());
            Msg::BulkFinished(result)
        }
    }
}

fn log_failure(action: &str, err: Option<&AidError>) {
    if let Some(err) = err {
        error!(action, error = %err, "aid service call failed");
    }
}

/// Controller for one aid log page.
pub struct AidLifecycleController<S: ?Sized = dyn AidService> {
    service: Arc<S>,
    token: Arc<str>,
    page: AidPage,
}

impl<S> AidLifecycleController<S>
where
    S: AidService + ?Sized + 'static,
{
    /// Controller with an empty page; call [`Self::refresh`] to load it.
    pub fn new(service: Arc<S>, token: impl Into<String>, per_page: NonZeroUsize) -> Self {
        Self {
            service,
            token: Arc::from(token.into()),
            page: AidPage::new(per_page),
        }
    }

    /// Current page state.
    pub fn page(&self) -> &AidPage {
        &self.page
    }

    /// Reset the notification unread counter.
    pub fn mark_notifications_read(&mut self) {
        self.page.notifications.mark_read();
    }

    /// Run the reducer for one message; return the command to execute.
    pub fn apply(&mut self, msg: Msg) -> Option<Command> {
        let page = std::mem::take(&mut self.page);
        let (page, command) = update(page, msg);
        self.page = page;
        command
    }

    /// Execute `command` on `runtime`, posting the resulting message to `tx`.
    pub fn spawn(&self, command: Command, runtime: &tokio::runtime::Handle, tx: Sender<Msg>) {
        let service = Arc::clone(&self.service);
        let token = Arc::clone(&self.token);
        runtime.spawn(async move {
            let msg = execute(&*service, &token, command).await;
            if tx.send(msg).is_err() {
                debug!("result receiver closed; dropping message");
            }
        });
    }

    /// Apply `msg` and execute commands inline until none is left.
    pub async fn dispatch(&mut self, msg: Msg) {
        let mut next = Some(msg);
        while let Some(msg) = next.take() {
            if let Some(command) = self.apply(msg) {
                next = Some(execute(&*self.service, &self.token, command).await);
            }
        }
    }

    /// Refetch both partitions.
    pub async fn refresh(&mut self) {
        self.dispatch(Msg::RefreshRequested).await;
    }

    /// Request and confirm completion of one Future record.
    pub async fn complete(&mut self, id: AidId) {
        self.dispatch(Msg::CompleteRequested(id)).await;
        self.dispatch(Msg::CompleteConfirmed).await;
    }

    /// Run the bulk workflow over the filtered Future view.
    pub async fn bulk_complete(&mut self, exception_text: impl Into<String>) {
        self.dispatch(Msg::BulkConfirmed {
            exception_text: exception_text.into(),
        })
        .await;
    }

    /// Apply a search term immediately (no debounce).
    pub async fn set_filter(&mut self, partition: Partition, term: impl Into<String>) {
        self.dispatch(Msg::FilterChanged {
            partition,
            term: term.into(),
        })
        .await;
    }

    /// Navigate one list.
    pub async fn go_to_page(&mut self, partition: Partition, page: usize) {
        self.dispatch(Msg::PageRequested { partition, page }).await;
    }
}
