//! Bookkeeping for the one pending selection-expiry task.
//!
//! The page core decides *whether* a fired ticket still counts; this side
//! makes sure at most one sleeping task is alive. Starting a new timer
//! aborts the previous one, and so do an explicit cancel and dropping the
//! tracker.

use iced::task;
use tracing::trace;

use folio_core::ExpiryTicket;

/// Something that can stop a running task.
pub trait AbortHandle {
    fn abort(&self);
}

impl AbortHandle for task::Handle {
    fn abort(&self) {
        task::Handle::abort(self);
    }
}

struct Pending<H> {
    ticket: ExpiryTicket,
    handle: H,
}

/// Tracks the abort handle of the live expiry task, if any.
pub struct ExpiryTimer<H: AbortHandle = task::Handle> {
    pending: Option<Pending<H>>,
}

impl<H: AbortHandle> ExpiryTimer<H> {
    pub fn new() -> Self {
        ExpiryTimer { pending: None }
    }

    /// Ticket of the task currently being tracked
    pub fn pending(&self) -> Option<ExpiryTicket> {
        self.pending.as_ref().map(|p| p.ticket)
    }

    /// Track the task for `ticket`, aborting the previous one first.
    pub fn replace(&mut self, ticket: ExpiryTicket, handle: H) {
        self.cancel();
        self.pending = Some(Pending { ticket, handle });
    }

    /// Abort the tracked task. Returns `true` if there was one.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(pending) => {
                trace!(deadline = ?pending.ticket.deadline(), "expiry task aborted");
                pending.handle.abort();
                true
            }
            None => false,
        }
    }

    /// A task reported `ticket`. Stops tracking it if it is the current
    /// one; a late report from an older task leaves the current one alone.
    pub fn finished(&mut self, ticket: ExpiryTicket) -> bool {
        if self.pending() == Some(ticket) {
            self.pending = None;
            true
        } else {
            false
        }
    }
}

impl<H: AbortHandle> Default for ExpiryTimer<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: AbortHandle> Drop for ExpiryTimer<H> {
    fn drop(&mut self) {
        self.cancel();
    }
}
