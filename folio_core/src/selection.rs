//! # Active Card Selection
//!
//! Tracks which card is currently highlighted and when that highlight runs
//! out. The controller is a two-state machine:
//!
//! ```text
//!            select(a)                 select(b)
//!   Idle ──────────────▶ Active(a) ──────────────▶ Active(b)
//!    ▲                      │
//!    └──── expiry / clear ──┘
//! ```
//!
//! Every transition into `Active` issues a fresh [`ExpiryTicket`]. The
//! ticket is what the host's timer hands back when it fires, and only the
//! ticket of the current selection can clear it. A timer left over from an
//! earlier selection therefore cannot wipe a newer one, even if the host
//! failed to cancel it.
//!
//! Time is passed in explicitly, so hosts can drive expiry either from a
//! scheduled callback ([`SelectionController::expire`]) or from a clock
//! tick ([`SelectionController::expire_due`]).
//!
//! ## Example
//!
//! ```rust
//! use std::time::{Duration, Instant};
//! use folio_core::selection::SelectionController;
//!
//! let mut selection = SelectionController::new(Duration::from_millis(800));
//! let t0 = Instant::now();
//!
//! let first = selection.select("harbour-house", t0).unwrap();
//! let second = selection.select("dune-house", t0 + Duration::from_millis(300)).unwrap();
//!
//! // The first timer fires late: ignored
//! assert!(!selection.expire(first));
//! assert_eq!(selection.active_slug(), Some("dune-house"));
//!
//! assert!(selection.expire(second));
//! assert_eq!(selection.active_slug(), None);
//! ```

use std::time::{Duration, Instant};

use tracing::{debug, trace};

/// Default highlight lifetime
pub const DEFAULT_EXPIRY: Duration = Duration::from_millis(800);

/// Token identifying one scheduled expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryTicket {
    generation: u64,
    deadline: Instant,
}

impl ExpiryTicket {
    /// When this expiry is due
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Time left until the deadline, saturating at zero
    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }
}

/// Observable selection state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState<'a> {
    Idle,
    Active(&'a str),
}

#[derive(Debug, Clone)]
struct ActiveSelection {
    slug: String,
    ticket: ExpiryTicket,
}

/// Holds at most one active slug and its single pending expiry.
#[derive(Debug, Clone)]
pub struct SelectionController {
    expiry: Duration,
    active: Option<ActiveSelection>,
    generation: u64,
}

impl SelectionController {
    pub fn new(expiry: Duration) -> Self {
        SelectionController {
            expiry,
            active: None,
            generation: 0,
        }
    }

    pub fn expiry(&self) -> Duration {
        self.expiry
    }

    pub fn state(&self) -> SelectionState<'_> {
        match &self.active {
            Some(active) => SelectionState::Active(&active.slug),
            None => SelectionState::Idle,
        }
    }

    pub fn active_slug(&self) -> Option<&str> {
        self.active.as_ref().map(|a| a.slug.as_str())
    }

    pub fn is_active(&self, slug: &str) -> bool {
        self.active_slug() == Some(slug)
    }

    /// The ticket of the one live expiry, if any
    pub fn pending(&self) -> Option<ExpiryTicket> {
        self.active.as_ref().map(|a| a.ticket)
    }

    /// Mark `slug` as the active card.
    ///
    /// Returns the ticket the host must schedule, or `None` if `slug` is
    /// already active (its running expiry is kept). Any previously pending
    /// ticket is invalidated.
    pub fn select(&mut self, slug: impl Into<String>, now: Instant) -> Option<ExpiryTicket> {
        let slug = slug.into();
        if self.is_active(&slug) {
            trace!(%slug, "card already active");
            return None;
        }

        self.generation += 1;
        let ticket = ExpiryTicket {
            generation: self.generation,
            deadline: now + self.expiry,
        };

        if let Some(previous) = self.active.take() {
            debug!(from = %previous.slug, to = %slug, "active card replaced, previous expiry cancelled");
        } else {
            debug!(%slug, "card activated");
        }

        self.active = Some(ActiveSelection { slug, ticket });
        Some(ticket)
    }

    /// Clear the selection explicitly.
    ///
    /// Returns the ticket that was cancelled. No-op when idle.
    pub fn clear(&mut self) -> Option<ExpiryTicket> {
        let cancelled = self.active.take().map(|a| a.ticket);
        if cancelled.is_some() {
            debug!("selection cleared");
        }
        cancelled
    }

    /// Handle a fired timer.
    ///
    /// Clears the selection only if `ticket` is the current one. Returns
    /// `true` if this call moved the controller to `Idle`.
    pub fn expire(&mut self, ticket: ExpiryTicket) -> bool {
        match &self.active {
            Some(active) if active.ticket == ticket => {
                debug!(slug = %active.slug, "selection expired");
                self.active = None;
                true
            }
            _ => {
                trace!(generation = ticket.generation, "stale expiry ignored");
                false
            }
        }
    }

    /// Expire the selection if its deadline has passed at `now`.
    pub fn expire_due(&mut self, now: Instant) -> bool {
        match self.pending() {
            Some(ticket) if ticket.deadline <= now => self.expire(ticket),
            _ => false,
        }
    }
}

impl Default for SelectionController {
    fn default() -> Self {
        SelectionController::new(DEFAULT_EXPIRY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_starts_idle() {
        let selection = SelectionController::default();
        assert_eq!(selection.state(), SelectionState::Idle);
        assert_eq!(selection.expiry(), ms(800));
        assert!(selection.pending().is_none());
    }

    #[test]
    fn test_select_activates() {
        let mut selection = SelectionController::default();
        let t0 = Instant::now();
        let ticket = selection.select("a", t0).unwrap();

        assert_eq!(selection.state(), SelectionState::Active("a"));
        assert_eq!(ticket.deadline(), t0 + ms(800));
        assert_eq!(selection.pending(), Some(ticket));
    }

    #[test]
    fn test_reselect_replaces_pending_ticket() {
        let mut selection = SelectionController::default();
        let t0 = Instant::now();
        let a = selection.select("a", t0).unwrap();
        let b = selection.select("b", t0 + ms(200)).unwrap();

        assert_ne!(a, b);
        assert_eq!(selection.pending(), Some(b));
        assert!(!selection.expire(a));
        assert_eq!(selection.state(), SelectionState::Active("b"));
    }

    #[test]
    fn test_stale_deadline_does_not_clear_newer_selection() {
        let mut selection = SelectionController::default();
        let t0 = Instant::now();
        selection.select("a", t0);
        selection.select("b", t0 + ms(500));

        // A's deadline (t0 + 800) has passed, B's (t0 + 1300) has not
        assert!(!selection.expire_due(t0 + ms(900)));
        assert_eq!(selection.active_slug(), Some("b"));

        assert!(selection.expire_due(t0 + ms(1300)));
        assert_eq!(selection.state(), SelectionState::Idle);
    }

    #[test]
    fn test_expires_exactly_once() {
        let mut selection = SelectionController::default();
        let t0 = Instant::now();
        let ticket = selection.select("a", t0).unwrap();

        assert!(!selection.expire_due(t0 + ms(799)));
        assert!(selection.expire_due(t0 + ms(800)));
        assert!(!selection.expire_due(t0 + ms(2000)));
        assert!(!selection.expire(ticket));
    }

    #[test]
    fn test_selecting_same_card_keeps_running_expiry() {
        let mut selection = SelectionController::default();
        let t0 = Instant::now();
        let ticket = selection.select("a", t0).unwrap();

        assert!(selection.select("a", t0 + ms(400)).is_none());
        assert_eq!(selection.pending(), Some(ticket));
        assert!(selection.expire_due(t0 + ms(800)));
    }

    #[test]
    fn test_clear() {
        let mut selection = SelectionController::default();
        assert!(selection.clear().is_none());

        let ticket = selection.select("a", Instant::now()).unwrap();
        assert_eq!(selection.clear(), Some(ticket));
        assert_eq!(selection.state(), SelectionState::Idle);
        assert!(!selection.expire(ticket));
    }

    #[test]
    fn test_ticket_remaining() {
        let mut selection = SelectionController::new(ms(100));
        let t0 = Instant::now();
        let ticket = selection.select("a", t0).unwrap();
        assert_eq!(ticket.remaining(t0 + ms(40)), ms(60));
        assert_eq!(ticket.remaining(t0 + ms(400)), Duration::ZERO);
    }
}
