//! Sync register — decides when and what to send to the remote store.
//!
//! DESIGN
//! ======
//! The register is an explicit two-slot state machine rather than a timer
//! loop: one slot for the payload currently on the wire, one slot for the
//! newest payload observed while that request was in flight. Rapid bursts
//! of mutation therefore collapse into at most one follow-up request, and
//! a follow-up always carries the latest observed state, never the state
//! that happened to be in flight when it was recorded.
//!
//! Invariants, enforced structurally:
//! - at most one payload in flight at any time;
//! - at most one payload pending, overwritten by newer observations;
//! - a payload equal to the last acknowledged state is never dispatched.
//!
//! The register is pure — the caller performs the actual network call for
//! every payload returned from [`SyncRegister::request`] and
//! [`SyncRegister::complete`] and reports the outcome back.

#[cfg(test)]
#[path = "sync_test.rs"]
mod sync_test;

use geometry::rect::SizeLocation;

/// Two-slot dispatch register tracking remote acknowledgement state.
#[derive(Debug, Default)]
pub struct SyncRegister {
    last_acknowledged: Option<SizeLocation>,
    in_flight: Option<SizeLocation>,
    pending: Option<SizeLocation>,
}

impl SyncRegister {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt `acked` as the state the remote store is known to hold,
    /// e.g. after the initial load.
    pub fn adopt(&mut self, acked: SizeLocation) {
        self.last_acknowledged = Some(acked);
    }

    /// The last payload the remote store acknowledged, if any.
    #[must_use]
    pub fn last_acknowledged(&self) -> Option<SizeLocation> {
        self.last_acknowledged
    }

    /// Whether a request is currently on the wire.
    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Ask for `sanitized` to be persisted.
    ///
    /// Returns the payload when the caller should dispatch a request now.
    /// Returns `None` when the payload matches the last acknowledged state
    /// (nothing to do) or when a request is already in flight (the payload
    /// is parked in the pending slot, replacing any older parked value).
    pub fn request(&mut self, sanitized: SizeLocation) -> Option<SizeLocation> {
        if self.last_acknowledged == Some(sanitized) {
            return None;
        }
        if self.in_flight.is_some() {
            self.pending = Some(sanitized);
            return None;
        }
        self.in_flight = Some(sanitized);
        Some(sanitized)
    }

    /// Record the outcome of the in-flight request.
    ///
    /// On success the dispatched payload becomes the acknowledged state; on
    /// failure acknowledgement is left untouched so a later request with
    /// the same payload is retried rather than suppressed. Either way, a
    /// parked pending payload is re-requested immediately and returned for
    /// dispatch if it still differs from the acknowledged state.
    pub fn complete(&mut self, ok: bool) -> Option<SizeLocation> {
        let Some(sent) = self.in_flight.take() else {
            return None;
        };
        if ok {
            self.last_acknowledged = Some(sent);
        }
        if let Some(parked) = self.pending.take() {
            self.request(parked)
        } else {
            None
        }
    }
}
