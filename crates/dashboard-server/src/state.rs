//! Latest-round state container
//!
//! One explicitly owned slot holds the most recent snapshot; every new
//! result replaces it wholesale. A single pending flag gives trigger mutual
//! exclusion, and completion is last-write-wins with no per-request
//! identity, so a result that arrives after the requester navigated away
//! still lands in the slot.

use parking_lot::RwLock;
use round_core::RoundSnapshot;
use serde::Serialize;

/// Display phase for the round view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundPhase {
    /// Nothing fetched yet; the fallback dataset is shown
    NoData,
    /// A trigger is in flight
    Loading,
    /// Showing the result of one round
    Displaying(u64),
}

#[derive(Debug, Default)]
struct Inner {
    snapshot: Option<RoundSnapshot>,
    pending: bool,
    last_error: Option<String>,
}

#[derive(Debug, Default)]
pub struct RoundState {
    inner: RwLock<Inner>,
}

impl RoundState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the pending slot. Returns `false` when a round is already in
    /// flight; the caller must not trigger upstream in that case.
    pub fn begin(&self) -> bool {
        let mut inner = self.inner.write();
        if inner.pending {
            return false;
        }
        inner.pending = true;
        inner.last_error = None;
        true
    }

    /// Apply a completed round, replacing the previous snapshot wholesale
    pub fn complete(&self, snapshot: RoundSnapshot) {
        let mut inner = self.inner.write();
        inner.pending = false;
        inner.last_error = None;
        inner.snapshot = Some(snapshot);
    }

    /// Record a failed trigger. The previous snapshot stays intact, so a
    /// bad fetch never clears good data.
    pub fn fail(&self, message: String) {
        let mut inner = self.inner.write();
        inner.pending = false;
        inner.last_error = Some(message);
    }

    pub fn phase(&self) -> RoundPhase {
        let inner = self.inner.read();
        if inner.pending {
            RoundPhase::Loading
        } else {
            match &inner.snapshot {
                Some(snapshot) => RoundPhase::Displaying(snapshot.round_id),
                None => RoundPhase::NoData,
            }
        }
    }

    pub fn snapshot(&self) -> Option<RoundSnapshot> {
        self.inner.read().snapshot.clone()
    }

    pub fn last_error(&self) -> Option<String> {
        self.inner.read().last_error.clone()
    }
}
