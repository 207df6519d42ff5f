// Per-control re-entrancy guard: Idle -> Pending -> Idle.
// A control is Pending for exactly as long as its `PendingToggle` is alive.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleState {
    Idle,
    /// Control disabled while the request is in flight
    Pending,
}

#[derive(Debug, Default)]
pub struct ToggleBank {
    pending: Mutex<HashSet<String>>,
}

impl ToggleBank {
    pub fn new() -> Self {
        Self::default()
    }

    fn pending(&self) -> MutexGuard<'_, HashSet<String>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Move `control` to Pending. `None` if it already is; the caller must then drop the request.
    pub fn try_begin(&self, control: impl Into<String>) -> Option<PendingToggle<'_>> {
        let control = control.into();
        if !self.pending().insert(control.clone()) {
            return None;
        }
        Some(PendingToggle { bank: self, control })
    }

    pub fn state(&self, control: &str) -> ToggleState {
        if self.pending().contains(control) {
            ToggleState::Pending
        } else {
            ToggleState::Idle
        }
    }

    pub fn is_pending(&self, control: &str) -> bool {
        self.state(control) == ToggleState::Pending
    }
}

/// Returns its control to Idle when dropped
#[derive(Debug)]
pub struct PendingToggle<'a> {
    bank: &'a ToggleBank,
    control: String,
}

impl Drop for PendingToggle<'_> {
    fn drop(&mut self) {
        self.bank.pending().remove(&self.control);
    }
}
