use serde::{Deserialize, Serialize};
use std::cell::RefCell;

///
/// EventState
/// Ephemeral, in-memory pagination counters for the current thread.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub(crate) struct EventState {
    pub(crate) ops: EventOps,
}

///
/// EventOps
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct EventOps {
    // Paginator entrypoints by mode
    pub first_calls: u64,
    pub before_calls: u64,
    pub after_calls: u64,

    // Outcomes
    pub pages_returned: u64,
    pub rows_returned: u64,
    pub pages_with_previous: u64,
    pub pages_with_next: u64,
    pub not_found: u64,
    pub rejected: u64,
    pub failed: u64,

    // Store reads by operation
    pub reads_first: u64,
    pub reads_range_before: u64,
    pub reads_range_after: u64,
    pub reads_exists_before: u64,
    pub reads_exists_after: u64,
    pub rows_read: u64,
}

impl EventOps {
    /// Total store reads across every operation.
    #[must_use]
    pub const fn store_reads(&self) -> u64 {
        self.reads_first
            .saturating_add(self.reads_range_before)
            .saturating_add(self.reads_range_after)
            .saturating_add(self.reads_exists_before)
            .saturating_add(self.reads_exists_after)
    }
}

///
/// EventReport
/// Point-in-time snapshot of pagination counters.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct EventReport {
    pub ops: EventOps,
}

thread_local! {
    static EVENT_STATE: RefCell<EventState> = RefCell::new(EventState::default());
}

/// Borrow metrics immutably.
pub(crate) fn with_state<R>(f: impl FnOnce(&EventState) -> R) -> R {
    EVENT_STATE.with(|m| f(&m.borrow()))
}

/// Borrow metrics mutably.
pub(crate) fn with_state_mut<R>(f: impl FnOnce(&mut EventState) -> R) -> R {
    EVENT_STATE.with(|m| f(&mut m.borrow_mut()))
}

/// Reset all counters.
pub(crate) fn reset_all() {
    with_state_mut(|m| *m = EventState::default());
}

/// Snapshot the current counters.
pub(crate) fn report() -> EventReport {
    with_state(|m| EventReport { ops: m.ops.clone() })
}
