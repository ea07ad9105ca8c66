// SPDX-License-Identifier: MPL-2.0
//! Cancellable one-shot timers driven by an external clock.

use crate::toast::ToastId;
use std::time::{Duration, Instant};

/// Handle to a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

/// Capability to schedule deferred dismissals.
pub trait Scheduler {
    /// Schedules a one-shot timer for `owner`, firing `after` from now.
    fn schedule(&mut self, owner: &ToastId, after: Duration) -> TimerHandle;

    /// Cancels a timer. Unknown or already-fired handles are ignored.
    fn cancel(&mut self, handle: TimerHandle);
}

#[derive(Debug, Clone)]
struct Pending {
    handle: TimerHandle,
    owner: ToastId,
    due: Instant,
}

/// Timer queue whose notion of "now" is advanced by the caller.
#[derive(Debug, Clone)]
pub struct TimerQueue {
    now: Instant,
    next_handle: u64,
    pending: Vec<Pending>,
}

impl TimerQueue {
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self {
            now,
            next_handle: 0,
            pending: Vec::new(),
        }
    }

    #[must_use]
    pub fn now(&self) -> Instant {
        self.now
    }

    /// Moves the clock forward. Earlier instants are ignored.
    pub fn advance_to(&mut self, now: Instant) {
        if now > self.now {
            self.now = now;
        }
    }

    /// Instant of the earliest pending timer.
    #[must_use]
    pub fn next_due(&self) -> Option<Instant> {
        self.pending.iter().map(|pending| pending.due).min()
    }

    /// Removes and returns every timer due by the current clock, earliest
    /// first.
    pub fn pop_due(&mut self) -> Vec<(TimerHandle, ToastId)> {
        let now = self.now;
        let mut due: Vec<Pending> = Vec::new();
        self.pending.retain(|pending| {
            if pending.due <= now {
                due.push(pending.clone());
                false
            } else {
                true
            }
        });
        due.sort_by_key(|pending| pending.due);
        due.into_iter()
            .map(|pending| (pending.handle, pending.owner))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl Scheduler for TimerQueue {
    fn schedule(&mut self, owner: &ToastId, after: Duration) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.pending.push(Pending {
            handle,
            owner: owner.clone(),
            due: self.now + after,
        });
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.pending.retain(|pending| pending.handle != handle);
    }
}
