use std::collections::BTreeSet;

use crate::foundation::core::Millis;

/// Opaque handle to one scheduled timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerHandle(pub u64);

/// One-shot timer source the controller arms auto-advance with.
pub trait Scheduler {
    /// Arm a timer that fires once after `delay`.
    fn schedule(&mut self, delay: Millis) -> TimerHandle;

    /// Disarm `handle`. Unknown or already-fired handles are ignored.
    fn cancel(&mut self, handle: TimerHandle);
}

/// Deterministic scheduler driven by an externally advanced virtual clock.
#[derive(Debug, Default)]
pub struct VirtualScheduler {
    now: Millis,
    next_id: u64,
    // (deadline, handle) keeps deadline order with creation order on ties.
    pending: BTreeSet<(Millis, TimerHandle)>,
}

impl VirtualScheduler {
    /// Scheduler whose clock starts at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    pub fn now(&self) -> Millis {
        self.now
    }

    /// Number of armed timers.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Earliest armed deadline, if any.
    pub fn next_deadline(&self) -> Option<Millis> {
        self.pending.first().map(|(at, _)| *at)
    }

    /// Move the clock forward to `now` and return every timer that expired, in firing order.
    ///
    /// The clock never moves backwards.
    pub fn advance_to(&mut self, now: Millis) -> Vec<TimerHandle> {
        self.now = self.now.max(now);
        let mut fired = Vec::new();
        while let Some(&(at, handle)) = self.pending.first() {
            if at > self.now {
                break;
            }
            self.pending.pop_first();
            fired.push(handle);
        }
        fired
    }
}

impl Scheduler for VirtualScheduler {
    fn schedule(&mut self, delay: Millis) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.pending.insert((self.now.saturating_add(delay), handle));
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.pending.retain(|(_, h)| *h != handle);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/timer.rs"]
mod tests;
