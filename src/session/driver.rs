use std::collections::BTreeMap;

use crate::{
    animation::ease::Ease,
    effects::transitions::{SlideDir, TransitionFrame, TransitionKind, sample},
    foundation::core::{Direction, ItemId, Millis},
};

/// Identifies one playback handed to a [`TransitionDriver`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TransitionTicket(pub u64);

/// Everything a driver needs to play one transition.
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionRequest {
    /// Ticket the host reports completion against.
    pub ticket: TransitionTicket,
    /// Item being replaced; absent on first activation.
    pub outgoing: Option<ItemId>,
    /// Item being presented.
    pub incoming: ItemId,
    /// Direction tag of the transition.
    pub direction: Direction,
    /// Effect to play.
    pub kind: TransitionKind,
    /// Configured slide axis.
    pub slide: SlideDir,
    /// Easing applied to progress.
    pub ease: Ease,
    /// Configured duration.
    pub duration: Millis,
}

/// How a driver took a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Playback {
    /// Already complete; the controller settles immediately.
    Finished,
    /// Playing; the host reports completion for this ticket exactly once.
    Pending(TransitionTicket),
}

/// Plays the visual effect between two items.
///
/// A driver must always finish: when the underlying mechanism is unavailable it returns
/// [`Playback::Finished`] from `play` instead of waiting.
pub trait TransitionDriver {
    /// Whether animated effects are available. Fixed at construction.
    fn animated(&self) -> bool;

    /// Start playing `request`.
    fn play(&mut self, request: TransitionRequest) -> Playback;
}

/// Driver with no animation support: every transition is an instant swap.
#[derive(Clone, Copy, Debug, Default)]
pub struct InstantDriver;

impl TransitionDriver for InstantDriver {
    fn animated(&self) -> bool {
        false
    }

    fn play(&mut self, _request: TransitionRequest) -> Playback {
        Playback::Finished
    }
}

#[derive(Clone, Debug)]
struct Running {
    request: TransitionRequest,
    started: Millis,
    deadline: Millis,
}

/// Time-based driver that samples effects against an externally advanced clock.
///
/// Each playback finishes no later than `start + duration`; there is no way for a playback to
/// outlive its deadline.
#[derive(Debug)]
pub struct TimedDriver {
    animated: bool,
    now: Millis,
    running: BTreeMap<TransitionTicket, Running>,
}

impl TimedDriver {
    /// Driver with animation support reported as `animated`.
    pub fn new(animated: bool) -> Self {
        Self {
            animated,
            now: Millis::ZERO,
            running: BTreeMap::new(),
        }
    }

    /// Current driver time.
    pub fn now(&self) -> Millis {
        self.now
    }

    /// Number of playbacks still running.
    pub fn in_flight(&self) -> usize {
        self.running.len()
    }

    /// Earliest deadline among running playbacks.
    pub fn next_deadline(&self) -> Option<Millis> {
        self.running.values().map(|r| r.deadline).min()
    }

    /// Move the clock to `now` and return the tickets that finished, earliest deadline first.
    pub fn advance_to(&mut self, now: Millis) -> Vec<TransitionTicket> {
        self.now = self.now.max(now);
        let mut done: Vec<(Millis, TransitionTicket)> = self
            .running
            .iter()
            .filter(|(_, r)| r.deadline <= self.now)
            .map(|(t, r)| (r.deadline, *t))
            .collect();
        done.sort();
        for (_, ticket) in &done {
            self.running.remove(ticket);
        }
        done.into_iter().map(|(_, t)| t).collect()
    }

    /// Sample the running playback for `ticket` at the current time.
    pub fn frame(&self, ticket: TransitionTicket) -> Option<TransitionFrame> {
        let run = self.running.get(&ticket)?;
        let total = run.deadline.saturating_sub(run.started).0;
        let elapsed = self.now.saturating_sub(run.started).0;
        let t = if total == 0 {
            1.0
        } else {
            elapsed as f64 / total as f64
        };
        let req = &run.request;
        Some(sample(req.kind, req.slide, req.direction, req.ease.apply(t)))
    }
}

impl TransitionDriver for TimedDriver {
    fn animated(&self) -> bool {
        self.animated
    }

    fn play(&mut self, request: TransitionRequest) -> Playback {
        if !self.animated || request.kind == TransitionKind::None || request.duration.is_zero() {
            return Playback::Finished;
        }
        let ticket = request.ticket;
        let deadline = self.now.saturating_add(request.duration);
        tracing::trace!(ticket = ticket.0, deadline = deadline.0, "transition playing");
        self.running.insert(
            ticket,
            Running {
                request,
                started: self.now,
                deadline,
            },
        );
        Playback::Pending(ticket)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/driver.rs"]
mod tests;
