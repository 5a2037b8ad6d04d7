use crate::{
    foundation::core::{Direction, Item, ItemId},
    scene::options::{Options, PauseOn},
    session::driver::{Playback, TransitionDriver, TransitionRequest, TransitionTicket},
    session::events::{CarouselEvent, EventBus, EventKind},
    session::timer::{Scheduler, TimerHandle},
};

/// Whether auto-advance is armed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    /// Never started, or stopped.
    #[default]
    Idle,
    /// Auto-advancing; a timer is armed whenever no transition is in flight.
    Running,
    /// Suspended with the intent to resume.
    Paused,
}

/// What asked for a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// First activation during initialization.
    Init,
    /// Auto-advance timer.
    Auto,
    /// Manual `next()`.
    Next,
    /// Manual `prev()`.
    Prev,
    /// Manual `go_to()`.
    To,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct InFlight {
    ticket: TransitionTicket,
    target: usize,
    direction: Direction,
    trigger: Trigger,
}

/// Whether a transition is being played.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum TransitionState {
    #[default]
    Settled,
    InProgress(InFlight),
}

/// Rotates through a fixed sequence of items.
///
/// All navigation funnels through one transition routine that emits a vetoable `show`, hands the
/// effect to the [`TransitionDriver`], and on completion moves the cursor and emits `shown`. At
/// most one transition is in flight; requests made while one is playing are dropped, never queued.
/// At most one auto-advance timer is live.
///
/// Invalid requests (out of range, already active, empty sequence, in flight, detached) are
/// silent no-ops.
#[derive(Debug)]
pub struct RotationController<B, D, S> {
    items: Vec<Item>,
    active: Option<usize>,
    run_mode: RunMode,
    transition: TransitionState,
    timer: Option<TimerHandle>,
    options: Options,
    next_ticket: u64,
    detached: bool,
    bus: B,
    driver: D,
    scheduler: S,
}

impl<B, D, S> RotationController<B, D, S>
where
    B: EventBus,
    D: TransitionDriver,
    S: Scheduler,
{
    /// Build a controller over `ids`.
    ///
    /// `initial_active` marks an item as already presented; out-of-range values are treated as
    /// no active item. Nothing is emitted until [`initialize`](Self::initialize).
    pub fn new(
        ids: Vec<ItemId>,
        initial_active: Option<usize>,
        options: Options,
        bus: B,
        driver: D,
        scheduler: S,
    ) -> Self {
        let active = initial_active.filter(|&i| i < ids.len());
        let items = ids
            .into_iter()
            .enumerate()
            .map(|(index, id)| Item::new(id, index, Some(index) == active))
            .collect();
        Self {
            items,
            active,
            run_mode: RunMode::Idle,
            transition: TransitionState::Settled,
            timer: None,
            options,
            next_ticket: 0,
            detached: false,
            bus,
            driver,
            scheduler,
        }
    }

    /// Emit `init`, present the first item if none is active, and start auto-advance when
    /// configured to.
    pub fn initialize(&mut self) -> &mut Self {
        if self.detached {
            return self;
        }
        self.bus.emit(&CarouselEvent::init());
        if self.active.is_none() && !self.items.is_empty() {
            self.transition_to(0, Direction::Next, Trigger::Init);
        }
        if self.options.auto_start {
            self.start();
        }
        self
    }

    /// Advance to the following item, wrapping from last to first.
    pub fn next(&mut self) -> &mut Self {
        self.step(Direction::Next, Trigger::Next);
        self
    }

    /// Go back to the preceding item, wrapping from first to last.
    pub fn prev(&mut self) -> &mut Self {
        self.step(Direction::Prev, Trigger::Prev);
        self
    }

    /// Jump to `target`.
    ///
    /// The direction tag compares raw indices: forward (or no active item) is `next`, anything
    /// else is `prev`.
    pub fn go_to(&mut self, target: usize) -> &mut Self {
        if !self.accepts_navigation() {
            return self;
        }
        if target >= self.items.len() {
            tracing::debug!(index = target, len = self.items.len(), "go_to rejected: out of range");
            return self;
        }
        let direction = match self.active {
            Some(active) if target <= active => Direction::Prev,
            _ => Direction::Next,
        };
        self.transition_to(target, direction, Trigger::To);
        self
    }

    /// Arm auto-advance (the `loop` operation).
    ///
    /// Cancels any pending timer and schedules exactly one. While a transition is in flight the
    /// timer is armed when it settles instead.
    pub fn start(&mut self) -> &mut Self {
        if self.detached {
            return self;
        }
        self.run_mode = RunMode::Running;
        self.arm();
        self
    }

    /// Suspend auto-advance, keeping the intent to resume. An in-flight transition still
    /// completes.
    pub fn pause(&mut self) -> &mut Self {
        if self.detached {
            return self;
        }
        self.run_mode = RunMode::Paused;
        self.cancel_timer();
        self
    }

    /// Disarm auto-advance and forget any intent to resume.
    pub fn stop(&mut self) -> &mut Self {
        self.run_mode = RunMode::Idle;
        self.cancel_timer();
        self
    }

    /// Stop and detach. Afterwards every navigation, timer and input call is ignored; an
    /// in-flight transition may still settle.
    pub fn teardown(&mut self) {
        self.stop();
        self.detached = true;
        tracing::debug!("controller detached");
    }

    /// Deliver a fired timer. Only the single live handle is acted on.
    pub fn on_timer(&mut self, handle: TimerHandle) {
        if self.timer != Some(handle) {
            tracing::trace!(handle = handle.0, "stale timer ignored");
            return;
        }
        self.timer = None;
        if self.detached || self.run_mode != RunMode::Running {
            return;
        }
        self.step(Direction::Next, Trigger::Auto);
        // A vetoed or no-op step leaves nothing to re-arm from.
        if !self.is_transitioning() && self.timer.is_none() && self.run_mode == RunMode::Running {
            self.arm();
        }
    }

    /// Report that the driver finished playing `ticket`.
    ///
    /// Each ticket settles at most once; unknown or repeated tickets are ignored.
    pub fn complete_transition(&mut self, ticket: TransitionTicket) {
        let TransitionState::InProgress(flight) = self.transition else {
            tracing::trace!(ticket = ticket.0, "completion ignored: nothing in flight");
            return;
        };
        if flight.ticket != ticket {
            tracing::trace!(ticket = ticket.0, "completion ignored: stale ticket");
            return;
        }
        self.settle(flight);
    }

    /// Index of the presented item, once one has been shown.
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// The presented item.
    pub fn active_item(&self) -> Option<&Item> {
        self.active.map(|i| &self.items[i])
    }

    /// Auto-advance state.
    pub fn run_mode(&self) -> RunMode {
        self.run_mode
    }

    /// `true` while a transition is playing.
    pub fn is_transitioning(&self) -> bool {
        matches!(self.transition, TransitionState::InProgress(_))
    }

    /// Ticket of the transition currently playing.
    pub fn in_flight(&self) -> Option<TransitionTicket> {
        match self.transition {
            TransitionState::InProgress(flight) => Some(flight.ticket),
            TransitionState::Settled => None,
        }
    }

    /// `true` while an auto-advance timer is armed.
    pub fn has_timer(&self) -> bool {
        self.timer.is_some()
    }

    /// `true` after [`teardown`](Self::teardown).
    pub fn is_detached(&self) -> bool {
        self.detached
    }

    /// Items in sequence order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Configuration snapshot.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Event bus.
    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Event bus, mutably (to attach listeners).
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Transition driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Transition driver, mutably (to advance its clock).
    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Timer source.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Timer source, mutably (to advance its clock).
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    fn accepts_navigation(&self) -> bool {
        if self.detached {
            tracing::debug!("navigation rejected: detached");
            return false;
        }
        if self.is_transitioning() {
            tracing::debug!("navigation rejected: transition in flight");
            return false;
        }
        if self.items.is_empty() {
            tracing::debug!("navigation rejected: no items");
            return false;
        }
        true
    }

    fn step(&mut self, direction: Direction, trigger: Trigger) {
        if !self.accepts_navigation() {
            return;
        }
        let len = self.items.len();
        let target = match (self.active, direction) {
            (Some(a), Direction::Next) => (a + 1) % len,
            (Some(a), Direction::Prev) => (a + len - 1) % len,
            (None, Direction::Next) => 0,
            (None, Direction::Prev) => len - 1,
        };
        self.transition_to(target, direction, trigger);
    }

    fn transition_to(&mut self, target: usize, direction: Direction, trigger: Trigger) {
        if self.is_transitioning() {
            tracing::debug!(index = target, "transition dropped: another is in flight");
            return;
        }
        let Some(incoming) = self.items.get(target).map(|item| item.id().clone()) else {
            return;
        };
        if self.active == Some(target) {
            tracing::debug!(index = target, "transition skipped: already active");
            return;
        }

        let show = CarouselEvent::transition(EventKind::Show, incoming.clone(), target, direction);
        if self.bus.emit(&show) {
            tracing::debug!(index = target, %direction, "show vetoed");
            return;
        }

        let ticket = TransitionTicket(self.next_ticket);
        self.next_ticket += 1;
        self.transition = TransitionState::InProgress(InFlight {
            ticket,
            target,
            direction,
            trigger,
        });
        // The timer must not fire mid-transition; run mode keeps its intent.
        self.cancel_timer();

        let request = TransitionRequest {
            ticket,
            outgoing: self.active.map(|i| self.items[i].id().clone()),
            incoming,
            direction,
            kind: self.options.transition,
            slide: self.options.direction,
            ease: self.options.ease,
            duration: self.options.speed,
        };
        tracing::debug!(index = target, %direction, ticket = ticket.0, ?trigger, "transition started");
        match self.driver.play(request) {
            Playback::Finished => self.complete_transition(ticket),
            Playback::Pending(returned) => {
                if let TransitionState::InProgress(flight) = &mut self.transition {
                    flight.ticket = returned;
                }
            }
        }
    }

    fn settle(&mut self, flight: InFlight) {
        self.transition = TransitionState::Settled;
        if let Some(previous) = self.active {
            self.items[previous].deactivate();
        }
        let incoming = &mut self.items[flight.target];
        incoming.activate();
        let id = incoming.id().clone();
        self.active = Some(flight.target);

        self.bus.emit(&CarouselEvent::transition(
            EventKind::Shown,
            id,
            flight.target,
            flight.direction,
        ));
        tracing::debug!(active = flight.target, "transition settled");

        if self.run_mode != RunMode::Running {
            return;
        }
        if self.is_pause_trigger(flight.trigger) {
            tracing::debug!(trigger = ?flight.trigger, "auto-advance suspended by navigation");
            self.run_mode = RunMode::Paused;
        } else {
            self.arm();
        }
    }

    fn is_pause_trigger(&self, trigger: Trigger) -> bool {
        matches!(
            (self.options.pause_on, trigger),
            (PauseOn::Next, Trigger::Next) | (PauseOn::Prev, Trigger::Prev) | (PauseOn::To, Trigger::To)
        )
    }

    fn arm(&mut self) {
        self.cancel_timer();
        if self.detached || self.run_mode != RunMode::Running || self.is_transitioning() {
            return;
        }
        // A zero interval would fire at `now` forever; treat it as disabled.
        if let Some(interval) = self.options.interval.filter(|i| !i.is_zero()) {
            let handle = self.scheduler.schedule(interval);
            tracing::trace!(handle = handle.0, %interval, "auto-advance armed");
            self.timer = Some(handle);
        }
    }

    fn cancel_timer(&mut self) {
        if let Some(handle) = self.timer.take() {
            tracing::trace!(handle = handle.0, "auto-advance disarmed");
            self.scheduler.cancel(handle);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/controller.rs"]
mod tests;
