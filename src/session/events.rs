use crate::foundation::core::{Direction, ItemId};

/// Lifecycle event names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// Fired once after construction.
    Init,
    /// Fired before a transition starts; may be vetoed.
    Show,
    /// Fired after a transition settles.
    Shown,
}

impl EventKind {
    /// Event name as seen by listeners.
    pub fn name(self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Show => "show",
            Self::Shown => "shown",
        }
    }

    /// Only `show` can be vetoed.
    pub fn cancelable(self) -> bool {
        matches!(self, Self::Show)
    }
}

/// One lifecycle event and its payload.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CarouselEvent {
    /// Which event this is.
    pub kind: EventKind,
    /// Incoming (for `show`) or newly active (for `shown`) item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_target: Option<ItemId>,
    /// Index of `related_target`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_index: Option<usize>,
    /// Direction of the transition this event belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
}

impl CarouselEvent {
    /// The informational `init` event.
    pub fn init() -> Self {
        Self {
            kind: EventKind::Init,
            related_target: None,
            related_index: None,
            direction: None,
        }
    }

    /// A `show`/`shown` event for the item at `index`.
    pub fn transition(kind: EventKind, target: ItemId, index: usize, direction: Direction) -> Self {
        Self {
            kind,
            related_target: Some(target),
            related_index: Some(index),
            direction: Some(direction),
        }
    }
}

/// Dispatches lifecycle events and reports vetoes.
pub trait EventBus {
    /// Dispatch `event`; returns `true` when a listener vetoed a cancelable event.
    fn emit(&mut self, event: &CarouselEvent) -> bool;
}

/// A listener's answer to an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Let the transition happen.
    Proceed,
    /// Cancel the transition (only honoured for cancelable events).
    Veto,
}

/// Handle returned by [`ListenerBus::on`], used to detach the listener again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&CarouselEvent) -> Verdict>;

/// In-process bus with per-event listeners.
///
/// Listeners run in registration order. Every listener sees the event even after an earlier one
/// vetoed it.
#[derive(Default)]
pub struct ListenerBus {
    next_id: u64,
    listeners: Vec<(ListenerId, EventKind, Listener)>,
}

impl std::fmt::Debug for ListenerBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerBus")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ListenerBus {
    /// Bus with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `listener` to events of `kind`.
    pub fn on(
        &mut self,
        kind: EventKind,
        listener: impl FnMut(&CarouselEvent) -> Verdict + 'static,
    ) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, kind, Box::new(listener)));
        id
    }

    /// Detach one listener. Returns `false` if it was not attached.
    pub fn off(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(l, _, _)| *l != id);
        self.listeners.len() != before
    }

    /// Detach every listener.
    pub fn clear(&mut self) {
        self.listeners.clear();
    }

    /// Number of attached listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// `true` when nothing is attached.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl EventBus for ListenerBus {
    fn emit(&mut self, event: &CarouselEvent) -> bool {
        let mut vetoed = false;
        for (_, kind, listener) in &mut self.listeners {
            if *kind == event.kind && listener(event) == Verdict::Veto {
                vetoed = true;
            }
        }
        vetoed && event.kind.cancelable()
    }
}

/// One emitted event and whether it was vetoed.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Recorded {
    /// The event as dispatched.
    pub event: CarouselEvent,
    /// Veto result reported back to the controller.
    pub vetoed: bool,
}

/// Wraps a bus and keeps an ordered log of everything emitted through it.
#[derive(Debug, Default)]
pub struct RecordingBus<B> {
    inner: B,
    log: Vec<Recorded>,
}

impl<B: EventBus> RecordingBus<B> {
    /// Record everything dispatched through `inner`.
    pub fn new(inner: B) -> Self {
        Self {
            inner,
            log: Vec::new(),
        }
    }

    /// Events in emission order.
    pub fn log(&self) -> &[Recorded] {
        &self.log
    }

    /// Event kinds in emission order.
    pub fn kinds(&self) -> Vec<EventKind> {
        self.log.iter().map(|r| r.event.kind).collect()
    }

    /// Drain the log.
    pub fn take_log(&mut self) -> Vec<Recorded> {
        std::mem::take(&mut self.log)
    }

    /// The wrapped bus.
    pub fn inner(&self) -> &B {
        &self.inner
    }

    /// The wrapped bus, mutably (to attach listeners).
    pub fn inner_mut(&mut self) -> &mut B {
        &mut self.inner
    }
}

impl<B: EventBus> EventBus for RecordingBus<B> {
    fn emit(&mut self, event: &CarouselEvent) -> bool {
        let vetoed = self.inner.emit(event);
        self.log.push(Recorded {
            event: event.clone(),
            vetoed,
        });
        vetoed
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/events.rs"]
mod tests;
