use std::{cell::RefCell, rc::Rc};

use super::*;

fn show(index: usize) -> CarouselEvent {
    CarouselEvent::transition(
        EventKind::Show,
        ItemId::from(format!("i{index}")),
        index,
        Direction::Next,
    )
}

#[test]
fn names_and_cancelability() {
    assert_eq!(EventKind::Init.name(), "init");
    assert_eq!(EventKind::Show.name(), "show");
    assert_eq!(EventKind::Shown.name(), "shown");
    assert!(EventKind::Show.cancelable());
    assert!(!EventKind::Shown.cancelable());
    assert!(!EventKind::Init.cancelable());
}

#[test]
fn listeners_only_see_their_kind() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut bus = ListenerBus::new();
    let s = Rc::clone(&seen);
    bus.on(EventKind::Shown, move |e| {
        s.borrow_mut().push(e.kind);
        Verdict::Proceed
    });

    assert!(!bus.emit(&show(1)));
    assert!(seen.borrow().is_empty());

    let mut shown = show(1);
    shown.kind = EventKind::Shown;
    bus.emit(&shown);
    assert_eq!(*seen.borrow(), vec![EventKind::Shown]);
}

#[test]
fn veto_is_reported_and_later_listeners_still_run() {
    let calls = Rc::new(RefCell::new(0));
    let mut bus = ListenerBus::new();
    bus.on(EventKind::Show, |_| Verdict::Veto);
    let c = Rc::clone(&calls);
    bus.on(EventKind::Show, move |_| {
        *c.borrow_mut() += 1;
        Verdict::Proceed
    });

    assert!(bus.emit(&show(2)));
    assert_eq!(*calls.borrow(), 1);
}

#[test]
fn veto_on_non_cancelable_event_is_ignored() {
    let mut bus = ListenerBus::new();
    bus.on(EventKind::Init, |_| Verdict::Veto);
    assert!(!bus.emit(&CarouselEvent::init()));
}

#[test]
fn off_detaches_listener() {
    let mut bus = ListenerBus::new();
    let id = bus.on(EventKind::Show, |_| Verdict::Veto);
    assert_eq!(bus.len(), 1);
    assert!(bus.off(id));
    assert!(!bus.off(id));
    assert!(bus.is_empty());
    assert!(!bus.emit(&show(0)));
}

#[test]
fn recording_bus_logs_in_order_with_veto_flag() {
    let mut inner = ListenerBus::new();
    inner.on(EventKind::Show, |e| {
        if e.related_index == Some(2) {
            Verdict::Veto
        } else {
            Verdict::Proceed
        }
    });
    let mut bus = RecordingBus::new(inner);
    bus.emit(&CarouselEvent::init());
    bus.emit(&show(1));
    bus.emit(&show(2));

    assert_eq!(
        bus.kinds(),
        vec![EventKind::Init, EventKind::Show, EventKind::Show]
    );
    let flags: Vec<bool> = bus.log().iter().map(|r| r.vetoed).collect();
    assert_eq!(flags, vec![false, false, true]);

    assert_eq!(bus.take_log().len(), 3);
    assert!(bus.log().is_empty());
}
