use super::*;
use crate::foundation::core::{ItemId, Millis};
use crate::scene::options::Options;
use crate::session::driver::InstantDriver;
use crate::session::events::{EventKind, ListenerBus, RecordingBus};
use crate::session::timer::VirtualScheduler;

type Ctl = RotationController<RecordingBus<ListenerBus>, InstantDriver, VirtualScheduler>;

fn ctl(pause_on: PauseOn) -> Ctl {
    let options = Options {
        interval: Some(Millis(5000)),
        pause_on,
        auto_start: false,
        ..Options::default()
    };
    RotationController::new(
        vec![ItemId::from("a"), ItemId::from("b"), ItemId::from("c")],
        Some(0),
        options,
        RecordingBus::new(ListenerBus::new()),
        InstantDriver,
        VirtualScheduler::new(),
    )
}

#[test]
fn key_parsing_accepts_names_and_codes() {
    assert_eq!(Key::parse("ArrowLeft"), Key::ArrowLeft);
    assert_eq!(Key::parse("right"), Key::ArrowRight);
    assert_eq!(Key::parse("37"), Key::ArrowLeft);
    assert_eq!(Key::parse("Enter"), Key::Other("Enter".to_owned()));
}

#[test]
fn input_events_deserialize_from_json() {
    let ev: InputEvent = serde_json::from_str(r#"{ "key_down": "ArrowRight" }"#).unwrap();
    assert_eq!(ev, InputEvent::KeyDown(Key::ArrowRight));
    let ev: InputEvent = serde_json::from_str(r#""pointer_enter""#).unwrap();
    assert_eq!(ev, InputEvent::PointerEnter);
}

#[test]
fn arrows_navigate_and_suppress_default() {
    let mut c = ctl(PauseOn::Hover);
    assert_eq!(
        c.handle_input(&InputEvent::KeyDown(Key::ArrowRight)),
        InputOutcome::Handled
    );
    assert_eq!(c.active_index(), Some(1));
    assert_eq!(
        c.handle_input(&InputEvent::KeyDown(Key::ArrowLeft)),
        InputOutcome::Handled
    );
    assert_eq!(c.active_index(), Some(0));
}

#[test]
fn other_keys_are_left_alone() {
    let mut c = ctl(PauseOn::Hover);
    let outcome = c.handle_input(&InputEvent::KeyDown(Key::parse("Tab")));
    assert_eq!(outcome, InputOutcome::Ignored);
    assert!(c.bus().log().is_empty());
}

#[test]
fn hover_pauses_and_resumes() {
    let mut c = ctl(PauseOn::Hover);
    c.start();
    assert_eq!(c.handle_input(&InputEvent::PointerEnter), InputOutcome::Handled);
    assert_eq!(c.run_mode(), RunMode::Paused);
    assert!(!c.has_timer());
    c.handle_input(&InputEvent::PointerLeave);
    assert_eq!(c.run_mode(), RunMode::Running);
    assert!(c.has_timer());
}

#[test]
fn hover_leave_starts_an_idle_rotation() {
    let mut c = ctl(PauseOn::Hover);
    c.initialize();
    assert_eq!(c.run_mode(), RunMode::Idle);

    assert_eq!(c.handle_input(&InputEvent::PointerEnter), InputOutcome::Handled);
    assert_eq!(c.run_mode(), RunMode::Paused);
    assert!(!c.has_timer());

    assert_eq!(c.handle_input(&InputEvent::PointerLeave), InputOutcome::Handled);
    assert_eq!(c.run_mode(), RunMode::Running);
    assert!(c.has_timer());
}

#[test]
fn hover_is_ignored_unless_configured() {
    let mut c = ctl(PauseOn::Click);
    c.start();
    assert_eq!(c.handle_input(&InputEvent::PointerEnter), InputOutcome::Ignored);
    assert_eq!(c.run_mode(), RunMode::Running);
}

#[test]
fn click_toggles_when_configured() {
    let mut c = ctl(PauseOn::Click);
    c.start();
    c.handle_input(&InputEvent::Click);
    assert_eq!(c.run_mode(), RunMode::Paused);
    c.handle_input(&InputEvent::Click);
    assert_eq!(c.run_mode(), RunMode::Running);

    let mut h = ctl(PauseOn::Hover);
    h.start();
    assert_eq!(h.handle_input(&InputEvent::Click), InputOutcome::Ignored);
    assert_eq!(h.run_mode(), RunMode::Running);
}

#[test]
fn detached_controller_ignores_input() {
    let mut c = ctl(PauseOn::Hover);
    c.teardown();
    assert_eq!(
        c.handle_input(&InputEvent::KeyDown(Key::ArrowRight)),
        InputOutcome::Ignored
    );
    assert!(!c.bus().kinds().contains(&EventKind::Show));
}
