use super::*;
use crate::effects::transitions::TransitionKind;
use crate::session::events::EventKind;

fn ids(n: usize) -> Vec<ItemId> {
    (0..n).map(|i| ItemId::from(format!("s{i}"))).collect()
}

fn slide(interval: u64, speed: u64) -> Options {
    Options {
        interval: Some(Millis(interval)),
        speed: Millis(speed),
        transition: TransitionKind::Slide,
        ..Options::default()
    }
}

#[test]
fn animated_transition_completes_after_speed() {
    let mut stage = Stage::new("hero", ids(3), Some(0), slide(5000, 500), true);
    stage.controller_mut().initialize();

    stage.advance_to(Millis(5000));
    assert!(stage.controller().is_transitioning());
    assert!(stage.frame().is_some());

    stage.advance_to(Millis(5499));
    assert_eq!(stage.controller().active_index(), Some(0));
    stage.advance_to(Millis(5500));
    assert_eq!(stage.controller().active_index(), Some(1));
    assert!(stage.frame().is_none());
}

#[test]
fn zero_interval_never_arms_a_timer() {
    let options = Options {
        interval: Some(Millis(0)),
        ..Options::default()
    };
    let mut stage = Stage::new("c", ids(3), Some(0), options, false);
    stage.controller_mut().initialize();
    stage.controller_mut().start();
    assert!(!stage.controller().has_timer());

    stage.advance_to(Millis(10));
    assert_eq!(stage.now(), Millis(10));
    assert_eq!(stage.controller().active_index(), Some(0));
    assert!(!stage.controller().bus().kinds().contains(&EventKind::Show));
}

#[test]
fn interval_restarts_after_each_settle() {
    let mut stage = Stage::new("hero", ids(3), Some(0), slide(1000, 200), true);
    stage.controller_mut().initialize();

    // 1000: start 0->1, settles 1200; 2200: start 1->2, settles 2400.
    stage.advance_to(Millis(2400));
    assert_eq!(stage.controller().active_index(), Some(2));

    let shows = stage
        .controller()
        .bus()
        .kinds()
        .into_iter()
        .filter(|k| *k == EventKind::Show)
        .count();
    assert_eq!(shows, 2);
}

#[test]
fn unanimated_stage_completes_immediately() {
    let mut stage = Stage::new("plain", ids(2), Some(0), slide(1000, 500), false);
    stage.controller_mut().initialize();
    stage.advance_to(Millis(1000));
    assert_eq!(stage.controller().active_index(), Some(1));
    assert!(!stage.controller().is_transitioning());
}

#[test]
fn keyboard_during_animation_is_dropped() {
    let mut stage = Stage::new("hero", ids(3), Some(0), slide(60_000, 500), true);
    stage.controller_mut().initialize();

    stage.dispatch(&InputEvent::KeyDown(crate::session::interaction::Key::ArrowRight));
    stage.advance_to(Millis(100));
    stage.dispatch(&InputEvent::KeyDown(crate::session::interaction::Key::ArrowRight));
    stage.advance_to(Millis(500));

    assert_eq!(stage.controller().active_index(), Some(1));
    assert_eq!(
        stage.controller().bus().kinds(),
        vec![EventKind::Init, EventKind::Show, EventKind::Shown]
    );
}

#[test]
fn clock_never_moves_backwards() {
    let mut stage = Stage::new("hero", ids(2), Some(0), slide(1000, 0), true);
    stage.advance_to(Millis(300));
    stage.advance_to(Millis(100));
    assert_eq!(stage.now(), Millis(300));
}
