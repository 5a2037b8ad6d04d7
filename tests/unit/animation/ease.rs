use super::*;

const ALL: [Ease; 7] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b);
        assert!(b < c);
    }
}

#[test]
fn out_of_range_progress_is_clamped() {
    assert_eq!(Ease::InCubic.apply(-3.0), 0.0);
    assert_eq!(Ease::OutQuad.apply(7.0), 1.0);
}

#[test]
fn parses_markup_spellings() {
    assert_eq!(Ease::parse("ease-in-out").unwrap(), Ease::InOutQuad);
    assert_eq!(Ease::parse(" out_cubic ").unwrap(), Ease::OutCubic);
    assert_eq!(Ease::parse("Linear").unwrap(), Ease::Linear);
    assert!(Ease::parse("bounce").is_err());
}
