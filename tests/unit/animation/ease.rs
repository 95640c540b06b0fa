use super::*;

const ALL: [Ease; 9] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::OutQuart,
    Ease::BackOut { overshoot: 1.7 },
];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert!(ease.apply(0.0).abs() < 1e-12, "{ease:?} at 0");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-12, "{ease:?} at 1");
    }
}

#[test]
fn input_is_clamped() {
    for ease in ALL {
        assert_eq!(ease.apply(-3.0), ease.apply(0.0));
        assert_eq!(ease.apply(7.0), ease.apply(1.0));
    }
}

#[test]
fn monotonic_spot_check_for_plain_curves() {
    for ease in &ALL[..8] {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b);
        assert!(b < c);
    }
}

#[test]
fn out_quart_decelerates_faster_than_out_cubic() {
    assert!(Ease::OutQuart.apply(0.3) > Ease::OutCubic.apply(0.3));
}

#[test]
fn back_out_overshoots_then_settles() {
    let ease = Ease::back_out(1.7);
    let peak = (1..100)
        .map(|i| ease.apply(f64::from(i) / 100.0))
        .fold(f64::MIN, f64::max);
    assert!(peak > 1.0, "peak was {peak}");
    assert!((ease.apply(1.0) - 1.0).abs() < 1e-12);
}

#[test]
fn json_names_and_aliases() {
    let e: Ease = serde_json::from_str("\"power3_out\"").unwrap();
    assert_eq!(e, Ease::OutQuart);
    let e: Ease = serde_json::from_str("\"out_quart\"").unwrap();
    assert_eq!(e, Ease::POWER3_OUT);
    let e: Ease = serde_json::from_str("{\"back_out\": {\"overshoot\": 1.7}}").unwrap();
    assert_eq!(e, Ease::back_out(1.7));
}
