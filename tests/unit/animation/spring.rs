use super::*;

const FRAME: f64 = 1.0 / 60.0;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Pair(f64, f64);

impl SpringValue<2> for Pair {
    fn to_channels(self) -> [f64; 2] {
        [self.0, self.1]
    }

    fn from_channels(channels: [f64; 2]) -> Self {
        Pair(channels[0], channels[1])
    }
}

fn frames_until_rest(config: SpringConfig, from: f64, to: f64, max_frames: usize) -> usize {
    let mut s = SpringState::<f64, 1>::new("value", from, config);
    s.set_target(to);
    let mut prev = s.distance();
    for frame in 1..=max_frames {
        s.advance(FRAME);
        let d = s.distance();
        assert!(
            d <= prev + 1e-12,
            "distance grew from {prev} to {d} at frame {frame}"
        );
        prev = d;
        if s.is_resting() {
            assert_eq!(s.current(), to);
            return frame;
        }
    }
    panic!("spring did not settle within {max_frames} frames");
}

#[test]
fn presets_converge_monotonically_in_finite_frames() {
    for config in [SpringConfig::NAV_CHROME, SpringConfig::MOBILE_MENU] {
        let up = frames_until_rest(config, 0.0, 1.0, 120);
        let down = frames_until_rest(config, -100.0, 0.0, 120);
        assert!(up > 1 && down > 1);
    }
}

#[test]
fn presets_carry_source_parameters() {
    assert_eq!(SpringConfig::NAV_CHROME.tension, 300.0);
    assert_eq!(SpringConfig::NAV_CHROME.friction, 20.0);
    assert_eq!(SpringConfig::MOBILE_MENU.tension, 300.0);
    assert_eq!(SpringConfig::MOBILE_MENU.friction, 26.0);
    assert!(SpringConfig::NAV_CHROME.damping_ratio() < 1.0);
}

#[test]
fn unclamped_underdamped_spring_overshoots() {
    let config = SpringConfig::new(300.0, 20.0);
    let mut s = SpringState::<f64, 1>::new("value", 0.0, config);
    s.set_target(1.0);
    let mut peak = 0.0f64;
    for _ in 0..120 {
        peak = peak.max(s.advance(FRAME));
    }
    assert!(peak > 1.0, "peak was {peak}");
    assert!(s.distance() < 0.01);
}

#[test]
fn retarget_mid_flight_is_continuous() {
    let mut s = SpringState::<f64, 1>::new("value", 0.0, SpringConfig::NAV_CHROME);
    s.set_target(1.0);
    for _ in 0..5 {
        s.advance(FRAME);
    }
    let before = s.current();
    let velocity = s.velocity();
    assert!(before > 0.0 && before < 1.0);

    s.set_target(0.0);
    assert_eq!(s.current(), before);
    assert_eq!(s.velocity(), velocity);

    let after = s.advance(FRAME);
    // Momentum carries it a little further before turning around.
    assert!(after > before, "{after} <= {before}");
    assert!((after - before).abs() < 0.2);
    assert!(after != 0.0 && after != 1.0);
}

#[test]
fn advance_is_nearly_frame_rate_independent() {
    let mut a = SpringState::<f64, 1>::new("a", 0.0, SpringConfig::DEFAULT);
    let mut b = SpringState::<f64, 1>::new("b", 0.0, SpringConfig::DEFAULT);
    a.set_target(1.0);
    b.set_target(1.0);
    for _ in 0..30 {
        a.advance(1.0 / 60.0);
    }
    for _ in 0..60 {
        b.advance(1.0 / 120.0);
    }
    assert!((a.current() - b.current()).abs() < 1e-2);
}

#[test]
fn channels_move_together_and_rest_together() {
    let mut s = SpringState::<Pair, 2>::new("pair", Pair(-100.0, 0.0), SpringConfig::MOBILE_MENU);
    s.set_target(Pair(0.0, 1.0));
    assert!(!s.is_resting());
    for _ in 0..120 {
        s.advance(FRAME);
    }
    assert!(s.is_resting());
    assert_eq!(s.current(), Pair(0.0, 1.0));
}

#[test]
fn resting_spring_ignores_time_and_same_target() {
    let mut s = SpringState::<f64, 1>::new("value", 3.0, SpringConfig::DEFAULT);
    assert!(s.is_resting());
    s.set_target(3.0);
    assert!(s.is_resting());
    assert_eq!(s.advance(1.0), 3.0);

    s.set_target(4.0);
    assert_eq!(s.advance(0.0), 3.0);
    assert_eq!(s.advance(f64::NAN), 3.0);
    assert_eq!(s.advance(-1.0), 3.0);
}

#[test]
fn jump_to_stops_motion() {
    let mut s = SpringState::<f64, 1>::new("value", 0.0, SpringConfig::DEFAULT);
    s.set_target(1.0);
    s.advance(FRAME);
    s.jump_to(0.5);
    assert!(s.is_resting());
    assert_eq!(s.current(), 0.5);
    assert_eq!(s.target(), 0.5);
    assert_eq!(s.velocity(), 0.0);
}

#[test]
fn validate_rejects_bad_parameters() {
    assert!(SpringConfig::DEFAULT.validate().is_ok());
    assert!(SpringConfig::new(0.0, 10.0).validate().is_err());
    assert!(SpringConfig::new(100.0, -1.0).validate().is_err());
    let bad_mass = SpringConfig {
        mass: 0.0,
        ..SpringConfig::DEFAULT
    };
    assert!(bad_mass.validate().is_err());
}

#[test]
fn config_json_fills_defaults() {
    let c: SpringConfig = serde_json::from_str(r#"{"tension": 300, "friction": 26}"#).unwrap();
    assert_eq!(c.mass, 1.0);
    assert!(!c.clamp);
    assert_eq!(c.clamped(), SpringConfig::MOBILE_MENU);
}

#[test]
fn long_gaps_are_capped_to_one_second() {
    let mut stalled = SpringState::<f64, 1>::new("stalled", 0.0, SpringConfig::new(300.0, 20.0));
    let mut capped = stalled.clone();
    stalled.set_target(1.0);
    capped.set_target(1.0);

    let a = stalled.advance(1e300);
    let b = capped.advance(MAX_ADVANCE_SECS);
    assert_eq!(a, b);
    assert!(a.is_finite());
    assert!((a - 1.0).abs() < 0.01);
}

#[test]
fn diverging_channels_snap_to_target() {
    let stiff = SpringConfig {
        tension: 1e12,
        ..SpringConfig::DEFAULT
    };
    let mut s = SpringState::<f64, 1>::new("stiff", 0.0, stiff);
    s.set_target(1.0);
    assert_eq!(s.advance(0.5), 1.0);
    assert!(s.is_resting());
}
