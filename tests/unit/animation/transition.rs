use super::*;

fn controller() -> SpringTransitionController<f64, 1> {
    SpringTransitionController::new("opacity", 0.0, 1.0, SpringConfig::MOBILE_MENU)
}

#[test]
fn activation_ticks_until_settled_then_releases_the_frame() {
    let hub = EventHub::new();
    let mut c = controller();
    assert!(!c.is_ticking());

    assert!(c.set_active(true, &hub));
    assert!(c.is_ticking());
    assert_eq!(hub.active_on(Topic::Frame), 1);
    assert_eq!(c.target(), 1.0);

    let mut prev = c.value();
    for _ in 0..600 {
        let v = c.on_frame(1.0 / 60.0);
        assert!(v >= prev);
        prev = v;
        if !c.is_ticking() {
            break;
        }
    }
    assert!(!c.is_ticking());
    assert_eq!(c.value(), 1.0);
    assert_eq!(hub.active_on(Topic::Frame), 0);
}

#[test]
fn setting_the_same_flag_is_a_no_op() {
    let hub = EventHub::new();
    let mut c = controller();
    assert!(!c.set_active(false, &hub));
    assert_eq!(hub.active_count(), 0);
    assert!(c.set_active(true, &hub));
    assert!(!c.set_active(true, &hub));
    assert_eq!(hub.active_on(Topic::Frame), 1);
}

#[test]
fn reversing_mid_flight_keeps_one_subscription_and_is_continuous() {
    let hub = EventHub::new();
    let mut c = controller();
    c.set_active(true, &hub);
    for _ in 0..5 {
        c.on_frame(1.0 / 60.0);
    }
    let before = c.value();
    assert!(before > 0.0 && before < 1.0);

    c.set_active(false, &hub);
    assert_eq!(hub.active_on(Topic::Frame), 1);
    let after = c.on_frame(1.0 / 60.0);
    assert!((after - before).abs() < 0.25);
    assert!(!c.is_active());
}

#[test]
fn stop_releases_and_freezes() {
    let hub = EventHub::new();
    let mut c = controller();
    c.set_active(true, &hub);
    c.on_frame(1.0 / 60.0);
    let frozen = c.value();
    c.stop();
    assert_eq!(hub.active_count(), 0);
    assert_eq!(c.on_frame(1.0 / 60.0), frozen);
}
