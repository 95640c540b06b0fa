use super::*;

#[test]
fn flag_depends_on_offset_alone() {
    for offset in [0, 1, 19, 20, 21, 50, 5000] {
        assert_eq!(
            ScrollState::at(offset, SCROLL_THRESHOLD_PX).past_threshold,
            offset > 20
        );
    }
}

#[test]
fn reports_only_flips() {
    let hub = EventHub::new();
    let mut tracker = ScrollTracker::default();
    tracker.start(&hub);

    assert_eq!(tracker.on_scroll(10), None);
    assert_eq!(tracker.on_scroll(20), None);
    assert_eq!(tracker.on_scroll(21), Some(true));
    assert_eq!(tracker.on_scroll(400), None);
    assert_eq!(tracker.on_scroll(0), Some(false));
    assert_eq!(tracker.state(), ScrollState::at(0, 20));
}

#[test]
fn ignores_events_after_stop() {
    let hub = EventHub::new();
    let mut tracker = ScrollTracker::new(20);
    assert_eq!(tracker.on_scroll(50), None);
    assert_eq!(tracker.state().offset, 0);

    tracker.start(&hub);
    tracker.start(&hub);
    assert_eq!(hub.active_on(Topic::Scroll), 1);
    tracker.stop();
    assert_eq!(hub.active_count(), 0);
    assert_eq!(tracker.on_scroll(50), None);
    assert!(!tracker.state().past_threshold);
}

#[test]
fn dropping_the_hub_silences_the_tracker() {
    let hub = EventHub::new();
    let mut tracker = ScrollTracker::default();
    tracker.start(&hub);
    drop(hub);
    assert!(!tracker.is_listening());
    assert_eq!(tracker.on_scroll(100), None);
}
