use super::*;
use crate::scroll::trigger::TriggerPhase;
use crate::ui::chrome::MenuPresentation;

fn scenario(value: serde_json::Value) -> Scenario {
    serde_json::from_value(value).unwrap()
}

#[test]
fn replays_events_before_each_tick() {
    let s = scenario(serde_json::json!({
        "fps": { "num": 60, "den": 1 },
        "frames": 90,
        "events": [
            { "frame": 0, "event": "toggle_menu" },
            { "frame": 10, "event": { "scroll": { "offset": 50 } } }
        ]
    }));
    let report = s.run(DashboardConfig::default(), Dataset::builtin().unwrap()).unwrap();
    assert_eq!(report.frames.len(), 90);

    let first = &report.frames[0];
    assert!(first.ui.menu_open);
    assert!((first.time_secs - 1.0 / 60.0).abs() < 1e-12);
    assert!(first.menu.translate_x_pct > -100.0);

    assert!(!report.frames[9].ui.scrolled);
    assert!(report.frames[10].ui.scrolled);

    let last = report.last().unwrap();
    assert_eq!(last.menu, MenuPresentation::OPEN);
    assert_eq!(last.triggers["alerts"], TriggerPhase::Pending);
}

#[test]
fn events_out_of_range_are_rejected() {
    let s = scenario(serde_json::json!({
        "frames": 5,
        "events": [{ "frame": 5, "event": "search_submit" }]
    }));
    assert!(s.validate().is_err());
    assert!(s.run(DashboardConfig::default(), Dataset::builtin().unwrap()).is_err());
}

#[test]
fn unsorted_events_are_dispatched_by_frame() {
    let s = scenario(serde_json::json!({
        "frames": 3,
        "events": [
            { "frame": 2, "event": { "search_input": { "text": "late" } } },
            { "frame": 0, "event": { "search_input": { "text": "early" } } }
        ]
    }));
    let report = s.run(DashboardConfig::default(), Dataset::builtin().unwrap()).unwrap();
    assert_eq!(report.frames[1].ui.search_text, "early");
    assert_eq!(report.frames[2].ui.search_text, "late");
}

#[test]
fn zero_fps_is_invalid() {
    let s = scenario(serde_json::json!({ "fps": { "num": 0, "den": 1 }, "frames": 1 }));
    assert!(s.validate().is_err());
}

#[test]
fn oversized_frame_counts_are_rejected() {
    let s = scenario(serde_json::json!({ "frames": u64::MAX, "events": [] }));
    assert!(s.validate().is_err());
    assert!(s.run(DashboardConfig::default(), Dataset::builtin().unwrap()).is_err());

    let s = scenario(serde_json::json!({ "frames": MAX_FRAMES }));
    assert!(s.validate().is_ok());
}
