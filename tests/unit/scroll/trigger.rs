use super::*;
use crate::animation::ease::Ease;
use crate::animation::timeline::ElementStyle;
use crate::host::layout::{LayoutElement, PageLayout};

fn sequence() -> AnimationSequenceSpec {
    AnimationSequenceSpec {
        elements: vec!["alert-card-0".into(), "alert-card-1".into()],
        from: ElementStyle::hidden(-30.0, 0.0),
        to: ElementStyle::VISIBLE,
        stagger_secs: 0.2,
        duration_secs: 0.8,
        ease: Ease::back_out(1.7),
    }
}

fn registry(hub: &EventHub) -> ViewportTriggerRegistry {
    let mut registry = ViewportTriggerRegistry::new();
    registry
        .register("alerts", "alerts", "top 75%".parse().unwrap(), sequence())
        .unwrap();
    registry.start(hub);
    registry
}

#[test]
fn start_conditions_parse_and_display() {
    let c: StartCondition = "top 80%".parse().unwrap();
    assert_eq!(c, StartCondition::top_at_percent(80.0));
    assert_eq!(c.to_string(), "top 80%");

    for s in ["center 12.5%", "bottom 100px", "top 0%"] {
        let c: StartCondition = s.parse().unwrap();
        assert_eq!(c.to_string(), s);
    }

    let c: StartCondition = "bottom center".parse().unwrap();
    assert_eq!(c.anchor, ViewportAnchor::Percent(50.0));
    assert_eq!(c.edge, Edge::Bottom);

    for bad in ["", "top", "left 80%", "top eighty%", "top 80% extra", "top inf"] {
        assert!(bad.parse::<StartCondition>().is_err(), "{bad}");
    }
}

#[test]
fn start_conditions_serialize_as_strings() {
    let c: StartCondition = serde_json::from_str(r#""top 75%""#).unwrap();
    assert_eq!(serde_json::to_string(&c).unwrap(), r#""top 75%""#);
    assert!(serde_json::from_str::<StartCondition>(r#""middle 5%""#).is_err());
}

#[test]
fn condition_compares_viewport_relative_edge() {
    let viewport = Viewport::new(1280.0, 800.0).unwrap();
    let rect = Rect::new(0.0, 2400.0, 1280.0, 3000.0);
    let c = StartCondition::top_at_percent(75.0);
    assert!(!c.is_met(rect, 1799, viewport));
    assert!(c.is_met(rect, 1800, viewport));
    assert!(c.is_met(rect, 3000, viewport));

    let center: StartCondition = "center 50%".parse().unwrap();
    assert!(!center.is_met(rect, 2299, viewport));
    assert!(center.is_met(rect, 2300, viewport));
}

#[test]
fn fires_once_and_never_rearms() {
    let hub = EventHub::new();
    let layout = PageLayout::desktop();
    let mut registry = registry(&hub);

    assert!(registry.evaluate(0, 0.0, &layout).is_empty());
    assert_eq!(registry.pending_count(), 1);

    let fired = registry.evaluate(1900, 2.5, &layout);
    assert_eq!(fired.len(), 1);
    assert_eq!(fired[0].id, "alerts");
    assert_eq!(fired[0].at_secs, 2.5);
    assert_eq!(fired[0].sequence, sequence());

    for offset in [0, 1900, 3000, 0, 2500] {
        assert!(registry.evaluate(offset, 9.0, &layout).is_empty());
    }
    assert_eq!(
        registry.get("alerts").unwrap().phase,
        TriggerPhase::Fired { at_secs: 2.5 }
    );
}

#[test]
fn missing_target_stays_pending_until_rendered() {
    let hub = EventHub::new();
    let mut layout = PageLayout::desktop();
    let alerts = layout.remove("alerts").unwrap();
    let mut registry = registry(&hub);

    assert!(registry.evaluate(2000, 1.0, &layout).is_empty());
    assert_eq!(registry.pending_count(), 1);

    layout.insert(alerts);
    assert_eq!(registry.evaluate(2000, 1.1, &layout).len(), 1);
}

#[test]
fn resize_can_satisfy_a_condition() {
    let hub = EventHub::new();
    let mut layout = PageLayout::desktop();
    let mut registry = registry(&hub);
    assert!(registry.evaluate(0, 0.0, &layout).is_empty());

    layout.set_viewport(Viewport::new(1280.0, 3400.0).unwrap());
    assert_eq!(registry.evaluate(0, 0.5, &layout).len(), 1);
}

#[test]
fn stopped_registry_ignores_evaluation() {
    let hub = EventHub::new();
    let layout = PageLayout::desktop();
    let mut registry = registry(&hub);
    assert_eq!(hub.active_on(Topic::Scroll), 1);
    assert_eq!(hub.active_on(Topic::Resize), 1);

    registry.stop();
    assert_eq!(hub.active_count(), 0);
    assert!(registry.evaluate(5000, 1.0, &layout).is_empty());
    assert_eq!(registry.pending_count(), 1);
}

#[test]
fn duplicate_and_invalid_registrations_are_rejected() {
    let hub = EventHub::new();
    let mut registry = registry(&hub);
    let again = registry.register(
        "alerts",
        "alerts",
        StartCondition::top_at_percent(10.0),
        sequence(),
    );
    assert!(again.is_err());

    let mut bad = sequence();
    bad.duration_secs = -1.0;
    assert!(registry
        .register("other", "stats", StartCondition::top_at_percent(10.0), bad)
        .is_err());
    assert_eq!(registry.registrations().len(), 1);

    let mut layout = PageLayout::desktop();
    layout.insert(LayoutElement::new("extra", &[], Rect::new(0.0, 0.0, 10.0, 10.0)));
    assert!(registry.evaluate(0, 0.0, &layout).is_empty());
}

#[test]
fn selector_is_resolved_until_the_trigger_fires() {
    let hub = EventHub::new();
    let mut registry = ViewportTriggerRegistry::new();
    let mut seq = sequence();
    seq.elements.clear();
    registry
        .register_selector(
            "alerts",
            "alerts",
            ".alert-card",
            StartCondition::top_at_percent(75.0),
            seq,
        )
        .unwrap();
    registry.start(&hub);

    let mut layout = PageLayout::desktop();
    let card = layout.remove("alert-card-1").unwrap();
    assert!(registry.evaluate(0, 0.0, &layout).is_empty());
    assert_eq!(
        registry.get("alerts").unwrap().sequence.elements,
        ["alert-card-0", "alert-card-2"]
    );

    layout.insert(card);
    let fired = registry.evaluate(2000, 1.0, &layout);
    assert_eq!(fired.len(), 1);
    assert_eq!(
        fired[0].sequence.elements,
        ["alert-card-0", "alert-card-2", "alert-card-1"]
    );

    layout.remove("alert-card-0");
    registry.evaluate(2100, 2.0, &layout);
    assert_eq!(registry.get("alerts").unwrap().sequence.elements.len(), 3);
}
