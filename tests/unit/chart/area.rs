use super::*;
use kurbo::PathSeg;

fn fire_stats() -> Vec<TimeSeriesPoint> {
    [("Jan", 65), ("Feb", 45), ("Mar", 90), ("Apr", 120), ("May", 150), ("Jun", 200)]
        .into_iter()
        .map(|(l, v)| TimeSeriesPoint::new(l, v))
        .collect()
}

#[test]
fn default_style_leaves_the_expected_plot() {
    let style = ChartStyle::default();
    style.validate().unwrap();
    assert_eq!(style.plot_rect(), Rect::new(60.0, 10.0, 1010.0, 370.0));
}

#[test]
fn layout_keeps_order_and_scales_to_nice_max() {
    let chart = ChartRenderer::default().render(&fire_stats());
    assert_eq!(
        chart.x_labels().collect::<Vec<_>>(),
        ["Jan", "Feb", "Mar", "Apr", "May", "Jun"]
    );
    assert_eq!(chart.y_domain(), [0.0, 200.0]);
    assert_eq!(chart.y_ticks, [0.0, 50.0, 100.0, 150.0, 200.0]);

    let first = chart.points[0].position;
    let last = chart.points[5].position;
    assert_eq!(first.x, 60.0);
    assert_eq!(last, Point::new(1010.0, 10.0));
    assert!((chart.points[1].position.x - 250.0).abs() < 1e-9);
}

#[test]
fn hovering_at_a_point_reports_its_value() {
    let chart = ChartRenderer::default().render(&fire_stats());
    let jun = chart.points[5].position.x;
    let tip = chart.tooltip_at(jun).unwrap();
    assert_eq!((tip.label.as_str(), tip.value), ("Jun", 200));

    let tip = chart.tooltip_at(250.0 + 40.0).unwrap();
    assert_eq!(tip.label, "Feb");
    // Midway between Jan and Feb: the earlier sample wins.
    assert_eq!(chart.nearest(155.0), Some(0));
}

#[test]
fn curve_never_overshoots_between_samples() {
    let chart = ChartRenderer::default().render(&fire_stats());
    let mut segments = 0;
    for seg in chart.line.segments() {
        let PathSeg::Cubic(c) = seg else {
            panic!("expected cubic segments, got {seg:?}");
        };
        let lo = c.p0.y.min(c.p3.y) - 1e-9;
        let hi = c.p0.y.max(c.p3.y) + 1e-9;
        assert!((lo..=hi).contains(&c.p1.y) && (lo..=hi).contains(&c.p2.y));
        segments += 1;
    }
    assert_eq!(segments, 5);
}

#[test]
fn flat_neighbours_get_flat_tangents() {
    let pts = [
        Point::new(0.0, 10.0),
        Point::new(10.0, 0.0),
        Point::new(20.0, 10.0),
    ];
    let path = monotone_x(&pts);
    let segs: Vec<PathSeg> = path.segments().collect();
    let PathSeg::Cubic(c) = segs[0] else {
        panic!("expected cubic");
    };
    assert_eq!(c.p2.y, 0.0);
}

#[test]
fn area_closes_to_the_baseline() {
    let chart = ChartRenderer::default().render(&fire_stats());
    let bbox = kurbo::Shape::bounding_box(&chart.area);
    assert_eq!(bbox.y1, 370.0);
    assert_eq!(bbox.x0, 60.0);
    assert_eq!(bbox.x1, 1010.0);
}

#[test]
fn empty_and_single_series_are_handled() {
    let renderer = ChartRenderer::default();
    let empty = renderer.render(&[]);
    assert_eq!(empty.y_domain(), [0.0, 1.0]);
    assert!(empty.points.is_empty());
    assert!(empty.tooltip_at(100.0).is_none());

    let one = renderer.render(&[TimeSeriesPoint::new("Jan", 0)]);
    assert_eq!(one.y_domain(), [0.0, 1.0]);
    assert_eq!(one.points[0].position.x, 535.0);
}

#[test]
fn view_tracks_hover_only_while_listening() {
    let hub = EventHub::new();
    let mut view = ChartView::new(ChartRenderer::default(), &fire_stats());
    assert!(view.pointer_move(1010.0, 200.0).is_none());

    view.start(&hub);
    assert_eq!(hub.active_on(Topic::Pointer), 1);
    let tip = view.pointer_move(1010.0, 200.0).unwrap();
    assert_eq!(tip.value, 200);
    assert!(view.pointer_move(5.0, 200.0).is_none());

    view.pointer_move(640.0, 100.0);
    assert_eq!(view.tooltip().unwrap().label, "Apr");
    view.pointer_leave();
    assert!(view.tooltip().is_none());

    view.stop();
    assert_eq!(hub.active_count(), 0);
}

#[test]
fn new_series_rebuilds_the_axis() {
    let hub = EventHub::new();
    let mut view = ChartView::new(ChartRenderer::default(), &fire_stats());
    view.start(&hub);
    view.pointer_move(1010.0, 100.0);

    view.set_series(&[TimeSeriesPoint::new("Q1", 12), TimeSeriesPoint::new("Q2", 7)]);
    assert_eq!(view.chart().y_domain(), [0.0, 20.0]);
    assert!(view.tooltip().is_none());
}

#[test]
fn degenerate_style_is_rejected() {
    let style = ChartStyle {
        width: 50.0,
        ..ChartStyle::default()
    };
    assert!(ChartRenderer::new(style).is_err());
}
