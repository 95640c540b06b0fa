use crate::chart::scale::{LinearScale, point_positions, zero_based_ticks};
use crate::content::dataset::TimeSeriesPoint;
use crate::foundation::core::{BezPath, Point, Rect, Rgba};
use crate::foundation::error::{BlazeError, BlazeResult};
use crate::host::events::{EventHub, Subscription, Topic};
use serde::{Deserialize, Serialize};

/// Space kept free around the plot, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Size and look of the analytics chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    /// Gutter left of the plot for y tick labels.
    pub y_axis_width: f64,
    /// Gutter below the plot for x tick labels.
    pub x_axis_height: f64,
    /// Number of y ticks, including 0.
    pub y_tick_count: usize,
    /// Name shown next to the value in the tooltip.
    pub series_name: String,
    pub stroke: Rgba,
    pub stroke_width: f64,
    /// Gradient stops as `(offset, opacity)`, top to bottom, using the stroke color.
    pub fill_stops: [(f64, f64); 2],
    pub grid: Rgba,
    /// SVG `stroke-dasharray` of the grid.
    pub grid_dash: [f64; 2],
    pub axis: Rgba,
    pub tooltip_background: Rgba,
    pub tooltip_border: Rgba,
    pub font_size: f64,
    pub font_family: String,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 1040.0,
            height: 400.0,
            margin: Margin {
                top: 10.0,
                right: 30.0,
                bottom: 0.0,
                left: 0.0,
            },
            y_axis_width: 60.0,
            x_axis_height: 30.0,
            y_tick_count: 5,
            series_name: "fires".to_owned(),
            stroke: Rgba::from_rgb8(0xf9, 0x73, 0x16, 1.0),
            stroke_width: 1.0,
            fill_stops: [(0.05, 0.8), (0.95, 0.0)],
            grid: Rgba::from_rgb8(0x37, 0x41, 0x51, 1.0),
            grid_dash: [3.0, 3.0],
            axis: Rgba::from_rgb8(0x9c, 0xa3, 0xaf, 1.0),
            tooltip_background: Rgba::from_rgb8(0x1f, 0x29, 0x37, 1.0),
            tooltip_border: Rgba::from_rgb8(0x37, 0x41, 0x51, 1.0),
            font_size: 12.0,
            font_family: "sans-serif".to_owned(),
        }
    }
}

impl ChartStyle {
    /// Plot area: the chart minus margins and axis gutters.
    pub fn plot_rect(&self) -> Rect {
        Rect::new(
            self.margin.left + self.y_axis_width,
            self.margin.top,
            self.width - self.margin.right,
            self.height - self.margin.bottom - self.x_axis_height,
        )
    }

    pub fn validate(&self) -> BlazeResult<()> {
        let finite = [
            self.width,
            self.height,
            self.margin.top,
            self.margin.right,
            self.margin.bottom,
            self.margin.left,
            self.y_axis_width,
            self.x_axis_height,
            self.stroke_width,
            self.font_size,
        ];
        if finite.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(BlazeError::validation(
                "chart dimensions must be finite and >= 0",
            ));
        }
        let plot = self.plot_rect();
        if plot.width() <= 0.0 || plot.height() <= 0.0 {
            return Err(BlazeError::validation(format!(
                "chart {}x{} leaves no room for the plot",
                self.width, self.height
            )));
        }
        if self.y_tick_count < 2 {
            return Err(BlazeError::validation("chart needs at least 2 y ticks"));
        }
        Ok(())
    }
}

/// A sample placed on the plot.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: u32,
    pub position: Point,
}

/// Hover readout.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Tooltip {
    pub label: String,
    pub value: u32,
    /// The hovered sample's position on the plot.
    pub anchor: Point,
}

/// Fully laid out chart. Rebuilt from scratch whenever the series changes.
#[derive(Clone, Debug)]
pub struct AreaChart {
    pub style: ChartStyle,
    pub plot: Rect,
    pub points: Vec<ChartPoint>,
    pub y_scale: LinearScale,
    pub y_ticks: Vec<f64>,
    /// Monotone curve through the samples.
    pub line: BezPath,
    /// `line` closed down to the zero baseline.
    pub area: BezPath,
}

impl AreaChart {
    /// Category labels in input order.
    pub fn x_labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.points.iter().map(|p| p.label.as_str())
    }

    pub fn y_domain(&self) -> [f64; 2] {
        self.y_scale.domain
    }

    /// Index of the sample horizontally closest to `x`. Ties go to the earlier sample.
    pub fn nearest(&self, x: f64) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, p) in self.points.iter().enumerate() {
            let d = (p.position.x - x).abs();
            if best.is_none_or(|(_, bd)| d < bd) {
                best = Some((i, d));
            }
        }
        best.map(|(i, _)| i)
    }

    /// Tooltip for a pointer at horizontal position `x`.
    pub fn tooltip_at(&self, x: f64) -> Option<Tooltip> {
        let p = &self.points[self.nearest(x)?];
        Some(Tooltip {
            label: p.label.clone(),
            value: p.value,
            anchor: p.position,
        })
    }
}

/// Lays out an [`AreaChart`] from a series.
#[derive(Clone, Debug, Default)]
pub struct ChartRenderer {
    style: ChartStyle,
}

impl ChartRenderer {
    pub fn new(style: ChartStyle) -> BlazeResult<Self> {
        style.validate()?;
        Ok(Self { style })
    }

    pub fn style(&self) -> &ChartStyle {
        &self.style
    }

    #[tracing::instrument(skip(self, series), fields(points = series.len()))]
    pub fn render(&self, series: &[TimeSeriesPoint]) -> AreaChart {
        let plot = self.style.plot_rect();
        let max = series.iter().map(|p| p.value).max().unwrap_or(0);
        let y_ticks = zero_based_ticks(f64::from(max), self.style.y_tick_count);
        let top = y_ticks.last().copied().unwrap_or(1.0);
        let y_scale = LinearScale::new([0.0, top], [plot.y1, plot.y0]);

        let xs = point_positions(series.len(), plot.x0, plot.x1);
        let points: Vec<ChartPoint> = series
            .iter()
            .zip(xs)
            .map(|(p, x)| ChartPoint {
                label: p.label.clone(),
                value: p.value,
                position: Point::new(x, y_scale.map(f64::from(p.value))),
            })
            .collect();

        let positions: Vec<Point> = points.iter().map(|p| p.position).collect();
        let line = monotone_x(&positions);
        let area = close_to_baseline(&line, &positions, y_scale.map(0.0));
        tracing::debug!(max, top, "chart laid out");

        AreaChart {
            style: self.style.clone(),
            plot,
            points,
            y_scale,
            y_ticks,
            line,
            area,
        }
    }
}

/// Cubic curve through `pts` that is monotone between samples (no overshoot).
///
/// `pts` must be sorted by x.
pub fn monotone_x(pts: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let Some(first) = pts.first() else {
        return path;
    };
    path.move_to(*first);
    match pts.len() {
        1 => return path,
        2 => {
            path.line_to(pts[1]);
            return path;
        }
        _ => {}
    }

    let n = pts.len();
    let mut tangents = vec![0.0; n];
    for i in 1..n - 1 {
        tangents[i] = interior_tangent(pts[i - 1], pts[i], pts[i + 1]);
    }
    tangents[0] = end_tangent(pts[0], pts[1], tangents[1]);
    tangents[n - 1] = end_tangent(pts[n - 2], pts[n - 1], tangents[n - 2]);

    for i in 0..n - 1 {
        let (p0, p1) = (pts[i], pts[i + 1]);
        let dx = (p1.x - p0.x) / 3.0;
        path.curve_to(
            Point::new(p0.x + dx, p0.y + dx * tangents[i]),
            Point::new(p1.x - dx, p1.y - dx * tangents[i + 1]),
            p1,
        );
    }
    path
}

fn sign(x: f64) -> f64 {
    if x < 0.0 { -1.0 } else { 1.0 }
}

// Fritsch-Carlson style limited tangent at p1.
fn interior_tangent(p0: Point, p1: Point, p2: Point) -> f64 {
    let h0 = p1.x - p0.x;
    let h1 = p2.x - p1.x;
    let s0 = if h0 != 0.0 { (p1.y - p0.y) / h0 } else { 0.0 };
    let s1 = if h1 != 0.0 { (p2.y - p1.y) / h1 } else { 0.0 };
    let p = if h0 + h1 != 0.0 {
        (s0 * h1 + s1 * h0) / (h0 + h1)
    } else {
        0.0
    };
    let t = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    if t.is_finite() { t } else { 0.0 }
}

fn end_tangent(p0: Point, p1: Point, t: f64) -> f64 {
    let h = p1.x - p0.x;
    if h != 0.0 {
        (3.0 * (p1.y - p0.y) / h - t) / 2.0
    } else {
        t
    }
}

fn close_to_baseline(line: &BezPath, pts: &[Point], baseline: f64) -> BezPath {
    let mut area = line.clone();
    if let (Some(first), Some(last)) = (pts.first(), pts.last()) {
        area.line_to(Point::new(last.x, baseline));
        area.line_to(Point::new(first.x, baseline));
        area.close_path();
    }
    area
}

/// The interactive chart: a laid out [`AreaChart`] plus the hover cursor.
#[derive(Debug)]
pub struct ChartView {
    renderer: ChartRenderer,
    chart: AreaChart,
    hover: Option<usize>,
    pointer: Option<Subscription>,
}

impl ChartView {
    pub fn new(renderer: ChartRenderer, series: &[TimeSeriesPoint]) -> Self {
        let chart = renderer.render(series);
        Self {
            renderer,
            chart,
            hover: None,
            pointer: None,
        }
    }

    /// Listen for pointer events.
    pub fn start(&mut self, hub: &EventHub) {
        if self.pointer.is_none() {
            self.pointer = Some(hub.subscribe(Topic::Pointer, "chart-view"));
        }
    }

    /// Release the pointer listener and clear the hover.
    pub fn stop(&mut self) {
        self.pointer = None;
        self.hover = None;
    }

    pub fn chart(&self) -> &AreaChart {
        &self.chart
    }

    /// Replace the series. The chart is rebuilt and the hover cleared.
    pub fn set_series(&mut self, series: &[TimeSeriesPoint]) {
        self.chart = self.renderer.render(series);
        self.hover = None;
    }

    /// Pointer moved to chart-local `(x, y)`. Outside the plot the hover clears.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Option<Tooltip> {
        if self.pointer.is_none() {
            return None;
        }
        let plot = self.chart.plot;
        let inside = (plot.x0..=plot.x1).contains(&x) && (plot.y0..=plot.y1).contains(&y);
        self.hover = if inside {
            self.chart.nearest(x)
        } else {
            None
        };
        self.tooltip()
    }

    pub fn pointer_leave(&mut self) {
        self.hover = None;
    }

    /// Current hover readout.
    pub fn tooltip(&self) -> Option<Tooltip> {
        let p = self.chart.points.get(self.hover?)?;
        Some(Tooltip {
            label: p.label.clone(),
            value: p.value,
            anchor: p.position,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/chart/area.rs"]
mod tests;
