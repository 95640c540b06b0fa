use crate::chart::area::{AreaChart, Tooltip};
use crate::foundation::core::Rgba;
use std::fmt::Write as _;

const GRADIENT_ID: &str = "fireGradient";
const TICK_SIZE: f64 = 6.0;
const TOOLTIP_PAD: f64 = 10.0;

/// Compact decimal: at most two fractional digits, no trailing zeros.
fn num(v: f64) -> String {
    let r = (v * 100.0).round() / 100.0;
    if r == 0.0 {
        return "0".to_owned();
    }
    format!("{r}")
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

fn opacity_attr(name: &str, color: Rgba) -> String {
    if color.a >= 1.0 {
        String::new()
    } else {
        format!(r#" {name}="{}""#, num(color.a))
    }
}

/// Standalone SVG document for `chart`, with the hover overlay when `hover` is set.
pub fn to_svg(chart: &AreaChart, hover: Option<&Tooltip>) -> String {
    let style = &chart.style;
    let plot = chart.plot;
    let axis = style.axis.to_hex();
    let mut s = String::new();

    // `write!` into a String cannot fail.
    let _ = writeln!(
        s,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="{font}" font-size="{fs}">"#,
        w = num(style.width),
        h = num(style.height),
        font = escape(&style.font_family),
        fs = num(style.font_size),
    );

    let stroke = style.stroke.to_hex();
    let _ = writeln!(
        s,
        r#"<defs><linearGradient id="{GRADIENT_ID}" x1="0" y1="0" x2="0" y2="1">"#
    );
    for (offset, opacity) in style.fill_stops {
        let _ = writeln!(
            s,
            r#"<stop offset="{}%" stop-color="{stroke}" stop-opacity="{}"/>"#,
            num(offset * 100.0),
            num(opacity)
        );
    }
    s.push_str("</linearGradient></defs>\n");

    let grid = style.grid.to_hex();
    let dash = format!("{} {}", num(style.grid_dash[0]), num(style.grid_dash[1]));
    let _ = writeln!(
        s,
        r#"<g class="grid" stroke="{grid}" stroke-dasharray="{dash}" fill="none">"#
    );
    for tick in &chart.y_ticks {
        let y = num(chart.y_scale.map(*tick));
        let _ = writeln!(
            s,
            r#"<line x1="{}" y1="{y}" x2="{}" y2="{y}"/>"#,
            num(plot.x0),
            num(plot.x1)
        );
    }
    for p in &chart.points {
        let x = num(p.position.x);
        let _ = writeln!(
            s,
            r#"<line x1="{x}" y1="{}" x2="{x}" y2="{}"/>"#,
            num(plot.y0),
            num(plot.y1)
        );
    }
    s.push_str("</g>\n");

    if !chart.points.is_empty() {
        let _ = writeln!(
            s,
            r#"<path class="area" d="{}" fill="url(#{GRADIENT_ID})" fill-opacity="1" stroke="none"/>"#,
            chart.area.to_svg()
        );
        let _ = writeln!(
            s,
            r#"<path class="line" d="{}" fill="none" stroke="{stroke}" stroke-width="{}"{}/>"#,
            chart.line.to_svg(),
            num(style.stroke_width),
            opacity_attr("stroke-opacity", style.stroke)
        );
    }

    // x axis
    let _ = writeln!(s, r#"<g class="x-axis" stroke="{axis}" fill="{axis}">"#);
    let _ = writeln!(
        s,
        r#"<line x1="{}" y1="{y}" x2="{}" y2="{y}"/>"#,
        num(plot.x0),
        num(plot.x1),
        y = num(plot.y1)
    );
    for p in &chart.points {
        let x = num(p.position.x);
        let _ = writeln!(
            s,
            r#"<line x1="{x}" y1="{}" x2="{x}" y2="{}"/>"#,
            num(plot.y1),
            num(plot.y1 + TICK_SIZE)
        );
        let _ = writeln!(
            s,
            r#"<text x="{x}" y="{}" text-anchor="middle" stroke="none">{}</text>"#,
            num(plot.y1 + TICK_SIZE + style.font_size),
            escape(&p.label)
        );
    }
    s.push_str("</g>\n");

    // y axis
    let _ = writeln!(s, r#"<g class="y-axis" stroke="{axis}" fill="{axis}">"#);
    let _ = writeln!(
        s,
        r#"<line x1="{x}" y1="{}" x2="{x}" y2="{}"/>"#,
        num(plot.y0),
        num(plot.y1),
        x = num(plot.x0)
    );
    for tick in &chart.y_ticks {
        let y = chart.y_scale.map(*tick);
        let _ = writeln!(
            s,
            r#"<line x1="{}" y1="{y}" x2="{}" y2="{y}"/>"#,
            num(plot.x0 - TICK_SIZE),
            num(plot.x0),
            y = num(y)
        );
        let _ = writeln!(
            s,
            r#"<text x="{}" y="{}" text-anchor="end" stroke="none">{}</text>"#,
            num(plot.x0 - TICK_SIZE - 2.0),
            num(y + style.font_size / 3.0),
            num(*tick)
        );
    }
    s.push_str("</g>\n");

    if let Some(tip) = hover {
        write_tooltip(&mut s, chart, tip);
    }

    s.push_str("</svg>\n");
    s
}

fn write_tooltip(s: &mut String, chart: &AreaChart, tip: &Tooltip) {
    let style = &chart.style;
    let plot = chart.plot;
    let anchor = tip.anchor;
    let value_line = format!("{} : {}", style.series_name, tip.value);

    let _ = writeln!(
        s,
        r##"<line class="cursor" x1="{x}" y1="{}" x2="{x}" y2="{}" stroke="#ccc"/>"##,
        num(plot.y0),
        num(plot.y1),
        x = num(anchor.x)
    );
    let _ = writeln!(
        s,
        r##"<circle class="active-dot" cx="{}" cy="{}" r="4" fill="{}" stroke="#fff" stroke-width="2"/>"##,
        num(anchor.x),
        num(anchor.y),
        style.stroke.to_hex()
    );

    // Rough box size; glyph metrics are not known here.
    let chars = tip.label.chars().count().max(value_line.chars().count()) as f64;
    let w = chars * style.font_size * 0.6 + 2.0 * TOOLTIP_PAD;
    let h = 2.0 * style.font_size * 1.4 + 2.0 * TOOLTIP_PAD;
    let mut x = anchor.x + TOOLTIP_PAD;
    if x + w > style.width {
        x = anchor.x - TOOLTIP_PAD - w;
    }
    let y = (anchor.y - h / 2.0).clamp(0.0, (style.height - h).max(0.0));

    let _ = writeln!(
        s,
        r#"<g class="tooltip"><rect x="{}" y="{}" width="{}" height="{}" rx="8" fill="{}" stroke="{}"/>"#,
        num(x),
        num(y),
        num(w),
        num(h),
        style.tooltip_background.to_hex(),
        style.tooltip_border.to_hex()
    );
    let line_h = style.font_size * 1.4;
    let _ = writeln!(
        s,
        r##"<text x="{}" y="{}" fill="#fff">{}</text>"##,
        num(x + TOOLTIP_PAD),
        num(y + TOOLTIP_PAD + style.font_size),
        escape(&tip.label)
    );
    let _ = writeln!(
        s,
        r#"<text x="{}" y="{}" fill="{}">{}</text></g>"#,
        num(x + TOOLTIP_PAD),
        num(y + TOOLTIP_PAD + style.font_size + line_h),
        style.stroke.to_hex(),
        escape(&value_line)
    );
}

#[cfg(test)]
#[path = "../../tests/unit/chart/svg.rs"]
mod tests;
