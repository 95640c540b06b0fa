use crate::chart::area::{AreaChart, Tooltip};
use crate::chart::svg::to_svg;
use crate::foundation::error::{BlazeError, BlazeResult};
use anyhow::Context;
use std::path::Path;
use std::sync::Arc;

const MAX_DIM: u32 = 16_384;

fn svg_options() -> usvg::Options<'static> {
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();
    usvg::Options {
        fontdb: Arc::new(db),
        ..Default::default()
    }
}

/// Rasterize an SVG document at `scale` into straight-alpha RGBA.
pub fn rasterize_svg(svg: &str, scale: f32) -> BlazeResult<image::RgbaImage> {
    if !(scale.is_finite() && scale > 0.0) {
        return Err(BlazeError::render(format!("invalid raster scale {scale}")));
    }
    let tree = usvg::Tree::from_str(svg, &svg_options()).context("parse chart svg")?;

    let size = tree.size();
    let to_px = |v: f32| (v * scale).ceil().max(1.0) as u32;
    let (w, h) = (to_px(size.width()), to_px(size.height()));
    if w > MAX_DIM || h > MAX_DIM {
        return Err(BlazeError::render(format!(
            "raster size too large: {w}x{h} (max {MAX_DIM}x{MAX_DIM})"
        )));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(w, h)
        .ok_or_else(|| BlazeError::render("failed to allocate pixmap"))?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    let data = pixmap
        .pixels()
        .iter()
        .flat_map(|px| {
            let c = px.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();
    image::RgbaImage::from_raw(w, h, data)
        .ok_or_else(|| BlazeError::render("pixmap size does not match image buffer"))
}

/// Render `chart` to a PNG file.
#[tracing::instrument(skip(chart, hover))]
pub fn write_png(
    chart: &AreaChart,
    hover: Option<&Tooltip>,
    path: &Path,
    scale: f32,
) -> BlazeResult<()> {
    let img = rasterize_svg(&to_svg(chart, hover), scale)?;
    img.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))?;
    tracing::debug!(width = img.width(), height = img.height(), "png written");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/chart/raster.rs"]
mod tests;
