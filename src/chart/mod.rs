//! Analytics area chart: model, SVG output, and rasterization.

pub mod area;
pub mod raster;
pub mod scale;
pub mod svg;
