//! Time-based interpolation: easing curves, springs, and staggered timelines.

pub mod ease;
pub mod lerp;
pub mod spring;
pub mod timeline;
pub mod transition;
