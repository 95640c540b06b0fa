use crate::foundation::core::{Rgba, Vec2};

/// Linear interpolation between two values of the same type.
///
/// `t` is not clamped, so overshooting easings extrapolate.
pub trait Lerp: Sized {
    /// Interpolate from `a` (at `t = 0`) to `b` (at `t = 1`).
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

impl Lerp for Rgba {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            r: <f64 as Lerp>::lerp(&a.r, &b.r, t),
            g: <f64 as Lerp>::lerp(&a.g, &b.g, t),
            b: <f64 as Lerp>::lerp(&a.b, &b.b, t),
            a: <f64 as Lerp>::lerp(&a.a, &b.a, t),
        }
    }
}
