use serde::{Deserialize, Serialize};

/// Affine map from a data domain to a pixel range.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    pub domain: [f64; 2],
    pub range: [f64; 2],
}

impl LinearScale {
    pub fn new(domain: [f64; 2], range: [f64; 2]) -> Self {
        Self { domain, range }
    }

    /// Pixel position of `value`. A degenerate domain maps everything to the range start.
    pub fn map(&self, value: f64) -> f64 {
        let [d0, d1] = self.domain;
        let [r0, r1] = self.range;
        if d1 == d0 {
            return r0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Data value at pixel position `px`.
    pub fn invert(&self, px: f64) -> f64 {
        let [d0, d1] = self.domain;
        let [r0, r1] = self.range;
        if r1 == r0 {
            return d0;
        }
        d0 + (px - r0) / (r1 - r0) * (d1 - d0)
    }
}

/// Round a raw tick step up to 1, 2, 2.5, 5 or 10 times a power of ten.
pub fn nice_step(raw: f64) -> f64 {
    if !(raw.is_finite() && raw > 0.0) {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let fraction = raw / magnitude;
    let nice = match fraction {
        f if f <= 1.0 => 1.0,
        f if f <= 2.0 => 2.0,
        f if f <= 2.5 => 2.5,
        f if f <= 5.0 => 5.0,
        _ => 10.0,
    };
    nice * magnitude
}

/// `count` evenly spaced ticks from 0 covering `max`.
///
/// A non-positive `max` yields ticks over `[0, 1]`.
pub fn zero_based_ticks(max: f64, count: usize) -> Vec<f64> {
    let count = count.max(2);
    let intervals = (count - 1) as f64;
    let step = if max > 0.0 {
        nice_step(max / intervals)
    } else {
        1.0 / intervals
    };
    (0..count).map(|i| i as f64 * step).collect()
}

/// Evenly spaced positions for `n` categories across `[start, end]`.
///
/// The first and last categories sit on the ends; a single category is centered.
pub fn point_positions(n: usize, start: f64, end: f64) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![0.5 * (start + end)],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + i as f64 * step).collect()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/chart/scale.rs"]
mod tests;
