use crate::animation::spring::SpringValue;
use crate::foundation::core::Rgba;
use serde::{Deserialize, Serialize};

const SHADOW_LAYERS: [(f64, f64, f64, f64); 2] = [(4.0, 6.0, -1.0, 0.1), (2.0, 4.0, -1.0, 0.06)];

/// Appearance of the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavChrome {
    /// Bar background.
    pub background: Rgba,
    /// Backdrop blur radius in pixels.
    pub blur_px: f64,
    /// Drop shadow strength; 0 is none, 1 is the full shadow.
    pub shadow: f64,
}

impl NavChrome {
    /// Page at the top.
    pub const TOP: Self = Self {
        background: Rgba::from_rgb8(17, 24, 39, 0.5),
        blur_px: 12.0,
        shadow: 0.0,
    };

    /// Page scrolled past the threshold.
    pub const SCROLLED: Self = Self {
        background: Rgba::from_rgb8(17, 24, 39, 0.95),
        blur_px: 16.0,
        shadow: 1.0,
    };

    /// CSS `box-shadow`.
    pub fn box_shadow_css(&self) -> String {
        let strength = self.shadow.clamp(0.0, 1.0);
        if strength <= 0.0 {
            return "none".to_owned();
        }
        SHADOW_LAYERS
            .iter()
            .map(|(y, blur, spread, alpha)| {
                let a = (alpha * strength * 1000.0).round() / 1000.0;
                format!("0 {y}px {blur}px {spread}px rgba(0, 0, 0, {a})")
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// CSS `backdrop-filter`.
    pub fn backdrop_filter_css(&self) -> String {
        format!("blur({}px)", (self.blur_px.max(0.0) * 100.0).round() / 100.0)
    }
}

impl Default for NavChrome {
    fn default() -> Self {
        Self::TOP
    }
}

impl SpringValue<6> for NavChrome {
    fn to_channels(self) -> [f64; 6] {
        let Rgba { r, g, b, a } = self.background;
        [r, g, b, a, self.blur_px, self.shadow]
    }

    fn from_channels([r, g, b, a, blur_px, shadow]: [f64; 6]) -> Self {
        Self {
            background: Rgba::new(r, g, b, a),
            blur_px,
            shadow,
        }
    }
}

/// Slide and fade of the mobile menu panel.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MenuPresentation {
    /// Horizontal translation in percent of the panel width.
    pub translate_x_pct: f64,
    /// Panel opacity.
    pub opacity: f64,
}

impl MenuPresentation {
    pub const CLOSED: Self = Self {
        translate_x_pct: -100.0,
        opacity: 0.0,
    };

    pub const OPEN: Self = Self {
        translate_x_pct: 0.0,
        opacity: 1.0,
    };

    /// CSS `transform`.
    pub fn transform_css(&self) -> String {
        format!("translateX({}%)", (self.translate_x_pct * 100.0).round() / 100.0)
    }
}

impl Default for MenuPresentation {
    fn default() -> Self {
        Self::CLOSED
    }
}

impl SpringValue<2> for MenuPresentation {
    fn to_channels(self) -> [f64; 2] {
        [self.translate_x_pct, self.opacity]
    }

    fn from_channels([translate_x_pct, opacity]: [f64; 2]) -> Self {
        Self {
            translate_x_pct,
            opacity,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ui/chrome.rs"]
mod tests;
