use crate::foundation::core::{Rect, Viewport};
use crate::foundation::error::{BlazeError, BlazeResult};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

/// Geometry the rendering layer exposes to the motion core.
///
/// Rects are in document coordinates (independent of scroll).
pub trait LayoutProvider {
    /// Current viewport size.
    fn viewport(&self) -> Viewport;

    /// Bounding rect of the element with `id`, or `None` when it is not rendered.
    fn bounding_rect(&self, id: &str) -> Option<Rect>;

    /// Ids of rendered elements matching `selector`, in document order.
    ///
    /// `.class` matches by class, `#id` and bare names match by id.
    fn select(&self, selector: &str) -> Vec<String>;

    /// The viewport changed size. Hosts that measure live geometry can ignore this.
    fn resize(&mut self, viewport: Viewport) {
        let _ = viewport;
    }
}

/// One rendered element.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutElement {
    /// Unique element id.
    pub id: String,
    /// Class names used by selectors.
    #[serde(default)]
    pub classes: Vec<String>,
    /// Bounding rect in document coordinates.
    pub rect: Rect,
}

impl LayoutElement {
    /// Element at `rect` with the given classes.
    pub fn new(id: impl Into<String>, classes: &[&str], rect: Rect) -> Self {
        Self {
            id: id.into(),
            classes: classes.iter().map(|c| (*c).to_owned()).collect(),
            rect,
        }
    }
}

/// A static snapshot of page geometry, kept in document order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    /// Visible area.
    pub viewport: Viewport,
    /// Rendered elements, in document order.
    pub elements: Vec<LayoutElement>,
}

impl PageLayout {
    /// Empty page with the given viewport.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            elements: Vec::new(),
        }
    }

    /// Geometry of the dashboard page at a 1280×800 desktop viewport.
    pub fn desktop() -> Self {
        let row = |y0: f64, y1: f64| {
            let (left, gap, width) = (96.0, 24.0, 347.0);
            (0..3).map(move |i| {
                let x0 = left + f64::from(i) * (width + gap);
                Rect::new(x0, y0, x0 + width, y1)
            })
        };

        let mut elements = vec![
            LayoutElement::new("nav", &[], Rect::new(0.0, 0.0, 1280.0, 72.0)),
            LayoutElement::new("hero", &["section"], Rect::new(0.0, 0.0, 1280.0, 880.0)),
            LayoutElement::new("stats", &["grid"], Rect::new(96.0, 600.0, 1184.0, 720.0)),
        ];
        elements.extend(
            row(600.0, 720.0)
                .enumerate()
                .map(|(i, r)| LayoutElement::new(format!("stat-card-{i}"), &["stat-card"], r)),
        );
        elements.extend([
            LayoutElement::new(
                "predictions",
                &["section"],
                Rect::new(0.0, 880.0, 1280.0, 1520.0),
            ),
            LayoutElement::new(
                "analytics",
                &["section"],
                Rect::new(0.0, 1520.0, 1280.0, 2400.0),
            ),
            LayoutElement::new("alerts", &["section"], Rect::new(0.0, 2400.0, 1280.0, 3000.0)),
        ]);
        elements.extend(
            row(2620.0, 2790.0)
                .enumerate()
                .map(|(i, r)| LayoutElement::new(format!("alert-card-{i}"), &["alert-card"], r)),
        );
        elements.extend([
            LayoutElement::new("cta", &["section"], Rect::new(0.0, 3000.0, 1280.0, 3420.0)),
            LayoutElement::new("footer", &[], Rect::new(0.0, 3420.0, 1280.0, 3900.0)),
        ]);

        Self {
            viewport: Viewport::default(),
            elements,
        }
    }

    /// Load from JSON on disk.
    pub fn from_path(path: &Path) -> BlazeResult<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read layout '{}'", path.display()))?;
        let layout: Self = serde_json::from_str(&json)?;
        layout.validate()?;
        Ok(layout)
    }

    /// Check the viewport and that ids are unique and rects finite.
    pub fn validate(&self) -> BlazeResult<()> {
        self.viewport.validate()?;
        let mut seen = BTreeSet::new();
        for el in &self.elements {
            if el.id.is_empty() {
                return Err(BlazeError::validation("layout element id must be non-empty"));
            }
            if !seen.insert(el.id.as_str()) {
                return Err(BlazeError::validation(format!(
                    "duplicate layout element id \"{}\"",
                    el.id
                )));
            }
            let r = el.rect;
            if ![r.x0, r.y0, r.x1, r.y1].iter().all(|v| v.is_finite()) {
                return Err(BlazeError::validation(format!(
                    "layout element \"{}\" has a non-finite rect",
                    el.id
                )));
            }
        }
        Ok(())
    }

    /// Replace the viewport (a resize).
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Stop rendering an element, returning it.
    pub fn remove(&mut self, id: &str) -> Option<LayoutElement> {
        let idx = self.elements.iter().position(|e| e.id == id)?;
        Some(self.elements.remove(idx))
    }

    /// Render an element, replacing any element with the same id.
    pub fn insert(&mut self, element: LayoutElement) {
        match self.elements.iter_mut().find(|e| e.id == element.id) {
            Some(slot) => *slot = element,
            None => self.elements.push(element),
        }
    }

    /// Total document height.
    pub fn document_height(&self) -> f64 {
        self.elements.iter().map(|e| e.rect.y1).fold(0.0, f64::max)
    }
}

impl LayoutProvider for PageLayout {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn resize(&mut self, viewport: Viewport) {
        self.set_viewport(viewport);
    }

    fn bounding_rect(&self, id: &str) -> Option<Rect> {
        self.elements.iter().find(|e| e.id == id).map(|e| e.rect)
    }

    fn select(&self, selector: &str) -> Vec<String> {
        let matches = |el: &LayoutElement| match selector.strip_prefix('.') {
            Some(class) => el.classes.iter().any(|c| c == class),
            None => el.id == selector.strip_prefix('#').unwrap_or(selector),
        };
        self.elements
            .iter()
            .filter(|el| matches(*el))
            .map(|el| el.id.clone())
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/layout.rs"]
mod tests;
