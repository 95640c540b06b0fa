use crate::animation::timeline::AnimationSequenceSpec;
use crate::foundation::core::{Rect, Viewport};
use crate::foundation::error::{BlazeError, BlazeResult};
use crate::host::events::{EventHub, Subscription, Topic};
use crate::host::layout::LayoutProvider;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Horizontal line on an element or in the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Top,
    Center,
    Bottom,
}

impl Edge {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "top" => Some(Self::Top),
            "center" => Some(Self::Center),
            "bottom" => Some(Self::Bottom),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Center => "center",
            Self::Bottom => "bottom",
        }
    }

    fn of(self, rect: Rect) -> f64 {
        match self {
            Self::Top => rect.y0,
            Self::Center => 0.5 * (rect.y0 + rect.y1),
            Self::Bottom => rect.y1,
        }
    }
}

/// Position in the viewport, measured down from its top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewportAnchor {
    /// Percentage of the viewport height.
    Percent(f64),
    /// Absolute pixels.
    Pixels(f64),
}

impl ViewportAnchor {
    fn resolve(self, viewport: Viewport) -> f64 {
        match self {
            Self::Percent(p) => viewport.height * p / 100.0,
            Self::Pixels(px) => px,
        }
    }
}

/// When a trigger fires: `"<element edge> <viewport position>"`, e.g. `"top 80%"`.
///
/// The condition holds once the element edge, relative to the viewport top, is at or above
/// the viewport position.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StartCondition {
    /// Edge of the target element.
    pub edge: Edge,
    /// Line in the viewport the edge has to reach.
    pub anchor: ViewportAnchor,
}

impl StartCondition {
    /// Element top at `percent` of the viewport height.
    pub const fn top_at_percent(percent: f64) -> Self {
        Self {
            edge: Edge::Top,
            anchor: ViewportAnchor::Percent(percent),
        }
    }

    /// Whether an element at `rect` (document coordinates) satisfies the condition.
    pub fn is_met(&self, rect: Rect, scroll_offset: u32, viewport: Viewport) -> bool {
        let edge_y = self.edge.of(rect) - f64::from(scroll_offset);
        edge_y <= self.anchor.resolve(viewport)
    }
}

impl FromStr for StartCondition {
    type Err = BlazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || BlazeError::validation(format!("invalid start condition \"{s}\""));
        let mut parts = s.split_whitespace();
        let (Some(edge), Some(anchor), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(bad());
        };

        let edge = Edge::parse(edge).ok_or_else(bad)?;
        let anchor = match Edge::parse(anchor) {
            Some(Edge::Top) => ViewportAnchor::Percent(0.0),
            Some(Edge::Center) => ViewportAnchor::Percent(50.0),
            Some(Edge::Bottom) => ViewportAnchor::Percent(100.0),
            None => {
                let (num, pct) = match anchor.strip_suffix('%') {
                    Some(n) => (n, true),
                    None => (anchor.strip_suffix("px").unwrap_or(anchor), false),
                };
                let v: f64 = num.parse().map_err(|_| bad())?;
                if !v.is_finite() {
                    return Err(bad());
                }
                if pct {
                    ViewportAnchor::Percent(v)
                } else {
                    ViewportAnchor::Pixels(v)
                }
            }
        };
        Ok(Self { edge, anchor })
    }
}

impl fmt::Display for StartCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.anchor {
            ViewportAnchor::Percent(p) => write!(f, "{} {p}%", self.edge.name()),
            ViewportAnchor::Pixels(px) => write!(f, "{} {px}px", self.edge.name()),
        }
    }
}

impl TryFrom<String> for StartCondition {
    type Error = BlazeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<StartCondition> for String {
    fn from(c: StartCondition) -> Self {
        c.to_string()
    }
}

/// Lifecycle of a registration. `Pending -> Fired` is the only transition.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerPhase {
    Pending,
    Fired {
        /// Session clock time of the firing.
        at_secs: f64,
    },
}

impl TriggerPhase {
    /// Whether the trigger already fired.
    pub fn is_fired(&self) -> bool {
        matches!(self, Self::Fired { .. })
    }
}

/// A page region bound to the sequence it plays once.
#[derive(Clone, Debug)]
pub struct TriggerRegistration {
    /// Unique id, also used as the timeline id.
    pub id: String,
    /// Element whose geometry is tested.
    pub target: String,
    /// Condition on the target's geometry.
    pub start: StartCondition,
    /// Sequence handed to the animator on firing.
    pub sequence: AnimationSequenceSpec,
    /// Selector re-resolved into `sequence.elements` while pending. `None` keeps the
    /// elements given at registration.
    pub selector: Option<String>,
    /// Current phase.
    pub phase: TriggerPhase,
}

/// A registration that fired during an evaluation.
#[derive(Clone, Debug, PartialEq)]
pub struct FiredTrigger {
    pub id: String,
    pub at_secs: f64,
    pub sequence: AnimationSequenceSpec,
}

/// One-shot scroll triggers, re-evaluated on scroll and resize.
#[derive(Debug, Default)]
pub struct ViewportTriggerRegistry {
    registrations: Vec<TriggerRegistration>,
    listeners: Vec<Subscription>,
}

impl ViewportTriggerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pending registration.
    pub fn register(
        &mut self,
        id: impl Into<String>,
        target: impl Into<String>,
        start: StartCondition,
        sequence: AnimationSequenceSpec,
    ) -> BlazeResult<()> {
        let id = id.into();
        if self.get(&id).is_some() {
            return Err(BlazeError::validation(format!(
                "trigger \"{id}\" is already registered"
            )));
        }
        sequence.validate()?;
        self.registrations.push(TriggerRegistration {
            id,
            target: target.into(),
            start,
            sequence,
            selector: None,
            phase: TriggerPhase::Pending,
        });
        Ok(())
    }

    /// Add a pending registration whose animated elements are looked up by `selector` on
    /// every evaluation until it fires, so elements rendered after mount are animated.
    pub fn register_selector(
        &mut self,
        id: impl Into<String>,
        target: impl Into<String>,
        selector: impl Into<String>,
        start: StartCondition,
        sequence: AnimationSequenceSpec,
    ) -> BlazeResult<()> {
        let id = id.into();
        self.register(id.clone(), target, start, sequence)?;
        if let Some(reg) = self.registrations.iter_mut().find(|r| r.id == id) {
            reg.selector = Some(selector.into());
        }
        Ok(())
    }

    /// Listen for scroll and resize.
    pub fn start(&mut self, hub: &EventHub) {
        if self.listeners.is_empty() {
            self.listeners = vec![
                hub.subscribe(Topic::Scroll, "trigger-registry"),
                hub.subscribe(Topic::Resize, "trigger-registry"),
            ];
        }
    }

    /// Release both listeners. Pending registrations stay pending.
    pub fn stop(&mut self) {
        self.listeners.clear();
    }

    /// Whether the listeners are held.
    pub fn is_listening(&self) -> bool {
        !self.listeners.is_empty()
    }

    /// Test every pending registration against the current geometry and fire those whose
    /// condition holds.
    ///
    /// A target missing from `layout` is skipped and stays pending. Pending selectors are
    /// resolved again first. Does nothing while stopped.
    #[tracing::instrument(skip(self, layout))]
    pub fn evaluate(
        &mut self,
        scroll_offset: u32,
        now_secs: f64,
        layout: &dyn LayoutProvider,
    ) -> Vec<FiredTrigger> {
        if !self.is_listening() {
            return Vec::new();
        }

        let viewport = layout.viewport();
        let mut fired = Vec::new();
        for reg in &mut self.registrations {
            if reg.phase.is_fired() {
                continue;
            }
            if let Some(selector) = &reg.selector {
                reg.sequence.elements = layout.select(selector);
            }
            let Some(rect) = layout.bounding_rect(&reg.target) else {
                tracing::debug!(trigger = %reg.id, target = %reg.target, "target not rendered");
                continue;
            };
            if !reg.start.is_met(rect, scroll_offset, viewport) {
                continue;
            }

            reg.phase = TriggerPhase::Fired { at_secs: now_secs };
            tracing::debug!(
                trigger = %reg.id,
                start = %reg.start,
                elements = reg.sequence.elements.len(),
                "trigger fired"
            );
            fired.push(FiredTrigger {
                id: reg.id.clone(),
                at_secs: now_secs,
                sequence: reg.sequence.clone(),
            });
        }
        fired
    }

    /// Every registration, in registration order.
    pub fn registrations(&self) -> &[TriggerRegistration] {
        &self.registrations
    }

    pub fn get(&self, id: &str) -> Option<&TriggerRegistration> {
        self.registrations.iter().find(|r| r.id == id)
    }

    /// Registrations that have not fired yet.
    pub fn pending_count(&self) -> usize {
        self.registrations
            .iter()
            .filter(|r| !r.phase.is_fired())
            .count()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/trigger.rs"]
mod tests;
