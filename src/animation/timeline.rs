use crate::animation::{ease::Ease, lerp::Lerp};
use crate::foundation::core::Vec2;
use crate::foundation::error::{BlazeError, BlazeResult};
use crate::host::events::{EventHub, Subscription, Topic};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-element visual state produced by entrance sequences.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementStyle {
    /// Opacity in `[0, 1]` (may briefly exceed it under overshooting easings).
    pub opacity: f64,
    /// Translation from the element's resting position, in pixels.
    pub offset: Vec2,
}

impl ElementStyle {
    /// Resting, fully visible.
    pub const VISIBLE: Self = Self {
        opacity: 1.0,
        offset: Vec2::ZERO,
    };

    /// Invisible and displaced by `(dx, dy)`.
    pub const fn hidden(dx: f64, dy: f64) -> Self {
        Self {
            opacity: 0.0,
            offset: Vec2::new(dx, dy),
        }
    }

    /// CSS `transform` value.
    pub fn transform_css(&self) -> String {
        format!("translate({}px, {}px)", self.offset.x, self.offset.y)
    }
}

impl Default for ElementStyle {
    fn default() -> Self {
        Self::VISIBLE
    }
}

impl Lerp for ElementStyle {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            opacity: <f64 as Lerp>::lerp(&a.opacity, &b.opacity, t),
            offset: <Vec2 as Lerp>::lerp(&a.offset, &b.offset, t),
        }
    }
}

/// What a one-shot entrance animates: ordered elements, start and end styles, timing.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnimationSequenceSpec {
    /// Element ids in stagger order.
    pub elements: Vec<String>,
    /// Style applied before and at the start of each element's tween.
    pub from: ElementStyle,
    /// Style each element ends at.
    pub to: ElementStyle,
    /// Delay between consecutive elements' starts.
    pub stagger_secs: f64,
    /// Length of each element's tween.
    pub duration_secs: f64,
    /// Progress curve shared by the group.
    pub ease: Ease,
}

impl AnimationSequenceSpec {
    /// Check timing parameters.
    pub fn validate(&self) -> BlazeResult<()> {
        if !(self.duration_secs.is_finite() && self.duration_secs >= 0.0) {
            return Err(BlazeError::validation(
                "sequence duration must be finite and >= 0",
            ));
        }
        if !(self.stagger_secs.is_finite() && self.stagger_secs >= 0.0) {
            return Err(BlazeError::validation(
                "sequence stagger must be finite and >= 0",
            ));
        }
        Ok(())
    }

    /// Start of element `index`, relative to the sequence start.
    pub fn start_offset(&self, index: usize) -> f64 {
        index as f64 * self.stagger_secs
    }

    /// Time from sequence start until the last element finishes.
    pub fn total_secs(&self) -> f64 {
        match self.elements.len() {
            0 => 0.0,
            n => self.start_offset(n - 1) + self.duration_secs,
        }
    }

    /// Style of element `index` at `elapsed_secs` after the sequence start.
    pub fn style_at(&self, index: usize, elapsed_secs: f64) -> ElementStyle {
        let local = elapsed_secs - self.start_offset(index);
        if local < 0.0 {
            return self.from;
        }
        if local >= self.duration_secs {
            return self.to;
        }
        let t = self.ease.apply(local / self.duration_secs);
        ElementStyle::lerp(&self.from, &self.to, t)
    }
}

/// A sequence bound to the clock time it started at.
#[derive(Clone, Debug)]
pub struct Timeline {
    id: String,
    spec: AnimationSequenceSpec,
    started_at: f64,
}

impl Timeline {
    /// Identifier (the trigger or intro that started it).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The sequence being played.
    pub fn spec(&self) -> &AnimationSequenceSpec {
        &self.spec
    }

    /// Clock time the sequence started.
    pub fn started_at(&self) -> f64 {
        self.started_at
    }

    /// Clock time element `index` starts moving.
    pub fn start_time(&self, index: usize) -> Option<f64> {
        (index < self.spec.elements.len()).then(|| self.started_at + self.spec.start_offset(index))
    }

    /// Whether every element has reached its end style at `now_secs`.
    pub fn is_complete(&self, now_secs: f64) -> bool {
        now_secs - self.started_at >= self.spec.total_secs()
    }

    /// Every element's style at `now_secs`.
    pub fn sample(&self, now_secs: f64) -> impl Iterator<Item = (&str, ElementStyle)> + '_ {
        let elapsed = now_secs - self.started_at;
        self.spec
            .elements
            .iter()
            .enumerate()
            .map(move |(i, el)| (el.as_str(), self.spec.style_at(i, elapsed)))
    }
}

/// Plays one-shot sequences and ticks while any is still running.
#[derive(Debug, Default)]
pub struct TimelineAnimator {
    timelines: Vec<Timeline>,
    frame: Option<Subscription>,
}

impl TimelineAnimator {
    /// An idle animator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start `spec` at clock time `at_secs`.
    ///
    /// Returns `false` (and plays nothing) when a timeline with the same id already ran.
    pub fn play(
        &mut self,
        id: impl Into<String>,
        spec: AnimationSequenceSpec,
        at_secs: f64,
        hub: &EventHub,
    ) -> bool {
        let id = id.into();
        if self.timeline(&id).is_some() {
            tracing::warn!(timeline = %id, "sequence already played, ignoring");
            return false;
        }

        tracing::debug!(
            timeline = %id,
            elements = spec.elements.len(),
            at_secs,
            "timeline started"
        );
        let timeline = Timeline {
            id,
            spec,
            started_at: at_secs,
        };
        let complete = timeline.is_complete(at_secs);
        self.timelines.push(timeline);
        if !complete && self.frame.is_none() {
            self.frame = Some(hub.subscribe(Topic::Frame, "timeline-animator"));
        }
        true
    }

    /// Per-frame tick. Drops the frame subscription once every timeline is complete.
    pub fn on_frame(&mut self, now_secs: f64) {
        if self.frame.is_none() {
            return;
        }
        if self.timelines.iter().all(|t| t.is_complete(now_secs)) {
            tracing::debug!(now_secs, "all timelines complete");
            self.frame = None;
        }
    }

    /// Whether a frame subscription is held.
    pub fn is_running(&self) -> bool {
        self.frame.is_some()
    }

    /// Look up a timeline by id.
    pub fn timeline(&self, id: &str) -> Option<&Timeline> {
        self.timelines.iter().find(|t| t.id == id)
    }

    /// All timelines, in the order they started.
    pub fn timelines(&self) -> &[Timeline] {
        &self.timelines
    }

    /// Styles of every element touched by any timeline. Later timelines win.
    pub fn styles(&self, now_secs: f64) -> BTreeMap<String, ElementStyle> {
        let mut out = BTreeMap::new();
        for timeline in &self.timelines {
            for (el, style) in timeline.sample(now_secs) {
                out.insert(el.to_owned(), style);
            }
        }
        out
    }

    /// Release the frame subscription and discard every timeline.
    pub fn stop(&mut self) {
        self.frame = None;
        self.timelines.clear();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
