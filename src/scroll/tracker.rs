use crate::host::events::{EventHub, Subscription, Topic};
use serde::{Deserialize, Serialize};

/// Offset past which the page counts as scrolled.
pub const SCROLL_THRESHOLD_PX: u32 = 20;

/// Latest scroll offset and the flag derived from it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollState {
    /// Vertical document scroll offset in pixels.
    pub offset: u32,
    /// `offset > threshold`.
    pub past_threshold: bool,
}

impl ScrollState {
    /// State derived from `offset` alone.
    pub fn at(offset: u32, threshold: u32) -> Self {
        Self {
            offset,
            past_threshold: offset > threshold,
        }
    }
}

/// Tracks the document scroll offset while it holds a scroll listener.
#[derive(Debug)]
pub struct ScrollTracker {
    threshold: u32,
    state: ScrollState,
    listener: Option<Subscription>,
}

impl ScrollTracker {
    /// A stopped tracker at offset 0.
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold,
            state: ScrollState::at(0, threshold),
            listener: None,
        }
    }

    /// Register the scroll listener. Calling it twice keeps the first listener.
    pub fn start(&mut self, hub: &EventHub) {
        if self.listener.is_none() {
            self.listener = Some(hub.subscribe(Topic::Scroll, "scroll-tracker"));
        }
    }

    /// Release the listener; later events are ignored.
    pub fn stop(&mut self) {
        self.listener = None;
    }

    /// Whether a live scroll listener is held.
    pub fn is_listening(&self) -> bool {
        self.listener.as_ref().is_some_and(Subscription::is_active)
    }

    /// Record a new offset. Returns the new flag only when it flipped.
    pub fn on_scroll(&mut self, offset: u32) -> Option<bool> {
        if !self.is_listening() {
            return None;
        }
        let prev = self.state.past_threshold;
        self.state = ScrollState::at(offset, self.threshold);
        (self.state.past_threshold != prev).then_some(self.state.past_threshold)
    }

    /// Latest state.
    pub fn state(&self) -> ScrollState {
        self.state
    }

    /// Configured threshold.
    pub fn threshold(&self) -> u32 {
        self.threshold
    }
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(SCROLL_THRESHOLD_PX)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/tracker.rs"]
mod tests;
