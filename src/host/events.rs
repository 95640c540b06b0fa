use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

/// Kinds of host callbacks a component can listen to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    /// Scroll offset changes.
    Scroll,
    /// Viewport size changes.
    Resize,
    /// Per-frame animation ticks.
    Frame,
    /// Pointer movement over an interactive surface.
    Pointer,
}

/// One input from the host, delivered to the session in arrival order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostEvent {
    /// The document scrolled to `offset` pixels.
    Scroll {
        /// Vertical scroll offset.
        offset: u32,
    },
    /// The viewport was resized.
    Resize {
        /// New width in pixels.
        width: f64,
        /// New height in pixels.
        height: f64,
    },
    /// A rendering frame elapsed.
    Frame {
        /// Seconds since the previous frame.
        dt_secs: f64,
    },
    /// The mobile menu button was pressed.
    ToggleMenu,
    /// A navigation link was clicked.
    NavLink {
        /// Visible link label, e.g. `"Live Map"`.
        label: String,
    },
    /// The location search field changed.
    SearchInput {
        /// Full field contents.
        text: String,
    },
    /// The search form was submitted.
    SearchSubmit,
    /// "Use my location" was pressed.
    UseMyLocation,
    /// The pointer moved over the chart, in chart-local pixels.
    PointerMove {
        /// Horizontal position.
        x: f64,
        /// Vertical position.
        y: f64,
    },
    /// The pointer left the chart.
    PointerLeave,
}

impl HostEvent {
    /// Listener topic that must be held for this event to reach a component, if any.
    pub fn topic(&self) -> Option<Topic> {
        match self {
            Self::Scroll { .. } => Some(Topic::Scroll),
            Self::Resize { .. } => Some(Topic::Resize),
            Self::Frame { .. } => Some(Topic::Frame),
            Self::PointerMove { .. } | Self::PointerLeave => Some(Topic::Pointer),
            Self::ToggleMenu
            | Self::NavLink { .. }
            | Self::SearchInput { .. }
            | Self::SearchSubmit
            | Self::UseMyLocation => None,
        }
    }
}

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    active: BTreeMap<u64, (Topic, String)>,
}

/// Registry of live listeners.
///
/// Cloning shares the registry. Listeners are [`Subscription`] guards that deregister on
/// drop, so a component that is dropped or stopped can never be called back.
#[derive(Clone, Debug, Default)]
pub struct EventHub {
    inner: Rc<RefCell<Registry>>,
}

impl EventHub {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener on `topic` on behalf of `owner`.
    pub fn subscribe(&self, topic: Topic, owner: impl Into<String>) -> Subscription {
        let mut reg = self.inner.borrow_mut();
        let id = reg.next_id;
        reg.next_id += 1;
        reg.active.insert(id, (topic, owner.into()));
        Subscription {
            id,
            topic,
            hub: Rc::downgrade(&self.inner),
        }
    }

    /// Number of live listeners across all topics.
    pub fn active_count(&self) -> usize {
        self.inner.borrow().active.len()
    }

    /// Number of live listeners on `topic`.
    pub fn active_on(&self, topic: Topic) -> usize {
        self.inner
            .borrow()
            .active
            .values()
            .filter(|(t, _)| *t == topic)
            .count()
    }

    /// Owners listening on `topic`, in subscription order.
    pub fn owners(&self, topic: Topic) -> Vec<String> {
        self.inner
            .borrow()
            .active
            .values()
            .filter(|(t, _)| *t == topic)
            .map(|(_, owner)| owner.clone())
            .collect()
    }
}

/// A live listener registration. Dropping it deregisters the listener.
#[derive(Debug)]
#[must_use = "dropping a Subscription immediately deregisters it"]
pub struct Subscription {
    id: u64,
    topic: Topic,
    hub: Weak<RefCell<Registry>>,
}

impl Subscription {
    /// Topic this listener is registered on.
    pub fn topic(&self) -> Topic {
        self.topic
    }

    /// Whether the registry still knows this listener.
    pub fn is_active(&self) -> bool {
        self.hub
            .upgrade()
            .is_some_and(|reg| reg.borrow().active.contains_key(&self.id))
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(reg) = self.hub.upgrade() {
            reg.borrow_mut().active.remove(&self.id);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/events.rs"]
mod tests;
