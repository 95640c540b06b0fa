use crate::animation::spring::{SpringConfig, SpringState, SpringValue};
use crate::host::events::{EventHub, Subscription, Topic};

/// Maps a boolean UI flag onto a spring-driven presentation value.
///
/// The controller owns its spring and holds a frame subscription only while the spring is
/// moving.
#[derive(Debug)]
pub struct SpringTransitionController<T, const N: usize> {
    spring: SpringState<T, N>,
    inactive: T,
    active: T,
    is_active: bool,
    frame: Option<Subscription>,
}

impl<T, const N: usize> SpringTransitionController<T, N>
where
    T: SpringValue<N>,
{
    /// A controller resting at `inactive`.
    pub fn new(key: impl Into<String>, inactive: T, active: T, config: SpringConfig) -> Self {
        Self {
            spring: SpringState::new(key, inactive, config),
            inactive,
            active,
            is_active: false,
            frame: None,
        }
    }

    /// Switch the flag. Returns `true` when it changed.
    pub fn set_active(&mut self, active: bool, hub: &EventHub) -> bool {
        if active == self.is_active {
            return false;
        }
        self.is_active = active;
        let target = if active { self.active } else { self.inactive };
        self.spring.set_target(target);
        tracing::debug!(spring = self.spring.key(), active, "spring retargeted");

        if !self.spring.is_resting() && self.frame.is_none() {
            self.frame = Some(hub.subscribe(Topic::Frame, self.spring.key()));
        }
        true
    }

    /// Advance by one frame and return the new value.
    pub fn on_frame(&mut self, dt_secs: f64) -> T {
        if self.frame.is_none() {
            return self.spring.current();
        }
        let value = self.spring.advance(dt_secs);
        if self.spring.is_resting() {
            tracing::debug!(spring = self.spring.key(), "spring settled");
            self.frame = None;
        }
        value
    }

    /// Current presentation value.
    pub fn value(&self) -> T {
        self.spring.current()
    }

    /// Value the spring is heading to.
    pub fn target(&self) -> T {
        self.spring.target()
    }

    /// Current flag.
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Whether the controller holds a frame subscription.
    pub fn is_ticking(&self) -> bool {
        self.frame.is_some()
    }

    /// Release the frame subscription, freezing the value where it is.
    pub fn stop(&mut self) {
        self.frame = None;
    }

    /// The underlying spring.
    pub fn state(&self) -> &SpringState<T, N> {
        &self.spring
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/transition.rs"]
mod tests;
