use crate::foundation::error::{BlazeError, BlazeResult};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

/// Longest integration sub-step. Each frame's `dt` is split into equal sub-steps no longer
/// than this, so trajectories barely depend on the host's frame rate.
const STEP_SECS: f64 = 0.001;

/// Longest span a single `advance` integrates. Longer gaps (a stalled host) are treated as
/// this long.
pub const MAX_ADVANCE_SECS: f64 = 1.0;

/// A value a spring can drive, viewed as `N` independent scalar channels.
pub trait SpringValue<const N: usize>: Copy {
    /// Flatten into channels.
    fn to_channels(self) -> [f64; N];
    /// Rebuild from channels.
    fn from_channels(channels: [f64; N]) -> Self;
}

impl SpringValue<1> for f64 {
    fn to_channels(self) -> [f64; 1] {
        [self]
    }

    fn from_channels(channels: [f64; 1]) -> Self {
        channels[0]
    }
}

/// Physical parameters of a damped spring.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    /// Stiffness.
    pub tension: f64,
    /// Damping.
    pub friction: f64,
    /// Mass (default 1).
    pub mass: f64,
    /// A channel rests once both its distance to target and its speed fall below this.
    pub precision: f64,
    /// Stop a channel the moment it crosses its target instead of overshooting.
    pub clamp: bool,
}

impl SpringConfig {
    /// General purpose spring, close to critically damped.
    pub const DEFAULT: Self = Self {
        tension: 170.0,
        friction: 26.0,
        mass: 1.0,
        precision: 0.001,
        clamp: false,
    };

    /// Navigation chrome (background, blur, shadow).
    pub const NAV_CHROME: Self = Self {
        tension: 300.0,
        friction: 20.0,
        clamp: true,
        ..Self::DEFAULT
    };

    /// Mobile menu slide and fade.
    pub const MOBILE_MENU: Self = Self {
        tension: 300.0,
        friction: 26.0,
        clamp: true,
        ..Self::DEFAULT
    };

    /// Spring with the given tension and friction and default mass/precision.
    pub const fn new(tension: f64, friction: f64) -> Self {
        Self {
            tension,
            friction,
            ..Self::DEFAULT
        }
    }

    /// Same spring with overshoot clamping turned on.
    pub const fn clamped(self) -> Self {
        Self {
            clamp: true,
            ..self
        }
    }

    /// Damping ratio ζ; 1 is critical, below 1 oscillates when unclamped.
    pub fn damping_ratio(self) -> f64 {
        self.friction / (2.0 * (self.tension * self.mass).sqrt())
    }

    /// Check that every parameter is finite and in range.
    pub fn validate(&self) -> BlazeResult<()> {
        if !(self.tension.is_finite() && self.tension > 0.0) {
            return Err(BlazeError::validation("spring tension must be > 0"));
        }
        if !(self.friction.is_finite() && self.friction >= 0.0) {
            return Err(BlazeError::validation("spring friction must be >= 0"));
        }
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(BlazeError::validation("spring mass must be > 0"));
        }
        if !(self.precision.is_finite() && self.precision > 0.0) {
            return Err(BlazeError::validation("spring precision must be > 0"));
        }
        Ok(())
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Position, velocity, and target of one spring-driven property group.
///
/// Only [`SpringState::set_target`] changes where the spring is heading; `current` and
/// `velocity` are carried across retargets so motion never jumps.
#[derive(Clone, Debug)]
pub struct SpringState<T, const N: usize> {
    key: String,
    current: [f64; N],
    target: [f64; N],
    velocity: [f64; N],
    config: SpringConfig,
    resting: bool,
    _value: PhantomData<T>,
}

impl<T, const N: usize> SpringState<T, N>
where
    T: SpringValue<N>,
{
    /// A spring resting at `initial`.
    pub fn new(key: impl Into<String>, initial: T, config: SpringConfig) -> Self {
        let channels = initial.to_channels();
        Self {
            key: key.into(),
            current: channels,
            target: channels,
            velocity: [0.0; N],
            config,
            resting: true,
            _value: PhantomData,
        }
    }

    /// Identifier used in logs.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Physical parameters.
    pub fn config(&self) -> SpringConfig {
        self.config
    }

    /// Current interpolated value.
    pub fn current(&self) -> T {
        T::from_channels(self.current)
    }

    /// Value the spring is heading to.
    pub fn target(&self) -> T {
        T::from_channels(self.target)
    }

    /// Per-channel velocity, in value units per second.
    pub fn velocity(&self) -> T {
        T::from_channels(self.velocity)
    }

    /// `true` once every channel sits on its target with zero velocity.
    pub fn is_resting(&self) -> bool {
        self.resting
    }

    /// Largest per-channel distance between `current` and `target`.
    pub fn distance(&self) -> f64 {
        self.current
            .iter()
            .zip(&self.target)
            .map(|(c, t)| (t - c).abs())
            .fold(0.0, f64::max)
    }

    /// Head toward a new target from wherever the spring currently is.
    pub fn set_target(&mut self, target: T) {
        self.target = target.to_channels();
        self.resting = self.current == self.target && self.velocity.iter().all(|v| *v == 0.0);
    }

    /// Place the spring at `value` and stop it.
    pub fn jump_to(&mut self, value: T) {
        let channels = value.to_channels();
        self.current = channels;
        self.target = channels;
        self.velocity = [0.0; N];
        self.resting = true;
    }

    /// Integrate forward by `dt_secs` and return the new current value.
    ///
    /// Non-positive or non-finite `dt_secs` leaves the state unchanged. Spans longer than
    /// [`MAX_ADVANCE_SECS`] are capped.
    pub fn advance(&mut self, dt_secs: f64) -> T {
        if self.resting || !dt_secs.is_finite() || dt_secs <= 0.0 {
            return self.current();
        }
        let dt_secs = dt_secs.min(MAX_ADVANCE_SECS);

        let steps = (dt_secs / STEP_SECS).ceil().max(1.0) as u64;
        let h = dt_secs / steps as f64;
        for _ in 0..steps {
            if !self.step(h) {
                self.resting = true;
                break;
            }
        }
        self.current()
    }

    // Semi-implicit Euler. Returns whether any channel is still moving.
    fn step(&mut self, h: f64) -> bool {
        let SpringConfig {
            tension,
            friction,
            mass,
            precision,
            clamp,
        } = self.config;

        let mut moving = false;
        for i in 0..N {
            let to = self.target[i];
            let x = self.current[i];
            let v = self.velocity[i];
            if x == to && v == 0.0 {
                continue;
            }

            let accel = (-tension * (x - to) - friction * v) / mass;
            let v_next = v + accel * h;
            let x_next = x + v_next * h;

            let crossed = clamp && x != to && (x_next - to) * (x - to) <= 0.0;
            let settled = (x_next - to).abs() < precision && v_next.abs() < precision;
            let diverged = !x_next.is_finite() || !v_next.is_finite();
            if crossed || settled || diverged {
                self.current[i] = to;
                self.velocity[i] = 0.0;
            } else {
                self.current[i] = x_next;
                self.velocity[i] = v_next;
                moving = true;
            }
        }
        moving
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
