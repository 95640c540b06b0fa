//! Tunables of the dashboard motion, loadable from JSON.
//!
//! Every field has a default, so a config file only needs the values it changes.

use crate::animation::ease::Ease;
use crate::animation::spring::SpringConfig;
use crate::animation::timeline::{AnimationSequenceSpec, ElementStyle};
use crate::chart::area::ChartStyle;
use crate::foundation::error::{BlazeError, BlazeResult};
use crate::scroll::tracker::SCROLL_THRESHOLD_PX;
use crate::scroll::trigger::StartCondition;
use crate::ui::chrome::{MenuPresentation, NavChrome};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

/// Navigation bar spring and its two presets.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub top: NavChrome,
    pub scrolled: NavChrome,
    pub spring: SpringConfig,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            top: NavChrome::TOP,
            scrolled: NavChrome::SCROLLED,
            spring: SpringConfig::NAV_CHROME,
        }
    }
}

/// Mobile menu spring and its two presets.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub closed: MenuPresentation,
    pub open: MenuPresentation,
    pub spring: SpringConfig,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            closed: MenuPresentation::CLOSED,
            open: MenuPresentation::OPEN,
            spring: SpringConfig::MOBILE_MENU,
        }
    }
}

fn visible() -> ElementStyle {
    ElementStyle::VISIBLE
}

/// A scroll-triggered entrance: which region fires it and which elements it animates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TriggerGroupConfig {
    /// Unique group id.
    pub id: String,
    /// Element whose geometry is tested.
    pub target: String,
    /// Selector of the animated elements, resolved once at mount.
    pub elements: String,
    pub start: StartCondition,
    pub from: ElementStyle,
    #[serde(default = "visible")]
    pub to: ElementStyle,
    pub stagger_secs: f64,
    pub duration_secs: f64,
    #[serde(default)]
    pub ease: Ease,
}

impl TriggerGroupConfig {
    /// The sequence for the resolved `elements`.
    pub fn sequence(&self, elements: Vec<String>) -> AnimationSequenceSpec {
        AnimationSequenceSpec {
            elements,
            from: self.from,
            to: self.to,
            stagger_secs: self.stagger_secs,
            duration_secs: self.duration_secs,
            ease: self.ease,
        }
    }
}

/// Entrance played once at mount without a trigger.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntroConfig {
    pub enabled: bool,
    /// Animated element.
    pub target: String,
    pub from: ElementStyle,
    pub to: ElementStyle,
    pub duration_secs: f64,
    pub ease: Ease,
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            target: "hero".to_owned(),
            from: ElementStyle::hidden(0.0, 50.0),
            to: ElementStyle::VISIBLE,
            duration_secs: 1.0,
            ease: Ease::POWER3_OUT,
        }
    }
}

impl IntroConfig {
    pub fn sequence(&self) -> AnimationSequenceSpec {
        AnimationSequenceSpec {
            elements: vec![self.target.clone()],
            from: self.from,
            to: self.to,
            stagger_secs: 0.0,
            duration_secs: self.duration_secs,
            ease: self.ease,
        }
    }
}

/// All dashboard tunables.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Offset past which the page counts as scrolled.
    pub scroll_threshold_px: u32,
    pub nav: NavConfig,
    pub menu: MenuConfig,
    pub hero: IntroConfig,
    pub triggers: Vec<TriggerGroupConfig>,
    pub chart: ChartStyle,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            scroll_threshold_px: SCROLL_THRESHOLD_PX,
            nav: NavConfig::default(),
            menu: MenuConfig::default(),
            hero: IntroConfig::default(),
            triggers: vec![
                TriggerGroupConfig {
                    id: "stats".to_owned(),
                    target: "stats".to_owned(),
                    elements: ".stat-card".to_owned(),
                    start: StartCondition::top_at_percent(80.0),
                    from: ElementStyle::hidden(0.0, 30.0),
                    to: ElementStyle::VISIBLE,
                    stagger_secs: 0.2,
                    duration_secs: 0.8,
                    ease: Ease::POWER3_OUT,
                },
                TriggerGroupConfig {
                    id: "alerts".to_owned(),
                    target: "alerts".to_owned(),
                    elements: ".alert-card".to_owned(),
                    start: StartCondition::top_at_percent(75.0),
                    from: ElementStyle::hidden(-30.0, 0.0),
                    to: ElementStyle::VISIBLE,
                    stagger_secs: 0.2,
                    duration_secs: 0.8,
                    ease: Ease::back_out(1.7),
                },
            ],
            chart: ChartStyle::default(),
        }
    }
}

impl DashboardConfig {
    /// Load and validate a JSON config.
    pub fn from_path(path: &Path) -> BlazeResult<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_str(&json)
            .map_err(|e| BlazeError::config(format!("{}: {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> BlazeResult<()> {
        let spring = |name: &str, s: &SpringConfig| {
            s.validate()
                .map_err(|e| BlazeError::config(format!("{name}: {e}")))
        };
        spring("nav.spring", &self.nav.spring)?;
        spring("menu.spring", &self.menu.spring)?;

        if self.hero.enabled {
            if self.hero.target.is_empty() {
                return Err(BlazeError::config("hero.target must be non-empty"));
            }
            self.hero
                .sequence()
                .validate()
                .map_err(|e| BlazeError::config(format!("hero: {e}")))?;
        }

        let mut ids = BTreeSet::new();
        for (i, group) in self.triggers.iter().enumerate() {
            if group.id.is_empty() || group.target.is_empty() || group.elements.is_empty() {
                return Err(BlazeError::config(format!(
                    "triggers[{i}]: id, target and elements must be non-empty"
                )));
            }
            if group.id == self.hero.target && self.hero.enabled {
                return Err(BlazeError::config(format!(
                    "triggers[{i}]: id \"{}\" collides with the hero intro",
                    group.id
                )));
            }
            if !ids.insert(group.id.as_str()) {
                return Err(BlazeError::config(format!(
                    "triggers[{i}]: duplicate id \"{}\"",
                    group.id
                )));
            }
            group
                .sequence(Vec::new())
                .validate()
                .map_err(|e| BlazeError::config(format!("triggers[{i}]: {e}")))?;
        }

        self.chart
            .validate()
            .map_err(|e| BlazeError::config(format!("chart: {e}")))
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
