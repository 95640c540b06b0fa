//! BlazeFix is the motion core of a wildfire-risk marketing dashboard.
//!
//! The crate is headless and deterministic. A host (browser shim, native shell, or the
//! bundled scenario runner) feeds it explicit events and reads back per-frame styles:
//!
//! - Mount a [`DashboardSession`] against a [`LayoutProvider`]
//! - Dispatch [`HostEvent`]s (scroll, resize, frame ticks, pointer, UI actions)
//! - Read [`FrameStyles`] and push them to the markup layer
//!
//! The analytics chart is rendered separately through [`ChartRenderer`].
#![forbid(unsafe_code)]

mod foundation;

pub mod animation;
pub mod chart;
pub mod config;
pub mod content;
pub mod host;
pub mod scroll;
pub mod session;
pub mod ui;

pub use crate::foundation::core::{BezPath, Fps, Point, Rect, Rgba, Vec2, Viewport};
pub use crate::foundation::error::{BlazeError, BlazeResult};

pub use crate::animation::ease::Ease;
pub use crate::animation::spring::{SpringConfig, SpringState, SpringValue};
pub use crate::animation::timeline::{AnimationSequenceSpec, ElementStyle, TimelineAnimator};
pub use crate::animation::transition::SpringTransitionController;
pub use crate::chart::area::{AreaChart, ChartRenderer, ChartStyle, ChartView, Tooltip};
pub use crate::config::DashboardConfig;
pub use crate::content::dataset::{Alert, Dataset, RiskLevel, RiskTier, Severity, TimeSeriesPoint};
pub use crate::host::events::{EventHub, HostEvent, Subscription, Topic};
pub use crate::host::layout::{LayoutElement, LayoutProvider, PageLayout};
pub use crate::scroll::tracker::{ScrollState, ScrollTracker};
pub use crate::scroll::trigger::{
    StartCondition, TriggerPhase, TriggerRegistration, ViewportTriggerRegistry,
};
pub use crate::session::dashboard::{DashboardSession, FrameStyles};
pub use crate::session::script::{Scenario, ScenarioReport, ScriptedEvent};
pub use crate::ui::chrome::{MenuPresentation, NavChrome};
pub use crate::ui::state::{UiState, UiStateStore};
