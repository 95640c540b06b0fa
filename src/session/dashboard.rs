use crate::animation::timeline::{ElementStyle, TimelineAnimator};
use crate::animation::transition::SpringTransitionController;
use crate::chart::area::{ChartRenderer, ChartView, Tooltip};
use crate::config::DashboardConfig;
use crate::content::dataset::Dataset;
use crate::foundation::core::Viewport;
use crate::foundation::error::BlazeResult;
use crate::host::events::{EventHub, HostEvent};
use crate::host::layout::{LayoutProvider, PageLayout};
use crate::scroll::tracker::{ScrollState, ScrollTracker};
use crate::scroll::trigger::{FiredTrigger, TriggerPhase, ViewportTriggerRegistry};
use crate::ui::chrome::{MenuPresentation, NavChrome};
use crate::ui::state::{UiState, UiStateStore};
use serde::Serialize;
use std::collections::BTreeMap;

/// Everything the markup layer needs to paint one frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FrameStyles {
    /// Session clock.
    pub time_secs: f64,
    pub scroll: ScrollState,
    pub ui: UiState,
    pub nav: NavChrome,
    /// `background-color` of the nav bar.
    pub nav_background: String,
    /// `backdrop-filter` of the nav bar.
    pub nav_backdrop_filter: String,
    /// `box-shadow` of the nav bar.
    pub nav_box_shadow: String,
    pub menu: MenuPresentation,
    /// `transform` of the mobile menu.
    pub menu_transform: String,
    /// Entrance styles by element id. Elements of pending groups show their `from` style.
    pub elements: BTreeMap<String, ElementStyle>,
    pub triggers: BTreeMap<String, TriggerPhase>,
    pub tooltip: Option<Tooltip>,
    /// Anchor of the last followed navigation link.
    pub anchor: Option<String>,
}

/// The mounted dashboard: owns every component and routes host events to them.
///
/// Events are handled one at a time through `&mut self`. Within a scroll event the order
/// is tracker, UI state, nav spring, trigger registry, then the animator.
#[derive(Debug)]
pub struct DashboardSession<L: LayoutProvider = PageLayout> {
    config: DashboardConfig,
    dataset: Dataset,
    layout: L,
    hub: EventHub,
    clock_secs: f64,
    mounted: bool,
    tracker: ScrollTracker,
    ui: UiStateStore,
    nav: SpringTransitionController<NavChrome, 6>,
    menu: SpringTransitionController<MenuPresentation, 2>,
    registry: ViewportTriggerRegistry,
    animator: TimelineAnimator,
    chart: ChartView,
    anchor: Option<String>,
}

impl<L: LayoutProvider> DashboardSession<L> {
    /// Validate inputs, register triggers, start listeners, and play the intro.
    ///
    /// Trigger groups resolve their element selectors against `layout` here and again on
    /// every evaluation until they fire.
    #[tracing::instrument(skip_all)]
    pub fn mount(config: DashboardConfig, dataset: Dataset, layout: L) -> BlazeResult<Self> {
        config.validate()?;
        dataset.validate()?;
        layout.viewport().validate()?;

        let hub = EventHub::new();
        let renderer = ChartRenderer::new(config.chart.clone())?;
        let chart = ChartView::new(renderer, &dataset.fire_stats);

        let mut registry = ViewportTriggerRegistry::new();
        for group in &config.triggers {
            let elements = layout.select(&group.elements);
            if elements.is_empty() {
                tracing::debug!(
                    trigger = %group.id,
                    selector = %group.elements,
                    "no elements matched"
                );
            }
            registry.register_selector(
                group.id.clone(),
                group.target.clone(),
                group.elements.clone(),
                group.start,
                group.sequence(elements),
            )?;
        }

        let mut session = Self {
            tracker: ScrollTracker::new(config.scroll_threshold_px),
            ui: UiStateStore::new(),
            nav: SpringTransitionController::new(
                "nav",
                config.nav.top,
                config.nav.scrolled,
                config.nav.spring,
            ),
            menu: SpringTransitionController::new(
                "menu",
                config.menu.closed,
                config.menu.open,
                config.menu.spring,
            ),
            registry,
            animator: TimelineAnimator::new(),
            chart,
            config,
            dataset,
            layout,
            hub,
            clock_secs: 0.0,
            mounted: true,
            anchor: None,
        };

        session.tracker.start(&session.hub);
        session.registry.start(&session.hub);
        session.chart.start(&session.hub);

        if session.config.hero.enabled {
            let intro = session.config.hero.sequence();
            let id = session.config.hero.target.clone();
            session.animator.play(id, intro, 0.0, &session.hub);
        }

        session.evaluate_triggers();
        tracing::debug!(
            listeners = session.hub.active_count(),
            pending = session.registry.pending_count(),
            "dashboard mounted"
        );
        Ok(session)
    }

    /// Route one host event. Ignored after [`DashboardSession::unmount`].
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn handle(&mut self, event: HostEvent) {
        if !self.mounted {
            tracing::debug!("event after unmount ignored");
            return;
        }
        match event {
            HostEvent::Scroll { offset } => self.on_scroll(offset),
            HostEvent::Resize { width, height } => match Viewport::new(width, height) {
                Ok(viewport) => {
                    self.layout.resize(viewport);
                    self.evaluate_triggers();
                }
                Err(err) => tracing::warn!(%err, "resize ignored"),
            },
            HostEvent::Frame { dt_secs } => self.tick(dt_secs),
            HostEvent::ToggleMenu => {
                let open = self.ui.toggle_menu();
                self.menu.set_active(open, &self.hub);
            }
            HostEvent::NavLink { label } => {
                let anchor = self.ui.nav_link(&label);
                self.menu.set_active(false, &self.hub);
                self.anchor = Some(anchor);
            }
            HostEvent::SearchInput { text } => self.ui.set_search_text(text),
            HostEvent::SearchSubmit => self.ui.submit_search(),
            HostEvent::UseMyLocation => self.ui.request_location(),
            HostEvent::PointerMove { x, y } => {
                self.chart.pointer_move(x, y);
            }
            HostEvent::PointerLeave => self.chart.pointer_leave(),
        }
    }

    fn on_scroll(&mut self, offset: u32) {
        if let Some(scrolled) = self.tracker.on_scroll(offset) {
            self.ui.set_scrolled(scrolled);
            self.nav.set_active(scrolled, &self.hub);
        }
        self.evaluate_triggers();
    }

    fn evaluate_triggers(&mut self) {
        let offset = self.tracker.state().offset;
        let fired = self
            .registry
            .evaluate(offset, self.clock_secs, &self.layout);
        for FiredTrigger {
            id,
            at_secs,
            sequence,
        } in fired
        {
            self.animator.play(id, sequence, at_secs, &self.hub);
        }
    }

    /// Advance the clock by one frame, then the springs, then the timelines.
    pub fn tick(&mut self, dt_secs: f64) {
        if !self.mounted || !dt_secs.is_finite() || dt_secs < 0.0 {
            return;
        }
        self.clock_secs += dt_secs;
        self.nav.on_frame(dt_secs);
        self.menu.on_frame(dt_secs);
        self.animator.on_frame(self.clock_secs);
    }

    /// Snapshot of every presentation value at the current clock.
    pub fn frame_styles(&self) -> FrameStyles {
        let mut elements = BTreeMap::new();
        for reg in self.registry.registrations() {
            if !reg.phase.is_fired() {
                for el in &reg.sequence.elements {
                    elements.insert(el.clone(), reg.sequence.from);
                }
            }
        }
        elements.extend(self.animator.styles(self.clock_secs));

        let nav = self.nav.value();
        let menu = self.menu.value();
        FrameStyles {
            time_secs: self.clock_secs,
            scroll: self.tracker.state(),
            ui: self.ui.state().clone(),
            nav,
            nav_background: nav.background.to_css(),
            nav_backdrop_filter: nav.backdrop_filter_css(),
            nav_box_shadow: nav.box_shadow_css(),
            menu,
            menu_transform: menu.transform_css(),
            elements,
            triggers: self
                .registry
                .registrations()
                .iter()
                .map(|r| (r.id.clone(), r.phase))
                .collect(),
            tooltip: self.chart.tooltip(),
            anchor: self.anchor.clone(),
        }
    }

    /// Stop every component and release every listener. Later events are ignored.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.tracker.stop();
        self.registry.stop();
        self.animator.stop();
        self.nav.stop();
        self.menu.stop();
        self.chart.stop();
        self.mounted = false;
        tracing::debug!(listeners = self.hub.active_count(), "dashboard unmounted");
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn clock_secs(&self) -> f64 {
        self.clock_secs
    }

    /// Listener registry shared by every component.
    pub fn hub(&self) -> &EventHub {
        &self.hub
    }

    pub fn layout(&self) -> &L {
        &self.layout
    }

    /// Mutable geometry, for hosts that re-render elements between events.
    pub fn layout_mut(&mut self) -> &mut L {
        &mut self.layout
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn ui_state(&self) -> &UiState {
        self.ui.state()
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.tracker.state()
    }

    pub fn nav(&self) -> &SpringTransitionController<NavChrome, 6> {
        &self.nav
    }

    pub fn menu(&self) -> &SpringTransitionController<MenuPresentation, 2> {
        &self.menu
    }

    pub fn registry(&self) -> &ViewportTriggerRegistry {
        &self.registry
    }

    pub fn animator(&self) -> &TimelineAnimator {
        &self.animator
    }

    pub fn chart(&self) -> &ChartView {
        &self.chart
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/dashboard.rs"]
mod tests;
