use crate::config::DashboardConfig;
use crate::content::dataset::Dataset;
use crate::foundation::core::Fps;
use crate::foundation::error::{BlazeError, BlazeResult};
use crate::host::events::HostEvent;
use crate::host::layout::PageLayout;
use crate::session::dashboard::{DashboardSession, FrameStyles};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Longest replay accepted: one hour at 60 fps.
pub const MAX_FRAMES: u64 = 216_000;

/// A host event scheduled for a frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScriptedEvent {
    pub frame: u64,
    pub event: HostEvent,
}

/// A recorded host session: geometry plus timed events, replayed at a fixed frame rate.
///
/// Frame `k` dispatches its events in order, then advances the clock by one frame and
/// takes a snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub fps: Fps,
    pub frames: u64,
    /// Page geometry; the desktop layout when absent.
    #[serde(default)]
    pub layout: Option<PageLayout>,
    #[serde(default)]
    pub events: Vec<ScriptedEvent>,
}

/// Snapshots of a replay, one per frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScenarioReport {
    pub fps: Fps,
    pub frames: Vec<FrameStyles>,
}

impl ScenarioReport {
    pub fn last(&self) -> Option<&FrameStyles> {
        self.frames.last()
    }
}

impl Scenario {
    pub fn from_path(path: &Path) -> BlazeResult<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read script '{}'", path.display()))?;
        let scenario: Self = serde_json::from_str(&json)?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn validate(&self) -> BlazeResult<()> {
        Fps::new(self.fps.num, self.fps.den)?;
        if self.frames > MAX_FRAMES {
            return Err(BlazeError::validation(format!(
                "script has {} frames (max {MAX_FRAMES})",
                self.frames
            )));
        }
        if let Some(layout) = &self.layout {
            layout.validate()?;
        }
        if let Some((i, e)) = self
            .events
            .iter()
            .enumerate()
            .find(|(_, e)| e.frame >= self.frames)
        {
            return Err(BlazeError::validation(format!(
                "events[{i}] is scheduled for frame {} but the script has {} frames",
                e.frame, self.frames
            )));
        }
        Ok(())
    }

    /// Replay against a fresh session.
    #[tracing::instrument(skip_all, fields(frames = self.frames, events = self.events.len()))]
    pub fn run(&self, config: DashboardConfig, dataset: Dataset) -> BlazeResult<ScenarioReport> {
        self.validate()?;
        let layout = self.layout.clone().unwrap_or_else(PageLayout::desktop);
        let mut session = DashboardSession::mount(config, dataset, layout)?;

        let mut events: Vec<&ScriptedEvent> = self.events.iter().collect();
        events.sort_by_key(|e| e.frame);
        let mut pending = events.into_iter().peekable();

        let dt = self.fps.frame_duration_secs();
        let mut frames = Vec::new();
        for k in 0..self.frames {
            while let Some(e) = pending.next_if(|e| e.frame == k) {
                session.handle(e.event.clone());
            }
            session.tick(dt);
            frames.push(session.frame_styles());
        }
        session.unmount();

        Ok(ScenarioReport {
            fps: self.fps,
            frames,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/script.rs"]
mod tests;
