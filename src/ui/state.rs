use serde::{Deserialize, Serialize};

/// Navigation links, in display order.
pub const NAV_LINKS: [&str; 4] = ["Predictions", "Live Map", "Analytics", "About"];

/// Ephemeral UI flags. Everything resets on reload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiState {
    pub scrolled: bool,
    pub menu_open: bool,
    pub search_text: String,
}

/// In-page anchor for a navigation label: lowercased, first space replaced by `-`.
pub fn nav_anchor(label: &str) -> String {
    label.to_lowercase().replacen(' ', "-", 1)
}

/// Owner of [`UiState`]. Only the session mutates it.
#[derive(Debug, Default)]
pub struct UiStateStore {
    state: UiState,
}

impl UiStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Mirror the scroll tracker's flag. Returns `true` when it changed.
    pub fn set_scrolled(&mut self, scrolled: bool) -> bool {
        let changed = self.state.scrolled != scrolled;
        self.state.scrolled = scrolled;
        changed
    }

    /// Flip the mobile menu and return the new flag.
    pub fn toggle_menu(&mut self) -> bool {
        self.state.menu_open = !self.state.menu_open;
        self.state.menu_open
    }

    /// Close the mobile menu. Returns `true` when it was open.
    pub fn close_menu(&mut self) -> bool {
        std::mem::replace(&mut self.state.menu_open, false)
    }

    /// A navigation link was followed: the menu closes and the anchor is returned.
    pub fn nav_link(&mut self, label: &str) -> String {
        self.close_menu();
        let anchor = nav_anchor(label);
        tracing::debug!(label, anchor = %anchor, "navigate");
        anchor
    }

    /// Echo the search field. No validation.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.state.search_text = text.into();
    }

    /// Search submission has no backend; it is logged and otherwise ignored.
    pub fn submit_search(&self) {
        tracing::info!(query = %self.state.search_text, "search submitted (no backend)");
    }

    /// Geolocation has no backend; it is logged and otherwise ignored.
    pub fn request_location(&self) {
        tracing::info!("location requested (no backend)");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ui/state.rs"]
mod tests;
