//! Top-level view coordination.
//!
//! Holds which panel is visible and whether the chat sidebar is open. Pure
//! state holder; both fields are independent and every transition is total.

use strum::Display;

/// One of the two mutually-exclusive top-level views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum Panel {
    #[default]
    Dashboard,
    Map,
}

/// Which panel is active and whether the chat sidebar is open.
///
/// Opening the chat never changes the active panel; it only narrows the
/// panel area at render time.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    active_panel: Panel,
    chat_open: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_panel(&self) -> Panel {
        self.active_panel
    }

    pub fn chat_open(&self) -> bool {
        self.chat_open
    }

    /// Sets the active panel. Always succeeds.
    pub fn set_active_panel(&mut self, panel: Panel) {
        self.active_panel = panel;
    }

    /// Flips chat visibility. Always succeeds.
    pub fn toggle_chat(&mut self) {
        self.chat_open = !self.chat_open;
        tracing::debug!(chat_open = self.chat_open, "toggled chat sidebar");
    }
}
