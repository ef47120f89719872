//! Shared state types for the egui UI.

use egui::Color32;

use crate::egui_app::ui::style;

/// Top-level UI model consumed by the egui renderer.
///
/// Loaded report data is owned by the controller; this struct holds only
/// the transient per-session state (search text, status bar).
#[derive(Clone, Debug)]
pub struct UiState {
    /// Footer badge + message.
    pub status: StatusBarState,
    /// Current contents of the search input.
    pub search: String,
    /// One-shot request to focus the search input.
    pub search_focus_requested: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            status: StatusBarState::idle(),
            search: String::new(),
            search_focus_requested: false,
        }
    }
}

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    pub text: String,
    pub badge_label: String,
    pub badge_color: Color32,
}

impl StatusBarState {
    /// Neutral startup state before the first load completes.
    pub fn idle() -> Self {
        Self {
            text: "Choose a reports folder to get started".into(),
            badge_label: style::StatusTone::Idle.label().into(),
            badge_color: style::status_badge_color(style::StatusTone::Idle),
        }
    }
}
