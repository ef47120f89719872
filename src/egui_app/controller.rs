//! Application controller owning loaded reports and UI state.

use std::path::{Path, PathBuf};

use rfd::FileDialog;
use tracing::{error, warn};

use crate::egui_app::state::{StatusBarState, UiState};
use crate::egui_app::ui::style::{self, StatusTone};
use crate::reports::config::{self, AppConfig};
use crate::reports::filter::filter_reports;
use crate::reports::loader;
use crate::reports::model::Report;

/// Maintains app state and bridges report loading to the egui UI.
///
/// The loaded report list is an immutable snapshot; only `reload` replaces
/// it. Render code reads through [`EguiController::visible_reports`] and
/// never mutates report data.
pub struct EguiController {
    /// UI-facing state consumed by the renderer.
    pub ui: UiState,
    reports: Vec<Report>,
    reports_dir: PathBuf,
}

impl EguiController {
    /// Create a controller pointing at the default reports directory.
    pub fn new() -> Self {
        Self {
            ui: UiState::default(),
            reports: Vec::new(),
            reports_dir: AppConfig::default().reports_dir,
        }
    }

    /// Load persisted configuration and the initial report collection.
    pub fn load_configuration(&mut self) -> Result<(), config::ConfigError> {
        let cfg = config::load_or_default()?;
        self.reports_dir = cfg.reports_dir;
        self.reload();
        self.ui.search_focus_requested = true;
        Ok(())
    }

    /// Directory the current snapshot was loaded from.
    pub fn reports_dir(&self) -> &Path {
        &self.reports_dir
    }

    /// Reports matching the current search text, newest first.
    pub fn visible_reports(&self) -> Vec<&Report> {
        filter_reports(&self.reports, &self.ui.search)
    }

    /// Re-run the one-shot loader against the configured directory.
    ///
    /// On failure the previous snapshot is kept so the dashboard never
    /// goes blank; the error lands in the status bar instead.
    pub fn reload(&mut self) {
        match loader::load_reports(&self.reports_dir) {
            Ok(outcome) => {
                self.reports = outcome.reports;
                let count = self.reports.len();
                let suffix = if count == 1 { "" } else { "s" };
                if outcome.skipped > 0 {
                    self.set_status(
                        format!(
                            "{count} report{suffix} loaded, {} skipped (see log)",
                            outcome.skipped
                        ),
                        StatusTone::Warning,
                    );
                } else {
                    self.set_status(format!("{count} report{suffix} loaded"), StatusTone::Ready);
                }
            }
            Err(err) => {
                error!("Report load failed: {err}");
                self.set_status(format!("Could not load reports: {err}"), StatusTone::Error);
            }
        }
    }

    /// Open a folder picker and point the dashboard at the chosen directory.
    pub fn choose_reports_dir_via_dialog(&mut self) {
        let Some(dir) = FileDialog::new()
            .set_title("Choose reports folder")
            .pick_folder()
        else {
            return;
        };
        self.set_reports_dir(dir);
    }

    /// Point the dashboard at `dir`, persisting the choice and reloading.
    pub fn set_reports_dir(&mut self, dir: PathBuf) {
        self.reports_dir = dir;
        if let Err(err) = config::save(&AppConfig {
            reports_dir: self.reports_dir.clone(),
        }) {
            warn!("Could not persist reports directory: {err}");
        }
        self.reload();
    }

    /// Open the reports directory in the OS file explorer.
    pub fn open_reports_folder(&mut self) {
        if let Err(err) = open::that(&self.reports_dir) {
            self.set_status(
                format!("Could not open {}: {err}", self.reports_dir.display()),
                StatusTone::Error,
            );
        }
    }

    /// Update the footer badge and message.
    pub fn set_status(&mut self, text: String, tone: StatusTone) {
        self.ui.status = StatusBarState {
            text,
            badge_label: tone.label().to_string(),
            badge_color: style::status_badge_color(tone),
        };
    }
}

impl Default for EguiController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_doc(dir: &Path, file: &str, timestamp: i64) {
        let raw = format!(
            r#"{{
                "transcript_filename": "{file}.txt",
                "timestamp": {timestamp},
                "sections": {{
                    "quality": {{
                        "total_score": 5, "max_score": 10, "percentage": 50,
                        "metrics": []
                    }}
                }},
                "aggregated": {{"final_weighted_score": 50.0}}
            }}"#
        );
        fs::write(dir.join(file), raw).unwrap();
    }

    fn controller_over(dir: &Path) -> EguiController {
        let mut controller = EguiController::new();
        controller.reports_dir = dir.to_path_buf();
        controller.reload();
        controller
    }

    #[test]
    fn reload_populates_snapshot_and_status() {
        let dir = tempdir().unwrap();
        write_doc(dir.path(), "Call_42.json", 200);
        write_doc(dir.path(), "Call_7.json", 100);

        let controller = controller_over(dir.path());
        assert_eq!(controller.visible_reports().len(), 2);
        assert_eq!(controller.ui.status.text, "2 reports loaded");
        assert_eq!(controller.ui.status.badge_label, "Ready");
    }

    #[test]
    fn search_narrows_visible_reports() {
        let dir = tempdir().unwrap();
        write_doc(dir.path(), "Call_42.json", 200);
        write_doc(dir.path(), "Call_7.json", 100);

        let mut controller = controller_over(dir.path());
        controller.ui.search = "call_42".to_string();
        let visible = controller.visible_reports();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Call_42.json");
    }

    #[test]
    fn skipped_documents_surface_as_warning() {
        let dir = tempdir().unwrap();
        write_doc(dir.path(), "good.json", 100);
        fs::write(dir.path().join("broken.json"), "{ nope").unwrap();

        let controller = controller_over(dir.path());
        assert_eq!(controller.visible_reports().len(), 1);
        assert_eq!(controller.ui.status.badge_label, "Warning");
        assert!(controller.ui.status.text.contains("1 skipped"));
    }

    #[test]
    fn failed_reload_keeps_previous_snapshot() {
        let dir = tempdir().unwrap();
        write_doc(dir.path(), "Call_42.json", 200);

        let mut controller = controller_over(dir.path());
        assert_eq!(controller.visible_reports().len(), 1);

        controller.reports_dir = dir.path().join("missing");
        controller.reload();
        assert_eq!(controller.visible_reports().len(), 1);
        assert_eq!(controller.ui.status.badge_label, "Error");
    }
}
