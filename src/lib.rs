//! Library exports for reuse in integration tests.
/// Application directory helpers.
pub mod app_dirs;
/// Shared egui UI modules.
pub mod egui_app;
/// Logging setup.
pub mod logging;
/// Report schema, loading, filtering, and configuration.
pub mod reports;
