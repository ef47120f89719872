//! egui UI: controller, shared state, view models, and renderer.

/// Application controller owning loaded reports and UI state.
pub mod controller;
/// Shared state types for the egui UI.
pub mod state;
/// egui renderer for the dashboard.
pub mod ui;
/// Helpers that shape loaded reports into render-ready structs.
pub mod view_model;
