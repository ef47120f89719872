//! Top bar (title + search + folder actions) and footer status bar.

use eframe::egui::{self, Frame, Margin, RichText, StrokeKind, TextEdit};

use super::EguiApp;
use super::style;

impl EguiApp {
    pub(super) fn render_top_bar(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::top("top_bar")
            .frame(
                Frame::new()
                    .fill(palette.bg_secondary)
                    .inner_margin(Margin::symmetric(10, 8)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(
                        RichText::new("Voicebot Evaluation Reports").color(palette.text_primary),
                    );
                    ui.add_space(12.0);
                    let search = TextEdit::singleline(&mut self.controller.ui.search)
                        .hint_text("Search by transcript name...")
                        .desired_width(280.0);
                    let response = ui.add(search);
                    if self.controller.ui.search_focus_requested {
                        response.request_focus();
                        self.controller.ui.search_focus_requested = false;
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Choose folder...").clicked() {
                            self.controller.choose_reports_dir_via_dialog();
                        }
                        if ui.button("Reload").clicked() {
                            self.controller.reload();
                        }
                        if ui.button("Open folder").clicked() {
                            self.controller.open_reports_folder();
                        }
                        ui.label(
                            RichText::new(self.controller.reports_dir().display().to_string())
                                .color(palette.text_muted),
                        );
                    });
                });
            });
    }

    pub(super) fn render_status(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::bottom("status_bar")
            .frame(
                Frame::new()
                    .fill(palette.bg_primary)
                    .stroke(style::section_stroke())
                    .inner_margin(Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                let status = self.controller.ui.status.clone();
                ui.horizontal(|ui| {
                    ui.add_space(6.0);
                    let (badge_rect, _) =
                        ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
                    ui.painter().rect_filled(badge_rect, 0.0, status.badge_color);
                    ui.painter().rect_stroke(
                        badge_rect,
                        0.0,
                        style::section_stroke(),
                        StrokeKind::Inside,
                    );
                    ui.add_space(8.0);
                    ui.label(RichText::new(&status.badge_label).color(palette.text_primary));
                    ui.separator();
                    ui.label(RichText::new(&status.text).color(palette.text_primary));
                });
            });
    }
}
