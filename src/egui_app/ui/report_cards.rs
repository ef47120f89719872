//! Central panel: one card per visible report.
//!
//! Layout mirrors the report documents themselves: header, aggregate score
//! with a proportional bar, then each section in document order with its
//! metrics in sequence order. All strings arrive pre-formatted from the
//! view model; nothing here recomputes scores.

use eframe::egui::{self, Frame, Margin, RichText, StrokeKind, Ui};

use super::EguiApp;
use super::style;
use crate::egui_app::view_model::{self, MetricView, ReportCard, SectionView};

impl EguiApp {
    pub(super) fn render_report_grid(&mut self, ui: &mut Ui) {
        let cards: Vec<ReportCard> = self
            .controller
            .visible_reports()
            .into_iter()
            .map(view_model::report_card)
            .collect();

        if cards.is_empty() {
            ui.add_space(24.0);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("No reports found.").color(style::palette().text_muted));
            });
            return;
        }

        egui::ScrollArea::vertical()
            .id_salt("report_grid")
            .show(ui, |ui| {
                for (index, card) in cards.iter().enumerate() {
                    ui.push_id(index, |ui| render_report_card(ui, card));
                    ui.add_space(14.0);
                }
            });
    }
}

fn render_report_card(ui: &mut Ui, card: &ReportCard) {
    let palette = style::palette();
    Frame::new()
        .fill(palette.bg_secondary)
        .stroke(style::section_stroke())
        .inner_margin(Margin::same(12))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            render_header(ui, card);
            ui.add_space(8.0);
            render_score_block(ui, card);
            ui.add_space(10.0);
            for section in &card.sections {
                render_section(ui, section);
                ui.add_space(8.0);
            }
        });
}

fn render_header(ui: &mut Ui, card: &ReportCard) {
    let palette = style::palette();
    ui.horizontal(|ui| {
        ui.label(RichText::new("Transcript:").strong().color(palette.text_primary));
        ui.label(RichText::new(&card.transcript).color(palette.text_primary));
        ui.label(RichText::new("•").color(palette.text_muted));
        ui.label(RichText::new(&card.evaluated_at).color(palette.text_muted));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new(&card.name).color(palette.text_muted));
        });
    });
}

fn render_score_block(ui: &mut Ui, card: &ReportCard) {
    let palette = style::palette();
    Frame::new()
        .fill(palette.bg_tertiary)
        .inner_margin(Margin::same(10))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new("Final Weighted Score").color(palette.text_muted));
                    ui.label(
                        RichText::new(&card.score_label)
                            .size(22.0)
                            .strong()
                            .color(palette.accent_ice),
                    );
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    render_score_bar(ui, card.score_fill);
                });
            });
        });
}

fn render_score_bar(ui: &mut Ui, fill: f32) {
    let palette = style::palette();
    let desired = egui::vec2(260.0_f32.min(ui.available_width()), 10.0);
    let (rect, _) = ui.allocate_exact_size(desired, egui::Sense::hover());
    let painter = ui.painter();
    painter.rect_filled(rect, 5.0, palette.bg_primary);
    let fill_width = rect.width() * fill;
    if fill_width > 0.0 {
        let filled = egui::Rect::from_min_size(rect.min, egui::vec2(fill_width, rect.height()));
        painter.rect_filled(filled, 5.0, palette.accent_ice);
    }
    painter.rect_stroke(rect, 5.0, style::section_stroke(), StrokeKind::Inside);
}

fn render_section(ui: &mut Ui, section: &SectionView) {
    let palette = style::palette();
    Frame::new()
        .fill(palette.bg_primary)
        .stroke(style::section_stroke())
        .inner_margin(Margin::same(10))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new(&section.title).strong().color(palette.text_primary));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    Frame::new()
                        .fill(palette.bg_tertiary)
                        .inner_margin(Margin::symmetric(8, 2))
                        .show(ui, |ui| {
                            ui.label(RichText::new(&section.badge).color(palette.accent_ice));
                        });
                });
            });
            ui.add_space(6.0);
            for metric in &section.metrics {
                render_metric(ui, metric);
                ui.add_space(6.0);
            }
        });
}

fn render_metric(ui: &mut Ui, metric: &MetricView) {
    let palette = style::palette();
    ui.horizontal_top(|ui| {
        ui.vertical(|ui| {
            ui.set_max_width((ui.available_width() - 80.0).max(0.0));
            ui.label(RichText::new(&metric.name).color(palette.text_primary));
            if !metric.comments.is_empty() {
                ui.label(RichText::new(&metric.comments).color(palette.text_muted));
            }
            let proof_color = if metric.has_proof {
                palette.success
            } else {
                palette.text_muted
            };
            ui.label(RichText::new(&metric.proof).italics().color(proof_color));
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
            ui.label(RichText::new(format!("/ {}", metric.max)).color(palette.text_muted));
            ui.label(
                RichText::new(&metric.score)
                    .size(16.0)
                    .strong()
                    .color(palette.text_primary),
            );
        });
    });
}
