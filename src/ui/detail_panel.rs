// src/ui/detail_panel.rs
use eframe::egui;

use crate::data::OutbreakEvent;

/// What the caller should do after showing the panel. The report hand-off is
/// the panel's only outward interface; everything else renders read-only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DetailAction {
    None,
    Clear,
    ViewReport,
}

pub fn show_detail_panel(ui: &mut egui::Ui, event: &OutbreakEvent) -> DetailAction {
    let mut action = DetailAction::None;

    ui.horizontal(|ui| {
        ui.heading(&event.name);
        ui.label(
            egui::RichText::new(format!("⚠ {} risk", event.risk.label()))
                .color(event.color())
                .strong(),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("✕").clicked() {
                action = DetailAction::Clear;
            }
        });
    });

    ui.label(format!("📍 {}", event.location));
    ui.label(format!("📅 {}", event.date));
    ui.add_space(4.0);
    ui.label(&event.summary);
    ui.add_space(4.0);

    if ui.button("📄 View Full Report").clicked() {
        action = DetailAction::ViewReport;
    }

    action
}
