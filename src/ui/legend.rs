// src/ui/legend.rs
use eframe::egui;

use crate::data::RiskLevel;

/// Fixed 3-entry risk legend. Purely presentational; reads the same palette
/// the markers are drawn with.
pub fn show_legend(ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.label("Risk:");
        for risk in RiskLevel::ALL {
            legend_entry(ui, risk);
        }
    });
}

fn legend_entry(ui: &mut egui::Ui, risk: RiskLevel) {
    let (rect, _) =
        ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
    ui.painter().circle_filled(rect.center(), 4.0, risk.color());
    ui.label(risk.label());
}
