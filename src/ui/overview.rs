// src/ui/overview.rs
use std::time::Instant;

use eframe::egui;

use crate::state::AppState;

/// Number of entries in the recent-events list.
const RECENT_COUNT: usize = 5;

/// Landing screen. Everything here is static mock surveillance data; the
/// only live wiring is the recent-events list and the Map View launcher,
/// both of which hand events to the map subsystem.
pub fn show_overview(ui: &mut egui::Ui, state: &mut AppState) {
    let now = Instant::now();

    ui.heading("Surveillance Overview");
    ui.add_space(8.0);

    egui::Grid::new("overview_stats")
        .num_columns(2)
        .spacing([24.0, 6.0])
        .show(ui, |ui| {
            ui.label("Active crawler sources");
            ui.label(egui::RichText::new("1,284").strong());
            ui.end_row();

            ui.label("Documents classified (24h)");
            ui.label(egui::RichText::new("36,902").strong());
            ui.end_row();

            ui.label("Claims fact-checked (24h)");
            ui.label(egui::RichText::new("412").strong());
            ui.end_row();

            ui.label("Open outbreak signals");
            ui.label(egui::RichText::new(state.store.len().to_string()).strong());
            ui.end_row();
        });

    ui.add_space(12.0);
    if ui.button("🗺 Open Map View").clicked() {
        state.map_modal.open();
    }

    ui.add_space(12.0);
    ui.separator();
    ui.heading("Recent events");
    ui.add_space(4.0);

    // Newest first, straight off the store; this list ignores the map's
    // filters entirely, and so does selecting from it.
    let recent: Vec<(u32, String)> = state
        .store
        .events()
        .iter()
        .rev()
        .take(RECENT_COUNT)
        .map(|e| {
            (
                e.id,
                format!("{}  {} — {} ({})", e.date, e.name, e.location, e.risk.label()),
            )
        })
        .collect();

    for (id, label) in recent {
        if ui.selectable_label(false, label).clicked() {
            if let Some(event) = state.store.get(id) {
                let event = event.clone();
                state.map_modal.open_with_selection(&event, now);
            }
        }
    }
}
