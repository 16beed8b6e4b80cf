// src/ui/mod.rs
pub mod detail_panel;
pub mod legend;
pub mod map_modal;
pub mod map_page;
pub mod overview;
pub mod report_dialog;

use std::time::{Duration, Instant};

use eframe::egui;

use crate::data::{GeoStore, RiskLevel};
use crate::filter::{visible_events, DiseaseFilter, FilterState};
use crate::map::MapView;
use crate::selection::SelectionSync;

/// Risk checkboxes plus the disease dropdown, shared by both call sites.
/// No change tracking: the filter engine re-evaluates every frame anyway.
pub(crate) fn show_risk_and_disease_filters(
    ui: &mut egui::Ui,
    filters: &mut FilterState,
    disease_names: &[String],
) {
    for risk in RiskLevel::ALL {
        let label = egui::RichText::new(format!("● {}", risk.label())).color(risk.color());
        ui.checkbox(filters.risk.get_mut(risk), label);
    }

    egui::ComboBox::from_id_salt("disease_filter")
        .selected_text(filters.disease.label().to_string())
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut filters.disease, DiseaseFilter::All, "All diseases");
            for name in disease_names {
                let value = DiseaseFilter::Only(name.clone());
                ui.selectable_value(&mut filters.disease, value, name);
            }
        });
}

/// Shared map composition used by both call sites: lazily construct the map
/// (exactly once per mount, the slot is the only long-lived handle), render
/// the filtered markers, feed clicks back into the selection, and pump the
/// deferred fly-to timer.
pub(crate) fn show_map_canvas(
    ui: &mut egui::Ui,
    store: &GeoStore,
    filters: &FilterState,
    selection: &mut SelectionSync,
    map_slot: &mut Option<MapView>,
    now: Instant,
) {
    let map = map_slot.get_or_insert_with(|| MapView::new(ui.ctx().clone()));

    let visible = visible_events(store.events(), filters);
    let response = map.show(ui, &visible, selection.selected_id());

    if let Some(id) = response.clicked {
        if let Some(event) = store.get(id) {
            selection.select_from_marker(event, now);
        }
    }

    selection.tick(now, map);
    if selection.has_pending() {
        // Keep frames coming until the deferred fly-to lands.
        ui.ctx().request_repaint_after(Duration::from_millis(30));
    }
}
