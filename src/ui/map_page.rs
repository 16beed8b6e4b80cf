// src/ui/map_page.rs
use std::time::Instant;

use chrono::NaiveDate;
use eframe::egui;

use crate::filter::{filter_events, timeline_count, DateRange};
use crate::map::MapController;
use crate::state::AppState;
use crate::ui::detail_panel::{show_detail_panel, DetailAction};
use crate::ui::legend::show_legend;
use crate::ui::{show_map_canvas, show_risk_and_disease_filters};

/// Full-page visualization screen. Persistent layout, no window machine:
/// side panel owns the full filter set (date range and timeline included),
/// the central panel owns the map and the detail strip.
pub fn show_map_page(ui: &mut egui::Ui, state: &mut AppState) {
    let now = Instant::now();

    egui::SidePanel::left("outbreak_side_panel")
        .resizable(true)
        .default_width(300.0)
        .show_inside(ui, |ui| {
            show_side_panel(ui, state, now);
        });

    egui::CentralPanel::default().show_inside(ui, |ui| {
        show_map_panel(ui, state, now);
    });
}

fn show_side_panel(ui: &mut egui::Ui, state: &mut AppState, now: Instant) {
    ui.heading("Outbreak Map");
    ui.add_space(4.0);

    let disease_names = state.store.disease_names();
    show_risk_and_disease_filters(ui, &mut state.map_page.filters, &disease_names);

    ui.add_space(4.0);
    show_date_range(ui, state);

    ui.add_space(4.0);
    show_timeline(ui, state);

    ui.add_space(8.0);
    ui.separator();
    show_event_list(ui, state, now);

    ui.add_space(8.0);
    ui.separator();
    show_legend(ui);
}

fn show_date_range(ui: &mut egui::Ui, state: &mut AppState) {
    let page = &mut state.map_page;
    ui.label("Date range");
    let mut edited = false;
    ui.horizontal(|ui| {
        edited |= ui
            .add(egui::TextEdit::singleline(&mut page.start_buf).desired_width(90.0))
            .changed();
        ui.label("to");
        edited |= ui
            .add(egui::TextEdit::singleline(&mut page.end_buf).desired_width(90.0))
            .changed();
    });

    if edited {
        // Applied only once both fields parse and are ordered; otherwise the
        // previous range stays in effect.
        let parsed = (
            NaiveDate::parse_from_str(&page.start_buf, "%Y-%m-%d"),
            NaiveDate::parse_from_str(&page.end_buf, "%Y-%m-%d"),
        );
        if let (Ok(start), Ok(end)) = parsed {
            if start <= end {
                page.filters.date_range = Some(DateRange { start, end });
            }
        }
    }
}

fn show_timeline(ui: &mut egui::Ui, state: &mut AppState) {
    let page = &mut state.map_page;
    let filtered = filter_events(state.store.events(), &page.filters);
    let shown = timeline_count(filtered.len(), page.filters.timeline_position);

    ui.label("Timeline");
    ui.add(
        egui::Slider::new(&mut page.filters.timeline_position, 0..=100)
            .suffix("%")
            .show_value(true),
    );
    ui.label(format!("Showing {} of {} events", shown, filtered.len()));
}

fn show_event_list(ui: &mut egui::Ui, state: &mut AppState, now: Instant) {
    ui.label("Events");
    ui.add_space(4.0);

    // Snapshot before the scroll closure so the list can mutate selection
    // without fighting the store borrow.
    let entries: Vec<(u32, String)> = {
        let page = &state.map_page;
        let filtered = filter_events(state.store.events(), &page.filters);
        let shown = timeline_count(filtered.len(), page.filters.timeline_position);
        filtered[..shown]
            .iter()
            .map(|e| (e.id, format!("{} — {}", e.name, e.location)))
            .collect()
    };

    egui::ScrollArea::vertical()
        .id_salt("outbreak_event_list")
        .show(ui, |ui| {
            for (id, label) in &entries {
                let is_selected = state.map_page.selection.selected_id() == Some(*id);
                if ui.selectable_label(is_selected, label).clicked() {
                    if let Some(event) = state.store.get(*id) {
                        state.map_page.selection.select_from_list(event, now);
                    }
                }
            }
            if entries.is_empty() {
                ui.weak("No events match the current filters");
            }
        });
}

fn show_map_panel(ui: &mut egui::Ui, state: &mut AppState, now: Instant) {
    ui.horizontal(|ui| {
        let page = &mut state.map_page;
        // The imperative controls only exist once the map has mounted.
        if let Some(map) = page.map.as_mut() {
            if ui.button("➕ Zoom In").clicked() {
                map.zoom_in();
            }
            if ui.button("➖ Zoom Out").clicked() {
                map.zoom_out();
            }
            if ui.button("⟲ Reset View").clicked() {
                page.selection.reset(map);
            }
            ui.label(format!("Zoom: {:.1}", map.viewport().zoom));
        }
    });

    // Detail strip for the selected event; renders even when the event is
    // filtered out of the visible marker set.
    if let Some(event) = state.map_page.selection.selected().cloned() {
        egui::TopBottomPanel::bottom("event_detail_panel").show_inside(ui, |ui| {
            match show_detail_panel(ui, &event) {
                DetailAction::Clear => {
                    let page = &mut state.map_page;
                    if let Some(map) = page.map.as_mut() {
                        page.selection.clear(map);
                    } else {
                        page.selection.forget();
                    }
                }
                DetailAction::ViewReport => {
                    state.report.open_for(event.clone());
                }
                DetailAction::None => {}
            }
        });
    }

    let page = &mut state.map_page;
    show_map_canvas(
        ui,
        &state.store,
        &page.filters,
        &mut page.selection,
        &mut page.map,
        now,
    );
}
