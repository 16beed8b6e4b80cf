// src/ui/map_modal.rs
use std::time::{Duration, Instant};

use eframe::egui;

use crate::map::MapController;
use crate::state::AppState;
use crate::ui::detail_panel::{show_detail_panel, DetailAction};
use crate::ui::legend::show_legend;
use crate::ui::{show_map_canvas, show_risk_and_disease_filters};
use crate::window_state::WindowMode;

const MINIMIZED_SIZE: egui::Vec2 = egui::vec2(260.0, 44.0);
const MINIMIZED_MARGIN: egui::Vec2 = egui::vec2(16.0, 16.0);

/// Modal "Map View" overlay. Drives the window state machine and embeds the
/// same map canvas as the full page, with the reduced filter set.
pub fn show_map_modal(ctx: &egui::Context, state: &mut AppState) {
    let now = Instant::now();

    // Deferred window-mode reset scheduled by close().
    state.map_modal.tick(now);
    if state.map_modal.has_pending_reset() {
        ctx.request_repaint_after(Duration::from_millis(50));
    }

    if !state.map_modal.open {
        return;
    }

    match state.map_modal.window.mode() {
        WindowMode::Minimized => show_minimized_card(ctx, state, now),
        WindowMode::Normal | WindowMode::Maximized => show_map_window(ctx, state, now),
    }
}

fn show_minimized_card(ctx: &egui::Context, state: &mut AppState, now: Instant) {
    let screen = ctx.screen_rect();
    let pos = screen.right_bottom() - MINIMIZED_SIZE - MINIMIZED_MARGIN;

    egui::Window::new("map_view_minimized")
        .title_bar(false)
        .resizable(false)
        .fixed_pos(pos)
        .fixed_size(MINIMIZED_SIZE)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("🗺 Map View").strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("✕").clicked() {
                        state.map_modal.close(now);
                    }
                    if ui.button("🗖").clicked() && state.map_modal.window.restore() {
                        if let Some(map) = state.map_modal.map.as_mut() {
                            map.invalidate_size();
                        }
                    }
                });
            });
        });
}

fn window_rect(ctx: &egui::Context, mode: WindowMode) -> egui::Rect {
    let screen = ctx.screen_rect();
    match mode {
        WindowMode::Maximized => screen.shrink(12.0),
        _ => egui::Rect::from_center_size(
            screen.center(),
            egui::vec2(
                (screen.width() * 0.8).min(980.0),
                (screen.height() * 0.85).min(680.0),
            ),
        ),
    }
}

fn show_map_window(ctx: &egui::Context, state: &mut AppState, now: Instant) {
    let mode = state.map_modal.window.mode();
    let rect = window_rect(ctx, mode);

    egui::Window::new("map_view_window")
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .fixed_pos(rect.min)
        .fixed_size(rect.size())
        .show(ctx, |ui| {
            show_title_bar(ui, state, mode, now);
            // Close or minimize was clicked this frame; skip the body so a
            // torn-down map is not rebuilt for a window that is going away.
            if !state.map_modal.open || state.map_modal.window.is_minimized() {
                return;
            }
            ui.separator();
            show_filter_row(ui, state);
            ui.separator();
            show_body(ui, state, now);
        });
}

fn show_title_bar(ui: &mut egui::Ui, state: &mut AppState, mode: WindowMode, now: Instant) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("🗺 Map View").heading());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("✕").clicked() {
                state.map_modal.close(now);
                return;
            }
            let maximize_icon = if mode == WindowMode::Maximized {
                "🗗"
            } else {
                "🗖"
            };
            if ui.button(maximize_icon).clicked()
                && state.map_modal.window.toggle_maximize()
            {
                if let Some(map) = state.map_modal.map.as_mut() {
                    map.invalidate_size();
                }
                ui.ctx().request_repaint();
            }
            if ui.button("🗕").clicked() {
                state.map_modal.window.minimize();
            }
        });
    });
}

fn show_filter_row(ui: &mut egui::Ui, state: &mut AppState) {
    let disease_names = state.store.disease_names();
    ui.horizontal(|ui| {
        show_risk_and_disease_filters(ui, &mut state.map_modal.filters, &disease_names);

        ui.separator();
        let modal = &mut state.map_modal;
        if let Some(map) = modal.map.as_mut() {
            if ui.button("➕").clicked() {
                map.zoom_in();
            }
            if ui.button("➖").clicked() {
                map.zoom_out();
            }
            if ui.button("⟲ Reset").clicked() {
                modal.selection.reset(map);
            }
        }

        ui.separator();
        show_legend(ui);
    });
}

fn show_body(ui: &mut egui::Ui, state: &mut AppState, now: Instant) {
    let detail = state.map_modal.selection.selected().cloned();

    let map_height = if detail.is_some() {
        (ui.available_height() - 150.0).max(160.0)
    } else {
        ui.available_height()
    };

    ui.allocate_ui(egui::vec2(ui.available_width(), map_height), |ui| {
        ui.set_min_height(map_height);
        let modal = &mut state.map_modal;
        show_map_canvas(
            ui,
            &state.store,
            &modal.filters,
            &mut modal.selection,
            &mut modal.map,
            now,
        );
    });

    if let Some(event) = detail {
        ui.separator();
        match show_detail_panel(ui, &event) {
            DetailAction::Clear => {
                let modal = &mut state.map_modal;
                if let Some(map) = modal.map.as_mut() {
                    modal.selection.clear(map);
                } else {
                    modal.selection.forget();
                }
            }
            DetailAction::ViewReport => {
                state.report.open_for(event);
            }
            DetailAction::None => {}
        }
    }
}
