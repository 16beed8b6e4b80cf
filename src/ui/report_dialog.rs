// src/ui/report_dialog.rs
use eframe::egui;

use crate::state::AppState;
use crate::window_state::WindowMode;

const MINIMIZED_SIZE: egui::Vec2 = egui::vec2(260.0, 44.0);
// Stacked above the map modal's corner slot so both cards stay visible.
const MINIMIZED_MARGIN: egui::Vec2 = egui::vec2(16.0, 76.0);

/// Mock outbreak report viewer. No map inside; it exists because the window
/// state machine is shared by dialogs that have nothing to do with the map.
pub fn show_report_dialog(ctx: &egui::Context, state: &mut AppState) {
    if !state.report.open {
        return;
    }
    let Some(event) = state.report.event.clone() else {
        return;
    };

    let mode = state.report.window.mode();
    if mode == WindowMode::Minimized {
        let screen = ctx.screen_rect();
        let pos = screen.right_bottom() - MINIMIZED_SIZE - MINIMIZED_MARGIN;
        egui::Window::new("report_minimized")
            .title_bar(false)
            .resizable(false)
            .fixed_pos(pos)
            .fixed_size(MINIMIZED_SIZE)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(format!("📄 {}", event.name)).strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("✕").clicked() {
                            state.report.close();
                        }
                        if ui.button("🗖").clicked() {
                            state.report.window.restore();
                        }
                    });
                });
            });
        return;
    }

    let screen = ctx.screen_rect();
    let rect = match mode {
        WindowMode::Maximized => screen.shrink(12.0),
        _ => egui::Rect::from_center_size(
            screen.center(),
            egui::vec2(
                (screen.width() * 0.6).min(640.0),
                (screen.height() * 0.7).min(520.0),
            ),
        ),
    };

    egui::Window::new("report_window")
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .fixed_pos(rect.min)
        .fixed_size(rect.size())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("📄 Outbreak Report").heading());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("✕").clicked() {
                        state.report.close();
                        return;
                    }
                    let maximize_icon = if mode == WindowMode::Maximized {
                        "🗗"
                    } else {
                        "🗖"
                    };
                    if ui.button(maximize_icon).clicked() {
                        state.report.window.toggle_maximize();
                    }
                    if ui.button("🗕").clicked() {
                        state.report.window.minimize();
                    }
                });
            });
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading(format!("{} — {}", event.name, event.location));
                ui.label(format!(
                    "Reported {} · {} risk",
                    event.date,
                    event.risk.label()
                ));
                ui.add_space(8.0);

                ui.label(egui::RichText::new("Situation summary").strong());
                ui.label(&event.summary);
                ui.add_space(8.0);

                // Static mock content below; the real pipeline lives elsewhere.
                ui.label(egui::RichText::new("Source verification").strong());
                ui.label("Cross-referenced against 14 crawled sources; 12 corroborating, 2 pending review.");
                ui.add_space(8.0);

                ui.label(egui::RichText::new("AI classification").strong());
                ui.label("Classified as a confirmed outbreak signal with 0.94 confidence (retrieval-augmented fact check passed).");
            });
        });
}
