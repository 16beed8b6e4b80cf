// src/app.rs
use anyhow::Result;
use eframe::egui;

use crate::state::{AppState, Screen};
use crate::ui;

pub struct SentinelApp {
    state: AppState,
}

impl SentinelApp {
    pub fn new() -> Result<Self> {
        Ok(Self {
            state: AppState::new()?,
        })
    }

    fn show_menu(&mut self, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            ui.label(egui::RichText::new("Sentinel").strong());
            ui.separator();

            // Tab selection using buttons
            let tabs = [
                (Screen::Overview, "Overview"),
                (Screen::OutbreakMap, "Outbreak Map"),
            ];
            for (screen, label) in tabs {
                if ui
                    .selectable_label(self.state.current_screen == screen, label)
                    .clicked()
                {
                    self.state.current_screen = screen;
                }
            }

            ui.separator();
            if ui.button("🗺 Map View").clicked() {
                self.state.map_modal.open();
            }
        });
    }
}

impl eframe::App for SentinelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.show_menu(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            match self.state.current_screen {
                Screen::Overview => {
                    ui::overview::show_overview(ui, &mut self.state);
                }
                Screen::OutbreakMap => {
                    ui::map_page::show_map_page(ui, &mut self.state);
                }
            }
        });

        // Overlays draw after the screen so they stack on top of it.
        ui::map_modal::show_map_modal(ctx, &mut self.state);
        ui::report_dialog::show_report_dialog(ctx, &mut self.state);

        // Show error modal if needed
        let error_msg = self.state.error_message.clone();
        if let Some(error) = error_msg {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(&error);
                    if ui.button("OK").clicked() {
                        self.state.error_message = None;
                    }
                });
        }
    }
}
