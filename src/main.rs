// src/main.rs
use anyhow::Result;
use eframe::egui;

mod app;
mod data;
mod filter;
mod map;
mod selection;
mod state;
mod ui;
mod window_state;

use app::SentinelApp;

fn main() -> Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_title("Sentinel"),
        ..Default::default()
    };

    eframe::run_native(
        "Sentinel",
        options,
        Box::new(|_cc| {
            let app = SentinelApp::new()?;
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
