//! Lights Out desktop application using egui/eframe.
//!
//! This is the main entry point for the desktop Lights Out application.

use crate::app::LightsOutApp;

mod app;

fn main() -> eframe::Result<()> {
    const APP_ID: &str = "io.github.gifnksm.lightsout";

    better_panic::install();
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_app_id(APP_ID)
            .with_resizable(true)
            .with_inner_size((800.0, 600.0))
            .with_min_inner_size((400.0, 300.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Lights Out",
        options,
        Box::new(|cc| Ok(Box::new(LightsOutApp::new(cc)))),
    )
}
