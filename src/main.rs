#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use neo_timeline::app::TimelineApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 500.0])
            .with_title("Neo-Timeline"),
        ..Default::default()
    };

    eframe::run_native(
        "Neo-Timeline",
        options,
        Box::new(|cc| Ok(Box::new(TimelineApp::new(cc)))),
    )
}
