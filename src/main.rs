//! Interactive demo contrasting a healthy satellite orbit with the ghost
//! orbit produced by a stale database radius.

mod app;
mod config;
mod drawing;
mod math;
mod tables;
mod trajectory;

use app::App;
use eframe::egui;

fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("starting mission control viewer");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1400.0, 900.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Mission Control: Data Integrity",
        options,
        Box::new(|cc| Ok(Box::new(App::new(cc)))),
    )
}
