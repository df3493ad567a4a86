mod app;
mod ui;

use app::RosterLookupApp;
use eframe::egui;
use roster_lookup::{AppState, ConfigStore};

fn main() -> eframe::Result {
    env_logger::init();

    let store = match ConfigStore::default_location() {
        Ok(store) => Some(store),
        Err(e) => {
            log::warn!("{e}; roster list will not be remembered");
            None
        }
    };
    let state = AppState::restore(store);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([600.0, 400.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Student Lookup",
        options,
        Box::new(|_cc| Ok(Box::new(RosterLookupApp::new(state)))),
    )
}
