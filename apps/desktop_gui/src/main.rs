//! Desktop GUI for the give hope donation app.
//!
//! The egui frontend stays single-threaded; a backend worker thread owns the
//! catalog and the donation flow and talks to the UI over bounded channels.

mod backend_bridge;
mod controller;
mod ui;

use backend_bridge::commands::BackendCommand;
use controller::events::UiEvent;
use crossbeam_channel::bounded;
use eframe::egui;
use ui::{DesktopGuiApp, PersistedGuiSettings, SETTINGS_STORAGE_KEY};

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    backend_bridge::runtime::launch(cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("give hope")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([980.0, 640.0]),
        ..Default::default()
    };

    eframe::run_native(
        "give hope",
        options,
        Box::new(move |cc| {
            let persisted_settings = cc.storage.and_then(|storage| {
                storage
                    .get_string(SETTINGS_STORAGE_KEY)
                    .and_then(|text| serde_json::from_str::<PersistedGuiSettings>(&text).ok())
            });
            Ok(Box::new(DesktopGuiApp::new(cmd_tx, ui_rx, persisted_settings)))
        }),
    )
}
