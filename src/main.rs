use std::path::PathBuf;
use std::rc::Rc;

use eframe::egui;
use simplelog::{ColorChoice, TermLogger, TerminalMode};

mod analytics;
mod app;
mod config;
mod draft;
mod editor;
mod error;
mod export;
mod models;
mod store;
mod views;

#[cfg(test)]
mod test_utils;

use app::GymApp;
use config::AppConfig;
use export::TextFileExporter;

fn main() -> Result<(), eframe::Error> {
    let (config, config_err) = match AppConfig::load() {
        Ok(c) => (c, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    if let Err(e) = TermLogger::init(
        config.log_level(),
        simplelog::Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    if let Some(e) = config_err {
        log::warn!("using default config: {}", e);
    }

    let documents = match config.documents_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!("{}, exporting to the working directory", e);
            PathBuf::from(".")
        }
    };
    log::info!("exporting workouts to {}", documents.display());
    let exporter = Rc::new(TextFileExporter::new(documents));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1024.0, 768.0]),
        ..Default::default()
    };

    eframe::run_native(
        "The Gym App",
        options,
        Box::new(|cc| Ok(Box::new(GymApp::new(cc, config, exporter)))),
    )
}
