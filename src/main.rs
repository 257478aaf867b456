#![deny(missing_docs)]

//! Entry point for the housing price predictor window.
use eframe::egui;
use housing_predictor::config::Settings;
use housing_predictor::egui_app::controller::EguiController;
use housing_predictor::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use housing_predictor::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let mut controller = EguiController::new(Settings::default());
    if let Err(err) = controller.load_configuration() {
        tracing::warn!("Using default settings: {err}");
    }
    tracing::info!(
        "Prediction server: {}",
        controller.settings().server_url
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Boston Housing Price Predictor")
            .with_inner_size(egui::vec2(1100.0, 720.0))
            .with_min_inner_size(MIN_VIEWPORT_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        "Housing Price Predictor",
        native_options,
        Box::new(move |_cc| Ok(Box::new(EguiApp::new(controller)))),
    )?;
    Ok(())
}
