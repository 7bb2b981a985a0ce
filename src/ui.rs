mod app;
mod frame;
mod sliders;


use std::path::PathBuf;

use eframe::egui;

use crate::runtime::RenderParameters;

use app::ThresholdApp;

const APP_TITLE: &str = "Threshold Viewer";
const WINDOW_SIZE: [f32; 2] = [1100.0, 720.0];
const MIN_WINDOW_SIZE: [f32; 2] = [640.0, 420.0];

/// Opens the viewer window and blocks until it is closed.
pub fn run(startup_input: Option<PathBuf>, params: RenderParameters) -> Result<(), String> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size(MIN_WINDOW_SIZE)
            .with_resizable(true)
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(ThresholdApp::new(startup_input, params)))),
    )
    .map_err(|error| error.to_string())
}
