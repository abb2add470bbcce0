mod app;
mod color;
mod data;
mod state;
mod ui;

use anyhow::Context;
use app::IrisExplorerApp;
use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let dataset = data::loader::load()
        .inspect_err(|e| log::error!("Cannot start without the Iris dataset: {e}"))
        .context("loading bundled Iris dataset")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 900.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Iris Dataset Explorer",
        options,
        Box::new(move |_cc| Ok(Box::new(IrisExplorerApp::new(dataset)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
    .context("running the Iris explorer window")
}
