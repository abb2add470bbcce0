use eframe::egui::{self, ScrollArea, Ui};

use crate::data::model::Dataset;
use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct IrisExplorerApp {
    pub state: AppState,
}

impl IrisExplorerApp {
    pub fn new(dataset: &'static Dataset) -> Self {
        Self {
            state: AppState::new(dataset),
        }
    }
}

impl eframe::App for IrisExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title and record counter ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: tables, statistics, charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    ui.columns(2, |cols| {
                        table::dataset_table(&mut cols[0], &self.state);
                        table::summary_panel(&mut cols[1], &self.state);
                    });
                    ui.separator();
                    plot::visualizations(ui, &mut self.state);
                    ui.separator();
                    panels::about_section(ui, &self.state);
                });
        });
    }
}
