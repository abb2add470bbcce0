use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::model::{Feature, Species};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filter Controls");
    ui.label("Use the controls below to filter and explore the dataset");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            species_selector(ui, state);
            ui.separator();

            ui.strong("Feature Ranges");
            for feature in Feature::ALL {
                range_sliders(ui, state, feature);
            }

            ui.add_space(8.0);
            if ui.button("Reset filters").clicked() {
                state.reset_filters();
            }

            if let Some(msg) = &state.criteria_error {
                ui.add_space(4.0);
                ui.label(RichText::new(msg).color(Color32::RED));
            }
        });
}

fn species_selector(ui: &mut Ui, state: &mut AppState) {
    ui.strong("Select Species:");

    let current = state.criteria.species;
    let current_text = current.map_or("All".to_string(), |sp| sp.to_string());
    let mut choice: Option<Option<Species>> = None;

    egui::ComboBox::from_id_salt("species")
        .selected_text(current_text)
        .show_ui(ui, |ui: &mut Ui| {
            if ui.selectable_label(current.is_none(), "All").clicked() {
                choice = Some(None);
            }
            for sp in state.dataset.species() {
                if ui
                    .selectable_label(current == Some(sp), sp.name())
                    .clicked()
                {
                    choice = Some(Some(sp));
                }
            }
        });

    if let Some(species) = choice {
        if species != current {
            state.set_species(species);
        }
    }
}

/// Min and max sliders for one feature, limited to the dataset extent.
fn range_sliders(ui: &mut Ui, state: &mut AppState, feature: Feature) {
    let extent = state.dataset.extent(feature);
    let mut range = state.criteria.range(feature);

    ui.label(feature.title());
    let min_changed = ui
        .add(
            egui::Slider::new(&mut range.min, extent.min..=extent.max)
                .text("min")
                .max_decimals(2),
        )
        .changed();
    let max_changed = ui
        .add(
            egui::Slider::new(&mut range.max, extent.min..=extent.max)
                .text("max")
                .max_decimals(2),
        )
        .changed();

    if min_changed || max_changed {
        state.set_range(feature, range);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the title bar with the record counter.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading("Iris Dataset Explorer");
        ui.separator();
        ui.label(format!(
            "Showing {} out of {} records",
            state.view.len(),
            state.dataset.len()
        ));
    });
    ui.label("Explore the famous Iris flower dataset with interactive filters and visualizations");
}

// ---------------------------------------------------------------------------
// About section
// ---------------------------------------------------------------------------

pub fn about_section(ui: &mut Ui, state: &AppState) {
    egui::CollapsingHeader::new(RichText::new("About the Iris Dataset").strong())
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            ui.label(
                "The Iris flower dataset is a classic dataset in machine learning and \
                 statistics, introduced by Ronald Fisher in 1936.",
            );
            ui.add_space(4.0);
            ui.strong("Dataset Features:");
            ui.label("• Sepal Length: length of the sepal in centimeters");
            ui.label("• Sepal Width: width of the sepal in centimeters");
            ui.label("• Petal Length: length of the petal in centimeters");
            ui.label("• Petal Width: width of the petal in centimeters");
            ui.label("• Species: Setosa, Versicolor, Virginica");
            ui.add_space(4.0);
            ui.label(format!(
                "Total Records: {} ({} species)",
                state.dataset.len(),
                state.dataset.species().len()
            ));
            ui.add_space(4.0);
            ui.strong("Commonly used for:");
            ui.label("• Classification algorithms");
            ui.label("• Data visualization techniques");
            ui.label("• Statistical analysis");
            ui.label("• Machine learning tutorials");
        });
}
