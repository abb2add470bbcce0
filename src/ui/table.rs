use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};
use egui_plot::{Bar, BarChart, Plot};

use crate::data::model::Feature;
use crate::data::summary::FeatureStats;
use crate::state::AppState;

const ROW_HEIGHT: f32 = 18.0;

// ---------------------------------------------------------------------------
// Filtered dataset table
// ---------------------------------------------------------------------------

pub fn dataset_table(ui: &mut Ui, state: &AppState) {
    ui.strong("Filtered Dataset");
    ui.label(format!(
        "Showing {} out of {} records",
        state.view.len(),
        state.dataset.len()
    ));

    let records = state.dataset.records();
    let indices = state.view.indices();

    TableBuilder::new(ui)
        .id_salt("dataset_table")
        .striped(true)
        .max_scroll_height(320.0)
        .column(Column::auto().at_least(40.0))
        .columns(Column::auto().at_least(110.0), Feature::ALL.len())
        .column(Column::remainder())
        .header(ROW_HEIGHT + 2.0, |mut header| {
            header.col(|ui| {
                ui.strong("#");
            });
            for f in Feature::ALL {
                header.col(|ui| {
                    ui.strong(f.label());
                });
            }
            header.col(|ui| {
                ui.strong("species");
            });
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, indices.len(), |mut row| {
                let idx = indices[row.index()];
                let rec = &records[idx];
                row.col(|ui| {
                    ui.label(idx.to_string());
                });
                for f in Feature::ALL {
                    row.col(|ui| {
                        ui.label(format!("{:.1}", rec.value(f)));
                    });
                }
                row.col(|ui| {
                    let color = state.colors.color_for(rec.species);
                    ui.label(RichText::new(rec.species.name()).color(color));
                });
            });
        });
}

// ---------------------------------------------------------------------------
// Summary statistics
// ---------------------------------------------------------------------------

const STAT_ROWS: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

fn stat_cell(stats: &FeatureStats, row: &str) -> String {
    let value = match row {
        "count" => return stats.count.to_string(),
        "std" => match stats.std {
            Some(v) => v,
            None => return "n/a".to_string(),
        },
        "mean" => stats.mean,
        "min" => stats.min,
        "25%" => stats.q25,
        "50%" => stats.q50,
        "75%" => stats.q75,
        _ => stats.max,
    };
    format!("{value:.2}")
}

/// Statistics table and species distribution, or the "no matches" warning.
pub fn summary_panel(ui: &mut Ui, state: &AppState) {
    ui.strong("Summary Statistics");

    if state.summary.is_empty() {
        ui.label(RichText::new("No data matches the current filters!").color(Color32::YELLOW));
        return;
    }

    egui::Grid::new("summary_stats")
        .striped(true)
        .num_columns(Feature::ALL.len() + 1)
        .show(ui, |ui: &mut Ui| {
            ui.label("");
            for f in Feature::ALL {
                ui.strong(f.label());
            }
            ui.end_row();

            for name in STAT_ROWS {
                ui.strong(name);
                for f in Feature::ALL {
                    let text = state
                        .summary
                        .feature(f)
                        .map(|s| stat_cell(s, name))
                        .unwrap_or_default();
                    ui.label(text);
                }
                ui.end_row();
            }
        });

    ui.add_space(8.0);
    ui.strong("Species Distribution");
    species_bar_chart(ui, state);
}

fn species_bar_chart(ui: &mut Ui, state: &AppState) {
    if state.counts.is_empty() {
        return;
    }
    let entries = state.counts.descending();
    let names: Vec<String> = entries.iter().map(|(sp, _)| sp.to_string()).collect();

    let bars: Vec<Bar> = entries
        .iter()
        .enumerate()
        .map(|(i, (sp, n))| {
            Bar::new(i as f64, *n as f64)
                .width(0.6)
                .name(sp.name())
                .fill(state.colors.color_for(*sp))
        })
        .collect();

    Plot::new("species_counts")
        .height(180.0)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .y_axis_label("count")
        .x_axis_formatter(move |mark, _range| {
            let i = mark.value.round();
            if (mark.value - i).abs() < f64::EPSILON && i >= 0.0 {
                names.get(i as usize).cloned().unwrap_or_default()
            } else {
                String::new()
            }
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("count"));
        });
}
