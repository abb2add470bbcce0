use eframe::egui::{self, Align2, Color32, FontId, Sense, Ui, Vec2};
use egui_plot::{Bar, BarChart, BoxElem, BoxPlot, BoxSpread, Legend, Plot, PlotPoints, Points};

use crate::color::diverging;
use crate::data::model::{Feature, Species};
use crate::data::summary::box_spread;
use crate::state::{AppState, VizTab};

const PLOT_HEIGHT: f32 = 420.0;

// ---------------------------------------------------------------------------
// Visualisation tabs
// ---------------------------------------------------------------------------

/// Tab strip plus the active visualisation. Hidden for an empty view.
pub fn visualizations(ui: &mut Ui, state: &mut AppState) {
    if state.view.is_empty() {
        return;
    }
    ui.heading("Data Visualizations");

    ui.horizontal(|ui: &mut Ui| {
        for tab in VizTab::ALL {
            ui.selectable_value(&mut state.tab, tab, tab.label());
        }
    });
    ui.separator();

    match state.tab {
        VizTab::Scatter => scatter_tab(ui, state),
        VizTab::Correlation => correlation_heatmap(ui, state),
        VizTab::Distribution => distribution_tab(ui, state),
    }
}

fn feature_combo(ui: &mut Ui, id: &str, caption: &str, current: Feature) -> Feature {
    let mut selected = current;
    ui.label(caption);
    egui::ComboBox::from_id_salt(id)
        .selected_text(current.label())
        .show_ui(ui, |ui: &mut Ui| {
            for f in Feature::ALL {
                ui.selectable_value(&mut selected, f, f.label());
            }
        });
    selected
}

// ---------------------------------------------------------------------------
// Scatter plot
// ---------------------------------------------------------------------------

fn scatter_tab(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        state.scatter_x = feature_combo(ui, "scatter_x", "X-axis feature:", state.scatter_x);
        state.scatter_y = feature_combo(ui, "scatter_y", "Y-axis feature:", state.scatter_y);
    });

    let (fx, fy) = (state.scatter_x, state.scatter_y);
    let series: Vec<(Species, PlotPoints)> = state
        .dataset
        .species()
        .into_iter()
        .map(|sp| {
            let pts: PlotPoints = state
                .view
                .records()
                .filter(|r| r.species == sp)
                .map(|r| [r.value(fx), r.value(fy)])
                .collect();
            (sp, pts)
        })
        .collect();

    ui.label(format!("{} vs {}", fx.title(), fy.title()));
    Plot::new("scatter_plot")
        .height(PLOT_HEIGHT)
        .legend(Legend::default())
        .x_axis_label(fx.label())
        .y_axis_label(fy.label())
        .allow_boxed_zoom(true)
        .show(ui, |plot_ui| {
            for (sp, pts) in series {
                if pts.points().is_empty() {
                    continue;
                }
                plot_ui.points(
                    Points::new(pts)
                        .name(sp.name())
                        .color(state.colors.color_for(sp))
                        .radius(3.5),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Correlation heatmap
// ---------------------------------------------------------------------------

const CELL: Vec2 = Vec2::new(130.0, 44.0);

fn correlation_heatmap(ui: &mut Ui, state: &AppState) {
    ui.label("Feature Correlation Matrix");
    if !state.correlation.is_defined() {
        ui.label("Correlation needs at least two rows with varying values.");
        return;
    }

    egui::Grid::new("correlation_heatmap")
        .spacing([2.0, 2.0])
        .show(ui, |ui: &mut Ui| {
            ui.label("");
            for f in Feature::ALL {
                ui.strong(f.label());
            }
            ui.end_row();

            for row in Feature::ALL {
                ui.strong(row.label());
                for col in Feature::ALL {
                    let (rect, _) = ui.allocate_exact_size(CELL, Sense::hover());
                    let (fill, text) = match state.correlation.get(row, col) {
                        Some(r) => (diverging(r), format!("{r:.2}")),
                        None => (Color32::DARK_GRAY, "n/a".to_string()),
                    };
                    let painter = ui.painter();
                    painter.rect_filled(rect, 2.0, fill);
                    painter.text(
                        rect.center(),
                        Align2::CENTER_CENTER,
                        text,
                        FontId::proportional(14.0),
                        Color32::BLACK,
                    );
                }
                ui.end_row();
            }
        });
}

// ---------------------------------------------------------------------------
// Feature distribution: stacked histogram + box plot
// ---------------------------------------------------------------------------

fn distribution_tab(ui: &mut Ui, state: &mut AppState) {
    let chosen = feature_combo(
        ui,
        "hist_feature",
        "Select feature for distribution:",
        state.hist_feature,
    );
    if chosen != state.hist_feature {
        state.set_hist_feature(chosen);
    }
    let feature = state.hist_feature;
    ui.label(format!("Distribution of {}", feature.title()));

    let species = state.dataset.species();

    // Box plot per species, drawn above the histogram.
    let boxes: Vec<BoxPlot> = species
        .iter()
        .enumerate()
        .filter_map(|(i, &sp)| {
            let values: Vec<f64> = state
                .view
                .records()
                .filter(|r| r.species == sp)
                .map(|r| r.value(feature))
                .collect();
            let s = box_spread(&values)?;
            let spread = BoxSpread::new(s.lower_whisker, s.q1, s.median, s.q3, s.upper_whisker);
            let elem = BoxElem::new(i as f64, spread)
                .name(sp.name())
                .box_width(0.6)
                .fill(state.colors.color_for(sp).gamma_multiply(0.5))
                .stroke(egui::Stroke::new(1.5, state.colors.color_for(sp)));
            Some(BoxPlot::new(vec![elem]).horizontal().name(sp.name()))
        })
        .collect();

    Plot::new("distribution_box")
        .height(120.0)
        .show_y(false)
        .y_axis_label("species")
        .show(ui, |plot_ui| {
            for b in boxes {
                plot_ui.box_plot(b);
            }
        });

    // One stacked bar chart per species, in legend order.
    let mut charts: Vec<BarChart> = Vec::new();
    for sp in &species {
        let bars: Vec<Bar> = state
            .bins
            .iter()
            .map(|bin| {
                let n = bin.counts.get(sp).copied().unwrap_or(0);
                Bar::new(bin.center(), n as f64).width(bin.width())
            })
            .collect();
        let refs: Vec<&BarChart> = charts.iter().collect();
        let chart = BarChart::new(bars)
            .name(sp.name())
            .color(state.colors.color_for(*sp))
            .stack_on(&refs);
        charts.push(chart);
    }

    Plot::new("distribution_hist")
        .height(PLOT_HEIGHT)
        .legend(Legend::default())
        .x_axis_label(feature.label())
        .y_axis_label("count")
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
}
