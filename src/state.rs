use crate::color::SpeciesColors;
use crate::data::filter::{apply_filters, FilterCriteria, FilteredView};
use crate::data::model::{Dataset, Feature, FeatureRange, Species};
use crate::data::summary::{
    correlate, count_by_category, histogram, summarize, Bin, CategoryCounts, CorrelationMatrix,
    SummaryStats,
};

/// Number of equal-width bins in the distribution tab.
pub const HISTOGRAM_BINS: usize = 20;

/// The visualisation tab currently shown below the tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VizTab {
    Scatter,
    Correlation,
    Distribution,
}

impl VizTab {
    pub const ALL: [VizTab; 3] = [VizTab::Scatter, VizTab::Correlation, VizTab::Distribution];

    pub fn label(self) -> &'static str {
        match self {
            VizTab::Scatter => "Scatter Plot",
            VizTab::Correlation => "Correlation Heatmap",
            VizTab::Distribution => "Feature Distribution",
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub dataset: &'static Dataset,

    /// Criteria as edited by the sidebar widgets.
    pub criteria: FilterCriteria,

    /// Rows passing the last valid criteria.
    pub view: FilteredView<'static>,

    pub summary: SummaryStats,
    pub correlation: CorrelationMatrix,
    pub counts: CategoryCounts,
    pub bins: Vec<Bin>,

    /// Set when the edited criteria were rejected; the view above is stale.
    pub criteria_error: Option<String>,

    pub tab: VizTab,
    pub scatter_x: Feature,
    pub scatter_y: Feature,
    pub hist_feature: Feature,

    pub colors: SpeciesColors,
}

impl AppState {
    pub fn new(dataset: &'static Dataset) -> Self {
        let view = FilteredView::all(dataset);
        let mut state = Self {
            dataset,
            criteria: FilterCriteria::full(dataset),
            summary: summarize(&view),
            correlation: correlate(&view),
            counts: count_by_category(&view),
            bins: Vec::new(),
            view,
            criteria_error: None,
            tab: VizTab::Scatter,
            scatter_x: Feature::SepalLength,
            scatter_y: Feature::SepalWidth,
            hist_feature: Feature::SepalLength,
            colors: SpeciesColors::new(&dataset.species()),
        };
        state.rebuild_histogram();
        state
    }

    /// Recompute the view and every aggregate from `criteria`.
    /// Rejected criteria leave the previous view in place.
    pub fn refilter(&mut self) {
        match apply_filters(self.dataset, &self.criteria) {
            Ok(view) => {
                self.summary = summarize(&view);
                self.correlation = correlate(&view);
                self.counts = count_by_category(&view);
                self.view = view;
                self.criteria_error = None;
                self.rebuild_histogram();
            }
            Err(e) => {
                log::warn!("Rejected filter criteria: {e}");
                self.criteria_error = Some(e.to_string());
            }
        }
    }

    fn rebuild_histogram(&mut self) {
        self.bins = histogram(&self.view, self.hist_feature, HISTOGRAM_BINS);
    }

    pub fn set_species(&mut self, species: Option<Species>) {
        self.criteria.species = species;
        self.refilter();
    }

    pub fn set_range(&mut self, feature: Feature, range: FeatureRange) {
        *self.criteria.range_mut(feature) = range;
        self.refilter();
    }

    pub fn set_hist_feature(&mut self, feature: Feature) {
        self.hist_feature = feature;
        self.rebuild_histogram();
    }

    /// Restore wildcard species and full ranges.
    pub fn reset_filters(&mut self) {
        self.criteria = FilterCriteria::full(self.dataset);
        self.refilter();
    }
}
