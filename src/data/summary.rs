use std::collections::BTreeMap;

use super::filter::FilteredView;
use super::model::{Feature, Species};
use super::stats::{interpolate_sorted, pearson, quantile_sorted, round2, sample_std, sorted};

// ---------------------------------------------------------------------------
// Descriptive statistics
// ---------------------------------------------------------------------------

/// `describe()`-style statistics for one feature, rounded to 2 decimals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureStats {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation; `None` when only one row is present.
    pub std: Option<f64>,
    pub min: f64,
    pub q25: f64,
    pub q50: f64,
    pub q75: f64,
    pub max: f64,
}

impl FeatureStats {
    /// `values` must be non-empty.
    fn from_non_empty(values: &[f64]) -> Self {
        let s = sorted(values);
        let n = s.len();
        Self {
            count: n,
            mean: round2(s.iter().sum::<f64>() / n as f64),
            std: sample_std(&s).map(round2),
            min: round2(s[0]),
            q25: round2(interpolate_sorted(&s, 0.25)),
            q50: round2(interpolate_sorted(&s, 0.50)),
            q75: round2(interpolate_sorted(&s, 0.75)),
            max: round2(s[n - 1]),
        }
    }
}

/// Statistics over a view, or an explicit marker that there was nothing
/// to describe.
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryStats {
    NoData,
    /// Per-feature statistics in [`Feature::ALL`] order.
    Stats([FeatureStats; 4]),
}

impl SummaryStats {
    pub fn feature(&self, feature: Feature) -> Option<&FeatureStats> {
        match self {
            SummaryStats::NoData => None,
            SummaryStats::Stats(all) => Some(&all[feature.index()]),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, SummaryStats::NoData)
    }
}

pub fn summarize(view: &FilteredView<'_>) -> SummaryStats {
    if view.is_empty() {
        return SummaryStats::NoData;
    }
    SummaryStats::Stats(Feature::ALL.map(|f| FeatureStats::from_non_empty(&view.column(f))))
}

// ---------------------------------------------------------------------------
// Correlation
// ---------------------------------------------------------------------------

/// Symmetric Pearson matrix; `None` marks an undefined coefficient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrelationMatrix {
    cells: [[Option<f64>; 4]; 4],
}

impl CorrelationMatrix {
    pub fn get(&self, a: Feature, b: Feature) -> Option<f64> {
        self.cells[a.index()][b.index()]
    }

    /// True when at least one coefficient is defined.
    pub fn is_defined(&self) -> bool {
        self.cells.iter().flatten().any(Option::is_some)
    }
}

pub fn correlate(view: &FilteredView<'_>) -> CorrelationMatrix {
    let mut cells = [[None; 4]; 4];
    if view.len() < 2 {
        return CorrelationMatrix { cells };
    }

    let columns = Feature::ALL.map(|f| view.column(f));
    let has_spread = columns
        .each_ref()
        .map(|c| c.iter().any(|&v| v != c[0]));

    for i in 0..4 {
        if !has_spread[i] {
            continue;
        }
        cells[i][i] = Some(1.0);
        for j in (i + 1)..4 {
            if !has_spread[j] {
                continue;
            }
            let r = pearson(&columns[i], &columns[j]);
            cells[i][j] = r;
            cells[j][i] = r;
        }
    }
    CorrelationMatrix { cells }
}

// ---------------------------------------------------------------------------
// Category counts
// ---------------------------------------------------------------------------

/// Rows per species; species with no rows are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    counts: BTreeMap<Species, usize>,
}

impl CategoryCounts {
    pub fn iter(&self) -> impl Iterator<Item = (Species, usize)> + '_ {
        self.counts.iter().map(|(&sp, &n)| (sp, n))
    }

    /// Largest count first; ties keep species order.
    pub fn descending(&self) -> Vec<(Species, usize)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

pub fn count_by_category(view: &FilteredView<'_>) -> CategoryCounts {
    let mut counts = BTreeMap::new();
    for rec in view.records() {
        *counts.entry(rec.species).or_insert(0) += 1;
    }
    CategoryCounts { counts }
}

// ---------------------------------------------------------------------------
// Distribution helpers for the histogram tab
// ---------------------------------------------------------------------------

/// One equal-width bin with per-species counts.
#[derive(Debug, Clone, PartialEq)]
pub struct Bin {
    pub start: f64,
    pub end: f64,
    pub counts: BTreeMap<Species, usize>,
}

impl Bin {
    pub fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

/// Equal-width histogram of one feature over the view's own min/max.
/// A constant feature collapses to a single bin.
pub fn histogram(view: &FilteredView<'_>, feature: Feature, bins: usize) -> Vec<Bin> {
    if view.is_empty() || bins == 0 {
        return Vec::new();
    }
    let values = view.column(feature);
    let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let (n_bins, width) = if hi > lo {
        (bins, (hi - lo) / bins as f64)
    } else {
        (1, 1.0)
    };
    let start = if hi > lo { lo } else { lo - 0.5 };

    let mut out: Vec<Bin> = (0..n_bins)
        .map(|i| Bin {
            start: start + i as f64 * width,
            end: start + (i + 1) as f64 * width,
            counts: BTreeMap::new(),
        })
        .collect();

    for rec in view.records() {
        let v = rec.value(feature);
        // The last bin is closed on the right.
        let idx = (((v - start) / width).floor() as usize).min(n_bins - 1);
        *out[idx].counts.entry(rec.species).or_insert(0) += 1;
    }
    out
}

/// Five-number summary for a box plot. Whiskers reach the furthest data
/// point within 1.5 IQR of the quartiles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxSpread {
    pub lower_whisker: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub upper_whisker: f64,
}

pub fn box_spread(values: &[f64]) -> Option<BoxSpread> {
    let s = sorted(values);
    let q1 = quantile_sorted(&s, 0.25)?;
    let median = quantile_sorted(&s, 0.5)?;
    let q3 = quantile_sorted(&s, 0.75)?;
    let fence = 1.5 * (q3 - q1);

    let lower_whisker = s.iter().copied().find(|&v| v >= q1 - fence).unwrap_or(q1);
    let upper_whisker = s.iter().rev().copied().find(|&v| v <= q3 + fence).unwrap_or(q3);
    Some(BoxSpread {
        lower_whisker,
        q1,
        median,
        q3,
        upper_whisker,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{apply_filters, FilterCriteria};
    use crate::data::loader::load;
    use crate::data::model::{Dataset, FeatureRange, Record};

    fn count_of(counts: &CategoryCounts, species: Species) -> Option<usize> {
        counts.iter().find(|(sp, _)| *sp == species).map(|(_, n)| n)
    }

    fn bin_total(bin: &Bin) -> usize {
        bin.counts.values().sum()
    }

    fn species_view(species: Species) -> FilteredView<'static> {
        let ds = load().unwrap();
        let criteria = FilterCriteria {
            species: Some(species),
            ..FilterCriteria::full(ds)
        };
        apply_filters(ds, &criteria).unwrap()
    }

    #[test]
    fn test_summarize_full_dataset() {
        let ds = load().unwrap();
        let stats = summarize(&FilteredView::all(ds));
        let sl = stats.feature(Feature::SepalLength).unwrap();
        assert_eq!(sl.count, 150);
        assert_eq!(sl.mean, 5.84);
        assert_eq!(sl.std, Some(0.83));
        assert_eq!((sl.min, sl.q25, sl.q50, sl.q75, sl.max), (4.3, 5.1, 5.8, 6.4, 7.9));

        let pl = stats.feature(Feature::PetalLength).unwrap();
        assert_eq!(pl.q50, 4.35);
        assert_eq!(pl.std, Some(1.77));
    }

    #[test]
    fn test_quartile_ties_round_to_even() {
        // Virginica sepal length q25 is 6.225, versicolor sepal width q25 is 2.525.
        let virginica = summarize(&species_view(Species::Virginica));
        let versicolor = summarize(&species_view(Species::Versicolor));
        let q25_sl = virginica.feature(Feature::SepalLength).unwrap().q25;
        let q25_sw = versicolor.feature(Feature::SepalWidth).unwrap().q25;
        assert_eq!((q25_sl, q25_sw), (6.22, 2.52));
    }

    #[test]
    fn test_summarize_empty_view_is_no_data() {
        let ds = load().unwrap();
        let mut criteria = FilterCriteria::full(ds);
        *criteria.range_mut(Feature::SepalLength) = FeatureRange::new(8.0, 9.0);
        let view = apply_filters(ds, &criteria).unwrap();
        let stats = summarize(&view);
        assert_eq!(stats, SummaryStats::NoData);
        assert!(stats.feature(Feature::SepalLength).is_none());
        assert!(!correlate(&view).is_defined());
        assert!(count_by_category(&view).is_empty());
        assert!(histogram(&view, Feature::SepalLength, 10).is_empty());
    }

    #[test]
    fn test_single_row_has_no_std() {
        let ds = load().unwrap();
        let mut criteria = FilterCriteria::full(ds);
        *criteria.range_mut(Feature::SepalLength) = FeatureRange::new(7.9, 7.9);
        let view = apply_filters(ds, &criteria).unwrap();
        let stats = summarize(&view);
        let sl = stats.feature(Feature::SepalLength).unwrap();
        assert_eq!(sl.count, 1);
        assert_eq!(sl.std, None);
        assert_eq!(sl.q25, 7.9);
        assert!(!correlate(&view).is_defined());
    }

    #[test]
    fn test_correlation_full_dataset() {
        let ds = load().unwrap();
        let m = correlate(&FilteredView::all(ds));
        for a in Feature::ALL {
            assert_eq!(m.get(a, a), Some(1.0));
            for b in Feature::ALL {
                assert_eq!(m.get(a, b), m.get(b, a));
            }
        }
        let r = m.get(Feature::PetalLength, Feature::PetalWidth).unwrap();
        assert!((r - 0.9629).abs() < 1e-4);
        let r = m.get(Feature::SepalLength, Feature::SepalWidth).unwrap();
        assert!((r + 0.1176).abs() < 1e-4);
    }

    #[test]
    fn test_zero_variance_feature_is_flagged() {
        let ds = Dataset::from_records(vec![
            Record::new([5.0, 3.0, 1.4, 0.2], Species::Setosa),
            Record::new([5.5, 3.2, 1.5, 0.2], Species::Setosa),
            Record::new([6.0, 3.1, 1.7, 0.2], Species::Setosa),
        ]);
        let m = correlate(&FilteredView::all(&ds));
        assert_eq!(m.get(Feature::PetalWidth, Feature::PetalWidth), None);
        assert_eq!(m.get(Feature::SepalLength, Feature::PetalWidth), None);
        assert_eq!(m.get(Feature::SepalLength, Feature::SepalLength), Some(1.0));
        assert!(m.get(Feature::SepalLength, Feature::PetalLength).is_some());
    }

    #[test]
    fn test_count_by_category_omits_zero_and_sums_to_view() {
        let ds = load().unwrap();
        let mut criteria = FilterCriteria::full(ds);
        *criteria.range_mut(Feature::SepalLength) = FeatureRange::new(6.0, 6.5);
        let view = apply_filters(ds, &criteria).unwrap();
        let counts = count_by_category(&view);

        assert_eq!(count_of(&counts, Species::Setosa), None);
        assert_eq!(count_of(&counts, Species::Versicolor), Some(16));
        assert_eq!(count_of(&counts, Species::Virginica), Some(21));
        assert_eq!(counts.iter().map(|(_, n)| n).sum::<usize>(), view.len());
        assert_eq!(
            counts.descending(),
            vec![(Species::Virginica, 21), (Species::Versicolor, 16)]
        );
    }

    #[test]
    fn test_setosa_only_counts() {
        let view = species_view(Species::Setosa);
        let counts = count_by_category(&view);
        assert_eq!(counts.iter().collect::<Vec<_>>(), vec![(Species::Setosa, 50)]);
    }

    #[test]
    fn test_histogram_covers_every_row() {
        let ds = load().unwrap();
        let bins = histogram(&FilteredView::all(ds), Feature::PetalLength, 20);
        assert_eq!(bins.len(), 20);
        assert_eq!(bins.iter().map(bin_total).sum::<usize>(), 150);
        assert_eq!(bins[0].start, 1.0);
        assert!((bins[19].end - 6.9).abs() < 1e-9);
        // 6.7, 6.7 and the maximum 6.9 land in the last bin.
        assert_eq!(bins[19].counts.get(&Species::Virginica), Some(&3));
        assert_eq!(bin_total(&bins[19]), 3);
    }

    #[test]
    fn test_histogram_constant_feature_single_bin() {
        let ds = Dataset::from_records(vec![
            Record::new([5.0, 3.0, 1.4, 0.2], Species::Setosa),
            Record::new([5.0, 3.2, 1.5, 0.2], Species::Versicolor),
        ]);
        let bins = histogram(&FilteredView::all(&ds), Feature::SepalLength, 10);
        assert_eq!(bins.len(), 1);
        assert_eq!(bin_total(&bins[0]), 2);
        assert_eq!(bins[0].center(), 5.0);
    }

    #[test]
    fn test_box_spread_whiskers_stop_at_fence() {
        let spread = box_spread(&[1.0, 2.0, 3.0, 4.0, 100.0]).unwrap();
        assert_eq!(spread.q1, 2.0);
        assert_eq!(spread.median, 3.0);
        assert_eq!(spread.q3, 4.0);
        assert_eq!(spread.lower_whisker, 1.0);
        assert_eq!(spread.upper_whisker, 4.0);
        assert!(box_spread(&[]).is_none());
    }
}
