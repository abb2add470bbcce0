use super::error::{DataError, Result};
use super::model::{Dataset, Feature, FeatureRange, Record, Species};

// ---------------------------------------------------------------------------
// Filter predicate: species + one closed range per feature
// ---------------------------------------------------------------------------

/// The inclusion predicate built from the sidebar controls.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    /// `None` means "All" (no species constraint).
    pub species: Option<Species>,
    /// One range per feature, in [`Feature::ALL`] order.
    pub ranges: [FeatureRange; 4],
}

impl FilterCriteria {
    /// Wildcard species with every range spanning the dataset extent.
    pub fn full(dataset: &Dataset) -> Self {
        Self {
            species: None,
            ranges: Feature::ALL.map(|f| dataset.extent(f)),
        }
    }

    pub fn range(&self, feature: Feature) -> FeatureRange {
        self.ranges[feature.index()]
    }

    pub fn range_mut(&mut self, feature: Feature) -> &mut FeatureRange {
        &mut self.ranges[feature.index()]
    }

    /// Reject unordered or non-finite bounds. Nothing is clamped or swapped.
    pub fn validate(&self) -> Result<()> {
        for feature in Feature::ALL {
            let r = self.range(feature);
            if !r.is_valid() {
                return Err(DataError::InvalidCriteria {
                    feature,
                    min: r.min,
                    max: r.max,
                });
            }
        }
        Ok(())
    }

    /// Whether a single record passes all five clauses.
    pub fn matches(&self, record: &Record) -> bool {
        if let Some(sp) = self.species {
            if record.species != sp {
                return false;
            }
        }
        Feature::ALL
            .iter()
            .all(|&f| self.range(f).contains(record.value(f)))
    }
}

// ---------------------------------------------------------------------------
// FilteredView – the rows passing the predicate
// ---------------------------------------------------------------------------

/// Borrowed subset of a [`Dataset`], in original row order.
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    dataset: &'a Dataset,
    indices: Vec<usize>,
}

impl<'a> FilteredView<'a> {
    /// A view containing every row.
    pub fn all(dataset: &'a Dataset) -> Self {
        Self {
            dataset,
            indices: (0..dataset.len()).collect(),
        }
    }

    /// Dataset row indices, ascending.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn records(&self) -> impl Iterator<Item = &'a Record> + '_ {
        let records = self.dataset.records();
        self.indices.iter().map(move |&i| &records[i])
    }

    /// Values of one feature across the view.
    pub fn column(&self, feature: Feature) -> Vec<f64> {
        self.records().map(|r| r.value(feature)).collect()
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Return the rows of `dataset` that pass every clause of `criteria`.
pub fn apply_filters<'a>(
    dataset: &'a Dataset,
    criteria: &FilterCriteria,
) -> Result<FilteredView<'a>> {
    criteria.validate()?;

    let indices: Vec<usize> = dataset
        .records()
        .iter()
        .enumerate()
        .filter(|(_, rec)| criteria.matches(rec))
        .map(|(i, _)| i)
        .collect();

    log::debug!(
        "Filter {:?} kept {} of {} rows",
        criteria.species,
        indices.len(),
        dataset.len()
    );
    Ok(FilteredView { dataset, indices })
}
