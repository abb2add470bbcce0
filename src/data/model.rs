use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Feature – one of the four numeric columns
// ---------------------------------------------------------------------------

/// The four numeric measurements, in canonical column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Feature {
    SepalLength,
    SepalWidth,
    PetalLength,
    PetalWidth,
}

impl Feature {
    pub const ALL: [Feature; 4] = [
        Feature::SepalLength,
        Feature::SepalWidth,
        Feature::PetalLength,
        Feature::PetalWidth,
    ];

    /// Position of the feature inside a [`Record`]'s value array.
    pub fn index(self) -> usize {
        match self {
            Feature::SepalLength => 0,
            Feature::SepalWidth => 1,
            Feature::PetalLength => 2,
            Feature::PetalWidth => 3,
        }
    }

    /// Column label including the unit, as shown in tables and axes.
    pub fn label(self) -> &'static str {
        match self {
            Feature::SepalLength => "sepal length (cm)",
            Feature::SepalWidth => "sepal width (cm)",
            Feature::PetalLength => "petal length (cm)",
            Feature::PetalWidth => "petal width (cm)",
        }
    }

    /// Title-cased label used for slider captions.
    pub fn title(self) -> &'static str {
        match self {
            Feature::SepalLength => "Sepal Length (cm)",
            Feature::SepalWidth => "Sepal Width (cm)",
            Feature::PetalLength => "Petal Length (cm)",
            Feature::PetalWidth => "Petal Width (cm)",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Species – the categorical label
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Species {
    Setosa,
    Versicolor,
    Virginica,
}

impl Species {
    pub const ALL: [Species; 3] = [Species::Setosa, Species::Versicolor, Species::Virginica];

    pub fn name(self) -> &'static str {
        match self {
            Species::Setosa => "setosa",
            Species::Versicolor => "versicolor",
            Species::Virginica => "virginica",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Species {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Species::ALL
            .into_iter()
            .find(|sp| sp.name() == s)
            .ok_or_else(|| format!("unknown species '{s}'"))
    }
}

// ---------------------------------------------------------------------------
// Record – one row
// ---------------------------------------------------------------------------

/// A single observation: four measurements in centimetres plus the label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    /// Measurements in [`Feature::ALL`] order.
    pub values: [f64; 4],
    pub species: Species,
}

impl Record {
    pub fn new(values: [f64; 4], species: Species) -> Self {
        Self { values, species }
    }

    pub fn value(&self, feature: Feature) -> f64 {
        self.values[feature.index()]
    }
}

// ---------------------------------------------------------------------------
// FeatureRange – closed interval on one feature
// ---------------------------------------------------------------------------

/// Closed interval `min <= v <= max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureRange {
    pub min: f64,
    pub max: f64,
}

impl FeatureRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Bounds are finite and ordered.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full table. Immutable once built.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<Record>,
    /// Per-feature global extent, computed once at construction.
    extents: [FeatureRange; 4],
}

impl Dataset {
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut extents = [FeatureRange::new(f64::INFINITY, f64::NEG_INFINITY); 4];
        for rec in &records {
            for (extent, &v) in extents.iter_mut().zip(rec.values.iter()) {
                extent.min = extent.min.min(v);
                extent.max = extent.max.max(v);
            }
        }
        Dataset { records, extents }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Global min/max of a feature over every row.
    pub fn extent(&self, feature: Feature) -> FeatureRange {
        self.extents[feature.index()]
    }

    /// Distinct species in order of first appearance.
    pub fn species(&self) -> Vec<Species> {
        let mut seen = Vec::new();
        for rec in &self.records {
            if !seen.contains(&rec.species) {
                seen.push(rec.species);
            }
        }
        seen
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_species_parse_and_display() {
        for sp in Species::ALL {
            assert_eq!(sp.to_string().parse::<Species>(), Ok(sp));
        }
        assert!("Setosa".parse::<Species>().is_err());
    }

    #[test]
    fn test_feature_indices_follow_column_order() {
        for (i, f) in Feature::ALL.iter().enumerate() {
            assert_eq!(f.index(), i);
        }
    }

    #[test]
    fn test_extent_and_species_order() {
        let ds = Dataset::from_records(vec![
            Record::new([5.0, 3.0, 1.5, 0.2], Species::Virginica),
            Record::new([4.0, 3.5, 1.0, 0.1], Species::Setosa),
            Record::new([6.0, 2.5, 4.0, 1.3], Species::Virginica),
        ]);
        assert_eq!(ds.extent(Feature::SepalLength), FeatureRange::new(4.0, 6.0));
        assert_eq!(ds.extent(Feature::SepalWidth), FeatureRange::new(2.5, 3.5));
        assert_eq!(ds.species(), vec![Species::Virginica, Species::Setosa]);
    }

    #[test]
    fn test_range_is_inclusive() {
        let r = FeatureRange::new(1.0, 2.0);
        assert!(r.contains(1.0));
        assert!(r.contains(2.0));
        assert!(!r.contains(2.0000001));
        assert!(!FeatureRange::new(2.0, 1.0).is_valid());
        assert!(!FeatureRange::new(f64::NAN, 1.0).is_valid());
    }
}
