use std::sync::OnceLock;

use serde::Deserialize;

use super::error::{DataError, Result};
use super::model::{Dataset, Record, Species};

/// The canonical Iris table, embedded at compile time.
const IRIS_CSV: &str = include_str!("../../assets/iris.csv");

static DATASET: OnceLock<Dataset> = OnceLock::new();

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the bundled dataset. Parsed on the first call, cached afterwards.
pub fn load() -> Result<&'static Dataset> {
    if let Some(ds) = DATASET.get() {
        return Ok(ds);
    }
    let parsed = parse_csv(IRIS_CSV)?;
    log::info!("Loaded {} records with species {:?}", parsed.len(), parsed.species());
    Ok(DATASET.get_or_init(|| parsed))
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// One CSV row before validation. Header:
/// `sepal_length,sepal_width,petal_length,petal_width,species`
#[derive(Debug, Deserialize)]
struct RawRow {
    sepal_length: f64,
    sepal_width: f64,
    petal_length: f64,
    petal_width: f64,
    species: String,
}

/// Parse CSV text into a [`Dataset`]. Rows are numbered from 1 in errors.
pub fn parse_csv(text: &str) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut records = Vec::new();
    for (i, result) in reader.deserialize::<RawRow>().enumerate() {
        let row = i + 1;
        let raw = result.map_err(|e| {
            let malformed_row = matches!(
                e.kind(),
                csv::ErrorKind::Deserialize { .. } | csv::ErrorKind::UnequalLengths { .. }
            );
            if malformed_row {
                DataError::Load {
                    row,
                    reason: e.to_string(),
                }
            } else {
                DataError::Csv(e)
            }
        })?;
        records.push(validate_row(raw, row)?);
    }

    let dataset = Dataset::from_records(records);
    if dataset.is_empty() {
        return Err(DataError::EmptySource);
    }
    Ok(dataset)
}

fn validate_row(raw: RawRow, row: usize) -> Result<Record> {
    let species: Species = raw
        .species
        .parse()
        .map_err(|reason| DataError::Load { row, reason })?;

    let values = [
        raw.sepal_length,
        raw.sepal_width,
        raw.petal_length,
        raw.petal_width,
    ];
    if let Some(bad) = values.iter().find(|v| !v.is_finite() || **v <= 0.0) {
        return Err(DataError::Load {
            row,
            reason: format!("measurement {bad} is not a positive number"),
        });
    }

    Ok(Record::new(values, species))
}
