//! Error types for the data layer.

use thiserror::Error;

use super::model::Feature;

/// Result type alias for data-layer operations.
pub type Result<T> = std::result::Result<T, DataError>;

#[derive(Error, Debug)]
pub enum DataError {
    /// A row of the bundled dataset could not be turned into a record.
    #[error("Failed to load dataset, row {row}: {reason}")]
    Load { row: usize, reason: String },
    /// The source produced no rows at all.
    #[error("Dataset source contains no rows")]
    EmptySource,
    /// The CSV reader itself failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// A range whose bounds are unordered or not finite.
    #[error("Invalid range for {feature}: min {min} is not <= max {max}")]
    InvalidCriteria { feature: Feature, min: f64, max: f64 },
}
