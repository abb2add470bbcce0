/// Data layer: core types, loading, filtering and summaries.
///
/// Architecture:
/// ```text
///   assets/iris.csv (embedded)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse once → &'static Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  FilterCriteria → FilteredView (row indices)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  summary  │  describe / correlate / count / histogram
///   └──────────┘
/// ```

pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod stats;
pub mod summary;
