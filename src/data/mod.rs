/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → TemperatureDataset
///   └──────────┘
///        │
///        ▼
///   ┌────────────────────┐
///   │ TemperatureDataset  │  Vec<TemperatureRecord>, city index
///   └────────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  city / season / year predicates → matching rows
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod filter;
