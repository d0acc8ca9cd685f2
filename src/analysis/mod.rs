//! Statistics over a loaded [`TemperatureDataset`](crate::data::model::TemperatureDataset).
//!
//! Every function here is pure: the dataset is borrowed, nothing is cached,
//! and each query recomputes from the rows.
//!
//! ```text
//!   dataset + city + season
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  sample   │  temperatures of one (city, season) pair
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  anomaly  │  reading outside mean ± σ ?
//!   └──────────┘
//!
//!   summary  – extremes, spring mean, sub/above-zero days for a year
//!   profile  – mean and σ per season
//!   chart    – series + reference lines handed to the plot
//! ```

pub mod anomaly;
pub mod chart;
pub mod error;
pub mod profile;
pub mod sample;
pub mod stats;
pub mod summary;

pub use error::AnalysisError;
