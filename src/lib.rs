pub mod analysis;
pub mod color;
pub mod config;
pub mod dashboard;
pub mod data;
pub mod state;
pub mod ui;
pub mod weather;

// Re-export public API
pub use analysis::AnalysisError;
pub use analysis::anomaly::{AnomalyVerdict, assess, detect_anomaly};
pub use analysis::profile::{SeasonStats, SeasonalProfile, aggregate_profiles};
pub use analysis::sample::{SeasonalSample, season_sample};
pub use analysis::summary::{SummaryReport, summarize, summarize_with};
pub use config::DashboardConfig;
pub use dashboard::{DashboardReport, build_report};
pub use data::filter::YearFilter;
pub use data::loader::load_file;
pub use data::model::{TemperatureDataset, TemperatureRecord};
pub use weather::{CurrentReading, FetchError, OpenWeatherMap, TemperatureSource};
