use log::{info, warn};

use crate::analysis::AnalysisError;
use crate::color::SeasonPalette;
use crate::config::DashboardConfig;
use crate::dashboard::{DashboardReport, build_report};
use crate::data::model::TemperatureDataset;
use crate::weather::{CurrentReading, FetchError, TemperatureSource};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// What the last press of "Submit" produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Report(DashboardReport),
    /// The weather service (or the network) refused; shown verbatim.
    FetchFailed { city: String, error: FetchError },
    /// A reading arrived but the history has no rows to compare it with.
    AnalysisFailed {
        city: String,
        reading: f64,
        error: AnalysisError,
    },
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until user loads a file).
    pub dataset: Option<TemperatureDataset>,

    /// Fixed session parameters.
    pub config: DashboardConfig,

    /// City chosen in the selector.
    pub selected_city: Option<String>,

    /// API key typed by the user; lives only as long as the session.
    pub api_key: String,

    /// Result of the last submit.
    pub outcome: Option<Outcome>,

    /// Colours for season labels of the loaded dataset.
    pub palette: SeasonPalette,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            config: DashboardConfig::default(),
            selected_city: None,
            api_key: String::new(),
            outcome: None,
            palette: SeasonPalette::default(),
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset: pick the first city, rebuild colours.
    pub fn set_dataset(&mut self, dataset: TemperatureDataset) {
        self.selected_city = dataset.cities().first().cloned();
        self.palette = SeasonPalette::new(dataset.records().iter().map(|r| r.season.as_str()));
        self.outcome = None;

        self.status_message = if dataset.is_empty() {
            warn!("loaded file has no rows");
            Some("The file has no temperature rows.".to_string())
        } else {
            None
        };
        self.dataset = Some(dataset);
    }

    /// Change the selected city; the previous result no longer applies.
    pub fn select_city(&mut self, city: String) {
        if self.selected_city.as_deref() != Some(city.as_str()) {
            self.outcome = None;
        }
        self.selected_city = Some(city);
    }

    /// Fetch the live reading for the selected city and, if it is a
    /// temperature, analyse it against the history.
    pub fn submit(&mut self, source: &dyn TemperatureSource) {
        let (Some(dataset), Some(city)) = (&self.dataset, self.selected_city.clone()) else {
            self.status_message = Some("Load a CSV file and select a city first.".to_string());
            return;
        };
        self.status_message = None;

        let outcome = match source.current_temperature(&city, &self.api_key) {
            CurrentReading::Temperature(reading) => {
                match build_report(dataset, &city, &self.config, reading) {
                    Ok(report) => {
                        info!(
                            "{city}: {reading}°C, anomaly={}",
                            report.verdict.is_anomaly
                        );
                        Outcome::Report(report)
                    }
                    Err(error) => {
                        warn!("{city}: {error}");
                        Outcome::AnalysisFailed {
                            city,
                            reading,
                            error,
                        }
                    }
                }
            }
            CurrentReading::FetchError(error) => Outcome::FetchFailed { city, error },
        };
        self.outcome = Some(outcome);
    }
}
