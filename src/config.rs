use std::time::Duration;

use crate::data::model::SPRING;

// ---------------------------------------------------------------------------
// Session parameters
// ---------------------------------------------------------------------------

/// Fixed parameters of a dashboard session.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Season the live reading is compared against.
    pub season: String,
    /// Year text used by the summary counts and the chart (substring match).
    pub year: String,
    /// Current-weather endpoint.
    pub endpoint: String,
    pub units: String,
    pub lang: String,
    /// Upper bound on the weather request; `None` waits indefinitely.
    pub request_timeout: Option<Duration>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            season: SPRING.to_string(),
            year: "2019".to_string(),
            endpoint: "https://api.openweathermap.org/data/2.5/weather".to_string(),
            units: "metric".to_string(),
            lang: "ru".to_string(),
            request_timeout: Some(Duration::from_secs(10)),
        }
    }
}
