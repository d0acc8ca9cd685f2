use log::debug;

use crate::analysis::AnalysisError;
use crate::analysis::anomaly::{AnomalyVerdict, assess};
use crate::analysis::chart::{SeasonChart, season_chart};
use crate::analysis::profile::{SeasonalProfile, aggregate_profiles};
use crate::analysis::sample::season_sample;
use crate::analysis::summary::{SummaryReport, summarize};
use crate::config::DashboardConfig;
use crate::data::model::TemperatureDataset;

// ---------------------------------------------------------------------------
// One pass of the dashboard
// ---------------------------------------------------------------------------

/// Everything rendered after a successful weather lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardReport {
    pub city: String,
    pub season: String,
    pub year: String,
    pub verdict: AnomalyVerdict,
    pub summary: SummaryReport,
    pub profile: SeasonalProfile,
    pub chart: SeasonChart,
}

impl DashboardReport {
    pub fn reading(&self) -> f64 {
        self.verdict.reading
    }

    pub fn reading_line(&self) -> String {
        format!("Current temperature in {}: {}°C.", self.city, self.reading())
    }

    /// The summary as display lines, one figure per line.
    pub fn summary_lines(&self) -> Vec<String> {
        let s = &self.summary;
        let spring = match s.spring_mean {
            Some(mean) => format!("{mean:.2}°C"),
            None => "n/a".to_string(),
        };
        vec![
            format!("Minimum temperature: {}°C (date: {})", s.min_temperature, s.min_date),
            format!("Maximum temperature: {}°C (date: {})", s.max_temperature, s.max_date),
            format!("Mean spring temperature: {spring}"),
            format!("Days below zero in {}: {}", self.year, s.below_zero_count),
            format!("Days above zero in {}: {}", self.year, s.above_zero_count),
        ]
    }

    pub fn anomaly_answer(&self) -> String {
        let answer = if self.verdict.is_anomaly { "Yes" } else { "No" };
        format!(
            "Is the current temperature in {} an anomaly?\nAnswer: {answer}",
            self.city
        )
    }
}

/// Run sample → anomaly → summary → profile → chart for `city`, using the
/// season and year of `config` and a reading already fetched by the caller.
pub fn build_report(
    dataset: &TemperatureDataset,
    city: &str,
    config: &DashboardConfig,
    reading: f64,
) -> Result<DashboardReport, AnalysisError> {
    let sample = season_sample(dataset, city, &config.season)?;
    let verdict = assess(&sample, reading);
    let summary = summarize(dataset, city, &config.year)?;
    let profile = aggregate_profiles(dataset, city);
    let chart = season_chart(dataset, city, &config.season, &config.year)?;
    debug!(
        "report for {city}: anomaly={}, {} seasons, {} chart points",
        verdict.is_anomaly,
        profile.len(),
        chart.points.len()
    );

    Ok(DashboardReport {
        city: city.to_string(),
        season: config.season.clone(),
        year: config.year.clone(),
        verdict,
        summary,
        profile,
        chart,
    })
}
