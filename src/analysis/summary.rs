use log::debug;

use super::error::AnalysisError;
use super::stats;
use crate::data::filter::{YearFilter, city_rows};
use crate::data::model::{SPRING, TemperatureDataset, TemperatureRecord};

/// Headline figures for one city.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryReport {
    pub city: String,
    pub min_temperature: f64,
    /// Timestamp of the first row holding the minimum.
    pub min_date: String,
    pub max_temperature: f64,
    /// Timestamp of the first row holding the maximum.
    pub max_date: String,
    /// Mean over every spring row of the city, any year. `None` without spring rows.
    pub spring_mean: Option<f64>,
    /// Rows below 0 °C whose timestamp passes the year filter.
    pub below_zero_count: usize,
    /// Rows above 0 °C whose timestamp passes the year filter.
    pub above_zero_count: usize,
}

/// Summarise `city`, counting frost and thaw days for rows whose timestamp
/// text contains `year`.
///
/// The year match is a plain substring test: `"19"` also matches
/// `"2019-07-01"` and `"2001-01-19"`. Use [`summarize_with`] and
/// [`YearFilter::Calendar`] for an exact calendar year.
pub fn summarize(
    dataset: &TemperatureDataset,
    city: &str,
    year: &str,
) -> Result<SummaryReport, AnalysisError> {
    summarize_with(dataset, city, &YearFilter::Contains(year.to_string()))
}

pub fn summarize_with(
    dataset: &TemperatureDataset,
    city: &str,
    year: &YearFilter,
) -> Result<SummaryReport, AnalysisError> {
    let rows: Vec<&TemperatureRecord> = city_rows(dataset, city).collect();

    let (Some(min), Some(max)) = (
        first_extreme(&rows, |candidate, best| candidate < best),
        first_extreme(&rows, |candidate, best| candidate > best),
    ) else {
        return Err(AnalysisError::UnknownCity {
            city: city.to_string(),
        });
    };

    let spring: Vec<f64> = rows
        .iter()
        .filter(|r| r.season == SPRING)
        .map(|r| r.temperature)
        .filter(|t| t.is_finite())
        .collect();

    let in_year = || rows.iter().filter(|r| year.matches(r));
    let below_zero_count = in_year().filter(|r| r.temperature < 0.0).count();
    let above_zero_count = in_year().filter(|r| r.temperature > 0.0).count();

    debug!(
        "summary {city}: {} rows, {} spring rows, year {year:?}: {below_zero_count} below / {above_zero_count} above zero",
        rows.len(),
        spring.len()
    );

    Ok(SummaryReport {
        city: city.to_string(),
        min_temperature: min.temperature,
        min_date: min.timestamp.clone(),
        max_temperature: max.temperature,
        max_date: max.timestamp.clone(),
        spring_mean: stats::mean(&spring),
        below_zero_count,
        above_zero_count,
    })
}

/// First row whose temperature beats every earlier one under `better`.
/// Ties keep the earlier row. Non-finite temperatures never win.
fn first_extreme<'a>(
    rows: &[&'a TemperatureRecord],
    better: impl Fn(f64, f64) -> bool,
) -> Option<&'a TemperatureRecord> {
    let mut best: Option<&TemperatureRecord> = None;
    for &row in rows {
        if !row.temperature.is_finite() {
            continue;
        }
        match best {
            Some(current) if !better(row.temperature, current.temperature) => {}
            _ => best = Some(row),
        }
    }
    best
}
