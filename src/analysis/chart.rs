use super::error::AnalysisError;
use super::sample::season_sample;
use super::stats::SeasonBounds;
use crate::data::filter::{YearFilter, season_year_rows};
use crate::data::model::TemperatureDataset;

/// Everything the plot needs for one (city, season, year) view.
///
/// Points are placed at their position in the subset (x = 0, 1, 2, ...) and
/// `labels[i]` is the raw timestamp of point `i`. The reference lines come
/// from the whole seasonal history, not only the plotted year.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonChart {
    pub title: String,
    pub points: Vec<[f64; 2]>,
    pub labels: Vec<String>,
    pub bounds: SeasonBounds,
}

impl SeasonChart {
    /// Timestamp shown under tick `x`, if `x` lands on a point.
    pub fn label_at(&self, x: f64) -> Option<&str> {
        if x < 0.0 || x.fract() != 0.0 {
            return None;
        }
        self.labels.get(x as usize).map(String::as_str)
    }
}

pub fn season_chart(
    dataset: &TemperatureDataset,
    city: &str,
    season: &str,
    year: &str,
) -> Result<SeasonChart, AnalysisError> {
    let bounds = season_sample(dataset, city, season)?.bounds();

    let filter = YearFilter::Contains(year.to_string());
    let (labels, points): (Vec<String>, Vec<[f64; 2]>) =
        season_year_rows(dataset, city, season, &filter)
            .filter(|r| r.temperature.is_finite())
            .enumerate()
            .map(|(i, r)| (r.timestamp.clone(), [i as f64, r.temperature]))
            .unzip();

    Ok(SeasonChart {
        title: format!("Temperature in {city}, season {season}, {year}"),
        points,
        labels,
        bounds,
    })
}
