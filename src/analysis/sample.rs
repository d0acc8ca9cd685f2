use log::debug;

use super::error::AnalysisError;
use super::stats::SeasonBounds;
use crate::data::filter::season_rows;
use crate::data::model::TemperatureDataset;

/// Historical temperatures of one (city, season) pair, in dataset order.
/// Never empty and holds only finite values.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonalSample {
    values: Vec<f64>,
}

impl SeasonalSample {
    /// Wrap raw values, dropping NaN and infinities; `None` when nothing
    /// finite is left.
    pub fn from_values(mut values: Vec<f64>) -> Option<Self> {
        values.retain(|v| v.is_finite());
        if values.is_empty() {
            None
        } else {
            Some(Self { values })
        }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Mean and population σ of the sample.
    pub fn bounds(&self) -> SeasonBounds {
        let Some(bounds) = SeasonBounds::from_sample(&self.values) else {
            unreachable!("a seasonal sample is never empty");
        };
        bounds
    }
}

/// Collect the temperatures recorded for `city` during `season`.
///
/// Both labels are matched exactly. Rows without a finite temperature are
/// skipped. A pair with nothing left is [`AnalysisError::NotFound`], never
/// an empty sample.
pub fn season_sample(
    dataset: &TemperatureDataset,
    city: &str,
    season: &str,
) -> Result<SeasonalSample, AnalysisError> {
    let values: Vec<f64> = season_rows(dataset, city, season)
        .map(|r| r.temperature)
        .collect();
    debug!("season sample {city}/{season}: {} values", values.len());

    SeasonalSample::from_values(values).ok_or_else(|| AnalysisError::NotFound {
        city: city.to_string(),
        season: season.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::TemperatureRecord;

    fn dataset() -> TemperatureDataset {
        TemperatureDataset::from_records(vec![
            TemperatureRecord::new("Moscow", "spring", "2019-03-01", 4.0),
            TemperatureRecord::new("Moscow", "winter", "2019-01-01", -9.0),
            TemperatureRecord::new("Berlin", "spring", "2019-03-01", 9.0),
            TemperatureRecord::new("Moscow", "spring", "2019-03-02", 2.0),
        ])
    }

    #[test]
    fn returns_matching_temperatures_in_order() {
        let sample = season_sample(&dataset(), "Moscow", "spring").unwrap();
        assert_eq!(sample.values(), [4.0, 2.0]);
    }

    #[test]
    fn absent_pair_is_not_found() {
        let err = season_sample(&dataset(), "Berlin", "winter").unwrap_err();
        assert_eq!(
            err,
            AnalysisError::NotFound {
                city: "Berlin".into(),
                season: "winter".into()
            }
        );
        assert!(season_sample(&dataset(), "Moscow", "Spring").is_err());
    }

    #[test]
    fn nan_rows_are_left_out_of_the_sample() {
        let ds = TemperatureDataset::from_records(vec![
            TemperatureRecord::new("Oslo", "spring", "2019-03-01", 4.0),
            TemperatureRecord::new("Oslo", "spring", "2019-03-02", f64::NAN),
            TemperatureRecord::new("Oslo", "spring", "2019-03-03", 6.0),
            TemperatureRecord::new("Oslo", "winter", "2019-01-01", f64::NAN),
        ]);
        let sample = season_sample(&ds, "Oslo", "spring").unwrap();
        assert_eq!(sample.values(), [4.0, 6.0]);

        let bounds = sample.bounds();
        assert_eq!((bounds.mean, bounds.std_dev), (5.0, 1.0));
        assert_eq!((bounds.lower, bounds.upper), (4.0, 6.0));

        assert!(matches!(
            season_sample(&ds, "Oslo", "winter"),
            Err(AnalysisError::NotFound { .. })
        ));
    }

    #[test]
    fn from_values_drops_non_finite_values() {
        let sample = SeasonalSample::from_values(vec![f64::INFINITY, 3.0, f64::NAN]).unwrap();
        assert_eq!(sample.values(), [3.0]);
        assert!(SeasonalSample::from_values(vec![f64::NAN]).is_none());
    }
}
